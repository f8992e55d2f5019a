use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::config::load_config;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("embedded configuration is invalid: {}", e);
            return view! { <div class="app-error">"Configuration error: " {e.to_string()}</div> }
                .into_any();
        }
    };
    log::info!("API at port {}", config.api.port);

    provide_context(config);
    provide_context(AppGlobalContext::new());

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
    .into_any()
}
