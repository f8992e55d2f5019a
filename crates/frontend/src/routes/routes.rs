use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    // Runs once when the component is created.
    ctx.init_router_integration();

    view! { <Shell /> }
}
