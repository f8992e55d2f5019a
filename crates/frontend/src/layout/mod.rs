pub mod global_context;
pub mod registry;
pub mod sidebar;

use global_context::AppGlobalContext;
use leptos::prelude::*;
use sidebar::Sidebar;

/// Application shell: sidebar on the left, the active page in the center
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    view! {
        <div class="app-layout">
            <div class="app-body">
                <aside class="app-sidebar">
                    <Sidebar />
                </aside>
                <main class="app-main">
                    {move || registry::render_page(&ctx.active.get())}
                </main>
            </div>
        </div>
    }
}
