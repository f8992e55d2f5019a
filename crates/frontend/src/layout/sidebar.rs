//! Sidebar with grouped page links

use super::global_context::AppGlobalContext;
use super::registry::PAGES;
use crate::shared::icons::icon;
use leptos::prelude::*;

struct MenuGroup {
    label: &'static str,
    prefixes: &'static [&'static str],
}

const MENU_GROUPS: &[MenuGroup] = &[
    MenuGroup {
        label: "Bets",
        prefixes: &["u601", "u602", "u603"],
    },
    MenuGroup {
        label: "Settings",
        prefixes: &["u604"],
    },
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    view! {
        <div class="app-sidebar__content">
            {MENU_GROUPS
                .iter()
                .map(|group| {
                    let items = PAGES
                        .iter()
                        .filter(|(key, _, _)| group.prefixes.iter().any(|p| key.starts_with(p)))
                        .map(|&(key, label, icon_name)| {
                            view! {
                                <div
                                    class="app-sidebar__item"
                                    class:app-sidebar__item--active=move || ctx.is_active(key)
                                    on:click=move |_| ctx.open_page(key)
                                >
                                    <div class="app-sidebar__item-content">
                                        {icon(icon_name)}
                                        <span>{label}</span>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view();
                    view! {
                        <div class="app-sidebar__group">
                            <div class="app-sidebar__group-label">{group.label}</div>
                            {items}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
