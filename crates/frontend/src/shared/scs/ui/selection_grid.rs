use crate::shared::scs::ScsViewModel;
use leptos::prelude::*;

/// Board of toggle cells (digits, jodi pairs, panas)
///
/// Cells are disabled while the selection is under confirmation or in flight.
#[component]
pub fn SelectionGrid(
    vm: ScsViewModel,
    /// Cell labels; each label is also the item id
    labels: Vec<String>,
    /// Cells per row (default: 10)
    #[prop(optional)]
    columns: Option<usize>,
) -> impl IntoView {
    let columns = columns.unwrap_or(10).max(1);
    let grid_style = format!("grid-template-columns: repeat({columns}, minmax(0, 1fr));");

    view! {
        <div class="scs-grid" style=grid_style>
            {labels
                .into_iter()
                .map(|label| {
                    let id_for_class = label.clone();
                    let id_for_click = label.clone();
                    view! {
                        <button
                            type="button"
                            class=move || {
                                if vm.is_selected(&id_for_class) {
                                    "scs-grid__cell scs-grid__cell--selected"
                                } else {
                                    "scs-grid__cell"
                                }
                            }
                            disabled=move || vm.is_busy()
                            on:click=move |_| vm.toggle_command(id_for_click.clone())
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
