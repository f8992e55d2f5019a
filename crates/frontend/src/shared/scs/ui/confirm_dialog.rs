use crate::shared::date_utils::format_datetime;
use crate::shared::modal::Modal;
use crate::shared::scs::{ScsViewModel, SelectionMode, SubmissionRequest, SubmissionState};
use contracts::shared::submission::iso_timestamp;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Space, SpaceGap, Spinner};

/// Review dialog for the snapshot taken when the gate opened
///
/// Shown while confirming and kept (read-only, with a spinner) while the
/// confirmed request is in flight.
#[component]
pub fn ConfirmDialog(
    vm: ScsViewModel,
    #[prop(into)]
    title: String,
    /// Display label for a structured field key
    #[prop(optional)]
    field_label: Option<fn(&str) -> String>,
) -> impl IntoView {
    let cancel = Callback::new(move |_: ()| vm.cancel_command());
    let snapshot_id = vm.snapshot_id();

    move || {
        let title = title.clone();
        snapshot_id.get()?;
        vm.snapshot_untracked().map(|snapshot| {
            let submitting = move || vm.state() == SubmissionState::Submitting;
            view! {
                <Modal title=title on_close=cancel>
                    {snapshot_view(&snapshot, field_label)}
                    <div class="modal-footer">
                        <Space gap=SpaceGap::Small>
                            <Show when=submitting>
                                <Spinner />
                            </Show>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| vm.confirm_command()
                                disabled=Signal::derive(submitting)
                            >
                                "Confirm"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| cancel.run(())
                                disabled=Signal::derive(submitting)
                            >
                                "Cancel"
                            </Button>
                        </Space>
                    </div>
                </Modal>
            }
        })
    }
}

fn snapshot_view(snapshot: &SubmissionRequest, field_label: Option<fn(&str) -> String>) -> AnyView {
    let created = format_datetime(&iso_timestamp(snapshot.created_at));
    let body = match snapshot.mode {
        SelectionMode::Structured => {
            let rows = snapshot
                .field_pairs()
                .map(|(key, value)| {
                    let label = field_label.map(|f| f(key)).unwrap_or_else(|| key.to_string());
                    let value = value.to_string();
                    view! {
                        <tr>
                            <td>{label}</td>
                            <td class="scs-confirm__value">{value}</td>
                        </tr>
                    }
                })
                .collect_view();
            view! { <table class="scs-confirm__table"><tbody>{rows}</tbody></table> }.into_any()
        }
        SelectionMode::Single | SelectionMode::Multi => {
            let chips = snapshot
                .item_ids()
                .into_iter()
                .map(|id| view! { <span class="scs-confirm__chip">{id}</span> })
                .collect_view();
            view! {
                <div>
                    <p>{format!("{} selected", snapshot.items.len())}</p>
                    <div class="scs-confirm__chips">{chips}</div>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <div class="scs-confirm">
            {body}
            <p class="scs-confirm__meta">"Prepared at " {created}</p>
        </div>
    }
    .into_any()
}
