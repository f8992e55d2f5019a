use crate::shared::icons::icon;
use crate::shared::scs::{ScsViewModel, SelectionMode, SubmissionState};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, MessageBar, MessageBarIntent, Space, SpaceGap};

/// Selection counter, Clear and Submit buttons, and the success banner
#[component]
pub fn SubmitBar(
    vm: ScsViewModel,
    /// Submit button caption
    #[prop(into)]
    submit_label: String,
) -> impl IntoView {
    let is_structured =
        vm.controller.with_untracked(|c| c.selection().mode()) == SelectionMode::Structured;

    view! {
        <div class="scs-submit-bar">
            <Show when=move || vm.last_outcome() == Some(SubmissionState::Succeeded)>
                <MessageBar intent=MessageBarIntent::Success>
                    <span>"Submission accepted"</span>
                    <button class="button button--ghost" on:click=move |_| vm.dismiss_outcome_command()>
                        {icon("x")}
                    </button>
                </MessageBar>
            </Show>

            <Space gap=SpaceGap::Small>
                {(!is_structured).then(|| view! {
                    <span class="scs-submit-bar__counter">
                        "Selected: " {move || vm.size()}
                    </span>
                })}
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| vm.clear_command()
                    disabled=Signal::derive(move || vm.is_busy())
                >
                    {if is_structured { "Reset" } else { "Clear" }}
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.submit_command()
                    disabled=Signal::derive(move || vm.is_busy())
                >
                    {icon("send")}
                    " "
                    {submit_label}
                </Button>
            </Space>
        </div>
    }
}
