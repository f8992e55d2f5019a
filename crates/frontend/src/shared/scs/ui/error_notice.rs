use crate::shared::modal::Modal;
use crate::shared::scs::{ErrorKind, ScsViewModel};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

/// Blocking notice for the active error; stays until the user acknowledges it
#[component]
pub fn ErrorNotice(vm: ScsViewModel) -> impl IntoView {
    let acknowledge = Callback::new(move |_: ()| vm.acknowledge_command());

    move || {
        vm.error().map(|record| {
            let title = match record.kind {
                ErrorKind::Validation => "Check your selection",
                ErrorKind::Submission => "Submission failed",
            };
            view! {
                <Modal title=title on_close=acknowledge>
                    <p class="scs-error">{record.message}</p>
                    <div class="modal-footer">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| acknowledge.run(())
                        >
                            "OK"
                        </Button>
                    </div>
                </Modal>
            }
        })
    }
}
