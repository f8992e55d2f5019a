use super::api::JodiDigitApi;
use crate::shared::components::PageHeader;
use crate::shared::config::AppConfig;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_USECASE};
use crate::shared::scs::ui::{ConfirmDialog, ErrorNotice, SelectionGrid, SubmitBar};
use crate::shared::scs::{ScsConfig, ScsViewModel};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u602_jodi_digit::{jodi_digits, JodiDigitGame};
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn JodiDigitPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let vm = ScsViewModel::new(
        ScsConfig::multi().with_timeout(config.submission.timeout()),
        Rc::new(JodiDigitApi::new(&config)),
    );

    view! {
        <PageFrame
            page_id=page_id(&JodiDigitGame::full_name(), PAGE_CAT_USECASE)
            category=PAGE_CAT_USECASE
        >
            <PageHeader
                title=JodiDigitGame::display_name()
                subtitle=JodiDigitGame::description().to_string()
            />
            <div class="page__content">
                <SelectionGrid vm=vm labels=jodi_digits() columns=10 />
                <SubmitBar vm=vm submit_label="Place bids" />
            </div>
            <ConfirmDialog vm=vm title="Confirm jodi digits" />
            <ErrorNotice vm=vm />
        </PageFrame>
    }
}
