use super::api::SingleDigitApi;
use crate::shared::components::PageHeader;
use crate::shared::config::AppConfig;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_USECASE};
use crate::shared::scs::ui::{ConfirmDialog, ErrorNotice, SelectionGrid, SubmitBar};
use crate::shared::scs::{ScsConfig, ScsViewModel};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u601_single_digit::{single_digits, SingleDigitGame};
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn SingleDigitPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let vm = ScsViewModel::new(
        ScsConfig::single().with_timeout(config.submission.timeout()),
        Rc::new(SingleDigitApi::new(&config)),
    );

    view! {
        <PageFrame
            page_id=page_id(&SingleDigitGame::full_name(), PAGE_CAT_USECASE)
            category=PAGE_CAT_USECASE
        >
            <PageHeader
                title=SingleDigitGame::display_name()
                subtitle=SingleDigitGame::description().to_string()
            />
            <div class="page__content">
                <SelectionGrid vm=vm labels=single_digits() columns=5 />
                <SubmitBar vm=vm submit_label="Place bid" />
            </div>
            <ConfirmDialog vm=vm title="Confirm single digit" />
            <ErrorNotice vm=vm />
        </PageFrame>
    }
}
