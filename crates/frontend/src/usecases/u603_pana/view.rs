use super::api::{family_rule_for, PanaApi};
use crate::shared::components::PageHeader;
use crate::shared::config::AppConfig;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_USECASE};
use crate::shared::scs::ui::{ConfirmDialog, ErrorNotice, SelectionGrid, SubmitBar};
use crate::shared::scs::{ScsConfig, ScsViewModel};
use contracts::enums::PanaKind;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u603_pana::PanaGame;
use leptos::prelude::*;
use std::rc::Rc;

/// One page per pana family; switching family mounts a fresh page
#[component]
pub fn PanaPage(kind: PanaKind) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let vm = ScsViewModel::new(
        ScsConfig::multi()
            .with_rule(family_rule_for(kind))
            .with_timeout(config.submission.timeout()),
        Rc::new(PanaApi::new(&config, kind)),
    );
    let full_name = format!("{}_{}", PanaGame::full_name(), kind.code());

    view! {
        <PageFrame page_id=page_id(&full_name, PAGE_CAT_USECASE) category=PAGE_CAT_USECASE>
            <PageHeader
                title=kind.display_name()
                subtitle=PanaGame::description().to_string()
            >
                <span class="page-header__badge">{format!("{} panas", kind.catalog().len())}</span>
            </PageHeader>
            <div class="page__content">
                <SelectionGrid vm=vm labels=kind.catalog() columns=10 />
                <SubmitBar vm=vm submit_label="Place bids" />
            </div>
            <ConfirmDialog vm=vm title=format!("Confirm {}", kind.display_name()) />
            <ErrorNotice vm=vm />
        </PageFrame>
    }
}
