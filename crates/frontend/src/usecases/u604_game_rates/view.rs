use super::api::{rate_fields, rate_label, GameRatesApi};
use crate::shared::components::ui::Input;
use crate::shared::components::PageHeader;
use crate::shared::config::AppConfig;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_SETTINGS};
use crate::shared::scs::ui::{ConfirmDialog, ErrorNotice, SubmitBar};
use crate::shared::scs::{ScsConfig, ScsViewModel};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u604_game_rates::GameRatesForm;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn GameRatesPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let fields = rate_fields(&config.rates);
    let vm = ScsViewModel::new(
        ScsConfig::structured(fields.clone()).with_timeout(config.submission.timeout()),
        Rc::new(GameRatesApi::new(&config)),
    );

    view! {
        <PageFrame
            page_id=page_id(&GameRatesForm::full_name(), PAGE_CAT_SETTINGS)
            category=PAGE_CAT_SETTINGS
        >
            <PageHeader
                title=GameRatesForm::display_name()
                subtitle=GameRatesForm::description().to_string()
            />
            <div class="page__content">
                <div class="rates-form">
                    {fields
                        .into_iter()
                        .map(|field| {
                            let key = field.key.clone();
                            let key_for_input = field.key.clone();
                            view! {
                                <Input
                                    id=format!("rate-{}", field.key)
                                    label=field.label
                                    input_type="number".to_string()
                                    value=Signal::derive(move || vm.field_value(&key))
                                    on_input=Callback::new(move |v: String| {
                                        vm.set_field_command(key_for_input.clone(), v)
                                    })
                                    disabled=Signal::derive(move || vm.is_busy())
                                />
                            }
                        })
                        .collect_view()}
                </div>
                <SubmitBar vm=vm submit_label="Save rates" />
            </div>
            <ConfirmDialog vm=vm title="Confirm game rates" field_label=rate_label />
            <ErrorNotice vm=vm />
        </PageFrame>
    }
}
