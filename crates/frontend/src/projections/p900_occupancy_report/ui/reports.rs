use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::projections::p900_occupancy_report::api::{self, ReportPanel, ReportTab};
use crate::shared::components::LoadingOverlay;
use crate::shared::date_utils::format_money;
use crate::shared::orchestrator::use_orchestrator;
use crate::shared::panel::EntityPanel;

/// Occupancy and revenue for a chosen day
#[component]
pub fn Reports() -> impl IntoView {
    let orchestrator = use_orchestrator();
    let panel = RwSignal::new(EntityPanel::<ReportPanel>::new());
    let error = RwSignal::new(Option::<String>::None);
    let tab = ReportTab::Generate;

    on_cleanup(move || {
        panel.try_update_untracked(|p| p.teardown());
    });

    let date = Signal::derive(move || panel.with(|p| p.field(tab, "date")));
    let loading = Signal::derive(move || panel.with(|p| p.is_loading()));
    let summary = Signal::derive(move || panel.with(|p| p.rows().first().cloned()));

    let fetch_reports = move |_| {
        error.set(None);
        let orchestrator = orchestrator.clone();
        spawn_local(async move {
            if let Err(e) = api::generate(&orchestrator, &panel).await {
                error.try_set(api::failure_text(&e));
            }
        });
    };

    view! {
        <div class="report-container">
            <LoadingOverlay active=loading />
            <h2>"Generate Reports"</h2>

            <div class="report-container__input">
                <label class="form__label" for="report-date">"Select Date:"</label>
                <input
                    id="report-date"
                    type="date"
                    class="form__input"
                    prop:value=move || date.get()
                    on:input=move |ev| panel.update(|p| p.set_field(tab, "date", event_target_value(&ev)))
                />
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || date.get().is_empty() || loading.get())
                    on_click=fetch_reports
                >
                    "Get Reports"
                </Button>
            </div>

            {move || error.get().map(|message| view! {
                <MessageBar intent=MessageBarIntent::Error>
                    <span class="report-container__error">{message}</span>
                </MessageBar>
            })}

            {move || summary.get().map(|s| view! {
                <div class="report-block">
                    <h3>{format!("Occupancy Report - {}", s.occupancy.date)}</h3>
                    <p>{format!("Total Occupied Rooms: {}", s.occupancy.total_occupancy)}</p>
                </div>
                <div class="report-block">
                    <h3>{format!("Revenue Report - {}", s.revenue.date)}</h3>
                    <p>{format!("Total Revenue: ${}", format_money(s.revenue.total_revenue))}</p>
                </div>
            })}
        </div>
    }
}
