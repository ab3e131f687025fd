use leptos::prelude::*;
use leptos::task::spawn_local;

use super::model::{self, TravelPanel, TravelTab};
use crate::shared::orchestrator::{use_orchestrator, Orchestrator};
use crate::shared::panel::{submit_form, EntityPanel, PanelHandle};

/// Create a block booking. On success the form goes back to its defaults,
/// except the rate which is cleared to zero
pub async fn create_booking(orchestrator: &Orchestrator, panel: &impl PanelHandle<TravelPanel>) {
    let tab = TravelTab::CreateBooking;
    if submit_form(orchestrator, panel, tab, model::create_block_booking)
        .await
        .is_ok()
    {
        panel.modify(|p| {
            p.reset_form(tab);
            p.set_field(tab, "discountedRate", model::RATE_AFTER_BOOKING);
        });
    }
}

#[derive(Clone)]
pub struct TravelDashboardVm {
    pub panel: RwSignal<EntityPanel<TravelPanel>>,
    pub active: Memo<TravelTab>,
    orchestrator: Orchestrator,
}

impl TravelDashboardVm {
    pub fn new() -> Self {
        let panel = RwSignal::new(EntityPanel::<TravelPanel>::new());
        Self {
            panel,
            active: Memo::new(move |_| panel.with(|p| p.active())),
            orchestrator: use_orchestrator(),
        }
    }

    pub fn loading(&self) -> Signal<bool> {
        let panel = self.panel;
        Signal::derive(move || panel.with(|p| p.is_loading()))
    }

    pub fn submit_command(&self) {
        let orchestrator = self.orchestrator.clone();
        let panel = self.panel;
        spawn_local(async move {
            create_booking(&orchestrator, &panel).await;
        });
    }

    pub fn teardown(&self) {
        self.panel.try_update_untracked(|p| p.teardown());
    }
}
