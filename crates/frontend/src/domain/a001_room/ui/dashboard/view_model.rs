//! Room dashboard commands.
//!
//! The async commands are generic over [`PanelHandle`] so they run against
//! the live signal in the browser and against a `RefCell` in tests. The
//! view model only wires them to `spawn_local`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::model::{self, RoomLookup, RoomPanel, RoomTab};
use crate::domain::a001_room::api;
use crate::shared::orchestrator::{use_orchestrator, Action, Orchestrator};
use crate::shared::panel::{run_action, submit_form, EntityPanel, PanelHandle};

/// Reload the room table
pub async fn refresh_rooms(orchestrator: &Orchestrator, panel: &impl PanelHandle<RoomPanel>) {
    if let Ok(rooms) = run_action(orchestrator, panel, api::list_rooms()).await {
        panel.modify(|p| p.set_rows(rooms));
    }
}

/// Successful mutations clear the form and reload the table
async fn after_mutation(
    orchestrator: &Orchestrator,
    panel: &impl PanelHandle<RoomPanel>,
    tab: RoomTab,
    succeeded: bool,
) {
    if succeeded {
        panel.modify(|p| p.reset_form(tab));
        refresh_rooms(orchestrator, panel).await;
    }
}

/// Submit the form of `tab`
pub async fn submit(orchestrator: &Orchestrator, panel: &impl PanelHandle<RoomPanel>, tab: RoomTab) {
    match tab {
        RoomTab::Add => {
            let result = submit_form(orchestrator, panel, tab, model::create_room).await;
            after_mutation(orchestrator, panel, tab, result.is_ok()).await;
        }
        RoomTab::Update => {
            let result = submit_form(orchestrator, panel, tab, model::update_room).await;
            after_mutation(orchestrator, panel, tab, result.is_ok()).await;
        }
        RoomTab::Delete => {
            let result = submit_form(orchestrator, panel, tab, model::delete_room).await;
            after_mutation(orchestrator, panel, tab, result.is_ok()).await;
        }
        RoomTab::View => {
            let Some(form) = panel.inspect(|p| p.form(tab).cloned()).flatten() else {
                return;
            };
            let rooms = match model::lookup_rooms(&form) {
                RoomLookup::All(action) => run_action(orchestrator, panel, action).await,
                RoomLookup::One(action) => run_action(orchestrator, panel, action)
                    .await
                    .map(|room| vec![room]),
            };
            if let Ok(rooms) = rooms {
                panel.modify(|p| p.set_rows(rooms));
            }
        }
        RoomTab::Available => {
            let rooms = submit_form(orchestrator, panel, tab, |form| match model::room_type(form) {
                Ok(room_type) => api::available_rooms(room_type),
                Err(message) => Action::new(Err(message), "Failed to fetch available rooms"),
            })
            .await;
            if let Ok(rooms) = rooms {
                panel.modify(|p| p.set_rows(rooms));
            }
        }
    }
}

#[derive(Clone)]
pub struct RoomDashboardVm {
    pub panel: RwSignal<EntityPanel<RoomPanel>>,
    /// Changes only on tab switch, not on every keystroke
    pub active: Memo<RoomTab>,
    orchestrator: Orchestrator,
}

impl RoomDashboardVm {
    pub fn new() -> Self {
        let panel = RwSignal::new(EntityPanel::<RoomPanel>::new());
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
        let tab = self.panel.with_untracked(|p| p.active());
        let orchestrator = self.orchestrator.clone();
        let panel = self.panel;
        spawn_local(async move {
            submit(&orchestrator, &panel, tab).await;
        });
    }

    pub fn teardown(&self) {
        self.panel.try_update_untracked(|p| p.teardown());
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::shared::notify::NotificationLevel;
    use crate::shared::orchestrator::testing::Harness;
    use futures::executor::block_on;
    use serde_json::json;

    fn room_json(id: i64, number: &str) -> serde_json::Value {
        json!({"id": id, "roomNumber": number, "roomType": "STANDARD",
               "pricePerNight": 80.0, "maxOccupants": 2, "isAvailable": true})
    }

    #[test]
    fn test_add_room_toasts_number_and_resets_form() {
        let h = Harness::signed_in("ADMIN");
        h.transport.reply(201, json!({"roomNumber": "101"}));
        h.transport.reply(200, json!([room_json(1, "101")]));
        let panel = RefCell::new(EntityPanel::<RoomPanel>::new());
        panel.modify(|p| {
            p.set_field(RoomTab::Add, "roomNumber", "101");
            p.set_field(RoomTab::Add, "roomType", "SUITE");
            p.set_field(RoomTab::Add, "pricePerNight", "120");
            p.set_field(RoomTab::Add, "maxOccupants", "2");
        });

        block_on(submit(&h.orchestrator, &panel, RoomTab::Add));

        let messages = h.notifier.messages();
        assert_eq!(messages[0].0, NotificationLevel::Success);
        assert!(messages[0].1.contains("101"));

        let p = panel.borrow();
        assert_eq!(p.field(RoomTab::Add, "roomNumber"), "");
        assert_eq!(p.field(RoomTab::Add, "roomType"), "STANDARD");
        assert_eq!(p.field(RoomTab::Add, "isAvailable"), "true");
        assert_eq!(p.rows().len(), 1);
        assert_eq!(h.transport.last_sent().unwrap().path, "/api/rooms");
    }

    #[test]
    fn test_delete_shows_backend_message_exactly() {
        let h = Harness::signed_in("ADMIN");
        h.transport.reply(404, json!({"message": "Room not found"}));
        let panel = RefCell::new(EntityPanel::<RoomPanel>::new());
        panel.modify(|p| p.set_field(RoomTab::Delete, "id", "99"));

        block_on(submit(&h.orchestrator, &panel, RoomTab::Delete));

        assert_eq!(
            h.notifier.messages(),
            vec![(NotificationLevel::Error, "Room not found".to_string())]
        );
        assert_eq!(h.transport.sent_count(), 1);
        assert_eq!(panel.borrow().field(RoomTab::Delete, "id"), "99");
    }

    #[test]
    fn test_delete_success_names_requested_id() {
        let h = Harness::signed_in("ADMIN");
        h.transport.reply(204, serde_json::Value::Null);
        h.transport.reply(200, json!([]));
        let panel = RefCell::new(EntityPanel::<RoomPanel>::new());
        panel.modify(|p| p.set_field(RoomTab::Delete, "id", "7"));

        block_on(submit(&h.orchestrator, &panel, RoomTab::Delete));

        assert_eq!(
            h.notifier.messages()[0].1,
            "Room 7 deleted successfully"
        );
    }

    #[test]
    fn test_required_field_blocks_request() {
        let h = Harness::signed_in("ADMIN");
        let panel = RefCell::new(EntityPanel::<RoomPanel>::new());

        block_on(submit(&h.orchestrator, &panel, RoomTab::Update));

        assert_eq!(h.transport.sent_count(), 0);
        assert_eq!(
            h.notifier.messages(),
            vec![(NotificationLevel::Error, "Room ID is required".to_string())]
        );
    }

    #[test]
    fn test_view_single_room_by_id() {
        let h = Harness::signed_in("ADMIN");
        h.transport.reply(200, room_json(5, "205"));
        let panel = RefCell::new(EntityPanel::<RoomPanel>::new());
        panel.modify(|p| p.set_field(RoomTab::View, "id", "5"));

        block_on(submit(&h.orchestrator, &panel, RoomTab::View));

        assert_eq!(h.transport.last_sent().unwrap().path, "/api/rooms/5");
        assert_eq!(panel.borrow().rows()[0].room_number, "205");
    }
}
