use contracts::domain::a001_room::aggregate::{Room, RoomType};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::model::{self, ReservationPanel, ReservationTab, RowAction};
use crate::domain::a001_room::api::available_rooms;
use crate::shared::date_utils::today;
use crate::shared::notify::Notification;
use crate::shared::orchestrator::{use_orchestrator, Orchestrator};
use crate::shared::panel::{run_action, submit_form, EntityPanel, PanelHandle};

pub const MISSING_CUSTOMER_ID: &str = "Error: Customer ID not found in user data";

fn customer_id(panel: &impl PanelHandle<ReservationPanel>) -> Option<i64> {
    panel
        .inspect(|p| p.field(ReservationTab::Create, "customerId"))
        .and_then(|id| id.trim().parse().ok())
}

/// Reload the signed-in customer's reservations
pub async fn refresh_reservations(
    orchestrator: &Orchestrator,
    panel: &impl PanelHandle<ReservationPanel>,
) {
    let Some(customer_id) = customer_id(panel) else {
        return;
    };
    if let Ok(all) = run_action(orchestrator, panel, model::list_reservations()).await {
        panel.modify(|p| p.set_rows(model::owned_by(all, customer_id)));
    }
}

/// Pre-fill the customer identity from the session and load the list
pub async fn init(orchestrator: &Orchestrator, panel: &impl PanelHandle<ReservationPanel>) {
    match orchestrator.session().get_session().and_then(|s| s.customer_id()) {
        Some(id) => {
            panel.modify(|p| p.prefill("customerId", &id.to_string()));
            refresh_reservations(orchestrator, panel).await;
        }
        None => orchestrator.notify(Notification::error(MISSING_CUSTOMER_ID)),
    }
}

/// Opening the list reloads it, so a mount-time fetch cancelled by an
/// earlier tab switch is not lost
pub async fn tab_selected(
    orchestrator: &Orchestrator,
    panel: &impl PanelHandle<ReservationPanel>,
    tab: ReservationTab,
) {
    if tab == ReservationTab::View {
        refresh_reservations(orchestrator, panel).await;
    }
}

/// Rooms of the chosen type for the room selector
pub async fn load_rooms(
    orchestrator: &Orchestrator,
    panel: &impl PanelHandle<ReservationPanel>,
    room_type: &str,
) -> Option<Vec<Room>> {
    let room_type = RoomType::from_code(room_type)?;
    run_action(orchestrator, panel, available_rooms(room_type))
        .await
        .ok()
}

pub async fn submit(
    orchestrator: &Orchestrator,
    panel: &impl PanelHandle<ReservationPanel>,
    tab: ReservationTab,
) {
    let today = today();
    let succeeded = match tab {
        ReservationTab::Create => {
            submit_form(orchestrator, panel, tab, |f| model::create_reservation(f, today))
                .await
                .is_ok()
        }
        ReservationTab::Update => {
            submit_form(orchestrator, panel, tab, |f| model::update_reservation(f, today))
                .await
                .is_ok()
        }
        ReservationTab::View => false,
    };
    if succeeded {
        panel.modify(|p| p.reset_form(tab));
        refresh_reservations(orchestrator, panel).await;
    }
}

pub async fn run_row_action(
    orchestrator: &Orchestrator,
    panel: &impl PanelHandle<ReservationPanel>,
    action: RowAction,
) {
    let succeeded = match action {
        RowAction::Cancel(id) => run_action(orchestrator, panel, model::cancel_reservation(id))
            .await
            .is_ok(),
        RowAction::CheckIn(id) => run_action(orchestrator, panel, model::check_in(id))
            .await
            .is_ok(),
        RowAction::CheckOut(id) => run_action(orchestrator, panel, model::check_out(id))
            .await
            .is_ok(),
    };
    if succeeded {
        refresh_reservations(orchestrator, panel).await;
    }
}

#[derive(Clone)]
pub struct ReservationDashboardVm {
    pub panel: RwSignal<EntityPanel<ReservationPanel>>,
    pub active: Memo<ReservationTab>,
    pub available_rooms: RwSignal<Vec<Room>>,
    orchestrator: Orchestrator,
}

impl ReservationDashboardVm {
    pub fn new() -> Self {
        let panel = RwSignal::new(EntityPanel::<ReservationPanel>::new());
        Self {
            panel,
            active: Memo::new(move |_| panel.with(|p| p.active())),
            available_rooms: RwSignal::new(Vec::new()),
            orchestrator: use_orchestrator(),
        }
    }

    pub fn loading(&self) -> Signal<bool> {
        let panel = self.panel;
        Signal::derive(move || panel.with(|p| p.is_loading()))
    }

    /// `(room id, selector label)` pairs for the room select
    pub fn room_options(&self) -> Signal<Vec<(String, String)>> {
        let rooms = self.available_rooms;
        Signal::derive(move || {
            rooms.with(|rooms| {
                rooms
                    .iter()
                    .map(|r| (r.id.to_string(), r.selector_label()))
                    .collect()
            })
        })
    }

    pub fn init_command(&self) {
        let orchestrator = self.orchestrator.clone();
        let panel = self.panel;
        spawn_local(async move {
            init(&orchestrator, &panel).await;
        });
    }

    pub fn submit_command(&self) {
        let tab = self.panel.with_untracked(|p| p.active());
        let orchestrator = self.orchestrator.clone();
        let panel = self.panel;
        spawn_local(async move {
            submit(&orchestrator, &panel, tab).await;
        });
    }

    pub fn tab_command(&self, tab: ReservationTab) {
        let orchestrator = self.orchestrator.clone();
        let panel = self.panel;
        spawn_local(async move {
            tab_selected(&orchestrator, &panel, tab).await;
        });
    }

    pub fn room_type_changed(&self, room_type: String) {
        let orchestrator = self.orchestrator.clone();
        let panel = self.panel;
        let target = self.available_rooms;
        spawn_local(async move {
            if let Some(rooms) = load_rooms(&orchestrator, &panel, &room_type).await {
                target.try_set(rooms);
            }
        });
    }

    pub fn row_command(&self, action: RowAction) {
        let orchestrator = self.orchestrator.clone();
        let panel = self.panel;
        spawn_local(async move {
            run_row_action(&orchestrator, &panel, action).await;
        });
    }

    pub fn teardown(&self) {
        self.panel.try_update_untracked(|p| p.teardown());
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use contracts::system::auth::{Session, UserInfo};
    use serde_json::json;

    use super::*;
    use crate::shared::notify::NotificationLevel;
    use crate::shared::orchestrator::testing::Harness;
    use futures::executor::block_on;

    const AFTER_CHECK_IN: &str = "Check-out date must be after check-in date";

    fn panel_for(h: &Harness) -> RefCell<EntityPanel<ReservationPanel>> {
        h.transport.reply(200, json!([]));
        let panel = RefCell::new(EntityPanel::new());
        block_on(init(&h.orchestrator, &panel));
        panel
    }

    fn fill(panel: &RefCell<EntityPanel<ReservationPanel>>, tab: ReservationTab) {
        panel.modify(|p| {
            p.set_field(tab, "roomId", "3");
            p.set_field(tab, "checkInDate", "2025-01-10");
            p.set_field(tab, "checkOutDate", "2025-01-05");
            p.set_field(tab, "occupants", "2");
            p.set_field(tab, "reservationId", "8");
        });
    }

    #[test]
    fn test_reversed_dates_rejected_locally_on_create_and_update() {
        let h = Harness::signed_in("CUSTOMER");
        let panel = panel_for(&h);
        let sent = h.transport.sent_count();

        for tab in [ReservationTab::Create, ReservationTab::Update] {
            fill(&panel, tab);
            block_on(submit(&h.orchestrator, &panel, tab));
        }

        assert_eq!(h.transport.sent_count(), sent);
        assert_eq!(
            h.notifier.messages(),
            vec![
                (NotificationLevel::Error, AFTER_CHECK_IN.to_string()),
                (NotificationLevel::Error, AFTER_CHECK_IN.to_string()),
            ]
        );
    }

    #[test]
    fn test_init_prefills_customer_and_filters_list() {
        let h = Harness::signed_in("CUSTOMER");
        h.transport.reply(
            200,
            json!([
                {"id": 1, "roomId": 3, "customerId": 42, "checkInDate": "2025-03-01",
                 "checkOutDate": "2025-03-04", "occupants": 2, "reservationStatus": "PENDING"},
                {"id": 2, "roomId": 4, "customerId": 7, "checkInDate": "2025-03-01",
                 "checkOutDate": "2025-03-04", "occupants": 1, "reservationStatus": "CONFIRMED"}
            ]),
        );
        let panel = RefCell::new(EntityPanel::<ReservationPanel>::new());

        block_on(init(&h.orchestrator, &panel));

        let p = panel.borrow();
        assert_eq!(p.field(ReservationTab::Create, "customerId"), "42");
        assert_eq!(p.field(ReservationTab::Update, "customerId"), "42");
        assert_eq!(p.rows().len(), 1);
        assert_eq!(p.rows()[0].id, 1);
    }

    #[test]
    fn test_list_reloads_when_view_opens_after_cancelled_init() {
        let h = Harness::signed_in("CUSTOMER");
        let panel = RefCell::new(EntityPanel::<ReservationPanel>::new());
        *h.transport.cancel_during_send.lock().unwrap() = Some(panel.borrow().cancel_token());
        h.transport.reply(200, json!([]));

        block_on(init(&h.orchestrator, &panel));
        panel.modify(|p| {
            p.select(ReservationTab::View);
        });
        assert!(panel.borrow().rows().is_empty());

        h.transport.reply(
            200,
            json!([{"id": 4, "roomId": 3, "customerId": 42, "checkInDate": "2025-03-01",
                    "checkOutDate": "2025-03-04", "occupants": 2, "reservationStatus": "PENDING"}]),
        );
        block_on(tab_selected(&h.orchestrator, &panel, ReservationTab::View));

        assert_eq!(h.transport.sent_count(), 2);
        assert_eq!(panel.borrow().rows()[0].id, 4);
        assert!(h.notifier.messages().is_empty());
    }

    #[test]
    fn test_init_without_customer_identity() {
        let session = Session {
            token: "t".into(),
            user: UserInfo {
                id: 0,
                username: "ghost".into(),
                name: None,
                role: "CUSTOMER".into(),
                customer_id: None,
            },
        };
        let h = Harness::new(Some(session));
        let panel = RefCell::new(EntityPanel::<ReservationPanel>::new());

        block_on(init(&h.orchestrator, &panel));

        assert_eq!(h.transport.sent_count(), 0);
        assert_eq!(
            h.notifier.messages(),
            vec![(NotificationLevel::Error, MISSING_CUSTOMER_ID.to_string())]
        );
    }

    #[test]
    fn test_check_out_shows_billed_amount() {
        let h = Harness::signed_in("CUSTOMER");
        let panel = panel_for(&h);
        h.transport.reply(
            200,
            json!({"id": 11, "reservationId": 9, "amount": 412.75, "paymentMethod": "CREDIT_CARD",
                   "billingDate": "2025-03-04", "status": "PAID", "optionalCharges": 0.0}),
        );
        h.transport.reply(200, json!([]));

        block_on(run_row_action(&h.orchestrator, &panel, RowAction::CheckOut(9)));

        assert_eq!(
            h.notifier.messages(),
            vec![(
                NotificationLevel::Success,
                "Checked out for reservation 9. Amount: $412.75".to_string()
            )]
        );
        let sent = h.transport.sent.lock().unwrap();
        let (check_out, _) = &sent[1];
        assert_eq!(check_out.path, "/api/reservations/check-out");
        assert_eq!(
            check_out.body,
            Some(json!({"reservationId": 9, "optionalCharges": 0.0, "paymentMethod": "CREDIT_CARD"}))
        );
    }

    #[test]
    fn test_cancel_refreshes_list() {
        let h = Harness::signed_in("CUSTOMER");
        let panel = panel_for(&h);
        h.transport.reply(200, serde_json::Value::Null);
        h.transport.reply(200, json!([]));

        block_on(run_row_action(&h.orchestrator, &panel, RowAction::Cancel(5)));

        assert_eq!(h.transport.sent_count(), 3);
        assert_eq!(
            h.notifier.messages()[0].1,
            "Reservation canceled successfully"
        );
        assert_eq!(h.transport.last_sent().unwrap().path, "/api/reservations");
    }

    #[test]
    fn test_room_type_change_fetches_available_rooms() {
        let h = Harness::signed_in("CUSTOMER");
        let panel = panel_for(&h);
        h.transport.reply(200, json!([{"id": 3, "roomNumber": "301", "roomType": "SUITE",
                                       "pricePerNight": 150.0, "maxOccupants": 3, "isAvailable": true}]));

        let rooms = block_on(load_rooms(&h.orchestrator, &panel, "SUITE")).unwrap();

        assert_eq!(rooms[0].selector_label(), "301 (SUITE, Max: 3, $150/night)");
        assert!(block_on(load_rooms(&h.orchestrator, &panel, "")).is_none());
    }
}
