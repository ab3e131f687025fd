use chrono::NaiveDate;
use contracts::domain::a002_reservation::aggregate::{
    CheckInRequest, CheckOutRequest, Reservation, ReservationDto,
};
use contracts::domain::a003_bill::aggregate::Bill;
use serde::de::IgnoredAny;

use crate::domain::a001_room::api::ROOM_TYPE_OPTIONS;
use crate::shared::forms::{FieldKind, FieldSpec, FormSchema, FormState};
use crate::shared::http::ApiRequest;
use crate::shared::orchestrator::Action;
use crate::shared::panel::EntityPanelSpec;

const RESERVATIONS: &str = "/api/reservations";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservationTab {
    Create,
    Update,
    View,
}

const CUSTOMER_ID: FieldSpec = FieldSpec::new("customerId", "Customer ID", FieldKind::Text)
    .required("Customer ID is required")
    .readonly();
/// Drives the available-rooms query; not part of the payload
const ROOM_TYPE: FieldSpec =
    FieldSpec::new("roomType", "Room Type", FieldKind::Select(ROOM_TYPE_OPTIONS))
        .placeholder("Select Room Type");
const ROOM_ID: FieldSpec = FieldSpec::new("roomId", "Room", FieldKind::DynamicSelect)
    .required("Room selection is required")
    .placeholder("Select a room");
const CHECK_IN: FieldSpec = FieldSpec::new("checkInDate", "Check-In Date", FieldKind::Date)
    .required("Check-in date is required");
const CHECK_OUT: FieldSpec = FieldSpec::new("checkOutDate", "Check-Out Date", FieldKind::Date)
    .required("Check-out date is required");
const OCCUPANTS: FieldSpec = FieldSpec::new(
    "occupants",
    "Occupants",
    FieldKind::Number {
        min: Some(1.0),
        step: None,
    },
);
const CARD: FieldSpec = FieldSpec::new(
    "creditCardDetails",
    "Credit Card Details (Optional)",
    FieldKind::Text,
)
.placeholder("Enter card details for confirmed status");

pub const CREATE_FORM: FormSchema = FormSchema {
    fields: &[CUSTOMER_ID, ROOM_ID, ROOM_TYPE, CHECK_IN, CHECK_OUT, OCCUPANTS, CARD],
};

/// The reservation id is checked after the shared rules, so it carries no
/// `required` message of its own
pub const UPDATE_FORM: FormSchema = FormSchema {
    fields: &[
        FieldSpec::new(
            "reservationId",
            "Reservation ID",
            FieldKind::Number {
                min: Some(1.0),
                step: None,
            },
        ),
        CUSTOMER_ID,
        ROOM_ID,
        ROOM_TYPE,
        CHECK_IN,
        CHECK_OUT,
        OCCUPANTS,
        CARD,
    ],
};

pub struct ReservationPanel;

impl EntityPanelSpec for ReservationPanel {
    type Tab = ReservationTab;
    type Row = Reservation;

    const TABS: &'static [ReservationTab] = &[
        ReservationTab::Create,
        ReservationTab::Update,
        ReservationTab::View,
    ];

    fn label(tab: ReservationTab) -> &'static str {
        match tab {
            ReservationTab::Create => "Create Reservation",
            ReservationTab::Update => "Update Reservation",
            ReservationTab::View => "View Reservations",
        }
    }

    fn schema(tab: ReservationTab) -> Option<&'static FormSchema> {
        match tab {
            ReservationTab::Create => Some(&CREATE_FORM),
            ReservationTab::Update => Some(&UPDATE_FORM),
            ReservationTab::View => None,
        }
    }

    fn preserved_fields() -> &'static [&'static str] {
        &["customerId"]
    }
}

/// Payload of both forms. Occupants are checked with the date rules, so a
/// blank count only fails once the dates pass.
pub fn reservation_dto(form: &FormState, today: NaiveDate) -> Result<ReservationDto, String> {
    let dto = ReservationDto {
        customer_id: form.parse_i64("customerId", "Customer ID is required")?,
        room_id: form.parse_i64("roomId", "Room selection is required")?,
        check_in_date: form.parse_date("checkInDate", "Check-in date is required")?,
        check_out_date: form.parse_date("checkOutDate", "Check-out date is required")?,
        occupants: form.parse_u32("occupants", "").unwrap_or_default(),
        credit_card_details: form.optional_text("creditCardDetails"),
    };
    dto.validate(today)?;
    Ok(dto)
}

pub fn create_reservation(form: &FormState, today: NaiveDate) -> Action<Reservation> {
    let request = form
        .bind(&CREATE_FORM, |f| reservation_dto(f, today))
        .and_then(|dto| ApiRequest::post(RESERVATIONS, &dto));
    Action::new(request, "Failed to create reservation")
        .on_success(|r: &Reservation| format!("Reservation created! ID: {}", r.id))
}

pub fn update_reservation(form: &FormState, today: NaiveDate) -> Action<Reservation> {
    let request = form
        .bind(&UPDATE_FORM, |f| {
            let dto = reservation_dto(f, today)?;
            let id = f.parse_i64("reservationId", "Reservation ID is required for update")?;
            Ok((id, dto))
        })
        .and_then(|(id, dto)| ApiRequest::put(format!("{}/{}", RESERVATIONS, id), &dto));
    Action::new(request, "Failed to update reservation")
        .on_success(|r: &Reservation| format!("Reservation {} updated successfully", r.id))
}

/// Status-gated actions of a reservation row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Cancel(i64),
    CheckIn(i64),
    CheckOut(i64),
}

pub fn cancel_reservation(id: i64) -> Action<IgnoredAny> {
    Action::new(
        Ok(ApiRequest::delete(format!("{}/{}", RESERVATIONS, id))),
        "Failed to cancel reservation",
    )
    .on_success(|_| "Reservation canceled successfully".to_string())
}

pub fn check_in(id: i64) -> Action<Reservation> {
    let request = ApiRequest::post(
        format!("{}/check-in", RESERVATIONS),
        &CheckInRequest { reservation_id: id },
    );
    Action::new(request, "Failed to check in")
        .on_success(|r: &Reservation| format!("Checked in for reservation {}", r.id))
}

/// The amount shown is the one the backend billed
pub fn check_out(id: i64) -> Action<Bill> {
    let request = ApiRequest::post(
        format!("{}/check-out", RESERVATIONS),
        &CheckOutRequest::card(id),
    );
    Action::new(request, "Failed to check out").on_success(|bill: &Bill| {
        format!(
            "Checked out for reservation {}. Amount: ${}",
            bill.reservation_id, bill.amount
        )
    })
}

/// `GET /api/reservations`; the backend returns every reservation
pub fn list_reservations() -> Action<Vec<Reservation>> {
    Action::new(Ok(ApiRequest::get(RESERVATIONS)), "Failed to fetch reservations")
}

pub fn owned_by(reservations: Vec<Reservation>, customer_id: i64) -> Vec<Reservation> {
    reservations
        .into_iter()
        .filter(|r| r.customer_id == customer_id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn filled(schema: &FormSchema) -> FormState {
        let mut form = FormState::from_schema(schema);
        form.set("customerId", "42");
        form.set("roomId", "3");
        form.set("checkInDate", "2025-03-01");
        form.set("checkOutDate", "2025-03-04");
        form.set("occupants", "2");
        form
    }

    #[test]
    fn test_dto_binding() {
        let dto = reservation_dto(&filled(&CREATE_FORM), day(2025, 2, 1)).unwrap();
        assert_eq!(dto.customer_id, 42);
        assert_eq!(dto.room_id, 3);
        assert_eq!(dto.occupants, 2);
        assert_eq!(dto.credit_card_details, None);
    }

    #[test]
    fn test_required_fields_in_order() {
        let mut form = filled(&CREATE_FORM);
        form.set("roomId", "");
        form.set("checkInDate", "");
        assert_eq!(
            form.bind(&CREATE_FORM, |f| reservation_dto(f, day(2025, 2, 1)))
                .unwrap_err(),
            "Room selection is required"
        );
    }

    #[test]
    fn test_blank_occupants_rejected_after_dates() {
        let mut form = filled(&CREATE_FORM);
        form.set("occupants", "");
        assert_eq!(
            reservation_dto(&form, day(2025, 2, 1)).unwrap_err(),
            "Occupants must be at least 1"
        );
        form.set("checkInDate", "2025-01-01");
        assert_eq!(
            reservation_dto(&form, day(2025, 2, 1)).unwrap_err(),
            "Check-in date must be today or in the future"
        );
    }

    #[test]
    fn test_update_checks_reservation_id_last() {
        let mut form = filled(&UPDATE_FORM);
        let action = update_reservation(&form, day(2025, 2, 1));
        assert_eq!(
            action_error(action),
            Some("Reservation ID is required for update".to_string())
        );

        form.set("checkOutDate", "2025-02-20");
        let action = update_reservation(&form, day(2025, 2, 1));
        assert_eq!(
            action_error(action),
            Some("Check-out date must be after check-in date".to_string())
        );
    }

    fn action_error<R>(action: Action<R>) -> Option<String> {
        action.validation_error().map(str::to_string)
    }

    #[test]
    fn test_owned_by_filters_other_customers() {
        let rows = vec![
            Reservation {
                id: 1,
                customer_id: 42,
                ..Default::default()
            },
            Reservation {
                id: 2,
                customer_id: 7,
                ..Default::default()
            },
        ];
        let mine = owned_by(rows, 42);
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].id, 1);
    }
}
