use contracts::domain::a004_block_booking::aggregate::BlockBookingRequest;
use serde::de::IgnoredAny;

use crate::shared::forms::{FieldKind, FieldSpec, FormSchema, FormState};
use crate::shared::http::ApiRequest;
use crate::shared::orchestrator::Action;
use crate::shared::panel::EntityPanelSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TravelTab {
    ViewBookings,
    CreateBooking,
    CancelBooking,
}

pub const BOOKING_FORM: FormSchema = FormSchema {
    fields: &[
        FieldSpec::new("travelCompanyName", "Travel Company Name", FieldKind::Text)
            .required("Travel company name is required")
            .placeholder("Enter travel company name"),
        FieldSpec::new("startDate", "Start Date", FieldKind::Date)
            .required("Start date is required"),
        FieldSpec::new("endDate", "End Date", FieldKind::Date).required("End date is required"),
        FieldSpec::new(
            "numberOfRooms",
            "Number of Rooms",
            FieldKind::Number {
                min: Some(1.0),
                step: None,
            },
        )
        .default_value("1")
        .placeholder("Number of Rooms"),
        FieldSpec::new(
            "discountedRate",
            "Discounted Rate",
            FieldKind::Number {
                min: Some(0.0),
                step: Some("0.01"),
            },
        )
        .default_value("10")
        .placeholder("Discounted Rate"),
    ],
};

/// Rate shown once a booking went through; a fresh form starts from the
/// schema default
pub const RATE_AFTER_BOOKING: &str = "0";

pub struct TravelPanel;

impl EntityPanelSpec for TravelPanel {
    type Tab = TravelTab;
    type Row = ();

    const TABS: &'static [TravelTab] = &[
        TravelTab::ViewBookings,
        TravelTab::CreateBooking,
        TravelTab::CancelBooking,
    ];

    fn label(tab: TravelTab) -> &'static str {
        match tab {
            TravelTab::ViewBookings => "View Block Bookings",
            TravelTab::CreateBooking => "Create Block Booking",
            TravelTab::CancelBooking => "Cancel Block Booking",
        }
    }

    fn is_enabled(tab: TravelTab) -> bool {
        tab == TravelTab::CreateBooking
    }

    fn schema(tab: TravelTab) -> Option<&'static FormSchema> {
        match tab {
            TravelTab::CreateBooking => Some(&BOOKING_FORM),
            _ => None,
        }
    }
}

pub fn booking_request(form: &FormState) -> Result<BlockBookingRequest, String> {
    let request = BlockBookingRequest {
        travel_company_name: form.text("travelCompanyName"),
        start_date: form.parse_date("startDate", "Start date is required")?,
        end_date: form.parse_date("endDate", "End date is required")?,
        number_of_rooms: form.parse_u32("numberOfRooms", "").unwrap_or_default(),
        discounted_rate: form.parse_f64("discountedRate", "Discounted rate must be a number")?,
    };
    request.validate()?;
    Ok(request)
}

/// `POST /api/reservations/block-booking`
pub fn create_block_booking(form: &FormState) -> Action<IgnoredAny> {
    let request = form
        .bind(&BOOKING_FORM, booking_request)
        .and_then(|body| ApiRequest::post("/api/reservations/block-booking", &body));
    Action::new(request, "Failed to create block booking")
        .on_success(|_| "Block booking created successfully".to_string())
}
