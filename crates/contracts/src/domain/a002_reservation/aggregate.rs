use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a003_bill::aggregate::PaymentMethod;

// ============================================================================
// Status
// ============================================================================

/// Lifecycle state owned by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
    Unknown,
}

impl ReservationStatus {
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Self::Pending,
            "CONFIRMED" => Self::Confirmed,
            "CHECKED_IN" => Self::CheckedIn,
            "CHECKED_OUT" => Self::CheckedOut,
            "CANCELLED" | "CANCELED" => Self::Cancelled,
            _ => Self::Unknown,
        }
    }

    /// Pending and confirmed reservations can still be cancelled
    pub fn can_cancel(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }

    pub fn can_check_in(&self) -> bool {
        matches!(self, Self::Confirmed)
    }

    pub fn can_check_out(&self) -> bool {
        matches!(self, Self::CheckedIn)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Reservation {
    pub id: i64,
    pub room_id: i64,
    pub customer_id: i64,
    pub check_in_date: String,
    pub check_out_date: String,
    pub occupants: u32,
    pub reservation_status: String,
}

impl Reservation {
    pub fn status(&self) -> ReservationStatus {
        ReservationStatus::from_code(&self.reservation_status)
    }
}

// ============================================================================
// DTOs
// ============================================================================

/// Payload for `POST /api/reservations` and `PUT /api/reservations/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDto {
    pub customer_id: i64,
    pub room_id: i64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub occupants: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card_details: Option<String>,
}

impl ReservationDto {
    /// Date and occupancy rules checked before the request leaves the browser
    pub fn validate(&self, today: NaiveDate) -> Result<(), String> {
        if self.check_out_date <= self.check_in_date {
            return Err("Check-out date must be after check-in date".into());
        }
        if self.check_in_date < today {
            return Err("Check-in date must be today or in the future".into());
        }
        if self.occupants < 1 {
            return Err("Occupants must be at least 1".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInRequest {
    pub reservation_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckOutRequest {
    pub reservation_id: i64,
    pub optional_charges: f64,
    pub payment_method: PaymentMethod,
}

impl CheckOutRequest {
    /// Check-out without extras, settled by credit card
    pub fn card(reservation_id: i64) -> Self {
        Self {
            reservation_id,
            optional_charges: 0.0,
            payment_method: PaymentMethod::CreditCard,
        }
    }
}
