use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Travel company bulk reservation, `POST /api/reservations/block-booking`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockBookingRequest {
    pub travel_company_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub number_of_rooms: u32,
    pub discounted_rate: f64,
}

impl BlockBookingRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.travel_company_name.trim().is_empty() {
            return Err("Travel company name is required".into());
        }
        if self.number_of_rooms < 1 {
            return Err("Number of rooms must be at least 1".into());
        }
        if !self.discounted_rate.is_finite() || self.discounted_rate < 0.0 {
            return Err("Discounted rate cannot be negative".into());
        }
        if self.start_date >= self.end_date {
            return Err("End date must be after start date".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> BlockBookingRequest {
        BlockBookingRequest {
            travel_company_name: "Blue Horizon Tours".into(),
            start_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
            number_of_rooms: 8,
            discounted_rate: 12.5,
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request().validate().is_ok());
        let json = serde_json::to_value(request()).unwrap();
        assert_eq!(json["travelCompanyName"], "Blue Horizon Tours");
        assert_eq!(json["numberOfRooms"], 8);
        assert_eq!(json["startDate"], "2025-03-01");
    }

    #[test]
    fn test_rules() {
        let mut r = request();
        r.number_of_rooms = 0;
        assert_eq!(r.validate().unwrap_err(), "Number of rooms must be at least 1");

        let mut r = request();
        r.discounted_rate = -0.5;
        assert_eq!(r.validate().unwrap_err(), "Discounted rate cannot be negative");

        let mut r = request();
        r.end_date = r.start_date;
        assert_eq!(r.validate().unwrap_err(), "End date must be after start date");
    }
}
