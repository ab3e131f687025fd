use serde::{Deserialize, Serialize};

// ============================================================================
// Room type
// ============================================================================

/// Room category as understood by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomType {
    Standard,
    Suite,
    ResidentialSuite,
}

impl RoomType {
    pub const ALL: [RoomType; 3] = [
        RoomType::Standard,
        RoomType::Suite,
        RoomType::ResidentialSuite,
    ];

    /// Wire code, e.g. `RESIDENTIAL_SUITE`
    pub fn code(&self) -> &'static str {
        match self {
            RoomType::Standard => "STANDARD",
            RoomType::Suite => "SUITE",
            RoomType::ResidentialSuite => "RESIDENTIAL_SUITE",
        }
    }

    /// Human label, e.g. `RESIDENTIAL SUITE`
    pub fn label(&self) -> &'static str {
        match self {
            RoomType::Standard => "STANDARD",
            RoomType::Suite => "SUITE",
            RoomType::ResidentialSuite => "RESIDENTIAL SUITE",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.code().eq_ignore_ascii_case(code))
    }
}

/// Display form of a raw room type code coming from the backend
pub fn room_type_label(code: &str) -> String {
    RoomType::from_code(code)
        .map(|t| t.label().to_string())
        .unwrap_or_else(|| code.replacen('_', " ", 1))
}

// ============================================================================
// Aggregate
// ============================================================================

/// Room as returned by the backend.
///
/// Every field defaults so that partial payloads (e.g. a creation response
/// carrying only `roomNumber`) still decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Room {
    pub id: i64,
    pub room_number: String,
    pub room_type: String,
    pub price_per_night: f64,
    pub max_occupants: u32,
    pub is_available: bool,
}

impl Room {
    /// Option text used by room selectors
    pub fn selector_label(&self) -> String {
        format!(
            "{} ({}, Max: {}, ${}/night)",
            self.room_number,
            room_type_label(&self.room_type),
            self.max_occupants,
            self.price_per_night
        )
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Payload for `POST /api/rooms` and `PUT /api/rooms/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDto {
    pub room_number: String,
    pub room_type: RoomType,
    pub price_per_night: f64,
    pub max_occupants: u32,
    pub is_available: bool,
}

impl RoomDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.room_number.trim().is_empty() {
            return Err("Room number is required".into());
        }
        if !self.price_per_night.is_finite() || self.price_per_night < 0.0 {
            return Err("Price per night cannot be negative".into());
        }
        if self.max_occupants < 1 {
            return Err("Max occupants must be at least 1".into());
        }
        Ok(())
    }
}

/// Query string of `GET /api/rooms/available`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    pub room_type: RoomType,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> RoomDto {
        RoomDto {
            room_number: "101".into(),
            room_type: RoomType::Suite,
            price_per_night: 120.5,
            max_occupants: 2,
            is_available: true,
        }
    }

    #[test]
    fn test_room_type_codes() {
        assert_eq!(RoomType::from_code("suite"), Some(RoomType::Suite));
        assert_eq!(
            RoomType::from_code("RESIDENTIAL_SUITE"),
            Some(RoomType::ResidentialSuite)
        );
        assert_eq!(RoomType::from_code("PENTHOUSE"), None);
        assert_eq!(room_type_label("RESIDENTIAL_SUITE"), "RESIDENTIAL SUITE");
        assert_eq!(room_type_label("DOUBLE_KING_BED"), "DOUBLE KING_BED");
    }

    #[test]
    fn test_partial_room_decodes() {
        let room: Room = serde_json::from_str(r#"{"roomNumber":"101"}"#).unwrap();
        assert_eq!(room.room_number, "101");
        assert_eq!(room.id, 0);
        assert!(!room.is_available);
    }

    #[test]
    fn test_dto_wire_shape() {
        let json = serde_json::to_value(dto()).unwrap();
        assert_eq!(json["roomNumber"], "101");
        assert_eq!(json["roomType"], "SUITE");
        assert_eq!(json["maxOccupants"], 2);
        assert_eq!(json["isAvailable"], true);
    }

    #[test]
    fn test_validate() {
        assert!(dto().validate().is_ok());

        let mut bad = dto();
        bad.room_number = "  ".into();
        assert_eq!(bad.validate().unwrap_err(), "Room number is required");

        let mut bad = dto();
        bad.price_per_night = -1.0;
        assert_eq!(
            bad.validate().unwrap_err(),
            "Price per night cannot be negative"
        );

        let mut bad = dto();
        bad.max_occupants = 0;
        assert_eq!(bad.validate().unwrap_err(), "Max occupants must be at least 1");
    }

    #[test]
    fn test_selector_label() {
        let room = Room {
            id: 7,
            room_number: "204".into(),
            room_type: "RESIDENTIAL_SUITE".into(),
            price_per_night: 350.0,
            max_occupants: 4,
            is_available: true,
        };
        assert_eq!(
            room.selector_label(),
            "204 (RESIDENTIAL SUITE, Max: 4, $350/night)"
        );
    }
}
