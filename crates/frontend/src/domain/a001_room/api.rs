//! Room queries shared by the room and reservation dashboards

use contracts::domain::a001_room::aggregate::{AvailabilityQuery, Room, RoomType};

use crate::shared::http::ApiRequest;
use crate::shared::orchestrator::Action;

pub const ROOMS: &str = "/api/rooms";

/// `(code, label)` pairs for room type selects
pub const ROOM_TYPE_OPTIONS: &[(&str, &str)] = &[
    ("STANDARD", "STANDARD"),
    ("SUITE", "SUITE"),
    ("RESIDENTIAL_SUITE", "RESIDENTIAL SUITE"),
];

pub fn list_rooms() -> Action<Vec<Room>> {
    Action::new(Ok(ApiRequest::get(ROOMS)), "Failed to fetch rooms")
}

pub fn get_room(id: i64) -> Action<Room> {
    Action::new(
        Ok(ApiRequest::get(format!("{}/{}", ROOMS, id))),
        "Failed to fetch room",
    )
}

/// `GET /api/rooms/available?roomType=T`
pub fn available_rooms(room_type: RoomType) -> Action<Vec<Room>> {
    let request =
        ApiRequest::get_with_query(&format!("{}/available", ROOMS), &AvailabilityQuery { room_type });
    Action::new(request, "Failed to fetch available rooms")
        .on_success(move |_| format!("Available {} rooms fetched", room_type.label()))
}
