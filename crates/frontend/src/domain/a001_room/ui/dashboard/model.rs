use contracts::domain::a001_room::aggregate::{Room, RoomDto, RoomType};
use serde::de::IgnoredAny;

use crate::domain::a001_room::api::{get_room, list_rooms, ROOMS, ROOM_TYPE_OPTIONS};
use crate::shared::forms::{FieldKind, FieldSpec, FormSchema, FormState};
use crate::shared::http::ApiRequest;
use crate::shared::orchestrator::Action;
use crate::shared::panel::EntityPanelSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomTab {
    Add,
    Update,
    Delete,
    View,
    Available,
}

const ROOM_ID: FieldSpec =
    FieldSpec::new("id", "Room ID", FieldKind::Text).required("Room ID is required");
const ROOM_NUMBER: FieldSpec = FieldSpec::new("roomNumber", "Room Number", FieldKind::Text)
    .required("Room number is required")
    .placeholder("e.g. 101");
const ROOM_TYPE: FieldSpec =
    FieldSpec::new("roomType", "Room Type", FieldKind::Select(ROOM_TYPE_OPTIONS))
        .default_value("STANDARD");
const PRICE: FieldSpec = FieldSpec::new(
    "pricePerNight",
    "Price per Night",
    FieldKind::Number {
        min: Some(0.0),
        step: Some("0.01"),
    },
)
.required("Price per night is required");
const MAX_OCCUPANTS: FieldSpec = FieldSpec::new(
    "maxOccupants",
    "Max Occupants",
    FieldKind::Number {
        min: Some(1.0),
        step: None,
    },
)
.required("Max occupants is required");
const IS_AVAILABLE: FieldSpec =
    FieldSpec::new("isAvailable", "Available", FieldKind::Checkbox).default_value("true");

pub const ADD_FORM: FormSchema = FormSchema {
    fields: &[ROOM_NUMBER, ROOM_TYPE, PRICE, MAX_OCCUPANTS, IS_AVAILABLE],
};

pub const UPDATE_FORM: FormSchema = FormSchema {
    fields: &[ROOM_ID, ROOM_NUMBER, ROOM_TYPE, PRICE, MAX_OCCUPANTS, IS_AVAILABLE],
};

pub const DELETE_FORM: FormSchema = FormSchema {
    fields: &[ROOM_ID],
};

/// Blank id lists every room
pub const VIEW_FORM: FormSchema = FormSchema {
    fields: &[FieldSpec::new("id", "Room ID", FieldKind::Text).placeholder("Leave empty to list all rooms")],
};

pub const AVAILABLE_FORM: FormSchema = FormSchema {
    fields: &[ROOM_TYPE],
};

pub struct RoomPanel;

impl EntityPanelSpec for RoomPanel {
    type Tab = RoomTab;
    type Row = Room;

    const TABS: &'static [RoomTab] = &[
        RoomTab::Add,
        RoomTab::Update,
        RoomTab::Delete,
        RoomTab::View,
        RoomTab::Available,
    ];

    fn label(tab: RoomTab) -> &'static str {
        match tab {
            RoomTab::Add => "Add Room",
            RoomTab::Update => "Update Room",
            RoomTab::Delete => "Delete Room",
            RoomTab::View => "View Rooms",
            RoomTab::Available => "Available Rooms",
        }
    }

    fn schema(tab: RoomTab) -> Option<&'static FormSchema> {
        Some(match tab {
            RoomTab::Add => &ADD_FORM,
            RoomTab::Update => &UPDATE_FORM,
            RoomTab::Delete => &DELETE_FORM,
            RoomTab::View => &VIEW_FORM,
            RoomTab::Available => &AVAILABLE_FORM,
        })
    }
}

pub fn room_type(form: &FormState) -> Result<RoomType, String> {
    RoomType::from_code(form.get("roomType")).ok_or_else(|| "Invalid room type".to_string())
}

fn room_id(form: &FormState) -> Result<i64, String> {
    form.parse_i64("id", "Room ID must be a number")
}

pub fn room_dto(form: &FormState) -> Result<RoomDto, String> {
    let dto = RoomDto {
        room_number: form.text("roomNumber"),
        room_type: room_type(form)?,
        price_per_night: form.parse_f64("pricePerNight", "Price per night must be a number")?,
        max_occupants: form.parse_u32("maxOccupants", "Max occupants must be at least 1")?,
        is_available: form.parse_bool("isAvailable"),
    };
    dto.validate()?;
    Ok(dto)
}

pub fn create_room(form: &FormState) -> Action<Room> {
    let request = form
        .bind(&ADD_FORM, room_dto)
        .and_then(|dto| ApiRequest::post(ROOMS, &dto));
    Action::new(request, "Failed to add room")
        .on_success(|room: &Room| format!("Room {} added successfully", room.room_number))
}

pub fn update_room(form: &FormState) -> Action<Room> {
    let request = form
        .bind(&UPDATE_FORM, |f| Ok((room_id(f)?, room_dto(f)?)))
        .and_then(|(id, dto)| ApiRequest::put(format!("{}/{}", ROOMS, id), &dto));
    Action::new(request, "Failed to update room")
        .on_success(|room: &Room| format!("Room {} updated successfully", room.room_number))
}

/// The success message names the id that was asked for, not a response field
pub fn delete_room(form: &FormState) -> Action<IgnoredAny> {
    let id = form.bind(&DELETE_FORM, room_id);
    let request = id
        .clone()
        .map(|id| ApiRequest::delete(format!("{}/{}", ROOMS, id)));
    let shown = id.unwrap_or_default();
    Action::new(request, "Failed to delete room")
        .on_success(move |_| format!("Room {} deleted successfully", shown))
}

/// What the View tab fetches
pub enum RoomLookup {
    All(Action<Vec<Room>>),
    One(Action<Room>),
}

pub fn lookup_rooms(form: &FormState) -> RoomLookup {
    if form.optional_text("id").is_none() {
        return RoomLookup::All(list_rooms());
    }
    match room_id(form) {
        Ok(id) => RoomLookup::One(get_room(id)),
        Err(message) => RoomLookup::One(Action::new(Err(message), "Failed to fetch room")),
    }
}
