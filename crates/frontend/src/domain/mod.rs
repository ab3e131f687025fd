pub mod a001_room;
pub mod a002_reservation;
pub mod a004_block_booking;
