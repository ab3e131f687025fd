pub mod api_utils;
pub mod cancel;
pub mod components;
pub mod date_utils;
pub mod forms;
pub mod http;
pub mod icons;
pub mod notify;
pub mod orchestrator;
pub mod panel;
