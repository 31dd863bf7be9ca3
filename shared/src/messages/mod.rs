pub mod constants;
pub mod error;
pub mod flight_message;
pub mod flight_status;
pub mod flight_toggle_request;
pub mod message_kind;
