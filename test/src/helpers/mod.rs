pub mod event_log;

pub use event_log::EventLog;
pub use harness::{test_zone, Harness, TestClient, FRAME, INSIDE, OUTSIDE};
