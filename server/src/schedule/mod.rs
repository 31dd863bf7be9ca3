mod flight_task;
mod task_scheduler;

pub(crate) use flight_task::FlightTask;
pub use task_scheduler::TaskKey;
pub(crate) use task_scheduler::TaskScheduler;
