pub mod calendar_store;
pub mod classifier;
pub mod duration;
pub mod engine;
pub mod range;
pub mod sandwich;
pub mod snapshot;
pub mod validation;

pub use calendar_store::CalendarStore;
pub use engine::LeaveEngine;
pub use sandwich::SandwichViolation;
pub use snapshot::CalendarSnapshot;
