pub mod campus;
pub mod classification;
pub mod holiday;
pub mod leave_request;
pub mod saturday_override;

pub use campus::Campus;
pub use classification::{CalendarDayEntry, DayClassification};
pub use holiday::{CreateHolidayPayload, Holiday, HolidayKind, UpdateHolidayPayload};
pub use leave_request::{LeaveRequestWindow, LeaveType, ValidationResult};
pub use saturday_override::SaturdayOverride;
