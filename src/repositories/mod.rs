pub mod calendar_repository;
pub mod in_memory;

pub use calendar_repository::CalendarRepository;
pub use in_memory::InMemoryCalendarRepository;

#[cfg(test)]
pub use calendar_repository::MockCalendarRepository;
