pub mod booking;
pub mod event;
pub mod schedule;
pub mod slot;
pub mod staff;
pub mod time_span;
