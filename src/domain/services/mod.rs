pub mod booking_rules;
pub mod booking_service;
pub mod calendar;
pub mod communication_service;
pub mod validation;
