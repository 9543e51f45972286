//! Decides whether a booking attempt is admissible against a snapshot of a
//! schedule. Checks run in a fixed order and the first failing one wins:
//! event, release, slot, availability, name, mail, phone, quantity, per
//! booking cap, remaining capacity.

use chrono::{DateTime, Utc};

use crate::domain::models::booking::{BookingError, BookingFlow, BookingRequest};
use crate::domain::models::schedule::Schedule;
use crate::domain::services::validation::{
    is_valid_mail_address, is_valid_phone_number, is_valid_subscriber_name, parse_quantity,
};

/// A booking attempt that passed every check, with normalised inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admission {
    pub name: String,
    pub mail_address: String,
    pub phone_number: String,
    pub quantity: u32,
}

pub fn admit(
    schedule: Option<&Schedule>,
    entry_id: &str,
    request: &BookingRequest,
    flow: BookingFlow,
    now: DateTime<Utc>,
) -> Result<Admission, BookingError> {
    let schedule = schedule.ok_or(BookingError::EventNotFound)?;
    if !schedule.is_released(now) {
        return Err(BookingError::EventNotReleased);
    }
    let entry = schedule.entry(entry_id).ok_or(BookingError::SlotNotFound)?;
    entry.slot_type.check_availability(flow, now)?;

    if !is_valid_subscriber_name(&request.name) {
        return Err(BookingError::InvalidSubscriberName);
    }
    if !is_valid_mail_address(&request.mail_address) {
        return Err(BookingError::InvalidMailAddress);
    }
    if !is_valid_phone_number(&request.phone_number) {
        return Err(BookingError::InvalidPhoneNumber);
    }
    let quantity = parse_quantity(&request.quantity).ok_or(BookingError::InvalidSubscriptionQuantity)?;

    match flow {
        BookingFlow::Public | BookingFlow::Staff => {
            // Dry run on a copy; the repository repeats the claim atomically.
            entry.slot_type.clone().claim(quantity)?;
        }
        BookingFlow::Request => {
            if entry.slot_type.max_quantity_per_booking().is_some_and(|max| quantity > max) {
                return Err(BookingError::MaxQuantityPerBookingExceeded);
            }
        }
    }

    Ok(Admission {
        name: request.name.trim().to_string(),
        mail_address: request.mail_address.trim().to_string(),
        phone_number: request.phone_number.trim().to_string(),
        quantity,
    })
}
