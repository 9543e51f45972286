use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::domain::models::slot::SlotType;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub name: String,
    pub mail_address: String,
    pub phone_number: String,
    /// Kept as raw JSON so that a malformed quantity is reported as
    /// `invalid-subscription-quantity` in its place in the check order.
    #[serde(default)]
    pub quantity: Value,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookingResult<T = SlotType> {
    pub slot_type: T,
    pub mail_send_error: bool,
}

/// Every reason the public surface can reject a booking or a request.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "error", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum BookingError {
    EventNotFound,
    EventNotReleased,
    SlotNotFound,
    SlotUnavailable { slot_type: SlotType },
    SlotNeedsRequest { slot_type: SlotType },
    InvalidSubscriptionQuantity,
    InvalidSubscriberName,
    InvalidMailAddress,
    InvalidPhoneNumber,
    MaxQuantityPerBookingExceeded,
    CapacityExceeded { slot_type: SlotType },
}

impl BookingError {
    pub fn code(&self) -> &'static str {
        match self {
            BookingError::EventNotFound => "event-not-found",
            BookingError::EventNotReleased => "event-not-released",
            BookingError::SlotNotFound => "slot-not-found",
            BookingError::SlotUnavailable { .. } => "slot-unavailable",
            BookingError::SlotNeedsRequest { .. } => "slot-needs-request",
            BookingError::InvalidSubscriptionQuantity => "invalid-subscription-quantity",
            BookingError::InvalidSubscriberName => "invalid-subscriber-name",
            BookingError::InvalidMailAddress => "invalid-mail-address",
            BookingError::InvalidPhoneNumber => "invalid-phone-number",
            BookingError::MaxQuantityPerBookingExceeded => "max-quantity-per-booking-exceeded",
            BookingError::CapacityExceeded { .. } => "capacity-exceeded",
        }
    }
}

/// Outcome of a booking attempt: a result or exactly one rejection.
pub type BookingOutcome<T = SlotType, E = BookingError> = Result<BookingResult<T>, E>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingFlow {
    /// Direct booking through the public surface.
    Public,
    /// Direct booking by staff. Closing dates are not enforced.
    Staff,
    /// Request on a slot that is taken but still accepts requests.
    Request,
}

impl BookingFlow {
    pub fn kind(self) -> BookingKind {
        match self {
            BookingFlow::Request => BookingKind::Request,
            BookingFlow::Public | BookingFlow::Staff => BookingKind::Booking,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingKind {
    Booking,
    Request,
}

/// Server-side record of an accepted booking or request.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub id: String,
    pub schedule_id: String,
    pub entry_id: String,
    pub kind: BookingKind,
    pub subscriber_name: String,
    pub mail_address: String,
    pub phone_number: String,
    pub quantity: u32,
    pub created_at: DateTime<Utc>,
}

pub struct NewBookingParams {
    pub schedule_id: String,
    pub entry_id: String,
    pub kind: BookingKind,
    pub name: String,
    pub mail_address: String,
    pub phone_number: String,
    pub quantity: u32,
}

impl BookingRecord {
    pub fn new(params: NewBookingParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            schedule_id: params.schedule_id,
            entry_id: params.entry_id,
            kind: params.kind,
            subscriber_name: params.name,
            mail_address: params.mail_address,
            phone_number: params.phone_number,
            quantity: params.quantity,
            created_at: Utc::now(),
        }
    }
}
