//! Types exchanged with the staff client.
//!
//! Staff see a coarser availability model than the public: a slot that only
//! accepts requests is simply taken, and every availability rejection is
//! reported as `slot-not-free`.

use serde::{Deserialize, Serialize};

use crate::domain::models::booking::{BookingError, BookingResult};
use crate::domain::models::slot::{FreeSlot, SlotType};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StaffSlotType {
    Free(FreeSlot),
    Closed,
    Taken,
}

impl From<&SlotType> for StaffSlotType {
    fn from(slot_type: &SlotType) -> Self {
        match slot_type {
            SlotType::Free(free) => StaffSlotType::Free(free.clone()),
            SlotType::TakenWithRequestPossible(_) | SlotType::Taken => StaffSlotType::Taken,
            SlotType::Closed => StaffSlotType::Closed,
        }
    }
}

impl From<SlotType> for StaffSlotType {
    fn from(slot_type: SlotType) -> Self {
        StaffSlotType::from(&slot_type)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "error", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum StaffBookingError {
    EventNotFound,
    EventNotReleased,
    SlotNotFound,
    SlotNotFree { slot_type: StaffSlotType },
    InvalidSubscriptionQuantity,
    InvalidSubscriberName,
    InvalidMailAddress,
    InvalidPhoneNumber,
    MaxQuantityPerBookingExceeded,
    CapacityExceeded { slot_type: StaffSlotType },
}

impl From<BookingError> for StaffBookingError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::EventNotFound => StaffBookingError::EventNotFound,
            BookingError::EventNotReleased => StaffBookingError::EventNotReleased,
            BookingError::SlotNotFound => StaffBookingError::SlotNotFound,
            BookingError::SlotUnavailable { slot_type } | BookingError::SlotNeedsRequest { slot_type } => {
                StaffBookingError::SlotNotFree { slot_type: slot_type.into() }
            }
            BookingError::InvalidSubscriptionQuantity => StaffBookingError::InvalidSubscriptionQuantity,
            BookingError::InvalidSubscriberName => StaffBookingError::InvalidSubscriberName,
            BookingError::InvalidMailAddress => StaffBookingError::InvalidMailAddress,
            BookingError::InvalidPhoneNumber => StaffBookingError::InvalidPhoneNumber,
            BookingError::MaxQuantityPerBookingExceeded => StaffBookingError::MaxQuantityPerBookingExceeded,
            BookingError::CapacityExceeded { slot_type } => {
                StaffBookingError::CapacityExceeded { slot_type: slot_type.into() }
            }
        }
    }
}

impl From<BookingResult> for BookingResult<StaffSlotType> {
    fn from(result: BookingResult) -> Self {
        BookingResult {
            slot_type: result.slot_type.into(),
            mail_send_error: result.mail_send_error,
        }
    }
}
