use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::models::booking::{BookingError, BookingFlow};
use crate::domain::models::time_span::TimeSpan;

/// Booking terms of a slot that can be booked directly.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FreeSlot {
    pub url: String,
    pub closing_date: Option<DateTime<Utc>>,
    pub max_quantity_per_booking: Option<u32>,
    /// `None` means capacity is not tracked.
    pub remaining_capacity: Option<u32>,
}

/// Booking terms of a taken slot that still accepts requests.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RequestableSlot {
    pub url: String,
    pub closing_date: Option<DateTime<Utc>>,
    pub max_quantity_per_booking: Option<u32>,
}

/// Availability of a slot as seen by the public surface. This is also the
/// state the server keeps for every schedule entry.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SlotType {
    Free(FreeSlot),
    TakenWithRequestPossible(RequestableSlot),
    Taken,
    Closed,
}

/// Name used by older clients for [`SlotType`].
pub type ReservationType = SlotType;

impl SlotType {
    pub fn closing_date(&self) -> Option<DateTime<Utc>> {
        match self {
            SlotType::Free(free) => free.closing_date,
            SlotType::TakenWithRequestPossible(req) => req.closing_date,
            SlotType::Taken | SlotType::Closed => None,
        }
    }

    pub fn max_quantity_per_booking(&self) -> Option<u32> {
        match self {
            SlotType::Free(free) => free.max_quantity_per_booking,
            SlotType::TakenWithRequestPossible(req) => req.max_quantity_per_booking,
            SlotType::Taken | SlotType::Closed => None,
        }
    }

    pub fn remaining_capacity(&self) -> Option<u32> {
        match self {
            SlotType::Free(free) => free.remaining_capacity,
            _ => None,
        }
    }

    pub fn is_past_closing(&self, now: DateTime<Utc>) -> bool {
        self.closing_date().is_some_and(|closing| closing <= now)
    }

    /// Whether `flow` may book or request a slot of this type at `now`.
    pub fn check_availability(&self, flow: BookingFlow, now: DateTime<Utc>) -> Result<(), BookingError> {
        let unavailable = || BookingError::SlotUnavailable { slot_type: self.clone() };

        match (flow, self) {
            (BookingFlow::Public, SlotType::Free(_)) if self.is_past_closing(now) => Err(unavailable()),
            (BookingFlow::Public | BookingFlow::Staff, SlotType::Free(_)) => Ok(()),
            (BookingFlow::Public | BookingFlow::Staff, SlotType::TakenWithRequestPossible(_)) => {
                Err(BookingError::SlotNeedsRequest { slot_type: self.clone() })
            }
            (BookingFlow::Request, SlotType::TakenWithRequestPossible(_)) if !self.is_past_closing(now) => Ok(()),
            _ => Err(unavailable()),
        }
    }

    /// Claims `quantity` units of a free slot in place.
    ///
    /// On rejection the slot is left untouched and the error carries the
    /// slot type as it was before the attempt.
    pub fn claim(&mut self, quantity: u32) -> Result<(), BookingError> {
        let before = self.clone();
        match self {
            SlotType::Free(free) => {
                if free.max_quantity_per_booking.is_some_and(|max| quantity > max) {
                    return Err(BookingError::MaxQuantityPerBookingExceeded);
                }
                if let Some(remaining) = free.remaining_capacity.as_mut() {
                    if quantity > *remaining {
                        return Err(BookingError::CapacityExceeded { slot_type: before });
                    }
                    *remaining -= quantity;
                }
                Ok(())
            }
            SlotType::TakenWithRequestPossible(_) => Err(BookingError::SlotNeedsRequest { slot_type: before }),
            SlotType::Taken | SlotType::Closed => Err(BookingError::SlotUnavailable { slot_type: before }),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Slot<T = SlotType> {
    pub start_time: DateTime<Utc>,
    pub duration: Option<TimeSpan>,
    #[serde(rename = "type")]
    pub slot_type: T,
}

impl<T> Slot<T> {
    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        let duration = self.duration?;
        self.start_time.checked_add_signed(duration.as_duration())
    }
}
