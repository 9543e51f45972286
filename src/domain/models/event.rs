use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::models::slot::{Slot, SlotType};

/// An event as handed to a client. Hidden events never carry slots.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Event<T = SlotType> {
    Hidden(HiddenEvent),
    Released(ReleasedEvent<T>),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HiddenEvent {
    pub title: String,
    pub reservation_start_time: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReleasedEvent<T = SlotType> {
    pub title: String,
    pub info_text: String,
    pub slots: Vec<Slot<T>>,
}

impl<T> Event<T> {
    pub fn title(&self) -> &str {
        match self {
            Event::Hidden(hidden) => &hidden.title,
            Event::Released(released) => &released.title,
        }
    }

    pub fn slots(&self) -> Option<&[Slot<T>]> {
        match self {
            Event::Hidden(_) => None,
            Event::Released(released) => Some(released.slots.as_slice()),
        }
    }
}
