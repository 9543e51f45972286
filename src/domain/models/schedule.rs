use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::models::event::{Event, HiddenEvent, ReleasedEvent};
use crate::domain::models::slot::{Slot, SlotType};
use crate::domain::models::staff::StaffSlotType;
use crate::domain::models::time_span::TimeSpan;

/// Authoritative server-side state of an event and its slots.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub id: String,
    pub title: String,
    pub info_text: String,
    pub reservation_start_time: DateTime<Utc>,
    pub slots: Vec<ScheduleEntry>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub id: String,
    pub start_time: DateTime<Utc>,
    pub duration: Option<TimeSpan>,
    pub slot_type: SlotType,
}

impl ScheduleEntry {
    pub fn to_slot(&self) -> Slot {
        Slot {
            start_time: self.start_time,
            duration: self.duration,
            slot_type: self.slot_type.clone(),
        }
    }
}

impl Schedule {
    pub fn is_released(&self, now: DateTime<Utc>) -> bool {
        now >= self.reservation_start_time
    }

    pub fn entry(&self, entry_id: &str) -> Option<&ScheduleEntry> {
        self.slots.iter().find(|e| e.id == entry_id)
    }

    pub fn entry_mut(&mut self, entry_id: &str) -> Option<&mut ScheduleEntry> {
        self.slots.iter_mut().find(|e| e.id == entry_id)
    }

    pub fn to_event(&self, now: DateTime<Utc>) -> Event {
        self.project(now, |slot_type| slot_type.clone())
    }

    pub fn to_staff_event(&self, now: DateTime<Utc>) -> Event<StaffSlotType> {
        self.project(now, |slot_type| StaffSlotType::from(slot_type))
    }

    fn project<T>(&self, now: DateTime<Utc>, view: impl Fn(&SlotType) -> T) -> Event<T> {
        if !self.is_released(now) {
            return Event::Hidden(HiddenEvent {
                title: self.title.clone(),
                reservation_start_time: self.reservation_start_time,
            });
        }

        Event::Released(ReleasedEvent {
            title: self.title.clone(),
            info_text: self.info_text.clone(),
            slots: self
                .slots
                .iter()
                .map(|entry| Slot {
                    start_time: entry.start_time,
                    duration: entry.duration,
                    slot_type: view(&entry.slot_type),
                })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::slot::{FreeSlot, RequestableSlot};
    use chrono::Duration;

    fn schedule(reservation_start_time: DateTime<Utc>) -> Schedule {
        let start = "2026-12-01T18:00:00Z".parse::<DateTime<Utc>>().unwrap();
        Schedule {
            id: "advent".to_string(),
            title: "Adventkonzert".to_string(),
            info_text: "Eintritt frei".to_string(),
            reservation_start_time,
            slots: vec![
                ScheduleEntry {
                    id: "a".to_string(),
                    start_time: start,
                    duration: Some("01:00:00".parse().unwrap()),
                    slot_type: SlotType::Free(FreeSlot {
                        url: "/book/a".to_string(),
                        closing_date: None,
                        max_quantity_per_booking: None,
                        remaining_capacity: Some(10),
                    }),
                },
                ScheduleEntry {
                    id: "b".to_string(),
                    start_time: start + Duration::hours(2),
                    duration: None,
                    slot_type: SlotType::TakenWithRequestPossible(RequestableSlot {
                        url: "/request/b".to_string(),
                        closing_date: None,
                        max_quantity_per_booking: None,
                    }),
                },
            ],
        }
    }

    #[test]
    fn test_hidden_until_reservation_start() {
        let opens = "2026-11-01T08:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let s = schedule(opens);

        let before = s.to_event(opens - Duration::seconds(1));
        assert!(matches!(before, Event::Hidden(ref h) if h.reservation_start_time == opens));
        assert!(before.slots().is_none());

        let at = s.to_event(opens);
        assert_eq!(at.slots().map(|slots| slots.len()), Some(2));
    }

    #[test]
    fn test_staff_projection_keeps_order_and_coarsens_types() {
        let s = schedule("2026-01-01T00:00:00Z".parse().unwrap());
        let event = s.to_staff_event("2026-10-19T00:00:00Z".parse().unwrap());
        let slots = event.slots().unwrap();
        assert!(matches!(slots[0].slot_type, StaffSlotType::Free(_)));
        assert_eq!(slots[1].slot_type, StaffSlotType::Taken);
        assert!(slots[0].start_time < slots[1].start_time);
    }
}
