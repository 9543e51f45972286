use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::models::{
    booking::{BookingError, BookingFlow, BookingRecord},
    schedule::{Schedule, ScheduleEntry},
    slot::SlotType,
};
use crate::domain::ports::ScheduleRepository;
use crate::error::AppError;

#[derive(Default)]
struct Store {
    schedules: HashMap<String, Schedule>,
    records: Vec<BookingRecord>,
}

impl Store {
    fn entry_mut<'a>(
        schedules: &'a mut HashMap<String, Schedule>,
        record: &BookingRecord,
    ) -> Result<&'a mut ScheduleEntry, BookingError> {
        schedules
            .get_mut(&record.schedule_id)
            .ok_or(BookingError::EventNotFound)?
            .entry_mut(&record.entry_id)
            .ok_or(BookingError::SlotNotFound)
    }
}

/// Process-local schedule store. All writes go through one lock, which is
/// what makes `reserve` atomic.
#[derive(Default)]
pub struct MemoryScheduleRepo {
    store: RwLock<Store>,
}

impl MemoryScheduleRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schedules(schedules: Vec<Schedule>) -> Self {
        let store = Store {
            schedules: schedules.into_iter().map(|s| (s.id.clone(), s)).collect(),
            records: Vec::new(),
        };
        Self { store: RwLock::new(store) }
    }
}

#[async_trait]
impl ScheduleRepository for MemoryScheduleRepo {
    async fn create(&self, schedule: &Schedule) -> Result<Schedule, AppError> {
        let mut store = self.store.write().await;
        if store.schedules.contains_key(&schedule.id) {
            return Err(AppError::Conflict(format!("Schedule {} already exists", schedule.id)));
        }
        store.schedules.insert(schedule.id.clone(), schedule.clone());
        Ok(schedule.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Schedule>, AppError> {
        Ok(self.store.read().await.schedules.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<Schedule>, AppError> {
        let store = self.store.read().await;
        let mut schedules: Vec<Schedule> = store.schedules.values().cloned().collect();
        schedules.sort_by(|a, b| {
            a.reservation_start_time
                .cmp(&b.reservation_start_time)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(schedules)
    }

    async fn reserve(
        &self,
        record: &BookingRecord,
        flow: BookingFlow,
        now: DateTime<Utc>,
    ) -> Result<Result<SlotType, BookingError>, AppError> {
        let mut store = self.store.write().await;
        let entry = match Store::entry_mut(&mut store.schedules, record) {
            Ok(entry) => entry,
            Err(rejection) => return Ok(Err(rejection)),
        };

        let claimed = entry
            .slot_type
            .check_availability(flow, now)
            .and_then(|()| entry.slot_type.claim(record.quantity));
        if let Err(rejection) = claimed {
            debug!("Reservation rejected under lock: {}", rejection.code());
            return Ok(Err(rejection));
        }
        let updated = entry.slot_type.clone();

        store.records.push(record.clone());
        Ok(Ok(updated))
    }

    async fn add_request(
        &self,
        record: &BookingRecord,
        now: DateTime<Utc>,
    ) -> Result<Result<SlotType, BookingError>, AppError> {
        let mut store = self.store.write().await;
        let entry = match Store::entry_mut(&mut store.schedules, record) {
            Ok(entry) => entry,
            Err(rejection) => return Ok(Err(rejection)),
        };

        if let Err(rejection) = entry.slot_type.check_availability(BookingFlow::Request, now) {
            debug!("Request rejected under lock: {}", rejection.code());
            return Ok(Err(rejection));
        }
        let current = entry.slot_type.clone();

        store.records.push(record.clone());
        Ok(Ok(current))
    }

    async fn list_records(&self, schedule_id: &str) -> Result<Vec<BookingRecord>, AppError> {
        let store = self.store.read().await;
        Ok(store
            .records
            .iter()
            .filter(|r| r.schedule_id == schedule_id)
            .cloned()
            .collect())
    }
}
