use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::domain::models::{
    booking::{BookingFlow, BookingKind, BookingOutcome, BookingRecord, BookingRequest, BookingResult, NewBookingParams},
    event::Event,
    schedule::Schedule,
    staff::{StaffBookingError, StaffSlotType},
};
use crate::domain::ports::ScheduleRepository;
use crate::domain::services::booking_rules::admit;
use crate::domain::services::communication_service::CommunicationService;
use crate::error::AppError;

pub struct BookingService {
    repo: Arc<dyn ScheduleRepository>,
    communication: Arc<CommunicationService>,
}

impl BookingService {
    pub fn new(repo: Arc<dyn ScheduleRepository>, communication: Arc<CommunicationService>) -> Self {
        Self { repo, communication }
    }

    pub async fn public_event(&self, schedule_id: &str) -> Result<Option<Event>, AppError> {
        let now = Utc::now();
        Ok(self.repo.find_by_id(schedule_id).await?.map(|s| s.to_event(now)))
    }

    pub async fn staff_event(&self, schedule_id: &str) -> Result<Option<Event<StaffSlotType>>, AppError> {
        let now = Utc::now();
        Ok(self.repo.find_by_id(schedule_id).await?.map(|s| s.to_staff_event(now)))
    }

    pub async fn list_public_events(&self) -> Result<Vec<Event>, AppError> {
        let now = Utc::now();
        Ok(self.repo.list().await?.iter().map(|s| s.to_event(now)).collect())
    }

    pub async fn book(
        &self,
        schedule_id: &str,
        entry_id: &str,
        request: &BookingRequest,
    ) -> Result<BookingOutcome, AppError> {
        self.place(schedule_id, entry_id, request, BookingFlow::Public).await
    }

    pub async fn book_as_staff(
        &self,
        schedule_id: &str,
        entry_id: &str,
        request: &BookingRequest,
    ) -> Result<BookingOutcome<StaffSlotType, StaffBookingError>, AppError> {
        let outcome = self.place(schedule_id, entry_id, request, BookingFlow::Staff).await?;
        Ok(outcome.map(BookingResult::<StaffSlotType>::from).map_err(StaffBookingError::from))
    }

    /// Asks for a place on a slot that is taken but accepts requests.
    pub async fn request(
        &self,
        schedule_id: &str,
        entry_id: &str,
        request: &BookingRequest,
    ) -> Result<BookingOutcome, AppError> {
        self.place(schedule_id, entry_id, request, BookingFlow::Request).await
    }

    pub async fn bookings_for(&self, schedule_id: &str) -> Result<Vec<BookingRecord>, AppError> {
        self.repo.list_records(schedule_id).await
    }

    async fn place(
        &self,
        schedule_id: &str,
        entry_id: &str,
        request: &BookingRequest,
        flow: BookingFlow,
    ) -> Result<BookingOutcome, AppError> {
        let now = Utc::now();
        let schedule = self.repo.find_by_id(schedule_id).await?;

        let admission = match admit(schedule.as_ref(), entry_id, request, flow, now) {
            Ok(admission) => admission,
            Err(rejection) => {
                info!(schedule_id, entry_id, flow = ?flow, "Booking rejected: {}", rejection.code());
                return Ok(Err(rejection));
            }
        };
        // `admit` only succeeds on an existing schedule.
        let Some(mut schedule) = schedule else {
            return Err(AppError::Internal);
        };

        let record = BookingRecord::new(NewBookingParams {
            schedule_id: schedule_id.to_string(),
            entry_id: entry_id.to_string(),
            kind: flow.kind(),
            name: admission.name,
            mail_address: admission.mail_address,
            phone_number: admission.phone_number,
            quantity: admission.quantity,
        });

        let committed = match record.kind {
            BookingKind::Booking => self.repo.reserve(&record, flow, now).await?,
            BookingKind::Request => self.repo.add_request(&record, now).await?,
        };
        let slot_type = match committed {
            Ok(slot_type) => slot_type,
            Err(rejection) => {
                warn!(schedule_id, entry_id, "Slot changed before commit: {}", rejection.code());
                return Ok(Err(rejection));
            }
        };
        info!(record_id = %record.id, schedule_id, entry_id, quantity = record.quantity, "Booking accepted");

        if let Some(entry) = schedule.entry_mut(entry_id) {
            entry.slot_type = slot_type.clone();
        }
        let mail_send_error = !self.send_notification(&schedule, entry_id, &record).await;

        Ok(Ok(BookingResult { slot_type, mail_send_error }))
    }

    /// Mail failures never undo a committed booking; they only flip the flag.
    async fn send_notification(&self, schedule: &Schedule, entry_id: &str, record: &BookingRecord) -> bool {
        let Some(entry) = schedule.entry(entry_id) else {
            return false;
        };
        match self.communication.notify(schedule, entry, record).await {
            Ok(()) => true,
            Err(e) => {
                warn!(record_id = %record.id, "Notification failed: {}", e);
                false
            }
        }
    }
}
