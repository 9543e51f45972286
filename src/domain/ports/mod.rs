use chrono::{DateTime, Utc};

use crate::domain::models::{
    booking::{BookingError, BookingFlow, BookingRecord},
    schedule::Schedule,
    slot::SlotType,
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    async fn create(&self, schedule: &Schedule) -> Result<Schedule, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Schedule>, AppError>;
    async fn list(&self) -> Result<Vec<Schedule>, AppError>;

    /// Re-checks the slot's availability for `flow`, claims the record's
    /// quantity and stores the record, as one atomic step. A rejection leaves
    /// the slot untouched and stores nothing; on success the updated slot type
    /// is returned.
    async fn reserve(
        &self,
        record: &BookingRecord,
        flow: BookingFlow,
        now: DateTime<Utc>,
    ) -> Result<Result<SlotType, BookingError>, AppError>;

    /// Re-checks that the slot still accepts requests and stores the request
    /// without touching slot capacity.
    async fn add_request(
        &self,
        record: &BookingRecord,
        now: DateTime<Utc>,
    ) -> Result<Result<SlotType, BookingError>, AppError>;

    async fn list_records(&self, schedule_id: &str) -> Result<Vec<BookingRecord>, AppError>;
}

#[async_trait]
pub trait EmailService: Send + Sync {
    async fn send(&self, recipient: &str, subject: &str, body: &str, attachment_name: Option<&str>, attachment_data: Option<&[u8]>) -> Result<(), AppError>;
}
