use std::sync::Arc;
use crate::domain::ports::{EmailService, ScheduleRepository};
use crate::domain::services::booking_service::BookingService;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub schedule_repo: Arc<dyn ScheduleRepository>,
    pub email_service: Arc<dyn EmailService>,
    pub booking_service: Arc<BookingService>,
}
