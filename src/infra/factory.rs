use std::fs;
use std::sync::Arc;

use tera::Tera;
use tracing::info;

use crate::config::Config;
use crate::domain::models::schedule::Schedule;
use crate::domain::ports::{EmailService, ScheduleRepository};
use crate::domain::services::booking_service::BookingService;
use crate::domain::services::communication_service::{
    CONFIRMATION_TEMPLATE, CommunicationService, REQUEST_TEMPLATE,
};
use crate::error::AppError;
use crate::infra::email::{http_email_service::HttpEmailService, log_email_service::LogEmailService};
use crate::infra::repositories::memory_schedule_repo::MemoryScheduleRepo;
use crate::state::AppState;

pub fn bootstrap_state(config: &Config) -> Result<AppState, AppError> {
    let email_service: Arc<dyn EmailService> = match &config.mail_service_url {
        Some(url) => {
            info!("Sending mail through relay at {}", url);
            Arc::new(HttpEmailService::new(url.clone(), config.mail_service_token.clone()))
        }
        None => {
            info!("No mail relay configured, mails will only be logged");
            Arc::new(LogEmailService)
        }
    };

    let schedules = match &config.seed_path {
        Some(path) => load_seed(path)?,
        None => Vec::new(),
    };
    info!("Initializing in-memory schedule store with {} schedules...", schedules.len());
    let schedule_repo: Arc<dyn ScheduleRepository> = Arc::new(MemoryScheduleRepo::with_schedules(schedules));

    assemble_state(config, schedule_repo, email_service)
}

/// Wires services around the given adapters.
pub fn assemble_state(
    config: &Config,
    schedule_repo: Arc<dyn ScheduleRepository>,
    email_service: Arc<dyn EmailService>,
) -> Result<AppState, AppError> {
    let templates = Arc::new(load_templates()?);
    let communication = Arc::new(CommunicationService::new(
        email_service.clone(),
        templates,
        config.timezone,
    ));
    let booking_service = Arc::new(BookingService::new(schedule_repo.clone(), communication));

    Ok(AppState {
        config: config.clone(),
        schedule_repo,
        email_service,
        booking_service,
    })
}

pub fn load_templates() -> Result<Tera, AppError> {
    let mut tera = Tera::default();
    tera.add_raw_template(CONFIRMATION_TEMPLATE, include_str!("../templates/confirmation.txt"))?;
    tera.add_raw_template(REQUEST_TEMPLATE, include_str!("../templates/request.txt"))?;
    Ok(tera)
}

fn load_seed(path: &str) -> Result<Vec<Schedule>, AppError> {
    info!("Loading schedules from {}", path);
    let raw = fs::read_to_string(path)?;
    let schedules: Vec<Schedule> = serde_json::from_str(&raw)?;
    Ok(schedules)
}
