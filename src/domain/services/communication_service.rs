use std::sync::Arc;

use chrono_tz::Tz;
use tera::{Context, Tera};
use tracing::info;

use crate::domain::models::{
    booking::{BookingKind, BookingRecord},
    schedule::{Schedule, ScheduleEntry},
};
use crate::domain::ports::EmailService;
use crate::domain::services::calendar::generate_ics;
use crate::error::AppError;
use crate::formatting::{FormatOptions, TextStyle, format, format_time, pluralize};

pub const CONFIRMATION_TEMPLATE: &str = "confirmation.txt";
pub const REQUEST_TEMPLATE: &str = "request.txt";

pub struct RenderedMail {
    pub subject: String,
    pub body: String,
}

pub struct CommunicationService {
    email_service: Arc<dyn EmailService>,
    templates: Arc<Tera>,
    timezone: Tz,
}

impl CommunicationService {
    pub fn new(email_service: Arc<dyn EmailService>, templates: Arc<Tera>, timezone: Tz) -> Self {
        Self { email_service, templates, timezone }
    }

    pub fn render(
        &self,
        schedule: &Schedule,
        entry: &ScheduleEntry,
        record: &BookingRecord,
    ) -> Result<RenderedMail, AppError> {
        let slot = entry.to_slot();
        let start = slot.start_time.with_timezone(&self.timezone);
        let with_weekday = FormatOptions { weekday: Some(TextStyle::Long), ..FormatOptions::default() };

        let mut context = Context::new();
        context.insert("name", &record.subscriber_name);
        context.insert("event_title", &schedule.title);
        context.insert("slot_start", &format(&start, Some(with_weekday)));
        context.insert(
            "slot_end",
            &slot.end_time().map(|end| format_time(&end.with_timezone(&self.timezone))),
        );
        context.insert("quantity_text", &pluralize(i64::from(record.quantity), "Platz", "Plätze"));

        let (template, subject) = match record.kind {
            BookingKind::Booking => (CONFIRMATION_TEMPLATE, format!("Reservierungsbestätigung: {}", schedule.title)),
            BookingKind::Request => (REQUEST_TEMPLATE, format!("Anfrage erhalten: {}", schedule.title)),
        };

        let body = self.templates.render(template, &context)?;
        Ok(RenderedMail { subject, body })
    }

    /// Renders and sends the mail matching the record's kind. Confirmations
    /// carry the slot as a calendar attachment.
    pub async fn notify(
        &self,
        schedule: &Schedule,
        entry: &ScheduleEntry,
        record: &BookingRecord,
    ) -> Result<(), AppError> {
        let mail = self.render(schedule, entry, record)?;

        let ics = match record.kind {
            BookingKind::Booking => Some(generate_ics(schedule, entry, record)),
            BookingKind::Request => None,
        };

        self.email_service
            .send(
                &record.mail_address,
                &mail.subject,
                &mail.body,
                ics.as_ref().map(|_| "termin.ics"),
                ics.as_ref().map(|data| data.as_bytes()),
            )
            .await?;

        info!(record_id = %record.id, kind = ?record.kind, "Notification sent");
        Ok(())
    }
}
