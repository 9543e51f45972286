use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use slot_booking::{
    config::Config,
    domain::models::{
        booking::BookingRequest,
        schedule::{Schedule, ScheduleEntry},
        slot::{FreeSlot, RequestableSlot, SlotType},
    },
    domain::ports::{EmailService, ScheduleRepository},
    error::AppError,
    infra::{factory::assemble_state, repositories::memory_schedule_repo::MemoryScheduleRepo},
    state::AppState,
};
use std::sync::{Arc, Mutex};

#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct SentMail {
    pub recipient: String,
    pub subject: String,
    pub body: String,
    pub attachment_name: Option<String>,
    pub attachment: Option<String>,
}

pub struct MockEmailService {
    pub sent: Mutex<Vec<SentMail>>,
    pub fail: bool,
}

#[async_trait]
impl EmailService for MockEmailService {
    async fn send(
        &self,
        recipient: &str,
        subject: &str,
        body: &str,
        attachment_name: Option<&str>,
        attachment_data: Option<&[u8]>,
    ) -> Result<(), AppError> {
        if self.fail {
            return Err(AppError::Mail("relay down".to_string()));
        }
        self.sent.lock().unwrap().push(SentMail {
            recipient: recipient.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
            attachment_name: attachment_name.map(str::to_string),
            attachment: attachment_data.map(|d| String::from_utf8_lossy(d).into_owned()),
        });
        Ok(())
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub state: AppState,
    pub mailer: Arc<MockEmailService>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        Self::build(false).await
    }

    pub async fn with_failing_mail() -> Self {
        Self::build(true).await
    }

    async fn build(fail_mail: bool) -> Self {
        let mailer = Arc::new(MockEmailService { sent: Mutex::new(Vec::new()), fail: fail_mail });
        let repo: Arc<dyn ScheduleRepository> = Arc::new(MemoryScheduleRepo::new());
        let state = assemble_state(&Config::default(), repo, mailer.clone()).unwrap();
        Self { state, mailer }
    }

    pub async fn seed(&self, schedule: Schedule) {
        self.state.schedule_repo.create(&schedule).await.unwrap();
    }

    pub async fn entry(&self, schedule_id: &str, entry_id: &str) -> ScheduleEntry {
        let schedule = self.state.schedule_repo.find_by_id(schedule_id).await.unwrap().unwrap();
        schedule.entry(entry_id).unwrap().clone()
    }

    pub fn sent_mails(&self) -> Vec<SentMail> {
        self.mailer.sent.lock().unwrap().clone()
    }
}

#[allow(dead_code)]
pub fn free_slot(remaining: Option<u32>, max: Option<u32>) -> SlotType {
    SlotType::Free(FreeSlot {
        url: "/book".to_string(),
        closing_date: None,
        max_quantity_per_booking: max,
        remaining_capacity: remaining,
    })
}

#[allow(dead_code)]
pub fn requestable_slot() -> SlotType {
    SlotType::TakenWithRequestPossible(RequestableSlot {
        url: "/request".to_string(),
        closing_date: None,
        max_quantity_per_booking: None,
    })
}

#[allow(dead_code)]
pub fn entry(id: &str, start_time: DateTime<Utc>, slot_type: SlotType) -> ScheduleEntry {
    ScheduleEntry {
        id: id.to_string(),
        start_time,
        duration: Some("01:00:00".parse().unwrap()),
        slot_type,
    }
}

#[allow(dead_code)]
pub fn released_schedule(id: &str, slots: Vec<ScheduleEntry>) -> Schedule {
    Schedule {
        id: id.to_string(),
        title: "Adventkonzert".to_string(),
        info_text: "Einlass 30 Minuten vor Beginn".to_string(),
        reservation_start_time: Utc::now() - Duration::days(1),
        slots,
    }
}

#[allow(dead_code)]
pub fn booking_request(quantity: i64) -> BookingRequest {
    BookingRequest {
        name: "Anna Huber".to_string(),
        mail_address: "anna@example.at".to_string(),
        phone_number: "+43 664 1234567".to_string(),
        quantity: quantity.into(),
    }
}
