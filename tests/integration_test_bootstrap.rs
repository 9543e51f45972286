mod common;

use chrono::{Duration, Utc};
use common::{booking_request, entry, free_slot, released_schedule};
use slot_booking::{config::Config, error::AppError, infra::factory::bootstrap_state};
use std::fs;
use uuid::Uuid;

fn write_seed() -> String {
    let schedules = vec![released_schedule("seeded", vec![
        entry("a", Utc::now() + Duration::days(5), free_slot(Some(2), None)),
    ])];
    let path = std::env::temp_dir().join(format!("seed_{}.json", Uuid::new_v4()));
    fs::write(&path, serde_json::to_string(&schedules).unwrap()).unwrap();
    path.to_string_lossy().into_owned()
}

#[tokio::test]
async fn test_bootstrap_loads_seed_and_logs_mail() {
    let seed = write_seed();
    let config = Config { seed_path: Some(seed.clone()), ..Config::default() };

    let state = bootstrap_state(&config).unwrap();
    let result = state.booking_service.book("seeded", "a", &booking_request(1)).await.unwrap().unwrap();
    assert_eq!(result.slot_type.remaining_capacity(), Some(1));
    assert!(!result.mail_send_error);

    fs::remove_file(seed).ok();
}

#[tokio::test]
async fn test_unreachable_mail_relay_only_flags_the_result() {
    let seed = write_seed();
    let config = Config {
        seed_path: Some(seed.clone()),
        mail_service_url: Some("http://127.0.0.1:9/send".to_string()),
        mail_service_token: "token".to_string(),
        ..Config::default()
    };

    let state = bootstrap_state(&config).unwrap();
    let result = state.booking_service.book("seeded", "a", &booking_request(2)).await.unwrap().unwrap();
    assert!(result.mail_send_error);
    assert_eq!(result.slot_type.remaining_capacity(), Some(0));

    fs::remove_file(seed).ok();
}

#[test]
fn test_broken_seed_file_is_reported() {
    let path = std::env::temp_dir().join(format!("seed_{}.json", Uuid::new_v4()));
    fs::write(&path, "[{\"id\": 1}]").unwrap();
    let config = Config { seed_path: Some(path.to_string_lossy().into_owned()), ..Config::default() };

    assert!(matches!(bootstrap_state(&config), Err(AppError::Seed(_))));

    let missing = Config { seed_path: Some("/nonexistent/seed.json".to_string()), ..Config::default() };
    assert!(matches!(bootstrap_state(&missing), Err(AppError::Io(_))));

    fs::remove_file(path).ok();
}
