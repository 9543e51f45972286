use std::env;

use chrono_tz::Tz;

use crate::error::AppError;

#[derive(Clone, Debug)]
pub struct Config {
    pub timezone: Tz,
    pub log_dir: String,
    pub mail_service_url: Option<String>,
    pub mail_service_token: String,
    pub seed_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: chrono_tz::Europe::Vienna,
            log_dir: "./logs".to_string(),
            mail_service_url: None,
            mail_service_token: String::new(),
            seed_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = Self::default();

        let timezone = match non_empty(lookup("BOOKING_TIMEZONE")) {
            Some(name) => name
                .parse::<Tz>()
                .map_err(|_| AppError::Config(format!("BOOKING_TIMEZONE is not an IANA time zone: {}", name)))?,
            None => defaults.timezone,
        };

        Ok(Self {
            timezone,
            log_dir: non_empty(lookup("LOG_DIR")).unwrap_or(defaults.log_dir),
            mail_service_url: non_empty(lookup("MAIL_SERVICE_URL")),
            mail_service_token: lookup("MAIL_SERVICE_TOKEN").unwrap_or(defaults.mail_service_token),
            seed_path: non_empty(lookup("SCHEDULE_SEED_PATH")),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
