use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

pub const SUBSCRIBER_NAME_MAX: usize = 200;
const PHONE_DIGITS_MIN: usize = 6;
const PHONE_DIGITS_MAX: usize = 20;

pub fn is_valid_subscriber_name(name: &str) -> bool {
    let trimmed = name.trim();
    !trimmed.is_empty()
        && trimmed.chars().count() <= SUBSCRIBER_NAME_MAX
        && !trimmed.chars().any(char::is_control)
}

pub fn is_valid_mail_address(mail: &str) -> bool {
    static RE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("valid regex")
    });
    RE.is_match(mail.trim())
}

pub fn is_valid_phone_number(phone: &str) -> bool {
    static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9 /()\-]+$").expect("valid regex"));
    let trimmed = phone.trim();
    let digits = trimmed.chars().filter(char::is_ascii_digit).count();
    RE.is_match(trimmed) && (PHONE_DIGITS_MIN..=PHONE_DIGITS_MAX).contains(&digits)
}

/// Requested quantity as a unit count, if it is a positive JSON integer that
/// fits. Floats, strings and null are rejected.
pub fn parse_quantity(quantity: &Value) -> Option<u32> {
    let quantity = quantity.as_u64().filter(|q| *q > 0)?;
    u32::try_from(quantity).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_subscriber_names() {
        assert!(is_valid_subscriber_name("Anna Huber"));
        assert!(is_valid_subscriber_name("  Zoë  "));
        assert!(!is_valid_subscriber_name(""));
        assert!(!is_valid_subscriber_name("   "));
        assert!(!is_valid_subscriber_name("Anna\nHuber"));
        assert!(!is_valid_subscriber_name(&"x".repeat(SUBSCRIBER_NAME_MAX + 1)));
    }

    #[test]
    fn test_mail_addresses() {
        assert!(is_valid_mail_address("anna@example.at"));
        assert!(is_valid_mail_address("a.b+c@mail.example.co.at"));
        assert!(!is_valid_mail_address("anna"));
        assert!(!is_valid_mail_address("anna@localhost"));
        assert!(!is_valid_mail_address("an na@example.at"));
        assert!(!is_valid_mail_address("anna@@example.at"));
    }

    #[test]
    fn test_phone_numbers() {
        assert!(is_valid_phone_number("+43 664 1234567"));
        assert!(is_valid_phone_number("0664/123 45 67"));
        assert!(is_valid_phone_number("(01) 234-5678"));
        assert!(!is_valid_phone_number("12345"));
        assert!(!is_valid_phone_number("call me"));
        assert!(!is_valid_phone_number("+43 664 12x4567"));
        assert!(!is_valid_phone_number(""));
    }

    #[test]
    fn test_quantities() {
        assert_eq!(parse_quantity(&json!(1)), Some(1));
        assert_eq!(parse_quantity(&json!(0)), None);
        assert_eq!(parse_quantity(&json!(-3)), None);
        assert_eq!(parse_quantity(&json!(u64::from(u32::MAX) + 1)), None);
        assert_eq!(parse_quantity(&json!(2.5)), None);
        assert_eq!(parse_quantity(&json!(2.0)), None);
        assert_eq!(parse_quantity(&json!("3")), None);
        assert_eq!(parse_quantity(&Value::Null), None);
    }
}
