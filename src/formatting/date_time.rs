//! Display helpers for instants, rendered the way the `de-AT` locale does.
//!
//! All functions are pure. Callers decide the time zone by converting the
//! instant before passing it in; "local" below means the zone of the value.

use chrono::{DateTime, Datelike, NaiveTime, TimeZone, Timelike, Weekday};

use crate::domain::models::time_span::{TimeSpan, TimeSpanError};

const MONTHS_LONG: [&str; 12] = [
    "Jänner", "Februar", "März", "April", "Mai", "Juni",
    "Juli", "August", "September", "Oktober", "November", "Dezember",
];

const MONTHS_SHORT: [&str; 12] = [
    "Jän.", "Feb.", "März", "Apr.", "Mai", "Juni",
    "Juli", "Aug.", "Sept.", "Okt.", "Nov.", "Dez.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericStyle {
    Numeric,
    TwoDigit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthStyle {
    Numeric,
    TwoDigit,
    Long,
    Short,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Long,
    Short,
}

/// Which components to render and how. Unset fields fall back to the
/// defaults of the function being called.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    pub weekday: Option<TextStyle>,
    pub year: Option<NumericStyle>,
    pub month: Option<MonthStyle>,
    pub day: Option<NumericStyle>,
    pub hour: Option<NumericStyle>,
    pub minute: Option<NumericStyle>,
}

impl FormatOptions {
    const DATE: FormatOptions = FormatOptions {
        weekday: None,
        year: Some(NumericStyle::Numeric),
        month: Some(MonthStyle::TwoDigit),
        day: Some(NumericStyle::TwoDigit),
        hour: None,
        minute: None,
    };

    const DATE_TIME: FormatOptions = FormatOptions {
        hour: Some(NumericStyle::TwoDigit),
        minute: Some(NumericStyle::TwoDigit),
        ..FormatOptions::DATE
    };

    /// Fields set on `self` win over `defaults`.
    pub fn or(self, defaults: FormatOptions) -> FormatOptions {
        FormatOptions {
            weekday: self.weekday.or(defaults.weekday),
            year: self.year.or(defaults.year),
            month: self.month.or(defaults.month),
            day: self.day.or(defaults.day),
            hour: self.hour.or(defaults.hour),
            minute: self.minute.or(defaults.minute),
        }
    }
}

pub fn format_date<Tz: TimeZone>(v: &DateTime<Tz>, options: Option<FormatOptions>) -> String {
    let opts = options.unwrap_or_default().or(FormatOptions::DATE);
    render(v, &opts)
}

pub fn format_time<Tz: TimeZone>(v: &DateTime<Tz>) -> String {
    let opts = FormatOptions {
        hour: Some(NumericStyle::TwoDigit),
        minute: Some(NumericStyle::TwoDigit),
        ..FormatOptions::default()
    };
    render(v, &opts)
}

pub fn format<Tz: TimeZone>(v: &DateTime<Tz>, options: Option<FormatOptions>) -> String {
    let opts = options.unwrap_or_default().or(FormatOptions::DATE_TIME);
    render(v, &opts)
}

/// Local midnight of the same calendar date.
///
/// Returns `None` only when midnight does not exist in the zone (a DST jump
/// at 00:00). When midnight occurs twice the earlier instant is used.
pub fn truncate_to_date<Tz: TimeZone>(v: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    let midnight = v.date_naive().and_time(NaiveTime::MIN);
    v.timezone().from_local_datetime(&midnight).earliest()
}

pub fn date_equals<Tz: TimeZone>(a: &DateTime<Tz>, b: &DateTime<Tz>) -> bool {
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}

pub fn time_equals<Tz: TimeZone>(a: &DateTime<Tz>, b: &DateTime<Tz>) -> bool {
    a.hour() == b.hour() && a.minute() == b.minute() && a.second() == b.second()
}

/// Moves `v` forward by a `[d.]hh:mm:ss[.f]` span.
pub fn add_time_span<Tz: TimeZone>(v: &DateTime<Tz>, span: &str) -> Result<DateTime<Tz>, TimeSpanError> {
    let parsed: TimeSpan = span.parse()?;
    v.clone()
        .checked_add_signed(parsed.as_duration())
        .ok_or_else(|| TimeSpanError::OutOfRange(span.to_string()))
}

fn render<Tz: TimeZone>(v: &DateTime<Tz>, opts: &FormatOptions) -> String {
    let date = render_date(v, opts);
    let time = render_time(v, opts);
    match (date, time) {
        (Some(d), Some(t)) => format!("{}, {}", d, t),
        (Some(d), None) => d,
        (None, Some(t)) => t,
        (None, None) => String::new(),
    }
}

fn numeric(value: u32, style: NumericStyle) -> String {
    match style {
        NumericStyle::Numeric => value.to_string(),
        NumericStyle::TwoDigit => format!("{:02}", value % 100),
    }
}

fn render_date<Tz: TimeZone>(v: &DateTime<Tz>, opts: &FormatOptions) -> Option<String> {
    let day = opts.day.map(|style| numeric(v.day(), style));
    let year = opts.year.map(|style| match style {
        NumericStyle::Numeric => v.year().to_string(),
        NumericStyle::TwoDigit => format!("{:02}", v.year().rem_euclid(100)),
    });

    let core = match opts.month {
        Some(MonthStyle::Long) | Some(MonthStyle::Short) => {
            let names = if opts.month == Some(MonthStyle::Long) { &MONTHS_LONG } else { &MONTHS_SHORT };
            let month = names[v.month0() as usize].to_string();
            let mut parts = Vec::new();
            if let Some(d) = day {
                parts.push(format!("{}.", d));
            }
            parts.push(month);
            if let Some(y) = year {
                parts.push(y);
            }
            Some(parts.join(" "))
        }
        month_style => {
            let month = month_style.map(|style| match style {
                MonthStyle::TwoDigit => format!("{:02}", v.month()),
                _ => v.month().to_string(),
            });
            match (day, month, year) {
                (Some(d), Some(m), Some(y)) => Some(format!("{}.{}.{}", d, m, y)),
                (Some(d), Some(m), None) => Some(format!("{}.{}.", d, m)),
                (None, Some(m), Some(y)) => Some(format!("{}.{}", m, y)),
                (Some(d), None, Some(y)) => Some(format!("{}. {}", d, y)),
                (Some(d), None, None) => Some(d),
                (None, Some(m), None) => Some(m),
                (None, None, Some(y)) => Some(y),
                (None, None, None) => None,
            }
        }
    };

    let weekday = opts.weekday.map(|style| weekday_name(v.weekday(), style));
    match (weekday, core) {
        (Some(w), Some(c)) => Some(format!("{}, {}", w, c)),
        (Some(w), None) => Some(w.to_string()),
        (None, core) => core,
    }
}

fn render_time<Tz: TimeZone>(v: &DateTime<Tz>, opts: &FormatOptions) -> Option<String> {
    // de always pads the hour when minutes are shown.
    match (opts.hour, opts.minute) {
        (Some(_), Some(_)) => Some(format!("{:02}:{:02}", v.hour(), v.minute())),
        (Some(_), None) => Some(format!("{:02} Uhr", v.hour())),
        (None, Some(style)) => Some(numeric(v.minute(), style)),
        (None, None) => None,
    }
}

fn weekday_name(day: Weekday, style: TextStyle) -> &'static str {
    match (day, style) {
        (Weekday::Mon, TextStyle::Long) => "Montag",
        (Weekday::Tue, TextStyle::Long) => "Dienstag",
        (Weekday::Wed, TextStyle::Long) => "Mittwoch",
        (Weekday::Thu, TextStyle::Long) => "Donnerstag",
        (Weekday::Fri, TextStyle::Long) => "Freitag",
        (Weekday::Sat, TextStyle::Long) => "Samstag",
        (Weekday::Sun, TextStyle::Long) => "Sonntag",
        (Weekday::Mon, TextStyle::Short) => "Mo.",
        (Weekday::Tue, TextStyle::Short) => "Di.",
        (Weekday::Wed, TextStyle::Short) => "Mi.",
        (Weekday::Thu, TextStyle::Short) => "Do.",
        (Weekday::Fri, TextStyle::Short) => "Fr.",
        (Weekday::Sat, TextStyle::Short) => "Sa.",
        (Weekday::Sun, TextStyle::Short) => "So.",
    }
}
