pub mod date_time;
pub mod text;

pub use date_time::{
    add_time_span, date_equals, format, format_date, format_time, time_equals, truncate_to_date, FormatOptions,
    MonthStyle, NumericStyle, TextStyle,
};
pub use text::pluralize;
