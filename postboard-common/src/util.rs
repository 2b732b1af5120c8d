use serde_json::Number;
use time::{Date, OffsetDateTime, UtcOffset};

/// Formats a date as `D.M.YYYY` without zero padding.
#[must_use]
pub fn format_date(date: Date) -> String {
    format!("{}.{}.{}", date.day(), u8::from(date.month()), date.year())
}

#[must_use]
pub fn today(offset: UtcOffset) -> Date {
    OffsetDateTime::now_utc().to_offset(offset).date()
}

/// Any number other than zero counts as set, whatever its sign or fraction.
#[must_use]
pub fn is_nonzero(number: &Number) -> bool {
    number.as_f64().is_some_and(|value| value != 0.0)
}
