//! Calendar date handling for product release and revision dates.

use jiff::{Timestamp, ToSpan, civil::Date, civil::DateTime, tz::TimeZone};

/// Parse a calendar date.
///
/// Accepts a plain `YYYY-MM-DD` date, a civil datetime, or an RFC 3339
/// timestamp. Timestamps are converted to their UTC date.
pub fn parse_date(value: &str) -> Option<Date> {
    let value = value.trim();

    if value.is_empty() {
        return None;
    }

    if let Ok(date) = value.parse::<Date>() {
        return Some(date);
    }

    if let Ok(datetime) = value.parse::<DateTime>() {
        return Some(datetime.date());
    }

    value
        .parse::<Timestamp>()
        .ok()
        .map(|timestamp| timestamp.to_zoned(TimeZone::UTC).date())
}

/// The only acceptable revision date for a given release date.
///
/// Same month and day, one year later. Feb 29 rolls over to Mar 1 when the
/// following year has no leap day.
pub fn expected_revision(release: Date) -> Option<Date> {
    let next = release.checked_add(1.year()).ok()?;

    if next.day() == release.day() {
        return Some(next);
    }

    next.checked_add(1.day()).ok()
}

pub(crate) mod serde_date {
    use jiff::civil::Date;
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    pub(crate) fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(date)
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let raw = String::deserialize(deserializer)?;

        super::parse_date(&raw).ok_or_else(|| D::Error::custom(format!("invalid date: {raw:?}")))
    }
}
