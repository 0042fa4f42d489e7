use time::{Date, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset, macros::format_description};

use crate::error::ActivatorError;

/// Start of the backfill window: day 1 of the same calendar month one year before `now`,
/// at midnight UTC, formatted as `YYYY-MM-DDTHH:MM:SSZ`.
pub fn backfill_from(now: OffsetDateTime) -> Result<String, ActivatorError> {
    let now = now.to_offset(UtcOffset::UTC);
    let day = Date::from_calendar_date(now.year() - 1, now.month(), 1)?;
    let start = PrimitiveDateTime::new(day, Time::MIDNIGHT);

    let format = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]Z");
    Ok(start.format(format)?)
}
