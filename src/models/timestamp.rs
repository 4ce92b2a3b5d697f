//! Instants travel as `YYYY-MM-DDTHH:MM:SSZ` on the wire and in storage.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

const ZULU: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]Z");

const WITH_OFFSET: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]"
);

/// Parse a strict ISO-8601 instant (`Z` or `±HH:MM` suffix, no fractional seconds)
/// and normalize it to UTC.
pub fn parse_instant(value: &str) -> Option<OffsetDateTime> {
    if let Ok(naive) = PrimitiveDateTime::parse(value, ZULU) {
        return Some(naive.assume_utc());
    }

    OffsetDateTime::parse(value, WITH_OFFSET)
        .ok()
        .map(|instant| instant.to_offset(UtcOffset::UTC))
}

pub fn format_instant(instant: OffsetDateTime) -> Result<String, time::error::Format> {
    instant.to_offset(UtcOffset::UTC).format(ZULU)
}

/// Re-render a stored timestamp in the wire form, passing through anything unparseable
pub fn normalize(stored: &str) -> String {
    parse_instant(stored)
        .and_then(|instant| format_instant(instant).ok())
        .unwrap_or_else(|| stored.to_string())
}
