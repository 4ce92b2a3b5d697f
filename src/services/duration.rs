use time::OffsetDateTime;

use crate::models::DurationUnit;

/// Duration between `start` and `end` in the given unit.
///
/// The base quantity is always the number of whole days between the two
/// instants, regardless of order; `HOURS` and `WEEKS` scale that day count.
/// Units outside `HOURS`/`DAYS`/`WEEKS` (or no unit) count as `DAYS`.
/// Without an `end` there is no duration.
pub fn calculate_duration(
    start: OffsetDateTime,
    end: Option<OffsetDateTime>,
    unit: Option<&str>,
) -> Option<i64> {
    let end = end?;
    let unit = unit.and_then(DurationUnit::parse).unwrap_or_default();
    let days = (end - start).abs().whole_days();

    Some(match unit {
        DurationUnit::Hours => days * 24,
        DurationUnit::Days => days,
        DurationUnit::Weeks => days * 7,
    })
}
