use std::sync::LazyLock;

use regex::Regex;

use crate::models::timestamp::parse_instant;
use crate::models::{DurationUnit, StageFields, StageStatus};

pub const MAX_NAME_LEN: usize = 255;
pub const MAX_EXTERNAL_ID_LEN: usize = 255;

static COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("valid regex"));

/// First rule a stage payload violated
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StageValidationError {
    #[error("Name must be a maximum of 255 characters.")]
    NameTooLong,

    #[error("Invalid start_date format. It should be in the ISO8601 format (e.g., 2022-12-31T14:59:00Z).")]
    InvalidStartDate,

    #[error("Invalid end_date format. It should be in the ISO8601 format (e.g., 2022-12-31T14:59:00Z).")]
    InvalidEndDate,

    #[error("end_date should be later than start_date.")]
    EndNotAfterStart,

    #[error("Invalid durationUnit. It should be one of: HOURS, DAYS, WEEKS")]
    InvalidDurationUnit,

    #[error("Invalid color. It should be a valid HEX color code (e.g., #FF0000).")]
    InvalidColor,

    #[error("externalId must be a maximum of 255 characters.")]
    ExternalIdTooLong,

    #[error("Invalid status. It should be one of: NEW, PLANNED, DELETED")]
    InvalidStatus,
}

pub struct StageValidator;

impl StageValidator {
    /// Check every present field, stopping at the first violation.
    ///
    /// Absent fields are never an error here; required-ness of `name` and
    /// `startDate` on create is enforced by the payload shape itself.
    pub fn validate(fields: &StageFields<'_>) -> Result<(), StageValidationError> {
        if let Some(name) = fields.name {
            if name.chars().count() > MAX_NAME_LEN {
                return Err(StageValidationError::NameTooLong);
            }
        }

        let start = match fields.start_date {
            Some(raw) => Some(parse_instant(raw).ok_or(StageValidationError::InvalidStartDate)?),
            None => None,
        };

        if let Some(raw) = fields.end_date {
            let end = parse_instant(raw).ok_or(StageValidationError::InvalidEndDate)?;
            if let Some(start) = start {
                if end <= start {
                    return Err(StageValidationError::EndNotAfterStart);
                }
            }
        }

        if let Some(unit) = fields.duration_unit {
            if DurationUnit::parse(unit).is_none() {
                return Err(StageValidationError::InvalidDurationUnit);
            }
        }

        if let Some(color) = fields.color {
            if !COLOR_RE.is_match(color) {
                return Err(StageValidationError::InvalidColor);
            }
        }

        if let Some(external_id) = fields.external_id {
            if external_id.chars().count() > MAX_EXTERNAL_ID_LEN {
                return Err(StageValidationError::ExternalIdTooLong);
            }
        }

        if let Some(status) = fields.status {
            if StageStatus::parse(status).is_none() {
                return Err(StageValidationError::InvalidStatus);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(fields: StageFields<'_>) -> Result<(), StageValidationError> {
        StageValidator::validate(&fields)
    }

    #[test]
    fn test_accepts_complete_payload() {
        let fields = StageFields {
            name: Some("Foundation"),
            start_date: Some("2024-01-01T00:00:00Z"),
            end_date: Some("2024-01-08T00:00:00Z"),
            duration_unit: Some("DAYS"),
            color: Some("#FF0000"),
            external_id: Some("EXT-1"),
            status: Some("NEW"),
        };
        assert_eq!(check(fields), Ok(()));
    }

    #[test]
    fn test_accepts_status_only_update() {
        let fields = StageFields {
            status: Some("NEW"),
            ..Default::default()
        };
        assert_eq!(check(fields), Ok(()));
    }

    #[test]
    fn test_name_length_boundary() {
        let ok = "a".repeat(255);
        let too_long = "a".repeat(256);

        assert_eq!(
            check(StageFields {
                name: Some(&ok),
                ..Default::default()
            }),
            Ok(())
        );
        assert_eq!(
            check(StageFields {
                name: Some(&too_long),
                ..Default::default()
            }),
            Err(StageValidationError::NameTooLong)
        );
    }

    #[test]
    fn test_name_length_counts_characters() {
        let name = "é".repeat(255);
        assert_eq!(
            check(StageFields {
                name: Some(&name),
                ..Default::default()
            }),
            Ok(())
        );
    }

    #[test]
    fn test_rejects_malformed_start_date() {
        let fields = StageFields {
            start_date: Some("not-a-date"),
            ..Default::default()
        };
        assert_eq!(check(fields), Err(StageValidationError::InvalidStartDate));
    }

    #[test]
    fn test_rejects_malformed_end_date() {
        let fields = StageFields {
            end_date: Some("2024-01-08"),
            ..Default::default()
        };
        assert_eq!(check(fields), Err(StageValidationError::InvalidEndDate));
    }

    #[test]
    fn test_rejects_end_before_start() {
        let fields = StageFields {
            start_date: Some("2023-01-02T00:00:00Z"),
            end_date: Some("2023-01-01T00:00:00Z"),
            ..Default::default()
        };
        assert_eq!(check(fields), Err(StageValidationError::EndNotAfterStart));
    }

    #[test]
    fn test_rejects_end_equal_to_start() {
        let fields = StageFields {
            start_date: Some("2023-01-01T00:00:00Z"),
            end_date: Some("2023-01-01T01:00:00+01:00"),
            ..Default::default()
        };
        assert_eq!(check(fields), Err(StageValidationError::EndNotAfterStart));
    }

    #[test]
    fn test_end_date_alone_skips_ordering_check() {
        let fields = StageFields {
            end_date: Some("2000-01-01T00:00:00Z"),
            ..Default::default()
        };
        assert_eq!(check(fields), Ok(()));
    }

    #[test]
    fn test_rejects_unknown_duration_unit() {
        let fields = StageFields {
            duration_unit: Some("MONTHS"),
            ..Default::default()
        };
        assert_eq!(check(fields), Err(StageValidationError::InvalidDurationUnit));

        let lowercase = StageFields {
            duration_unit: Some("days"),
            ..Default::default()
        };
        assert_eq!(check(lowercase), Err(StageValidationError::InvalidDurationUnit));
    }

    #[test]
    fn test_color_patterns() {
        for color in ["#FFF", "#fff", "#A1b2C3", "#000000"] {
            let fields = StageFields {
                color: Some(color),
                ..Default::default()
            };
            assert_eq!(check(fields), Ok(()), "{color} should be accepted");
        }

        for color in ["red", "#FFFF", "FFFFFF", "#GGGGGG", "#FFFFFFF", "#"] {
            let fields = StageFields {
                color: Some(color),
                ..Default::default()
            };
            assert_eq!(
                check(fields),
                Err(StageValidationError::InvalidColor),
                "{color} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_long_external_id() {
        let external_id = "x".repeat(300);
        let fields = StageFields {
            external_id: Some(&external_id),
            ..Default::default()
        };
        assert_eq!(check(fields), Err(StageValidationError::ExternalIdTooLong));
    }

    #[test]
    fn test_rejects_unknown_status() {
        let fields = StageFields {
            status: Some("ARCHIVED"),
            ..Default::default()
        };
        assert_eq!(check(fields), Err(StageValidationError::InvalidStatus));
    }

    #[test]
    fn test_first_violation_wins() {
        let name = "a".repeat(256);
        let fields = StageFields {
            name: Some(&name),
            color: Some("red"),
            status: Some("ARCHIVED"),
            ..Default::default()
        };
        assert_eq!(check(fields), Err(StageValidationError::NameTooLong));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            StageValidationError::InvalidStartDate.to_string(),
            "Invalid start_date format. It should be in the ISO8601 format (e.g., 2022-12-31T14:59:00Z)."
        );
        assert_eq!(
            StageValidationError::InvalidEndDate.to_string(),
            "Invalid end_date format. It should be in the ISO8601 format (e.g., 2022-12-31T14:59:00Z)."
        );
        assert_eq!(
            StageValidationError::EndNotAfterStart.to_string(),
            "end_date should be later than start_date."
        );
        assert_eq!(
            StageValidationError::InvalidStatus.to_string(),
            "Invalid status. It should be one of: NEW, PLANNED, DELETED"
        );
    }
}
