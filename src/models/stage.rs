use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;

/// Unit the stored duration is expressed in
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "UPPERCASE")]
pub enum DurationUnit {
    #[sea_orm(string_value = "HOURS")]
    Hours,
    #[default]
    #[sea_orm(string_value = "DAYS")]
    Days,
    #[sea_orm(string_value = "WEEKS")]
    Weeks,
}

impl DurationUnit {
    pub const ALL: [DurationUnit; 3] = [Self::Hours, Self::Days, Self::Weeks];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hours => "HOURS",
            Self::Days => "DAYS",
            Self::Weeks => "WEEKS",
        }
    }

    /// Exact, case-sensitive match against the wire names
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|unit| unit.as_str() == value)
    }
}

/// Lifecycle status of a stage. `Deleted` is caller-managed; nothing sets it automatically.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "UPPERCASE")]
pub enum StageStatus {
    #[default]
    #[sea_orm(string_value = "NEW")]
    New,
    #[sea_orm(string_value = "PLANNED")]
    Planned,
    #[sea_orm(string_value = "DELETED")]
    Deleted,
}

impl StageStatus {
    pub const ALL: [StageStatus; 3] = [Self::New, Self::Planned, Self::Deleted];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::Planned => "PLANNED",
            Self::Deleted => "DELETED",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

/// A construction stage as rendered on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    pub id: i64,
    pub name: String,
    /// `YYYY-MM-DDTHH:MM:SSZ`
    pub start_date: String,
    pub end_date: Option<String>,
    pub duration: Option<i64>,
    pub duration_unit: DurationUnit,
    pub color: Option<String>,
    pub external_id: Option<String>,
    pub status: StageStatus,
}

/// Body of `POST constructionStages`
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStage {
    pub name: String,
    #[schema(example = "2024-01-01T00:00:00Z")]
    pub start_date: String,
    pub end_date: Option<String>,
    #[schema(example = "DAYS")]
    pub duration_unit: Option<String>,
    #[schema(example = "#FF0000")]
    pub color: Option<String>,
    pub external_id: Option<String>,
    #[schema(example = "NEW")]
    pub status: Option<String>,
}

/// Body of `PATCH constructionStages/{id}`. Absent (or null) fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStage {
    pub name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub duration: Option<i64>,
    pub duration_unit: Option<String>,
    pub color: Option<String>,
    pub external_id: Option<String>,
    pub status: Option<String>,
}

/// Borrowed view over the checkable fields of either payload shape
#[derive(Debug, Clone, Copy, Default)]
pub struct StageFields<'a> {
    pub name: Option<&'a str>,
    pub start_date: Option<&'a str>,
    pub end_date: Option<&'a str>,
    pub duration_unit: Option<&'a str>,
    pub color: Option<&'a str>,
    pub external_id: Option<&'a str>,
    pub status: Option<&'a str>,
}

impl CreateStage {
    pub fn fields(&self) -> StageFields<'_> {
        StageFields {
            name: Some(&self.name),
            start_date: Some(&self.start_date),
            end_date: self.end_date.as_deref(),
            duration_unit: self.duration_unit.as_deref(),
            color: self.color.as_deref(),
            external_id: self.external_id.as_deref(),
            status: self.status.as_deref(),
        }
    }
}

impl UpdateStage {
    pub fn fields(&self) -> StageFields<'_> {
        StageFields {
            name: self.name.as_deref(),
            start_date: self.start_date.as_deref(),
            end_date: self.end_date.as_deref(),
            duration_unit: self.duration_unit.as_deref(),
            color: self.color.as_deref(),
            external_id: self.external_id.as_deref(),
            status: self.status.as_deref(),
        }
    }
}

/// Row to insert, already validated and typed
#[derive(Debug, Clone)]
pub struct NewStage {
    pub name: String,
    pub start_date: OffsetDateTime,
    pub end_date: Option<OffsetDateTime>,
    pub duration: Option<i64>,
    pub duration_unit: DurationUnit,
    pub color: Option<String>,
    pub external_id: Option<String>,
    pub status: StageStatus,
}

/// Columns to overwrite on update; `None` leaves the stored value as is
#[derive(Debug, Clone, Default)]
pub struct StageChanges {
    pub name: Option<String>,
    pub start_date: Option<OffsetDateTime>,
    pub end_date: Option<OffsetDateTime>,
    pub duration: Option<i64>,
    pub duration_unit: Option<DurationUnit>,
    pub color: Option<String>,
    pub external_id: Option<String>,
    pub status: Option<StageStatus>,
}

impl StageChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.duration.is_none()
            && self.duration_unit.is_none()
            && self.color.is_none()
            && self.external_id.is_none()
            && self.status.is_none()
    }
}

/// Result of a delete by id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}
