use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::{DurationUnit, StageStatus};

/// Timestamp columns hold `YYYY-MM-DDTHH:MM:SSZ` text.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "construction_stages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub duration: Option<i64>,
    #[sea_orm(column_name = "durationUnit")]
    pub duration_unit: DurationUnit,
    pub color: Option<String>,
    #[sea_orm(column_name = "externalId")]
    pub external_id: Option<String>,
    pub status: StageStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
