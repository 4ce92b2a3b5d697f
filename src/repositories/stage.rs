use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};
use time::OffsetDateTime;

use crate::entity::construction_stage::{self, ActiveModel, Column, Entity as StageEntity};
use crate::error::AppResult;
use crate::models::timestamp::{format_instant, normalize};
use crate::models::{NewStage, Stage, StageChanges};
use crate::repositories::Repository;

/// Construction stage repository for database operations
#[derive(Clone)]
pub struct StageRepository {
    db: DatabaseConnection,
}

#[async_trait]
impl Repository<Stage> for StageRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Stage>> {
        let model = StageEntity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn delete(&self, id: i64) -> AppResult<u64> {
        let result = StageEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }

    async fn list(&self) -> AppResult<Vec<Stage>> {
        let models = StageEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}

impl StageRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a new stage and return its id
    pub async fn insert(&self, input: &NewStage) -> AppResult<i64> {
        let model = ActiveModel {
            id: NotSet,
            name: Set(input.name.clone()),
            start_date: Set(format_instant(input.start_date)?),
            end_date: Set(input.end_date.map(format_instant).transpose()?),
            duration: Set(input.duration),
            duration_unit: Set(input.duration_unit),
            color: Set(input.color.clone()),
            external_id: Set(input.external_id.clone()),
            status: Set(input.status),
        };

        let result = StageEntity::insert(model).exec(&self.db).await?;
        Ok(result.last_insert_id)
    }

    /// Overwrite only the columns present in `changes`; everything else keeps
    /// its stored value. Returns the number of rows touched.
    pub async fn update_by_id(&self, id: i64, changes: &StageChanges) -> AppResult<u64> {
        if changes.is_empty() {
            return Ok(0);
        }

        let mut update = StageEntity::update_many().filter(Column::Id.eq(id));

        if let Some(name) = &changes.name {
            update = update.col_expr(Column::Name, Expr::value(name.clone()));
        }
        if let Some(start_date) = changes.start_date {
            update = update.col_expr(Column::StartDate, timestamp_expr(start_date)?);
        }
        if let Some(end_date) = changes.end_date {
            update = update.col_expr(Column::EndDate, timestamp_expr(end_date)?);
        }
        if let Some(duration) = changes.duration {
            update = update.col_expr(Column::Duration, Expr::value(duration));
        }
        if let Some(unit) = changes.duration_unit {
            update = update.col_expr(Column::DurationUnit, Expr::value(unit.as_str()));
        }
        if let Some(color) = &changes.color {
            update = update.col_expr(Column::Color, Expr::value(color.clone()));
        }
        if let Some(external_id) = &changes.external_id {
            update = update.col_expr(Column::ExternalId, Expr::value(external_id.clone()));
        }
        if let Some(status) = changes.status {
            update = update.col_expr(Column::Status, Expr::value(status.as_str()));
        }

        let result = update.exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}

fn timestamp_expr(instant: OffsetDateTime) -> AppResult<sea_orm::sea_query::SimpleExpr> {
    Ok(Expr::value(format_instant(instant)?))
}

// Conversion from SeaORM model to our domain model
impl From<construction_stage::Model> for Stage {
    fn from(m: construction_stage::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            start_date: normalize(&m.start_date),
            end_date: m.end_date.as_deref().map(normalize),
            duration: m.duration,
            duration_unit: m.duration_unit,
            color: m.color,
            external_id: m.external_id,
            status: m.status,
        }
    }
}
