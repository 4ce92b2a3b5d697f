use crate::error::{AppError, AppResult};
use crate::models::timestamp::parse_instant;
use crate::models::{
    CreateStage, DeleteOutcome, DurationUnit, NewStage, Stage, StageChanges, StageStatus,
    UpdateStage,
};
use crate::repositories::{Repository, StageRepository};
use crate::services::duration::calculate_duration;
use crate::services::validation::{StageValidationError, StageValidator};

/// CRUD operations over construction stages
#[derive(Clone)]
pub struct StageService {
    repo: StageRepository,
}

impl StageService {
    pub fn new(repo: StageRepository) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> AppResult<Vec<Stage>> {
        self.repo.list().await
    }

    /// A missing stage is `Ok(None)`
    pub async fn get(&self, id: i64) -> AppResult<Option<Stage>> {
        self.repo.find_by_id(id).await
    }

    /// Validate, compute the duration once, insert, then read the row back.
    ///
    /// The read-back is a separate round trip; if a concurrent delete wins the
    /// race the result is `Ok(None)`.
    pub async fn create(&self, payload: CreateStage) -> AppResult<Option<Stage>> {
        StageValidator::validate(&payload.fields())?;

        let start_date = parse_instant(&payload.start_date)
            .ok_or(StageValidationError::InvalidStartDate)?;
        let end_date = payload
            .end_date
            .as_deref()
            .map(|raw| parse_instant(raw).ok_or(StageValidationError::InvalidEndDate))
            .transpose()?;
        let duration = calculate_duration(start_date, end_date, payload.duration_unit.as_deref());

        let new_stage = NewStage {
            name: payload.name,
            start_date,
            end_date,
            duration,
            duration_unit: payload
                .duration_unit
                .as_deref()
                .and_then(DurationUnit::parse)
                .unwrap_or_default(),
            color: payload.color,
            external_id: payload.external_id,
            status: payload
                .status
                .as_deref()
                .and_then(StageStatus::parse)
                .unwrap_or_default(),
        };

        let id = self.repo.insert(&new_stage).await?;
        tracing::info!(id, name = %new_stage.name, ?duration, "Construction stage created");

        self.repo.find_by_id(id).await
    }

    /// Coalesce-merge the present fields into the stored row.
    ///
    /// `duration` is only written when the payload carries it explicitly; new
    /// dates or units do not trigger a recomputation.
    pub async fn update(&self, payload: UpdateStage, id: i64) -> AppResult<Option<Stage>> {
        StageValidator::validate(&payload.fields())?;

        let changes = StageChanges {
            start_date: payload
                .start_date
                .as_deref()
                .map(|raw| parse_instant(raw).ok_or(StageValidationError::InvalidStartDate))
                .transpose()?,
            end_date: payload
                .end_date
                .as_deref()
                .map(|raw| parse_instant(raw).ok_or(StageValidationError::InvalidEndDate))
                .transpose()?,
            duration_unit: payload.duration_unit.as_deref().and_then(DurationUnit::parse),
            status: payload.status.as_deref().and_then(StageStatus::parse),
            name: payload.name,
            duration: payload.duration,
            color: payload.color,
            external_id: payload.external_id,
        };

        let rows = self.repo.update_by_id(id, &changes).await?;
        tracing::info!(id, rows, "Construction stage updated");

        self.repo.find_by_id(id).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<DeleteOutcome> {
        let rows = self.repo.delete(id).await?;

        if rows == 0 {
            tracing::debug!(id, "Construction stage to delete was not found");
            return Ok(DeleteOutcome::NotFound);
        }

        tracing::info!(id, "Construction stage deleted");
        Ok(DeleteOutcome::Deleted)
    }
}

/// Not-found error shared by get, update and delete
pub fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Construction stage with ID: {} was not found.", id))
}
