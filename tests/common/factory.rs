use time::macros::datetime;

use stage_api::models::{DurationUnit, NewStage, Stage, StageStatus};
use stage_api::repositories::{Repository, StageRepository};
use stage_api::state::AppState;

/// Factory for creating test data directly through the repository
pub struct Factory {
    repo: StageRepository,
}

#[allow(dead_code)]
impl Factory {
    pub fn new(state: &AppState) -> Self {
        Self {
            repo: StageRepository::new(state.db.clone()),
        }
    }

    /// A fully populated stage spanning one week
    pub fn new_stage(name: &str) -> NewStage {
        NewStage {
            name: name.to_string(),
            start_date: datetime!(2024-01-01 00:00:00 UTC),
            end_date: Some(datetime!(2024-01-08 00:00:00 UTC)),
            duration: Some(7),
            duration_unit: DurationUnit::Days,
            color: Some("#FFFFFF".to_string()),
            external_id: Some("EXT-1".to_string()),
            status: StageStatus::New,
        }
    }

    /// Create a test stage
    pub async fn create_stage(&self, name: &str) -> Stage {
        self.insert(Self::new_stage(name)).await
    }

    /// Insert an arbitrary stage and read it back
    pub async fn insert(&self, input: NewStage) -> Stage {
        let id = self.repo.insert(&input).await.unwrap();
        self.repo.find_by_id(id).await.unwrap().unwrap()
    }

    pub async fn find(&self, id: i64) -> Option<Stage> {
        self.repo.find_by_id(id).await.unwrap()
    }
}
