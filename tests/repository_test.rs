mod common;

use time::macros::datetime;

use stage_api::models::{DurationUnit, StageChanges, StageStatus};
use stage_api::repositories::{Repository, StageRepository};

use common::{Factory, TestApp};

#[tokio::test]
async fn test_insert_assigns_increasing_ids() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);

    let first = factory.create_stage("First").await;
    let second = factory.create_stage("Second").await;

    assert!(second.id > first.id);
}

#[tokio::test]
async fn test_update_by_id_merges_present_fields() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let repo = StageRepository::new(app.state.db.clone());
    let stage = factory.create_stage("Merge").await;

    let changes = StageChanges {
        end_date: Some(datetime!(2024-02-01 06:00:00 +06:00)),
        duration_unit: Some(DurationUnit::Weeks),
        status: Some(StageStatus::Deleted),
        ..Default::default()
    };

    let rows = repo.update_by_id(stage.id, &changes).await.unwrap();
    assert_eq!(rows, 1);

    let updated = repo.find_by_id(stage.id).await.unwrap().unwrap();
    assert_eq!(updated.end_date.as_deref(), Some("2024-02-01T00:00:00Z"));
    assert_eq!(updated.duration_unit, DurationUnit::Weeks);
    assert_eq!(updated.status, StageStatus::Deleted);
    assert_eq!(updated.name, "Merge");
    assert_eq!(updated.start_date, stage.start_date);
    assert_eq!(updated.duration, stage.duration);
    assert_eq!(updated.color, stage.color);
}

#[tokio::test]
async fn test_update_by_id_without_changes_is_a_no_op() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let repo = StageRepository::new(app.state.db.clone());
    let stage = factory.create_stage("Still").await;

    let rows = repo
        .update_by_id(stage.id, &StageChanges::default())
        .await
        .unwrap();
    assert_eq!(rows, 0);

    assert_eq!(repo.find_by_id(stage.id).await.unwrap(), Some(stage));
}

#[tokio::test]
async fn test_update_by_id_missing_row() {
    let app = TestApp::new().await;
    let repo = StageRepository::new(app.state.db.clone());

    let changes = StageChanges {
        name: Some("Nobody".to_string()),
        ..Default::default()
    };

    assert_eq!(repo.update_by_id(77, &changes).await.unwrap(), 0);
    assert_eq!(repo.find_by_id(77).await.unwrap(), None);
}

#[tokio::test]
async fn test_delete_reports_affected_rows() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let repo = StageRepository::new(app.state.db.clone());
    let stage = factory.create_stage("Gone").await;

    assert_eq!(repo.delete(stage.id).await.unwrap(), 1);
    assert_eq!(repo.delete(stage.id).await.unwrap(), 0);
}

#[tokio::test]
async fn test_optional_columns_round_trip_as_null() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);

    let mut input = Factory::new_stage("Sparse");
    input.end_date = None;
    input.duration = None;
    input.color = None;
    input.external_id = None;

    let stage = factory.insert(input).await;
    assert_eq!(stage.end_date, None);
    assert_eq!(stage.duration, None);
    assert_eq!(stage.color, None);
    assert_eq!(stage.external_id, None);
    assert_eq!(stage.start_date, "2024-01-01T00:00:00Z");
}
