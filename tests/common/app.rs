use axum_test::TestServer;
use stage_api::build_router;
use stage_api::state::AppState;

/// Test application wrapper
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
}

impl TestApp {
    /// Create a new test application on its own in-memory database
    pub async fn new() -> Self {
        let state = AppState::in_memory()
            .await
            .expect("Failed to create test app state");

        let router = build_router(state.clone());
        let server = TestServer::new(router).expect("Failed to create test server");

        Self { server, state }
    }
}
