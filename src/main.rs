use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use stage_api::build_router;
use stage_api::config::Config;
use stage_api::handlers::{self, DeleteStageResponse, DocumentationResponse, EndpointDoc};
use stage_api::models::{CreateStage, DurationUnit, Stage, StageStatus, UpdateStage};
use stage_api::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::stage::list_stages,
        handlers::stage::get_stage,
        handlers::stage::create_stage,
        handlers::stage::update_stage,
        handlers::stage::delete_stage,
    ),
    components(schemas(
        Stage,
        CreateStage,
        UpdateStage,
        DurationUnit,
        StageStatus,
        DeleteStageResponse,
        DocumentationResponse,
        EndpointDoc,
    )),
    tags(
        (name = "Construction Stages", description = "Construction stage management endpoints")
    )
)]
struct ApiDoc;

/// Log to stdout, filtered by `RUST_LOG`; `LOG_FORMAT=json` switches to JSON lines
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT").is_ok_and(|format| format == "json");

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration first so .env can set RUST_LOG
    let config = Config::from_env()?;
    init_tracing();

    let addr = config.server_addr();

    tracing::info!("Connecting to database...");
    let state = AppState::new(config).await?;
    tracing::info!("Database connection established");

    let app = build_router(state)
        // Add Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server started on http://{}", addr);
    tracing::info!("Swagger UI: http://{}/swagger-ui/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
