use serde::Serialize;
use utoipa::ToSchema;

use crate::dispatch::Operation;
use crate::handlers::PrettyJson;
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct EndpointDoc {
    pub path: String,
    pub method: String,
    pub description: String,
    pub function: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DocumentationResponse {
    pub endpoints: Vec<EndpointDoc>,
}

/// Describe the construction stage endpoints, straight from the route table
pub fn documentation(state: &AppState) -> PrettyJson<DocumentationResponse> {
    let endpoints = state
        .routes
        .routes()
        .iter()
        .filter(|route| route.operation != Operation::Documentation)
        .map(|route| EndpointDoc {
            path: route.pattern.display_path(),
            method: route.method.to_string(),
            description: route.description.to_string(),
            function: route.function.to_string(),
        })
        .collect();

    PrettyJson(DocumentationResponse { endpoints })
}
