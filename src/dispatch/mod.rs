//! Request dispatch through the route table.
//!
//! axum hands every request that no static route claimed to [`dispatch`],
//! which matches `method path` against [`RouteTable`], decodes the body into
//! the operation's payload shape and invokes the handler.

pub mod pattern;
pub mod table;

pub use pattern::{RoutePattern, Segment};
pub use table::{BodyShape, Operation, Route, RouteMatch, RouteTable};

use axum::{
    body::Bytes,
    extract::State,
    http::{Method, Uri},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};
use crate::handlers;
use crate::models::{CreateStage, UpdateStage};
use crate::state::AppState;

/// A matched operation with its typed arguments
#[derive(Debug)]
pub enum Call {
    ListStages,
    GetStage(i64),
    CreateStage(CreateStage),
    UpdateStage(UpdateStage, i64),
    DeleteStage(i64),
    Documentation,
}

enum Payload {
    Create(CreateStage),
    Update(UpdateStage),
}

impl Call {
    /// Turn a route match plus raw body into typed arguments
    pub fn bind(matched: RouteMatch, body: &[u8]) -> AppResult<Self> {
        let RouteMatch {
            operation,
            mut captures,
            ..
        } = matched;

        let payload = match operation.body_shape() {
            Some(BodyShape::CreateStage) => Some(Payload::Create(decode_body(body)?)),
            Some(BodyShape::UpdateStage) => Some(Payload::Update(decode_update(body)?)),
            None => None,
        };

        let call = match (operation, payload) {
            (Operation::ListStages, None) => Call::ListStages,
            (Operation::GetStage, None) => Call::GetStage(take_id(&mut captures)?),
            (Operation::CreateStage, Some(Payload::Create(payload))) => Call::CreateStage(payload),
            (Operation::UpdateStage, Some(Payload::Update(payload))) => {
                Call::UpdateStage(payload, take_id(&mut captures)?)
            }
            (Operation::DeleteStage, None) => Call::DeleteStage(take_id(&mut captures)?),
            (Operation::Documentation, None) => Call::Documentation,
            (operation, _) => {
                return Err(AppError::Internal(format!(
                    "{:?} is bound to the wrong body shape",
                    operation
                )))
            }
        };

        Ok(call)
    }
}

/// Resolve `method path` to a call, or `RouteNotFound` if nothing matches
pub fn resolve(table: &RouteTable, method: &str, path: &str, body: &[u8]) -> AppResult<Call> {
    let matched = table.find(method, path).ok_or(AppError::RouteNotFound)?;
    tracing::debug!(
        method,
        path,
        pattern = matched.pattern,
        operation = ?matched.operation,
        "Route matched"
    );
    Call::bind(matched, body)
}

/// Fallback handler that routes through the table
pub async fn dispatch(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    match resolve(&state.routes, method.as_str(), uri.path(), &body) {
        Ok(call) => execute(&state, call).await,
        Err(err) => err.into_response(),
    }
}

pub async fn execute(state: &AppState, call: Call) -> Response {
    match call {
        Call::ListStages => handlers::list_stages(state).await.into_response(),
        Call::GetStage(id) => handlers::get_stage(state, id).await.into_response(),
        Call::CreateStage(payload) => handlers::create_stage(state, payload).await.into_response(),
        Call::UpdateStage(payload, id) => handlers::update_stage(state, payload, id)
            .await
            .into_response(),
        Call::DeleteStage(id) => handlers::delete_stage(state, id).await.into_response(),
        Call::Documentation => handlers::documentation(state).into_response(),
    }
}

/// Trailing numeric capture as an id
fn take_id(captures: &mut Vec<String>) -> AppResult<i64> {
    let raw = captures
        .pop()
        .ok_or_else(|| AppError::Internal("Route has no id capture".to_string()))?;

    raw.parse()
        .map_err(|_| AppError::Validation(format!("Invalid construction stage ID: {}", raw)))
}

fn decode_body<T: DeserializeOwned>(body: &[u8]) -> AppResult<T> {
    serde_json::from_slice(body)
        .map_err(|e| AppError::Validation(format!("Invalid request body: {}", e)))
}

/// An empty or `null` update body changes nothing
fn decode_update(body: &[u8]) -> AppResult<UpdateStage> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(UpdateStage::default());
    }

    decode_body::<Option<UpdateStage>>(body).map(Option::unwrap_or_default)
}
