//! Route handlers answering with the `{ "data": ... }` envelope.

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use log::debug;
use serde::Deserialize;
use serde_json::{json, Value};
use wayfare_core::{params::ListResources, ResourceKind};

use super::{error::ApiError, AppState};

type ApiResult = Result<(StatusCode, Json<Value>), ApiError>;

fn data(status: StatusCode, payload: Value) -> ApiResult {
    Ok((status, Json(json!({ "data": payload }))))
}

fn parse_kind(raw: &str) -> Result<ResourceKind, ApiError> {
    raw.parse().map_err(ApiError::NotFound)
}

/// Collection routes never address the singleton through `:kind`.
fn parse_collection(raw: &str) -> Result<ResourceKind, ApiError> {
    let kind = parse_kind(raw)?;
    if kind.is_singleton() {
        return Err(ApiError::MethodNotAllowed(format!(
            "{} is read and saved at /api/admin/{}",
            kind.label(),
            kind.as_str()
        )));
    }
    Ok(kind)
}

fn query<T>(extracted: Result<Query<T>, QueryRejection>) -> Result<T, ApiError> {
    extracted
        .map(|Query(value)| value)
        .map_err(|e| ApiError::BadRequest(e.body_text()))
}

fn parse_body(body: &Bytes) -> Result<Value, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::BadRequest(format!("Invalid JSON body: {e}")))
}

#[derive(Debug, Default, Deserialize)]
pub struct DeleteQuery {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    destination: Option<String>,
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn list_documents(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    params: Result<Query<ListResources>, QueryRejection>,
) -> ApiResult {
    let kind = parse_kind(&kind)?;
    let params = query(params)?;
    let documents = state.catalog.list_documents(kind, &params).await?;
    debug!("Listed {} {}", documents.len(), kind);
    data(StatusCode::OK, Value::Array(documents))
}

pub async fn get_document(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
) -> ApiResult {
    let kind = parse_collection(&kind)?;
    let document = state.catalog.get_document(kind, &id).await?;
    data(StatusCode::OK, document)
}

pub async fn create_document(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    body: Bytes,
) -> ApiResult {
    let kind = parse_collection(&kind)?;
    let created = state.catalog.create_document(kind, parse_body(&body)?).await?;
    data(StatusCode::CREATED, created)
}

pub async fn update_document(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
    body: Bytes,
) -> ApiResult {
    let kind = parse_collection(&kind)?;
    let updated = state
        .catalog
        .update_document(kind, &id, parse_body(&body)?)
        .await?;
    data(StatusCode::OK, updated)
}

pub async fn delete_document(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
    params: Result<Query<DeleteQuery>, QueryRejection>,
) -> ApiResult {
    let kind = parse_collection(&kind)?;
    let params = query(params)?;
    remove(&state, kind, &id, params.destination.as_deref()).await
}

/// `DELETE /api/admin/<kind>?id=..&destination=..`
pub async fn delete_by_query(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    params: Result<Query<DeleteQuery>, QueryRejection>,
) -> ApiResult {
    let kind = parse_collection(&kind)?;
    let params = query(params)?;
    let Some(id) = params.id.as_deref().filter(|id| !id.is_empty()) else {
        return Err(ApiError::BadRequest("Missing id".to_string()));
    };
    remove(&state, kind, id, params.destination.as_deref()).await
}

async fn remove(
    state: &AppState,
    kind: ResourceKind,
    id: &str,
    destination: Option<&str>,
) -> ApiResult {
    state.catalog.delete_document(kind, id, destination).await?;
    debug!("Delete of {kind}/{id} answered");
    data(StatusCode::OK, json!({ "id": id }))
}

pub async fn load_home(State(state): State<AppState>) -> ApiResult {
    data(StatusCode::OK, state.catalog.load_home().await?)
}

pub async fn save_home(State(state): State<AppState>, body: Bytes) -> ApiResult {
    let saved = state.catalog.save_home(parse_body(&body)?).await?;
    data(StatusCode::OK, saved)
}
