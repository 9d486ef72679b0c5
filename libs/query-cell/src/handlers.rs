use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::error::AppError;
use shared_store::AppState;

use crate::models::{RespondToQueryRequest, SubmitQueryRequest, TakeQueryRequest};
use crate::services::QueryService;

#[axum::debug_handler]
pub async fn submit_query(
    State(state): State<AppState>,
    Json(request): Json<SubmitQueryRequest>,
) -> Result<Json<Value>, AppError> {
    let service = QueryService::new(&state);

    let query = service.submit_query(request).await?;

    Ok(Json(json!(query)))
}

#[axum::debug_handler]
pub async fn get_query(
    State(state): State<AppState>,
    Path(query_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let service = QueryService::new(&state);

    let query = service.get_query(query_id).await?;

    Ok(Json(json!(query)))
}

#[axum::debug_handler]
pub async fn list_queries(
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    let service = QueryService::new(&state);

    let queries = service.list_queries().await;

    Ok(Json(json!({
        "queries": queries,
        "total": queries.len()
    })))
}

#[axum::debug_handler]
pub async fn pending_queries(
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    let service = QueryService::new(&state);

    let queries = service.pending_queries().await;

    Ok(Json(json!({
        "queries": queries,
        "total": queries.len()
    })))
}

#[axum::debug_handler]
pub async fn patient_queries(
    State(state): State<AppState>,
    Path(patient_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let service = QueryService::new(&state);

    let queries = service.patient_queries(patient_id).await;

    Ok(Json(json!({
        "queries": queries,
        "total": queries.len()
    })))
}

#[axum::debug_handler]
pub async fn doctor_queries(
    State(state): State<AppState>,
    Path(doctor_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let service = QueryService::new(&state);

    let queries = service.doctor_queries(doctor_id).await;

    Ok(Json(json!({
        "queries": queries,
        "total": queries.len()
    })))
}

#[axum::debug_handler]
pub async fn take_query(
    State(state): State<AppState>,
    Path(query_id): Path<Uuid>,
    Json(request): Json<TakeQueryRequest>,
) -> Result<Json<Value>, AppError> {
    let service = QueryService::new(&state);

    let query = service.take_query(query_id, request).await?;

    Ok(Json(json!(query)))
}

#[axum::debug_handler]
pub async fn respond_to_query(
    State(state): State<AppState>,
    Path(query_id): Path<Uuid>,
    Json(request): Json<RespondToQueryRequest>,
) -> Result<Json<Value>, AppError> {
    let service = QueryService::new(&state);

    let query = service.respond_to_query(query_id, request).await?;

    Ok(Json(json!(query)))
}

#[axum::debug_handler]
pub async fn query_sections(
    State(state): State<AppState>,
    Path(query_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let service = QueryService::new(&state);

    let sections = service.draft_sections(query_id).await?;

    Ok(Json(json!({
        "query_id": query_id,
        "sections": sections
    })))
}
