//! Kurban CRUD handlers: list, read, create, update, delete.
//!
//! Every handler answers with the `{type, data, message}` envelope. Failures come
//! back as [`AppError`], which renders the error envelope and status code.

use crate::error::AppError;
use crate::extractors::{IdParam, KurbanBody};
use crate::response::{success_many, success_message, success_one};
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = state
        .store
        .list_all()
        .await
        .map_err(AppError::store("table is empty or unreachable"))?;
    tracing::debug!(count = rows.len(), "listed kurban");
    Ok(success_many(rows))
}

pub async fn read(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<impl IntoResponse, AppError> {
    let id = RequestValidator::id(&id)?;
    let row = state
        .store
        .get_by_id(id)
        .await
        .map_err(AppError::store("id invalid or not found"))?
        .ok_or(AppError::NotFound)?;
    Ok(success_one(row))
}

pub async fn create(
    State(state): State<AppState>,
    KurbanBody(form): KurbanBody,
) -> Result<impl IntoResponse, AppError> {
    let new = RequestValidator::form(form)?;
    let id = state
        .store
        .insert(&new)
        .await
        .map_err(AppError::store("insert failed"))?;
    tracing::info!(id, name = %new.name, kind = %new.kind, weight = new.weight, price = new.price, "kurban inserted");
    Ok(success_message(StatusCode::CREATED, "data inserted"))
}

pub async fn update(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    KurbanBody(form): KurbanBody,
) -> Result<impl IntoResponse, AppError> {
    if id.trim().is_empty() {
        return Err(AppError::MissingData);
    }
    let new = RequestValidator::form(form)?;
    let id = RequestValidator::id(&id)?;
    let affected = state
        .store
        .update(id, &new)
        .await
        .map_err(AppError::store("update failed"))?;
    if affected == 0 {
        return Err(AppError::NotFound);
    }
    tracing::info!(id, name = %new.name, kind = %new.kind, weight = new.weight, price = new.price, "kurban updated");
    Ok(success_message(StatusCode::OK, "data updated"))
}

pub async fn delete(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<impl IntoResponse, AppError> {
    let id = RequestValidator::id(&id)?;
    let affected = state
        .store
        .delete_by_id(id)
        .await
        .map_err(AppError::store("delete failed"))?;
    if affected == 0 {
        return Err(AppError::NotFound);
    }
    tracing::info!(id, "kurban deleted");
    Ok(success_message(StatusCode::OK, "entry deleted"))
}

/// `GET /kurban/` and `DELETE /kurban/`: the id segment is present but empty.
pub async fn missing_id() -> AppError {
    AppError::MissingId
}

/// `PUT /kurban/`: an update without an id is reported like any other missing field.
pub async fn missing_update_data() -> AppError {
    AppError::MissingData
}

/// Known path, unsupported method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// No route matched.
pub async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}
