use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use chirp_types::api::Credentials;

use crate::error::bad_body;
use crate::{AppState, run_blocking};

pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<Credentials>, JsonRejection>,
) -> Result<impl IntoResponse, StatusCode> {
    let Json(req) = body.map_err(bad_body)?;
    let account = run_blocking(&state, move |s| s.accounts.register(req)).await?;
    Ok(Json(account))
}

pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<Credentials>, JsonRejection>,
) -> Result<impl IntoResponse, StatusCode> {
    let Json(req) = body.map_err(bad_body)?;
    let account = run_blocking(&state, move |s| s.accounts.login(req)).await?;
    Ok(Json(account))
}
