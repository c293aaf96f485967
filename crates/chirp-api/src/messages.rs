use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use chirp_types::api::{NewMessage, UpdateMessageRequest};

use crate::error::bad_body;
use crate::{AppState, run_blocking};

pub async fn create_message(
    State(state): State<AppState>,
    body: Result<Json<NewMessage>, JsonRejection>,
) -> Result<impl IntoResponse, StatusCode> {
    let Json(req) = body.map_err(bad_body)?;
    let message = run_blocking(&state, move |s| s.messages.create(req)).await?;
    Ok(Json(message))
}

pub async fn get_messages(State(state): State<AppState>) -> Result<impl IntoResponse, StatusCode> {
    let messages = run_blocking(&state, |s| s.messages.get_all()).await?;
    Ok(Json(messages))
}

/// An unknown id answers 200 with an empty body.
pub async fn get_message(
    State(state): State<AppState>,
    Path(message_id): Path<i64>,
) -> Result<Response, StatusCode> {
    let message = run_blocking(&state, move |s| s.messages.get_by_id(message_id)).await?;

    Ok(match message {
        Some(message) => Json(message).into_response(),
        None => StatusCode::OK.into_response(),
    })
}

/// Answers `1` when a message was deleted, an empty 200 when there was nothing to delete.
pub async fn delete_message(
    State(state): State<AppState>,
    Path(message_id): Path<i64>,
) -> Result<Response, StatusCode> {
    let deleted = run_blocking(&state, move |s| s.messages.delete_by_id(message_id)).await?;

    Ok(match deleted {
        0 => StatusCode::OK.into_response(),
        n => Json(n).into_response(),
    })
}

pub async fn update_message(
    State(state): State<AppState>,
    Path(message_id): Path<i64>,
    body: Result<Json<UpdateMessageRequest>, JsonRejection>,
) -> Result<impl IntoResponse, StatusCode> {
    let Json(req) = body.map_err(bad_body)?;
    let updated = run_blocking(&state, move |s| {
        s.messages
            .update_by_id(message_id, req.message_text.as_deref())
    })
    .await?;
    Ok(Json(updated))
}

pub async fn get_account_messages(
    State(state): State<AppState>,
    Path(account_id): Path<i64>,
) -> Result<impl IntoResponse, StatusCode> {
    let messages = run_blocking(&state, move |s| s.messages.get_by_poster(account_id)).await?;
    Ok(Json(messages))
}
