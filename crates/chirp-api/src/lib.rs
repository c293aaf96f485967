pub mod accounts;
pub mod error;
pub mod messages;

use std::sync::Arc;

use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};
use tracing::error;

use chirp_db::Database;
use chirp_service::{AccountService, CredentialScheme, MessageService};
use chirp_types::api::HealthResponse;

pub use error::status_for;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub accounts: AccountService<Database>,
    pub messages: MessageService<Database, Database>,
}

impl AppStateInner {
    /// Both services share the one store handle.
    pub fn new(db: Arc<Database>, scheme: CredentialScheme) -> Self {
        Self {
            accounts: AccountService::new(db.clone(), scheme),
            messages: MessageService::new(db.clone(), db),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/register", post(accounts::register))
        .route("/login", post(accounts::login))
        .route(
            "/messages",
            get(messages::get_messages).post(messages::create_message),
        )
        .route(
            "/messages/{message_id}",
            get(messages::get_message)
                .delete(messages::delete_message)
                .patch(messages::update_message),
        )
        .route(
            "/accounts/{account_id}/messages",
            get(messages::get_account_messages),
        )
        .route("/health", get(health))
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Runs a service call on the blocking pool and maps its failure to a status code.
pub(crate) async fn run_blocking<F, T>(state: &AppState, f: F) -> Result<T, StatusCode>
where
    F: FnOnce(&AppStateInner) -> chirp_service::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let state = state.clone();
    tokio::task::spawn_blocking(move || f(&state))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .map_err(|e| status_for(&e))
}
