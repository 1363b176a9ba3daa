//! HTTP surface.

use crate::{Dispatcher, Outcome, RedirectConfig};
use axum::{
    Router,
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use coverart_error::{CoverArtError, CoverArtResult, ErrorClass, IndexError};
use coverart_interface::CoverArtStore;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, instrument, warn};

/// Shared, read-only request state.
#[derive(Clone)]
pub struct AppState {
    config: Arc<RedirectConfig>,
    dispatcher: Arc<Dispatcher>,
}

impl AppState {
    /// State over the given store and configuration.
    pub fn new(store: Arc<dyn CoverArtStore>, config: RedirectConfig) -> Self {
        let config = Arc::new(config);
        Self {
            dispatcher: Arc::new(Dispatcher::new(store, config.clone())),
            config,
        }
    }
}

/// Creates the service router.
///
/// `/` serves the index page; every other path goes to the dispatcher,
/// whatever the method.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .fallback(redirect)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Index page.
async fn index_page(State(state): State<AppState>) -> Response {
    match read_index(&state.config).await {
        Ok(page) => Html(page).into_response(),
        Err(e) => ApiError(e).into_response(),
    }
}

/// Cover art redirect.
async fn redirect(State(state): State<AppState>, uri: Uri) -> Response {
    match state.dispatcher.dispatch(uri.path()).await {
        Ok(Outcome::Redirect(target)) => Redirect::temporary(target.as_str()).into_response(),
        Ok(Outcome::Index) => index_page(State(state)).await,
        Err(e) => ApiError(e).into_response(),
    }
}

// Read on every request; the page is small and may be replaced on disk.
#[instrument(skip(config))]
async fn read_index(config: &RedirectConfig) -> CoverArtResult<String> {
    let path = config.static_path().join("index");
    match tokio::fs::read_to_string(&path).await {
        Ok(page) => Ok(page),
        Err(e) => {
            let message = format!("Failed to read {}: {}", path.display(), e);
            Err(IndexError::new(message).into())
        }
    }
}

/// Error rendered as a plain-text response.
struct ApiError(CoverArtError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0.class() {
            ErrorClass::BadRequest => StatusCode::BAD_REQUEST,
            ErrorClass::NotFound => StatusCode::NOT_FOUND,
            ErrorClass::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!(error = %self.0, "Request failed");
        } else {
            warn!(status = status.as_u16(), error = %self.0, "Request rejected");
        }
        (status, self.0.message()).into_response()
    }
}
