use axum::{
    Router,
    extract::{
        FromRef, Request,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use json::{ErrorResponse, Json};
use postboard_common::model::{Id, post::PostMarker, user::UserMarker};
use postboard_db::client::{DbClient, DbError};
use std::sync::Arc;
use thiserror::Error;
use tracing::error;

pub mod auth;
mod json;
mod routes;
#[cfg(test)]
mod testing;

use auth::Session;

pub type ServerRouter = Router<ServerState>;

#[derive(Clone, Debug, FromRef)]
pub struct ServerState {
    pub db_client: Arc<DbClient>,
    pub session: Arc<Session>,
}

impl ServerState {
    #[must_use]
    pub fn new(db_client: DbClient) -> Self {
        Self {
            db_client: Arc::new(db_client),
            session: Arc::new(Session::default()),
        }
    }
}

pub fn routes() -> ServerRouter {
    routes::routes().fallback(fallback)
}

pub fn app(state: ServerState) -> Router {
    routes().with_state(state)
}

pub async fn fallback(request: Request) -> ServerError {
    ServerError::UnknownRoute(request.into_parts().0.uri)
}

pub type Result<T, E = ServerError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Unknown route requested: {0}")]
    UnknownRoute(Uri),
    #[error("Path rejected: {0}")]
    PathRejection(#[from] PathRejection),
    #[error("Incoming JSON rejected: {0}")]
    JsonRejection(#[from] JsonRejection),
    #[error("JSON response could not be serialized: {0}")]
    JsonResponse(#[from] serde_json::Error),
    #[error("Nobody is logged in")]
    NotLoggedIn,
    #[error("No user matches the provided credentials")]
    InvalidCredentials,
    #[error(transparent)]
    Database(#[from] DbError),
    #[error("Post with id {0} was not found.")]
    PostByIdNotFound(Id<PostMarker>),
    #[error("User with id {0} was not found.")]
    UserByIdNotFound(Id<UserMarker>),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::UnknownRoute(_) | ServerError::PathRejection(_) => StatusCode::NOT_FOUND,
            ServerError::PostByIdNotFound(_) | ServerError::UserByIdNotFound(_) => {
                StatusCode::NO_CONTENT
            }
            ServerError::NotLoggedIn | ServerError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ServerError::JsonRejection(_) | ServerError::Database(_) => StatusCode::BAD_REQUEST,
            ServerError::JsonResponse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Misses and auth failures reply with the bare status.
    fn body(&self) -> Option<ErrorResponse> {
        match self {
            ServerError::PostByIdNotFound(_)
            | ServerError::UserByIdNotFound(_)
            | ServerError::NotLoggedIn
            | ServerError::InvalidCredentials => None,
            _ => Some(ErrorResponse::new(self)),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();

        error!(error = %self, %status, "Replying with error");

        match self.body() {
            Some(error_response) => (status, Json(error_response)).into_response(),
            None => status.into_response(),
        }
    }
}
