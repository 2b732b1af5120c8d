use crate::server::{
    Result, ServerError, ServerRouter,
    auth::{LoggedIn, Session},
    json::Json,
};
use axum::{extract::State, http::StatusCode};
use axum_extra::routing::{RouterExt, TypedPath};
use postboard_common::model::user::{Credentials, RegisterUser, Registration};
use postboard_db::client::DbClient;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

pub fn routes() -> ServerRouter {
    ServerRouter::new()
        .typed_post(register)
        .typed_post(login)
        .typed_post(logout)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/api/register", rejection(ServerError))]
struct RegisterPath();

async fn register(
    RegisterPath(): RegisterPath,
    State(db): State<Arc<DbClient>>,
    Json(details): Json<RegisterUser>,
) -> Result<Json<Registration>> {
    let registration = db.register(details)?;

    info!(id = %registration.id, "Registered user");
    Ok(Json(registration))
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/api/login", rejection(ServerError))]
struct LoginPath();

async fn login(
    LoginPath(): LoginPath,
    State(db): State<Arc<DbClient>>,
    State(session): State<Arc<Session>>,
    Json(credentials): Json<Credentials>,
) -> Result<StatusCode> {
    let user = db
        .find_by_credentials(&credentials)
        .ok_or(ServerError::InvalidCredentials)?;

    info!(user = %user.id, "Logged in");
    session.log_in();
    Ok(StatusCode::OK)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/api/logout", rejection(ServerError))]
struct LogoutPath();

async fn logout(
    LogoutPath(): LogoutPath,
    _: LoggedIn,
    State(session): State<Arc<Session>>,
) -> StatusCode {
    session.log_out();
    StatusCode::OK
}
