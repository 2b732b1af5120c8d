use crate::server::{Result, ServerError, ServerRouter, auth::LoggedIn, json::Json};
use axum::{extract::State, http::StatusCode};
use axum_extra::routing::{RouterExt, TypedPath};
use postboard_common::model::{
    Id,
    post::Post,
    user::{UpdateUser, User, UserMarker},
};
use postboard_db::client::DbClient;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

pub fn routes() -> ServerRouter {
    ServerRouter::new()
        .typed_get(get_users)
        .typed_put(update_user)
        .typed_delete(delete_user)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/api/users", rejection(ServerError))]
struct UsersPath();

async fn get_users(UsersPath(): UsersPath, State(db): State<Arc<DbClient>>) -> Json<Vec<User>> {
    Json(db.fetch_users())
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/api/users/{id}", rejection(ServerError))]
struct UserPath {
    id: Id<UserMarker>,
}

async fn update_user(
    UserPath { id }: UserPath,
    _: LoggedIn,
    State(db): State<Arc<DbClient>>,
    Json(update): Json<UpdateUser>,
) -> Result<Json<Post>> {
    let post = db
        .update_user(&id, update)
        .ok_or(ServerError::UserByIdNotFound(id))?;

    Ok(Json(post))
}

async fn delete_user(
    UserPath { id }: UserPath,
    _: LoggedIn,
    State(db): State<Arc<DbClient>>,
) -> Result<StatusCode> {
    let post = db
        .delete_user(&id)
        .ok_or_else(|| ServerError::UserByIdNotFound(id.clone()))?;

    info!(user = %id, post = %post.id, "Deleted post of user");
    Ok(StatusCode::OK)
}
