use crate::server::{Result, ServerError, ServerRouter, auth::LoggedIn, json::Json};
use axum::{extract::State, http::StatusCode};
use axum_extra::routing::{RouterExt, TypedPath};
use postboard_common::model::{
    Entry, Id,
    post::{CreatePost, Post, PostMarker, UpdatePost},
};
use postboard_db::client::DbClient;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

pub fn routes() -> ServerRouter {
    ServerRouter::new()
        .typed_get(get_posts)
        .typed_post(create_post)
        .typed_put(update_post)
        .typed_delete(delete_post)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/api/posts", rejection(ServerError))]
struct PostsPath();

async fn get_posts(PostsPath(): PostsPath, State(db): State<Arc<DbClient>>) -> Json<Vec<Entry>> {
    Json(db.fetch_entries())
}

async fn create_post(
    PostsPath(): PostsPath,
    _: LoggedIn,
    State(db): State<Arc<DbClient>>,
    Json(post): Json<CreatePost>,
) -> Result<Json<Post>> {
    let post = db.create_post(post)?;

    info!(post = %post.id, user = %post.user.id, "Created post");
    Ok(Json(post))
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/api/posts/{id}", rejection(ServerError))]
struct PostPath {
    id: Id<PostMarker>,
}

async fn update_post(
    PostPath { id }: PostPath,
    _: LoggedIn,
    State(db): State<Arc<DbClient>>,
    Json(update): Json<UpdatePost>,
) -> Result<Json<Post>> {
    let post = db
        .update_post(&id, update)
        .ok_or(ServerError::PostByIdNotFound(id))?;

    Ok(Json(post))
}

async fn delete_post(
    PostPath { id }: PostPath,
    _: LoggedIn,
    State(db): State<Arc<DbClient>>,
) -> Result<StatusCode> {
    db.delete_entry(id.as_str())
        .ok_or_else(|| ServerError::PostByIdNotFound(id.clone()))?;

    info!(post = %id, "Deleted post");
    Ok(StatusCode::OK)
}
