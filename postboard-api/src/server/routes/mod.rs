use crate::server::ServerRouter;

mod posts;
mod session;
mod users;

pub fn routes() -> ServerRouter {
    ServerRouter::new()
        .merge(posts::routes())
        .merge(session::routes())
        .merge(users::routes())
}
