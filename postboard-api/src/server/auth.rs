use crate::server::ServerError;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use tracing::info;

/// A single login flag shared by every client.
#[derive(Debug, Default)]
pub struct Session {
    logged_in: AtomicBool,
}

impl Session {
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.logged_in.load(Ordering::SeqCst)
    }

    pub fn log_in(&self) {
        self.logged_in.store(true, Ordering::SeqCst);
        info!("Session opened");
    }

    pub fn log_out(&self) {
        self.logged_in.store(false, Ordering::SeqCst);
        info!("Session closed");
    }
}

/// Gate for protected routes. Rejects with 401 while nobody is logged in.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct LoggedIn;

impl<S> FromRequestParts<S> for LoggedIn
where
    Arc<Session>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if Arc::<Session>::from_ref(state).is_logged_in() {
            Ok(Self)
        } else {
            Err(ServerError::NotLoggedIn)
        }
    }
}
