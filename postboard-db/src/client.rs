use crate::seed;
use parking_lot::Mutex;
use postboard_common::{
    model::{
        Entry, Id,
        post::{CreatePost, Post, PostMarker, UpdatePost},
        user::{Credentials, RegisterUser, Registration, UpdateUser, User, UserMarker},
    },
    util::{format_date, today},
};
use thiserror::Error;
use time::UtcOffset;
use tracing::debug;

pub type Result<T, E = DbError> = std::result::Result<T, E>;

#[derive(Clone, Eq, PartialEq, Debug, Hash, Error)]
pub enum DbError {
    #[error("Email is already registered")]
    EmailAlreadyRegistered,
    #[error("User not found")]
    AuthorNotFound,
}

/// The process-wide post collection.
///
/// Every operation takes the lock once and finishes its mutation before releasing it.
#[derive(Debug)]
pub struct DbClient {
    entries: Mutex<Vec<Entry>>,
    utc_offset: UtcOffset,
}

impl DbClient {
    /// `utc_offset` decides which calendar day new posts are created on.
    #[must_use]
    pub fn new(entries: Vec<Entry>, utc_offset: UtcOffset) -> Self {
        Self {
            entries: Mutex::new(entries),
            utc_offset,
        }
    }

    #[must_use]
    pub fn seeded(utc_offset: UtcOffset) -> Self {
        Self::new(seed::entries(), utc_offset)
    }

    #[must_use]
    pub fn fetch_entries(&self) -> Vec<Entry> {
        self.entries.lock().clone()
    }

    #[must_use]
    pub fn fetch_users(&self) -> Vec<User> {
        self.entries
            .lock()
            .iter()
            .filter_map(Entry::as_post)
            .map(|post| post.user.clone())
            .collect()
    }

    /// Returns the post containing the updated user.
    pub fn update_user(&self, user_id: &Id<UserMarker>, update: UpdateUser) -> Option<Post> {
        let mut entries = self.entries.lock();
        let post = entries
            .iter_mut()
            .filter_map(Entry::as_post_mut)
            .find(|post| post.user.id == *user_id)?;

        update.apply(&mut post.user);
        Some(post.clone())
    }

    /// Removes the first post authored by the user.
    pub fn delete_user(&self, user_id: &Id<UserMarker>) -> Option<Post> {
        let mut entries = self.entries.lock();
        let index = entries.iter().position(|entry| {
            entry
                .as_post()
                .is_some_and(|post| post.user.id == *user_id)
        })?;

        match entries.remove(index) {
            Entry::Post(post) => Some(post),
            Entry::Registration(_) => None,
        }
    }

    pub fn register(&self, details: RegisterUser) -> Result<Registration> {
        let mut entries = self.entries.lock();
        let taken = entries
            .iter()
            .filter_map(Entry::as_post)
            .any(|post| details.email.as_deref() == Some(post.user.email.as_str()));

        if taken {
            return Err(DbError::EmailAlreadyRegistered);
        }

        let registration = Registration {
            id: Id::generate(),
            details,
        };
        entries.push(registration.clone().into());

        debug!(id = %registration.id, "Stored registration");
        Ok(registration)
    }

    #[must_use]
    pub fn find_by_credentials(&self, credentials: &Credentials) -> Option<User> {
        self.entries
            .lock()
            .iter()
            .filter_map(Entry::as_post)
            .find(|post| credentials.matches(&post.user))
            .map(|post| post.user.clone())
    }

    pub fn create_post(&self, post: CreatePost) -> Result<Post> {
        let mut entries = self.entries.lock();
        let user = post
            .user_id
            .as_ref()
            .and_then(|user_id| {
                entries
                    .iter()
                    .filter_map(Entry::as_post)
                    .find(|existing| existing.user.id == *user_id)
            })
            .ok_or(DbError::AuthorNotFound)?
            .user
            .clone();

        let post = Post {
            id: Id::generate(),
            description: post.description,
            created_on: format_date(today(self.utc_offset)),
            user,
        };
        entries.push(post.clone().into());

        debug!(id = %post.id, author = %post.user.id, "Stored post");
        Ok(post)
    }

    pub fn update_post(&self, post_id: &Id<PostMarker>, update: UpdatePost) -> Option<Post> {
        let mut entries = self.entries.lock();
        let post = entries
            .iter_mut()
            .filter_map(Entry::as_post_mut)
            .find(|post| post.id == *post_id)?;

        update.apply(post);
        Some(post.clone())
    }

    /// Removes whichever entry carries the id, registrations included.
    pub fn delete_entry(&self, id: &str) -> Option<Entry> {
        let mut entries = self.entries.lock();
        let index = entries.iter().position(|entry| entry.id() == id)?;

        Some(entries.remove(index))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}
