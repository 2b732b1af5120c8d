pub mod post;
pub mod user;

use crate::model::{post::Post, user::Registration};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, marker::PhantomData};

pub const GENERATED_ID_LEN: usize = 9;
const ID_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id<Marker>(String, #[serde(skip)] PhantomData<Marker>);

impl<Marker> Id<Marker> {
    #[must_use]
    pub fn new(id: String) -> Self {
        Self(id, PhantomData)
    }

    /// Generates a random base-36 id. Collisions are unlikely, not impossible.
    #[must_use]
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let id = (0..GENERATED_ID_LEN)
            .map(|_| char::from(ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())]))
            .collect();

        Self::new(id)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<Marker> Display for Id<Marker> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<Marker> From<String> for Id<Marker> {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl<Marker> From<&str> for Id<Marker> {
    fn from(value: &str) -> Self {
        Self::new(value.to_owned())
    }
}

/// One element of the post collection.
///
/// Registrations are stored next to posts without a `user` wrapper, so they show up in
/// the raw collection but never in anything projected from post authors.
#[derive(Clone, Eq, PartialEq, Debug, Hash, Serialize)]
#[serde(untagged)]
pub enum Entry {
    Post(Post),
    Registration(Registration),
}

impl Entry {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Entry::Post(post) => post.id.as_str(),
            Entry::Registration(registration) => registration.id.as_str(),
        }
    }

    #[must_use]
    pub fn as_post(&self) -> Option<&Post> {
        match self {
            Entry::Post(post) => Some(post),
            Entry::Registration(_) => None,
        }
    }

    #[must_use]
    pub fn as_post_mut(&mut self) -> Option<&mut Post> {
        match self {
            Entry::Post(post) => Some(post),
            Entry::Registration(_) => None,
        }
    }
}

impl From<Post> for Entry {
    fn from(value: Post) -> Self {
        Entry::Post(value)
    }
}

impl From<Registration> for Entry {
    fn from(value: Registration) -> Self {
        Entry::Registration(value)
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{
        Entry, GENERATED_ID_LEN, Id,
        post::{Post, PostMarker},
        user::{RegisterUser, Registration, User, UserMarker},
    };
    use serde_json::json;

    #[test]
    fn generated_ids() {
        let first = Id::<PostMarker>::generate();
        let second = Id::<PostMarker>::generate();

        for id in [&first, &second] {
            assert_eq!(id.as_str().len(), GENERATED_ID_LEN);
            assert!(
                id.as_str()
                    .chars()
                    .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
            );
        }
        assert_ne!(first, second);
    }

    #[test]
    fn entry_shapes() {
        let post = Entry::Post(Post {
            id: "p1".into(),
            description: "hello".to_owned(),
            created_on: "1.2.2024".to_owned(),
            user: User {
                id: "u1".into(),
                name: "Ada".to_owned(),
                surname: "Lovelace".to_owned(),
                email: "ada@example.com".to_owned(),
                password: None,
                age: Some(36.into()),
            },
        });
        assert_eq!(
            serde_json::to_value(&post).unwrap(),
            json!({
                "id": "p1",
                "description": "hello",
                "createdOn": "1.2.2024",
                "user": {
                    "id": "u1",
                    "name": "Ada",
                    "surname": "Lovelace",
                    "email": "ada@example.com",
                    "age": 36
                }
            })
        );

        let registration = Entry::Registration(Registration {
            id: Id::<UserMarker>::from("r1"),
            details: RegisterUser {
                name: Some("Grace".to_owned()),
                email: Some("grace@example.com".to_owned()),
                ..RegisterUser::default()
            },
        });
        assert_eq!(registration.id(), "r1");
        assert!(registration.as_post().is_none());
        assert_eq!(
            serde_json::to_value(&registration).unwrap(),
            json!({ "id": "r1", "name": "Grace", "email": "grace@example.com" })
        );
    }
}
