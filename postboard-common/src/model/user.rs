use crate::{model::Id, util::is_nonzero};
use serde::{Deserialize, Serialize};
use serde_json::Number;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct UserMarker;

/// The author embedded in every post.
#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize, Serialize)]
pub struct User {
    pub id: Id<UserMarker>,
    pub name: String,
    pub surname: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<Number>,
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize, Serialize)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub age: Option<Number>,
}

impl UpdateUser {
    /// Overwrites every field that is set, skipping empty strings and a zero age.
    pub fn apply(self, user: &mut User) {
        if let Some(name) = self.name.filter(|name| !name.is_empty()) {
            user.name = name;
        }
        if let Some(surname) = self.surname.filter(|surname| !surname.is_empty()) {
            user.surname = surname;
        }
        if let Some(age) = self.age.filter(is_nonzero) {
            user.age = Some(age);
        }
    }
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize, Serialize)]
pub struct RegisterUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// A flat record created by registering. It carries no `user` wrapper.
#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Serialize)]
pub struct Registration {
    pub id: Id<UserMarker>,
    #[serde(flatten)]
    pub details: RegisterUser,
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize)]
pub struct Credentials {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl Credentials {
    /// An absent password only matches a user without one.
    #[must_use]
    pub fn matches(&self, user: &User) -> bool {
        self.email.as_deref() == Some(user.email.as_str()) && self.password == user.password
    }
}
