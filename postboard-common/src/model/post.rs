use crate::model::{
    Id,
    user::{User, UserMarker},
};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct PostMarker;

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Id<PostMarker>,
    pub description: String,
    pub created_on: String,
    pub user: User,
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePost {
    #[serde(default)]
    pub description: String,
    pub user_id: Option<Id<UserMarker>>,
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize)]
pub struct UpdatePost {
    pub description: Option<String>,
}

impl UpdatePost {
    pub fn apply(self, post: &mut Post) {
        if let Some(description) = self.description.filter(|description| !description.is_empty())
        {
            post.description = description;
        }
    }
}
