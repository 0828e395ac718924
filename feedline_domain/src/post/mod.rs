pub mod timeline;
pub mod view;

use crate::timestamp::Timestamp;
use crate::{PostId, UserId};

#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub content: String,
    pub author_id: UserId,
    pub created_at: Timestamp,
    pub author: Author,
}

impl Post {
    pub fn avatar_url(&self) -> Option<&str> {
        self.author
            .profile
            .as_ref()
            .and_then(|profile| profile.profile_image_url.as_deref())
    }
}

#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, Eq, PartialEq)]
pub struct Author {
    pub username: String,
    #[serde(default)]
    pub profile: Option<AuthorProfile>,
}

#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthorProfile {
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct NewPost {
    pub content: String,
}
