pub mod api;
pub mod error;
pub mod post;
pub mod storage;
pub mod timestamp;
pub mod user;

use api::client::HttpClient;
use storage::StoragePath;

use entrait::entrait_export as entrait;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct PostId(pub i64);

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

///
/// Mockable config accessor, implemented by the application.
///
#[entrait(mock_api=GetConfigMock)]
pub trait GetConfig {
    fn get_http_client(&self) -> &HttpClient;

    fn get_storage_path(&self) -> &StoragePath;
}

#[cfg(test)]
pub mod test {
    use crate::post::{Author, AuthorProfile, Post};
    use crate::timestamp::Timestamp;
    use crate::user::{Profile, User};
    use crate::{PostId, UserId};

    pub fn test_user(id: i64) -> User {
        User {
            id: UserId(id),
            username: format!("user{id}"),
            email: format!("user{id}@example.com"),
        }
    }

    pub fn test_profile(id: i64) -> Profile {
        Profile {
            bio: Some("hello there".to_string()),
            profile_image_url: Some(format!("https://img.example.com/{id}.png")),
            user: test_user(id),
        }
    }

    pub fn test_post(id: i64, author_id: i64) -> Post {
        Post {
            id: PostId(id),
            content: format!("post number {id}"),
            author_id: UserId(author_id),
            created_at: Timestamp::parse("2023-05-01T12:00:00Z").unwrap(),
            author: Author {
                username: format!("user{author_id}"),
                profile: Some(AuthorProfile {
                    profile_image_url: Some(format!("https://img.example.com/{author_id}.png")),
                }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestConfig {
        http_client: HttpClient,
        storage_path: StoragePath,
    }

    impl GetConfig for TestConfig {
        fn get_http_client(&self) -> &HttpClient {
            &self.http_client
        }

        fn get_storage_path(&self) -> &StoragePath {
            &self.storage_path
        }
    }

    fn assert_get_config<T: GetConfig>() {}

    #[test]
    fn config_is_available_to_app_and_mock() {
        assert_get_config::<entrait::Impl<TestConfig>>();
        assert_get_config::<unimock::Unimock>();
    }

    #[test]
    fn impl_forwards_to_the_app() {
        let app = entrait::Impl::new(TestConfig {
            http_client: HttpClient::new("http://localhost:5000/api".parse().unwrap()).unwrap(),
            storage_path: StoragePath("storage.json".into()),
        });

        assert_eq!("http://localhost:5000/api", app.get_http_client().base_url().as_str());
        assert_eq!(std::path::Path::new("storage.json"), app.get_storage_path().0.as_path());
    }
}
