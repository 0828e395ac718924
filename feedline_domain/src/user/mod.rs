pub mod auth;
pub mod profile;
pub mod session;

use crate::UserId;

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Eq, PartialEq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub email: String,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    pub user: User,
}

impl Profile {
    pub fn owner_id(&self) -> UserId {
        self.user.id
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, Eq, PartialEq)]
pub struct ProfileUpdate {
    pub username: String,
    pub bio: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_from_backend_json() {
        let profile: Profile = serde_json::from_str(
            r#"{
                "id": 3,
                "bio": null,
                "profileImageUrl": "https://img.example.com/3.png",
                "userId": 7,
                "user": { "id": 7, "username": "hana", "email": "hana@example.com" }
            }"#,
        )
        .unwrap();

        assert_eq!(UserId(7), profile.owner_id());
        assert_eq!(None, profile.bio);
        assert_eq!(
            Some("https://img.example.com/3.png"),
            profile.profile_image_url.as_deref()
        );
    }
}
