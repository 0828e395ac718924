pub mod client;

use crate::error::{FeedError, FeedResult};
use crate::post::{NewPost, Post};
use crate::user::auth::BearerToken;
use crate::user::{Profile, ProfileUpdate, User};
use crate::{GetConfig, PostId, UserId};

use entrait::entrait_export as entrait;

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct UserBody<T> {
    pub user: T,
}

///
/// Thin wrappers around the feed backend endpoints.
///
/// The token is passed explicitly by whoever owns the session. Endpoints that
/// the backend keeps public simply receive `None`.
///
#[entrait(pub FeedApi, mock_api=FeedApiMock)]
pub mod feed_api {
    use super::*;
    use crate::api::client::HttpClient;

    use reqwest::Method;

    pub async fn create_post(
        deps: &impl GetConfig,
        token: Option<BearerToken>,
        content: String,
    ) -> FeedResult<Post> {
        let request = deps
            .get_http_client()
            .request(Method::POST, "/posts/post", token.as_ref())
            .json(&NewPost { content });

        HttpClient::send_json(request).await
    }

    pub async fn latest_posts(
        deps: &impl GetConfig,
        token: Option<BearerToken>,
    ) -> FeedResult<Vec<Post>> {
        let request = deps.get_http_client().request(
            Method::GET,
            "/posts/get_latest_post",
            token.as_ref(),
        );

        HttpClient::send_json(request).await
    }

    pub async fn user_posts(
        deps: &impl GetConfig,
        token: Option<BearerToken>,
        user_id: UserId,
    ) -> FeedResult<Vec<Post>> {
        let request = deps.get_http_client().request(
            Method::GET,
            &format!("/posts/{user_id}"),
            token.as_ref(),
        );

        HttpClient::send_json(request).await
    }

    pub async fn delete_post(
        deps: &impl GetConfig,
        token: Option<BearerToken>,
        post_id: PostId,
    ) -> FeedResult<()> {
        let request = deps.get_http_client().request(
            Method::DELETE,
            &format!("/posts/delete/{post_id}"),
            token.as_ref(),
        );

        HttpClient::send_empty(request).await
    }

    pub async fn find_current_user(deps: &impl GetConfig, token: BearerToken) -> FeedResult<User> {
        let request = deps
            .get_http_client()
            .request(Method::GET, "/users/find", Some(&token));

        let body: UserBody<Option<User>> = HttpClient::send_json(request).await?;
        body.user.ok_or(FeedError::Unauthorized)
    }

    pub async fn fetch_profile(
        deps: &impl GetConfig,
        token: Option<BearerToken>,
        user_id: UserId,
    ) -> FeedResult<Profile> {
        let request = deps.get_http_client().request(
            Method::GET,
            &format!("/users/profile/{user_id}"),
            token.as_ref(),
        );

        HttpClient::send_json(request).await
    }

    pub async fn update_profile(
        deps: &impl GetConfig,
        token: Option<BearerToken>,
        user_id: UserId,
        update: ProfileUpdate,
    ) -> FeedResult<()> {
        let request = deps
            .get_http_client()
            .request(
                Method::PUT,
                &format!("/users/profile/{user_id}"),
                token.as_ref(),
            )
            .json(&update);

        HttpClient::send_empty(request).await
    }

    pub async fn delete_account(
        deps: &impl GetConfig,
        token: Option<BearerToken>,
        user_id: UserId,
    ) -> FeedResult<()> {
        let request = deps.get_http_client().request(
            Method::DELETE,
            &format!("/users/delete/{user_id}"),
            token.as_ref(),
        );

        HttpClient::send_empty(request).await
    }
}
