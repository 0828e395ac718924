use super::session::Session;
use super::{Profile, ProfileUpdate};
use crate::api::FeedApi;
use crate::error::{FeedError, FeedResult};
use crate::post::Post;
use crate::{PostId, UserId};

#[derive(thiserror::Error, Clone, Debug, Eq, PartialEq)]
pub enum PageError {
    #[error("404 | This page could not be found.")]
    NotFound,
}

///
/// A user's profile page with that user's posts.
///
/// `username` and `bio` are the values on screen. While editing they are
/// drafts, and the committed values live in `profile`.
///
#[derive(Clone, Debug)]
pub struct ProfilePage {
    profile: Profile,
    posts: Vec<Post>,
    editing: bool,
    username: String,
    bio: String,
}

impl ProfilePage {
    pub fn new(profile: Profile, posts: Vec<Post>) -> Self {
        let username = profile.user.username.clone();
        let bio = profile.bio.clone().unwrap_or_default();
        Self {
            profile,
            posts,
            editing: false,
            username,
            bio,
        }
    }

    /// Load the profile and posts of `user_id` before anything is shown.
    ///
    /// Both requests are made without credentials. If either fails the page does not exist.
    pub async fn load(deps: &impl FeedApi, user_id: UserId) -> Result<Self, PageError> {
        let loaded = async {
            let profile = deps.fetch_profile(None, user_id).await?;
            let posts = deps.user_posts(None, user_id).await?;
            Ok::<_, FeedError>((profile, posts))
        }
        .await;

        match loaded {
            Ok((profile, posts)) => Ok(Self::new(profile, posts)),
            Err(e) => {
                tracing::warn!(error = %e, %user_id, "could not load profile page");
                Err(PageError::NotFound)
            }
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn bio(&self) -> &str {
        &self.bio
    }

    /// Whether edit and delete controls are shown to `session`.
    ///
    /// This is UI gating and nothing more. The backend must authorize the
    /// operations behind these controls itself.
    pub fn controls_visible(&self, session: &Session) -> bool {
        session.is_owner(self.profile.owner_id())
    }

    /// Enter edit mode, or leave it and throw the drafts away.
    pub fn toggle_edit(&mut self) {
        if self.editing {
            self.username = self.profile.user.username.clone();
            self.bio = self.profile.bio.clone().unwrap_or_default();
        }
        self.editing = !self.editing;
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    pub fn set_bio(&mut self, bio: impl Into<String>) {
        self.bio = bio.into();
    }

    /// Send the drafts to the backend.
    ///
    /// Edit mode is only left once the update succeeded. On failure the
    /// drafts stay in place so the user can retry.
    pub async fn save(&mut self, deps: &impl FeedApi, session: &Session) -> FeedResult<()> {
        let update = ProfileUpdate {
            username: self.username.clone(),
            bio: self.bio.clone(),
        };

        if let Err(e) = deps
            .update_profile(session.token(), self.profile.owner_id(), update)
            .await
        {
            tracing::error!(error = %e, "error while updating the profile");
            return Err(e);
        }

        self.profile.user.username = self.username.clone();
        self.profile.bio = Some(self.bio.clone());
        self.editing = false;
        Ok(())
    }

    pub async fn delete_post(
        &mut self,
        deps: &impl FeedApi,
        session: &Session,
        post_id: PostId,
    ) -> FeedResult<()> {
        if let Err(e) = deps.delete_post(session.token(), post_id).await {
            tracing::error!(error = %e, %post_id, "error while deleting a post");
            return Err(e);
        }

        self.posts = remove_post(std::mem::take(&mut self.posts), post_id);
        Ok(())
    }

    /// Ask the backend to delete the whole account. Nothing else happens locally.
    pub async fn delete_account(&self, deps: &impl FeedApi, session: &Session) -> FeedResult<()> {
        deps.delete_account(session.token(), self.profile.owner_id())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "error while deleting the account");
                e
            })
    }
}

/// Drop the post with `post_id`, keeping every other post in order.
pub fn remove_post(posts: Vec<Post>, post_id: PostId) -> Vec<Post> {
    posts.into_iter().filter(|post| post.id != post_id).collect()
}
