use super::Post;
use crate::api::FeedApi;
use crate::error::FeedError;
use crate::user::session::Session;

/// Blocking message shown to the user when a timeline action fails.
#[derive(thiserror::Error, Clone, Debug, Eq, PartialEq)]
pub enum Alert {
    #[error("Please log in")]
    LoginRequired,

    #[error("Could not publish the post: {0}")]
    PostFailed(FeedError),
}

impl From<FeedError> for Alert {
    fn from(err: FeedError) -> Self {
        match err {
            FeedError::Unauthorized | FeedError::Forbidden => Self::LoginRequired,
            other => Self::PostFailed(other),
        }
    }
}

/// The latest posts and the composer above them.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    posts: Vec<Post>,
    composer: String,
}

impl Timeline {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts,
            composer: String::new(),
        }
    }

    /// Fetch the latest posts once. A failed fetch gives an empty timeline.
    pub async fn mount(deps: &impl FeedApi, session: &Session) -> Self {
        match deps.latest_posts(session.token()).await {
            Ok(posts) => Self::new(posts),
            Err(e) => {
                tracing::warn!(error = %e, "could not fetch the latest posts");
                Self::default()
            }
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn composer(&self) -> &str {
        &self.composer
    }

    pub fn set_composer(&mut self, text: impl Into<String>) {
        self.composer = text.into();
    }

    /// Publish the composer text.
    ///
    /// On success the new post goes first and the composer is cleared. On
    /// failure nothing changes and the returned alert should be shown.
    /// A blank composer publishes nothing.
    pub async fn submit(&mut self, deps: &impl FeedApi, session: &Session) -> Result<(), Alert> {
        if self.composer.trim().is_empty() {
            return Ok(());
        }

        let post = deps
            .create_post(session.token(), self.composer.clone())
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "could not create post");
                Alert::from(e)
            })?;

        self.posts = prepend_post(std::mem::take(&mut self.posts), post);
        self.composer.clear();
        Ok(())
    }
}

/// Put a freshly created post in front of the ones already shown.
pub fn prepend_post(mut posts: Vec<Post>, post: Post) -> Vec<Post> {
    posts.insert(0, post);
    posts
}
