use super::auth::BearerToken;
use super::User;
use crate::api::FeedApi;
use crate::error::FeedResult;
use crate::storage::LocalStorage;
use crate::UserId;

/// Local storage key holding the bearer token between runs.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

///
/// The authenticated user of this client, if any.
///
/// A `Session` is the only writer of the token. API calls receive a copy of
/// it through [`Session::token`] instead of reading a shared default header.
///
#[derive(Clone, Debug, Default)]
pub struct Session {
    token: Option<BearerToken>,
    user: Option<User>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A session whose token is already known to belong to `user`.
    pub fn authenticated(token: BearerToken, user: User) -> Self {
        Self {
            token: Some(token),
            user: Some(user),
        }
    }

    /// Restore the session persisted by an earlier `login`.
    ///
    /// Any failure leaves the session without a user.
    pub async fn restore(deps: &(impl FeedApi + LocalStorage)) -> Self {
        let token = match deps.get_item(AUTH_TOKEN_KEY) {
            Ok(stored) => stored.as_deref().and_then(BearerToken::parse),
            Err(e) => {
                tracing::warn!(error = %e, "could not read the stored token");
                None
            }
        };

        let Some(token) = token else {
            return Self::anonymous();
        };

        let user = match deps.find_current_user(token.clone()).await {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(error = %e, "could not resolve the current user");
                None
            }
        };

        Self {
            token: Some(token),
            user,
        }
    }

    /// Persist and attach `token`, then resolve who it belongs to.
    ///
    /// When resolution fails the token stays stored and attached, but there is no user.
    pub async fn login(
        &mut self,
        deps: &(impl FeedApi + LocalStorage),
        token: BearerToken,
    ) -> FeedResult<&User> {
        deps.set_item(AUTH_TOKEN_KEY, token.as_str())?;
        self.token = Some(token.clone());
        self.user = None;

        match deps.find_current_user(token).await {
            Ok(user) => Ok(self.user.insert(user)),
            Err(e) => {
                tracing::warn!(error = %e, "login token was not accepted");
                Err(e)
            }
        }
    }

    pub fn logout(&mut self, deps: &impl LocalStorage) -> FeedResult<()> {
        self.token = None;
        self.user = None;
        deps.remove_item(AUTH_TOKEN_KEY)
    }

    pub fn token(&self) -> Option<BearerToken> {
        self.token.clone()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether the signed in user is `owner`.
    ///
    /// Only decides which controls are shown. The backend authorizes every
    /// mutation on its own, this is never a security check.
    pub fn is_owner(&self, owner: UserId) -> bool {
        self.user.as_ref().is_some_and(|user| user.id == owner)
    }
}
