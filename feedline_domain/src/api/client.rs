use crate::error::{FeedError, FeedResult};
use crate::user::auth::BearerToken;

use reqwest::{Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

/// Shared HTTP client for the feed API.
///
/// The client itself never holds credentials. Each request gets the token
/// handed to it by the caller, so there is no process-wide default header.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpClient {
    pub fn new(base_url: Url) -> FeedResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("feedline/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FeedError::Transport(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub(crate) fn request(
        &self,
        method: Method,
        path: &str,
        token: Option<&BearerToken>,
    ) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!(%method, %url, authenticated = token.is_some(), "feed api request");

        let builder = self.client.request(method, url);
        match token {
            Some(token) => builder.bearer_auth(token.as_str()),
            None => builder,
        }
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(builder: RequestBuilder) -> FeedResult<T> {
        let response = Self::send(builder).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub(crate) async fn send_empty(builder: RequestBuilder) -> FeedResult<()> {
        Self::send(builder).await?;
        Ok(())
    }

    async fn send(builder: RequestBuilder) -> FeedResult<Response> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%status, "feed api returned an error status");
            return Err(FeedError::from_status(status));
        }
        Ok(response)
    }
}
