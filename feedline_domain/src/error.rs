use reqwest::StatusCode;

pub type FeedResult<T, E = FeedError> = std::result::Result<T, E>;

#[derive(thiserror::Error, Clone, Debug, Eq, PartialEq)]
pub enum FeedError {
    #[error("authentication required")]
    Unauthorized,

    #[error("forbidden")]
    Forbidden,

    #[error("not found")]
    NotFound,

    #[error("unexpected response status: {0}")]
    Status(u16),

    #[error("could not reach the feed api: {0}")]
    Transport(String),

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("local storage error: {0}")]
    Storage(String),
}

impl FeedError {
    /// Map a non-success response status to the matching error.
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            StatusCode::FORBIDDEN => Self::Forbidden,
            StatusCode::NOT_FOUND => Self::NotFound,
            other => Self::Status(other.as_u16()),
        }
    }

    /// True for errors that mean the session has no usable token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::from_status(status)
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<std::io::Error> for FeedError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(
            FeedError::Unauthorized,
            FeedError::from_status(StatusCode::UNAUTHORIZED)
        );
        assert_eq!(
            FeedError::NotFound,
            FeedError::from_status(StatusCode::NOT_FOUND)
        );
        assert_eq!(
            FeedError::Status(500),
            FeedError::from_status(StatusCode::INTERNAL_SERVER_ERROR)
        );
    }
}
