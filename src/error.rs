#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("day count out of range: {0} (expected a value between 1 and 10)")]
    Validation(i64),

    #[error("connection error: {url} - {reason}")]
    Transport { url: String, reason: String },

    #[error("error status: {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("invalid content for {url}: {reason}")]
    Content { url: String, reason: String },

    #[error("request for {date} was interrupted: {reason}")]
    Interrupted { date: String, reason: String },

    #[error("failed to create HTTP client: {0}")]
    Client(String),
}

impl FetchError {
    pub fn transport(url: &str, err: &reqwest::Error) -> Self {
        let reason = if err.is_timeout() {
            format!("request timed out ({})", err)
        } else if err.is_builder() {
            format!("invalid URL ({})", err)
        } else {
            err.to_string()
        };

        FetchError::Transport {
            url: url.to_string(),
            reason,
        }
    }

    pub fn content(url: &str, reason: impl Into<String>) -> Self {
        FetchError::Content {
            url: url.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
