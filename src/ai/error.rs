/// Failures of the text generator. Any of these means the reply is unavailable
/// and callers substitute default content.
#[derive(thiserror::Error, Debug)]
pub enum UpstreamError {
    /// No API key was configured.
    #[error("no Gemini API key configured")]
    MissingCredential,

    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API key was refused (401/403).
    #[error("credential rejected by Gemini API ({0})")]
    Rejected(u16),

    #[error("rate limit exceeded")]
    RateLimited,

    #[error("Gemini API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("content blocked by Gemini safety filters")]
    Blocked,

    #[error("malformed Gemini response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Gemini returned no text")]
    Empty,
}

impl UpstreamError {
    pub(crate) fn from_status(status: u16, body: String) -> Self {
        match status {
            401 | 403 => UpstreamError::Rejected(status),
            429 => UpstreamError::RateLimited,
            _ => UpstreamError::Api { status, body },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert!(matches!(
            UpstreamError::from_status(403, String::new()),
            UpstreamError::Rejected(403)
        ));
        assert!(matches!(
            UpstreamError::from_status(429, String::new()),
            UpstreamError::RateLimited
        ));
        let err = UpstreamError::from_status(500, "boom".into());
        assert_eq!(err.to_string(), "Gemini API error (500): boom");
    }
}
