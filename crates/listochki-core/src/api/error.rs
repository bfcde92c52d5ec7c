use thiserror::Error;

/// Every failure the gateway can produce. Resource clients pass it through
/// unchanged; only the reference stores turn it into a user-facing message.
#[derive(Error, Debug)]
pub enum TransportFailure {
    #[error("Resource not found: {url}")]
    NotFound { url: String },

    #[error("HTTP {status} from {url}: {body}")]
    Status { status: u16, url: String, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response from {url}: {reason}")]
    InvalidResponse { url: String, reason: String },
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl TransportFailure {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            let mut end = MAX_ERROR_BODY_LENGTH;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}... (truncated, {} total bytes)", &body[..end], body.len())
        }
    }

    pub fn from_status(status: u16, url: &str, body: &str) -> Self {
        match status {
            404 => TransportFailure::NotFound { url: url.to_string() },
            _ => TransportFailure::Status {
                status,
                url: url.to_string(),
                body: Self::truncate_body(body),
            },
        }
    }

    pub fn invalid(url: &str, reason: impl ToString) -> Self {
        TransportFailure::InvalidResponse {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, TransportFailure::NotFound { .. })
    }

    /// HTTP status, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportFailure::NotFound { .. } => Some(404),
            TransportFailure::Status { status, .. } => Some(*status),
            TransportFailure::Network(e) => e.status().map(|s| s.as_u16()),
            TransportFailure::InvalidResponse { .. } => None,
        }
    }
}
