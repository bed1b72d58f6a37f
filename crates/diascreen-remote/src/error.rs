use thiserror::Error;

#[derive(Debug, Error)]
pub enum RemoteError {
    /// Network unreachable, connection dropped, or a response that could
    /// not be read or parsed.
    #[error("transport error: {0}")]
    Transport(String),

    /// Well-formed response with a non-success status.
    #[error("request rejected with status {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    #[error("invalid API endpoint: {0}")]
    Endpoint(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RemoteError {
    pub fn is_rejection(&self) -> bool {
        matches!(self, RemoteError::Rejected { .. })
    }

    /// Message supplied by the service, if it rejected the request with one.
    pub fn service_message(&self) -> Option<&str> {
        match self {
            RemoteError::Rejected { message, .. } => {
                message.as_deref().filter(|m| !m.is_empty())
            }
            _ => None,
        }
    }
}
