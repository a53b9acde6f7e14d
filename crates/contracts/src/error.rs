use thiserror::Error;

/// A required field was missing before dispatch. Raised locally; such a
/// request never reaches the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field} is required")]
pub struct ValidationError {
    pub field: &'static str,
}

impl ValidationError {
    pub fn required(field: &'static str) -> Self {
        Self { field }
    }
}

/// A request that left the client and did not come back with a usable
/// 2xx body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The server answered with a non-2xx status. `message` is the server
    /// detail when the error envelope carried one, otherwise the raw body.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },
    /// The request never produced an HTTP response (DNS, refused
    /// connection, timeout).
    #[error("network error: {0}")]
    Network(String),
    /// A 2xx response whose body could not be decoded.
    #[error("unreadable response: {0}")]
    Decode(String),
}

impl TransportError {
    /// Text for the feedback banner: the server-provided detail for HTTP
    /// failures, the full description otherwise.
    pub fn user_message(&self) -> String {
        match self {
            TransportError::Http { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Outcome taxonomy of a create/delete action.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MutationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl MutationError {
    pub fn user_message(&self) -> String {
        match self {
            MutationError::Validation(e) => e.to_string(),
            MutationError::Transport(e) => e.user_message(),
        }
    }
}
