//! Chat completion error types.

use crate::ConfigError;

/// Failure classes for a chat completion call.
///
/// Each stage of the call pipeline maps onto exactly one kind, so callers
/// can branch on what failed without losing the underlying detail.
#[derive(Debug, Clone)]
pub enum ChatErrorKind {
    /// The configured base address could not be resolved
    Configuration(ConfigError),
    /// No response within the read or write timeout
    Timeout(String),
    /// Connection-level failure (DNS, refused connection, reset)
    Transport(String),
    /// A response was obtained with a non-200 status
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Response body, preserved for diagnostics
        body: String,
    },
    /// The response body was not valid JSON or a message entry was incomplete
    Decode(String),
}

impl std::fmt::Display for ChatErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatErrorKind::Configuration(err) => write!(f, "{}", err),
            ChatErrorKind::Timeout(msg) => write!(f, "Request timed out: {}", msg),
            ChatErrorKind::Transport(msg) => write!(f, "Transport failure: {}", msg),
            ChatErrorKind::HttpStatus { status, body } => {
                write!(f, "HTTP {} error: {}", status, body)
            }
            ChatErrorKind::Decode(msg) => write!(f, "Failed to decode response: {}", msg),
        }
    }
}

impl ChatErrorKind {
    /// True when no response was obtained (timeout or transport failure).
    pub fn is_network(&self) -> bool {
        matches!(self, ChatErrorKind::Timeout(_) | ChatErrorKind::Transport(_))
    }

    /// True when the call exceeded a read or write timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ChatErrorKind::Timeout(_))
    }

    /// The HTTP status code, when the server rejected the call.
    pub fn status(&self) -> Option<u16> {
        match self {
            ChatErrorKind::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Chat completion error with source location.
///
/// # Examples
///
/// ```
/// use fstk_error::ChatError;
///
/// let err = ChatError::timeout("read timed out after 30s");
/// assert!(err.kind.is_timeout());
/// assert!(err.kind.is_network());
/// ```
#[derive(Debug, Clone)]
pub struct ChatError {
    /// The failure class
    pub kind: ChatErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ChatError {
    /// Create a new ChatError with the given kind at the current location.
    #[track_caller]
    pub fn new(kind: ChatErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// A malformed base address or invalid client configuration.
    #[track_caller]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ChatErrorKind::Configuration(ConfigError::new(message)))
    }

    /// A read or write timeout was exceeded.
    #[track_caller]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ChatErrorKind::Timeout(message.into()))
    }

    /// A connection-level failure before any response was obtained.
    #[track_caller]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ChatErrorKind::Transport(message.into()))
    }

    /// A non-200 response, with the body preserved.
    #[track_caller]
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::new(ChatErrorKind::HttpStatus {
            status,
            body: body.into(),
        })
    }

    /// An unparseable response body or incomplete message entry.
    #[track_caller]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ChatErrorKind::Decode(message.into()))
    }
}

impl std::fmt::Display for ChatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chat Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for ChatError {}

impl From<ConfigError> for ChatError {
    fn from(err: ConfigError) -> Self {
        Self::new(ChatErrorKind::Configuration(err))
    }
}
