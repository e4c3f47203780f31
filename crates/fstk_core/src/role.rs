//! Role types for conversation participants.

use fstk_error::ConfigError;
use serde::{Deserialize, Serialize};

/// The sender of a message in a conversation.
///
/// Roles form a closed set with a fixed lowercase text mapping on the wire.
/// Constructing a message with unrecognized role text is rejected at the
/// boundary rather than silently serialized.
///
/// # Examples
///
/// ```
/// use fstk_core::Role;
///
/// assert_eq!(Role::User.as_str(), "user");
/// assert_eq!("assistant".parse::<Role>().unwrap(), Role::Assistant);
/// assert!("tool".parse::<Role>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    Developer,
    User,
    Assistant,
}

impl Role {
    /// The wire text for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::Developer => "developer",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "system" => Ok(Role::System),
            "developer" => Ok(Role::Developer),
            "user" => Ok(Role::User),
            "assistant" => Ok(Role::Assistant),
            other => Err(ConfigError::new(format!("Unrecognized role: {other}"))),
        }
    }
}
