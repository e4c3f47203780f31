//! Endpoint resolution for OpenAI-compatible base addresses.
//!
//! A base address of the form `scheme://host[:port][/basepath]` resolves to
//! a concrete target path under a validated structured URL parse, never ad
//! hoc string slicing.

use derive_getters::Getters;
use fstk_error::ChatError;
use url::Url;

/// Leaf path of the chat completions operation.
pub const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

/// Leaf path of the model listing operation.
pub const MODELS_PATH: &str = "/models";

/// A resolved request target.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Endpoint {
    /// URL scheme, `http` or `https`
    scheme: String,
    /// Host with optional port, e.g. `api.openai.com` or `localhost:8080`
    authority: String,
    /// Absolute request path, e.g. `/v1/chat/completions`
    path: String,
}

impl Endpoint {
    /// Reassembles the full request URL.
    pub fn url(&self) -> String {
        format!("{}://{}{}", self.scheme, self.authority, self.path)
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.url())
    }
}

/// Resolves a base address to the chat completions endpoint.
pub fn resolve_chat(base_url: &str) -> Result<Endpoint, ChatError> {
    resolve(base_url, CHAT_COMPLETIONS_PATH)
}

/// Resolves a base address to the model listing endpoint.
pub fn resolve_models(base_url: &str) -> Result<Endpoint, ChatError> {
    resolve(base_url, MODELS_PATH)
}

/// Resolves a base address against a leaf path.
///
/// The base path concatenates with the leaf across exactly one `/`
/// separator: an absent base path yields the leaf alone, a trailing slash
/// concatenates without inserting a duplicate, and anything else gets a
/// single separator inserted.
fn resolve(base_url: &str, leaf: &str) -> Result<Endpoint, ChatError> {
    if !base_url.contains("://") {
        return Err(ChatError::configuration(format!(
            "Base address is missing '://': {base_url}"
        )));
    }

    let parsed = Url::parse(base_url)
        .map_err(|e| ChatError::configuration(format!("Invalid base address {base_url}: {e}")))?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ChatError::configuration(format!(
            "Unsupported scheme '{scheme}' in base address {base_url}"
        )));
    }

    let host = parsed.host_str().ok_or_else(|| {
        ChatError::configuration(format!("Base address has no host: {base_url}"))
    })?;
    let authority = match parsed.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    };

    let base_path = parsed.path();
    let path = if base_path == "/" {
        leaf.to_string()
    } else if base_path.ends_with('/') {
        format!("{}{}", base_path, &leaf[1..])
    } else {
        format!("{base_path}{leaf}")
    };

    Ok(Endpoint {
        scheme: scheme.to_string(),
        authority,
        path,
    })
}
