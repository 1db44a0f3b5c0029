//! API credential handling for the standalone run.
//!
//! The key is resolved once per command and passed around explicitly. It is
//! never written to disk, logged or serialized.

use std::fmt;

/// Environment variable holding the API key read by downstream agents.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

#[derive(Clone, Default)]
pub struct Credentials {
    api_key: Option<String>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Credentials {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty()),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Resolve credentials from `existing` (normally the environment variable).
    ///
    /// When `existing` is unset and `prompt` is true, `ask` is called to read
    /// a key interactively. A failing prompt leaves the credentials empty.
    pub fn resolve<F>(existing: Option<String>, prompt: bool, ask: F) -> Self
    where
        F: FnOnce() -> std::io::Result<String>,
    {
        let from_env = Self::new(existing);
        if from_env.has_api_key() || !prompt {
            return from_env;
        }
        match ask() {
            Ok(key) => Self::new(Some(key)),
            Err(e) => {
                tracing::debug!(error = %e, "API key prompt unavailable, continuing without it");
                Self::default()
            }
        }
    }
}

/// Read the key from the controlling terminal without echo.
pub fn prompt_api_key() -> std::io::Result<String> {
    dialoguer::Password::new()
        .with_prompt(format!("Enter {} (will not be saved)", API_KEY_ENV))
        .allow_empty_password(true)
        .interact()
        .map_err(std::io::Error::other)
}
