// Runtime authentication state.

use std::env;

use tracing::debug;

pub const TOKEN_VAR: &str = "GITHUB_TOKEN";

/// Credentials available to the provider at request time.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    token: Option<String>,
}

impl Environment {
    /// Read the access token from `GITHUB_TOKEN`, loading `.env` first if one exists.
    pub fn load() -> Self {
        dotenv::dotenv().ok();
        let env = Self::with_token(env::var(TOKEN_VAR).ok());
        debug!("Access token present in environment: {}", env.token_exists());
        env
    }

    pub fn with_token(token: Option<String>) -> Self {
        let token = token.filter(|t| !t.trim().is_empty());
        Environment { token }
    }

    pub fn token_exists(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}
