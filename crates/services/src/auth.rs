//! Identity-provider seam.
//!
//! The attempt flow never talks to an auth backend directly; it fails
//! closed whenever no token is available and forces a logout on session
//! expiry. Both behaviors go through this trait.

use std::env;
use std::sync::Mutex;

use async_trait::async_trait;

/// External identity provider as seen by this crate.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Current bearer token, if the user is authenticated.
    async fn token(&self) -> Option<String>;

    /// Invalidate the current session (e.g. after the service reports
    /// expiry).
    async fn logout(&self);
}

/// Reads the bearer token from an environment variable.
///
/// Used by the terminal runner; `logout` cannot revoke an environment
/// variable, so it only records the event.
#[derive(Debug, Clone)]
pub struct EnvTokenProvider {
    var: String,
}

impl EnvTokenProvider {
    #[must_use]
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvTokenProvider {
    fn default() -> Self {
        Self::new("QUIZ_API_TOKEN")
    }
}

#[async_trait]
impl TokenProvider for EnvTokenProvider {
    async fn token(&self) -> Option<String> {
        env::var(&self.var)
            .ok()
            .map(|token| token.trim().to_owned())
            .filter(|token| !token.is_empty())
    }

    async fn logout(&self) {
        log::info!("logout requested; discard {} to re-authenticate", self.var);
    }
}

/// Holds a token in memory; `logout` clears it.
///
/// Useful for programmatic callers and tests.
#[derive(Debug, Default)]
pub struct StaticTokenProvider {
    token: Mutex<Option<String>>,
}

impl StaticTokenProvider {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }

    /// Empty provider: `token()` returns `None` until `set_token`.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.lock().expect("token lock poisoned") = Some(token.into());
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn token(&self) -> Option<String> {
        self.token.lock().expect("token lock poisoned").clone()
    }

    async fn logout(&self) {
        self.token.lock().expect("token lock poisoned").take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_provider_logout_clears_token() {
        let provider = StaticTokenProvider::new("abc");
        assert_eq!(provider.token().await.as_deref(), Some("abc"));

        provider.logout().await;
        assert_eq!(provider.token().await, None);
    }

    #[tokio::test]
    async fn empty_provider_has_no_token() {
        let provider = StaticTokenProvider::empty();
        assert_eq!(provider.token().await, None);

        provider.set_token("later");
        assert_eq!(provider.token().await.as_deref(), Some("later"));
    }
}
