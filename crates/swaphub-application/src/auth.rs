//! Session/access gate service.
//!
//! A two-state machine: anonymous or authenticated. Login performs no
//! credential verification (any non-empty pair succeeds after a simulated
//! network delay, as there is no backend); logout is immediate. The session
//! is held for the process lifetime only.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use swaphub_core::error::{Result, SwapHubError};
use swaphub_core::profile::ProfileRepository;
use swaphub_core::session::SessionIdentity;

/// Default simulated login latency, standing in for a real network call.
pub const DEFAULT_LOGIN_DELAY: Duration = Duration::from_millis(1000);

/// Holds the current authenticated identity and gates mutating actions.
pub struct AuthService {
    profiles: Arc<dyn ProfileRepository>,
    current: RwLock<Option<SessionIdentity>>,
    login_delay: Duration,
}

impl AuthService {
    pub fn new(profiles: Arc<dyn ProfileRepository>) -> Self {
        Self {
            profiles,
            current: RwLock::new(None),
            login_delay: DEFAULT_LOGIN_DELAY,
        }
    }

    /// Overrides the simulated login latency (tests pass zero).
    pub fn with_login_delay(mut self, delay: Duration) -> Self {
        self.login_delay = delay;
        self
    }

    /// Logs in with the given credentials.
    ///
    /// Both fields must be non-empty; beyond that any pair is accepted. The
    /// identity is resolved against the catalog by email so the session user
    /// always maps to a catalog profile; an unknown email falls back to the
    /// first seeded profile.
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error for blank credentials and `DataAccess`
    /// when the catalog is empty. The session is untouched on error.
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionIdentity> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(SwapHubError::validation(
                "email and password must not be empty",
            ));
        }

        // Simulated network latency; the one suspension point in the app.
        tokio::time::sleep(self.login_delay).await;

        let catalog = self.profiles.list().await?;
        let profile = catalog
            .iter()
            .find(|p| p.email.eq_ignore_ascii_case(email))
            .or_else(|| catalog.first())
            .ok_or_else(|| SwapHubError::data_access("catalog has no profiles to log in as"))?;

        let identity = SessionIdentity {
            id: profile.id.clone(),
            username: profile.username.clone(),
            email: email.to_string(),
        };

        tracing::info!(user_id = %identity.id, "logged in as @{}", identity.username);
        *self.current.write().await = Some(identity.clone());
        Ok(identity)
    }

    /// Destroys the session immediately.
    pub async fn logout(&self) {
        let mut current = self.current.write().await;
        if let Some(identity) = current.take() {
            tracing::info!(user_id = %identity.id, "logged out");
        }
    }

    /// The current identity, if authenticated.
    pub async fn current(&self) -> Option<SessionIdentity> {
        self.current.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.current.read().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swaphub_infrastructure::{InMemoryProfileRepository, seed_profiles};

    fn auth() -> AuthService {
        let repo = Arc::new(InMemoryProfileRepository::with_seed(seed_profiles()));
        AuthService::new(repo).with_login_delay(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_blank_credentials_are_rejected() {
        let auth = auth();
        assert!(auth.login("", "secret").await.unwrap_err().is_validation());
        assert!(auth.login("a@b.c", "").await.unwrap_err().is_validation());
        assert!(auth.login("   ", "secret").await.unwrap_err().is_validation());
        assert!(!auth.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_any_non_empty_pair_succeeds() {
        let auth = auth();
        let identity = auth.login("sarah@swaphub.dev", "whatever").await.unwrap();
        assert_eq!(identity.id, "u2");
        assert_eq!(identity.username, "sarah_designs");
        assert!(auth.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_unknown_email_falls_back_to_first_profile() {
        let auth = auth();
        let identity = auth.login("nobody@example.com", "pw").await.unwrap();
        assert_eq!(identity.id, "u1");
        assert_eq!(identity.email, "nobody@example.com");
    }

    #[tokio::test]
    async fn test_logout_is_immediate_and_idempotent() {
        let auth = auth();
        auth.login("marcus@swaphub.dev", "pw").await.unwrap();
        auth.logout().await;
        assert!(auth.current().await.is_none());
        auth.logout().await;
        assert!(!auth.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_empty_catalog_login_fails() {
        let repo = Arc::new(InMemoryProfileRepository::new());
        let auth = AuthService::new(repo).with_login_delay(Duration::ZERO);
        let err = auth.login("a@b.c", "pw").await.unwrap_err();
        assert!(matches!(err, SwapHubError::DataAccess(_)));
        assert!(!auth.is_authenticated().await);
    }
}
