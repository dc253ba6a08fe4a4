use crate::models::UserProfile;
use crate::services::auth_client::{AuthenticatedSession, Authenticator, LoginOutcome};
use console_core::error::AppError;
use console_core::storage::KeyValueStore;
use std::sync::Arc;

/// Storage keys for the persisted session pair.
pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Owns the credential and profile of the signed-in account and mirrors
/// both into persistent storage so a restart resumes the session.
///
/// An empty token means signed out. A present token with `user` still
/// `None` is a legal transient state: the token was rehydrated but the
/// profile has not been fetched yet.
pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
    auth: Arc<dyn Authenticator>,
    token: String,
    user: Option<UserProfile>,
}

impl SessionStore {
    /// Rehydrate from storage. Never fails: a missing token opens signed
    /// out, and a stored profile that no longer parses is dropped.
    pub fn open(storage: Arc<dyn KeyValueStore>, auth: Arc<dyn Authenticator>) -> Self {
        let token = storage.get(TOKEN_KEY).unwrap_or_default();
        let user = storage
            .get(USER_KEY)
            .and_then(|raw| match serde_json::from_str(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::warn!(error = %e, "Discarding unparseable stored profile");
                    None
                }
            });

        Self {
            storage,
            auth,
            token,
            user,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }

    /// Attempt a credential login.
    ///
    /// A two-factor handoff is returned to the caller untouched; only a
    /// full result mutates and persists session state. Collaborator
    /// failures propagate as-is and leave the session exactly as it was.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<LoginOutcome, AppError> {
        let outcome = self.auth.login(username, password).await?;

        if let LoginOutcome::Full(session) = &outcome {
            self.apply(session.clone());
        }

        Ok(outcome)
    }

    /// Finish a login that came back two-factor-pending.
    pub async fn complete_two_factor(
        &mut self,
        temp_token: &str,
        code: &str,
    ) -> Result<(), AppError> {
        let session = self.auth.verify_two_factor(temp_token, code).await?;
        self.apply(session);
        Ok(())
    }

    /// Re-fetch the profile for the held token and persist it. This is
    /// what resolves a rehydrated token whose profile was never stored.
    pub async fn refresh_user(&mut self) -> Result<(), AppError> {
        if self.token.is_empty() {
            return Err(AppError::Unauthorized(anyhow::anyhow!(
                "no session token held"
            )));
        }

        let user = self.auth.fetch_profile(&self.token).await?;
        self.persist_user(&user);
        self.user = Some(user);
        Ok(())
    }

    /// Drop the session. Safe to call when already signed out.
    pub fn logout(&mut self) {
        self.token.clear();
        self.user = None;
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
        tracing::info!("Session cleared");
    }

    fn apply(&mut self, session: AuthenticatedSession) {
        let AuthenticatedSession { token, user } = session;
        self.token = token;
        self.storage.set(TOKEN_KEY, &self.token);
        self.persist_user(&user);
        tracing::info!(
            user_id = user.id,
            username = %user.username,
            "User logged in"
        );
        self.user = Some(user);
    }

    fn persist_user(&self, user: &UserProfile) {
        match serde_json::to_string(user) {
            Ok(raw) => self.storage.set(USER_KEY, &raw),
            Err(e) => tracing::error!(error = %e, "Failed to serialize profile for storage"),
        }
    }
}
