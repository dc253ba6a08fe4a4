//! Test helpers for the console shell: scripted authenticator and fixture
//! profiles, so every test runs against in-memory storage and no network.

#![allow(dead_code)]

use async_trait::async_trait;
use console_client::models::{Role, UserProfile};
use console_client::services::auth_client::{
    AuthenticatedSession, Authenticator, LoginOutcome, PendingTwoFactor,
};
use console_core::error::AppError;

/// The one code the scripted authenticator accepts for two-factor logins.
pub const VALID_2FA_CODE: &str = "123456";

/// What a scripted login attempt should come back with.
pub enum ScriptedLogin {
    Full(AuthenticatedSession),
    TwoFactor { temp_token: String },
    Fail,
}

/// Collaborator double that yields whatever the test programmed and never
/// touches the network. A successful two-factor verification hands out the
/// admin session.
pub struct StubAuthenticator {
    pub login: ScriptedLogin,
    pub profile: Option<UserProfile>,
}

impl StubAuthenticator {
    pub fn full(session: AuthenticatedSession) -> Self {
        Self {
            login: ScriptedLogin::Full(session),
            profile: None,
        }
    }

    pub fn two_factor(temp_token: &str) -> Self {
        Self {
            login: ScriptedLogin::TwoFactor {
                temp_token: temp_token.to_string(),
            },
            profile: None,
        }
    }

    pub fn failing() -> Self {
        Self {
            login: ScriptedLogin::Fail,
            profile: None,
        }
    }

    pub fn with_profile(mut self, profile: UserProfile) -> Self {
        self.profile = Some(profile);
        self
    }
}

#[async_trait]
impl Authenticator for StubAuthenticator {
    async fn login(&self, _username: &str, _password: &str) -> Result<LoginOutcome, AppError> {
        match &self.login {
            ScriptedLogin::Full(session) => Ok(LoginOutcome::Full(session.clone())),
            ScriptedLogin::TwoFactor { temp_token } => {
                Ok(LoginOutcome::TwoFactorRequired(PendingTwoFactor {
                    requires_2fa: true,
                    temp_token: temp_token.clone(),
                }))
            }
            ScriptedLogin::Fail => Err(AppError::InvalidCredentials),
        }
    }

    async fn verify_two_factor(
        &self,
        temp_token: &str,
        code: &str,
    ) -> Result<AuthenticatedSession, AppError> {
        match &self.login {
            ScriptedLogin::TwoFactor { temp_token: issued }
                if issued == temp_token && code == VALID_2FA_CODE =>
            {
                Ok(admin_session())
            }
            _ => Err(AppError::InvalidCredentials),
        }
    }

    async fn fetch_profile(&self, _token: &str) -> Result<UserProfile, AppError> {
        self.profile
            .clone()
            .ok_or_else(|| AppError::Unauthorized(anyhow::anyhow!("no profile for this token")))
    }
}

pub fn admin_user() -> UserProfile {
    UserProfile {
        id: 1,
        username: "alice".to_string(),
        email: "alice@example.com".to_string(),
        role: Role::Admin,
        email_verified: true,
        password_changed: true,
    }
}

pub fn member_user() -> UserProfile {
    UserProfile {
        id: 2,
        username: "bob".to_string(),
        email: "bob@example.com".to_string(),
        role: Role::User,
        email_verified: true,
        password_changed: true,
    }
}

pub fn admin_session() -> AuthenticatedSession {
    AuthenticatedSession {
        token: "T1".to_string(),
        user: admin_user(),
    }
}

pub fn member_session() -> AuthenticatedSession {
    AuthenticatedSession {
        token: "T2".to_string(),
        user: member_user(),
    }
}
