use crate::config::ApiSettings;
use crate::models::UserProfile;
use async_trait::async_trait;
use console_core::error::AppError;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

/// Full session issued by the panel API.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthenticatedSession {
    pub token: String,
    pub user: UserProfile,
}

/// Handoff for accounts with a second factor enrolled. The temp token only
/// unlocks the verification call and is never persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct PendingTwoFactor {
    pub requires_2fa: bool,
    pub temp_token: String,
}

/// What a login attempt came back with.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LoginOutcome {
    TwoFactorRequired(PendingTwoFactor),
    Full(AuthenticatedSession),
}

/// Seam to the panel API's authentication endpoints.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, AppError>;

    async fn verify_two_factor(
        &self,
        temp_token: &str,
        code: &str,
    ) -> Result<AuthenticatedSession, AppError>;

    async fn fetch_profile(&self, token: &str) -> Result<UserProfile, AppError>;
}

/// HTTP client for the panel API.
pub struct HttpAuthenticator {
    client: Client,
    settings: ApiSettings,
}

impl HttpAuthenticator {
    pub fn new(settings: ApiSettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }

    async fn post_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<T, AppError> {
        let url = format!("{}{}", self.settings.url, path);

        let response = self.client.post(&url).json(&body).send().await.map_err(|e| {
            tracing::error!("Failed to send POST request to {}: {}", url, e);
            AppError::Transport(e.to_string())
        })?;

        Self::decode(url, response).await
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        url: String,
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        match response.status() {
            StatusCode::UNAUTHORIZED => Err(AppError::InvalidCredentials),
            status if status.is_success() => response.json::<T>().await.map_err(|e| {
                AppError::InternalError(anyhow::anyhow!("Malformed response from {}: {}", url, e))
            }),
            status => Err(AppError::Transport(format!("{} returned {}", url, status))),
        }
    }
}

#[async_trait]
impl Authenticator for HttpAuthenticator {
    async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, AppError> {
        self.post_json(
            "/api/login",
            serde_json::json!({
                "username": username,
                "password": password,
            }),
        )
        .await
    }

    async fn verify_two_factor(
        &self,
        temp_token: &str,
        code: &str,
    ) -> Result<AuthenticatedSession, AppError> {
        self.post_json(
            "/api/login/2fa",
            serde_json::json!({
                "temp_token": temp_token,
                "code": code,
            }),
        )
        .await
    }

    async fn fetch_profile(&self, token: &str) -> Result<UserProfile, AppError> {
        let url = format!("{}/api/profile", self.settings.url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send GET request to {}: {}", url, e);
                AppError::Transport(e.to_string())
            })?;

        Self::decode(url, response).await
    }
}
