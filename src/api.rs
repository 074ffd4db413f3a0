//! HTTP client for the backend REST API.
//!
//! Every request carries `Authorization: Bearer <token>` when a session
//! exists. Any non-2xx response surfaces as [`ApiError::Api`] with the
//! backend-provided message when one can be extracted from the body. No
//! retries, no backoff.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;
use crate::models::{
    CreateTransactionRequest, CreateWalletRequest, LoginRequest, RegisterRequest, Session,
    Transaction, Wallet,
};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend returned {status}: {message}")]
    Api { status: u16, message: String },
}

impl ApiError {
    /// The backend message when present, otherwise the given fallback.
    /// Transport failures always use the fallback.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Api { message, .. } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

fn parse_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Unauthenticated client, for login and registration.
    pub fn new() -> Self {
        Self::with_base_url(config::api_base_url(), None)
    }

    /// Client carrying the session's bearer token when one exists.
    pub fn from_session(session: Option<&Session>) -> Self {
        Self::with_base_url(config::api_base_url(), session.map(|s| s.token.clone()))
    }

    fn with_base_url(base_url: impl Into<String>, token: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.authorize(self.http.get(self.url(path)));
        Self::send(request).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.authorize(self.http.post(self.url(path)).json(body));
        Self::send(request).await
    }

    async fn send<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .inspect_err(|e| log::error!("request to backend failed: {e}"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: parse_error_message(&body).unwrap_or_default(),
            });
        }

        Ok(response
            .json::<T>()
            .await
            .inspect_err(|e| log::error!("failed to deserialize response: {e}"))?)
    }

    // --- accounts ---

    pub async fn register(&self, request: &RegisterRequest) -> Result<Session, ApiError> {
        self.post_json("/api/accounts/register", request).await
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<Session, ApiError> {
        self.post_json("/api/accounts/login", request).await
    }

    // --- wallets ---

    pub async fn wallets_for_user(&self, user_id: i64) -> Result<Vec<Wallet>, ApiError> {
        self.get_json(&format!("/api/wallets/user/{user_id}")).await
    }

    pub async fn create_wallet(&self, request: &CreateWalletRequest) -> Result<Wallet, ApiError> {
        self.post_json("/api/wallets", request).await
    }

    #[allow(dead_code)]
    pub async fn wallet(&self, id: i64) -> Result<Wallet, ApiError> {
        self.get_json(&format!("/api/wallets/{id}")).await
    }

    // --- transactions ---

    pub async fn transactions_for_wallet(
        &self,
        wallet_id: i64,
    ) -> Result<Vec<Transaction>, ApiError> {
        self.get_json(&format!("/api/transactions/wallet/{wallet_id}"))
            .await
    }

    pub async fn create_transaction(
        &self,
        request: &CreateTransactionRequest,
    ) -> Result<Transaction, ApiError> {
        self.post_json("/api/transactions", request).await
    }

    #[allow(dead_code)]
    pub async fn transaction(&self, id: i64) -> Result<Transaction, ApiError> {
        self.get_json(&format!("/api/transactions/{id}")).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_path() {
        let client = ApiClient::with_base_url("http://localhost:8080/", None);
        assert_eq!(
            client.url("/api/wallets/user/3"),
            "http://localhost:8080/api/wallets/user/3"
        );
    }

    #[test]
    fn error_message_extracted_from_json_body() {
        assert_eq!(
            parse_error_message(r#"{"message":"Invalid credentials"}"#),
            Some("Invalid credentials".to_string())
        );
    }

    #[test]
    fn error_message_absent_for_other_bodies() {
        assert_eq!(parse_error_message(""), None);
        assert_eq!(parse_error_message("<html>502</html>"), None);
        assert_eq!(parse_error_message(r#"{"message":""}"#), None);
        assert_eq!(parse_error_message(r#"{"error":"boom"}"#), None);
    }

    #[test]
    fn message_or_prefers_backend_message() {
        let err = ApiError::Api {
            status: 401,
            message: "Invalid credentials".to_string(),
        };
        assert_eq!(err.message_or("fallback"), "Invalid credentials");
    }

    #[test]
    fn message_or_falls_back_when_empty() {
        let err = ApiError::Api {
            status: 500,
            message: String::new(),
        };
        assert_eq!(
            err.message_or("Login failed. Please check your credentials."),
            "Login failed. Please check your credentials."
        );
    }
}
