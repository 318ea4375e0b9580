use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::{
    dto::{orders::CreateOrderRequest, reservations::CreateReservationRequest},
    models::{Order, Reservation},
    response::ApiResponse,
};

#[derive(Debug, Error)]
pub enum ClientError {
    /// Non-2xx response; carries the envelope's message when one was sent.
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    #[error(transparent)]
    Network(#[from] reqwest::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Typed client for the storefront API.
///
/// Requests carry no timeout; a hung server hangs the caller. That matches
/// the forms' behavior and is a documented limitation.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// `api_url` is the server origin, e.g. `http://localhost:5000`; the
    /// `/api` prefix is appended here so callers never hardcode it.
    pub fn new(api_url: impl Into<String>) -> Self {
        let origin = api_url.into();
        Self {
            base_url: format!("{}/api", origin.trim_end_matches('/')),
            http: reqwest::Client::new(),
        }
    }

    /// Reads `API_URL`, defaulting to the local development server.
    pub fn from_env() -> Self {
        let origin =
            std::env::var("API_URL").unwrap_or_else(|_| "http://localhost:5000".to_string());
        Self::new(origin)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn create_reservation(
        &self,
        payload: &CreateReservationRequest,
    ) -> ClientResult<ApiResponse<Reservation>> {
        let response = self
            .http
            .post(format!("{}/reservations", self.base_url))
            .json(payload)
            .send()
            .await?;
        read_envelope(response).await
    }

    pub async fn reservations(&self) -> ClientResult<ApiResponse<Vec<Reservation>>> {
        let response = self
            .http
            .get(format!("{}/reservations", self.base_url))
            .send()
            .await?;
        read_envelope(response).await
    }

    pub async fn reservation(&self, id: i32) -> ClientResult<ApiResponse<Reservation>> {
        let response = self
            .http
            .get(format!("{}/reservations/{id}", self.base_url))
            .send()
            .await?;
        read_envelope(response).await
    }

    pub async fn delete_reservation(&self, id: i32) -> ClientResult<ApiResponse<Reservation>> {
        let response = self
            .http
            .delete(format!("{}/reservations/{id}", self.base_url))
            .send()
            .await?;
        read_envelope(response).await
    }

    pub async fn create_order(
        &self,
        payload: &CreateOrderRequest,
    ) -> ClientResult<ApiResponse<Order>> {
        let response = self
            .http
            .post(format!("{}/orders", self.base_url))
            .json(payload)
            .send()
            .await?;
        read_envelope(response).await
    }

    pub async fn orders(&self) -> ClientResult<ApiResponse<Vec<Order>>> {
        let response = self
            .http
            .get(format!("{}/orders", self.base_url))
            .send()
            .await?;
        read_envelope(response).await
    }

    pub async fn order(&self, id: i32) -> ClientResult<ApiResponse<Order>> {
        let response = self
            .http
            .get(format!("{}/orders/{id}", self.base_url))
            .send()
            .await?;
        read_envelope(response).await
    }
}

async fn read_envelope<T: DeserializeOwned>(
    response: reqwest::Response,
) -> ClientResult<ApiResponse<T>> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    // Service errors still ship the envelope; surface its message.
    let message = match response.json::<ApiResponse<serde_json::Value>>().await {
        Ok(envelope) => envelope
            .message
            .or(envelope.error)
            .unwrap_or_else(|| status.to_string()),
        Err(_) => status.to_string(),
    };

    Err(ClientError::Api { status, message })
}
