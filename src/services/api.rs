use crate::models::{
    conditions::Conditions,
    error::AppError,
    forecast::ForecastEntry,
    report::SpotReport,
    spot::{Spot, SpotId},
};
use serde::{Deserialize, de::DeserializeOwned};

// CONSTANTS
const BASE_URL: &str = "http://localhost:5000/api";
const SPOTS_PATH: &str = "spots";
const CONDITIONS_PATH: &str = "conditions";
const FORECAST_PATH: &str = "previsions";

// API CONFIGURATION
/// Configuration for the surf API client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the spot list.
    pub fn spots_url(&self) -> String {
        format!("{}/{SPOTS_PATH}", self.base_url)
    }

    /// URL of the current conditions for one spot.
    pub fn conditions_url(&self, id: SpotId) -> String {
        format!("{}/{CONDITIONS_PATH}/{id}", self.base_url)
    }

    /// URL of the daily forecast for one spot.
    pub fn forecast_url(&self, id: SpotId) -> String {
        format!("{}/{FORECAST_PATH}/{id}", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets the API origin including its `/api` prefix.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        let base_url = self.base_url.unwrap_or_else(|| BASE_URL.to_string());

        ApiConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

// API RESPONSE TYPES
/// `{succes, donnees, nombre}` wrapper used by every endpoint.
#[derive(Deserialize, Debug)]
struct ApiEnvelope<T> {
    #[serde(rename = "succes", alias = "success")]
    succes: bool,
    #[serde(rename = "donnees", alias = "data")]
    donnees: Option<T>,
    #[serde(rename = "nombre", alias = "count")]
    nombre: Option<usize>,
    message: Option<String>,
}

/// Payload of a successful envelope, with the item count the server announced.
#[derive(Debug, PartialEq)]
pub struct Decoded<T> {
    pub data: T,
    pub count: Option<usize>,
}

/// Parses a response body and unwraps its envelope.
///
/// Fails with `AppError::Protocol` on malformed JSON, `succes: false`, or a
/// missing payload.
pub fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<Decoded<T>, AppError> {
    let envelope: ApiEnvelope<T> = serde_json::from_str(body)
        .map_err(|e| AppError::Protocol(format!("Failed to parse response: {e}")))?;

    if !envelope.succes {
        let reason = envelope
            .message
            .unwrap_or_else(|| "no message".to_string());
        return Err(AppError::Protocol(format!("Request unsuccessful: {reason}")));
    }

    let data = envelope
        .donnees
        .ok_or_else(|| AppError::Protocol("Response has no data".to_string()))?;

    Ok(Decoded {
        data,
        count: envelope.nombre,
    })
}

// SURF CLIENT
/// HTTP client for the surf conditions API.
pub struct SurfClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl SurfClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetches every known spot.
    pub async fn list_spots(&self) -> Result<Vec<Spot>, AppError> {
        let decoded: Decoded<Vec<Spot>> = self.fetch(&self.config.spots_url()).await?;

        if let Some(count) = decoded.count
            && count != decoded.data.len()
        {
            gloo::console::warn!(&format!(
                "Spot count mismatch: server announced {count}, received {}",
                decoded.data.len()
            ));
        }

        Ok(decoded.data)
    }

    /// Fetches current conditions for one spot.
    pub async fn get_conditions(&self, id: SpotId) -> Result<Conditions, AppError> {
        let decoded = self.fetch(&self.config.conditions_url(id)).await?;
        Ok(decoded.data)
    }

    /// Fetches the daily forecast for one spot.
    pub async fn get_forecast(&self, id: SpotId) -> Result<Vec<ForecastEntry>, AppError> {
        let decoded = self.fetch(&self.config.forecast_url(id)).await?;
        Ok(decoded.data)
    }

    /// Fetches conditions and forecast concurrently and waits for both.
    pub async fn get_report(&self, id: SpotId) -> Result<SpotReport, AppError> {
        let (conditions, forecast) =
            futures::future::join(self.get_conditions(id), self.get_forecast(id)).await;

        SpotReport::from_parts(id, conditions, forecast)
    }

    /// Executes a single GET and unwraps the envelope.
    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<Decoded<T>, AppError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::Network(format!("Failed to read response body: {e}")))?;

        decode_envelope(&body)
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::Network(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::Network(format!("Request error: {error}"))
        } else {
            AppError::Network(format!("Network error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        match status.as_u16() {
            404 => AppError::Protocol(format!("Resource not found: {body}")),
            400..=499 => AppError::Protocol(format!("Client error {status}: {body}")),
            500..=599 => AppError::Protocol(format!("Server error {status}: {body}")),
            _ => AppError::Protocol(format!("Unexpected status {status}: {body}")),
        }
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches the spot list using default configuration.
pub async fn fetch_spots() -> Result<Vec<Spot>, AppError> {
    SurfClient::new()?.list_spots().await
}

/// Fetches conditions and forecast for a spot using default configuration.
pub async fn fetch_spot_report(id: SpotId) -> Result<SpotReport, AppError> {
    SurfClient::new()?.get_report(id).await
}
