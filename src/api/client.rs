//! HTTP client for the prediction services.

use super::types::{Coordinates, CropPrediction, CropResponse, Diagnosis, ServiceReply};
use crate::error::ApiError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Crop recommendation endpoint, relative to the base URL
pub const PREDICT_CROP_PATH: &str = "/predict-crop";
/// Disease detection endpoint, relative to the base URL
pub const PREDICT_DISEASE_PATH: &str = "/predict-disease";

/// Multipart field, file name and content type the disease service expects
const IMAGE_FIELD: &str = "file";
const IMAGE_FILE_NAME: &str = "photo.jpg";
const IMAGE_MIME: &str = "image/jpeg";

/// The remote prediction backend.
#[async_trait]
pub trait PredictionService: Send + Sync {
    /// Ask for crops suited to a location, best first.
    async fn predict_crops(&self, coords: Coordinates) -> Result<Vec<CropPrediction>, ApiError>;

    /// Ask for a diagnosis of a leaf photo.
    async fn predict_disease(&self, image: Vec<u8>) -> Result<Diagnosis, ApiError>;
}

/// Read an image from disk for upload.
pub async fn read_image(path: &Path) -> Result<Vec<u8>, ApiError> {
    tokio::fs::read(path).await.map_err(|source| ApiError::Image {
        path: path.to_path_buf(),
        source,
    })
}

/// [`PredictionService`] over HTTP
#[derive(Debug, Clone)]
pub struct HttpPredictionClient {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl HttpPredictionClient {
    /// Create a client for the service at `base_url`.
    ///
    /// Fails when the TLS backend cannot be initialised.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decode a response body, turning `{"error": ...}` payloads into
    /// [`ApiError::Remote`] whatever the status code.
    async fn read_reply<T: DeserializeOwned>(
        url: String,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return match response.json::<ErrorBody>().await {
                Ok(body) => Err(ApiError::Remote(body.error)),
                Err(_) => Err(ApiError::Status { url, status }),
            };
        }

        let reply: ServiceReply<T> = response
            .json()
            .await
            .map_err(|source| ApiError::Decode { url, source })?;
        reply.into_result()
    }
}

#[async_trait]
impl PredictionService for HttpPredictionClient {
    async fn predict_crops(&self, coords: Coordinates) -> Result<Vec<CropPrediction>, ApiError> {
        let url = self.endpoint(PREDICT_CROP_PATH);
        tracing::debug!(%url, latitude = coords.latitude, longitude = coords.longitude, "requesting crop predictions");

        let response = self
            .client
            .post(&url)
            .json(&coords)
            .send()
            .await
            .map_err(|source| ApiError::Request {
                url: url.clone(),
                source,
            })?;

        let body: CropResponse = Self::read_reply(url, response).await?;
        Ok(body.predictions)
    }

    async fn predict_disease(&self, image: Vec<u8>) -> Result<Diagnosis, ApiError> {
        let url = self.endpoint(PREDICT_DISEASE_PATH);
        tracing::debug!(%url, bytes = image.len(), "uploading leaf image");

        let part = reqwest::multipart::Part::bytes(image)
            .file_name(IMAGE_FILE_NAME)
            .mime_str(IMAGE_MIME)
            .map_err(|source| ApiError::Request {
                url: url.clone(),
                source,
            })?;
        let form = reqwest::multipart::Form::new().part(IMAGE_FIELD, part);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|source| ApiError::Request {
                url: url.clone(),
                source,
            })?;

        Self::read_reply(url, response).await
    }
}
