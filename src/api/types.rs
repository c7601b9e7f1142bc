//! Wire types of the crop and disease prediction services.

use crate::error::ApiError;
use crate::ledger::PredictedCrop;
use serde::{Deserialize, Serialize};

/// Class name the disease service returns when it recognizes nothing
pub const UNKNOWN_CLASS: &str = "Unknown";

/// Info text shown when the service sends none
pub const NO_INFO: &str = "No info available";

/// Farm location sent to the crop service
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Validate and build a coordinate pair.
    ///
    /// Latitude must lie in `[-90, 90]` and longitude in `[-180, 180]`.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ApiError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(ApiError::InvalidCoordinates(format!(
                "latitude {latitude} is outside [-90, 90]"
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(ApiError::InvalidCoordinates(format!(
                "longitude {longitude} is outside [-180, 180]"
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

/// One recommended crop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropPrediction {
    pub crop: String,
    /// Confidence on a 0-100 scale
    pub confidence: f64,
    #[serde(default)]
    pub info: String,
}

impl From<&CropPrediction> for PredictedCrop {
    fn from(prediction: &CropPrediction) -> Self {
        PredictedCrop::new(prediction.crop.clone(), prediction.confidence)
    }
}

/// Body of a successful `/predict-crop` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CropResponse {
    #[serde(default)]
    pub predictions: Vec<CropPrediction>,
}

/// A treatment suggested for a detected disease
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(default)]
    pub medicine: String,
    #[serde(default)]
    pub usage: String,
    #[serde(default)]
    pub shop: String,
}

/// Result of a `/predict-disease` call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnosis {
    class: String,
    /// Confidence on a 0-1 scale
    confidence: f64,
    #[serde(default)]
    info: Option<String>,
    #[serde(default)]
    wiki_url: Option<String>,
    #[serde(default)]
    suggestions: Option<Vec<Suggestion>>,
}

impl Diagnosis {
    pub fn new(class: impl Into<String>, confidence: f64) -> Self {
        Self {
            class: class.into(),
            confidence,
            info: None,
            wiki_url: None,
            suggestions: None,
        }
    }

    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.info = Some(info.into());
        self
    }

    pub fn with_wiki_url(mut self, url: impl Into<String>) -> Self {
        self.wiki_url = Some(url.into());
        self
    }

    pub fn with_suggestions(mut self, suggestions: Vec<Suggestion>) -> Self {
        self.suggestions = Some(suggestions);
        self
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Confidence scaled to a percentage
    pub fn confidence_percent(&self) -> f64 {
        self.confidence * 100.0
    }

    /// Whether the service failed to recognize the leaf
    pub fn is_unknown(&self) -> bool {
        self.class == UNKNOWN_CLASS
    }

    /// Description of the disease, [`NO_INFO`] when missing or unknown
    pub fn info(&self) -> &str {
        match self.info.as_deref() {
            Some(info) if !self.is_unknown() && !info.is_empty() => info,
            _ => NO_INFO,
        }
    }

    /// Reference link, if the service sent a non-empty one
    pub fn wiki_url(&self) -> Option<&str> {
        if self.is_unknown() {
            return None;
        }
        self.wiki_url.as_deref().filter(|url| !url.is_empty())
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        if self.is_unknown() {
            return &[];
        }
        self.suggestions.as_deref().unwrap_or_default()
    }
}

/// Either payload shape a prediction service may answer with
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ServiceReply<T> {
    Failure { error: String },
    Success(T),
}

impl<T> ServiceReply<T> {
    pub fn into_result(self) -> Result<T, ApiError> {
        match self {
            Self::Failure { error } => Err(ApiError::Remote(error)),
            Self::Success(value) => Ok(value),
        }
    }
}
