//! # Prediction Service Client
//!
//! Client side of the remote prediction backend.
//!
//! ## Endpoints
//!
//! | Endpoint | Request | Response |
//! |----------|---------|----------|
//! | `POST /predict-crop` | JSON [`Coordinates`] | `{"predictions": [CropPrediction]}` |
//! | `POST /predict-disease` | multipart `file` (JPEG) | [`Diagnosis`] |
//!
//! Either endpoint may answer `{"error": "..."}` instead, which surfaces as
//! [`crate::error::ApiError::Remote`].

pub mod client;
pub mod types;

pub use client::{read_image, HttpPredictionClient, PredictionService};
pub use types::{
    Coordinates, CropPrediction, CropResponse, Diagnosis, ServiceReply, Suggestion, NO_INFO,
    UNKNOWN_CLASS,
};
