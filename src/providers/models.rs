use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::map::models::LatLng;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("missing provider credentials: the `{0}` environment variable is not set")]
    MissingCredentials(&'static str),
    #[error("provider request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("provider rejected the request: {0}")]
    Rejected(String),
}

/// A single rendering of the current vantage point, as requested from the
/// imagery provider.
#[derive(Copy, Clone, Debug)]
pub struct ViewSpec {
    pub location: LatLng,
    pub heading: f64,
    pub pitch: f64,
    pub fov: f64,
    pub width: u32,
    pub height: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanoramaMetadata {
    pub status: String,
    pub location: Option<LatLng>,
}

#[derive(Copy, Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub r#type: FeatureKind,
    pub max_results: u32,
}

#[derive(Copy, Clone, Debug, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeatureKind {
    TextDetection,
    LabelDetection,
    LandmarkDetection,
    LogoDetection,
    ObjectLocalization,
}

#[derive(Serialize)]
pub struct AnnotateRequest {
    pub requests: Vec<AnnotationRequest>,
}

#[derive(Serialize)]
pub struct AnnotationRequest {
    pub image: ImagePayload,
    pub features: Vec<Feature>,
}

#[derive(Serialize)]
pub struct ImagePayload {
    /// Base64-encoded image bytes.
    pub content: String,
}

#[derive(Deserialize)]
pub struct AnnotateResponse {
    #[serde(default)]
    pub responses: Vec<ViewAnnotations>,
}

/// Everything the recognition provider had to say about one captured view.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewAnnotations {
    #[serde(default)]
    pub text_annotations: Vec<TextAnnotation>,
    #[serde(default)]
    pub label_annotations: Vec<EntityAnnotation>,
    #[serde(default)]
    pub landmark_annotations: Vec<EntityAnnotation>,
    #[serde(default)]
    pub logo_annotations: Vec<EntityAnnotation>,
    #[serde(default)]
    pub localized_object_annotations: Vec<LocalizedObjectAnnotation>,
    pub error: Option<AnnotationError>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextAnnotation {
    pub description: String,
    pub locale: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityAnnotation {
    pub description: String,
    #[serde(default)]
    pub score: f32,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedObjectAnnotation {
    pub name: String,
    #[serde(default)]
    pub score: f32,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationError {
    pub code: i32,
    pub message: String,
}
