use crate::providers::env::GOOGLE_VISION_API_KEY;
use crate::providers::models::{
    AnnotateRequest, AnnotateResponse, AnnotationRequest, Feature, ImagePayload, ProviderError,
    ViewAnnotations,
};
use async_trait::async_trait;
use base64::Engine;
use std::env;
use url::Url;

/// Image recognition: annotates a captured view with text, labels, landmarks,
/// logos and localized objects.
#[async_trait]
pub trait RecognitionProvider: Send + Sync {
    async fn annotate(
        &self,
        image: &[u8],
        features: &[Feature],
    ) -> Result<ViewAnnotations, ProviderError>;
}

pub struct GoogleVision {
    http: reqwest::Client,
    base_url: Url,
    api_key: Option<String>,
}

impl GoogleVision {
    pub fn new(base_url: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key: env::var(GOOGLE_VISION_API_KEY).ok(),
        }
    }

    fn api_key(&self) -> Result<&str, ProviderError> {
        self.api_key
            .as_deref()
            .ok_or(ProviderError::MissingCredentials(GOOGLE_VISION_API_KEY))
    }
}

#[async_trait]
impl RecognitionProvider for GoogleVision {
    async fn annotate(
        &self,
        image: &[u8],
        features: &[Feature],
    ) -> Result<ViewAnnotations, ProviderError> {
        let api_key = self.api_key()?;
        let url = self
            .base_url
            .join("/v1/images:annotate")
            .map_err(|err| ProviderError::Rejected(format!("malformed recognition API URL: {err}")))?;
        let request = AnnotateRequest {
            requests: vec![AnnotationRequest {
                image: ImagePayload {
                    content: base64::engine::general_purpose::STANDARD.encode(image),
                },
                features: features.to_vec(),
            }],
        };
        let response = self
            .http
            .post(url)
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await?;
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(ProviderError::Rejected(format!(
                "annotate request returned {status}: {error_text}"
            )));
        }
        let batch: AnnotateResponse = response.json().await?;
        let annotations = batch.responses.into_iter().next().ok_or_else(|| {
            ProviderError::Rejected("annotate response carried no annotations".to_string())
        })?;
        if let Some(error) = &annotations.error {
            return Err(ProviderError::Rejected(format!(
                "recognition failed with code {}: {}",
                error.code, error.message
            )));
        }
        Ok(annotations)
    }
}
