use crate::map::models::LatLng;
use crate::providers::env::GOOGLE_MAPS_API_KEY;
use crate::providers::models::{PanoramaMetadata, ProviderError, ViewSpec};
use async_trait::async_trait;
use std::env;
use url::Url;

/// Street-level imagery: nearest-panorama lookup and view rendering.
#[async_trait]
pub trait ImageryProvider: Send + Sync {
    /// Resolves the nearest available panorama within `radius_meters` of the
    /// candidate, or `None` when there is no coverage there at all.
    async fn find_nearby_panorama(
        &self,
        candidate: LatLng,
        radius_meters: u32,
    ) -> Result<Option<LatLng>, ProviderError>;

    /// Renders the given vantage point to image bytes.
    async fn render_view(&self, view: &ViewSpec) -> Result<Vec<u8>, ProviderError>;
}

pub struct GoogleStreetView {
    http: reqwest::Client,
    base_url: Url,
    api_key: Option<String>,
}

impl GoogleStreetView {
    pub fn new(base_url: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key: env::var(GOOGLE_MAPS_API_KEY).ok(),
        }
    }

    fn api_key(&self) -> Result<&str, ProviderError> {
        self.api_key
            .as_deref()
            .ok_or(ProviderError::MissingCredentials(GOOGLE_MAPS_API_KEY))
    }

    fn endpoint(&self, path: &str) -> Result<Url, ProviderError> {
        self.base_url
            .join(path)
            .map_err(|err| ProviderError::Rejected(format!("malformed imagery API URL: {err}")))
    }
}

#[async_trait]
impl ImageryProvider for GoogleStreetView {
    async fn find_nearby_panorama(
        &self,
        candidate: LatLng,
        radius_meters: u32,
    ) -> Result<Option<LatLng>, ProviderError> {
        let api_key = self.api_key()?;
        let url = self.endpoint("/maps/api/streetview/metadata")?;
        let response = self
            .http
            .get(url)
            .query(&[
                ("location", format!("{},{}", candidate.lat, candidate.lng)),
                ("radius", radius_meters.to_string()),
                ("source", "outdoor".to_string()),
                ("key", api_key.to_string()),
            ])
            .send()
            .await?;
        if !response.status().is_success() {
            let status = response.status();
            return Err(ProviderError::Rejected(format!(
                "panorama metadata request returned {status}"
            )));
        }
        let metadata: PanoramaMetadata = response.json().await?;
        match metadata.status.as_str() {
            "OK" => match metadata.location {
                Some(location) => Ok(Some(location)),
                None => Err(ProviderError::Rejected(
                    "panorama metadata is missing the resolved location".to_string(),
                )),
            },
            "ZERO_RESULTS" | "NOT_FOUND" => Ok(None),
            other => Err(ProviderError::Rejected(format!(
                "panorama metadata status: {other}"
            ))),
        }
    }

    async fn render_view(&self, view: &ViewSpec) -> Result<Vec<u8>, ProviderError> {
        let api_key = self.api_key()?;
        let url = self.endpoint("/maps/api/streetview")?;
        let response = self
            .http
            .get(url)
            .query(&[
                ("size", format!("{}x{}", view.width, view.height)),
                (
                    "location",
                    format!("{},{}", view.location.lat, view.location.lng),
                ),
                ("heading", view.heading.to_string()),
                ("pitch", view.pitch.to_string()),
                ("fov", view.fov.to_string()),
                ("source", "outdoor".to_string()),
                ("key", api_key.to_string()),
            ])
            .send()
            .await?;
        if !response.status().is_success() {
            let status = response.status();
            return Err(ProviderError::Rejected(format!(
                "view rendering request returned {status}"
            )));
        }
        Ok(response.bytes().await?.to_vec())
    }
}
