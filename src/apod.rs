//! NASA Astronomy Picture of the Day client.
//!
//! The APOD section is best-effort enrichment: any failure degrades to "no
//! section" with a warning, never a failed page build.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ApodError;

const APOD_URL: &str = "https://api.nasa.gov/planetary/apod";
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// One day's astronomy picture, as returned by the NASA API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Apod {
    pub url: Option<String>,
    pub hdurl: Option<String>,
    pub title: Option<String>,
    pub explanation: Option<String>,
    pub media_type: Option<String>,
    pub copyright: Option<String>,
}

impl Apod {
    /// The best available image URL (HD first).
    pub fn best_image_url(&self) -> Option<&str> {
        self.hdurl.as_deref().or(self.url.as_deref())
    }

    pub fn is_video(&self) -> bool {
        self.media_type.as_deref() == Some("video")
    }
}

/// Client for the APOD endpoint.
pub struct ApodClient {
    http: reqwest::Client,
    api_key: String,
}

impl ApodClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            http,
            api_key: api_key.into(),
        }
    }

    /// Fetch today's APOD.
    pub async fn fetch(&self) -> Result<Apod, ApodError> {
        let response = self
            .http
            .get(APOD_URL)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?;

        let apod: Apod = response.json().await?;
        if apod.url.is_none() {
            return Err(ApodError::InvalidResponse(
                "response carries no media URL".to_string(),
            ));
        }
        Ok(apod)
    }

    /// Fetch today's APOD, degrading to `None` on any failure.
    pub async fn fetch_or_none(&self) -> Option<Apod> {
        match self.fetch().await {
            Ok(apod) => Some(apod),
            Err(e) => {
                warn!(error = %e, "Could not fetch APOD, page will render without it");
                None
            }
        }
    }
}
