//! Client for the MTV Networks music-metadata API.
//!
//! Every operation is one GET against `{base_url}/{path}` whose Atom feed is
//! mapped into [`Artist`] or [`Video`] records.

pub mod artist;
pub mod config;
mod error;
pub mod feed;
pub mod options;
mod resource;
pub mod thumbnail;
pub mod video;

pub use artist::{Artist, ArtistRef};
pub use config::MtvConfig;
pub use error::{MtvError, Result};
pub use options::{FindOptions, SearchOptions};
pub use thumbnail::Thumbnail;
pub use video::{Video, VideoRef};

use reqwest::Url;
use tracing::{debug, trace};

#[derive(Debug, Clone)]
pub struct Mtv {
    client: reqwest::Client,
    config: MtvConfig,
}

impl Default for Mtv {
    fn default() -> Self {
        Self::new()
    }
}

impl Mtv {
    pub fn new() -> Self {
        Self::with_config(MtvConfig::default())
    }

    pub fn with_config(config: MtvConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &MtvConfig {
        &self.config
    }

    pub fn base_url(&self) -> String {
        self.config.base_url()
    }

    /// Appends `segments` to the base url, each one percent-encoded, then sets
    /// `query` as is. A trailing `""` segment gives the path a trailing slash.
    pub fn url(&self, segments: &[&str], query: Option<&str>) -> Result<Url> {
        let base_url = self.base_url();
        let mut url = Url::parse(&base_url)?;
        url.path_segments_mut()
            .map_err(|_| MtvError::InvalidBaseUrl(base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        url.set_query(query);
        Ok(url)
    }

    /// GETs the url built from `segments` and `query`, returning the body.
    pub(crate) async fn request(&self, segments: &[&str], query: Option<&str>) -> Result<String> {
        let url = self.url(segments, query)?;
        debug!(target: "mtv", "requesting url {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(MtvError::UnsuccessfulStatus {
                status: status.as_u16(),
                body: response.text().await?,
            });
        }

        let body = response.text().await?;
        trace!(target: "mtv", "response body: {}", body);
        Ok(body)
    }
}
