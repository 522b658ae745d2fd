//! Async clients for the two public GeoJSON feeds.

use crate::core::config::MapConfig;
use crate::data::{geojson::GeoJson, plates::PlateBoundary, quake::Earthquake};
use crate::Result;
use async_trait::async_trait;
use once_cell::sync::Lazy;

/// Shared async HTTP client with a custom User-Agent so the public feed
/// servers don't reject the request. Building the client once avoids the
/// cost of TLS and connection pool setup for every fetch.
static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .user_agent("quakemap/0.1 (+https://github.com/example/quakemap)")
        .build()
        .expect("failed to build reqwest client")
});

/// Seam for fetching raw feed documents; swapped for a fixture source in tests
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch the raw GeoJSON body at `url`
    async fn fetch_raw(&self, url: &str) -> Result<String>;
}

/// Production feed source backed by the shared reqwest client
#[derive(Debug, Default)]
pub struct HttpFeedSource;

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch_raw(&self, url: &str) -> Result<String> {
        let response = HTTP_CLIENT.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

/// Results of fetching both feeds; the feeds are independent, so one
/// failing does not discard the other
pub struct FeedBundle {
    pub earthquakes: Result<Vec<Earthquake>>,
    pub plates: Result<Vec<PlateBoundary>>,
}

/// Client for the earthquake and plate boundary feeds
pub struct FeedClient {
    source: Box<dyn FeedSource>,
    config: MapConfig,
}

impl FeedClient {
    pub fn new(config: MapConfig) -> Self {
        Self {
            source: Box::new(HttpFeedSource),
            config,
        }
    }

    /// Builds a client over a custom source (used by tests)
    pub fn with_source(source: Box<dyn FeedSource>, config: MapConfig) -> Self {
        Self { source, config }
    }

    async fn fetch_geojson(&self, url: &str) -> Result<GeoJson> {
        log::debug!("fetching feed {}", url);
        let body = self.source.fetch_raw(url).await?;
        GeoJson::from_str(&body)
    }

    /// Fetches and decodes the weekly earthquake summary feed
    pub async fn fetch_earthquakes(&self) -> Result<Vec<Earthquake>> {
        let geojson = self.fetch_geojson(&self.config.earthquake_feed_url).await?;
        let quakes = Earthquake::from_geojson(&geojson);
        log::info!("loaded {} earthquakes", quakes.len());
        Ok(quakes)
    }

    /// Fetches and decodes the tectonic plate boundary feed
    pub async fn fetch_plate_boundaries(&self) -> Result<Vec<PlateBoundary>> {
        let geojson = self.fetch_geojson(&self.config.plate_feed_url).await?;
        let plates = PlateBoundary::from_geojson(&geojson);
        log::info!("loaded {} plate boundary segments", plates.len());
        Ok(plates)
    }

    /// Fetches both feeds concurrently
    pub async fn fetch_all(&self) -> FeedBundle {
        let (earthquakes, plates) =
            futures::join!(self.fetch_earthquakes(), self.fetch_plate_boundaries());
        FeedBundle {
            earthquakes,
            plates,
        }
    }
}
