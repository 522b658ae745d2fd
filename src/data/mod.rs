#[cfg(feature = "tokio-runtime")]
pub mod fetch;
pub mod geojson;
pub mod plates;
pub mod quake;
