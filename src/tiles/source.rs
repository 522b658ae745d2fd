use crate::core::geo::TileCoord;

/// Trait representing anything that can produce tile URLs for a given coordinate.
pub trait TileSource: Send + Sync {
    /// Build a URL for the requested `coord`.
    fn url(&self, coord: TileCoord) -> String;
}

/// Tile source driven by a Leaflet-style URL template with `{s}`, `{z}`,
/// `{x}`, `{y}` placeholders. Subdomain rotation spreads requests across
/// the server's `{s}` aliases.
#[derive(Debug, Clone)]
pub struct TemplateSource {
    template: String,
    subdomains: Vec<String>,
}

impl TemplateSource {
    pub fn new(template: impl Into<String>, subdomains: Vec<String>) -> Self {
        Self {
            template: template.into(),
            subdomains,
        }
    }

    fn subdomain_for(&self, coord: TileCoord) -> &str {
        if self.subdomains.is_empty() {
            return "";
        }
        let idx = ((coord.x + coord.y) % self.subdomains.len() as u32) as usize;
        &self.subdomains[idx]
    }
}

impl TileSource for TemplateSource {
    fn url(&self, coord: TileCoord) -> String {
        self.template
            .replace("{s}", self.subdomain_for(coord))
            .replace("{z}", &coord.z.to_string())
            .replace("{x}", &coord.x.to_string())
            .replace("{y}", &coord.y.to_string())
    }
}
