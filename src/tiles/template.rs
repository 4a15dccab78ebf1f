use url::Url;

use super::{TileError, TileKey};

const SUBDOMAINS: [&str; 3] = ["a", "b", "c"];

/// A `{z}/{x}/{y}` tile URL template with optional `{s}` subdomain rotation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileUrlTemplate {
    template: String,
    namespace: String,
}

impl TileUrlTemplate {
    pub fn new(template: &str) -> Result<Self, TileError> {
        let template = template.trim().to_string();
        for placeholder in ["{z}", "{x}", "{y}"] {
            if !template.contains(placeholder) {
                return Err(TileError::MissingPlaceholder {
                    template,
                    placeholder,
                });
            }
        }
        let parsed = Self {
            namespace: namespace_for(&template),
            template,
        };
        Url::parse(&parsed.render(TileKey::new(0, 0, 0))).map_err(|source| {
            TileError::InvalidUrl {
                template: parsed.template.clone(),
                source,
            }
        })?;
        Ok(parsed)
    }

    pub fn as_str(&self) -> &str {
        &self.template
    }

    /// Short stable identifier for this template, used to keep cached tiles
    /// of different basemaps apart.
    pub fn cache_namespace(&self) -> &str {
        &self.namespace
    }

    pub fn render(&self, key: TileKey) -> String {
        let subdomain = SUBDOMAINS[((key.x as usize) + (key.y as usize)) % SUBDOMAINS.len()];
        self.template
            .replace("{s}", subdomain)
            .replace("{z}", &key.z.to_string())
            .replace("{x}", &key.x.to_string())
            .replace("{y}", &key.y.to_string())
    }
}

fn namespace_for(template: &str) -> String {
    let hash = blake3::hash(template.as_bytes()).to_hex();
    hash.as_str()[..16].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const OSM: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

    #[test]
    fn renders_coordinates_and_rotates_subdomains() {
        let template = TileUrlTemplate::new(OSM).unwrap();
        assert_eq!(
            template.render(TileKey::new(16, 15229, 26909)),
            "https://a.tile.openstreetmap.org/16/15229/26909.png"
        );
        assert_eq!(
            template.render(TileKey::new(16, 15230, 26909)),
            "https://b.tile.openstreetmap.org/16/15230/26909.png"
        );
        assert_eq!(
            template.render(TileKey::new(16, 15231, 26909)),
            "https://c.tile.openstreetmap.org/16/15231/26909.png"
        );
    }

    #[test]
    fn templates_without_subdomains_are_accepted() {
        let template = TileUrlTemplate::new("http://localhost:8080/{z}/{x}/{y}.png").unwrap();
        assert_eq!(
            template.render(TileKey::new(1, 0, 1)),
            "http://localhost:8080/1/0/1.png"
        );
    }

    #[test]
    fn missing_placeholders_are_rejected() {
        let err = TileUrlTemplate::new("https://tiles.example/{z}/{x}.png").unwrap_err();
        assert!(matches!(
            err,
            TileError::MissingPlaceholder {
                placeholder: "{y}",
                ..
            }
        ));
    }

    #[test]
    fn relative_templates_are_rejected() {
        let err = TileUrlTemplate::new("/tiles/{z}/{x}/{y}.png").unwrap_err();
        assert!(matches!(err, TileError::InvalidUrl { .. }));
    }

    #[test]
    fn namespaces_differ_per_template() {
        let normal = TileUrlTemplate::new(OSM).unwrap();
        let dark =
            TileUrlTemplate::new("https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}.png")
                .unwrap();
        assert_eq!(normal.cache_namespace().len(), 16);
        assert_ne!(normal.cache_namespace(), dark.cache_namespace());
        assert_eq!(
            normal.cache_namespace(),
            TileUrlTemplate::new(OSM).unwrap().cache_namespace()
        );
    }
}
