//! Configuration types.

use std::path::PathBuf;

/// Site configuration, built from environment variables with defaults.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Path to the JSON store file.
    pub data_path: PathBuf,
    /// Path the rendered page is written to.
    pub output_path: PathBuf,
    /// How many quotes a daily selection contains.
    pub quote_count: usize,
    /// Port the local admin server binds on (loopback only).
    pub port: u16,
    /// NASA API key for the APOD fetch.
    pub nasa_api_key: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("./data/entries.json"),
            output_path: PathBuf::from("./docs/index.html"),
            quote_count: 3,
            port: 5001,
            nasa_api_key: "DEMO_KEY".to_string(),
        }
    }
}

impl SiteConfig {
    /// Build config from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let data_path = std::env::var("DAILY_MUSE_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_path);

        let output_path = std::env::var("DAILY_MUSE_OUTPUT_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.output_path);

        let quote_count: usize = std::env::var("DAILY_MUSE_QUOTE_COUNT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.quote_count);

        let port: u16 = std::env::var("DAILY_MUSE_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.port);

        let nasa_api_key =
            std::env::var("NASA_API_KEY").unwrap_or_else(|_| defaults.nasa_api_key.clone());

        Self {
            data_path,
            output_path,
            quote_count,
            port,
            nasa_api_key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = SiteConfig::default();
        assert_eq!(config.quote_count, 3);
        assert_eq!(config.port, 5001);
        assert_eq!(config.data_path, PathBuf::from("./data/entries.json"));
        assert_eq!(config.nasa_api_key, "DEMO_KEY");
    }
}
