//! Site configuration schemas.
//!
//! Configuration is read from an optional TOML file via the `config`
//! crate and overlaid with `FOLIO_`-prefixed environment variables, using
//! `__` between nested keys (e.g. `FOLIO_LISTING__PAGE_SIZE=20`).

pub mod listing;
pub mod logging;

use serde::{Deserialize, Serialize};

use self::listing::ListingConfig;
use self::logging::LoggingConfig;

use crate::error::AppError;

/// Root site configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Listing generation settings.
    #[serde(default)]
    pub listing: ListingConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SiteConfig {
    /// Load configuration from `path` (extension optional) and the
    /// environment. A missing file falls back to defaults.
    pub fn load(path: &str) -> Result<Self, AppError> {
        tracing::debug!("Loading configuration from '{}'", path);

        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("FOLIO")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = SiteConfig::load("does/not/exist/folio").expect("defaults");
        assert_eq!(config.listing.base_slug, "/blog");
        assert_eq!(config.listing.page_size, 10);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_toml_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("folio.toml");
        std::fs::write(
            &path,
            "[listing]\nbase_slug = \"/news\"\nbase_title = \"News\"\npage_size = 5\n\n[logging]\nformat = \"json\"\n",
        )
        .expect("write config");

        let config = SiteConfig::load(path.to_str().expect("utf-8 path")).expect("loads");
        assert_eq!(config.listing.base_slug, "/news");
        assert_eq!(config.listing.page_size, 5);
        assert_eq!(config.listing.output_dir, "public");
        assert_eq!(config.logging.format, "json");

        let settings = config.listing.settings().expect("valid");
        assert_eq!(settings.base_title(), "News");
    }

    #[test]
    fn test_malformed_file_reports_configuration_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[listing]\npage_size = \"ten\"\n").expect("write config");

        let err = SiteConfig::load(path.to_str().expect("utf-8 path")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
        assert!(err.message.starts_with("Configuration error:"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let listing = ListingConfig {
            page_size: 0,
            ..ListingConfig::default()
        };
        assert_eq!(listing.settings().unwrap_err().kind, ErrorKind::Validation);
    }
}
