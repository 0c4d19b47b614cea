//! Folio site generator.
//!
//! Loads configuration, reads the listing entries, and writes every
//! listing page as a JSON document under the output directory.

use tracing_subscriber::{EnvFilter, fmt};

use folio_core::config::SiteConfig;
use folio_core::error::AppError;
use folio_generator::{DocumentWriter, JsonRenderer, ListingGenerator, MemorySource};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Generation failed: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<SiteConfig, AppError> {
    let config_path = std::env::var("FOLIO_CONFIG").unwrap_or_else(|_| "folio.toml".to_string());

    SiteConfig::load(&config_path)
        .map_err(|e| AppError::configuration(format!("Config load error: {}", e)))
}

/// Initialize tracing/logging
fn init_logging(config: &SiteConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Generate and write every listing page
async fn run(config: SiteConfig) -> Result<(), AppError> {
    tracing::info!("Starting Folio v{}", env!("CARGO_PKG_VERSION"));

    let settings = config.listing.settings()?;
    let source = MemorySource::from_json_file(&config.listing.items_file).await?;
    let generator = ListingGenerator::new(source, JsonRenderer, settings);

    let pages = generator.generate().await?;
    DocumentWriter::new(&config.listing.output_dir)
        .write_all(&pages)
        .await?;

    Ok(())
}
