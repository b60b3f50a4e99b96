use std::path::PathBuf;

use art_catalog::catalog::config::CatalogConfig;

/// Directory holding the fixture `artists.csv` and `paintings.csv`.
pub fn fixture_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Configuration reading the fixture documents from disk.
pub fn fixture_config() -> CatalogConfig {
    CatalogConfig {
        root: Some(fixture_root()),
        ..CatalogConfig::default()
    }
}
