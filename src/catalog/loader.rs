/// Catalog loader
///
/// Reads and parses the artwork catalog from its fixed location under
/// assets/. The catalog is loaded exactly once per session, when the
/// application starts; a failure here is terminal for the session and is
/// shown as a page-level error, never retried.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::state::data::Catalog;

/// Fixed location of the catalog document
pub const CATALOG_PATH: &str = "assets/artworks.json";

/// Fixed directory the catalog's image filenames resolve against
pub const ARTWORK_DIR: &str = "assets/artworks";

/// Why the catalog could not be loaded
///
/// Carries pre-rendered message strings so the error can travel inside the
/// UI message type (iced messages must be Clone).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The file could not be read at all
    #[error("failed to read catalog at {path}: {reason}")]
    Read { path: String, reason: String },
    /// The file was read but is not a valid catalog document
    #[error("failed to parse catalog: {reason}")]
    Parse { reason: String },
}

/// Load the catalog document from disk.
///
/// # Arguments
/// * `path` - Path to the catalog JSON file
///
/// # Returns
/// * `Ok(Catalog)` - The parsed catalog
/// * `Err(CatalogError)` - Read or parse failure with a readable message
pub async fn load_catalog(path: PathBuf) -> Result<Catalog, CatalogError> {
    let source = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| CatalogError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    let catalog = Catalog::from_json(&source).map_err(|e| CatalogError::Parse {
        reason: e.to_string(),
    })?;

    println!(
        "📚 Loaded catalog: {} visions across {} epochs",
        catalog.vision_count(),
        catalog.periods.len()
    );

    Ok(catalog)
}

/// Resolve a catalog image filename against the fixed artwork directory.
///
/// Only builds the reference; whether the file exists is the renderer's
/// problem, not ours.
pub fn artwork_image_path(filename: &str) -> PathBuf {
    Path::new(ARTWORK_DIR).join(filename)
}
