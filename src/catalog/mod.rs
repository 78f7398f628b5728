/// Catalog asset IO module
///
/// This module handles:
/// - Loading and parsing the artwork catalog (loader.rs)
/// - Resolving artwork image paths under assets/
/// - Generating and caching grid thumbnails (thumbnail.rs)

pub mod loader;
pub mod thumbnail;
