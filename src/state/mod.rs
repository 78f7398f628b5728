/// State management module
///
/// This module handles all application state, including:
/// - Catalog data structures shared between loader and UI (data.rs)
/// - Genesis Chamber vocabulary tables (vocabulary.rs)
/// - The flattened, year-ordered gallery view model (gallery.rs)

pub mod data;
pub mod gallery;
pub mod vocabulary;
