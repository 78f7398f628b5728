/// Grid thumbnail generation and caching
///
/// The gallery grid shows every vision at card size; decoding the full
/// artwork images for that is wasted work on every start. This module
/// resizes each artwork once and caches the result on disk, keyed by
/// vision id. Cached files are reused on later runs.

use std::fs;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;

/// Size of generated thumbnails (longest edge)
const THUMBNAIL_SIZE: u32 = 256;

/// Get the thumbnail cache directory
/// Returns ~/.cache/genesis-chamber/thumbnails on Linux
pub fn thumbnail_cache_dir() -> PathBuf {
    let mut path = dirs_next::cache_dir()
        .or_else(dirs_next::home_dir)
        .expect("Could not determine cache directory");

    path.push("genesis-chamber");
    path.push("thumbnails");

    // Ensure the directory exists
    fs::create_dir_all(&path).expect("Failed to create thumbnail cache directory");

    path
}

/// Expected cache path for a vision id (doesn't generate, just returns the path)
pub fn thumbnail_path(vision_id: &str) -> PathBuf {
    thumbnail_cache_dir().join(format!("{}.jpg", vision_id))
}

/// Result of a thumbnail batch run
#[derive(Debug, Clone)]
pub struct ThumbnailBatch {
    /// Vision id -> cached thumbnail path, for every vision that has one
    pub thumbnails: Vec<(String, PathBuf)>,
    /// How many were freshly generated this run
    pub generated: usize,
    /// How many were already cached and reused
    pub reused: usize,
}

/// Prepare thumbnails for a batch of artworks.
///
/// Runs in a blocking task because image decode/resize is CPU-bound.
/// Unreadable or missing artwork files are skipped with a console warning;
/// the grid falls back to the full-size image for those.
pub async fn prepare_thumbnails(artworks: Vec<(String, PathBuf)>) -> ThumbnailBatch {
    tokio::task::spawn_blocking(move || prepare_thumbnails_blocking(artworks))
        .await
        .unwrap_or_else(|e| {
            eprintln!("⚠️  Thumbnail task failed: {}", e);
            ThumbnailBatch {
                thumbnails: Vec::new(),
                generated: 0,
                reused: 0,
            }
        })
}

/// Blocking implementation of the thumbnail batch
fn prepare_thumbnails_blocking(artworks: Vec<(String, PathBuf)>) -> ThumbnailBatch {
    let cache_dir = thumbnail_cache_dir();

    let mut thumbnails = Vec::new();
    let mut generated = 0;
    let mut reused = 0;

    for (vision_id, source) in artworks {
        let target = cache_dir.join(format!("{}.jpg", vision_id));

        if target.exists() {
            reused += 1;
            thumbnails.push((vision_id, target));
            continue;
        }

        match generate_thumbnail(&source, &target) {
            Some(path) => {
                generated += 1;
                thumbnails.push((vision_id, path));
            }
            None => {
                eprintln!(
                    "⚠️  Could not generate thumbnail for {} ({})",
                    vision_id,
                    source.display()
                );
            }
        }
    }

    println!(
        "📸 Thumbnails ready: {} generated, {} reused",
        generated, reused
    );

    ThumbnailBatch {
        thumbnails,
        generated,
        reused,
    }
}

/// Resize one artwork to thumbnail size and save it to the cache
/// Returns the path to the saved thumbnail, or None if generation failed
fn generate_thumbnail(source: &Path, target: &Path) -> Option<PathBuf> {
    let img = image::open(source).ok()?;

    // Flatten to RGB; JPEG output rejects alpha channels
    let thumbnail = img
        .resize(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Lanczos3)
        .into_rgb8();

    thumbnail.save(target).ok()?;

    Some(target.to_path_buf())
}
