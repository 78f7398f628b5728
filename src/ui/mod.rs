/// UI building blocks for the chamber page
///
/// - Vision card grid (grid.rs)
/// - Detail overlay (detail.rs)
/// - Visions-per-year timeline strip (timeline.rs)

pub mod detail;
pub mod grid;
pub mod timeline;
