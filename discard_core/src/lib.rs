//! Tile model and presentation for the discard-choice drills.
//!
//! A token such as `"5p"` or `"北"` is classified into a [`TileId`], resolved
//! to tile art through the [`AssetCatalog`], and rendered as a [`TileView`]
//! whose decoration follows from the quiz progress in [`QuizSession`].

mod asset;
mod problem;
mod quiz;
mod render;
mod tile;

pub use asset::{resolve, AssetCatalog, AssetKey, CatalogError, VisualResolution, DEFAULT_BASE_URL};
pub use problem::{Problem, ProblemError, ProblemSet, TileField, TileIssue};
pub use quiz::QuizSession;
pub use render::{
    compute_transform, escape, render, Activation, Element, OutlineTone, Overlay, Rotation,
    TileProps, TileState, TileView, DEFAULT_WIDTH_PX, TILE_CSS,
};
pub use tile::{Honor, Rank, Suit, TileId};
