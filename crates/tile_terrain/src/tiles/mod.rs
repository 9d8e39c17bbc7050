//! Tile assignment layers derived from value grids.
//!
//! Tile maps are read-only views built from a [`crate::grid::ValueGrid`]; building one
//! never changes the source grid.
//! - [`border`]: edge, corner, and interior variants for water and island regions.
//! - [`tree`]: multi-cell tree crowns stitched on a checkerboard lattice.
//! - [`ground`]: weighted random ground decoration.
use glam::UVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::{TILES_PER_ROW, TILE_SPRITE_SIZE};
use crate::grid::Grid;

pub mod border;
pub mod ground;
pub mod tree;

pub use border::{
    classify_border, generate_water_tile_map, is_island_border_cell, BorderTile, WaterTileset,
};
pub use ground::{generate_ground_tile_map, GROUND_TILES};
pub use tree::{stitch_tree_clusters, stitch_tree_ids, TreeTileset};

/// Tile id reserved for "no tile".
pub const NO_TILE: u32 = 0;

/// A tile id together with its top-left pixel on the sprite sheet.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TileAssignment {
    pub tile_id: u32,
    pub sprite_position: UVec2,
}

impl TileAssignment {
    /// Assignment for `tile_id`, or `None` for [`NO_TILE`].
    pub fn new(tile_id: u32) -> Option<Self> {
        sprite_position(tile_id).map(|sprite_position| Self {
            tile_id,
            sprite_position,
        })
    }
}

/// Per-cell tile assignments; `None` means nothing is drawn from this layer.
pub type TileGrid = Grid<Option<TileAssignment>>;

/// Pixel offset of a 1-based tile id on the overworld sheet.
///
/// Ids run left to right, [`TILES_PER_ROW`] per row, each tile [`TILE_SPRITE_SIZE`]
/// pixels square.
pub fn sprite_position(tile_id: u32) -> Option<UVec2> {
    let index = tile_id.checked_sub(1)?;
    let col = index % TILES_PER_ROW;
    let row = index / TILES_PER_ROW;
    Some(UVec2::new(col * TILE_SPRITE_SIZE, row * TILE_SPRITE_SIZE))
}

/// Resolve sprite coordinates for every assigned id in one full-grid pass.
pub fn resolve_sprites(ids: &Grid<u32>) -> TileGrid {
    ids.map(|&id| TileAssignment::new(id))
}
