//! Tree crown stitching.
//!
//! Trees live on the tree layer's floor cells (value 0). Crowns are 2x2 tiles anchored on
//! a checkerboard lattice: even rows sample even columns, odd rows odd columns. Each
//! sample looks at the 2x2 block ending at it and stamps a crown when the block is dense
//! enough. Neighbouring crowns on the lattice overlap diagonally by one cell, and the
//! overlapping slot switches to a connector tile so adjacent crowns read as one canopy.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{resolve_sprites, TileGrid, NO_TILE};
use crate::config::TREE_DENSITY_CUTOFF;
use crate::grid::{Grid, ValueGrid, WALL};

/// Tile ids that make up a tree crown.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeTileset {
    pub top_left: u32,
    pub top_right: u32,
    pub bottom_left: u32,
    pub bottom_right: u32,
    /// Top-left slot drawn over an earlier crown's bottom-right.
    pub connect_left: u32,
    /// Top-right slot drawn over an earlier crown's bottom-left.
    pub connect_right: u32,
}

impl Default for TreeTileset {
    fn default() -> Self {
        Self {
            top_left: 125,
            top_right: 126,
            bottom_left: 149,
            bottom_right: 150,
            connect_left: 127,
            connect_right: 128,
        }
    }
}

/// Open cells in the 2x2 block whose bottom-right corner is `(x, y)`.
///
/// Off-grid positions always count.
fn density_sum(grid: &ValueGrid, x: i32, y: i32) -> u8 {
    [(x - 1, y - 1), (x, y - 1), (x - 1, y), (x, y)]
        .iter()
        .filter(|&&(cx, cy)| grid.value_at(cx, cy) != Some(WALL))
        .count() as u8
}

fn write_slot(ids: &mut Grid<u32>, x: i32, y: i32, plain: u32, connector: Option<(u32, u32)>) {
    let Some(slot) = ids.get_mut(x, y) else {
        return;
    };
    *slot = match (*slot, connector) {
        (NO_TILE, _) => plain,
        (existing, Some((trigger, joined))) if existing == trigger => joined,
        (existing, _) => existing,
    };
}

fn stamp_crown(ids: &mut Grid<u32>, x: i32, y: i32, tiles: &TreeTileset) {
    write_slot(
        ids,
        x - 1,
        y - 1,
        tiles.top_left,
        Some((tiles.bottom_right, tiles.connect_left)),
    );
    write_slot(
        ids,
        x,
        y - 1,
        tiles.top_right,
        Some((tiles.bottom_left, tiles.connect_right)),
    );
    write_slot(ids, x - 1, y, tiles.bottom_left, None);
    write_slot(ids, x, y, tiles.bottom_right, None);
}

/// Tree tile ids per cell ([`NO_TILE`] where no crown covers the cell).
pub fn stitch_tree_ids(grid: &ValueGrid, tiles: &TreeTileset) -> Grid<u32> {
    let size = grid.size() as i32;
    let mut ids = Grid::new(grid.size());
    let mut crowns = 0usize;

    for y in 0..size {
        for x in ((y % 2)..size).step_by(2) {
            if density_sum(grid, x, y) > TREE_DENSITY_CUTOFF {
                stamp_crown(&mut ids, x, y, tiles);
                crowns += 1;
            }
        }
    }

    debug!("Stitched {} tree crowns on {}x{} grid.", crowns, size, size);
    ids
}

/// Build the tree layer with sprite positions resolved.
pub fn stitch_tree_clusters(grid: &ValueGrid, tiles: &TreeTileset) -> TileGrid {
    resolve_sprites(&stitch_tree_ids(grid, tiles))
}
