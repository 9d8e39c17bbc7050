//! Border classification for active regions (water, islands).
//!
//! A cell is "active" when its value is [`WALL`]. Off-grid positions and inactive cells
//! are both "other". Classification is first-match-wins:
//!
//! 1. outside corner: two adjacent cardinals are other (TL, TR, BL, BR order)
//! 2. edge: exactly one cardinal is other (top, bottom, left, right order)
//! 3. inside corner: all cardinals active, a diagonal is other (TL, TR, BL, BR order)
//! 4. interior
//!
//! The order matters. A cell sitting on an outside corner that also has an "other"
//! diagonal always resolves as the outside corner.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{TileAssignment, TileGrid};
use crate::grid::{ValueGrid, WALL};

/// Tile category of an active cell relative to its neighbours.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BorderTile {
    OuterTopLeft,
    OuterTopRight,
    OuterBottomLeft,
    OuterBottomRight,
    EdgeTop,
    EdgeBottom,
    EdgeLeft,
    EdgeRight,
    InnerTopLeft,
    InnerTopRight,
    InnerBottomLeft,
    InnerBottomRight,
    Interior,
}

impl BorderTile {
    pub fn is_outer_corner(self) -> bool {
        matches!(
            self,
            Self::OuterTopLeft | Self::OuterTopRight | Self::OuterBottomLeft | Self::OuterBottomRight
        )
    }

    pub fn is_edge(self) -> bool {
        matches!(
            self,
            Self::EdgeTop | Self::EdgeBottom | Self::EdgeLeft | Self::EdgeRight
        )
    }

    pub fn is_inner_corner(self) -> bool {
        matches!(
            self,
            Self::InnerTopLeft | Self::InnerTopRight | Self::InnerBottomLeft | Self::InnerBottomRight
        )
    }
}

#[inline]
fn is_active(grid: &ValueGrid, x: i32, y: i32) -> bool {
    grid.value_at(x, y) == Some(WALL)
}

#[inline]
fn is_other(grid: &ValueGrid, x: i32, y: i32) -> bool {
    !is_active(grid, x, y)
}

/// Classify the active cell at `(x, y)`.
///
/// Returns `None` when the cell is off-grid or not active.
pub fn classify_border(grid: &ValueGrid, x: i32, y: i32) -> Option<BorderTile> {
    if !is_active(grid, x, y) {
        return None;
    }

    let top = is_other(grid, x, y - 1);
    let bottom = is_other(grid, x, y + 1);
    let left = is_other(grid, x - 1, y);
    let right = is_other(grid, x + 1, y);

    let outer = [
        (top && left, BorderTile::OuterTopLeft),
        (top && right, BorderTile::OuterTopRight),
        (bottom && left, BorderTile::OuterBottomLeft),
        (bottom && right, BorderTile::OuterBottomRight),
    ];
    if let Some(&(_, tile)) = outer.iter().find(|(hit, _)| *hit) {
        return Some(tile);
    }

    let others = [top, bottom, left, right].iter().filter(|o| **o).count();
    if others == 1 {
        let edge = if top {
            BorderTile::EdgeTop
        } else if bottom {
            BorderTile::EdgeBottom
        } else if left {
            BorderTile::EdgeLeft
        } else {
            BorderTile::EdgeRight
        };
        return Some(edge);
    }

    if others == 0 {
        let inner = [
            (is_other(grid, x - 1, y - 1), BorderTile::InnerTopLeft),
            (is_other(grid, x + 1, y - 1), BorderTile::InnerTopRight),
            (is_other(grid, x - 1, y + 1), BorderTile::InnerBottomLeft),
            (is_other(grid, x + 1, y + 1), BorderTile::InnerBottomRight),
        ];
        if let Some(&(_, tile)) = inner.iter().find(|(hit, _)| *hit) {
            return Some(tile);
        }
    }

    Some(BorderTile::Interior)
}

/// Whether any cardinal neighbour of `(x, y)` is off-grid or inactive.
///
/// Diagonals are ignored. Off-grid `(x, y)` yields `false`.
pub fn is_island_border_cell(grid: &ValueGrid, x: i32, y: i32) -> bool {
    if !grid.in_bounds(x, y) {
        return false;
    }
    [(0, -1), (0, 1), (-1, 0), (1, 0)]
        .iter()
        .any(|(dx, dy)| is_other(grid, x + dx, y + dy))
}

/// Tile ids for each [`BorderTile`] on the overworld sheet.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WaterTileset {
    pub outer_top_left: u32,
    pub outer_top_right: u32,
    pub outer_bottom_left: u32,
    pub outer_bottom_right: u32,
    pub edge_top: u32,
    pub edge_bottom: u32,
    pub edge_left: u32,
    pub edge_right: u32,
    pub inner_top_left: u32,
    pub inner_top_right: u32,
    pub inner_bottom_left: u32,
    pub inner_bottom_right: u32,
    pub interior: u32,
}

impl Default for WaterTileset {
    fn default() -> Self {
        // 3x3 shore block at columns 8..=10 plus the concave corners at 11..=12.
        Self {
            outer_top_left: 9,
            edge_top: 10,
            outer_top_right: 11,
            edge_left: 33,
            interior: 34,
            edge_right: 35,
            outer_bottom_left: 57,
            edge_bottom: 58,
            outer_bottom_right: 59,
            inner_top_left: 12,
            inner_top_right: 13,
            inner_bottom_left: 36,
            inner_bottom_right: 37,
        }
    }
}

impl WaterTileset {
    pub fn tile_for(&self, tile: BorderTile) -> u32 {
        match tile {
            BorderTile::OuterTopLeft => self.outer_top_left,
            BorderTile::OuterTopRight => self.outer_top_right,
            BorderTile::OuterBottomLeft => self.outer_bottom_left,
            BorderTile::OuterBottomRight => self.outer_bottom_right,
            BorderTile::EdgeTop => self.edge_top,
            BorderTile::EdgeBottom => self.edge_bottom,
            BorderTile::EdgeLeft => self.edge_left,
            BorderTile::EdgeRight => self.edge_right,
            BorderTile::InnerTopLeft => self.inner_top_left,
            BorderTile::InnerTopRight => self.inner_top_right,
            BorderTile::InnerBottomLeft => self.inner_bottom_left,
            BorderTile::InnerBottomRight => self.inner_bottom_right,
            BorderTile::Interior => self.interior,
        }
    }
}

/// Build the water layer: every active cell gets its border tile, everything else none.
pub fn generate_water_tile_map(grid: &ValueGrid, tileset: &WaterTileset) -> TileGrid {
    let size = grid.size();
    let tiles = TileGrid::from_fn(size, |x, y| {
        classify_border(grid, x, y).and_then(|tile| TileAssignment::new(tileset.tile_for(tile)))
    });
    debug!(
        "Built {}x{} water tile map; {} water tiles.",
        size,
        size,
        tiles.cells().iter().filter(|t| t.is_some()).count()
    );
    tiles
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[u8]]) -> ValueGrid {
        ValueGrid::from_rows(rows).expect("square 0/1 rows")
    }

    #[test]
    fn lone_cell_is_never_interior() {
        let g = grid(&[&[0, 0, 0], &[0, 1, 0], &[0, 0, 0]]);
        let tile = classify_border(&g, 1, 1).unwrap();
        assert!(tile.is_outer_corner() || tile.is_edge());
        assert_eq!(tile, BorderTile::OuterTopLeft);
    }

    #[test]
    fn three_by_three_island() {
        let g = grid(&[
            &[0, 0, 0, 0, 0],
            &[0, 1, 1, 1, 0],
            &[0, 1, 1, 1, 0],
            &[0, 1, 1, 1, 0],
            &[0, 0, 0, 0, 0],
        ]);
        assert_eq!(classify_border(&g, 1, 1), Some(BorderTile::OuterTopLeft));
        assert_eq!(classify_border(&g, 2, 1), Some(BorderTile::EdgeTop));
        assert_eq!(classify_border(&g, 3, 1), Some(BorderTile::OuterTopRight));
        assert_eq!(classify_border(&g, 1, 2), Some(BorderTile::EdgeLeft));
        assert_eq!(classify_border(&g, 2, 2), Some(BorderTile::Interior));
        assert_eq!(classify_border(&g, 3, 2), Some(BorderTile::EdgeRight));
        assert_eq!(classify_border(&g, 1, 3), Some(BorderTile::OuterBottomLeft));
        assert_eq!(classify_border(&g, 2, 3), Some(BorderTile::EdgeBottom));
        assert_eq!(classify_border(&g, 3, 3), Some(BorderTile::OuterBottomRight));
    }

    #[test]
    fn off_grid_counts_as_other() {
        let g = grid(&[&[1, 1, 1], &[1, 1, 1], &[1, 1, 1]]);
        assert_eq!(classify_border(&g, 0, 0), Some(BorderTile::OuterTopLeft));
        assert_eq!(classify_border(&g, 1, 0), Some(BorderTile::EdgeTop));
        assert_eq!(classify_border(&g, 2, 2), Some(BorderTile::OuterBottomRight));
        assert_eq!(classify_border(&g, 1, 1), Some(BorderTile::Interior));
    }

    #[test]
    fn inside_corners_follow_diagonal_order() {
        let g = grid(&[&[0, 1, 0], &[1, 1, 1], &[0, 1, 1]]);
        // TL and TR diagonals are both other; TL is checked first.
        assert_eq!(classify_border(&g, 1, 1), Some(BorderTile::InnerTopLeft));

        let g = grid(&[&[1, 1, 1], &[1, 1, 1], &[1, 1, 0]]);
        assert_eq!(classify_border(&g, 1, 1), Some(BorderTile::InnerBottomRight));

        let g = grid(&[&[1, 1, 1], &[1, 1, 1], &[0, 1, 0]]);
        assert_eq!(classify_border(&g, 1, 1), Some(BorderTile::InnerBottomLeft));
    }

    #[test]
    fn outside_corner_beats_other_diagonal() {
        let g = grid(&[&[0, 0, 0], &[0, 1, 1], &[0, 1, 0]]);
        assert_eq!(classify_border(&g, 1, 1), Some(BorderTile::OuterTopLeft));
    }

    #[test]
    fn edge_beats_inside_corner() {
        let g = grid(&[&[0, 0, 0], &[1, 1, 1], &[0, 1, 0]]);
        assert_eq!(classify_border(&g, 1, 1), Some(BorderTile::EdgeTop));
    }

    #[test]
    fn outer_corner_order_prefers_top_left() {
        // Only the bottom neighbour is active: top&left matches before top&right.
        let g = grid(&[&[0, 0, 0], &[0, 1, 0], &[0, 1, 0]]);
        assert_eq!(classify_border(&g, 1, 1), Some(BorderTile::OuterTopLeft));
        // Only top and left are active: bottom&right is the only outer pair.
        let g = grid(&[&[0, 1, 0], &[1, 1, 0], &[0, 0, 0]]);
        assert_eq!(classify_border(&g, 1, 1), Some(BorderTile::OuterBottomRight));
    }

    #[test]
    fn opposite_sides_fall_through_to_interior() {
        let g = grid(&[&[0, 0, 0], &[1, 1, 1], &[0, 0, 0]]);
        assert_eq!(classify_border(&g, 1, 1), Some(BorderTile::Interior));
    }

    #[test]
    fn inactive_or_off_grid_has_no_category() {
        let g = grid(&[&[0, 1], &[1, 1]]);
        assert_eq!(classify_border(&g, 0, 0), None);
        assert_eq!(classify_border(&g, 2, 0), None);
        assert_eq!(classify_border(&g, -1, -1), None);
    }

    #[test]
    fn island_border_uses_cardinals_only() {
        let g = grid(&[
            &[0, 0, 0, 0, 0],
            &[0, 0, 1, 0, 0],
            &[0, 1, 1, 1, 0],
            &[0, 0, 1, 0, 0],
            &[0, 0, 0, 0, 0],
        ]);
        assert!(!is_island_border_cell(&g, 2, 2));
        assert!(is_island_border_cell(&g, 2, 1));
        assert!(is_island_border_cell(&g, 1, 2));
    }

    #[test]
    fn island_border_at_map_edges() {
        let g = grid(&[&[0, 1, 0], &[0, 1, 0], &[0, 1, 0]]);
        assert!(is_island_border_cell(&g, 1, 0));
        assert!(is_island_border_cell(&g, 1, 2));
        assert!(is_island_border_cell(&grid(&[&[1]]), 0, 0));
        assert!(!is_island_border_cell(&g, 5, 5));

        let solid = grid(&[&[1, 1], &[1, 1]]);
        for (p, _) in solid.iter() {
            assert!(is_island_border_cell(&solid, p.x, p.y));
        }
    }

    #[test]
    fn water_tile_map_marks_only_active_cells() {
        let g = grid(&[&[1, 1, 0], &[1, 1, 0], &[0, 0, 0]]);
        let tileset = WaterTileset::default();
        let tiles = generate_water_tile_map(&g, &tileset);
        assert_eq!(
            tiles.get(0, 0).copied().flatten().map(|t| t.tile_id),
            Some(tileset.outer_top_left)
        );
        assert_eq!(
            tiles.get(1, 1).copied().flatten().map(|t| t.tile_id),
            Some(tileset.outer_bottom_right)
        );
        assert_eq!(tiles.get(2, 0), Some(&None));
        assert_eq!(tiles.cells().iter().filter(|t| t.is_some()).count(), 4);
    }

    #[test]
    fn tileset_ids_are_distinct() {
        let set = WaterTileset::default();
        let all = [
            BorderTile::OuterTopLeft,
            BorderTile::OuterTopRight,
            BorderTile::OuterBottomLeft,
            BorderTile::OuterBottomRight,
            BorderTile::EdgeTop,
            BorderTile::EdgeBottom,
            BorderTile::EdgeLeft,
            BorderTile::EdgeRight,
            BorderTile::InnerTopLeft,
            BorderTile::InnerTopRight,
            BorderTile::InnerBottomLeft,
            BorderTile::InnerBottomRight,
            BorderTile::Interior,
        ];
        let mut ids: Vec<u32> = all.iter().map(|t| set.tile_for(*t)).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), all.len());
    }
}
