//! Ground decoration layer.
use rand::RngCore;

use super::{resolve_sprites, TileGrid};
use crate::grid::generate_weighted_grid;

/// Ordered `(tile id, chance)` table for ground tiles.
///
/// Plain grass (id 1) always succeeds, so later entries only override it by winning
/// their own draw. Rarer decorations sit further down the sheet.
pub const GROUND_TILES: [(u32, f64); 20] = [
    (1, 1.0),
    (2, 0.5),
    (3, 0.1),
    (4, 0.1),
    (24 + 1, 0.1),
    (24 + 2, 0.1),
    (24 + 3, 0.1),
    (24 + 4, 0.1),
    (48 + 1, 0.1),
    (48 + 2, 0.1),
    (48 + 3, 0.01),
    (48 + 4, 0.01),
    (72 + 1, 0.01),
    (72 + 2, 0.01),
    (72 + 3, 0.01),
    (72 + 4, 0.01),
    (96 + 1, 0.01),
    (96 + 2, 0.01),
    (96 + 3, 0.01),
    (96 + 4, 0.01),
];

/// Random ground tiles for every cell.
pub fn generate_ground_tile_map(size: usize, rng: &mut dyn RngCore) -> TileGrid {
    match generate_weighted_grid(size, &GROUND_TILES, rng) {
        Some(ids) => resolve_sprites(&ids),
        None => TileGrid::new(size),
    }
}
