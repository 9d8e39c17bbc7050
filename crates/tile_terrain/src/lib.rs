#![forbid(unsafe_code)]
//! tile_terrain: Seeded cave-style terrain grids, border tiling, and brush editing.
//!
//! Modules:
//! - random: Mulberry32 seeded generator and seed coercion
//! - grid: flat square grids, noise, and the cellular-automaton smoother
//! - tiles: water border classification, tree crown stitching, ground decoration
//! - edit: brush painting, stroke lifecycle, and the `TerrainEditor` session
//! - palette: debug colours for automaton state
//!
//! For examples, see the `tile_terrain_examples` crate.
pub mod config;
pub mod edit;
pub mod error;
pub mod grid;
pub mod palette;
pub mod random;
pub mod tiles;

/// Convenient re-exports for common types. Import with `use tile_terrain::prelude::*;`.
pub mod prelude {
    pub use crate::config::{TerrainConfig, BOX_SIZE, BRUSH_SIZE, ITERATIONS, MAP_SIZE};
    pub use crate::edit::{
        cells_in_brush, pixel_to_grid, EditorEvent, EventSink, FnSink, MultiSink, TerrainEditor,
        Tool, VecSink, Viewport,
    };
    pub use crate::error::{Error, Result};
    pub use crate::grid::{
        apply_iterations, count_neighbor_friends, generate_noise_grid, generate_organic_grid,
        generate_random_noise_grid, set_cell_value, toggle_cell_value, Cell, DrawMask, Grid,
        ValueGrid,
    };
    pub use crate::palette::{cell_color, cell_color_with_drawing_state, CellColor};
    pub use crate::random::{coerce_seed, create_random, Mulberry32};
    pub use crate::tiles::{
        classify_border, generate_ground_tile_map, generate_water_tile_map, sprite_position,
        stitch_tree_clusters, BorderTile, TileAssignment, TileGrid, TreeTileset, WaterTileset,
    };
}
