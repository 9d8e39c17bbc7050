//! Fixed generation constants and the per-session [`TerrainConfig`].
//!
//! The automaton thresholds and the tree density cutoff are constants only; they are
//! not part of [`TerrainConfig`].
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Side length of the square map in cells.
pub const MAP_SIZE: usize = 100;

/// Smoothing passes applied after noise generation and after every stroke.
pub const ITERATIONS: usize = 4;

/// On-screen size of one cell in pixels at zoom 1.
pub const BOX_SIZE: f32 = 10.0;

/// Side length of the square paint brush in cells.
pub const BRUSH_SIZE: usize = 2;

/// Walls survive with at least this many wall neighbours.
pub const WALL_SURVIVAL_THRESHOLD: u8 = 4;

/// Floors turn into walls with at least this many wall neighbours.
pub const FLOOR_TO_WALL_THRESHOLD: u8 = 5;

/// A tree crown is stamped when more than this many of its four cells are open.
pub const TREE_DENSITY_CUTOFF: u8 = 2;

/// Tiles per row on the overworld sprite sheet.
pub const TILES_PER_ROW: u32 = 24;

/// Edge length of one sprite sheet tile in pixels.
pub const TILE_SPRITE_SIZE: u32 = 8;

/// Configuration for a terrain editing session.
#[non_exhaustive]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainConfig {
    /// Side length of every grid in cells.
    pub size: usize,
    /// Automaton passes per generation or stroke completion.
    pub iterations: usize,
    /// Cell size in screen pixels at zoom 1.
    pub box_size: f32,
    /// Brush side length in cells.
    pub brush_size: usize,
    /// Seed for reproducible maps; `None` draws a fresh seed.
    pub seed: Option<u32>,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            size: MAP_SIZE,
            iterations: ITERATIONS,
            box_size: BOX_SIZE,
            brush_size: BRUSH_SIZE,
            seed: None,
        }
    }
}

impl TerrainConfig {
    /// Creates a new [`TerrainConfig`] with the given map size and default everything else.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    /// Sets the number of automaton iterations.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the on-screen cell size in pixels.
    pub fn with_box_size(mut self, box_size: f32) -> Self {
        self.box_size = box_size;
        self
    }

    /// Sets the brush side length.
    pub fn with_brush_size(mut self, brush_size: usize) -> Self {
        self.brush_size = brush_size;
        self
    }

    /// Fixes the seed so generation is reproducible.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::InvalidConfig("size must be > 0".into()));
        }
        if self.size > i32::MAX as usize {
            return Err(Error::InvalidConfig(format!(
                "size must fit in i32 coordinates, got {}",
                self.size
            )));
        }
        if !(self.box_size.is_finite() && self.box_size > 0.0) {
            return Err(Error::InvalidConfig("box_size must be finite and > 0".into()));
        }
        if self.brush_size == 0 {
            return Err(Error::InvalidConfig("brush_size must be > 0".into()));
        }
        if self.brush_size > self.size {
            return Err(Error::InvalidConfig(format!(
                "brush_size must be <= size ({}), got {}",
                self.size, self.brush_size
            )));
        }

        Ok(())
    }
}
