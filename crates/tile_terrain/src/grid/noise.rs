//! Initial noise for new grids.
//!
//! Every cell is drawn independently in row-major order, so a given generator state
//! always produces the same grid.
use rand::RngCore;
use tracing::info;

use super::{Cell, Grid, ValueGrid};
use crate::random::{rand01, Mulberry32};

/// Uniform binary noise: each cell is `floor(draw * 2)`.
pub fn generate_noise_grid(size: usize, rng: &mut dyn RngCore) -> ValueGrid {
    let grid = Grid::from_fn(size, |_, _| {
        let value = (rand01(rng) * 2.0).floor() as u8;
        Cell::try_new(value).unwrap_or_default()
    });
    info!(
        "Generated {}x{} noise grid with {} wall cells.",
        size,
        size,
        grid.wall_count()
    );
    grid
}

/// Uniform binary noise from a freshly drawn seed.
pub fn generate_random_noise_grid(size: usize) -> ValueGrid {
    generate_noise_grid(size, &mut Mulberry32::from_random_seed())
}

/// Pick a category from an ordered `(category, chance)` table.
///
/// Every entry gets its own Bernoulli draw, in order, and the last entry whose draw
/// succeeds wins. If none succeeds the first category is returned. An empty table
/// yields `None` and consumes no draws.
pub fn pick_weighted<C: Copy>(table: &[(C, f64)], rng: &mut dyn RngCore) -> Option<C> {
    let (first, _) = *table.first()?;
    let picked = table.iter().fold(first, |selected, &(category, chance)| {
        if rand01(rng) < chance {
            category
        } else {
            selected
        }
    });
    Some(picked)
}

/// Grid of categories drawn with [`pick_weighted`], or `None` for an empty table.
pub fn generate_weighted_grid<C: Copy>(
    size: usize,
    table: &[(C, f64)],
    rng: &mut dyn RngCore,
) -> Option<Grid<C>> {
    let (fallback, _) = *table.first()?;
    Some(Grid::from_fn(size, |_, _| {
        pick_weighted(table, rng).unwrap_or(fallback)
    }))
}
