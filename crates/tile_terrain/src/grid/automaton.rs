//! Cellular-automaton smoothing that turns binary noise into cave shapes.
//!
//! Each iteration runs two full-grid passes: first every cell's wall-neighbour count is
//! recorded, then every cell is updated from the recorded counts. Splitting the passes
//! keeps results independent of scan order.
use rand::RngCore;
use tracing::debug;

use super::{generate_noise_grid, ValueGrid, NEIGHBOR_OFFSETS, WALL};
use crate::config::{FLOOR_TO_WALL_THRESHOLD, WALL_SURVIVAL_THRESHOLD};

/// Count wall cells among the up to 8 neighbours of `(x, y)`.
///
/// Neighbours outside the grid are skipped. Returns `0` when `(x, y)` itself is outside
/// the grid.
pub fn count_neighbor_friends(grid: &ValueGrid, x: i32, y: i32) -> u8 {
    if !grid.in_bounds(x, y) {
        return 0;
    }
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|(dx, dy)| grid.value_at(x + dx, y + dy) == Some(WALL))
        .count() as u8
}

/// Recompute `friend_count` for every cell from the current values.
pub fn calculate_all_friend_counts(grid: &mut ValueGrid) {
    let view: &ValueGrid = grid;
    let size = view.size() as i32;
    let counts: Vec<u8> = (0..size)
        .flat_map(|y| (0..size).map(move |x| (x, y)))
        .map(|(x, y)| count_neighbor_friends(view, x, y))
        .collect();
    for (cell, count) in grid.cells_mut().iter_mut().zip(counts) {
        cell.set_friend_count(count);
    }
}

/// Apply the asymmetric survival rule to every cell with a recorded friend count.
///
/// Walls stay walls with at least [`WALL_SURVIVAL_THRESHOLD`] wall neighbours; floors
/// become walls with at least [`FLOOR_TO_WALL_THRESHOLD`]. Cells without a count are
/// left untouched.
pub fn apply_cave_rules(grid: &mut ValueGrid) {
    for cell in grid.cells_mut() {
        let Some(count) = cell.friend_count() else {
            continue;
        };
        let threshold = if cell.is_wall() {
            WALL_SURVIVAL_THRESHOLD
        } else {
            FLOOR_TO_WALL_THRESHOLD
        };
        cell.set_value_unchecked(u8::from(count >= threshold));
    }
}

/// Run `iterations` smoothing passes over a copy of `grid`.
///
/// The returned grid has every drawing flag cleared and a friend count that matches
/// its final values, even for `iterations == 0`.
pub fn apply_iterations(grid: &ValueGrid, iterations: usize) -> ValueGrid {
    let mut next = grid.clone();
    for _ in 0..iterations {
        calculate_all_friend_counts(&mut next);
        apply_cave_rules(&mut next);
    }

    next.clear_drawing_flags();
    calculate_all_friend_counts(&mut next);

    debug!(
        "Applied {} automaton iteration(s) to {}x{} grid; {} wall cells.",
        iterations,
        next.size(),
        next.size(),
        next.wall_count()
    );
    next
}

/// Generate uniform noise and smooth it in one step.
pub fn generate_organic_grid(size: usize, iterations: usize, rng: &mut dyn RngCore) -> ValueGrid {
    let noise = generate_noise_grid(size, rng);
    apply_iterations(&noise, iterations)
}
