//! Brush footprints and per-stroke painting.
//!
//! Pointer positions arrive in screen pixels. [`Viewport`] adds the camera offset and
//! scales by zoom, [`pixel_to_grid`] floors into cell coordinates, and
//! [`paint_cells`] applies a [`Tool`] to every not-yet-visited cell of the brush.
use std::collections::HashSet;

use glam::{IVec2, Vec2};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::grid::{DrawMask, ValueGrid, FLOOR, WALL};

/// Cells visited during the current stroke.
pub type VisitedCells = HashSet<IVec2>;

/// Camera state supplied by the host on every pointer event.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// World-pixel offset of the top-left screen corner.
    pub camera: Vec2,
    /// Integer-like magnification applied to every cell.
    pub zoom: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            camera: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

impl Viewport {
    pub fn new(camera: Vec2, zoom: f32) -> Self {
        Self { camera, zoom }
    }

    /// Grid cell under a screen-space pixel for cells of `box_size` pixels at zoom 1.
    pub fn screen_to_grid(&self, screen: Vec2, box_size: f32) -> IVec2 {
        pixel_to_grid(screen + self.camera, box_size * self.zoom)
    }
}

#[inline]
fn floor_div(pixel: f32, cell_size: f32) -> i32 {
    let cell = (pixel / cell_size).floor();
    // NaN would otherwise cast to 0 and land inside the grid.
    if cell.is_nan() {
        i32::MIN
    } else {
        cell as i32
    }
}

/// Grid cell containing a world-space pixel.
///
/// A degenerate `cell_size` yields a coordinate far outside any grid.
pub fn pixel_to_grid(pixel: Vec2, cell_size: f32) -> IVec2 {
    IVec2::new(
        floor_div(pixel.x, cell_size),
        floor_div(pixel.y, cell_size),
    )
}

/// Cells of a `brush_size` square centred on `center`, clipped to `[0, grid_size)`.
///
/// The window starts `brush_size / 2` cells up and left of the centre, so even sizes
/// extend towards the top-left.
pub fn cells_in_brush(center: IVec2, brush_size: usize, grid_size: usize) -> Vec<IVec2> {
    let (Some((x0, x1)), Some((y0, y1))) = (
        clipped_span(center.x, brush_size, grid_size),
        clipped_span(center.y, brush_size, grid_size),
    ) else {
        return Vec::new();
    };

    let mut cells = Vec::with_capacity(((x1 - x0) * (y1 - y0)) as usize);
    for y in y0..y1 {
        for x in x0..x1 {
            cells.push(IVec2::new(x, y));
        }
    }
    cells
}

/// Half-open brush span along one axis, clipped to `[0, grid_size)`.
///
/// Computed in `i64` so no centre or brush size can overflow.
fn clipped_span(center: i32, brush_size: usize, grid_size: usize) -> Option<(i32, i32)> {
    let limit = grid_size.min(i32::MAX as usize) as i64;
    let brush = brush_size.min(u32::MAX as usize) as i64;
    let start = i64::from(center) - brush / 2;
    let end = start + brush;

    let lo = start.max(0);
    let hi = end.min(limit);
    // Both bounds lie in [0, limit] here, so they fit in i32.
    (lo < hi).then_some((lo as i32, hi as i32))
}

/// Painting tool and the values it writes into the tree and water layers.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tool {
    /// Plant trees: open the tree layer and drain water.
    #[default]
    Tree,
    /// Flood: fill water and clear trees.
    Water,
    /// Clear trees without adding water.
    Eraser,
}

impl Tool {
    /// `(tree value, water value)` written by this tool.
    pub fn targets(self) -> (u8, u8) {
        match self {
            Tool::Tree => (FLOOR, FLOOR),
            Tool::Water => (WALL, WALL),
            Tool::Eraser => (WALL, FLOOR),
        }
    }
}

/// The co-located grids a brush writes into.
pub struct PaintLayers<'a> {
    pub tree: &'a mut ValueGrid,
    pub water: &'a mut ValueGrid,
    pub draw_mask: &'a mut DrawMask,
}

/// Apply `tool` to every brush cell around `center` not yet in `visited`.
///
/// Returns the newly painted cells. A centre outside the tree layer paints nothing.
pub fn paint_cells(
    center: IVec2,
    tool: Tool,
    layers: &mut PaintLayers<'_>,
    brush_size: usize,
    visited: &mut VisitedCells,
) -> Vec<IVec2> {
    if !layers.tree.in_bounds(center.x, center.y) {
        return Vec::new();
    }

    let (tree_value, water_value) = tool.targets();
    let mut painted = Vec::new();
    for cell in cells_in_brush(center, brush_size, layers.tree.size()) {
        if !visited.insert(cell) {
            continue;
        }
        if let Some(mark) = layers.draw_mask.get_mut(cell.x, cell.y) {
            *mark = true;
        }
        layers.tree.set_value(cell.x, cell.y, tree_value);
        layers.water.set_value(cell.x, cell.y, water_value);
        painted.push(cell);
    }

    trace!(
        "Painted {} cell(s) with {:?} around ({}, {}).",
        painted.len(),
        tool,
        center.x,
        center.y
    );
    painted
}

/// [`paint_cells`] for a world-space pixel and an on-screen cell size.
pub fn paint_at_pixel(
    pixel: Vec2,
    cell_size: f32,
    tool: Tool,
    layers: &mut PaintLayers<'_>,
    brush_size: usize,
    visited: &mut VisitedCells,
) -> Vec<IVec2> {
    paint_cells(
        pixel_to_grid(pixel, cell_size),
        tool,
        layers,
        brush_size,
        visited,
    )
}
