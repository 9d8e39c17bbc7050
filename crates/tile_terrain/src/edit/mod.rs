//! Brush painting and the stroke-driven editing session.
//!
//! - [`brush`]: pixel to cell mapping, brush footprints, tool application.
//! - [`stroke`]: `Idle`/`Drawing` state and the per-stroke visited set.
//! - [`editor`]: [`editor::TerrainEditor`], which owns all layers and finalizes strokes.
//! - [`events`]: observable editor events and sinks.
pub mod brush;
pub mod editor;
pub mod events;
pub mod stroke;

pub use brush::{
    cells_in_brush, paint_at_pixel, paint_cells, pixel_to_grid, PaintLayers, Tool, Viewport,
    VisitedCells,
};
pub use editor::TerrainEditor;
pub use events::{EditorEvent, EventSink, FnSink, MultiSink, VecSink};
pub use stroke::{Stroke, StrokeState};
