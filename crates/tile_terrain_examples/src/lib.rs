#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{
    init_tracing, render_border_map_to_png, render_cells_to_png, render_layers_to_png,
    RenderConfig,
};
