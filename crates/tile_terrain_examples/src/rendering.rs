use std::path::Path;

use anyhow::Context;
use glam::IVec2;
use image::{Rgb, RgbImage};
use tile_terrain::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber honouring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Output settings shared by all renderers.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Side length of one grid cell in output pixels.
    pub cell_px: u32,
    pub background: [u8; 3],
    /// Draw a one-pixel darker outline around each cell.
    pub outline: bool,
}

impl RenderConfig {
    pub fn new(cell_px: u32) -> Self {
        Self {
            cell_px: cell_px.max(1),
            background: [0, 0, 0],
            outline: false,
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_outline(mut self, outline: bool) -> Self {
        self.outline = outline;
        self
    }

    fn canvas(&self, grid_size: usize) -> RgbImage {
        let side = grid_size as u32 * self.cell_px;
        RgbImage::from_pixel(side, side, Rgb(self.background))
    }

    fn fill_cell(&self, img: &mut RgbImage, cell: IVec2, rgb: [u8; 3]) {
        let edge = darken(rgb, 0.7);
        let x0 = cell.x as u32 * self.cell_px;
        let y0 = cell.y as u32 * self.cell_px;
        for dy in 0..self.cell_px {
            for dx in 0..self.cell_px {
                let on_edge = self.outline && (dx == 0 || dy == 0);
                img.put_pixel(x0 + dx, y0 + dy, Rgb(if on_edge { edge } else { rgb }));
            }
        }
    }
}

fn darken(rgb: [u8; 3], factor: f32) -> [u8; 3] {
    rgb.map(|c| (c as f32 * factor).round().clamp(0.0, 255.0) as u8)
}

fn save(img: &RgbImage, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    img.save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!("Wrote {}x{} image to {}.", img.width(), img.height(), path.display());
    Ok(())
}

/// Render one value grid through a debug colour function.
pub fn render_cells_to_png(
    grid: &ValueGrid,
    rc: &RenderConfig,
    color: impl Fn(Option<&Cell>) -> CellColor,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let mut img = rc.canvas(grid.size());
    for (pos, cell) in grid.iter() {
        rc.fill_cell(&mut img, pos, color(Some(cell)).rgb());
    }
    save(&img, path)
}

fn border_rgb(tile: BorderTile) -> [u8; 3] {
    if tile.is_outer_corner() {
        [250, 200, 80]
    } else if tile.is_edge() {
        [90, 170, 230]
    } else if tile.is_inner_corner() {
        [230, 90, 160]
    } else {
        [30, 70, 160]
    }
}

/// Render the border category of every active cell.
pub fn render_border_map_to_png(
    grid: &ValueGrid,
    rc: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let mut img = rc.canvas(grid.size());
    for (pos, _) in grid.iter() {
        if let Some(tile) = classify_border(grid, pos.x, pos.y) {
            rc.fill_cell(&mut img, pos, border_rgb(tile));
        }
    }
    save(&img, path)
}

/// Shade a tile id inside a base colour so neighbouring variants stay distinguishable.
fn tile_rgb(base: [u8; 3], tile: &TileAssignment) -> [u8; 3] {
    let variant = (tile.sprite_position.x / 8 + tile.sprite_position.y / 8) % 5;
    darken(base, 0.75 + variant as f32 * 0.06)
}

/// Composite ground, tree, and water tile layers of an editor into one image.
///
/// No sprite sheet is needed: every layer gets a flat base colour, shaded per tile id.
pub fn render_layers_to_png(
    editor: &TerrainEditor,
    rc: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let size = editor.config().size;
    let mut img = rc.canvas(size);

    let layers: [(&TileGrid, [u8; 3]); 3] = [
        (editor.ground_tiles(), [120, 190, 90]),
        (editor.tree_tiles(), [30, 100, 40]),
        (editor.water_tiles(), [60, 120, 220]),
    ];
    for (layer, base) in layers {
        for (pos, tile) in layer.iter() {
            if let Some(tile) = tile {
                rc.fill_cell(&mut img, pos, tile_rgb(base, tile));
            }
        }
    }
    save(&img, path)
}
