//! Interactive editing session over the generated terrain layers.
use glam::{IVec2, Vec2};
use mint::Vector2;
use tracing::{debug, info, warn};

use crate::config::TerrainConfig;
use crate::edit::brush::{paint_cells, PaintLayers, Tool, Viewport};
use crate::edit::events::{EditorEvent, EventSink};
use crate::edit::stroke::Stroke;
use crate::error::Result;
use crate::grid::{apply_iterations, generate_organic_grid, Cell, DrawMask, Grid, ValueGrid};
use crate::random::{random_seed, Mulberry32};
use crate::tiles::{
    generate_ground_tile_map, generate_water_tile_map, stitch_tree_clusters, TileGrid,
    TreeTileset, WaterTileset,
};

/// Owns every layer of a map and applies pointer strokes to it.
///
/// The tree layer is mutated in place only while a stroke is active; the automaton and
/// the tile passes run when the stroke ends. Exclusive `&mut self` access keeps those
/// two phases from overlapping.
#[derive(Debug, Clone)]
pub struct TerrainEditor {
    config: TerrainConfig,
    seed: u32,
    tool: Tool,
    tree_tileset: TreeTileset,
    water_tileset: WaterTileset,
    tree_values: ValueGrid,
    water_values: ValueGrid,
    draw_mask: DrawMask,
    ground_tiles: TileGrid,
    tree_tiles: TileGrid,
    water_tiles: TileGrid,
    stroke: Stroke,
}

impl TerrainEditor {
    /// Validates `config` and generates the first map.
    pub fn try_new(config: TerrainConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Generates the first map from `config.seed`, or from a fresh seed when unset.
    ///
    /// An invalid configuration is logged and used as is: a zero size yields empty
    /// layers, a zero brush paints nothing.
    pub fn new(config: TerrainConfig) -> Self {
        Self::build(config, None)
    }

    /// [`Self::new`], reporting an invalid configuration as [`EditorEvent::Warning`]
    /// ahead of the [`EditorEvent::MapGenerated`] event.
    pub fn new_with_events(config: TerrainConfig, sink: &mut dyn EventSink) -> Self {
        Self::build(config, Some(sink))
    }

    fn build(config: TerrainConfig, mut sink: Option<&mut dyn EventSink>) -> Self {
        if let Err(err) = config.validate() {
            warn!("TerrainEditor built with {}", err);
            if let Some(s) = sink.as_deref_mut() {
                s.send(EditorEvent::Warning {
                    context: "TerrainEditor::new".into(),
                    message: err.to_string(),
                });
            }
        }

        let seed = config.seed.unwrap_or_else(random_seed);
        let mut editor = Self {
            tree_values: Grid::new(config.size),
            water_values: Grid::new(config.size),
            draw_mask: DrawMask::new(config.size),
            ground_tiles: TileGrid::new(config.size),
            tree_tiles: TileGrid::new(config.size),
            water_tiles: TileGrid::new(config.size),
            config,
            seed,
            tool: Tool::default(),
            tree_tileset: TreeTileset::default(),
            water_tileset: WaterTileset::default(),
            stroke: Stroke::new(),
        };
        editor.generate(seed, sink);
        editor
    }

    /// Replaces the tilesets and rebuilds the tree and water tile maps.
    pub fn with_tilesets(mut self, tree: TreeTileset, water: WaterTileset) -> Self {
        self.tree_tileset = tree;
        self.water_tileset = water;
        self.rebuild_tiles();
        self
    }

    /// Generates a new map from a freshly drawn seed.
    pub fn regenerate(&mut self) -> u32 {
        let seed = random_seed();
        self.generate(seed, None);
        seed
    }

    /// Generates a new map from `seed`.
    pub fn regenerate_with_seed(&mut self, seed: u32) {
        self.generate(seed, None);
    }

    pub fn regenerate_with_events(&mut self, seed: u32, sink: &mut dyn EventSink) {
        self.generate(seed, Some(sink));
    }

    /// Starts a stroke at a screen position and paints the first footprint.
    ///
    /// Returns the number of cells painted. A press outside the grid still starts a
    /// stroke so a drag can enter the map.
    pub fn pointer_down(&mut self, screen: impl Into<Vector2<f32>>, viewport: &Viewport) -> usize {
        self.begin_stroke(Vec2::from(screen.into()), viewport, None)
    }

    pub fn pointer_down_with_events(
        &mut self,
        screen: impl Into<Vector2<f32>>,
        viewport: &Viewport,
        sink: &mut dyn EventSink,
    ) -> usize {
        self.begin_stroke(Vec2::from(screen.into()), viewport, Some(sink))
    }

    /// Paints the footprint under a dragged pointer. Ignored while idle.
    pub fn pointer_move(&mut self, screen: impl Into<Vector2<f32>>, viewport: &Viewport) -> usize {
        self.continue_stroke(Vec2::from(screen.into()), viewport, None)
    }

    pub fn pointer_move_with_events(
        &mut self,
        screen: impl Into<Vector2<f32>>,
        viewport: &Viewport,
        sink: &mut dyn EventSink,
    ) -> usize {
        self.continue_stroke(Vec2::from(screen.into()), viewport, Some(sink))
    }

    /// Ends the active stroke and rebuilds the edited layers.
    ///
    /// Returns `false` when no stroke was active.
    pub fn pointer_up(&mut self) -> bool {
        self.finish_stroke(None)
    }

    pub fn pointer_up_with_events(&mut self, sink: &mut dyn EventSink) -> bool {
        self.finish_stroke(Some(sink))
    }

    /// Pointer left the canvas: finalizes exactly like [`Self::pointer_up`].
    pub fn pointer_leave(&mut self) -> bool {
        self.finish_stroke(None)
    }

    pub fn pointer_leave_with_events(&mut self, sink: &mut dyn EventSink) -> bool {
        self.finish_stroke(Some(sink))
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    /// Seed of the current map.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn is_drawing(&self) -> bool {
        self.stroke.is_drawing()
    }

    pub fn tree_values(&self) -> &ValueGrid {
        &self.tree_values
    }

    pub fn water_values(&self) -> &ValueGrid {
        &self.water_values
    }

    pub fn draw_mask(&self) -> &DrawMask {
        &self.draw_mask
    }

    pub fn ground_tiles(&self) -> &TileGrid {
        &self.ground_tiles
    }

    pub fn tree_tiles(&self) -> &TileGrid {
        &self.tree_tiles
    }

    pub fn water_tiles(&self) -> &TileGrid {
        &self.water_tiles
    }

    fn generate(&mut self, seed: u32, mut sink: Option<&mut dyn EventSink>) {
        let size = self.config.size;
        let mut rng = Mulberry32::new(seed);

        self.seed = seed;
        self.stroke.finish();
        self.tree_values = generate_organic_grid(size, self.config.iterations, &mut rng);
        self.ground_tiles = generate_ground_tile_map(size, &mut rng);
        self.water_values = Grid::filled(size, Cell::floor());
        self.draw_mask = DrawMask::new(size);
        self.rebuild_tiles();

        let wall_count = self.tree_values.wall_count();
        info!(
            "Generated {}x{} map from seed {} ({} wall cells).",
            size, size, seed, wall_count
        );
        if let Some(s) = sink.as_deref_mut() {
            s.send(EditorEvent::MapGenerated {
                seed,
                size,
                wall_count,
            });
        }
    }

    fn rebuild_tiles(&mut self) {
        self.tree_tiles = stitch_tree_clusters(&self.tree_values, &self.tree_tileset);
        self.water_tiles = generate_water_tile_map(&self.water_values, &self.water_tileset);
    }

    fn begin_stroke(
        &mut self,
        screen: Vec2,
        viewport: &Viewport,
        mut sink: Option<&mut dyn EventSink>,
    ) -> usize {
        self.stroke.begin();
        let cell = viewport.screen_to_grid(screen, self.config.box_size);
        debug!(
            "Stroke started with {:?} at cell ({}, {}).",
            self.tool, cell.x, cell.y
        );
        if let Some(s) = sink.as_deref_mut() {
            s.send(EditorEvent::StrokeStarted {
                tool: self.tool,
                cell,
            });
        }
        self.paint(cell, sink)
    }

    fn continue_stroke(
        &mut self,
        screen: Vec2,
        viewport: &Viewport,
        sink: Option<&mut dyn EventSink>,
    ) -> usize {
        if !self.stroke.is_drawing() {
            return 0;
        }
        let cell = viewport.screen_to_grid(screen, self.config.box_size);
        self.paint(cell, sink)
    }

    fn paint(&mut self, cell: IVec2, mut sink: Option<&mut dyn EventSink>) -> usize {
        let Some(visited) = self.stroke.visited_mut() else {
            return 0;
        };
        let mut layers = PaintLayers {
            tree: &mut self.tree_values,
            water: &mut self.water_values,
            draw_mask: &mut self.draw_mask,
        };
        let painted = paint_cells(cell, self.tool, &mut layers, self.config.brush_size, visited);

        let count = painted.len();
        if count > 0 {
            if let Some(s) = sink.as_deref_mut() {
                s.send(EditorEvent::CellsPainted {
                    tool: self.tool,
                    cells: painted,
                });
            }
        }
        count
    }

    fn finish_stroke(&mut self, mut sink: Option<&mut dyn EventSink>) -> bool {
        let Some(painted) = self.stroke.finish() else {
            return false;
        };

        let iterations = self.config.iterations;
        self.tree_values = apply_iterations(&self.tree_values, iterations);
        self.water_values.clear_drawing_flags();
        self.draw_mask.clear();
        self.rebuild_tiles();

        debug!(
            "Stroke finished: {} cell(s) painted, {} automaton pass(es).",
            painted, iterations
        );
        if let Some(s) = sink.as_deref_mut() {
            s.send(EditorEvent::StrokeFinished {
                painted,
                iterations,
            });
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit::events::VecSink;

    fn editor(size: usize, seed: u32) -> TerrainEditor {
        TerrainEditor::new(
            TerrainConfig::new(size)
                .with_seed(seed)
                .with_box_size(10.0)
                .with_brush_size(2),
        )
    }

    fn any_drawing(grid: &ValueGrid) -> bool {
        grid.cells().iter().any(|c| c.is_being_drawn())
    }

    #[test]
    fn try_new_rejects_invalid_config() {
        assert!(TerrainEditor::try_new(TerrainConfig::new(0)).is_err());
        assert!(TerrainEditor::try_new(TerrainConfig::new(8).with_seed(1)).is_ok());
    }

    #[test]
    fn lenient_new_degrades_instead_of_failing() {
        let mut e = TerrainEditor::new(TerrainConfig::new(6).with_seed(1).with_brush_size(0));
        assert_eq!(e.pointer_down(Vec2::new(15.0, 15.0), &Viewport::default()), 0);
        assert!(e.pointer_up());

        let empty = TerrainEditor::new(TerrainConfig::new(0).with_seed(1));
        assert!(empty.tree_values().is_empty());
        assert!(empty.ground_tiles().is_empty());
    }

    #[test]
    fn lenient_new_reports_invalid_config() {
        let mut sink = VecSink::new();
        let config = TerrainConfig::new(6).with_seed(2).with_brush_size(9);
        let e = TerrainEditor::new_with_events(config, &mut sink);
        assert_eq!(e.seed(), 2);

        let events = sink.into_inner();
        assert_eq!(events.len(), 2);
        assert!(matches!(
            &events[0],
            EditorEvent::Warning { context, message }
                if context == "TerrainEditor::new" && message.contains("brush_size")
        ));
        assert!(matches!(
            events[1],
            EditorEvent::MapGenerated { seed: 2, size: 6, .. }
        ));

        let mut quiet = VecSink::new();
        TerrainEditor::new_with_events(TerrainConfig::new(6).with_seed(2), &mut quiet);
        assert!(matches!(quiet.as_slice(), [EditorEvent::MapGenerated { .. }]));
    }

    #[test]
    fn same_seed_same_map() {
        let a = editor(24, 99);
        let b = editor(24, 99);
        assert_eq!(a.tree_values(), b.tree_values());
        assert_eq!(a.ground_tiles(), b.ground_tiles());
        assert_eq!(a.tree_tiles(), b.tree_tiles());
        assert_eq!(a.seed(), 99);
    }

    #[test]
    fn fresh_map_has_no_water_and_clean_flags() {
        let e = editor(16, 5);
        assert_eq!(e.water_values().wall_count(), 0);
        assert!(e.water_tiles().cells().iter().all(Option::is_none));
        assert_eq!(e.draw_mask().painted_count(), 0);
        assert!(!any_drawing(e.tree_values()));
        assert!(e.ground_tiles().cells().iter().all(Option::is_some));
    }

    #[test]
    fn move_while_idle_is_ignored() {
        let mut e = editor(16, 5);
        let before = e.tree_values().clone();
        assert_eq!(e.pointer_move(Vec2::new(55.0, 55.0), &Viewport::default()), 0);
        assert!(!e.pointer_up());
        assert!(!e.pointer_leave());
        assert_eq!(e.tree_values(), &before);
    }

    #[test]
    fn stroke_marks_cells_until_released() {
        let mut e = editor(16, 5);
        e.set_tool(Tool::Water);
        let viewport = Viewport::default();

        assert_eq!(e.pointer_down(Vec2::new(55.0, 55.0), &viewport), 4);
        assert!(e.is_drawing());
        assert_eq!(e.pointer_move(Vec2::new(55.0, 55.0), &viewport), 0);
        assert_eq!(e.pointer_move(Vec2::new(65.0, 55.0), &viewport), 2);
        assert_eq!(e.draw_mask().painted_count(), 6);
        assert_eq!(e.water_values().value_at(5, 5), Some(1));
        assert!(e.water_values().get(6, 5).unwrap().is_being_drawn());

        assert!(e.pointer_up());
        assert!(!e.is_drawing());
        assert_eq!(e.draw_mask().painted_count(), 0);
        assert!(!any_drawing(e.tree_values()));
        assert!(!any_drawing(e.water_values()));
        assert_eq!(e.water_values().wall_count(), 6);
        assert!(e.water_tiles().get(5, 5).unwrap().is_some());
    }

    #[test]
    fn release_runs_the_automaton_on_trees() {
        let mut e = editor(20, 12);
        let viewport = Viewport::default();
        e.set_tool(Tool::Eraser);
        e.pointer_down(Vec2::new(100.0, 100.0), &viewport);
        let painted = e.tree_values().clone();
        e.pointer_leave();
        assert_eq!(e.tree_values(), &apply_iterations(&painted, e.config().iterations));
        assert_eq!(
            e.tree_tiles(),
            &stitch_tree_clusters(e.tree_values(), &TreeTileset::default())
        );
    }

    #[test]
    fn press_outside_grid_starts_an_empty_stroke() {
        let mut e = editor(8, 3);
        let viewport = Viewport::default();
        assert_eq!(e.pointer_down(Vec2::new(-20.0, 5.0), &viewport), 0);
        assert!(e.is_drawing());
        assert_eq!(e.pointer_move(Vec2::new(5.0, 5.0), &viewport), 1);
        assert!(e.pointer_up());
    }

    #[test]
    fn viewport_offsets_the_brush() {
        let mut e = editor(16, 3);
        e.set_tool(Tool::Water);
        let viewport = Viewport::new(Vec2::new(40.0, 0.0), 2.0);
        e.pointer_down(Vec2::new(5.0, 25.0), &viewport);
        // (5 + 40) / 20 = 2, 25 / 20 = 1
        assert_eq!(e.water_values().value_at(2, 1), Some(1));
        assert_eq!(e.water_values().value_at(1, 0), Some(1));
        assert_eq!(e.water_values().value_at(3, 1), Some(0));
    }

    #[test]
    fn events_follow_the_stroke() {
        let mut e = editor(12, 8);
        let mut sink = VecSink::new();
        let viewport = Viewport::default();
        e.pointer_down_with_events(Vec2::new(35.0, 35.0), &viewport, &mut sink);
        e.pointer_move_with_events(Vec2::new(35.0, 35.0), &viewport, &mut sink);
        e.pointer_move_with_events(Vec2::new(45.0, 35.0), &viewport, &mut sink);
        e.pointer_up_with_events(&mut sink);

        let events = sink.into_inner();
        assert_eq!(events.len(), 4);
        assert_eq!(
            events[0],
            EditorEvent::StrokeStarted {
                tool: Tool::Tree,
                cell: IVec2::new(3, 3)
            }
        );
        assert!(matches!(&events[1], EditorEvent::CellsPainted { cells, .. } if cells.len() == 4));
        assert!(matches!(&events[2], EditorEvent::CellsPainted { cells, .. } if cells.len() == 2));
        assert_eq!(
            events[3],
            EditorEvent::StrokeFinished {
                painted: 6,
                iterations: e.config().iterations
            }
        );
    }

    #[test]
    fn regenerate_resets_edits() {
        let mut e = editor(12, 8);
        e.set_tool(Tool::Water);
        e.pointer_down(Vec2::new(35.0, 35.0), &Viewport::default());
        let mut sink = VecSink::new();
        e.regenerate_with_events(8, &mut sink);

        assert!(!e.is_drawing());
        assert_eq!(e.water_values().wall_count(), 0);
        assert_eq!(e.tree_values(), editor(12, 8).tree_values());
        assert!(matches!(
            sink.as_slice(),
            [EditorEvent::MapGenerated { seed: 8, size: 12, .. }]
        ));
    }

    #[test]
    fn custom_tilesets_are_used() {
        let tree = TreeTileset {
            top_left: 1,
            top_right: 2,
            bottom_left: 3,
            bottom_right: 4,
            connect_left: 5,
            connect_right: 6,
        };
        let e = editor(10, 4).with_tilesets(tree.clone(), WaterTileset::default());
        assert_eq!(e.tree_tiles(), &stitch_tree_clusters(e.tree_values(), &tree));
    }

    #[test]
    fn mint_positions_are_accepted() {
        let mut e = editor(10, 4);
        let p: Vector2<f32> = Vector2 { x: 15.0, y: 15.0 };
        assert_eq!(e.pointer_down(p, &Viewport::default()), 4);
    }
}
