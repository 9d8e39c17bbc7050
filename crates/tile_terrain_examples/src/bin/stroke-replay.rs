use glam::Vec2;
use tile_terrain::prelude::*;
use tile_terrain_examples::{init_tracing, render_layers_to_png, RenderConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = TerrainConfig::new(64).with_seed(7).with_brush_size(3);
    let mut editor = TerrainEditor::try_new(config)?;
    let viewport = Viewport::default();
    let box_size = editor.config().box_size;

    let mut total_painted = 0;
    let mut sink: MultiSink<Box<dyn EventSink + '_>> = MultiSink::new();
    sink.push(Box::new(FnSink::new(|event| match event {
        EditorEvent::CellsPainted { tool, cells } => {
            info!("{:?} painted {} cell(s)", tool, cells.len())
        }
        other => info!("{:?}", other),
    })));
    sink.push(Box::new(FnSink::new(|event| {
        if let EditorEvent::StrokeFinished { painted, .. } = event {
            total_painted += painted;
        }
    })));

    let rc = RenderConfig::new(8);
    render_layers_to_png(&editor, &rc, "stroke-replay-before.png")?;

    // A river running diagonally across the map.
    editor.set_tool(Tool::Water);
    let river = (4..60).map(|i| Vec2::new(i as f32, 10.0 + i as f32 * 0.6) * box_size);
    replay(&mut editor, &viewport, &mut sink, river);

    // A clearing on the far side of the river.
    editor.set_tool(Tool::Eraser);
    let clearing = (0..40).map(|i| {
        let angle = i as f32 * std::f32::consts::TAU / 40.0;
        (Vec2::new(44.0, 20.0) + Vec2::from_angle(angle) * 5.0) * box_size
    });
    replay(&mut editor, &viewport, &mut sink, clearing);

    // A grove planted next to the clearing.
    editor.set_tool(Tool::Tree);
    let grove = (0..12).flat_map(|y| {
        (0..12).map(move |x| Vec2::new(12.0 + x as f32, 40.0 + y as f32) * box_size)
    });
    replay(&mut editor, &viewport, &mut sink, grove);
    drop(sink);
    info!("{} cell(s) painted over three strokes", total_painted);

    render_layers_to_png(&editor, &rc, "stroke-replay-after.png")?;
    Ok(())
}

fn replay(
    editor: &mut TerrainEditor,
    viewport: &Viewport,
    sink: &mut dyn EventSink,
    path: impl IntoIterator<Item = Vec2>,
) {
    let mut points = path.into_iter();
    let Some(start) = points.next() else {
        return;
    };
    editor.pointer_down_with_events(start, viewport, sink);
    for point in points {
        editor.pointer_move_with_events(point, viewport, sink);
    }
    editor.pointer_up_with_events(sink);
}
