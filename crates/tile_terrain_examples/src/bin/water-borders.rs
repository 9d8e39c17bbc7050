use tile_terrain::prelude::*;
use tile_terrain_examples::{init_tracing, render_border_map_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // A lake with a bay, an island, and a one-cell channel.
    let rows: [&[u8]; 12] = [
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0],
        &[0, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0],
        &[0, 1, 1, 0, 0, 1, 1, 1, 1, 1, 1, 0],
        &[0, 1, 1, 0, 0, 1, 1, 1, 1, 1, 1, 0],
        &[0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0],
        &[0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0],
        &[0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 0],
        &[0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    ];
    let lake = ValueGrid::from_rows(&rows)
        .ok_or_else(|| anyhow::anyhow!("lake rows must be square and binary"))?;

    let rc = RenderConfig::new(24)
        .with_background([110, 170, 80])
        .with_outline(true);
    render_border_map_to_png(&lake, &rc, "water-borders.png")?;

    let tiles = generate_water_tile_map(&lake, &WaterTileset::default());
    for y in 0..lake.size() as i32 {
        let line: Vec<String> = tiles
            .row(y)
            .unwrap_or_default()
            .iter()
            .map(|t| t.map_or(" .".to_string(), |t| format!("{:>2}", t.tile_id)))
            .collect();
        println!("{}", line.join(" "));
    }

    Ok(())
}
