use rand::rngs::StdRng;
use rand::SeedableRng;
use tile_terrain::prelude::*;
use tile_terrain_examples::{init_tracing, render_cells_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let size = 80;
    let seed = 2025;
    let rc = RenderConfig::new(6).with_outline(true);

    // Raw noise, then each smoothing pass, all from the same seed.
    let mut rng = Mulberry32::new(seed);
    let noise = generate_noise_grid(size, &mut rng);
    let noise = apply_iterations(&noise, 0);
    render_cells_to_png(&noise, &rc, cell_color, "cave-generation-0.png")?;

    let mut grid = noise;
    for pass in 1..=ITERATIONS {
        grid = apply_iterations(&grid, 1);
        render_cells_to_png(&grid, &rc, cell_color, format!("cave-generation-{pass}.png"))?;
    }

    // The one-shot helper matches the step-by-step result.
    let direct = generate_organic_grid(size, ITERATIONS, &mut Mulberry32::new(seed));
    anyhow::ensure!(direct == grid, "step-by-step and direct generation diverged");

    // Any rand generator can drive the noise; only Mulberry32 reproduces browser maps.
    let std_noise = generate_noise_grid(size, &mut StdRng::seed_from_u64(seed as u64));
    let std_cave = apply_iterations(&std_noise, ITERATIONS);
    render_cells_to_png(&std_cave, &rc, cell_color, "cave-generation-stdrng.png")?;

    // Unseeded: a different cave on every run.
    let unseeded = apply_iterations(&generate_random_noise_grid(size), ITERATIONS);
    render_cells_to_png(&unseeded, &rc, cell_color, "cave-generation-unseeded.png")?;

    Ok(())
}
