//! Headless timing of serial vs row-parallel generation advance

use std::time::Instant;

use rand::{SeedableRng, rngs::StdRng};
use life_window::{Grid, GridError};

fn seeded_grid(size: usize) -> Result<Grid, GridError> {
    Grid::new(size, size)?.randomize(0.3, &mut StdRng::seed_from_u64(size as u64))
}

fn benchmark(size: usize, iterations: u32, parallel: bool) -> Result<f64, GridError> {
    let mut grid = seeded_grid(size)?;

    let start = Instant::now();
    for _ in 0..iterations {
        grid = if parallel { grid.advance_parallel() } else { grid.advance() };
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() -> Result<(), GridError> {
    println!("=== Game of Life Advance Benchmark ===\n");

    let sizes = [45, 100, 250, 500, 1000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(size, iterations, false)?;
        let parallel_ms = benchmark(size, iterations, true)?;

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    Ok(())
}
