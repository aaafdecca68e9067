//! Headless generation runner: advances random grids without a window
//! and reports stepping time and population drift.
//!
//! Usage: soak [size] [generations]

use std::time::Instant;

use canvas_life::domain::Grid;

fn time_serial(size: usize, iterations: u32) -> f64 {
    let mut grid = Grid::random(size, size, 0.3);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = grid.step();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn time_parallel(size: usize, iterations: u32) -> f64 {
    let mut grid = Grid::random(size, size, 0.3);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = grid.step_parallel();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let size: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(100);
    let generations: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(100);

    log::info!("soaking a {0}x{0} grid for {1} generations", size, generations);

    let grid = Grid::random(size, size, 0.3);
    let start = Instant::now();
    let settled = grid.advance(generations);
    let total_ms = start.elapsed().as_secs_f64() * 1000.0;

    println!(
        "{} generations on {}x{}: {:.2} ms total, {:.3} ms/gen",
        generations,
        size,
        size,
        total_ms,
        total_ms / generations.max(1) as f64
    );
    println!(
        "population: {} -> {}",
        grid.population(),
        settled.population()
    );

    println!("\n{:>10} {:>12} {:>12}", "Size", "Serial", "Parallel");
    println!("{:-<36}", "");

    let iterations = 20;
    for size in [50, 100, 200, 400] {
        let serial_ms = time_serial(size, iterations);
        let parallel_ms = time_parallel(size, iterations);
        println!(
            "{:>10} {:>10.2}ms {:>10.2}ms",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms
        );
    }
}
