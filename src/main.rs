#![warn(clippy::all)]

use anyhow::{Context, Result};
use clap::Parser;
use sparse_life::{
    read_life106, render, write_life106, CellOrder, Config, GenerationPacer, Glyphs, Grid,
    NiceInt, Viewport, ViewportMode,
};
use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::PathBuf,
    time::Duration,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Runs Conway's Game of Life on a Life 1.06 pattern and writes the result.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Life 1.06 file to read (stdin if omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// File to write the final generation to (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of generations to simulate
    #[arg(short, long, default_value_t = Config::DEFAULT_GENERATIONS)]
    generations: u64,

    /// Pause between generations in milliseconds
    #[arg(long, default_value_t = Config::DEFAULT_DELAY_MS)]
    delay_ms: u64,

    #[arg(long, default_value_t = Config::DEFAULT_MIN_X, allow_hyphen_values = true)]
    min_x: i64,
    #[arg(long, default_value_t = Config::DEFAULT_MAX_X, allow_hyphen_values = true)]
    max_x: i64,
    #[arg(long, default_value_t = Config::DEFAULT_MIN_Y, allow_hyphen_values = true)]
    min_y: i64,
    #[arg(long, default_value_t = Config::DEFAULT_MAX_Y, allow_hyphen_values = true)]
    max_y: i64,

    /// Draw the bounding box of the initial pattern instead of the fixed viewport
    #[arg(long)]
    fit: bool,

    /// Glyph for live cells
    #[arg(long, default_value_t = Glyphs::default().alive)]
    alive: char,

    /// Glyph for dead cells
    #[arg(long, default_value_t = Glyphs::default().dead)]
    dead: char,

    /// Write cells in hash order instead of sorted by x, then y
    #[arg(long)]
    unordered: bool,

    /// Worker threads per generation (0 runs the sequential engine)
    #[arg(short, long, default_value_t = 0)]
    threads: usize,

    /// Do not draw frames
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn into_config(self) -> Result<Config> {
        let viewport = if self.fit {
            ViewportMode::Fit
        } else {
            let viewport = Viewport::new(self.min_x, self.max_x, self.min_y, self.max_y)?;
            ViewportMode::Fixed(viewport)
        };
        Ok(Config {
            generations: self.generations,
            delay: Duration::from_millis(self.delay_ms),
            viewport,
            glyphs: Glyphs {
                alive: self.alive,
                dead: self.dead,
            },
            order: if self.unordered {
                CellOrder::Unordered
            } else {
                CellOrder::Sorted
            },
            threads: self.threads,
            quiet: self.quiet,
        })
    }
}

fn read_grid(input: Option<&PathBuf>) -> Result<Grid> {
    let grid = match input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
            read_life106(BufReader::new(file))
                .with_context(|| format!("Failed to read {}", path.display()))?
        }
        None => read_life106(io::stdin().lock()).context("Failed to read stdin")?,
    };
    tracing::info!(population = %NiceInt::from(grid.population()), "pattern loaded");
    Ok(grid)
}

fn write_grid(output: Option<&PathBuf>, grid: &Grid, order: CellOrder) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_life106(BufWriter::new(file), grid, order)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        None => {
            write_life106(io::stdout().lock(), grid, order).context("Failed to write stdout")?
        }
    }
    tracing::info!(population = %NiceInt::from(grid.population()), "pattern saved");
    Ok(())
}

fn draw(
    out: &mut impl Write,
    title: &str,
    grid: &Grid,
    viewport: &Viewport,
    glyphs: &Glyphs,
) -> Result<()> {
    writeln!(out, "{title}:")?;
    writeln!(out, "{}", render(grid, viewport, glyphs))?;
    out.flush()?;
    Ok(())
}

fn run(args: Args) -> Result<()> {
    let input = args.input.clone();
    let output = args.output.clone();
    let config = args.into_config()?;

    let mut grid = read_grid(input.as_ref())?;
    let engine = config.engine();
    let viewport = match config.viewport {
        ViewportMode::Fixed(viewport) => viewport,
        ViewportMode::Fit => {
            let viewport = Viewport::around(&grid);
            if let Some((lo, hi)) = grid.bounding_box() {
                if !viewport.covers(lo, hi) {
                    tracing::warn!(
                        width = %NiceInt::from(hi.x.abs_diff(lo.x)),
                        height = %NiceInt::from(hi.y.abs_diff(lo.y)),
                        "pattern is too wide to fit, drawing its minimum corner only"
                    );
                }
            }
            viewport
        }
    };
    tracing::debug!(
        engine = engine.name(),
        ?viewport,
        generations = config.generations,
        "starting"
    );

    let mut pacer = GenerationPacer::new(config.delay);
    let mut stdout = io::stdout().lock();
    for generation in 0..config.generations {
        if !config.quiet {
            let title = format!("Generation {generation}");
            draw(&mut stdout, &title, &grid, &viewport, &config.glyphs)?;
        }
        pacer.delay();
        grid = engine.next_generation(&grid);
        tracing::debug!(
            generation = generation + 1,
            population = %NiceInt::from(grid.population()),
            rate = pacer.rate(),
            "advanced"
        );
    }
    if !config.quiet {
        let title = format!("Generation {}", config.generations);
        draw(&mut stdout, &title, &grid, &viewport, &config.glyphs)?;
    }
    drop(stdout);

    write_grid(output.as_ref(), &grid, config.order)
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    run(Args::parse())
}
