//! Command line host for the toroidal Game of Life engine

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;
use torus_life::{
    build_simulation,
    config::{CliOverrides, OutputFormat, Settings},
    game_of_life::{
        create_example_grids, io::load_snapshot_from_file, io::save_snapshot_to_file,
        load_grid_from_file, patterns, save_grid_to_file, GridSnapshot, Simulation,
    },
    utils::{format_grid_with_coords, ColorOutput, FrameRenderer},
};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "torus_life")]
#[command(about = "Conway's Game of Life on a wrapping grid")]
#[command(version = "0.1.0")]
struct Cli {
    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Animate a simulation in the terminal
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Grid rows (overrides config)
        #[arg(long)]
        height: Option<usize>,

        /// Grid columns (overrides config)
        #[arg(long)]
        width: Option<usize>,

        /// Generations per second (overrides config)
        #[arg(short, long)]
        tps: Option<u32>,

        /// Stop after this many generations (overrides config)
        #[arg(short, long)]
        generations: Option<u64>,

        /// Named starting pattern (overrides config)
        #[arg(short, long)]
        pattern: Option<String>,

        /// Text grid file to start from (overrides config)
        #[arg(short, long)]
        seed: Option<PathBuf>,

        /// Compute generations on all cores
        #[arg(long)]
        parallel: bool,

        /// Save the final generation here
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Evolve a grid file without rendering
    Step {
        /// Input grid (`.txt` of 0/1 rows, or a `.json` snapshot)
        input: PathBuf,

        /// Number of generations
        #[arg(short, long, default_value_t = 1)]
        generations: u64,

        /// Output file; prints the grid when absent
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = FormatArg::Text)]
        format: FormatArg,
    },

    /// List the built-in starting patterns
    Patterns,

    /// Create a default configuration and example pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Commands::Run {
            config,
            height,
            width,
            tps,
            generations,
            pattern,
            seed,
            parallel,
            output,
        } => {
            let overrides = CliOverrides {
                height,
                width,
                ticks_per_second: tps,
                generations,
                pattern,
                seed_file: seed,
                parallel,
                output,
            };
            run_command(config, overrides)
        }
        Commands::Step {
            input,
            generations,
            output,
            format,
        } => step_command(input, generations, output, format.into()),
        Commands::Patterns => patterns_command(),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn init_tracing(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(format!("torus_life={level}").parse()?),
        )
        .init();
    Ok(())
}

fn load_settings(config_path: &Path) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        warn!(path = %config_path.display(), "config file not found, using defaults");
        Ok(Settings::default())
    }
}

fn run_command(config_path: PathBuf, overrides: CliOverrides) -> Result<()> {
    let mut settings = load_settings(&config_path)?;
    settings.merge_with_cli(&overrides);
    settings
        .validate()
        .context("Configuration validation failed")?;

    let mut simulation = build_simulation(&settings)?;
    let renderer = FrameRenderer::new(settings.display.clone());
    let interval = settings.simulation.tick_interval();
    let limit = settings.simulation.generations;

    info!(
        height = simulation.height(),
        width = simulation.width(),
        tps = settings.simulation.ticks_per_second,
        ?limit,
        "starting simulation"
    );

    let mut stdout = std::io::stdout().lock();
    loop {
        let frame_start = Instant::now();
        renderer
            .draw(&mut stdout, &simulation)
            .context("Failed to draw frame")?;

        if limit.is_some_and(|n| simulation.generation() >= n) {
            break;
        }

        simulation.tick();

        let elapsed = frame_start.elapsed();
        match interval.checked_sub(elapsed) {
            Some(remaining) => std::thread::sleep(remaining),
            None => debug!(?elapsed, ?interval, "generation overran tick interval"),
        }
    }

    info!(
        generation = simulation.generation(),
        living = simulation.grid().living_count(),
        "simulation finished"
    );

    if let Some(path) = &settings.output.final_state_file {
        save_state(&simulation, path, settings.output.format)?;
        println!(
            "{}",
            ColorOutput::success(&format!("Final state saved to {}", path.display()))
        );
    }

    Ok(())
}

fn load_any_grid(path: &Path) -> Result<Simulation> {
    let is_json = path.extension().is_some_and(|ext| ext == "json");
    if is_json {
        let snapshot = load_snapshot_from_file(path)?;
        Ok(Simulation::from_grid(snapshot.to_grid()?))
    } else {
        Ok(Simulation::from_grid(load_grid_from_file(path)?))
    }
}

fn save_state(simulation: &Simulation, path: &Path, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => save_grid_to_file(simulation.grid(), path),
        OutputFormat::Json => save_snapshot_to_file(
            &GridSnapshot::capture(simulation.grid(), simulation.generation()),
            path,
        ),
    }
}

fn step_command(
    input: PathBuf,
    generations: u64,
    output: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let mut simulation = load_any_grid(&input)
        .with_context(|| format!("Failed to load grid from {}", input.display()))?;

    let start = Instant::now();
    simulation.run(generations);
    debug!(generations, elapsed = ?start.elapsed(), "evolved grid");

    match output {
        Some(path) => {
            save_state(&simulation, &path, format)?;
            println!(
                "{}",
                ColorOutput::success(&format!(
                    "Generation {} saved to {}",
                    simulation.generation(),
                    path.display()
                ))
            );
        }
        None => {
            println!("Generation {}:", simulation.generation());
            print!("{}", format_grid_with_coords(simulation.grid()));
            println!("Living cells: {}", simulation.grid().living_count());
        }
    }

    Ok(())
}

fn patterns_command() -> Result<()> {
    println!("{}", ColorOutput::info("Built-in patterns:"));
    println!("{:<20} {:>5} {:>9}  Description", "Name", "Cells", "Min size");
    for pattern in patterns::ALL {
        let (height, width) = pattern.bounding_box();
        println!(
            "{:<20} {:>5} {:>9}  {}",
            pattern.name,
            pattern.cell_count(),
            format!("{height}x{width}"),
            pattern.description
        );
    }
    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let patterns_dir = directory.join("patterns");

    for dir in [&config_dir, &patterns_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Skipped: {} (already exists)",
                config_path.display()
            ))
        );
    }

    create_example_grids(&patterns_dir).context("Failed to create example grids")?;
    println!("Created example patterns in: {}", patterns_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit {}", config_path.display());
    println!(
        "2. Run: torus_life run --seed {}",
        patterns_dir.join("glider.txt").display()
    );

    Ok(())
}
