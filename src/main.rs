//! Command line front end for the Game of Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use life_sim::{
    build_simulation,
    config::{CliOverrides, OutputFormat, Settings},
    game_of_life::{create_example_patterns, load_pattern_from_file, try_count_live_neighbors},
    scheduler::Scheduler,
    utils::{ColorOutput, GridFormatter},
};
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::time::Instant;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "life_sim")]
#[command(about = "Bounded Conway's Game of Life simulator")]
#[command(version = "0.1.0")]
struct Cli {
    /// Log engine activity (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation on a timer.
    ///
    /// The run stops only once the generation limit is reached.
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Pattern file (overrides config)
        #[arg(short, long)]
        pattern: Option<PathBuf>,

        /// Number of generations to run (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Steps per second, clamped to at least 1 (overrides config)
        #[arg(short, long, allow_negative_numbers = true)]
        rate: Option<i64>,

        /// Grid width (overrides config)
        #[arg(long)]
        width: Option<usize>,

        /// Grid height (overrides config)
        #[arg(long)]
        height: Option<usize>,

        /// Swap width and height
        #[arg(long)]
        swap: bool,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Print every generation instead of only the last
        #[arg(long)]
        show_all: bool,
    },

    /// Step the simulation by hand, without timing
    Step {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Pattern file (overrides config)
        #[arg(short, long)]
        pattern: Option<PathBuf>,

        /// Number of steps
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Grid width (overrides config)
        #[arg(long)]
        width: Option<usize>,

        /// Grid height (overrides config)
        #[arg(long)]
        height: Option<usize>,
    },

    /// Show the live neighbour count of one cell
    Inspect {
        /// Pattern file to inspect
        #[arg(short, long)]
        pattern: PathBuf,

        /// Column
        #[arg(short, allow_negative_numbers = true)]
        x: isize,

        /// Row
        #[arg(short, allow_negative_numbers = true)]
        y: isize,
    },

    /// Create a default configuration and example patterns
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run {
            config,
            pattern,
            generations,
            rate,
            width,
            height,
            swap,
            format,
            show_all,
        } => {
            let overrides = CliOverrides {
                width,
                height,
                swap_dimensions: swap,
                steps_per_second: rate,
                generations,
                pattern_file: pattern,
                format,
                show_every_generation: show_all,
            };
            run_command(config, overrides)
        }
        Commands::Step {
            config,
            pattern,
            count,
            width,
            height,
        } => {
            let overrides = CliOverrides {
                width,
                height,
                pattern_file: pattern,
                ..Default::default()
            };
            step_command(config, overrides, count)
        }
        Commands::Inspect { pattern, x, y } => inspect_command(pattern, x, y),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn load_settings(config_path: &Path, overrides: &CliOverrides) -> Result<Settings> {
    if !config_path.exists() {
        eprintln!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
    }
    let mut settings = Settings::load_or_default(config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    settings.merge_with_cli(overrides);
    settings.validate().context("Configuration validation failed")?;
    Ok(settings)
}

fn run_command(config_path: PathBuf, overrides: CliOverrides) -> Result<()> {
    let settings = load_settings(&config_path, &overrides)?;
    let mut sim = build_simulation(&settings)?;
    let format = settings.output.format;
    let show_all = settings.output.show_every_generation;

    if format == OutputFormat::Text {
        println!(
            "{}",
            ColorOutput::info(&format!(
                "Running {} generations at {} steps/s",
                settings.schedule.generations,
                settings.schedule.steps_per_second.steps_per_second()
            ))
        );
    }
    println!("{}", GridFormatter::render(&sim, format)?);

    let mut scheduler = Scheduler::new(settings.schedule.steps_per_second);
    let cancel = AtomicBool::new(false);
    let mut render_error = None;
    let start_time = Instant::now();

    let taken = scheduler.run(&mut sim, settings.schedule.generations, &cancel, |sim| {
        if !show_all || render_error.is_some() {
            return;
        }
        match GridFormatter::render(sim, format) {
            Ok(frame) => println!("{}", frame),
            Err(err) => render_error = Some(err),
        }
    })?;

    if let Some(err) = render_error {
        return Err(err.context("Failed to render generation"));
    }
    if !show_all {
        println!("{}", GridFormatter::render(&sim, format)?);
    }

    if format == OutputFormat::Text {
        println!(
            "{}",
            ColorOutput::success(&format!(
                "Ran {} generation(s) in {:.3}s",
                taken,
                start_time.elapsed().as_secs_f64()
            ))
        );
    }

    Ok(())
}

fn step_command(config_path: PathBuf, overrides: CliOverrides, count: usize) -> Result<()> {
    let settings = load_settings(&config_path, &overrides)?;
    let mut sim = build_simulation(&settings)?;
    let mut scheduler = Scheduler::new(settings.schedule.steps_per_second);

    for _ in 0..count {
        scheduler.manual_step(&mut sim)?;
    }

    println!("{}", GridFormatter::render(&sim, settings.output.format)?);
    Ok(())
}

fn inspect_command(pattern_path: PathBuf, x: isize, y: isize) -> Result<()> {
    let pattern = load_pattern_from_file(&pattern_path)?;

    let neighbors = try_count_live_neighbors(&pattern, x, y)
        .with_context(|| format!("Cannot inspect ({}, {})", x, y))?;
    let alive = pattern.get(x, y)?;

    println!("{}", GridFormatter::format_grid_with_coords(&pattern));
    println!(
        "Cell ({}, {}) is {} with {} living neighbour(s)",
        x,
        y,
        if alive { "alive" } else { "dead" },
        neighbors
    );
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
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_patterns(&patterns_dir).context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", patterns_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit {}", config_path.display());
    println!("2. Run: life_sim run --pattern {}", patterns_dir.join("glider.txt").display());

    Ok(())
}
