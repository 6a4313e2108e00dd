//! dent CLI — headless simulation, benchmarking and debugging.
//!
//! ```bash
//! dent simulate --config press.toml --export frames.json --snapshot end.bin
//! dent benchmark --scenario all --output results.csv
//! dent inspect end.bin
//! dent validate press.toml
//! ```

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod commands;

#[derive(Parser)]
#[command(name = "dent")]
#[command(version, about = "dent — probe-driven local mesh deformation")]
struct Cli {
    /// Logging verbosity (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation from a config file.
    Simulate {
        /// Path to run config (TOML).
        #[arg(short, long, default_value = "simulation.toml")]
        config: String,

        /// Write every frame (positions and probe) to this JSON file.
        #[arg(short, long)]
        export: Option<String>,

        /// Keep one exported frame out of every N.
        #[arg(long, default_value_t = 1)]
        frame_stride: usize,

        /// Write the final geometry cache as a binary snapshot.
        #[arg(short, long)]
        snapshot: Option<String>,

        /// Write the final deformed mesh as JSON.
        #[arg(long)]
        mesh_out: Option<String>,
    },

    /// Run benchmark suite.
    Benchmark {
        /// Which scenario to run (grid_press, sphere_sweep, dense_sheet, all).
        #[arg(short, long, default_value = "all")]
        scenario: String,

        /// Output file path (CSV, or JSON with --json).
        #[arg(short, long)]
        output: Option<String>,

        /// Emit JSON instead of CSV.
        #[arg(long)]
        json: bool,

        /// Override the number of frames per scenario.
        #[arg(long)]
        frames: Option<u32>,
    },

    /// Inspect a state snapshot file.
    Inspect {
        /// Path to snapshot file.
        path: String,
    },

    /// Validate a run config (.toml) or a mesh (.json).
    Validate {
        /// Path to config or mesh file.
        path: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install logger: {e}");
    }

    let result = match cli.command {
        Commands::Simulate {
            config,
            export,
            frame_stride,
            snapshot,
            mesh_out,
        } => commands::simulate(&commands::SimulateArgs {
            config_path: &config,
            export_path: export.as_deref(),
            frame_stride,
            snapshot_path: snapshot.as_deref(),
            mesh_out: mesh_out.as_deref(),
        }),
        Commands::Benchmark {
            scenario,
            output,
            json,
            frames,
        } => commands::benchmark(&scenario, output.as_deref(), json, frames),
        Commands::Inspect { path } => commands::inspect(&path),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
