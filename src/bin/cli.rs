//! filekv CLI
//!
//! Command-line embedder for the filekv storage core. Translates argv into
//! core calls and handles snapshot load/save around them; holds no storage
//! logic of its own.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use filekv::{Config, Driver};
use tracing_subscriber::{fmt, EnvFilter};

/// filekv CLI
#[derive(Parser, Debug)]
#[command(name = "filekv-cli")]
#[command(about = "Embedded key-value store with per-key files and an LRU cache")]
#[command(version)]
struct Args {
    /// Data directory
    #[arg(short, long, default_value = "./filekv_data")]
    data_dir: PathBuf,

    /// LRU cache capacity (entries)
    #[arg(short, long, default_value = "128")]
    cache_capacity: usize,

    /// Ordered index fanout hint
    #[arg(short = 'f', long, default_value = "16")]
    index_fanout: usize,

    /// Snapshot file path (default: <data_dir>/snapshot.json)
    #[arg(short, long)]
    snapshot: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Get a value by key
    Get {
        /// The key to get
        key: String,
    },

    /// Set a key-value pair
    Set {
        /// The key to set
        key: String,

        /// The value to set
        value: String,
    },

    /// Delete a key
    Del {
        /// The key to delete
        key: String,
    },

    /// Remove orphaned temp files from the data directory
    Compact,
}

fn main() -> ExitCode {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,filekv=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();
    let snapshot_path = args
        .snapshot
        .clone()
        .unwrap_or_else(|| args.data_dir.join("snapshot.json"));

    let config = Config::builder()
        .data_dir(&args.data_dir)
        .cache_capacity(args.cache_capacity)
        .index_fanout(args.index_fanout)
        .build();

    let driver = match Driver::open(config) {
        Ok(d) => d,
        Err(e) => {
            tracing::error!("failed to open driver: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Warm the index from the last snapshot before doing anything else.
    // A missing or unreadable snapshot is not fatal: the index refills
    // lazily from disk.
    if snapshot_path.exists() {
        if let Err(e) = driver.load_snapshot(&snapshot_path) {
            tracing::warn!("failed to load snapshot: {}", e);
        }
    }

    let outcome = run_command(&driver, &args.command);

    // Persist the index for the next warm start
    if let Err(e) = driver.save_snapshot(&snapshot_path) {
        tracing::warn!("failed to save snapshot: {}", e);
    }

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_command(driver: &Driver, command: &Commands) -> filekv::Result<()> {
    match command {
        Commands::Get { key } => {
            let value = driver.get(key.as_bytes())?;
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&value)?;
            stdout.write_all(b"\n")?;
            Ok(())
        }
        Commands::Set { key, value } => driver.put(key.as_bytes(), value.as_bytes()),
        Commands::Del { key } => driver.delete(key.as_bytes()),
        Commands::Compact => driver.compact(),
    }
}
