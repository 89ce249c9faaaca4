use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use adaptive_layout::store::SqliteBackend;
use adaptive_layout::{
    Column, LayoutError, LayoutStore, TableConfig, TableLayoutEngine, UnsupportedSurface, paths,
};
use clap::{Parser, Subcommand};
use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid column description: {0}")]
    Columns(#[from] serde_json::Error),
}

/// Inspect and manage persisted table layouts.
#[derive(Parser, Debug)]
#[command(name = "adaptive-layout", version)]
struct Args {
    /// Layout database to use instead of the platform default.
    #[arg(long, global = true, value_name = "PATH")]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List stored layout keys.
    Keys {
        /// Only keys starting with this prefix.
        prefix: Option<String>,
    },
    /// Print the widths and order stored for a table key.
    Show { key: String },
    /// Forget the layout of a table key.
    Reset { key: String },
    /// Print the schema fingerprint of a column description file.
    Fingerprint { columns: PathBuf },
    /// Resolve the effective layout of a column description file.
    Resolve {
        columns: PathBuf,
        /// Explicit storage key.
        #[arg(long)]
        key: Option<String>,
        /// Route of the hosting page.
        #[arg(long)]
        route: Option<String>,
        /// Row identity field.
        #[arg(long)]
        row_key: Option<String>,
    },
}

fn init_logging() {
    let path = paths::log_file().unwrap_or_else(|| PathBuf::from("adaptive-layout.log"));
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    match File::create(&path) {
        Ok(file) => {
            if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), file) {
                eprintln!("Warning: logging disabled: {}", e);
            }
        }
        Err(e) => eprintln!("Warning: cannot create log file {}: {}", path.display(), e),
    }
}

fn open_store(path: Option<&Path>) -> Result<LayoutStore, CliError> {
    let store = match path {
        Some(path) => LayoutStore::new(SqliteBackend::open(path)?),
        None => LayoutStore::open_default()?,
    };
    Ok(store)
}

fn read_columns(path: &Path) -> Result<Vec<Column>, CliError> {
    let raw = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&raw)?)
}

fn run(args: Args) -> Result<(), CliError> {
    match args.command {
        Command::Keys { prefix } => {
            let store = open_store(args.store.as_deref())?;
            for key in store.keys(prefix.as_deref().unwrap_or("")) {
                println!("{}", key);
            }
        }
        Command::Show { key } => {
            let store = open_store(args.store.as_deref())?;
            let widths = store.read_widths(&key);
            let order = store.read_order(&key);
            println!("widths: {}", serde_json::to_string_pretty(&widths)?);
            println!("order:  {}", serde_json::to_string(&order)?);
        }
        Command::Reset { key } => {
            let store = open_store(args.store.as_deref())?;
            store.clear(&key);
            println!("Cleared layout for '{}'", key);
        }
        Command::Fingerprint { columns } => {
            let columns = read_columns(&columns)?;
            println!("{}", adaptive_layout::fingerprint(&columns));
        }
        Command::Resolve {
            columns,
            key,
            route,
            row_key,
        } => {
            let columns = read_columns(&columns)?;
            let config = TableConfig {
                storage_key: key,
                route,
                row_key,
                ..TableConfig::default()
            };
            let store = open_store(args.store.as_deref())?;
            let engine = TableLayoutEngine::new(columns, config, store, Arc::new(UnsupportedSurface));
            println!("{}", serde_json::to_string_pretty(&engine.layout())?);
        }
    }
    Ok(())
}

fn main() {
    init_logging();

    if let Err(e) = run(Args::parse()) {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
