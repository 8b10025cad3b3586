//! Binary entrypoint for the catshop CLI.
//!
//! Commands:
//! - `run` (default) - play the demo: convert gem, buy, equip, attack
//! - `init [--force]` - write a starter `catshop.toml`
//! - `catalog [--owned] [--json]` - list the configured shop items
//!
//! See the library crate docs for module-level details: `catshop::`.
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{debug, info};
use std::path::Path;

use catshop::config::Config;
use catshop::economy::{Cat, Catalog, Shop};
use catshop::logutil::{ColorMode, Console};
use catshop::script::run_demo;

#[derive(Parser)]
#[command(name = "catshop")]
#[command(about = "A cat, a shop, two currencies and some swords")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "catshop.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Never color console output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the demo shopping trip
    Run,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
    /// List the items in the configured catalog
    Catalog {
        /// Only show items the player already owns
        #[arg(long)]
        owned: bool,
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Init { force }) => init_config(&cli.config, *force, cli.verbose),
        Some(Commands::Catalog { owned, json }) => list_catalog(&cli, *owned, *json),
        Some(Commands::Run) | None => run(&cli),
    }
}

fn init_config(path: &str, force: bool, verbosity: u8) -> Result<()> {
    init_logging(&None, verbosity);
    Config::write_default(path, force)?;
    Console::stdout(ColorMode::Auto).line(&format!("Configuration file created at {}", path))?;
    Ok(())
}

/// Load config, start logging and open the console.
fn setup(cli: &Cli) -> Result<(Config, Console)> {
    let found = Path::new(&cli.config).exists();
    let config = Config::load_or_default(&cli.config)?;
    // The logger needs the configured level, so report the load afterwards
    init_logging(&Some(config.clone()), cli.verbose);
    if found {
        debug!("Loaded configuration from {}", cli.config);
    } else {
        info!("No config at {}; using built-in defaults", cli.config);
    }

    let mode = if cli.no_color {
        ColorMode::Never
    } else {
        config.console.color
    };
    Ok((config, Console::stdout(mode)))
}

fn run(cli: &Cli) -> Result<()> {
    let (config, mut console) = setup(cli)?;
    info!("Starting catshop v{}", env!("CARGO_PKG_VERSION"));
    let outcome = run_demo(&config, &mut console)?;
    debug!("Demo outcome: {:?}", outcome);
    Ok(())
}

fn list_catalog(cli: &Cli, owned: bool, json: bool) -> Result<()> {
    let (config, mut console) = setup(cli)?;
    let shown: Catalog = if owned {
        config
            .items
            .owned()
            .map(|(key, item)| (key.to_string(), item.clone()))
            .collect()
    } else {
        config.items.clone()
    };

    if json {
        console.line(&serde_json::to_string_pretty(&shown)?)?;
        return Ok(());
    }

    for line in Shop::listing(&shown) {
        console.line(&line)?;
    }
    console.line(&format!(
        "{} of {} items owned",
        Cat::owned_items_count(&config.items),
        config.items.len()
    ))?;
    Ok(())
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let base_level = match verbosity {
        0 => config
            .as_ref()
            .and_then(|cfg| cfg.logging.level.parse().ok())
            .unwrap_or(log::LevelFilter::Warn),
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);

    let log_file = config
        .as_ref()
        .and_then(|cfg| cfg.logging.file.as_ref())
        .and_then(|file| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(file)
                .ok()
        });

    if let Some(f) = log_file {
        let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
        // Tee to the console only in an interactive terminal
        let is_tty = atty::is(atty::Stream::Stderr);

        builder.format(move |fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            let line = format!("{} [{}] {}", ts, record.level(), record.args());

            if let Ok(mut guard) = write_mutex.lock() {
                let _ = writeln!(guard, "{}", line);
            }

            if is_tty {
                writeln!(fmt, "{}", line)
            } else {
                Ok(())
            }
        });
    } else {
        builder.format(|fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
        });
    }
    let _ = builder.try_init();
}
