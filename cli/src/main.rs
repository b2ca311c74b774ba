//! GeoService CLI
//!
//! Terminal driver for the marketplace core: loads the configuration,
//! seeds a session and prints dashboards as JSON.
//!
//! ```sh
//! # Admin dashboard with the default config (~/.config/geoservice/config.toml)
//! geoservice admin
//!
//! # One client's dashboard, custom config
//! geoservice --config ./geoservice.toml client client-1
//!
//! # Walk a reservation through its lifecycle and print every event
//! geoservice demo
//!
//! # Validate config without seeding
//! geoservice --check
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{error, info};

use geoservice::config::AppConfig;
use geoservice::{init_tracing, Marketplace};

/// GeoService: local services marketplace core.
#[derive(Parser, Debug)]
#[command(
    name = "geoservice",
    version,
    about = "Local services marketplace core for Cameroon",
    long_about = "GeoService: reservations, provider moderation and dashboards \
                  for a local services marketplace.\n\n\
                  Default config: ~/.config/geoservice/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "GEOSERVICE_CONFIG")]
    config: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Skip the demo clients and reservations.
    #[arg(long)]
    no_demo: bool,

    /// Validate the configuration file and exit.
    #[arg(long)]
    check: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the admin dashboard.
    Admin,
    /// Print a client's dashboard.
    Client { id: String },
    /// Print a provider's dashboard.
    Provider { id: String },
    /// Book, accept and complete one reservation, printing each event.
    Demo {
        /// Catalog entry to book.
        #[arg(long, default_value = "electricite")]
        service: String,
        /// Client making the booking.
        #[arg(long, default_value = "client-1")]
        client: String,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.unwrap_or_else(AppConfig::resolve_path);

    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) if cli.check => return Err(e.into()),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if cli.no_demo {
        config.seed.demo_data = false;
    }

    init_tracing(&config);
    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Log level   : {} ({})", config.logging.level, config.logging.format);
        println!("   Event queue : {}", config.events.capacity);
        println!("   Demo data   : {}", config.seed.demo_data);
        println!(
            "   Catalog     : {}",
            if config.catalog.is_empty() {
                "built-in".to_string()
            } else {
                format!("{} entries", config.catalog.len())
            }
        );
        return Ok(());
    }

    let market = Marketplace::new(&config)?;

    match cli.command.unwrap_or(Command::Admin) {
        Command::Admin => print_json(&market.admin_view().snapshot()?)?,
        Command::Client { id } => print_json(&market.client_view(id).snapshot()?)?,
        Command::Provider { id } => print_json(&market.provider_view(id).snapshot()?)?,
        Command::Demo { service, client } => {
            let mut events = market.subscribe();

            let reservation = market.client_view(client).reserve(&service)?;
            let provider = market.provider_view(reservation.provider_id.clone());
            provider.accept(&reservation.id)?;
            if let Err(e) = provider.complete(&reservation.id) {
                error!(reservation_id = %reservation.id, error = %e, "Demo completion failed");
                return Err(e.into());
            }

            for message in events.drain() {
                println!("{}", message.to_json()?);
            }
            print_json(&market.statistics().admin()?)?;
        }
    }

    Ok(())
}
