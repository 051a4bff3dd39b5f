//! Offline management CLI for the storefront's route configuration.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use storefront::config::{load_config, ConfigError, StorefrontConfig};
use storefront::routing::RouteTable;

#[derive(Parser)]
#[command(name = "storefront-cli")]
#[command(about = "Management CLI for the storefront server", long_about = None)]
struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "storefront.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the configuration file
    Check,
    /// List the compiled route table in match order
    Routes,
    /// Resolve a request path against the route table
    Match {
        /// Request path, e.g. /product/42
        path: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check => match load_config(&cli.config) {
            Ok(config) => {
                println!(
                    "configuration OK: {} route(s), fallback '{}'",
                    config.routes.len(),
                    config.dispatch.fallback_route
                );
            }
            Err(ConfigError::Validation(errors)) => {
                eprintln!("configuration invalid:");
                for error in &errors {
                    eprintln!("  - {}", error);
                }
                std::process::exit(1);
            }
            Err(err) => {
                eprintln!("Error: {}", err);
                std::process::exit(1);
            }
        },
        Commands::Routes => {
            let table = table_from(&cli.config)?;
            for (pattern, target) in table.rules() {
                println!("{}  →  {}", pattern, target);
            }
        }
        Commands::Match { path } => {
            let table = table_from(&cli.config)?;
            match table.resolve(&path) {
                Some(route) => println!("{}", serde_json::to_string_pretty(&route)?),
                None => {
                    eprintln!("no route matched '{}'", path);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

/// Compile the route table from the config file, falling back to the
/// stock configuration when the file does not exist.
fn table_from(path: &PathBuf) -> Result<RouteTable, Box<dyn std::error::Error>> {
    let config = if path.exists() {
        load_config(path)?
    } else {
        StorefrontConfig::default()
    };

    Ok(RouteTable::from_rules(&config.routes)?)
}
