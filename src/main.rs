//! Sigil - A Traefik label generator for Docker Compose files
//!
//! This is the main CLI entry point for Sigil.

use anyhow::Context;
use clap::{Parser, Subcommand};
use sigil::compose::ComposeParser;
use sigil::routing::{FieldEdit, RoutingConfig};
use sigil::session::generate;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Sigil - Traefik label generator for compose files
#[derive(Parser)]
#[command(name = "sigil")]
#[command(author = "Evoker Industries")]
#[command(version)]
#[command(about = "Annotate a compose service with Traefik routing labels", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an annotated compose file
    Generate {
        /// Compose file (searched in the working directory when omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Service name (defaults to the first service in the file)
        #[arg(short, long)]
        service: Option<String>,
        /// Backend port the load balancer forwards to
        #[arg(short, long)]
        port: Option<String>,
        /// Hostname matched by the router rule
        #[arg(long)]
        host: Option<String>,
        /// Path prefix matched by the router rule
        #[arg(long)]
        path_prefix: Option<String>,
        /// Attach the service to this network
        #[arg(short, long)]
        network: Option<String>,
        /// Declare the network as externally managed
        #[arg(long)]
        external: bool,
        /// Write output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the routing fields extracted from a compose file
    Inspect {
        /// Compose file (searched in the working directory when omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Output format (yaml or json)
        #[arg(long, default_value = "yaml")]
        format: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Generate {
            file,
            service,
            port,
            host,
            path_prefix,
            network,
            external,
            output,
        } => {
            let compose_file = resolve_compose_file(file)?;
            let doc = ComposeParser::parse_file(&compose_file)
                .with_context(|| format!("Failed to load {}", compose_file.display()))?;

            let mut config = RoutingConfig::from_document(&doc)?;
            if let Some(service) = service {
                config = config.with(FieldEdit::ServiceName(service));
            }
            if let Some(port) = port {
                config = config.with(FieldEdit::Port(port));
            }
            if let Some(host) = host {
                config = config.with(FieldEdit::Rule(host));
            }
            if let Some(path_prefix) = path_prefix {
                config = config.with(FieldEdit::Path(path_prefix));
            }
            if let Some(network) = network {
                config = config.with(FieldEdit::NetworkName(network));
            }
            if external {
                config = config.with(FieldEdit::NetworkExternal(true));
            }

            let rendered = generate(&doc, &config)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, rendered)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Wrote annotated compose file to {}", path.display());
                }
                None => print!("{}", rendered),
            }
        }

        Commands::Inspect { file, format } => {
            let compose_file = resolve_compose_file(file)?;
            let doc = ComposeParser::parse_file(&compose_file)
                .with_context(|| format!("Failed to load {}", compose_file.display()))?;
            let config = RoutingConfig::from_document(&doc)?;

            match format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&config)?),
                _ => print!("{}", serde_yaml::to_string(&config)?),
            }
        }
    }

    Ok(())
}

/// Use the given path, or probe the working directory for a compose file
fn resolve_compose_file(file: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    match file {
        Some(path) => Ok(path),
        None => {
            let cwd = std::env::current_dir()?;
            ComposeParser::find_compose_file(&cwd)
                .with_context(|| format!("No compose file found in {}", cwd.display()))
        }
    }
}
