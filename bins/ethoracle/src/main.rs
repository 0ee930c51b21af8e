//! ETH price oracle CLI
//!
//! Entry point for working with an oracle configuration: generate a
//! starter file, validate one, or resolve prices through the feeds it
//! declares. Live feeds need a process that wires real feed objects;
//! this binary resolves through the static entries only.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use common::AssetId;
use config::{generate_default_config, load_config, save_config, validate_config};
use observability::{init_logging, LogFormat};
use oracle::build_resolver;
use std::path::PathBuf;
use tracing::{error, info, warn};

#[derive(Parser, Debug)]
#[command(name = "ethoracle")]
#[command(about = "ETH-denominated price oracle")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve prices for the configured assets
    Query {
        /// Path to the configuration file
        #[arg(short, long, default_value = "oracle.yaml")]
        config: PathBuf,

        /// Resolve only this asset id instead of every configured one
        #[arg(short, long)]
        asset: Option<String>,

        /// Report ETH denominated in the asset instead of the forward price
        #[arg(long)]
        inverse: bool,
    },

    /// Validate a configuration without resolving anything
    Validate {
        /// Path to the configuration file
        #[arg(short, long, default_value = "oracle.yaml")]
        config: PathBuf,
    },

    /// Write a starter configuration file
    Init {
        /// Output path for the new configuration file
        #[arg(short, long, default_value = "oracle.yaml")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Query { config, asset, inverse } => query_command(config, asset, inverse),
        Commands::Validate { config } => validate_command(config),
        Commands::Init { output } => init_command(output),
    }
}

fn report_validation(cfg: &config::OracleConfig) -> Result<()> {
    let report = validate_config(cfg);

    for warning in &report.warnings {
        warn!(field = %warning.field, "{}", warning.message);
    }
    if !report.is_valid() {
        for err in &report.errors {
            error!("{}", err);
        }
        anyhow::bail!("configuration has {} error(s)", report.errors.len());
    }
    Ok(())
}

fn query_command(config_path: PathBuf, asset: Option<String>, inverse: bool) -> Result<()> {
    let cfg = load_config(&config_path)?;
    init_log_from(&cfg)?;
    report_validation(&cfg)?;

    let resolver = build_resolver(&cfg)?;

    let assets: Vec<(String, AssetId)> = match asset {
        Some(raw) => {
            let id: AssetId = raw
                .parse()
                .with_context(|| format!("invalid asset id '{}'", raw))?;
            vec![(raw, id)]
        }
        None => cfg
            .feeds
            .iter()
            .map(|feed| {
                let id: AssetId = feed
                    .asset
                    .parse()
                    .with_context(|| format!("feed '{}': invalid asset address", feed.label()))?;
                Ok((feed.label().to_string(), id))
            })
            .collect::<Result<_>>()?,
    };

    for (label, id) in assets {
        let result = if inverse {
            resolver.eth_price_in_asset(id)
        } else {
            resolver.asset_price(id)
        };
        match result {
            Ok(price) => println!("{}: {}", label, price),
            Err(err) => println!("{}: error: {}", label, err),
        }
    }
    Ok(())
}

fn validate_command(config_path: PathBuf) -> Result<()> {
    let cfg = load_config(&config_path)?;
    init_log_from(&cfg)?;
    report_validation(&cfg)?;

    println!("Configuration is valid ({} feed entries)", cfg.feeds.len());
    Ok(())
}

fn init_command(output: PathBuf) -> Result<()> {
    if output.exists() {
        anyhow::bail!("refusing to overwrite existing file {:?}", output);
    }
    let cfg = generate_default_config();
    save_config(&cfg, &output)?;
    println!("Wrote starter configuration to {:?}", output);
    info!(path = ?output, "starter configuration written");
    Ok(())
}

fn init_log_from(cfg: &config::OracleConfig) -> Result<()> {
    let format = match cfg.service.log_format.as_deref() {
        Some(raw) => raw
            .parse::<LogFormat>()
            .map_err(|err| anyhow::anyhow!(err))?,
        None => LogFormat::default(),
    };
    init_logging(&cfg.service.name, format)
}
