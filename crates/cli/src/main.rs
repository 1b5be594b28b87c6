mod config;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use zid::{CaseMode, ZidError};

use crate::config::CliConfig;

#[derive(Parser)]
#[command(name = "zid")]
#[command(about = "Generate and check Zen Identifiers")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate new identifiers
    New {
        /// Bit length, a positive multiple of 8 (default from ZID_DEFAULT_BITS, else 128)
        #[arg(long)]
        bits: Option<usize>,
        /// How many identifiers to print
        #[arg(long, default_value_t = 1)]
        count: usize,
        /// Print 128-bit identifiers in dashed 8-4-4-16 form
        #[arg(long)]
        uuid_style: bool,
    },
    /// Check whether text is a valid identifier
    Check {
        text: String,
        /// Required bit length
        #[arg(long)]
        bits: Option<usize>,
        /// Also accept uppercase hex
        #[arg(long)]
        relaxed: bool,
    },
    /// Convert 32 hex characters to dashed 8-4-4-16 form
    ToUuid { hex: String },
    /// Convert dashed UUID-style text to canonical hex
    FromUuid { dashed: String },
}

/// `--bits` wins; the environment is only read when the flag is absent.
fn resolve_bits(
    bits: Option<usize>,
    load_config: impl FnOnce() -> anyhow::Result<CliConfig>,
) -> anyhow::Result<usize> {
    match bits {
        Some(bits) => Ok(bits),
        None => Ok(load_config()?.default_bits()),
    }
}

/// `--relaxed` wins; the environment is only read when the flag is absent.
fn resolve_case_mode(
    relaxed: bool,
    load_config: impl FnOnce() -> anyhow::Result<CliConfig>,
) -> anyhow::Result<CaseMode> {
    if relaxed {
        return Ok(CaseMode::Relaxed);
    }
    Ok(load_config()?.case_mode())
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("zid=info".parse()?))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::New {
            bits,
            count,
            uuid_style,
        }) => {
            let bits = resolve_bits(bits, CliConfig::from_env)?;
            for _ in 0..count {
                let id = zid::create(bits).context("failed to generate identifier")?;
                if uuid_style {
                    println!("{}", id.to_uuid_style()?);
                } else {
                    println!("{}", id);
                }
            }
        }
        Some(Commands::Check {
            text,
            bits,
            relaxed,
        }) => {
            let mode = resolve_case_mode(relaxed, CliConfig::from_env)?;
            match zid::validate(&text, bits, mode) {
                Ok(()) => println!("valid"),
                Err(ZidError::MalformedIdentifier { violation, .. }) => {
                    println!("invalid: {}", violation);
                    std::process::exit(1);
                }
                Err(e) => return Err(e.into()),
            }
        }
        Some(Commands::ToUuid { hex }) => {
            println!("{}", zid::to_uuid_style(&hex)?);
        }
        Some(Commands::FromUuid { dashed }) => {
            let hex = zid::from_uuid_style(&dashed)?;
            if !zid::is_valid(&hex, Some(zid::UUID_BITS)) {
                tracing::warn!("converted text is not valid hex: {}", hex);
            }
            println!("{}", hex);
        }
        None => {
            println!("Use 'zid --help' for commands");
        }
    }

    Ok(())
}
