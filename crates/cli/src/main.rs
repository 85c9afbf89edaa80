//! tabletctl - Tablet to Monitor Mapping CLI
//!
//! Maps graphics tablet input areas onto a monitor via the `xsetwacom` and
//! `xrandr` utilities, optionally shrinking the tablet area so it matches
//! the monitor's aspect ratio.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod error;
mod output;
mod prompt;
mod run;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "tabletctl")]
#[command(about = "Map graphics tablets onto monitors with aspect-correct input areas")]
#[command(version)]
#[command(long_about = "
tabletctl maps Wacom-style graphics tablets onto a monitor using the
xsetwacom and xrandr utilities. By default every connected tablet device is
mapped onto the primary monitor, and each device's input area is shrunk to
the monitor's aspect ratio so pen strokes are never distorted.

Use --interactive to pick the devices and the monitor by hand. Use --json
for machine-readable output suitable for scripting.
")]
struct Cli {
    /// Pick devices, monitor and options interactively
    #[arg(short, long)]
    interactive: bool,

    /// Shrink each tablet area to the monitor's aspect ratio
    #[arg(
        short,
        long,
        value_name = "BOOL",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    preserve_aspect_ratio: bool,

    /// Output format (human-readable or JSON)
    #[arg(long, help = "Output in JSON format for machine parsing")]
    json: bool,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// xsetwacom program to invoke (for testing)
    #[arg(long, env = "TABLETCTL_XSETWACOM", hide = true)]
    xsetwacom: Option<String>,

    /// xrandr program to invoke (for testing)
    #[arg(long, env = "TABLETCTL_XRANDR", hide = true)]
    xrandr: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("tabletctl={},tabletmap_engine={}", log_level, log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Handle errors with appropriate exit codes
    match run::execute(&cli) {
        Ok(()) => Ok(()),
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }

            let exit_code = match e.downcast_ref::<CliError>() {
                Some(CliError::NoDevices) => 2,
                Some(CliError::NoMonitors) => 3,
                Some(CliError::Prompt(_)) => 4,
                _ => 1,
            };

            std::process::exit(exit_code);
        }
    }
}
