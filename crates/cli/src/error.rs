//! Error types for tabletctl

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("No tablet devices connected")]
    NoDevices,

    #[error("No monitors connected")]
    NoMonitors,

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}
