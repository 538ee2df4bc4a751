//! CLI error types.

use rw_config::ConfigError;
use rw_outline::OutlineError;
use rw_scaffold::ScaffoldError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Outline(#[from] OutlineError),

    #[error("{0}")]
    Scaffold(#[from] ScaffoldError),
}
