//! Output formatting for CLI results

use clap::ValueEnum;

pub mod json;
pub mod table;

/// How command results are rendered on stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Rounded table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}
