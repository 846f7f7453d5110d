//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod context;
pub mod team_role;

pub use crate::output::OutputFormat;
pub use context::CommandContext;

/// Cortex provider - operate on Cortex team roles from the command line
#[derive(Parser, Debug)]
#[command(name = "cortex-provider")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "CORTEX_FORMAT",
        default_value = "table",
        hide_env = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "CORTEX_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the Cortex API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "CORTEX_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage team roles
    #[command(subcommand)]
    TeamRole(TeamRoleCommands),
}

/// Team role subcommands
#[derive(Subcommand, Debug)]
pub enum TeamRoleCommands {
    /// Show one team role
    Get {
        /// Team role ID
        id: i64,
    },

    /// List team roles
    List {
        /// Page number (0-based)
        #[arg(long)]
        page: Option<usize>,

        /// Results per page
        #[arg(long)]
        size: Option<usize>,

        /// Filter by name or tag
        #[arg(long)]
        query: Option<String>,

        /// Fetch every page
        #[arg(long, conflicts_with = "page")]
        all: bool,
    },

    /// Create a team role
    Create {
        /// Unique tag
        #[arg(long)]
        tag: String,

        /// Display name
        #[arg(long)]
        name: String,

        /// Description
        #[arg(long)]
        description: Option<String>,

        /// Notify team members about role changes
        #[arg(long)]
        notifications_enabled: bool,
    },

    /// Update a team role, keeping unspecified fields. The tag cannot change.
    Update {
        /// Team role ID
        id: i64,

        /// New display name
        #[arg(long)]
        name: Option<String>,

        /// New description (empty to clear)
        #[arg(long)]
        description: Option<String>,

        /// Enable or disable notifications
        #[arg(long)]
        notifications_enabled: Option<bool>,
    },

    /// Delete a team role
    Delete {
        /// Team role ID
        id: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_list_all() {
        let cli = Cli::parse_from([
            "cortex-provider",
            "team-role",
            "list",
            "--all",
            "--query",
            "eng",
            "--format",
            "json",
        ]);
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::TeamRole(TeamRoleCommands::List { all, query, .. }) => {
                assert!(all);
                assert_eq!(query.as_deref(), Some("eng"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_update_partial() {
        let cli = Cli::parse_from([
            "cortex-provider",
            "team-role",
            "update",
            "4",
            "--notifications-enabled",
            "false",
        ]);
        match cli.command {
            Commands::TeamRole(TeamRoleCommands::Update {
                id,
                name,
                notifications_enabled,
                ..
            }) => {
                assert_eq!(id, 4);
                assert!(name.is_none());
                assert_eq!(notifications_enabled, Some(false));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_update_rejects_tag() {
        let result = Cli::try_parse_from([
            "cortex-provider",
            "team-role",
            "update",
            "4",
            "--tag",
            "renamed",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_list_all_conflicts_with_page() {
        let result = Cli::try_parse_from([
            "cortex-provider",
            "team-role",
            "list",
            "--all",
            "--page",
            "2",
        ]);
        assert!(result.is_err());
    }
}
