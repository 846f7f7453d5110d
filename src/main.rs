//! Cortex provider CLI

use clap::Parser;
use log::LevelFilter;

use cortex_provider::cli::team_role::{self, TeamRoleChanges};
use cortex_provider::cli::{Cli, CommandContext, Commands, TeamRoleCommands};
use cortex_provider::client::TeamRolesListParams;
use cortex_provider::client::models::TeamRole;
use cortex_provider::error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let ctx = CommandContext::new(cli.format, cli.config.as_deref(), cli.base_url.as_deref())?;

    match cli.command {
        Commands::TeamRole(cmd) => match cmd {
            TeamRoleCommands::Get { id } => team_role::get(&ctx, id).await,
            TeamRoleCommands::List {
                page,
                size,
                query,
                all,
            } => {
                let params = TeamRolesListParams { page, size, query };
                team_role::list(&ctx, params, all).await
            }
            TeamRoleCommands::Create {
                tag,
                name,
                description,
                notifications_enabled,
            } => {
                let role = TeamRole {
                    tag,
                    name,
                    description,
                    notifications_enabled,
                    ..Default::default()
                };
                team_role::create(&ctx, role).await
            }
            TeamRoleCommands::Update {
                id,
                name,
                description,
                notifications_enabled,
            } => {
                let changes = TeamRoleChanges {
                    name,
                    description,
                    notifications_enabled,
                };
                team_role::update(&ctx, id, changes).await
            }
            TeamRoleCommands::Delete { id } => team_role::delete(&ctx, id).await,
        },
    }
}
