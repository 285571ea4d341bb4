//! # Parts Admin CLI
//!
//! Command-line interface for Parts Admin.
//!
//! Runs the same operations as the desktop dashboard without a window,
//! against the REST backend or a local JSON data file.
//!
//! ## Commands
//!
//! - `users list|add|update|delete` - manage dashboard users
//! - `connectors list|add|update|delete|suppliers` - manage connector parts
//! - `summary` - record totals
//!

pub mod args;
pub mod commands;
pub mod render;

pub use args::{Cli, Command, ConnectorCommand, UserCommand};

use parts_admin_gateway::AdminService;

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Run one parsed command to completion
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.gateway_config()?;
    tracing::debug!(source = %config.describe(), command = ?cli.command, "Running command");
    let gateway = parts_admin_gateway::connect(&config)?;
    let mut ctx = commands::Context::load(AdminService::new(gateway)).await?;

    match cli.command {
        Command::Users { command } => commands::users::run(&mut ctx, command).await,
        Command::Connectors { command } => commands::connectors::run(&mut ctx, command).await,
        Command::Summary => commands::summary(&ctx),
    }
}
