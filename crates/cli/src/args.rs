use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use parts_admin_core::{AdminResult, Role};
use parts_admin_gateway::GatewayConfig;
use parts_admin_gateway::config::{ENV_BACKEND_URL, ENV_DATA_FILE};

#[derive(Parser, Debug)]
#[command(
    name = "parts-admin-cli",
    version,
    about = "Manage Parts Admin users and connectors from the terminal"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Backend origin, e.g. http://localhost:5000
    #[arg(long, env = ENV_BACKEND_URL, global = true)]
    pub backend_url: Option<String>,

    /// Use a local JSON data file instead of the backend
    #[arg(long, env = ENV_DATA_FILE, global = true)]
    pub data_file: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Cli {
    /// Gateway settings, with flags taking precedence over the environment
    pub fn gateway_config(&self) -> AdminResult<GatewayConfig> {
        GatewayConfig::from_lookup(|key| match key {
            ENV_DATA_FILE => self.data_file.as_ref().map(|p| p.display().to_string()),
            ENV_BACKEND_URL => self.backend_url.clone(),
            _ => std::env::var(key).ok(),
        })
    }

    /// Log filter for the `-v` count
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List and manage dashboard users
    Users {
        #[command(subcommand)]
        command: UserCommand,
    },
    /// List and manage connector parts
    Connectors {
        #[command(subcommand)]
        command: ConnectorCommand,
    },
    /// Show record totals
    Summary,
}

/// Search, filter and page options shared by the list commands
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Case-insensitive search text
    #[arg(long, default_value = "")]
    pub search: String,

    /// Page to show (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

#[derive(Subcommand, Debug)]
pub enum UserCommand {
    /// List users
    List {
        #[command(flatten)]
        list: ListArgs,
        /// Only users with this role
        #[arg(long)]
        role: Option<Role>,
    },
    /// Add a user
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// Role (admin, manager, user); the backend default when omitted
        #[arg(long)]
        role: Option<Role>,
    },
    /// Update a user, addressed by id or email
    Update {
        user: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        role: Option<Role>,
    },
    /// Delete a user, addressed by id or email
    Delete { user: String },
}

/// Connector fields; on update, omitted fields keep their stored value
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectorFields {
    #[arg(long)]
    pub customer_pn: Option<String>,
    #[arg(long)]
    pub supplier_pn: Option<String>,
    /// Supplier name
    #[arg(long)]
    pub supplier: Option<String>,
    /// Descriptive name
    #[arg(long)]
    pub name: Option<String>,
    /// Unit price; an empty value clears it
    #[arg(long)]
    pub price: Option<String>,
    /// Image file to upload
    #[arg(long)]
    pub image: Option<PathBuf>,
    /// 2-D drawing file to upload
    #[arg(long)]
    pub drawing: Option<PathBuf>,
    /// 3-D model file to upload
    #[arg(long)]
    pub model: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum ConnectorCommand {
    /// List connectors
    List {
        #[command(flatten)]
        list: ListArgs,
        /// Only connectors from this supplier
        #[arg(long)]
        supplier: Option<String>,
    },
    /// Add a connector
    Add {
        /// Yazaki part number (unique)
        yazaki_pn: String,
        #[command(flatten)]
        fields: ConnectorFields,
    },
    /// Update a connector, addressed by Yazaki part number
    Update {
        yazaki_pn: String,
        #[command(flatten)]
        fields: ConnectorFields,
    },
    /// Delete a connector, addressed by Yazaki part number
    Delete { yazaki_pn: String },
    /// List distinct supplier names
    Suppliers,
}
