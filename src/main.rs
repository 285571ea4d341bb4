//! Parts Admin
//!
//! Desktop dashboard for managing users and connector part records.
//!
//! This is the main entry point for the Dioxus Desktop application.

use parts_admin_gateway::GatewayConfig;
use tracing::{Level, error};
use tracing_subscriber::FmtSubscriber;

fn main() {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .pretty()
        .init();

    dotenvy::dotenv().ok();

    let gateway = match GatewayConfig::from_env().and_then(|config| parts_admin_gateway::connect(&config)) {
        Ok(gateway) => gateway,
        Err(e) => {
            error!(error = %e, "Cannot start Parts Admin");
            std::process::exit(1);
        }
    };

    // Launch the Dioxus desktop application
    parts_admin_ui::launch(gateway);
}
