//! Command implementations
//!
//! Every command starts from a freshly refreshed [`EntityStore`] and sends
//! its change through [`AdminService`], applying the confirmed outcome the
//! same way the desktop dashboard does.

pub mod connectors;
pub mod users;

use std::path::Path;

use colored::Colorize;
use parts_admin_core::{AdminError, AdminResult, Role};
use parts_admin_gateway::{AdminService, Outcome};
use parts_admin_model::{Attachment, EntityStore, distinct_values};

/// Service plus the records it last confirmed
#[derive(Debug)]
pub struct Context {
    pub service: AdminService,
    pub store: EntityStore,
}

impl Context {
    /// Fetch both collections into a new store; either failing is an error
    pub async fn load(service: AdminService) -> AdminResult<Self> {
        let mut store = EntityStore::new();
        service.refresh().await.into_outcome()?.apply(&mut store)?;
        Ok(Self { service, store })
    }

    /// Apply a confirmed outcome and report it
    pub fn commit(&mut self, outcome: AdminResult<Outcome>) -> anyhow::Result<()> {
        let outcome = outcome?;
        let message = outcome.message();
        outcome.apply(&mut self.store)?;
        println!("{} {}", "✓".green().bold(), message);
        Ok(())
    }
}

/// Read a file given on the command line into an attachment
pub async fn read_attachment(path: &Path) -> AdminResult<Attachment> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| AdminError::FileRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "attachment".to_string());
    Ok(Attachment::new(file_name, bytes))
}

/// Print record totals
pub fn summary(ctx: &Context) -> anyhow::Result<()> {
    let users = ctx.store.users().records();
    let connectors = ctx.store.connectors().records();

    println!("{}", "Parts Admin".bold());
    println!("Source:     {}", ctx.service.gateway().describe());
    println!("Users:      {}", users.len());
    for role in Role::ALL {
        let count = users.iter().filter(|u| u.role == role).count();
        println!("  {:<9} {}", role.display_name(), count);
    }
    println!("Connectors: {}", connectors.len());
    println!("Suppliers:  {}", distinct_values(connectors).len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_attachment() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("A1.step");
        std::fs::write(&path, b"ISO-10303").unwrap();

        let attachment = read_attachment(&path).await.unwrap();
        assert_eq!(attachment.file_name, "A1.step");
        assert_eq!(attachment.extension().as_deref(), Some("step"));
    }

    #[tokio::test]
    async fn test_read_missing_attachment() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_attachment(&dir.path().join("nope.png")).await.unwrap_err();
        assert!(matches!(err, AdminError::FileRead { .. }));
    }
}
