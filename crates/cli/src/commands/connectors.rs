use colored::Colorize;
use parts_admin_gateway::AdminService;
use parts_admin_model::{AttachmentSlot, Connector, ConnectorDraft, ListQuery, distinct_values, view};

use super::{Context, read_attachment};
use crate::args::{ConnectorCommand, ConnectorFields};
use crate::render;

pub async fn run(ctx: &mut Context, command: ConnectorCommand) -> anyhow::Result<()> {
    match command {
        ConnectorCommand::List { list, supplier } => {
            let mut query = ListQuery::new().with_search(list.search).at_page(list.page);
            if let Some(supplier) = supplier {
                query = query.with_filter(supplier);
            }
            let page = view(ctx.store.connectors().records(), &query);

            if page.is_empty() {
                println!("{}", "No connectors found.".yellow());
            } else {
                println!("{}", render::connectors_table(&page.records));
            }
            println!("{}", render::page_footer(&page));
            Ok(())
        }
        ConnectorCommand::Add { yazaki_pn, fields } => {
            let mut draft = ConnectorDraft::default();
            draft.yazaki_pn = yazaki_pn;
            fill_draft(&mut draft, fields).await?;
            let outcome = ctx.service.save_connector(None, &draft).await;
            ctx.commit(outcome)
        }
        ConnectorCommand::Update { yazaki_pn, fields } => {
            let original = AdminService::find::<Connector>(&ctx.store, yazaki_pn.trim())?.clone();
            let mut draft = ConnectorDraft::from(&original);
            fill_draft(&mut draft, fields).await?;
            let outcome = ctx.service.save_connector(Some(&original), &draft).await;
            ctx.commit(outcome)
        }
        ConnectorCommand::Delete { yazaki_pn } => {
            let original = AdminService::find::<Connector>(&ctx.store, yazaki_pn.trim())?.clone();
            let outcome = ctx.service.delete_connector(&original).await;
            ctx.commit(outcome)
        }
        ConnectorCommand::Suppliers => {
            let suppliers = distinct_values(ctx.store.connectors().records());
            if suppliers.is_empty() {
                println!("{}", "No suppliers yet.".yellow());
            }
            for supplier in suppliers {
                println!("{}", supplier);
            }
            Ok(())
        }
    }
}

/// Overlay the given fields onto `draft` and read any attachment files
async fn fill_draft(draft: &mut ConnectorDraft, fields: ConnectorFields) -> anyhow::Result<()> {
    let ConnectorFields {
        customer_pn,
        supplier_pn,
        supplier,
        name,
        price,
        image,
        drawing,
        model,
    } = fields;

    for (field, value) in [
        (&mut draft.customer_pn, customer_pn),
        (&mut draft.supplier_pn, supplier_pn),
        (&mut draft.supplier_name, supplier),
        (&mut draft.name, name),
        (&mut draft.price, price),
    ] {
        if let Some(value) = value {
            *field = value;
        }
    }

    for (slot, path) in [
        (AttachmentSlot::Image, image),
        (AttachmentSlot::Drawing2d, drawing),
        (AttachmentSlot::Model3d, model),
    ] {
        if let Some(path) = path {
            draft.attachments.set(slot, read_attachment(&path).await?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fill_draft_keeps_omitted_fields() {
        let original = Connector::new("A1", "C1", "S1", "Acme").with_price(2.5);
        let mut draft = ConnectorDraft::from(&original);

        let fields = ConnectorFields {
            supplier: Some("Beta".to_string()),
            price: Some(String::new()),
            ..ConnectorFields::default()
        };
        fill_draft(&mut draft, fields).await.unwrap();

        assert_eq!(draft.customer_pn, "C1");
        assert_eq!(draft.supplier_name, "Beta");
        assert_eq!(draft.parsed_price().unwrap(), None);
        assert!(draft.attachments.is_empty());
    }

    #[tokio::test]
    async fn test_fill_draft_reads_attachments() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("photo.jpg");
        std::fs::write(&image, [0xFF, 0xD8]).unwrap();

        let mut draft = ConnectorDraft::default();
        let fields = ConnectorFields {
            image: Some(image),
            ..ConnectorFields::default()
        };
        fill_draft(&mut draft, fields).await.unwrap();

        let picked = draft.attachments.get(AttachmentSlot::Image).unwrap();
        assert_eq!(picked.file_name, "photo.jpg");
    }
}
