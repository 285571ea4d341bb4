//! Terminal rendering of records and pages

use comfy_table::{Cell, Table};
use parts_admin_model::{Connector, EMPTY_CELL, ListPage, User};

/// Creation date as shown in lists, e.g. "Jan 5, 2024"
pub fn created_label(user: &User) -> String {
    user.created_at.format("%b %-d, %Y").to_string()
}

pub fn users_table(users: &[User]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Email", "Role", "Created"]);

    for u in users {
        table.add_row(vec![
            Cell::new(u.id),
            Cell::new(&u.name),
            Cell::new(&u.email),
            Cell::new(u.role.display_name()),
            Cell::new(created_label(u)),
        ]);
    }

    table
}

pub fn connectors_table(connectors: &[Connector]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        "Yazaki PN",
        "Name",
        "Customer PN",
        "Supplier PN",
        "Supplier",
        "Price",
        "Image",
    ]);

    for c in connectors {
        table.add_row(vec![
            Cell::new(&c.yazaki_pn),
            Cell::new(c.name.as_deref().unwrap_or(EMPTY_CELL)),
            Cell::new(&c.customer_pn),
            Cell::new(&c.supplier_pn),
            Cell::new(&c.supplier_name),
            Cell::new(c.price_label()),
            Cell::new(c.image_path.as_deref().unwrap_or(EMPTY_CELL)),
        ]);
    }

    table
}

/// Footer line under a listed page
pub fn page_footer<T>(page: &ListPage<T>) -> String {
    if page.total_pages == 0 {
        return page.summary();
    }
    format!(
        "{} (page {} of {})",
        page.summary(),
        page.page,
        page.total_pages
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use parts_admin_core::{Role, UserId};

    fn user() -> User {
        User {
            id: UserId(7),
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            role: Role::Manager,
            created_at: Utc.with_ymd_and_hms(2024, 1, 5, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_created_label() {
        assert_eq!(created_label(&user()), "Jan 5, 2024");
    }

    #[test]
    fn test_users_table_rows() {
        let rendered = users_table(&[user()]).to_string();
        assert!(rendered.contains("ann@example.com"));
        assert!(rendered.contains("Manager"));
    }

    #[test]
    fn test_missing_price_and_image_show_placeholder() {
        let connector = Connector::new("A1", "C1", "S1", "Acme");
        let rendered = connectors_table(&[connector]).to_string();
        assert!(rendered.contains(EMPTY_CELL));
    }

    #[test]
    fn test_empty_page_footer() {
        let page: ListPage<User> = ListPage {
            records: Vec::new(),
            page: 1,
            total_pages: 0,
            total_count: 0,
        };
        assert_eq!(page_footer(&page), "Showing 0 to 0 of 0");
    }
}
