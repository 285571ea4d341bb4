//! Connectors Page
//!
//! Searchable, supplier-filtered, paginated table of connector parts with
//! add, edit and delete actions. Missing prices and images show "—".

use dioxus::prelude::*;
use parts_admin_model::Connector;

use crate::components::{EmptyRow, Pagination, RowActions, SearchInput, Select, SelectOption, Thumbnail};
use crate::hooks::{use_admin_service, use_app_state};
use crate::state::DeleteTarget;

const COLUMNS: [&str; 7] = [
    "Image",
    "Yazaki PN",
    "Customer PN",
    "Supplier PN",
    "Supplier",
    "Price",
    "Actions",
];

/// One table row, with the image path already resolved to a URL
#[derive(Debug, Clone, PartialEq)]
struct ConnectorRow {
    connector: Connector,
    image_url: Option<String>,
}

/// Connectors page component
#[component]
pub fn ConnectorsPage() -> Element {
    let mut state = use_app_state();
    let service = use_admin_service();

    let s = state.read();
    let page = s.connector_page();
    let suppliers = s.supplier_options();
    let search = s.connector_query.search().to_string();
    let filter = s.connector_query.filter().unwrap_or_default().to_string();
    let total = s.store.connectors().len();
    let loading = s.loading;
    drop(s);

    let supplier_options: Vec<SelectOption> = suppliers
        .into_iter()
        .map(|name| SelectOption::new(name.clone(), name))
        .collect();
    let empty_message = if loading {
        "Loading connectors..."
    } else if total == 0 {
        "No connectors yet"
    } else {
        "No connectors match the current search"
    };
    let summary = page.summary();
    let page_numbers = page.page_numbers();
    let is_empty = page.is_empty();
    let (current, total_pages) = (page.page, page.total_pages);
    let rows: Vec<ConnectorRow> = page
        .records
        .into_iter()
        .map(|connector| ConnectorRow {
            image_url: connector
                .image_path
                .as_deref()
                .and_then(|path| service.gateway().media_url(path)),
            connector,
        })
        .collect();

    rsx! {
        div {
            class: "page space-y-4",

            // Header
            div {
                class: "flex items-center justify-between",
                div {
                    h2 { class: "text-2xl font-bold", "Connectors" }
                    p { class: "text-sm text-slate-400", "{total} total" }
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| state.write().open_connector_form(None),
                    "＋ Add Connector"
                }
            }

            // Search and filter
            div {
                class: "list-toolbar",
                SearchInput {
                    value: search,
                    placeholder: "Search by Yazaki, customer or supplier PN...",
                    on_change: move |v: String| state.write().connector_query.set_search(v),
                }
                Select {
                    value: filter,
                    options: supplier_options,
                    placeholder: "All suppliers",
                    on_change: move |v: String| state.write().connector_query.set_filter(Some(v)),
                }
            }

            // Table
            div {
                class: "table-card",
                table {
                    class: "data-table",
                    thead {
                        tr {
                            for column in COLUMNS {
                                th { key: "{column}", "{column}" }
                            }
                        }
                    }
                    tbody {
                        if is_empty {
                            EmptyRow { colspan: COLUMNS.len(), message: empty_message.to_string() }
                        }
                        for row in rows {
                            tr {
                                key: "{row.connector.yazaki_pn}",
                                td {
                                    Thumbnail {
                                        url: row.image_url.clone(),
                                        alt: row.connector.yazaki_pn.clone(),
                                    }
                                }
                                td {
                                    class: "font-medium",
                                    "{row.connector.yazaki_pn}"
                                    if let Some(name) = row.connector.name.as_deref() {
                                        p { class: "text-xs text-slate-400", "{name}" }
                                    }
                                }
                                td { "{row.connector.customer_pn}" }
                                td { "{row.connector.supplier_pn}" }
                                td { "{row.connector.supplier_name}" }
                                td { {row.connector.price_label()} }
                                td {
                                    RowActions {
                                        on_edit: {
                                            let connector = row.connector.clone();
                                            move |_| state.write().open_connector_form(Some(&connector))
                                        },
                                        on_delete: {
                                            let connector = row.connector.clone();
                                            move |_| state.write().confirm_delete(DeleteTarget::Connector(connector.clone()))
                                        },
                                    }
                                }
                            }
                        }
                    }
                }
            }

            Pagination {
                page: current,
                total_pages: total_pages,
                page_numbers: page_numbers,
                summary: summary,
                on_change: move |p: usize| state.write().connector_query.set_page(p),
            }
        }
    }
}
