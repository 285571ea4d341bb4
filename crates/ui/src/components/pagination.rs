//! # Pagination Component
//!
//! Footer under each table: the "Showing a to b of n" summary, previous and
//! next buttons and a window of numbered page buttons.

use dioxus::prelude::*;

/// Properties for Pagination component
#[derive(Props, Clone, PartialEq)]
pub struct PaginationProps {
    /// Current page (1-based)
    pub page: usize,

    /// Number of pages, 0 when nothing matches
    pub total_pages: usize,

    /// Page numbers to render as buttons
    pub page_numbers: Vec<usize>,

    /// Summary text shown on the left
    pub summary: String,

    /// Called with the page to go to
    pub on_change: EventHandler<usize>,
}

/// Table pagination footer
#[component]
pub fn Pagination(props: PaginationProps) -> Element {
    let page = props.page;
    let has_prev = page > 1;
    let has_next = page < props.total_pages;

    rsx! {
        div {
            class: "pagination flex items-center justify-between",

            span { class: "text-sm text-slate-400", "{props.summary}" }

            if props.total_pages > 1 {
                div {
                    class: "flex items-center gap-1",

                    button {
                        class: page_button_class(false, !has_prev),
                        disabled: !has_prev,
                        onclick: move |_| props.on_change.call(page.saturating_sub(1)),
                        "‹ Prev"
                    }

                    for number in props.page_numbers.iter().copied() {
                        button {
                            key: "{number}",
                            class: page_button_class(number == page, false),
                            onclick: move |_| props.on_change.call(number),
                            "{number}"
                        }
                    }

                    button {
                        class: page_button_class(false, !has_next),
                        disabled: !has_next,
                        onclick: move |_| props.on_change.call(page + 1),
                        "Next ›"
                    }
                }
            }
        }
    }
}

fn page_button_class(active: bool, disabled: bool) -> &'static str {
    match (active, disabled) {
        (true, _) => "page-button page-button-active",
        (false, true) => "page-button opacity-50 cursor-not-allowed",
        (false, false) => "page-button",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_button_class() {
        assert!(page_button_class(true, false).contains("active"));
        assert!(page_button_class(false, true).contains("cursor-not-allowed"));
        assert_eq!(page_button_class(false, false), "page-button");
    }
}
