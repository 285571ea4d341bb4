//! Searchable, filterable, paginated list view
//!
//! A [`ListQuery`] holds what the user typed and picked; [`view`] derives
//! the visible page from a record snapshot. Nothing here is cached, so the
//! page always reflects the latest store contents.

use std::collections::BTreeSet;

use parts_admin_core::Record;

/// Rows per page
pub const PAGE_SIZE: usize = 10;

/// Page buttons shown around the current page
pub const PAGE_WINDOW: usize = 5;

// ============================================================================
// Query
// ============================================================================

/// Search text, filter value and page number of a list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    search: String,
    filter: Option<String>,
    page: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            filter: None,
            page: 1,
        }
    }
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// Requested 1-based page
    pub fn page(&self) -> usize {
        self.page
    }

    /// Change the search text and go back to the first page
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    /// Change the filter and go back to the first page
    ///
    /// An empty value clears the filter.
    pub fn set_filter(&mut self, filter: Option<String>) {
        self.filter = filter.filter(|f| !f.is_empty());
        self.page = 1;
    }

    /// Jump to a page; values below 1 become 1
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Builder form of [`set_search`](Self::set_search)
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.set_search(search);
        self
    }

    /// Builder form of [`set_filter`](Self::set_filter)
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.set_filter(Some(filter.into()));
        self
    }

    /// Builder form of [`set_page`](Self::set_page)
    pub fn at_page(mut self, page: usize) -> Self {
        self.set_page(page);
        self
    }

    /// Whether `record` passes the search and filter
    ///
    /// Search is a case-insensitive substring match on any search field.
    /// The filter is an exact match on the record's filter value.
    pub fn matches<T: Record>(&self, record: &T) -> bool {
        let needle = self.search.trim().to_lowercase();
        let search_ok = needle.is_empty()
            || record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
        let filter_ok = self
            .filter
            .as_deref()
            .is_none_or(|f| record.filter_value() == f);
        search_ok && filter_ok
    }
}

// ============================================================================
// Page
// ============================================================================

/// One page of a list, ready to render
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    /// Records on this page, in store order
    pub records: Vec<T>,
    /// Requested page (1-based); past the last page the page is empty
    pub page: usize,
    /// Number of pages, 0 when nothing matches
    pub total_pages: usize,
    /// Records matching search and filter across all pages
    pub total_count: usize,
}

impl<T> ListPage<T> {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// 1-based index of the first row shown, 0 when empty
    pub fn first_index(&self) -> usize {
        if self.records.is_empty() {
            0
        } else {
            (self.page - 1) * PAGE_SIZE + 1
        }
    }

    /// 1-based index of the last row shown, 0 when empty
    pub fn last_index(&self) -> usize {
        if self.records.is_empty() {
            0
        } else {
            (self.page - 1) * PAGE_SIZE + self.records.len()
        }
    }

    /// Footer text such as "Showing 11 to 20 of 42"
    pub fn summary(&self) -> String {
        format!(
            "Showing {} to {} of {}",
            self.first_index(),
            self.last_index(),
            self.total_count
        )
    }

    /// Page numbers to render as buttons
    pub fn page_numbers(&self) -> Vec<usize> {
        page_window(self.page, self.total_pages, PAGE_WINDOW)
    }
}

/// Number of pages for `count` matching records
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE)
}

/// Derive the visible page from a snapshot
pub fn view<T: Record>(records: &[T], query: &ListQuery) -> ListPage<T> {
    let matching: Vec<&T> = records.iter().filter(|r| query.matches(*r)).collect();
    let total_count = matching.len();
    let total_pages = total_pages(total_count);
    let page = query.page.max(1);

    let records = matching
        .into_iter()
        .skip((page - 1) * PAGE_SIZE)
        .take(PAGE_SIZE)
        .cloned()
        .collect();

    ListPage {
        records,
        page,
        total_pages,
        total_count,
    }
}

/// Sorted distinct filter values of `records`, empty values skipped
pub fn distinct_values<T: Record>(records: &[T]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.filter_value())
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Up to `width` consecutive page numbers centered on `current`
pub fn page_window(current: usize, total: usize, width: usize) -> Vec<usize> {
    if total == 0 || width == 0 {
        return Vec::new();
    }
    let width = width.min(total);
    let current = current.clamp(1, total);
    let start = current
        .saturating_sub(width / 2)
        .clamp(1, total + 1 - width);
    (start..start + width).collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::Connector;
    use pretty_assertions::assert_eq;

    fn connectors(n: usize) -> Vec<Connector> {
        (1..=n)
            .map(|i| {
                let supplier = if i % 2 == 0 { "Beta" } else { "Acme" };
                Connector::new(format!("P{:03}", i), format!("C{}", i), "S", supplier)
                    .with_id(i as i64)
            })
            .collect()
    }

    fn pns(page: &ListPage<Connector>) -> Vec<&str> {
        page.records.iter().map(|c| c.yazaki_pn.as_str()).collect()
    }

    #[test]
    fn test_pages_concatenate_to_matching_set() {
        let records = connectors(23);
        for query in [
            ListQuery::new(),
            ListQuery::new().with_filter("Acme"),
            ListQuery::new().with_search("p01"),
        ] {
            let first = view(&records, &query);
            let mut all = Vec::new();
            for page in 1..=first.total_pages {
                let p = view(&records, &query.clone().at_page(page));
                assert!(p.records.len() <= PAGE_SIZE);
                all.extend(p.records);
            }
            let expected: Vec<Connector> = records
                .iter()
                .filter(|r| query.matches(*r))
                .cloned()
                .collect();
            assert_eq!(all, expected);
            assert_eq!(first.total_count, expected.len());
        }
    }

    #[test]
    fn test_page_count() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(10), 1);
        assert_eq!(total_pages(11), 2);
        assert_eq!(view(&connectors(23), &ListQuery::new()).total_pages, 3);
    }

    #[test]
    fn test_search_resets_page() {
        let records = connectors(30);
        let mut query = ListQuery::new().at_page(3);
        assert_eq!(view(&records, &query).page, 3);

        query.set_search("P0");
        assert_eq!(query.page(), 1);
        query.set_page(2);
        query.set_filter(Some("Beta".to_string()));
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let records = connectors(12);
        let page = view(&records, &ListQuery::new().with_search("c11"));
        assert_eq!(pns(&page), vec!["P011"]);
    }

    #[test]
    fn test_last_page_and_past_the_end() {
        let records = connectors(12);
        let page = view(&records, &ListQuery::new().at_page(2));
        assert_eq!(pns(&page), vec!["P011", "P012"]);
        assert_eq!(page.summary(), "Showing 11 to 12 of 12");
        assert!(!page.has_next());

        let past = view(&records, &ListQuery::new().at_page(9));
        assert!(past.is_empty());
        assert_eq!(past.total_pages, 2);
        assert_eq!(past.total_count, 12);
    }

    #[test]
    fn test_empty_result() {
        let page = view(&connectors(5), &ListQuery::new().with_search("zzz"));
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 0);
        assert!(page.page_numbers().is_empty());
        assert_eq!(page.summary(), "Showing 0 to 0 of 0");
        assert!(!page.has_next());
        assert!(!page.has_prev());
    }

    #[test]
    fn test_supplier_filter() {
        let records = vec![
            Connector::new("A1", "C1", "S1", "Acme").with_id(1).with_price(10.0),
            Connector::new("A2", "C2", "S2", "Acme").with_id(2),
            Connector::new("B1", "C3", "S3", "Beta").with_id(3),
        ];
        assert_eq!(distinct_values(&records), vec!["Acme", "Beta"]);

        let page = view(&records, &ListQuery::new().with_filter("Acme"));
        assert_eq!(pns(&page), vec!["A1", "A2"]);
        let prices: Vec<String> = page.records.iter().map(|c| c.price_label()).collect();
        assert_eq!(prices, vec!["$10.00", "—"]);
    }

    #[test]
    fn test_empty_filter_clears() {
        let mut query = ListQuery::new().with_filter("Acme");
        query.set_filter(Some(String::new()));
        assert_eq!(query.filter(), None);
    }

    #[test]
    fn test_page_window() {
        assert_eq!(page_window(1, 3, 5), vec![1, 2, 3]);
        assert_eq!(page_window(1, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(6, 10, 5), vec![4, 5, 6, 7, 8]);
        assert_eq!(page_window(10, 10, 5), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(1, 0, 5), Vec::<usize>::new());
    }
}
