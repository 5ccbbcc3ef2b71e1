//! Search, sort and page over an already-fetched customer list.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::customer::Customer;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Email,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Serialize)]
pub struct CustomerPage {
    pub rows: Vec<Customer>,
    pub total_pages: usize,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}

/// Case-insensitive ordering with a byte-order tie-break, close to what a
/// browser's `localeCompare` gives for Latin text.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn matches_query(customer: &Customer, needle: &str) -> bool {
    customer.name.to_lowercase().contains(needle) || customer.email.to_lowercase().contains(needle)
}

fn sort_field(customer: &Customer, key: SortKey) -> &str {
    match key {
        SortKey::Name => &customer.name,
        SortKey::Email => &customer.email,
    }
}

/// Filters by `query` on name or email, sorts on `sort_key` and returns the
/// 1-based `page`. Pages outside `1..=total_pages` come back empty.
pub fn view(
    all: &[Customer],
    query: &str,
    sort_key: SortKey,
    direction: SortDirection,
    page: usize,
    page_size: usize,
) -> CustomerPage {
    let needle = query.trim().to_lowercase();
    let mut filtered: Vec<&Customer> = if needle.is_empty() {
        all.iter().collect()
    } else {
        all.iter().filter(|c| matches_query(c, &needle)).collect()
    };

    filtered.sort_by(|a, b| {
        let ord = locale_cmp(sort_field(a, sort_key), sort_field(b, sort_key));
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });

    let total = filtered.len();
    let total_pages = if page_size == 0 { 0 } else { total.div_ceil(page_size) };
    let rows = if page == 0 || page_size == 0 {
        Vec::new()
    } else {
        filtered
            .into_iter()
            .skip((page - 1).saturating_mul(page_size))
            .take(page_size)
            .cloned()
            .collect()
    };

    CustomerPage { rows, total_pages, total, page, page_size }
}
