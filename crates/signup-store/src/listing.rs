// File: src/listing.rs
// Purpose: Searchable, de-duplicated, paged view of registrations for the list page

use serde::{Deserialize, Serialize};
use signup_core::Partner;
use std::collections::HashSet;

/// Query parameters of the list page
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListingQuery {
    /// Free-text search over company, name, email and phone
    #[serde(default)]
    pub search: Option<String>,

    /// How many entries are shown; grows by one page per "Load more"
    #[serde(default)]
    pub limit: Option<usize>,
}

/// One rendering of the list page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingPage {
    pub partners: Vec<Partner>,
    /// Matching entries before truncation
    pub total: usize,
    pub has_more: bool,
    /// Limit to request for the next "Load more"
    pub next_limit: usize,
}

impl ListingQuery {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Newest first, duplicates removed, filtered, then truncated
    pub fn apply(&self, partners: Vec<Partner>, page_size: usize) -> ListingPage {
        let limit = self.limit.unwrap_or(page_size);

        let mut partners = dedupe(newest_first(partners));

        if let Some(term) = self.term() {
            partners.retain(|p| matches_term(p, &term));
        }

        let total = partners.len();
        partners.truncate(limit);

        ListingPage {
            partners,
            total,
            has_more: total > limit,
            next_limit: limit.saturating_add(page_size),
        }
    }

    fn term(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
    }
}

fn newest_first(mut partners: Vec<Partner>) -> Vec<Partner> {
    // Stable sort: equal timestamps keep insertion order
    partners.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    partners
}

/// Key that identifies the same dealership registered twice
fn identity(partner: &Partner) -> (String, String, String) {
    let s = &partner.submission;
    (
        s.email_address.to_lowercase(),
        s.mobile_phone.clone(),
        s.company.to_lowercase(),
    )
}

/// Keeps the first occurrence, i.e. the newest after sorting
fn dedupe(partners: Vec<Partner>) -> Vec<Partner> {
    let mut seen = HashSet::new();
    partners
        .into_iter()
        .filter(|p| seen.insert(identity(p)))
        .collect()
}

fn matches_term(partner: &Partner, term: &str) -> bool {
    let s = &partner.submission;
    s.company.to_lowercase().contains(term)
        || s.name.to_lowercase().contains(term)
        || s.email_address.to_lowercase().contains(term)
        || s.mobile_phone.contains(term)
}
