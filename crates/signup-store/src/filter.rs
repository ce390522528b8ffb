// File: src/filter.rs
// Purpose: Collection filter accepted by `GET /partners`

use serde::Deserialize;
use signup_core::Partner;

/// Filter over the stored collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PartnerFilter {
    /// Case-insensitive substring of the company name
    #[serde(default)]
    pub company: Option<String>,
}

impl PartnerFilter {
    pub fn company(company: impl Into<String>) -> Self {
        Self {
            company: Some(company.into()),
        }
    }

    /// An empty company filter matches everything
    pub fn matches(&self, partner: &Partner) -> bool {
        match self.company.as_deref() {
            Some(needle) if !needle.is_empty() => partner
                .submission
                .company
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            _ => true,
        }
    }
}
