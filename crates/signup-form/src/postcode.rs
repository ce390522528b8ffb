//! Postcode completions for the postcode field
//!
//! Stands in for a real address lookup: a case-insensitive prefix filter over
//! a fixed reference list.

/// Sample postcodes offered as completions
const REFERENCE_POSTCODES: &[&str] = &[
    "N6 1BA", "N6 2CD", "N6 3EF", "N6 4GH", "N6 5IJ", "W1 1AA", "SW1 1BB", "E1 6CD",
];

/// Inputs shorter than this get no suggestions
pub const MIN_QUERY_LEN: usize = 2;

#[derive(Debug, Clone)]
pub struct PostcodeSuggestions {
    reference: Vec<String>,
}

impl PostcodeSuggestions {
    pub fn new(reference: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            reference: reference.into_iter().map(Into::into).collect(),
        }
    }

    /// Lazily filtered candidates; every call starts over from the full list
    pub fn suggest<'a>(&'a self, partial: &str) -> impl Iterator<Item = &'a str> + 'a {
        let query = partial.to_lowercase();
        let active = partial.chars().count() >= MIN_QUERY_LEN;

        self.reference
            .iter()
            .filter(move |candidate| active && candidate.to_lowercase().starts_with(&query))
            .map(String::as_str)
    }
}

impl Default for PostcodeSuggestions {
    fn default() -> Self {
        Self::new(REFERENCE_POSTCODES.iter().copied())
    }
}
