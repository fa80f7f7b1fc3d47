//! Pure aggregates computed over a filtered view.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::Serialize;

use crate::filter::FilteredView;
use crate::tokens::material_tokens;
use crate::types::{Token, Year};

/// Material-token frequency table for a filtered view.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MaterialFrequency {
    /// Total token occurrences across the view (multiset size).
    pub total: usize,
    /// Number of distinct tokens.
    pub distinct: usize,
    /// Per-token counts, descending by count then token text.
    pub counts: Vec<TokenCount>,
}

/// One bar of the frequency chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TokenCount {
    /// The material token.
    pub token: Token,
    /// How many records list it.
    pub count: usize,
}

/// Count material tokens across a view.
///
/// Each record's raw value is parsed into its token set, and the sets are
/// flattened into one multiset over the whole view. Returns `None` when no
/// record carries material data, so the caller can display an explicit
/// "no material data" message instead of an empty chart.
pub fn material_frequency(view: &FilteredView) -> Option<MaterialFrequency> {
    let mut tallies: IndexMap<Token, usize> = IndexMap::new();
    for record in &view.records {
        let Some(raw) = record.material_raw.as_deref() else {
            continue;
        };
        for token in material_tokens(raw) {
            *tallies.entry(token).or_insert(0) += 1;
        }
    }
    if tallies.is_empty() {
        return None;
    }
    let total = tallies.values().sum();
    let distinct = tallies.len();
    let mut counts: Vec<TokenCount> = tallies
        .into_iter()
        .map(|(token, count)| TokenCount { token, count })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.token.cmp(&b.token)));
    Some(MaterialFrequency {
        total,
        distinct,
        counts,
    })
}

/// Records per discovery year, ascending by year.
///
/// Records with no known year are excluded, not coerced to a sentinel. An
/// empty map means no record in the view has a known year.
pub fn yearly_counts(view: &FilteredView) -> BTreeMap<Year, usize> {
    let mut buckets = BTreeMap::new();
    for record in &view.records {
        if let Some(year) = record.year_uncovered {
            *buckets.entry(year).or_insert(0) += 1;
        }
    }
    buckets
}
