//! Selection predicates and the AND-combining record filter.

use std::collections::BTreeSet;

use crate::data::{ArtifactRecord, Dataset, FilterField};
use crate::types::Token;

/// User choice for one filterable field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// No constraint; the default, unfiltered view.
    All,
    /// Explicit token subset drawn from the field vocabulary.
    Custom(BTreeSet<Token>),
}

impl Default for Selection {
    fn default() -> Self {
        Selection::All
    }
}

/// Selected subsets for every filterable field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSelection {
    /// Material token subset.
    pub materials: Selection,
    /// Site name subset.
    pub sites: Selection,
}

/// Per-record inclusion predicate for one field.
///
/// `MaterialAnyOf` matches by substring containment against the raw field
/// value, not token-set intersection. This keeps partial/compound-value
/// matches from the original dashboard (selecting `Iron` matches a raw
/// `Iron Bronze`) and is a known limitation: `Iron` would also match a
/// hypothetical undelimited `CastIron`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldPredicate {
    /// Constant true; produced when a selection imposes no constraint.
    Everything,
    /// At least one selected token appears in the raw material value.
    MaterialAnyOf(BTreeSet<Token>),
    /// The site value equals one of the selected names exactly.
    SiteOneOf(BTreeSet<Token>),
}

impl FieldPredicate {
    /// Whether `record` satisfies this predicate.
    pub fn matches(&self, record: &ArtifactRecord) -> bool {
        match self {
            FieldPredicate::Everything => true,
            FieldPredicate::MaterialAnyOf(tokens) => record
                .material_raw
                .as_deref()
                .is_some_and(|raw| tokens.iter().any(|token| raw.contains(token.as_str()))),
            FieldPredicate::SiteOneOf(sites) => record
                .site_name
                .as_deref()
                .is_some_and(|site| sites.contains(site)),
        }
    }

    /// Whether this is the constant-true predicate.
    pub fn is_everything(&self) -> bool {
        matches!(self, FieldPredicate::Everything)
    }
}

/// Build the inclusion predicate for one field.
///
/// An empty custom selection means "no constraint", never "exclude
/// everything": it matches the default, unfiltered view. Selecting the full
/// vocabulary is equivalent.
pub fn build_predicate(
    field: FilterField,
    vocabulary: &BTreeSet<Token>,
    selection: &Selection,
) -> FieldPredicate {
    let tokens = match selection {
        Selection::All => return FieldPredicate::Everything,
        Selection::Custom(tokens) => tokens,
    };
    if tokens.is_empty() || tokens == vocabulary {
        return FieldPredicate::Everything;
    }
    match field {
        FilterField::Material => FieldPredicate::MaterialAnyOf(tokens.clone()),
        FilterField::Site => FieldPredicate::SiteOneOf(tokens.clone()),
    }
}

/// Read-only subset of a dataset satisfying a filter selection.
///
/// Recomputed on every selection change; never mutates the dataset.
#[derive(Clone, Debug)]
pub struct FilteredView {
    /// Matching records, in dataset order.
    pub records: Vec<ArtifactRecord>,
}

impl FilteredView {
    /// Number of records in the view.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the view holds no records. A valid terminal state, not an error.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// AND-combine predicates over a dataset.
///
/// When every predicate is the constant-true short-circuit the result is an
/// identity copy with no per-record evaluation.
pub fn apply(dataset: &Dataset, predicates: &[FieldPredicate]) -> FilteredView {
    if predicates.iter().all(FieldPredicate::is_everything) {
        return FilteredView {
            records: dataset.records.clone(),
        };
    }
    let records = dataset
        .records
        .iter()
        .filter(|record| predicates.iter().all(|predicate| predicate.matches(record)))
        .cloned()
        .collect();
    FilteredView { records }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DatasetKind;

    fn record(material: Option<&str>, site: Option<&str>) -> ArtifactRecord {
        ArtifactRecord {
            material_raw: material.map(str::to_string),
            site_name: site.map(str::to_string),
            ..ArtifactRecord::default()
        }
    }

    fn tokens(values: &[&str]) -> BTreeSet<Token> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn select_all_and_full_vocabulary_build_constant_true() {
        let vocabulary = tokens(&["Bronze", "Iron"]);
        let all = build_predicate(FilterField::Material, &vocabulary, &Selection::All);
        assert!(all.is_everything());

        let full = build_predicate(
            FilterField::Material,
            &vocabulary,
            &Selection::Custom(vocabulary.clone()),
        );
        assert!(full.is_everything());

        let empty = build_predicate(
            FilterField::Material,
            &vocabulary,
            &Selection::Custom(BTreeSet::new()),
        );
        assert!(empty.is_everything());
    }

    #[test]
    fn material_predicate_matches_by_substring_containment() {
        let vocabulary = tokens(&["Bronze", "Iron", "Silver"]);
        let predicate = build_predicate(
            FilterField::Material,
            &vocabulary,
            &Selection::Custom(tokens(&["Iron"])),
        );
        assert!(predicate.matches(&record(Some("Iron Bronze"), None)));
        assert!(predicate.matches(&record(Some("Iron, Silver"), None)));
        assert!(!predicate.matches(&record(Some("Bronze"), None)));
        assert!(!predicate.matches(&record(None, None)));
    }

    #[test]
    fn site_predicate_matches_by_exact_membership() {
        let vocabulary = tokens(&["Birka", "Gamla Uppsala", "Hedeby"]);
        let predicate = build_predicate(
            FilterField::Site,
            &vocabulary,
            &Selection::Custom(tokens(&["Gamla Uppsala"])),
        );
        assert!(predicate.matches(&record(None, Some("Gamla Uppsala"))));
        assert!(!predicate.matches(&record(None, Some("Uppsala"))));
        assert!(!predicate.matches(&record(None, None)));
    }

    #[test]
    fn custom_site_selection_keeps_only_matching_records() {
        let dataset = Dataset::new(
            DatasetKind::War,
            vec![
                record(None, Some("A")),
                record(None, Some("B")),
                record(None, Some("A")),
            ],
        );
        let vocabulary = tokens(&["A", "B"]);
        let predicate = build_predicate(
            FilterField::Site,
            &vocabulary,
            &Selection::Custom(tokens(&["A"])),
        );
        let view = apply(&dataset, &[predicate]);
        assert_eq!(view.len(), 2);
        assert!(
            view.records
                .iter()
                .all(|record| record.site_name.as_deref() == Some("A"))
        );
    }

    #[test]
    fn all_constant_true_predicates_copy_the_dataset() {
        let dataset = Dataset::new(
            DatasetKind::Trade,
            vec![record(Some("Iron"), Some("A")), record(None, None)],
        );
        let view = apply(
            &dataset,
            &[FieldPredicate::Everything, FieldPredicate::Everything],
        );
        assert_eq!(view.len(), dataset.len());
    }

    #[test]
    fn empty_conjunction_result_is_a_view_not_an_error() {
        let dataset = Dataset::new(DatasetKind::War, vec![record(Some("Iron"), Some("A"))]);
        let predicates = [
            FieldPredicate::MaterialAnyOf(tokens(&["Gold"])),
            FieldPredicate::SiteOneOf(tokens(&["A"])),
        ];
        let view = apply(&dataset, &predicates);
        assert!(view.is_empty());
    }

    #[test]
    fn conjunction_requires_every_predicate() {
        let dataset = Dataset::new(
            DatasetKind::War,
            vec![
                record(Some("Iron"), Some("A")),
                record(Some("Iron"), Some("B")),
                record(Some("Bronze"), Some("A")),
            ],
        );
        let predicates = [
            FieldPredicate::MaterialAnyOf(tokens(&["Iron"])),
            FieldPredicate::SiteOneOf(tokens(&["A"])),
        ];
        let view = apply(&dataset, &predicates);
        assert_eq!(view.len(), 1);
        assert!(view.records[0].material_raw.as_deref() == Some("Iron"));
        assert!(view.records[0].site_name.as_deref() == Some("A"));
    }
}
