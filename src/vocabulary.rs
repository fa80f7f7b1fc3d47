//! Distinct-token vocabulary extraction used to populate selection controls.

use std::collections::BTreeSet;

use crate::data::{Dataset, FilterField};
use crate::tokens::material_tokens;
use crate::types::Token;

/// Distinct tokens for one filterable field across a whole dataset.
///
/// Pure read over the records; iteration order does not affect the result.
/// Material values run through the comma tokenizer, while site values are
/// atomic and contribute their whole trimmed text.
pub fn field_vocabulary(dataset: &Dataset, field: FilterField) -> BTreeSet<Token> {
    let mut vocabulary = BTreeSet::new();
    for record in &dataset.records {
        match field {
            FilterField::Material => {
                if let Some(raw) = record.material_raw.as_deref() {
                    vocabulary.extend(material_tokens(raw));
                }
            }
            FilterField::Site => {
                if let Some(site) = record.site_name.as_deref() {
                    let trimmed = site.trim();
                    if !trimmed.is_empty() {
                        vocabulary.insert(trimmed.to_string());
                    }
                }
            }
        }
    }
    vocabulary
}

/// Both field vocabularies, computed once per dataset.
///
/// Effectively immutable: recomputed only if the dataset changes, which
/// never happens within a session. Sessions cache one of these.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldVocabularies {
    /// Distinct material tokens.
    pub materials: BTreeSet<Token>,
    /// Distinct site names.
    pub sites: BTreeSet<Token>,
}

impl FieldVocabularies {
    /// Scan a dataset once per field.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            materials: field_vocabulary(dataset, FilterField::Material),
            sites: field_vocabulary(dataset, FilterField::Site),
        }
    }

    /// Vocabulary for one field.
    pub fn for_field(&self, field: FilterField) -> &BTreeSet<Token> {
        match field {
            FilterField::Material => &self.materials,
            FilterField::Site => &self.sites,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ArtifactRecord, DatasetKind};

    fn record(material: Option<&str>, site: Option<&str>) -> ArtifactRecord {
        ArtifactRecord {
            material_raw: material.map(str::to_string),
            site_name: site.map(str::to_string),
            ..ArtifactRecord::default()
        }
    }

    #[test]
    fn material_vocabulary_unions_parsed_tokens() {
        let dataset = Dataset::new(
            DatasetKind::War,
            vec![
                record(Some("Iron, Bronze"), Some("Birka")),
                record(Some("Iron, Silver"), None),
                record(None, Some("Hedeby")),
            ],
        );
        let vocabulary = field_vocabulary(&dataset, FilterField::Material);
        assert_eq!(
            vocabulary,
            BTreeSet::from([
                "Bronze".to_string(),
                "Iron".to_string(),
                "Silver".to_string()
            ])
        );
    }

    #[test]
    fn site_vocabulary_keeps_multi_word_names_whole() {
        let dataset = Dataset::new(
            DatasetKind::Trade,
            vec![
                record(None, Some("Gamla Uppsala")),
                record(None, Some("Birka")),
                record(None, Some("  Birka ")),
                record(None, Some("   ")),
            ],
        );
        let vocabulary = field_vocabulary(&dataset, FilterField::Site);
        assert_eq!(
            vocabulary,
            BTreeSet::from(["Birka".to_string(), "Gamla Uppsala".to_string()])
        );
    }

    #[test]
    fn vocabularies_cache_both_fields() {
        let dataset = Dataset::new(
            DatasetKind::War,
            vec![record(Some("Iron"), Some("Birka"))],
        );
        let vocabularies = FieldVocabularies::from_dataset(&dataset);
        assert_eq!(
            vocabularies.for_field(FilterField::Material),
            &BTreeSet::from(["Iron".to_string()])
        );
        assert_eq!(
            vocabularies.for_field(FilterField::Site),
            &BTreeSet::from(["Birka".to_string()])
        );
    }
}
