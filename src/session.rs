//! Per-session orchestration of the render cycle.
//!
//! A session owns a shared, read-only dataset plus its cached vocabularies.
//! Every user interaction recomputes predicates, the filtered view, and both
//! aggregates in strict sequential order; no state is carried between
//! interactions beyond the dataset and vocabularies.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::aggregate::{MaterialFrequency, material_frequency, yearly_counts};
use crate::data::{Dataset, FilterField};
use crate::filter::{FilterSelection, FilteredView, apply, build_predicate};
use crate::geo::{GeoLayer, clip};
use crate::types::Year;
use crate::vocabulary::FieldVocabularies;

/// One user's view over a shared dataset.
///
/// Datasets and vocabularies may be shared read-only across sessions;
/// selections and render cycles are transient per interaction.
pub struct CatalogSession {
    dataset: Arc<Dataset>,
    vocabularies: FieldVocabularies,
}

/// Everything the presentation layer needs after one interaction.
///
/// `None` aggregates are explicit no-data conditions: display the message,
/// not an empty chart or map layer.
pub struct RenderCycle {
    /// The filtered subset, for tabular display.
    pub view: FilteredView,
    /// Material frequency table; `None` means "no material data".
    pub material_frequency: Option<MaterialFrequency>,
    /// Records per discovery year, ascending; empty when no year is known.
    pub yearly_counts: BTreeMap<Year, usize>,
    /// Map point layer; `None` means "no geographic data available".
    pub geo_layer: Option<GeoLayer>,
}

impl CatalogSession {
    /// Open a session, computing both field vocabularies once.
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let vocabularies = FieldVocabularies::from_dataset(&dataset);
        debug!(
            kind = %dataset.kind,
            records = dataset.len(),
            materials = vocabularies.materials.len(),
            sites = vocabularies.sites.len(),
            "session opened"
        );
        Self {
            dataset,
            vocabularies,
        }
    }

    /// The dataset this session reads from.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Cached vocabularies used to populate selection controls.
    pub fn vocabularies(&self) -> &FieldVocabularies {
        &self.vocabularies
    }

    /// Recompute the filtered view and every aggregate for a selection.
    pub fn refresh(&self, selection: &FilterSelection) -> RenderCycle {
        let predicates = [
            build_predicate(
                FilterField::Material,
                &self.vocabularies.materials,
                &selection.materials,
            ),
            build_predicate(FilterField::Site, &self.vocabularies.sites, &selection.sites),
        ];
        let view = apply(&self.dataset, &predicates);
        debug!(
            kind = %self.dataset.kind,
            total = self.dataset.len(),
            filtered = view.len(),
            "render cycle"
        );
        let material_frequency = material_frequency(&view);
        let yearly_counts = yearly_counts(&view);
        let geo_layer = clip(&view);
        RenderCycle {
            view,
            material_frequency,
            yearly_counts,
            geo_layer,
        }
    }
}
