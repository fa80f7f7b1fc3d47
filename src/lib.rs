#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Pure aggregates over filtered views (frequency table, yearly counts).
pub mod aggregate;
/// Column alias tables, delimiters, and the map viewport bounds.
pub mod constants;
/// Record, dataset, and filterable-field types.
pub mod data;
/// Reusable demo runners wrapped by the cargo examples in `demos/`.
pub mod example_apps;
/// Selection predicates and the AND-combining record filter.
pub mod filter;
/// Geographic point layer and viewport annotation.
pub mod geo;
/// CSV dataset loading and column normalization.
pub mod loader;
/// Per-session render-cycle orchestration.
pub mod session;
/// Multi-value token parsing.
pub mod tokens;
/// Shared type aliases.
pub mod types;
/// Field vocabulary extraction.
pub mod vocabulary;

mod errors;

pub use aggregate::{MaterialFrequency, TokenCount, material_frequency, yearly_counts};
pub use data::{ArtifactRecord, Dataset, DatasetKind, FilterField};
pub use errors::CatalogError;
pub use filter::{
    FieldPredicate, FilterSelection, FilteredView, Selection, apply, build_predicate,
};
pub use geo::{BoundingBox, ClippedPoint, EUROPE_VIEWPORT, GeoLayer, GeoPoint, clip};
pub use loader::{CsvLoaderConfig, load_dataset};
pub use session::{CatalogSession, RenderCycle};
pub use tokens::{loose_tokens, material_tokens, material_tokens_opt};
pub use types::{SiteName, Token, Year};
pub use vocabulary::{FieldVocabularies, field_vocabulary};
