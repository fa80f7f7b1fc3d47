use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use crate::types::{RawFieldValue, SiteName, Year};

/// Which of the two catalog tables a dataset was loaded from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatasetKind {
    /// War-context finds (weapons, armor).
    War,
    /// Trade-context finds (coins, weights, imports).
    Trade,
}

impl DatasetKind {
    /// Stable lowercase name used in logs and CLI arguments.
    pub const fn as_str(&self) -> &'static str {
        match self {
            DatasetKind::War => "war",
            DatasetKind::Trade => "trade",
        }
    }
}

impl std::fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields the selection UI can filter on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterField {
    /// Multi-valued material composition (`material_raw`).
    Material,
    /// Atomic discovery site (`site_name`).
    Site,
}

/// One artifact entry.
///
/// Every attribute is optional: a missing value is a type-level state, not a
/// sentinel or NaN. Operations that need a field skip records without it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ArtifactRecord {
    /// Catalog name of the object.
    pub object_name: Option<String>,
    /// Discovery place, atomic (not multi-valued).
    pub site_name: Option<SiteName>,
    /// Holding museum.
    pub museum: Option<String>,
    /// Link into the museum catalog.
    pub catalog_link: Option<String>,
    /// Site latitude in decimal degrees, when the site's coordinates are known.
    pub latitude: Option<f64>,
    /// Site longitude in decimal degrees, when the site's coordinates are known.
    pub longitude: Option<f64>,
    /// Comma-delimited free-text list of material tokens.
    pub material_raw: Option<RawFieldValue>,
    /// Year the artifact was uncovered.
    pub year_uncovered: Option<Year>,
    /// Start of the era the artifact is dated to.
    pub era_start_year: Option<Year>,
    /// End of the era the artifact is dated to.
    pub era_end_year: Option<Year>,
    /// Width measurement; units are the source table's concern.
    pub width: Option<f64>,
    /// Length measurement.
    pub length: Option<f64>,
    /// Thickness measurement.
    pub thickness: Option<f64>,
    /// Diameter measurement.
    pub diameter: Option<f64>,
    /// Weight measurement.
    pub weight: Option<f64>,
}

/// Ordered collection of records sharing a uniform schema.
///
/// Loaded once per session and immutable for its duration. May be shared
/// read-only across sessions; filtering never mutates it.
#[derive(Clone, Debug)]
pub struct Dataset {
    /// Which catalog table the records came from.
    pub kind: DatasetKind,
    /// The records, in source-table order.
    pub records: Vec<ArtifactRecord>,
    /// Load stamp used in logs.
    pub loaded_at: DateTime<Utc>,
}

impl Dataset {
    /// Wrap prebuilt records as a dataset stamped with the current time.
    pub fn new(kind: DatasetKind, records: Vec<ArtifactRecord>) -> Self {
        Self {
            kind,
            records,
            loaded_at: Utc::now(),
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
