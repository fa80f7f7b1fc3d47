//! CSV dataset loading and column normalization.
//!
//! The two catalog tables disagree on coordinate column names (the war table
//! uses `plats_latitude`/`plats_longitude`). Header aliases are resolved to
//! canonical positions before any record is built, so the normalized names
//! are bound to the returned dataset by construction rather than computed
//! and discarded.

use std::path::{Path, PathBuf};

use csv::StringRecord;
use tracing::{debug, info};

use crate::constants::columns;
use crate::data::{ArtifactRecord, Dataset, DatasetKind};
use crate::errors::CatalogError;
use crate::types::Year;

/// Configuration for loading one catalog CSV into a [`Dataset`].
#[derive(Clone, Debug)]
pub struct CsvLoaderConfig {
    /// Which catalog table this file holds.
    pub kind: DatasetKind,
    /// Path to the CSV file.
    pub path: PathBuf,
    /// Whether rows with a deviating cell count are tolerated
    /// (missing cells become `None` fields).
    pub flexible: bool,
}

impl CsvLoaderConfig {
    /// Create a loader config for a catalog file.
    pub fn new(kind: DatasetKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
            flexible: true,
        }
    }

    /// Override whether ragged rows are tolerated.
    pub fn with_flexible(mut self, flexible: bool) -> Self {
        self.flexible = flexible;
        self
    }

    /// Read the file into an immutable dataset.
    ///
    /// File-not-found and structurally malformed CSV surface as errors here;
    /// blank or unparseable cells inside a row degrade to `None` fields.
    pub fn load(&self) -> Result<Dataset, CatalogError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(self.flexible)
            .trim(csv::Trim::All)
            .from_path(&self.path)?;
        let headers = reader.headers()?.clone();
        let map = ColumnMap::resolve(self.kind, &headers)?;

        let mut records = Vec::new();
        for (row, result) in reader.records().enumerate() {
            let cells = result?;
            records.push(map.build_record(self.kind, row, &cells));
        }
        info!(
            kind = %self.kind,
            path = %self.path.display(),
            records = records.len(),
            "dataset loaded"
        );
        Ok(Dataset::new(self.kind, records))
    }
}

/// Load a catalog file with default loader settings.
pub fn load_dataset(kind: DatasetKind, path: impl AsRef<Path>) -> Result<Dataset, CatalogError> {
    CsvLoaderConfig::new(kind, path.as_ref()).load()
}

/// Resolved header positions after alias normalization.
struct ColumnMap {
    object_name: Option<usize>,
    site_name: usize,
    museum: Option<usize>,
    catalog_link: Option<usize>,
    latitude: Option<usize>,
    longitude: Option<usize>,
    material: usize,
    year_uncovered: Option<usize>,
    era_start_year: Option<usize>,
    era_end_year: Option<usize>,
    width: Option<usize>,
    length: Option<usize>,
    thickness: Option<usize>,
    diameter: Option<usize>,
    weight: Option<usize>,
}

impl ColumnMap {
    /// Match headers against the per-field alias tables.
    ///
    /// Material and site columns are required (the filter controls are built
    /// from them); everything else is optional and degrades to `None` fields.
    fn resolve(kind: DatasetKind, headers: &StringRecord) -> Result<Self, CatalogError> {
        let find = |aliases: &[&str]| {
            aliases.iter().find_map(|alias| {
                headers
                    .iter()
                    .position(|header| header.eq_ignore_ascii_case(alias))
            })
        };
        let require = |aliases: &[&str]| {
            find(aliases).ok_or_else(|| CatalogError::MissingColumn {
                kind,
                column: aliases[0].to_string(),
            })
        };
        Ok(Self {
            object_name: find(columns::OBJECT_NAME),
            site_name: require(columns::SITE_NAME)?,
            museum: find(columns::MUSEUM),
            catalog_link: find(columns::CATALOG_LINK),
            latitude: find(columns::LATITUDE),
            longitude: find(columns::LONGITUDE),
            material: require(columns::MATERIAL)?,
            year_uncovered: find(columns::YEAR_UNCOVERED),
            era_start_year: find(columns::ERA_START_YEAR),
            era_end_year: find(columns::ERA_END_YEAR),
            width: find(columns::WIDTH),
            length: find(columns::LENGTH),
            thickness: find(columns::THICKNESS),
            diameter: find(columns::DIAMETER),
            weight: find(columns::WEIGHT),
        })
    }

    fn build_record(&self, kind: DatasetKind, row: usize, cells: &StringRecord) -> ArtifactRecord {
        ArtifactRecord {
            object_name: self.object_name.and_then(|idx| text_cell(cells, idx)),
            site_name: text_cell(cells, self.site_name),
            museum: self.museum.and_then(|idx| text_cell(cells, idx)),
            catalog_link: self.catalog_link.and_then(|idx| text_cell(cells, idx)),
            latitude: self.latitude.and_then(|idx| float_cell(kind, row, cells, idx)),
            longitude: self
                .longitude
                .and_then(|idx| float_cell(kind, row, cells, idx)),
            material_raw: text_cell(cells, self.material),
            year_uncovered: self
                .year_uncovered
                .and_then(|idx| year_cell(kind, row, cells, idx)),
            era_start_year: self
                .era_start_year
                .and_then(|idx| year_cell(kind, row, cells, idx)),
            era_end_year: self
                .era_end_year
                .and_then(|idx| year_cell(kind, row, cells, idx)),
            width: self.width.and_then(|idx| float_cell(kind, row, cells, idx)),
            length: self.length.and_then(|idx| float_cell(kind, row, cells, idx)),
            thickness: self
                .thickness
                .and_then(|idx| float_cell(kind, row, cells, idx)),
            diameter: self
                .diameter
                .and_then(|idx| float_cell(kind, row, cells, idx)),
            weight: self.weight.and_then(|idx| float_cell(kind, row, cells, idx)),
        }
    }
}

fn text_cell(cells: &StringRecord, idx: usize) -> Option<String> {
    let value = cells.get(idx)?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn float_cell(kind: DatasetKind, row: usize, cells: &StringRecord, idx: usize) -> Option<f64> {
    let value = cells.get(idx)?.trim();
    if value.is_empty() {
        return None;
    }
    match value.parse::<f64>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            debug!(kind = %kind, row, column = idx, value, "non-numeric cell treated as absent");
            None
        }
    }
}

fn year_cell(kind: DatasetKind, row: usize, cells: &StringRecord, idx: usize) -> Option<Year> {
    let value = cells.get(idx)?.trim();
    if value.is_empty() {
        return None;
    }
    match value.parse::<Year>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            debug!(kind = %kind, row, column = idx, value, "non-integer year treated as absent");
            None
        }
    }
}
