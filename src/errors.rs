use std::io;

use thiserror::Error;

use crate::data::DatasetKind;
use crate::types::ColumnName;

/// Error type for dataset loading and schema resolution failures.
///
/// The engine itself is pure and in-memory; every fault that can occur lives
/// in the load step. Missing per-record values are never errors (they are
/// `None` fields on the record), and an empty filtered view is a valid state.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{kind} dataset has no accepted header for required column '{column}'")]
    MissingColumn {
        kind: DatasetKind,
        column: ColumnName,
    },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}
