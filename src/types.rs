/// Atomic token produced by the token parser.
/// Examples: `Iron`, `Bronze`, `Gilt bronze`
pub type Token = String;
/// Discovery site name, treated as an atomic identifier (never split).
/// Examples: `Birka`, `Gamla Uppsala`
pub type SiteName = String;
/// Raw multi-value field text as it appears in the source table.
/// Examples: `Iron, Bronze`, `Silver`
pub type RawFieldValue = String;
/// Calendar year; negative values denote BCE.
/// Examples: `1873`, `-200`
pub type Year = i32;
/// CSV header name, canonical or source-table alias.
/// Examples: `latitude`, `plats_latitude`, `Plats`
pub type ColumnName = String;
