/// Constants used by header alias resolution in the CSV loader.
///
/// Each slice lists accepted headers for one canonical record field, most
/// preferred first. The war table names its coordinate columns
/// `plats_latitude`/`plats_longitude`; both tables must end up on the
/// canonical `latitude`/`longitude` pair before any record is built.
pub mod columns {
    /// Accepted headers for `ArtifactRecord::object_name`.
    pub const OBJECT_NAME: &[&str] = &["object_name", "Object", "Objekt"];
    /// Accepted headers for `ArtifactRecord::site_name`.
    pub const SITE_NAME: &[&str] = &["site_name", "Plats"];
    /// Accepted headers for `ArtifactRecord::museum`.
    pub const MUSEUM: &[&str] = &["museum", "Museum"];
    /// Accepted headers for `ArtifactRecord::catalog_link`.
    pub const CATALOG_LINK: &[&str] = &["catalog_link", "Link", "URL"];
    /// Accepted headers for `ArtifactRecord::latitude`.
    pub const LATITUDE: &[&str] = &["latitude", "plats_latitude"];
    /// Accepted headers for `ArtifactRecord::longitude`.
    pub const LONGITUDE: &[&str] = &["longitude", "plats_longitude"];
    /// Accepted headers for `ArtifactRecord::material_raw`.
    pub const MATERIAL: &[&str] = &["material", "Material_translated", "Material"];
    /// Accepted headers for `ArtifactRecord::year_uncovered`.
    pub const YEAR_UNCOVERED: &[&str] = &["year_uncovered", "Year_found"];
    /// Accepted headers for `ArtifactRecord::era_start_year`.
    pub const ERA_START_YEAR: &[&str] = &["era_start_year", "Era_start"];
    /// Accepted headers for `ArtifactRecord::era_end_year`.
    pub const ERA_END_YEAR: &[&str] = &["era_end_year", "Era_end"];
    /// Accepted headers for `ArtifactRecord::width`.
    pub const WIDTH: &[&str] = &["width", "Width"];
    /// Accepted headers for `ArtifactRecord::length`.
    pub const LENGTH: &[&str] = &["length", "Length"];
    /// Accepted headers for `ArtifactRecord::thickness`.
    pub const THICKNESS: &[&str] = &["thickness", "Thickness"];
    /// Accepted headers for `ArtifactRecord::diameter`.
    pub const DIAMETER: &[&str] = &["diameter", "Diameter"];
    /// Accepted headers for `ArtifactRecord::weight`.
    pub const WEIGHT: &[&str] = &["weight", "Weight"];
}

/// Constants used by the token parser.
pub mod parsing {
    /// Delimiter between tokens in raw material values.
    pub const MATERIAL_DELIMITER: char = ',';
}

/// Constants used by the map viewport annotation.
pub mod geo {
    /// Western edge of the continental-Europe viewport, degrees longitude.
    pub const VIEWPORT_MIN_LONGITUDE: f64 = -25.0;
    /// Eastern edge of the continental-Europe viewport, degrees longitude.
    pub const VIEWPORT_MAX_LONGITUDE: f64 = 40.0;
    /// Southern edge of the continental-Europe viewport, degrees latitude.
    pub const VIEWPORT_MIN_LATITUDE: f64 = 34.0;
    /// Northern edge of the continental-Europe viewport, degrees latitude.
    pub const VIEWPORT_MAX_LATITUDE: f64 = 71.0;
}
