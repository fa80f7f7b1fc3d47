//! Geographic point layer with a fixed continental-Europe viewport.

use serde::Serialize;

use crate::constants::geo::{
    VIEWPORT_MAX_LATITUDE, VIEWPORT_MAX_LONGITUDE, VIEWPORT_MIN_LATITUDE, VIEWPORT_MIN_LONGITUDE,
};
use crate::data::ArtifactRecord;
use crate::filter::FilteredView;

/// Longitude/latitude pair in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GeoPoint {
    /// Degrees east of the prime meridian.
    pub longitude: f64,
    /// Degrees north of the equator.
    pub latitude: f64,
}

/// Axis-aligned longitude/latitude bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BoundingBox {
    /// Western edge.
    pub min_longitude: f64,
    /// Eastern edge.
    pub max_longitude: f64,
    /// Southern edge.
    pub min_latitude: f64,
    /// Northern edge.
    pub max_latitude: f64,
}

impl BoundingBox {
    /// Whether `point` lies inside the box, edges inclusive.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        point.longitude >= self.min_longitude
            && point.longitude <= self.max_longitude
            && point.latitude >= self.min_latitude
            && point.latitude <= self.max_latitude
    }
}

/// Map viewport covering continental Europe.
pub const EUROPE_VIEWPORT: BoundingBox = BoundingBox {
    min_longitude: VIEWPORT_MIN_LONGITUDE,
    max_longitude: VIEWPORT_MAX_LONGITUDE,
    min_latitude: VIEWPORT_MIN_LATITUDE,
    max_latitude: VIEWPORT_MAX_LATITUDE,
};

/// One record projected to a point, annotated against the viewport.
#[derive(Clone, Debug, Serialize)]
pub struct ClippedPoint {
    /// The source record; always has both coordinates present.
    pub record: ArtifactRecord,
    /// The projected point.
    pub point: GeoPoint,
    /// Whether the point falls inside [`EUROPE_VIEWPORT`]. Out-of-viewport
    /// points stay in the layer; the map simply does not draw them.
    pub in_viewport: bool,
}

/// Point layer handed to the map panel.
#[derive(Clone, Debug, Serialize)]
pub struct GeoLayer {
    /// One entry per coordinate-bearing record, in view order.
    pub points: Vec<ClippedPoint>,
    /// The viewport the points were annotated against.
    pub viewport: BoundingBox,
}

impl GeoLayer {
    /// Number of points inside the viewport.
    pub fn visible_count(&self) -> usize {
        self.points.iter().filter(|point| point.in_viewport).count()
    }
}

/// Project records with both coordinates into a point layer.
///
/// Records missing either coordinate are excluded here but remain present in
/// the table and aggregates. Returns `None` when no record qualifies, so the
/// caller can display "no geographic data available" instead of a map layer.
pub fn clip(view: &FilteredView) -> Option<GeoLayer> {
    let mut points = Vec::new();
    for record in &view.records {
        let (Some(latitude), Some(longitude)) = (record.latitude, record.longitude) else {
            continue;
        };
        let point = GeoPoint {
            longitude,
            latitude,
        };
        points.push(ClippedPoint {
            record: record.clone(),
            point,
            in_viewport: EUROPE_VIEWPORT.contains(&point),
        });
    }
    if points.is_empty() {
        None
    } else {
        Some(GeoLayer {
            points,
            viewport: EUROPE_VIEWPORT,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(latitude: Option<f64>, longitude: Option<f64>) -> ArtifactRecord {
        ArtifactRecord {
            latitude,
            longitude,
            ..ArtifactRecord::default()
        }
    }

    fn view(records: Vec<ArtifactRecord>) -> FilteredView {
        FilteredView { records }
    }

    #[test]
    fn records_missing_a_coordinate_are_excluded() {
        let layer = clip(&view(vec![
            record(Some(59.3), Some(18.0)),
            record(Some(59.3), None),
            record(None, Some(18.0)),
            record(None, None),
        ]))
        .expect("layer");
        assert_eq!(layer.points.len(), 1);
        assert!(
            layer
                .points
                .iter()
                .all(|point| point.record.latitude.is_some() && point.record.longitude.is_some())
        );
    }

    #[test]
    fn out_of_viewport_points_are_annotated_not_removed() {
        let layer = clip(&view(vec![
            record(Some(59.3), Some(18.0)),   // Stockholm
            record(Some(41.9), Some(-87.6)),  // Chicago
        ]))
        .expect("layer");
        assert_eq!(layer.points.len(), 2);
        assert!(layer.points[0].in_viewport);
        assert!(!layer.points[1].in_viewport);
        assert_eq!(layer.visible_count(), 1);
    }

    #[test]
    fn empty_qualifying_set_reports_no_geographic_data() {
        assert!(clip(&view(Vec::new())).is_none());
        assert!(clip(&view(vec![record(Some(59.3), None)])).is_none());
    }

    #[test]
    fn viewport_edges_are_inclusive() {
        let west_edge = GeoPoint {
            longitude: -25.0,
            latitude: 34.0,
        };
        let north_east = GeoPoint {
            longitude: 40.0,
            latitude: 71.0,
        };
        let outside = GeoPoint {
            longitude: 40.1,
            latitude: 71.0,
        };
        assert!(EUROPE_VIEWPORT.contains(&west_edge));
        assert!(EUROPE_VIEWPORT.contains(&north_east));
        assert!(!EUROPE_VIEWPORT.contains(&outside));
    }
}
