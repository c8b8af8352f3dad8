//! Route geometry as decoded coordinates.
//!
//! Wire formats (GeoJSON from OSRM, encoded strings for the frontend) are
//! converted at the boundary; inside the crate a route is a point list.

use serde::{Deserialize, Serialize};

use crate::geo::{GeoPoint, distance};

/// A route geometry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<GeoPoint>,
}

impl Polyline {
    /// Creates a polyline from decoded points in travel order.
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    /// Builds a polyline from GeoJSON-ordered `[longitude, latitude]` pairs.
    pub fn from_lng_lat(coordinates: &[[f64; 2]]) -> Self {
        Self {
            points: coordinates
                .iter()
                .map(|[lng, lat]| GeoPoint::new(*lat, *lng))
                .collect(),
        }
    }

    /// Returns a reference to the points.
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Consumes the polyline and returns the owned points.
    pub fn into_points(self) -> Vec<GeoPoint> {
        self.points
    }

    /// Great-circle length along the geometry in kilometers.
    pub fn length_km(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| distance(pair[0], pair[1]))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lng_lat_swaps_axes() {
        let polyline = Polyline::from_lng_lat(&[[105.85, 21.03], [105.86, 21.04]]);
        assert_eq!(
            polyline.points(),
            &[GeoPoint::new(21.03, 105.85), GeoPoint::new(21.04, 105.86)]
        );
    }

    #[test]
    fn test_into_points() {
        let points = vec![GeoPoint::new(38.5, -120.2), GeoPoint::new(40.7, -120.95)];
        let polyline = Polyline::new(points.clone());
        assert_eq!(polyline.into_points(), points);
    }

    #[test]
    fn test_length_of_empty_and_single() {
        assert_eq!(Polyline::default().length_km(), 0.0);
        assert_eq!(Polyline::new(vec![GeoPoint::new(1.0, 2.0)]).length_km(), 0.0);
    }

    #[test]
    fn test_length_sums_segments() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 1.0);
        let c = GeoPoint::new(1.0, 1.0);
        let polyline = Polyline::new(vec![a, b, c]);
        let expected = distance(a, b) + distance(b, c);
        assert!((polyline.length_km() - expected).abs() < 1e-9);
    }
}
