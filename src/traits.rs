//! Seams between the route-ordering core and the records it orders.
//!
//! Apps implement these for their own data models; the core only ever sees
//! coordinates.

use crate::error::OsrmError;
use crate::geo::GeoPoint;
use crate::polyline::Polyline;

/// Anything that can be placed on a route.
pub trait Waypoint {
    /// Location of the stop, or `None` when the record carries no usable
    /// coordinates.
    fn location(&self) -> Option<GeoPoint>;
}

impl Waypoint for GeoPoint {
    fn location(&self) -> Option<GeoPoint> {
        Some(*self)
    }
}

impl<W: Waypoint + ?Sized> Waypoint for &W {
    fn location(&self) -> Option<GeoPoint> {
        (**self).location()
    }
}

/// Travel between one origin and one destination.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RouteLeg {
    /// Distance in meters.
    pub distance_m: f64,
    /// Duration in seconds.
    pub duration_s: f64,
    pub geometry: Polyline,
}

/// Provides travel distance, duration and geometry for a single leg.
pub trait RouteLegProvider {
    fn leg(&self, from: GeoPoint, to: GeoPoint) -> Result<RouteLeg, OsrmError>;

    /// Legs between consecutive points of `points`.
    fn legs(&self, points: &[GeoPoint]) -> Result<Vec<RouteLeg>, OsrmError> {
        points
            .windows(2)
            .map(|pair| self.leg(pair[0], pair[1]))
            .collect()
    }
}
