//! Straight-line leg provider (fallback when OSRM is unavailable).
//!
//! Uses great-circle distance and an assumed speed to estimate travel time.
//! Less accurate than OSRM (ignores roads) but always available.

use crate::error::OsrmError;
use crate::geo::{GeoPoint, distance};
use crate::polyline::Polyline;
use crate::traits::{RouteLeg, RouteLegProvider};

/// Average travel speed assumption for time estimation.
const DEFAULT_SPEED_KMH: f64 = 40.0;

#[derive(Debug, Clone)]
pub struct HaversineLegProvider {
    /// Assumed average speed in km/h.
    pub speed_kmh: f64,
}

impl Default for HaversineLegProvider {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_SPEED_KMH,
        }
    }
}

impl HaversineLegProvider {
    /// Creates a provider that assumes `speed_kmh` for every leg.
    pub fn new(speed_kmh: f64) -> Self {
        Self { speed_kmh }
    }

    fn km_to_seconds(&self, km: f64) -> f64 {
        (km / self.speed_kmh * 3600.0).round()
    }
}

impl RouteLegProvider for HaversineLegProvider {
    fn leg(&self, from: GeoPoint, to: GeoPoint) -> Result<RouteLeg, OsrmError> {
        let km = distance(from, to);
        Ok(RouteLeg {
            distance_m: km * 1000.0,
            duration_s: self.km_to_seconds(km),
            geometry: Polyline::new(vec![from, to]),
        })
    }
}
