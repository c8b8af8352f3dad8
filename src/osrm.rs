//! OSRM HTTP adapter for single origin/destination legs.

use serde::Deserialize;
use tracing::warn;

use crate::error::OsrmError;
use crate::geo::GeoPoint;
use crate::polyline::Polyline;
use crate::traits::{RouteLeg, RouteLegProvider};

#[derive(Debug, Clone)]
pub struct OsrmConfig {
    pub base_url: String,
    pub profile: String,
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            profile: "car".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OsrmClient {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
}

impl OsrmClient {
    pub fn new(config: OsrmConfig) -> Result<Self, OsrmError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn route_url(&self, from: GeoPoint, to: GeoPoint) -> String {
        format!(
            "{}/route/v1/{}/{:.6},{:.6};{:.6},{:.6}",
            self.config.base_url.trim_end_matches('/'),
            self.config.profile,
            from.longitude,
            from.latitude,
            to.longitude,
            to.latitude
        )
    }
}

impl RouteLegProvider for OsrmClient {
    fn leg(&self, from: GeoPoint, to: GeoPoint) -> Result<RouteLeg, OsrmError> {
        let body = self
            .client
            .get(self.route_url(from, to))
            .query(&[("overview", "full"), ("geometries", "geojson")])
            .send()?
            .error_for_status()?
            .json::<OsrmRouteResponse>()?;

        leg_from_response(body)
    }
}

fn leg_from_response(body: OsrmRouteResponse) -> Result<RouteLeg, OsrmError> {
    if body.code != "Ok" {
        warn!(code = %body.code, "OSRM returned no route");
        return Err(OsrmError::NoRoute { code: body.code });
    }

    let route = body
        .routes
        .into_iter()
        .next()
        .ok_or(OsrmError::NoRoute { code: body.code })?;

    Ok(RouteLeg {
        distance_m: route.distance,
        duration_s: route.duration,
        geometry: Polyline::from_lng_lat(&route.geometry.coordinates),
    })
}

#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    code: String,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    distance: f64,
    duration: f64,
    geometry: OsrmGeometry,
}

#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    coordinates: Vec<[f64; 2]>,
}
