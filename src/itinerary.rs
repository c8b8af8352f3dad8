//! Reordering a day's activities.
//!
//! Validates coordinates, runs the optimizer, and moves the caller's own
//! records into the new order.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::ReorderError;
use crate::geo::GeoPoint;
use crate::optimizer::{optimize_order, path_distance};
use crate::traits::Waypoint;

/// Waypoint cap applied when no other limit is configured.
const DEFAULT_MAX_WAYPOINTS: usize = 25;

/// A place as stored by the data backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// One stop of a day plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default)]
    pub time: Option<String>,
    pub place: Place,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Waypoint for Activity {
    fn location(&self) -> Option<GeoPoint> {
        match (self.place.latitude, self.place.longitude) {
            (Some(latitude), Some(longitude)) => Some(GeoPoint::new(latitude, longitude)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReorderOptions {
    /// Days with more stops than this are rejected before optimizing.
    pub max_waypoints: usize,
}

impl Default for ReorderOptions {
    fn default() -> Self {
        Self {
            max_waypoints: DEFAULT_MAX_WAYPOINTS,
        }
    }
}

/// Result of reordering one day.
#[derive(Debug, Clone)]
pub struct ReorderOutcome<W> {
    /// The caller's records in visiting order.
    pub activities: Vec<W>,
    /// `order[j]` is the original position of the record now at `j`.
    pub order: Vec<usize>,
    pub original_km: f64,
    pub optimized_km: f64,
}

impl<W> ReorderOutcome<W> {
    /// Kilometers saved compared to the original order.
    pub fn saved_km(&self) -> f64 {
        (self.original_km - self.optimized_km).max(0.0)
    }

    /// True when the optimizer kept the original order.
    pub fn is_unchanged(&self) -> bool {
        self.order.iter().enumerate().all(|(position, index)| position == *index)
    }
}

/// Reorder `activities` to shorten the day's total travel distance.
///
/// Every activity must have finite coordinates; otherwise nothing is
/// optimized and [`ReorderError::MissingCoordinates`] lists the offending
/// positions. The first activity stays first.
pub fn reorder_activities<W: Waypoint>(
    activities: Vec<W>,
    options: &ReorderOptions,
) -> Result<ReorderOutcome<W>, ReorderError> {
    let points = collect_points(&activities)?;

    if points.len() > options.max_waypoints {
        warn!(count = points.len(), max = options.max_waypoints, "too many stops to optimize");
        return Err(ReorderError::TooManyWaypoints {
            count: points.len(),
            max: options.max_waypoints,
        });
    }

    let natural: Vec<usize> = (0..points.len()).collect();
    let original_km = path_distance(&points, &natural);
    let order = optimize_order(&points, 0);
    let optimized_km = path_distance(&points, &order);

    let activities = apply_order(activities, &order);

    info!(
        stops = points.len(),
        original_km,
        optimized_km,
        "reordered activities"
    );

    Ok(ReorderOutcome {
        activities,
        order,
        original_km,
        optimized_km,
    })
}

/// Reorder several independent days in parallel.
///
/// Results come back in the same order as `days`.
pub fn reorder_days<W>(
    days: Vec<Vec<W>>,
    options: &ReorderOptions,
) -> Vec<Result<ReorderOutcome<W>, ReorderError>>
where
    W: Waypoint + Send,
{
    days.into_par_iter()
        .map(|day| reorder_activities(day, options))
        .collect()
}

fn collect_points<W: Waypoint>(activities: &[W]) -> Result<Vec<GeoPoint>, ReorderError> {
    let mut points = Vec::with_capacity(activities.len());
    let mut missing = Vec::new();

    for (position, activity) in activities.iter().enumerate() {
        match activity.location() {
            Some(point) if point.is_finite() => points.push(point),
            _ => missing.push(position),
        }
    }

    if missing.is_empty() {
        Ok(points)
    } else {
        warn!(positions = ?missing, "stops without coordinates");
        Err(ReorderError::MissingCoordinates { positions: missing })
    }
}

/// Move each record to its new position without cloning it.
fn apply_order<W>(activities: Vec<W>, order: &[usize]) -> Vec<W> {
    let mut slots: Vec<Option<W>> = activities.into_iter().map(Some).collect();
    order
        .iter()
        .filter_map(|&index| slots[index].take())
        .collect()
}
