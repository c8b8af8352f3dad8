//! Visiting-order optimizer (2-opt local search over an open path).

use tracing::debug;

use crate::geo::{GeoPoint, distance};

/// Minimum gain (km) for a reversal to count as an improvement.
///
/// Keeps floating-point noise from cycling the search forever.
pub const IMPROVEMENT_EPSILON_KM: f64 = 1e-6;

/// Total length in kilometers of the open path visiting `points` in `order`.
///
/// No return edge from the last point to the first is included.
pub fn path_distance(points: &[GeoPoint], order: &[usize]) -> f64 {
    order
        .windows(2)
        .map(|pair| distance(points[pair[0]], points[pair[1]]))
        .sum()
}

/// Compute a visiting order for `points` that is a local optimum under 2-opt.
///
/// The natural order `0..n` is first rotated so that `start_index` leads;
/// that first position then stays fixed while segments `[i..=k]` with
/// `1 <= i < k <= n-1` are reversed whenever the reversal shortens the path
/// by more than [`IMPROVEMENT_EPSILON_KM`]. A sweep scans every pair before
/// the next one starts, and the search stops after a sweep with no change.
///
/// Inputs with two points or fewer come back in natural order. A
/// `start_index` past the end wraps around. All points must have finite
/// coordinates.
pub fn optimize_order(points: &[GeoPoint], start_index: usize) -> Vec<usize> {
    let n = points.len();
    if n <= 2 {
        return (0..n).collect();
    }

    let start = start_index % n;
    let mut order: Vec<usize> = (start..n).chain(0..start).collect();
    let mut current = path_distance(points, &order);
    let initial = current;

    let mut sweeps = 0usize;
    let mut improved = true;
    while improved {
        improved = false;
        sweeps += 1;

        for i in 1..n - 1 {
            for k in i + 1..n {
                let mut candidate = order.clone();
                candidate[i..=k].reverse();

                let candidate_distance = path_distance(points, &candidate);
                if candidate_distance < current - IMPROVEMENT_EPSILON_KM {
                    order = candidate;
                    current = candidate_distance;
                    improved = true;
                }
            }
        }
    }

    debug!(
        points = n,
        start,
        sweeps,
        initial_km = initial,
        optimized_km = current,
        "2-opt converged"
    );

    order
}

/// True when no single allowed reversal of `order` shortens the path by more
/// than [`IMPROVEMENT_EPSILON_KM`].
pub fn is_locally_optimal(points: &[GeoPoint], order: &[usize]) -> bool {
    let n = order.len();
    if n <= 2 {
        return true;
    }

    let current = path_distance(points, order);
    let mut candidate = order.to_vec();
    for i in 1..n - 1 {
        for k in i + 1..n {
            candidate[i..=k].reverse();
            let shorter = path_distance(points, &candidate) < current - IMPROVEMENT_EPSILON_KM;
            candidate[i..=k].reverse();
            if shorter {
                return false;
            }
        }
    }

    true
}
