//! itinerary-router core
//!
//! Orders the stops of a day itinerary to shorten total travel distance.

pub mod error;
pub mod geo;
pub mod optimizer;
pub mod traits;
pub mod itinerary;
pub mod osrm;
pub mod haversine;
pub mod polyline;
