//! Test fixtures for itinerary-router.
//!
//! Provides realistic test data:
//! - Real Hanoi locations (from OpenStreetMap)
//! - Builders for activity records

pub mod hanoi_locations;

pub use hanoi_locations::*;
