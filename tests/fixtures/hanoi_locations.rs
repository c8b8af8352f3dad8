//! Real Hanoi locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. Covers a typical day-trip spread
//! across the Old Quarter, Ba Dinh and West Lake.

#![allow(dead_code)]

use itinerary_router::geo::GeoPoint;
use itinerary_router::itinerary::{Activity, Place};

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }

    /// An activity at this location with the given time label.
    pub fn activity(&self, time: &str) -> Activity {
        Activity {
            time: Some(time.to_string()),
            place: Place {
                id: Some(self.name.to_lowercase().replace(' ', "-")),
                name: self.name.to_string(),
                latitude: Some(self.lat),
                longitude: Some(self.lng),
            },
            notes: None,
        }
    }
}

// ============================================================================
// Sights
// ============================================================================

pub const SIGHTS: &[Location] = &[
    Location::new("Hoan Kiem Lake", 21.0287747, 105.8523853),
    Location::new("Ngoc Son Temple", 21.0306826, 105.8524176),
    Location::new("St Joseph's Cathedral", 21.0286669, 105.8489527),
    Location::new("Hoa Lo Prison", 21.0253005, 105.8463214),
    Location::new("Temple of Literature", 21.0285560, 105.8355480),
    Location::new("Ho Chi Minh Mausoleum", 21.0368320, 105.8346880),
    Location::new("One Pillar Pagoda", 21.0358636, 105.8336215),
    Location::new("Tran Quoc Pagoda", 21.0479722, 105.8368133),
    Location::new("Dong Xuan Market", 21.0382386, 105.8497689),
    Location::new("Long Bien Bridge", 21.0430220, 105.8604390),
    Location::new("Hanoi Opera House", 21.0242670, 105.8575970),
    Location::new("Vietnam Museum of Ethnology", 21.0405850, 105.7985960),
];

// ============================================================================
// Food
// ============================================================================

pub const FOOD: &[Location] = &[
    Location::new("Bun Cha Huong Lien", 21.0184770, 105.8535650),
    Location::new("Pho Gia Truyen", 21.0330680, 105.8465450),
    Location::new("Cafe Giang", 21.0326540, 105.8540840),
    Location::new("Banh Mi 25", 21.0366310, 105.8488750),
];

/// Get all locations as a flat list.
pub fn all_locations() -> Vec<Location> {
    SIGHTS.iter().chain(FOOD.iter()).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_in_hanoi_area() {
        for loc in all_locations() {
            assert!(loc.lat > 20.9 && loc.lat < 21.1, "{} lat out of range: {}", loc.name, loc.lat);
            assert!(loc.lng > 105.7 && loc.lng < 105.9, "{} lng out of range: {}", loc.name, loc.lng);
        }
    }
}
