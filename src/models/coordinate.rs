//! Geographic position of a place

use serde::{Deserialize, Serialize};

/// Latitude/longitude pair in decimal degrees
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Format as `lat, lon` with four decimals
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }

    /// Corners `(south_west, north_east)` of a window of `lat_delta` x `lon_delta` around this point
    #[must_use]
    pub fn window(&self, lat_delta: f64, lon_delta: f64) -> (Coordinate, Coordinate) {
        (
            Coordinate::new(self.latitude - lat_delta / 2.0, self.longitude - lon_delta / 2.0),
            Coordinate::new(self.latitude + lat_delta / 2.0, self.longitude + lon_delta / 2.0),
        )
    }
}
