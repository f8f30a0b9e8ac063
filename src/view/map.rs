//! Small read-only map shown inside a card

use serde::Serialize;

use crate::models::Coordinate;

/// Non-interactive map window centred on a place
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPreview {
    pub center: Coordinate,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
    /// Marker colour, `#rrggbb`
    pub pin_color: String,
    /// Always false: the preview neither scrolls nor zooms
    pub interactive: bool,
}

impl MapPreview {
    #[must_use]
    pub fn new(center: Coordinate, delta: f64, pin_color: &str) -> Self {
        Self {
            center,
            latitude_delta: delta,
            longitude_delta: delta,
            pin_color: pin_color.to_string(),
            interactive: false,
        }
    }

    /// South-west and north-east corners of the visible window
    #[must_use]
    pub fn bounds(&self) -> (Coordinate, Coordinate) {
        self.center.window(self.latitude_delta, self.longitude_delta)
    }

    /// Web map zoom level showing roughly the same window
    #[must_use]
    pub fn zoom(&self) -> u8 {
        let span = self.latitude_delta.max(self.longitude_delta);
        if span <= 0.0 {
            return 19;
        }
        // clamped to 1..=19, so the cast cannot truncate
        (360.0 / span).log2().round().clamp(1.0, 19.0) as u8
    }

    /// OpenStreetMap page with a marker at the centre, for terminals
    #[must_use]
    pub fn osm_url(&self) -> String {
        let Coordinate {
            latitude,
            longitude,
        } = self.center;
        format!(
            "https://www.openstreetmap.org/?mlat={latitude}&mlon={longitude}#map={}/{latitude}/{longitude}",
            self.zoom()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.01, 15)]
    #[case(0.005, 16)]
    #[case(1000.0, 1)]
    #[case(0.0, 19)]
    fn test_zoom_from_delta(#[case] delta: f64, #[case] expected: u8) {
        let preview = MapPreview::new(Coordinate::new(7.2, 100.6), delta, "#2ecc71");
        assert_eq!(preview.zoom(), expected);
    }

    #[test]
    fn test_osm_url_points_at_center() {
        let preview = MapPreview::new(Coordinate::new(7.2, 100.6), 0.01, "#2ecc71");
        assert_eq!(
            preview.osm_url(),
            "https://www.openstreetmap.org/?mlat=7.2&mlon=100.6#map=15/7.2/100.6"
        );
        assert!(!preview.interactive);
    }
}
