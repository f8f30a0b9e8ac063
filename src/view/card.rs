//! One rendered record

use serde::Serialize;
use std::fmt::Display;

use super::MapPreview;
use crate::handoff::{DeepLink, Launcher, Platform, dial_link, map_link};
use crate::models::{Category, Coordinate};

/// Card for a single record. Optional parts are absent rather than empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    /// List key: the record id
    pub key: String,
    /// Name, prefixed with the category glyph where the category has one
    pub title: String,
    pub image: String,
    pub address: Option<String>,
    /// Month tag (festivals)
    pub month: Option<String>,
    pub caption: Option<String>,
    pub phone: Option<PhoneAction>,
    pub map: Option<MapSection>,
}

/// Tappable phone number
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhoneAction {
    pub number: String,
    pub link: DeepLink,
}

/// Map preview plus the button handing off to the map application
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapSection {
    pub heading: String,
    pub preview: MapPreview,
    pub button_label: String,
    pub navigate: DeepLink,
}

/// Borrowed fields of a place record, enough to build its card
pub(crate) struct PlaceCard<'a> {
    pub category: Category,
    pub id: &'a str,
    pub name: &'a str,
    pub image: &'a str,
    pub address: &'a str,
    pub phone: Option<&'a str>,
    pub coordinate: Coordinate,
}

impl PlaceCard<'_> {
    pub fn build(self, platform: Platform) -> Card {
        let category = self.category;
        let map = match (
            category.map_delta(),
            category.map_heading(),
            category.navigate_label(),
        ) {
            (Some(delta), Some(heading), Some(button_label)) => Some(MapSection {
                heading: heading.to_string(),
                preview: MapPreview::new(self.coordinate, delta, category.accent_color()),
                button_label: button_label.to_string(),
                navigate: map_link(platform, self.coordinate, self.name),
            }),
            _ => None,
        };

        Card {
            key: self.id.to_string(),
            title: titled(category, self.name),
            image: self.image.to_string(),
            address: Some(self.address.to_string()),
            month: None,
            caption: category.card_caption().map(str::to_string),
            phone: self.phone.map(|number| PhoneAction {
                number: number.to_string(),
                link: dial_link(number),
            }),
            map,
        }
    }
}

fn titled(category: Category, name: &str) -> String {
    match category.glyph() {
        Some(glyph) => format!("{glyph} {name}"),
        None => name.to_string(),
    }
}

impl Card {
    /// Hand off to the map application. Returns false when the card has no map.
    pub fn navigate(&self, launcher: &dyn Launcher) -> bool {
        match &self.map {
            Some(map) => {
                launcher.open(&map.navigate);
                true
            }
            None => false,
        }
    }

    /// Hand off to the dialer. Returns false when the card has no phone.
    pub fn call(&self, launcher: &dyn Launcher) -> bool {
        match &self.phone {
            Some(phone) => {
                launcher.open(&phone.link);
                true
            }
            None => false,
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(month) = &self.month {
            writeln!(f, "[{month}] {}", self.title)?;
        } else {
            writeln!(f, "{}", self.title)?;
        }
        if let Some(address) = &self.address {
            writeln!(f, "   {address}")?;
        }
        if let Some(caption) = &self.caption {
            writeln!(f, "   📅 {caption}")?;
        }
        if let Some(phone) = &self.phone {
            writeln!(f, "   📞 {}", phone.number)?;
        }
        writeln!(f, "   🖼️ {}", self.image)?;
        if let Some(map) = &self.map {
            writeln!(
                f,
                "   🗺️ {}: {} ({})",
                map.heading,
                map.preview.center.format_coordinates(),
                map.preview.osm_url()
            )?;
            let (south_west, north_east) = map.preview.bounds();
            writeln!(
                f,
                "      window {} .. {}",
                south_west.format_coordinates(),
                north_east.format_coordinates()
            )?;
            writeln!(f, "   ➜ {}", map.button_label)?;
        }
        Ok(())
    }
}
