//! The five guide categories and their display constants

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

use crate::GuideError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Attractions,
    Restaurants,
    Cafes,
    Temples,
    Festivals,
}

impl Category {
    /// Home menu order
    pub const ALL: [Category; 5] = [
        Category::Attractions,
        Category::Restaurants,
        Category::Cafes,
        Category::Temples,
        Category::Festivals,
    ];

    /// URL/CLI slug
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Category::Attractions => "attractions",
            Category::Restaurants => "restaurants",
            Category::Cafes => "cafes",
            Category::Temples => "temples",
            Category::Festivals => "festivals",
        }
    }

    /// Table name in the remote store. Cafes live in `coffee`.
    #[must_use]
    pub fn collection(self) -> &'static str {
        match self {
            Category::Cafes => "coffee",
            other => other.slug(),
        }
    }

    /// Screen header title
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Category::Attractions => "สถานที่ท่องเที่ยว",
            Category::Restaurants => "ร้านอาหารยอดนิยม",
            Category::Cafes => "ร้านกาแฟแนะนำ",
            Category::Temples => "วัดและศาสนสถาน",
            Category::Festivals => "งานประเพณี",
        }
    }

    #[must_use]
    pub fn subtitle(self) -> Option<&'static str> {
        match self {
            Category::Festivals => Some("เทศกาลและกิจกรรมสำคัญในสงขลา"),
            _ => None,
        }
    }

    /// Prefix of each card title. Festival cards carry the bare name.
    #[must_use]
    pub fn glyph(self) -> Option<&'static str> {
        match self {
            Category::Attractions => Some("📍"),
            Category::Restaurants => Some("🍴"),
            Category::Cafes => Some("☕"),
            Category::Temples => Some("🛕"),
            Category::Festivals => None,
        }
    }

    #[must_use]
    pub fn accent_color(self) -> &'static str {
        match self {
            Category::Attractions => "#2ecc71",
            Category::Restaurants => "#e74c3c",
            Category::Cafes => "#f39c12",
            Category::Temples => "#9b59b6",
            Category::Festivals => "#e91e63",
        }
    }

    /// Latitude/longitude span of the card map preview
    #[must_use]
    pub fn map_delta(self) -> Option<f64> {
        match self {
            Category::Attractions => Some(0.01),
            Category::Restaurants | Category::Cafes | Category::Temples => Some(0.005),
            Category::Festivals => None,
        }
    }

    /// Heading shown above the map preview
    #[must_use]
    pub fn map_heading(self) -> Option<&'static str> {
        match self {
            Category::Attractions => Some("พรีวิวตำแหน่ง"),
            Category::Restaurants => Some("พิกัดร้านอาหาร"),
            Category::Cafes => Some("พิกัดร้าน"),
            Category::Temples => Some("พิกัดสถานที่ (กดเพื่อนำทาง)"),
            Category::Festivals => None,
        }
    }

    /// Label of the button that hands off to the map application
    #[must_use]
    pub fn navigate_label(self) -> Option<&'static str> {
        match self {
            Category::Attractions => Some("เปิดแอปนำทาง"),
            Category::Restaurants => Some("นำทางไปร้าน"),
            Category::Cafes => Some("นำทาง"),
            Category::Temples => Some("ดูเส้นทาง"),
            Category::Festivals => None,
        }
    }

    /// Caption printed on every card of the category
    #[must_use]
    pub fn card_caption(self) -> Option<&'static str> {
        match self {
            Category::Festivals => Some("ประเพณีประจำปีจังหวัดสงขลา"),
            _ => None,
        }
    }

    #[must_use]
    pub fn menu_title(self) -> &'static str {
        match self {
            Category::Attractions => "สถานที่ท่องเที่ยว",
            Category::Restaurants => "ร้านอาหาร",
            Category::Cafes => "ร้านกาแฟ",
            Category::Temples => "วัด / ศาสนสถาน",
            Category::Festivals => "งานประเพณีประจำปี",
        }
    }

    #[must_use]
    pub fn menu_icon(self) -> &'static str {
        match self {
            Category::Attractions => "map-marked-alt",
            Category::Restaurants => "utensils",
            Category::Cafes => "coffee",
            Category::Temples => "place-of-worship",
            Category::Festivals => "calendar-star",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Category {
    type Err = GuideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.slug() == wanted)
            .ok_or_else(|| {
                GuideError::validation(format!(
                    "Unknown category '{s}'. Must be one of: {}",
                    Category::ALL.map(Category::slug).join(", ")
                ))
            })
    }
}
