//! Yearly festivals: no address, no position

use serde::{Deserialize, Serialize};

use super::{Category, Entity, de};
use crate::handoff::Platform;
use crate::view::Card;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Festival {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    pub name: String,
    /// Free-form month label, e.g. "ตุลาคม"
    pub month: String,
    pub image: String,
}

impl Entity for Festival {
    const CATEGORY: Category = Category::Festivals;

    fn id(&self) -> &str {
        &self.id
    }

    fn card(&self, _platform: Platform) -> Card {
        Card {
            key: self.id.clone(),
            title: self.name.clone(),
            image: self.image.clone(),
            address: None,
            month: Some(self.month.clone()),
            caption: Self::CATEGORY.card_caption().map(str::to_string),
            phone: None,
            map: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_festival_card_has_no_map_or_phone() {
        let festival: Festival = serde_json::from_value(json!({
            "id": "f1",
            "name": "Chak Phra Festival",
            "month": "ตุลาคม",
            "image": "http://x/f1.jpg"
        }))
        .unwrap();

        let card = festival.card(Platform::Ios);
        assert_eq!(card.key, "f1");
        assert_eq!(card.title, "Chak Phra Festival");
        assert_eq!(card.month.as_deref(), Some("ตุลาคม"));
        assert_eq!(card.image, "http://x/f1.jpg");
        assert!(card.map.is_none());
        assert!(card.phone.is_none());
        assert!(card.address.is_none());
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let festival: Festival = serde_json::from_value(json!({
            "id": 3,
            "name": "Songkhla Lake Festival",
            "month": "มีนาคม",
            "image": "http://x/f3.jpg",
            "created_at": "2024-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(festival.id, "3");
    }
}
