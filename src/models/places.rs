//! Places with an address and a position: attractions, cafes, restaurants, temples

use serde::{Deserialize, Serialize};

use super::{Category, Coordinate, Entity, de};
use crate::handoff::Platform;
use crate::view::{Card, PlaceCard};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Attraction {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    pub name: String,
    pub image: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A cafe, read from the `coffee` collection
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Cafe {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    pub name: String,
    pub image: String,
    pub address: String,
    #[serde(default, deserialize_with = "de::phone")]
    pub phone: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Restaurant {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    pub name: String,
    pub image: String,
    pub address: String,
    #[serde(default, deserialize_with = "de::phone")]
    pub phone: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Temple {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    pub name: String,
    pub image: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

macro_rules! place_entity {
    ($ty:ty, $category:expr) => {
        impl $ty {
            #[must_use]
            pub fn coordinate(&self) -> Coordinate {
                Coordinate::new(self.latitude, self.longitude)
            }
        }

        impl Entity for $ty {
            const CATEGORY: Category = $category;

            fn id(&self) -> &str {
                &self.id
            }

            fn card(&self, platform: Platform) -> Card {
                PlaceCard {
                    category: Self::CATEGORY,
                    id: &self.id,
                    name: &self.name,
                    image: &self.image,
                    address: &self.address,
                    phone: self.phone_number(),
                    coordinate: self.coordinate(),
                }
                .build(platform)
            }
        }
    };
}

place_entity!(Attraction, Category::Attractions);
place_entity!(Cafe, Category::Cafes);
place_entity!(Restaurant, Category::Restaurants);
place_entity!(Temple, Category::Temples);

impl Attraction {
    fn phone_number(&self) -> Option<&str> {
        None
    }
}

impl Cafe {
    fn phone_number(&self) -> Option<&str> {
        self.phone.as_deref()
    }
}

impl Restaurant {
    fn phone_number(&self) -> Option<&str> {
        self.phone.as_deref()
    }
}

impl Temple {
    fn phone_number(&self) -> Option<&str> {
        None
    }
}
