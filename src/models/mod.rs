//! Data models for the Songkhla guide
//!
//! This module contains the record shapes read from the remote store,
//! organized by concern:
//! - Category: the five collections and their display constants
//! - Coordinate: geographic position of a place
//! - Places: attractions, cafes, restaurants and temples
//! - Festival: the coordinate-less yearly events

pub mod category;
pub mod coordinate;
pub mod festival;
pub mod places;

pub use category::Category;
pub use coordinate::Coordinate;
pub use festival::Festival;
pub use places::{Attraction, Cafe, Restaurant, Temple};

use serde::de::DeserializeOwned;

use crate::handoff::Platform;
use crate::view::Card;

/// A record shape held by one list screen.
pub trait Entity: DeserializeOwned + Clone + Send + Sync + 'static {
    /// Category whose collection holds this record shape
    const CATEGORY: Category;

    /// List key, unique within the collection
    fn id(&self) -> &str;

    /// Build the card shown for this record
    fn card(&self, platform: Platform) -> Card;
}

/// Deserializers for the loosely typed columns the store hands back
pub(crate) mod de {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Integer(i64),
        Float(f64),
    }

    /// Accept `"12"` as well as `12` for identifier columns.
    pub fn id<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match StringOrNumber::deserialize(deserializer)? {
            StringOrNumber::String(s) => s,
            StringOrNumber::Integer(n) => n.to_string(),
            StringOrNumber::Float(n) => n.to_string(),
        })
    }

    /// Missing, null and empty phone numbers all count as "no phone".
    pub fn phone<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let phone = Option::<String>::deserialize(deserializer)?;
        Ok(phone.filter(|p| !p.is_empty()))
    }
}
