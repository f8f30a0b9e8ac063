//! View models rendered by the terminal shell and served by the HTTP API

pub mod card;
pub mod map;
pub mod screen;

pub use card::{Card, MapSection, PhoneAction};
pub(crate) use card::PlaceCard;
pub use map::MapPreview;
pub use screen::ScreenView;
