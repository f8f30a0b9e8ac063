//! `songkhla-guide` - travel guide for Songkhla province
//!
//! This library provides the list screens for attractions, restaurants,
//! cafes, temples and festivals read from a remote store, the navigation
//! shell around them, and hand-off to map and dialer applications.

pub mod api;
pub mod config;
pub mod error;
pub mod handoff;
pub mod models;
pub mod navigation;
pub mod screens;
pub mod shell;
pub mod store;
pub mod telemetry;
pub mod view;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use config::GuideConfig;
pub use error::GuideError;
pub use handoff::{DeepLink, Launcher, Platform, RecordingLauncher, SystemLauncher};
pub use models::{Attraction, Cafe, Category, Coordinate, Entity, Festival, Restaurant, Temple};
pub use navigation::{Navigator, Route};
pub use screens::{AnyListScreen, HomeMenu, ListScreen, SplashScreen};
pub use store::{CollectionSource, MemorySource, SupabaseClient, fetch_collection};
pub use view::{Card, MapPreview, ScreenView};
pub use weather::{BadgeState, SimulatedWeather, WeatherBadge, WeatherSource};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, GuideError>;
