//! Screens of the guide: splash, home menu and the per-category lists

pub mod home;
pub mod list;
pub mod splash;

pub use home::{HomeMenu, MenuEntry};
pub use list::{AnyListScreen, ListScreen};
pub use splash::SplashScreen;
