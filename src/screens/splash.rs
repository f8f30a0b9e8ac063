use serde::Serialize;
use std::fmt::Display;
use std::time::Duration;
use tracing::debug;

use crate::navigation::{Navigator, Route};

/// Opening screen; moves on to the home menu by itself.
#[derive(Debug, Clone, Serialize)]
pub struct SplashScreen {
    pub title: &'static str,
    pub caption: &'static str,
    pub loading_text: &'static str,
}

impl Default for SplashScreen {
    fn default() -> Self {
        Self {
            title: "Songkhla Travel",
            caption: "เสน่ห์เมืองเก่า และทะเลสาบสองฝั่ง",
            loading_text: "กำลังโหลดข้อมูล...",
        }
    }
}

impl SplashScreen {
    /// Wait `delay`, then replace the splash with the home menu.
    pub async fn run(&self, navigator: &mut Navigator, delay: Duration) {
        tokio::time::sleep(delay).await;
        debug!("Splash done after {:?}", delay);
        navigator.replace(Route::Home);
    }
}

impl Display for SplashScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.caption)?;
        writeln!(f, "{}", self.loading_text)
    }
}
