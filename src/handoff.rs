//! Hand-off to OS applications through deep links
//!
//! Map and dialer links are built here and handed to a [`Launcher`]. Opening
//! a link is fire-and-forget: callers never learn whether an application
//! actually picked it up.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use std::sync::Mutex;
use tracing::{debug, info};

use crate::GuideError;
use crate::models::Coordinate;

/// Platform whose map application receives navigation links
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    #[default]
    Android,
}

impl FromStr for Platform {
    type Err = GuideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            other => Err(GuideError::validation(format!(
                "Unknown platform '{other}'. Must be one of: ios, android"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Map,
    Dial,
}

/// A URI handed to the operating system
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeepLink {
    kind: LinkKind,
    uri: String,
}

impl DeepLink {
    #[must_use]
    pub fn kind(&self) -> LinkKind {
        self.kind
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.uri
    }
}

impl Display for DeepLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.uri)
    }
}

/// Link that opens the platform map application at `coordinate`, labelled `label`.
#[must_use]
pub fn map_link(platform: Platform, coordinate: Coordinate, label: &str) -> DeepLink {
    let label = urlencoding::encode(label);
    let uri = match platform {
        Platform::Ios => format!(
            "maps:0,0?q={label}@{},{}",
            coordinate.latitude, coordinate.longitude
        ),
        Platform::Android => format!(
            "geo:0,0?q={},{}({label})",
            coordinate.latitude, coordinate.longitude
        ),
    };
    DeepLink {
        kind: LinkKind::Map,
        uri,
    }
}

/// Link that opens the dialer with exactly `phone`.
#[must_use]
pub fn dial_link(phone: &str) -> DeepLink {
    DeepLink {
        kind: LinkKind::Dial,
        uri: format!("tel:{phone}"),
    }
}

/// Something that can hand a deep link to another application.
pub trait Launcher: Send + Sync {
    fn open(&self, link: &DeepLink);
}

/// Opens links with the desktop's URI handler.
#[derive(Debug, Default)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn open(&self, link: &DeepLink) {
        info!("Handing off {:?} link: {}", link.kind(), link);
        if let Err(e) = open::that_detached(link.as_str()) {
            debug!("No handler picked up {}: {}", link, e);
        }
    }
}

/// Keeps every link it is asked to open instead of opening it.
#[derive(Debug, Default)]
pub struct RecordingLauncher {
    opened: Mutex<Vec<DeepLink>>,
}

impl RecordingLauncher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Links opened so far, oldest first
    #[must_use]
    pub fn opened(&self) -> Vec<DeepLink> {
        self.opened
            .lock()
            .map(|links| links.clone())
            .unwrap_or_default()
    }
}

impl Launcher for RecordingLauncher {
    fn open(&self, link: &DeepLink) {
        debug!("Recording hand-off: {}", link);
        if let Ok(mut links) = self.opened.lock() {
            links.push(link.clone());
        }
    }
}
