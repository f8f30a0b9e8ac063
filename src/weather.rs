//! Weather badge shown in every list header
//!
//! The reading is simulated: a constant revealed after a fixed delay. It is a
//! placeholder until a real forecast source implements [`WeatherSource`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Display;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct WeatherReading {
    /// Temperature in Celsius
    pub temperature: f32,
    /// Human-readable description of the conditions
    pub condition: String,
    /// Icon name
    pub icon: String,
    pub city: String,
    /// Verdict shown on the badge
    pub status: String,
    pub observed_at: DateTime<Utc>,
}

impl WeatherReading {
    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{:.0}°C", self.temperature)
    }
}

/// Where the badge gets its reading from
#[async_trait]
pub trait WeatherSource: Send + Sync {
    async fn current(&self) -> WeatherReading;
}

/// Constant reading for Songkhla
#[derive(Debug, Default, Clone)]
pub struct SimulatedWeather;

#[async_trait]
impl WeatherSource for SimulatedWeather {
    async fn current(&self) -> WeatherReading {
        WeatherReading {
            temperature: 31.0,
            condition: "แดดจัด".to_string(),
            icon: "sunny".to_string(),
            city: "สงขลา".to_string(),
            status: "เหมาะกับการเที่ยว".to_string(),
            observed_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "reading", rename_all = "lowercase")]
pub enum BadgeState {
    Loading,
    Ready(WeatherReading),
}

impl Display for BadgeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BadgeState::Loading => write!(f, "⏳ ..."),
            BadgeState::Ready(reading) => write!(
                f,
                "☀️ {} {} • {} [{}]",
                reading.format_temperature(),
                reading.city,
                reading.condition,
                reading.status
            ),
        }
    }
}

/// Badge owned by one screen; its timer dies with it.
pub struct WeatherBadge {
    state: watch::Receiver<BadgeState>,
    task: JoinHandle<()>,
}

impl WeatherBadge {
    /// Start in `Loading` and reveal the reading after `delay`.
    pub fn mount(source: Arc<dyn WeatherSource>, delay: Duration) -> Self {
        let (tx, rx) = watch::channel(BadgeState::Loading);
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let reading = source.current().await;
            debug!("Weather badge revealed: {}", reading.format_temperature());
            let _ = tx.send(BadgeState::Ready(reading));
        });
        Self { state: rx, task }
    }

    #[must_use]
    pub fn state(&self) -> BadgeState {
        self.state.borrow().clone()
    }

    /// Wait for the badge to change state. False once the timer is gone.
    pub async fn changed(&mut self) -> bool {
        self.state.changed().await.is_ok()
    }

    /// Wait until the reading is shown
    pub async fn revealed(&mut self) -> BadgeState {
        // Err only if the timer task is gone, in which case nothing will change
        let _ = self
            .state
            .wait_for(|state| matches!(state, BadgeState::Ready(_)))
            .await;
        self.state()
    }
}

impl Drop for WeatherBadge {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_badge_loads_then_reveals() {
        let mut badge = WeatherBadge::mount(Arc::new(SimulatedWeather), Duration::from_millis(1500));
        assert_eq!(badge.state(), BadgeState::Loading);

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(badge.state(), BadgeState::Loading);

        let state = badge.revealed().await;
        let BadgeState::Ready(reading) = state else {
            panic!("badge should be revealed");
        };
        assert_eq!(reading.format_temperature(), "31°C");
        assert_eq!(reading.condition, "แดดจัด");
        assert_eq!(reading.icon, "sunny");
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_badge_stops_its_timer() {
        let badge = WeatherBadge::mount(Arc::new(SimulatedWeather), Duration::from_secs(60));
        let mut rx = badge.state.clone();
        drop(badge);
        // sender side is gone once the aborted task is cleaned up
        assert!(rx.changed().await.is_err());
        assert_eq!(*rx.borrow(), BadgeState::Loading);
    }

    #[tokio::test(start_paused = true)]
    async fn test_changed_fires_on_reveal() {
        let mut badge = WeatherBadge::mount(Arc::new(SimulatedWeather), Duration::from_millis(1500));
        assert!(badge.changed().await);
        assert!(matches!(badge.state(), BadgeState::Ready(_)));
        assert!(!badge.changed().await);
    }

    #[test]
    fn test_display_loading() {
        assert!(BadgeState::Loading.to_string().contains("..."));
    }
}
