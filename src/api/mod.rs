use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use tracing::debug;

use crate::config::TimingConfig;
use crate::handoff::Platform;
use crate::models::Category;
use crate::screens::{AnyListScreen, HomeMenu};
use crate::store::CollectionSource;
use crate::view::ScreenView;
use crate::weather::{BadgeState, WeatherBadge, WeatherSource};

/// Everything a request needs to mount a screen
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn CollectionSource>,
    pub weather: Arc<dyn WeatherSource>,
    pub platform: Platform,
    pub timing: TimingConfig,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/home", get(get_home))
        .route("/weather", get(get_weather))
        .route("/categories/{category}", get(get_category))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn get_home() -> Json<HomeMenu> {
    Json(HomeMenu::default())
}

async fn get_weather(State(state): State<AppState>) -> Json<BadgeState> {
    let mut badge = WeatherBadge::mount(state.weather, state.timing.weather_delay());
    Json(badge.revealed().await)
}

/// Mount a fresh screen for the request; it is torn down when the response is built.
async fn get_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<ScreenView>, StatusCode> {
    let category: Category = category.parse().map_err(|_| StatusCode::NOT_FOUND)?;
    debug!("Serving {} screen", category);

    let mut screen = AnyListScreen::mount(category, state.source, state.platform);
    let mut badge = WeatherBadge::mount(state.weather, state.timing.weather_delay());
    let (_, weather) = tokio::join!(screen.settled(), badge.revealed());

    Ok(Json(screen.view(weather)))
}
