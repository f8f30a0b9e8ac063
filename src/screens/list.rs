//! List-screen controller
//!
//! A screen owns one state slot, the current records, which starts empty.
//! Mounting issues exactly one read of the screen's collection; a successful
//! read replaces the slot, anything else leaves it empty. Tearing the screen
//! down aborts a read still in flight, so nothing lands after teardown.

use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::{AbortHandle, JoinHandle};
use tracing::{debug, info};

use crate::handoff::Platform;
use crate::models::{Attraction, Cafe, Category, Entity, Festival, Restaurant, Temple};
use crate::store::{CollectionSource, fetch_collection};
use crate::view::ScreenView;
use crate::weather::BadgeState;

pub struct ListScreen<E: Entity> {
    records: watch::Receiver<Vec<E>>,
    fetch: Option<JoinHandle<()>>,
    abort: AbortHandle,
    platform: Platform,
}

impl<E: Entity> ListScreen<E> {
    /// Mount the screen and start its one fetch.
    pub fn mount(source: Arc<dyn CollectionSource>, platform: Platform) -> Self {
        let (tx, rx) = watch::channel(Vec::new());
        let fetch = tokio::spawn(async move {
            if let Some(records) = fetch_collection::<E>(source.as_ref()).await {
                debug!(
                    "Loaded {} records into the {} screen",
                    records.len(),
                    E::CATEGORY
                );
                tx.send_replace(records);
            }
        });
        info!("Mounted {} screen", E::CATEGORY);

        Self {
            records: rx,
            abort: fetch.abort_handle(),
            fetch: Some(fetch),
            platform,
        }
    }

    /// Snapshot of the records currently displayed
    #[must_use]
    pub fn records(&self) -> Vec<E> {
        self.records.borrow().clone()
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.fetch.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Wait for the fetch to resolve, whatever its outcome.
    pub async fn settled(&mut self) {
        if let Some(fetch) = self.fetch.take() {
            // a fetch that panicked leaves the list empty, same as a failed one
            let _ = fetch.await;
        }
    }

    /// Wait for the records to be replaced.
    ///
    /// Returns false once the fetch has ended and no further update can come.
    pub async fn changed(&mut self) -> bool {
        self.records.changed().await.is_ok()
    }

    #[must_use]
    pub fn view(&self, weather: BadgeState) -> ScreenView {
        let cards = self
            .records
            .borrow()
            .iter()
            .map(|record| record.card(self.platform))
            .collect();
        ScreenView::new(E::CATEGORY, weather, cards)
    }

    /// Tear the screen down, dropping its state.
    pub fn unmount(self) {}
}

impl<E: Entity> Drop for ListScreen<E> {
    fn drop(&mut self) {
        if !self.abort.is_finished() {
            debug!("Cancelling in-flight fetch of the {} screen", E::CATEGORY);
        }
        self.abort.abort();
    }
}

/// A list screen for any category
pub enum AnyListScreen {
    Attractions(ListScreen<Attraction>),
    Restaurants(ListScreen<Restaurant>),
    Cafes(ListScreen<Cafe>),
    Temples(ListScreen<Temple>),
    Festivals(ListScreen<Festival>),
}

macro_rules! each_screen {
    ($value:expr, $screen:ident => $body:expr) => {
        match $value {
            AnyListScreen::Attractions($screen) => $body,
            AnyListScreen::Restaurants($screen) => $body,
            AnyListScreen::Cafes($screen) => $body,
            AnyListScreen::Temples($screen) => $body,
            AnyListScreen::Festivals($screen) => $body,
        }
    };
}

impl AnyListScreen {
    pub fn mount(
        category: Category,
        source: Arc<dyn CollectionSource>,
        platform: Platform,
    ) -> Self {
        match category {
            Category::Attractions => Self::Attractions(ListScreen::mount(source, platform)),
            Category::Restaurants => Self::Restaurants(ListScreen::mount(source, platform)),
            Category::Cafes => Self::Cafes(ListScreen::mount(source, platform)),
            Category::Temples => Self::Temples(ListScreen::mount(source, platform)),
            Category::Festivals => Self::Festivals(ListScreen::mount(source, platform)),
        }
    }

    #[must_use]
    pub fn category(&self) -> Category {
        match self {
            Self::Attractions(_) => Category::Attractions,
            Self::Restaurants(_) => Category::Restaurants,
            Self::Cafes(_) => Category::Cafes,
            Self::Temples(_) => Category::Temples,
            Self::Festivals(_) => Category::Festivals,
        }
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        each_screen!(self, screen => screen.is_settled())
    }

    pub async fn settled(&mut self) {
        each_screen!(self, screen => screen.settled().await)
    }

    pub async fn changed(&mut self) -> bool {
        each_screen!(self, screen => screen.changed().await)
    }

    #[must_use]
    pub fn view(&self, weather: BadgeState) -> ScreenView {
        each_screen!(self, screen => screen.view(weather))
    }

    pub fn unmount(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Result;
    use crate::store::MemorySource;
    use async_trait::async_trait;
    use serde_json::{Value, json};
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    fn attractions(n: usize) -> Vec<Value> {
        (1..=n)
            .map(|i| {
                json!({
                    "id": i.to_string(),
                    "name": format!("Place {i}"),
                    "image": format!("http://x/{i}.jpg"),
                    "address": "Songkhla",
                    "latitude": 7.2,
                    "longitude": 100.6
                })
            })
            .collect()
    }

    struct CountingSource {
        inner: MemorySource,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CollectionSource for CountingSource {
        async fn select_all(&self, collection: &str) -> Result<Vec<Value>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.select_all(collection).await
        }
    }

    struct SetOnDrop(Arc<AtomicBool>);

    impl Drop for SetOnDrop {
        fn drop(&mut self) {
            self.0.store(true, Ordering::SeqCst);
        }
    }

    /// Never answers; flags when the pending read is dropped
    struct StalledSource {
        dropped: Arc<AtomicBool>,
    }

    #[async_trait]
    impl CollectionSource for StalledSource {
        async fn select_all(&self, _collection: &str) -> Result<Vec<Value>> {
            let _guard = SetOnDrop(self.dropped.clone());
            std::future::pending::<Result<Vec<Value>>>().await
        }
    }

    #[tokio::test]
    async fn test_n_records_render_n_keyed_cards() {
        let source = Arc::new(MemorySource::new().with_collection("attractions", attractions(4)));
        let mut screen = ListScreen::<Attraction>::mount(source, Platform::Android);
        screen.settled().await;

        let view = screen.view(BadgeState::Loading);
        assert_eq!(view.cards.len(), 4);
        let keys: HashSet<&str> = view.cards.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys.len(), 4);
    }

    #[tokio::test]
    async fn test_state_starts_empty() {
        let dropped = Arc::new(AtomicBool::new(false));
        let source = Arc::new(StalledSource {
            dropped: dropped.clone(),
        });
        let screen = ListScreen::<Temple>::mount(source, Platform::Ios);
        assert!(screen.records().is_empty());
        assert!(!screen.is_settled());
    }

    #[tokio::test]
    async fn test_failed_read_leaves_header_and_empty_body() {
        let source = Arc::new(MemorySource::new());
        let mut screen = AnyListScreen::mount(Category::Restaurants, source, Platform::Android);
        screen.settled().await;

        assert!(screen.is_settled());
        let view = screen.view(BadgeState::Loading);
        assert!(view.cards.is_empty());
        assert_eq!(view.title, "ร้านอาหารยอดนิยม");
    }

    #[tokio::test]
    async fn test_one_fetch_per_mount() {
        let source = Arc::new(CountingSource {
            inner: MemorySource::new().with_collection("attractions", attractions(2)),
            calls: AtomicUsize::new(0),
        });

        let mut first = ListScreen::<Attraction>::mount(source.clone(), Platform::Android);
        first.settled().await;
        first.settled().await;
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        first.unmount();

        let mut again = ListScreen::<Attraction>::mount(source.clone(), Platform::Android);
        again.settled().await;
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
        assert_eq!(again.records().len(), 2);
    }

    #[tokio::test]
    async fn test_changed_reports_loaded_records_once() {
        let source = Arc::new(MemorySource::new().with_collection("attractions", attractions(3)));
        let mut screen = AnyListScreen::mount(Category::Attractions, source, Platform::Ios);

        assert!(screen.changed().await);
        assert_eq!(screen.view(BadgeState::Loading).cards.len(), 3);
        assert!(!screen.changed().await);
    }

    #[tokio::test]
    async fn test_changed_ends_without_update_on_failed_read() {
        let mut screen = ListScreen::<Cafe>::mount(Arc::new(MemorySource::new()), Platform::Ios);
        assert!(!screen.changed().await);
        assert!(screen.records().is_empty());
    }

    #[tokio::test]
    async fn test_unmount_cancels_pending_fetch() {
        let dropped = Arc::new(AtomicBool::new(false));
        let source = Arc::new(StalledSource {
            dropped: dropped.clone(),
        });
        let screen = AnyListScreen::mount(Category::Festivals, source, Platform::Android);

        // let the fetch start before tearing down
        tokio::task::yield_now().await;
        screen.unmount();

        for _ in 0..10 {
            if dropped.load(Ordering::SeqCst) {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert!(dropped.load(Ordering::SeqCst));
    }
}
