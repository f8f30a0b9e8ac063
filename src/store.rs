//! Remote collection store
//!
//! Collections are read with a single unconditional `select=*`: no filter,
//! no ordering, no pagination, no retry. [`fetch_collection`] is the only
//! path screens use, and it folds every failure into "no data".

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::config::StoreConfig;
use crate::models::Entity;
use crate::{GuideError, Result};

/// A store that can hand back every row of a named collection.
#[async_trait]
pub trait CollectionSource: Send + Sync {
    async fn select_all(&self, collection: &str) -> Result<Vec<Value>>;
}

/// PostgREST client for a Supabase project
pub struct SupabaseClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl SupabaseClient {
    /// Create a new client
    pub fn new(config: &StoreConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(concat!("songkhla-guide/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GuideError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn collection_url(&self, collection: &str) -> String {
        format!(
            "{}/rest/v1/{}",
            self.base_url,
            urlencoding::encode(collection)
        )
    }
}

#[async_trait]
impl CollectionSource for SupabaseClient {
    #[instrument(skip(self))]
    async fn select_all(&self, collection: &str) -> Result<Vec<Value>> {
        let url = self.collection_url(collection);
        debug!("Store request URL: {}", url);

        let mut request = self.client.get(&url).query(&[("select", "*")]);

        if let Some(api_key) = &self.api_key {
            request = request
                .header("apikey", api_key)
                .header("Authorization", format!("Bearer {api_key}"));
        }

        let response = request
            .send()
            .await
            .map_err(|e| GuideError::store(format!("Request to '{collection}' failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(GuideError::store_status(
                status.as_u16(),
                format!("Store returned {status} for '{collection}': {error_text}"),
            ));
        }

        let rows: Vec<Value> = response.json().await.map_err(|e| {
            GuideError::store(format!("Failed to parse rows of '{collection}': {e}"))
        })?;

        info!("Read {} rows from '{}'", rows.len(), collection);
        Ok(rows)
    }
}

/// Collections held in memory, e.g. loaded from a fixtures file
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    collections: HashMap<String, Vec<Value>>,
}

impl MemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a collection
    #[must_use]
    pub fn with_collection(mut self, collection: &str, rows: Vec<Value>) -> Self {
        self.collections.insert(collection.to_string(), rows);
        self
    }

    /// Load a JSON object mapping collection names to arrays of rows
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let collections: HashMap<String, Vec<Value>> =
            serde_json::from_str(&text).map_err(|e| {
                GuideError::validation(format!(
                    "Fixtures file {} is not a map of collections: {e}",
                    path.display()
                ))
            })?;
        Ok(Self { collections })
    }
}

#[async_trait]
impl CollectionSource for MemorySource {
    async fn select_all(&self, collection: &str) -> Result<Vec<Value>> {
        self.collections.get(collection).cloned().ok_or_else(|| {
            GuideError::store_status(404, format!("relation \"{collection}\" does not exist"))
        })
    }
}

/// Read every record of `E`'s collection, in store order.
///
/// Transport errors, error statuses and rows of the wrong shape all end up as
/// `None`; they are only logged.
#[instrument(skip(source), fields(collection = E::CATEGORY.collection()))]
pub async fn fetch_collection<E: Entity>(source: &dyn CollectionSource) -> Option<Vec<E>> {
    let collection = E::CATEGORY.collection();
    let rows = match source.select_all(collection).await {
        Ok(rows) => rows,
        Err(e) => {
            warn!("Error fetching {}: {}", collection, e);
            return None;
        }
    };

    match serde_json::from_value::<Vec<E>>(Value::Array(rows)) {
        Ok(records) => {
            let mut seen = HashSet::new();
            for record in &records {
                if !seen.insert(record.id()) {
                    warn!("Duplicate id '{}' in {}", record.id(), collection);
                }
            }
            Some(records)
        }
        Err(e) => {
            warn!(
                "Error fetching {}: {}",
                collection,
                GuideError::decode(collection, e.to_string())
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Attraction, Cafe, Temple};
    use serde_json::json;

    fn samila() -> Value {
        json!({
            "id": "1",
            "name": "Samila Beach",
            "image": "http://x/1.jpg",
            "address": "Songkhla",
            "latitude": 7.2,
            "longitude": 100.6
        })
    }

    #[tokio::test]
    async fn test_fetch_keeps_store_order() {
        let mut second = samila();
        second["id"] = json!("2");
        second["name"] = json!("Koh Yo");
        let source = MemorySource::new().with_collection("attractions", vec![second, samila()]);

        let records = fetch_collection::<Attraction>(&source).await.unwrap();
        let ids: Vec<&str> = records.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["2", "1"]);
    }

    #[tokio::test]
    async fn test_duplicate_ids_are_kept() {
        let source =
            MemorySource::new().with_collection("attractions", vec![samila(), samila()]);
        let records = fetch_collection::<Attraction>(&source).await.unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|a| a.id() == "1"));
    }

    #[tokio::test]
    async fn test_cafes_are_read_from_coffee() {
        let source = MemorySource::new().with_collection("coffee", vec![]);
        assert_eq!(fetch_collection::<Cafe>(&source).await, Some(vec![]));
    }

    #[tokio::test]
    async fn test_missing_collection_is_absent() {
        let source = MemorySource::new();
        assert!(fetch_collection::<Temple>(&source).await.is_none());
    }

    #[tokio::test]
    async fn test_malformed_rows_are_absent() {
        let source =
            MemorySource::new().with_collection("temples", vec![json!({"id": "t1"})]);
        assert!(fetch_collection::<Temple>(&source).await.is_none());
    }

    #[test]
    fn test_collection_url() {
        let client = SupabaseClient::new(&StoreConfig {
            base_url: "https://demo.supabase.co/".to_string(),
            api_key: None,
            timeout_seconds: 5,
        })
        .unwrap();
        assert_eq!(
            client.collection_url("coffee"),
            "https://demo.supabase.co/rest/v1/coffee"
        );
    }

    #[test]
    fn test_fixtures_file_must_be_a_map() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "[1, 2, 3]").unwrap();
        let err = MemorySource::from_file(file.path()).unwrap_err();
        assert!(matches!(err, GuideError::Validation { .. }));
    }
}
