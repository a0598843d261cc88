use crate::core::{PlaceCatalog, Result, SelectionStore};
use crate::domain::model::{Place, PlacesEnvelope};
use crate::utils::error::BucketError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

#[derive(Serialize)]
struct PlacesBody<'a> {
    places: &'a [Place],
}

/// Talks to the backend's `/places` and `/user-places` endpoints.
#[derive(Debug, Clone)]
pub struct HttpPlacesClient {
    base_url: String,
    client: Client,
}

impl HttpPlacesClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn fetch_places(&self, path: &str, failure: &str) -> Result<Vec<Place>> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        tracing::debug!("GET {} -> {}", url, response.status());

        if !response.status().is_success() {
            return Err(BucketError::LoadError {
                message: failure.to_string(),
            });
        }

        let envelope: PlacesEnvelope = response.json().await?;
        Ok(envelope.places)
    }
}

#[async_trait]
impl PlaceCatalog for HttpPlacesClient {
    async fn list_places(&self) -> Result<Vec<Place>> {
        self.fetch_places(
            "/places",
            "Failed to fetch available places from the server.",
        )
        .await
    }
}

#[async_trait]
impl SelectionStore for HttpPlacesClient {
    async fn list_selected(&self) -> Result<Vec<Place>> {
        self.fetch_places("/user-places", "Failed to fetch user places.")
            .await
    }

    async fn save_selected(&self, places: &[Place]) -> Result<()> {
        let url = self.url("/user-places");
        tracing::debug!("PUT {} ({} places)", url, places.len());

        let response = self
            .client
            .put(&url)
            .json(&PlacesBody { places })
            .send()
            .await?;
        tracing::debug!("PUT {} -> {}", url, response.status());

        if !response.status().is_success() {
            return Err(BucketError::UpdateError {
                message: "Failed to update selected places.".to_string(),
            });
        }

        Ok(())
    }
}
