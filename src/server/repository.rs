use crate::core::{PlaceCatalog, Result, SelectionStore, Storage};
use crate::domain::model::Place;
use async_trait::async_trait;

pub const PLACES_FILE: &str = "places.json";
pub const USER_PLACES_FILE: &str = "user-places.json";

/// The catalog and the selection list as two JSON array files.
#[derive(Debug, Clone)]
pub struct PlaceFiles<S: Storage> {
    storage: S,
}

impl<S: Storage> PlaceFiles<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    async fn read_places(&self, file: &str) -> Result<Vec<Place>> {
        let data = self.storage.read_file(file).await?;
        let places = serde_json::from_slice(&data)?;
        Ok(places)
    }
}

#[async_trait]
impl<S: Storage> PlaceCatalog for PlaceFiles<S> {
    async fn list_places(&self) -> Result<Vec<Place>> {
        self.read_places(PLACES_FILE).await
    }
}

#[async_trait]
impl<S: Storage> SelectionStore for PlaceFiles<S> {
    async fn list_selected(&self) -> Result<Vec<Place>> {
        self.read_places(USER_PLACES_FILE).await
    }

    async fn save_selected(&self, places: &[Place]) -> Result<()> {
        // Serialize first so an encoding failure never touches the file.
        let data = serde_json::to_vec_pretty(places)?;
        self.storage.write_file(USER_PLACES_FILE, &data).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::LocalStorage;
    use crate::domain::model::PlaceImage;
    use tempfile::TempDir;

    fn place(id: &str) -> Place {
        Place {
            id: id.to_string(),
            title: "Taj Mahal".to_string(),
            image: PlaceImage {
                src: "taj-mahal.jpg".to_string(),
                alt: "The Taj Mahal at sunrise.".to_string(),
            },
            lat: 27.1751,
            lon: 78.0421,
        }
    }

    #[tokio::test]
    async fn test_save_and_list_selected() {
        let dir = TempDir::new().unwrap();
        let files = PlaceFiles::new(LocalStorage::new(dir.path()));

        files.save_selected(&[place("p13")]).await.unwrap();

        assert_eq!(files.list_selected().await.unwrap(), vec![place("p13")]);

        let raw = std::fs::read_to_string(dir.path().join(USER_PLACES_FILE)).unwrap();
        assert!(raw.starts_with("[\n  {"));
    }

    #[tokio::test]
    async fn test_list_places_reads_catalog_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(PLACES_FILE),
            serde_json::to_vec(&vec![place("p13")]).unwrap(),
        )
        .unwrap();
        let files = PlaceFiles::new(LocalStorage::new(dir.path()));

        assert_eq!(files.list_places().await.unwrap()[0].id, "p13");
    }

    #[tokio::test]
    async fn test_malformed_catalog_is_serialization_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(PLACES_FILE), b"{\"not\": \"an array\"}").unwrap();
        let files = PlaceFiles::new(LocalStorage::new(dir.path()));

        let result = files.list_places().await;
        assert!(matches!(
            result,
            Err(crate::utils::error::BucketError::SerializationError(_))
        ));
    }
}
