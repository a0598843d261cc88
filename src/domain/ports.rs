use crate::domain::model::{Coordinate, Place};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn port(&self) -> u16;
    fn data_dir(&self) -> &str;
    fn images_dir(&self) -> &str;
}

/// Read-only source of every place a user can pick from.
#[async_trait]
pub trait PlaceCatalog: Send + Sync {
    async fn list_places(&self) -> Result<Vec<Place>>;
}

/// Durable copy of the user's selection list.
#[async_trait]
pub trait SelectionStore: Send + Sync {
    async fn list_selected(&self) -> Result<Vec<Place>>;
    async fn save_selected(&self, places: &[Place]) -> Result<()>;
}

/// `None` means the position is unknown or access was denied; callers fall
/// back to catalog order.
#[async_trait]
pub trait GeolocationProvider: Send + Sync {
    async fn current_coordinate(&self) -> Option<Coordinate>;
}
