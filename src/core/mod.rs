pub mod distance;
pub mod mutation;
pub mod session;

pub use crate::domain::model::{Coordinate, Place, SelectionList};
pub use crate::domain::ports::{
    ConfigProvider, GeolocationProvider, PlaceCatalog, SelectionStore, Storage,
};
pub use crate::utils::error::Result;
