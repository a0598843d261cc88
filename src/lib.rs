pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{client::ClientCli, ServerCli};

pub use adapters::{FixedGeolocation, HttpPlacesClient, LocalStorage};
pub use config::ServerSettings;
pub use core::{
    distance::{haversine_km, load_available_places, sort_by_distance},
    mutation::{MutationState, Settlement, UpdateError},
    session::BucketList,
};
pub use domain::model::{Coordinate, Place, PlaceImage, SelectionList};
pub use utils::error::{BucketError, Result};
