// Adapters layer: concrete implementations of the domain ports.

pub mod geolocation;
pub mod http;
pub mod storage;

pub use geolocation::FixedGeolocation;
pub use http::HttpPlacesClient;
pub use storage::LocalStorage;
