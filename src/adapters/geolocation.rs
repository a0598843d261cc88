use crate::core::{Coordinate, GeolocationProvider};
use async_trait::async_trait;

/// A position supplied up front, e.g. from command line flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedGeolocation {
    coordinate: Option<Coordinate>,
}

impl FixedGeolocation {
    pub fn at(coordinate: Coordinate) -> Self {
        Self {
            coordinate: Some(coordinate),
        }
    }

    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn from_parts(lat: Option<f64>, lon: Option<f64>) -> Self {
        match (lat, lon) {
            (Some(lat), Some(lon)) => Self::at(Coordinate::new(lat, lon)),
            _ => Self::unavailable(),
        }
    }
}

#[async_trait]
impl GeolocationProvider for FixedGeolocation {
    async fn current_coordinate(&self) -> Option<Coordinate> {
        self.coordinate
    }
}
