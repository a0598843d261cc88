use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceImage {
    pub src: String,
    pub alt: String,
}

/// A catalog entry. Loaded once from the catalog and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub title: String,
    pub image: PlaceImage,
    pub lat: f64,
    pub lon: f64,
}

impl Place {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            lat: self.lat,
            lon: self.lon,
        }
    }
}

/// Latitude and longitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// The user's bucket list, most recently added first, unique by id.
pub type SelectionList = Vec<Place>;

/// Body of `GET /places`, `GET /user-places` and `PUT /user-places`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacesEnvelope {
    pub places: Vec<Place>,
}

/// Body of every non-list response from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

pub fn contains_place(list: &[Place], place_id: &str) -> bool {
    list.iter().any(|place| place.id == place_id)
}
