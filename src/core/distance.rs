//! Great-circle ordering of catalog places.

use crate::core::{GeolocationProvider, PlaceCatalog, Result};
use crate::domain::model::{Coordinate, Place};

/// Mean Earth radius used by [`haversine_km`].
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres between two coordinates.
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lon = (to.lon - from.lon).to_radians();

    let a = ((d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2))
        .clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

/// Returns `places` ordered by ascending distance from `reference`.
///
/// The sort is stable: places at equal distance keep their input order.
/// The input slice is left untouched.
pub fn sort_by_distance(places: &[Place], reference: Coordinate) -> Vec<Place> {
    let mut ranked: Vec<(f64, &Place)> = places
        .iter()
        .map(|place| (haversine_km(reference, place.coordinate()), place))
        .collect();

    ranked.sort_by(|a, b| a.0.total_cmp(&b.0));

    ranked.into_iter().map(|(_, place)| place.clone()).collect()
}

/// Fetches the catalog and orders it by distance when a position is known.
///
/// Without a position the catalog order is returned unchanged.
pub async fn load_available_places<C, G>(catalog: &C, geolocation: &G) -> Result<Vec<Place>>
where
    C: PlaceCatalog + ?Sized,
    G: GeolocationProvider + ?Sized,
{
    let places = catalog.list_places().await?;

    match geolocation.current_coordinate().await {
        Some(reference) => {
            tracing::debug!(
                "Sorting {} places by distance from ({}, {})",
                places.len(),
                reference.lat,
                reference.lon
            );
            Ok(sort_by_distance(&places, reference))
        }
        None => {
            tracing::debug!("No location available, keeping catalog order");
            Ok(places)
        }
    }
}
