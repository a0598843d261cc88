use crate::core::{PlaceCatalog, SelectionStore};
use crate::domain::model::{MessageBody, Place, PlacesEnvelope};
use crate::server::error::ApiError;
use crate::server::AppState;
use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse, Json};

pub async fn places_handler(
    State(state): State<AppState>,
) -> Result<Json<PlacesEnvelope>, ApiError> {
    let places = state.files.list_places().await.map_err(|e| {
        tracing::error!("Error reading places: {}", e);
        ApiError::LoadPlaces
    })?;

    Ok(Json(PlacesEnvelope { places }))
}

pub async fn user_places_handler(
    State(state): State<AppState>,
) -> Result<Json<PlacesEnvelope>, ApiError> {
    let places = state.files.list_selected().await.map_err(|e| {
        tracing::error!("Error reading user places: {}", e);
        ApiError::LoadUserPlaces
    })?;

    Ok(Json(PlacesEnvelope { places }))
}

pub async fn update_user_places_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let places = parse_places_payload(&body)?;

    state.files.save_selected(&places).await.map_err(|e| {
        tracing::error!("Error writing user places: {}", e);
        ApiError::UpdateUserPlaces
    })?;

    tracing::info!("Saved {} user places", places.len());
    Ok((
        StatusCode::OK,
        Json(MessageBody {
            message: "User places updated!".to_string(),
        }),
    ))
}

pub async fn not_found_handler() -> ApiError {
    ApiError::NotFound
}

/// Accepts `{"places": [Place, ...]}` and nothing else.
pub(crate) fn parse_places_payload(body: &[u8]) -> Result<Vec<Place>, ApiError> {
    let mut payload: serde_json::Value = serde_json::from_slice(body).map_err(|e| {
        tracing::warn!("Rejected user places payload: {}", e);
        ApiError::InvalidPayload
    })?;

    let places = match payload.get_mut("places") {
        Some(value) if value.is_array() => value.take(),
        _ => {
            tracing::warn!("Rejected user places payload: `places` is not an array");
            return Err(ApiError::InvalidPayload);
        }
    };

    serde_json::from_value(places).map_err(|e| {
        tracing::warn!("Rejected user places payload: {}", e);
        ApiError::InvalidPayload
    })
}
