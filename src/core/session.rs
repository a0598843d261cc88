//! Per-user session state: the selection list, the available places and the
//! errors to show for each.

use crate::core::distance::load_available_places;
use crate::core::mutation::{self, MutationState, UpdateError};
use crate::core::{GeolocationProvider, PlaceCatalog, SelectionStore};
use crate::domain::model::{Place, SelectionList};

fn load_message(error: impl std::fmt::Display, fallback: &str) -> String {
    let message = error.to_string();
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

pub struct BucketList<C, S, G> {
    catalog: C,
    store: S,
    geolocation: G,
    selection: SelectionList,
    available: Vec<Place>,
    load_error: Option<String>,
    available_error: Option<String>,
    update_error: Option<UpdateError>,
}

impl<C, S, G> BucketList<C, S, G>
where
    C: PlaceCatalog,
    S: SelectionStore,
    G: GeolocationProvider,
{
    /// Starts a session with an empty selection.
    pub fn new(catalog: C, store: S, geolocation: G) -> Self {
        Self {
            catalog,
            store,
            geolocation,
            selection: Vec::new(),
            available: Vec::new(),
            load_error: None,
            available_error: None,
            update_error: None,
        }
    }

    pub fn selection(&self) -> &[Place] {
        &self.selection
    }

    pub fn available(&self) -> &[Place] {
        &self.available
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn available_error(&self) -> Option<&str> {
        self.available_error.as_deref()
    }

    pub fn update_error(&self) -> Option<&UpdateError> {
        self.update_error.as_ref()
    }

    pub fn dismiss_update_error(&mut self) {
        self.update_error = None;
    }

    /// Replaces the selection with the stored one. On failure the current
    /// selection is kept and a load error is recorded.
    pub async fn load_selection(&mut self) -> &[Place] {
        match self.store.list_selected().await {
            Ok(places) => {
                tracing::info!("Loaded {} selected places", places.len());
                self.selection = places;
                self.load_error = None;
            }
            Err(e) => {
                tracing::error!("Loading selected places failed: {}", e);
                self.load_error = Some(load_message(e, "Failed to fetch user places."));
            }
        }
        &self.selection
    }

    pub async fn load_available(&mut self) -> &[Place] {
        match load_available_places(&self.catalog, &self.geolocation).await {
            Ok(places) => {
                tracing::info!("Loaded {} available places", places.len());
                self.available = places;
                self.available_error = None;
            }
            Err(e) => {
                tracing::error!("Loading available places failed: {}", e);
                self.available_error =
                    Some(load_message(e, "Failed to fetch available places."));
            }
        }
        &self.available
    }

    /// Adds `place` optimistically and waits for the store to confirm.
    pub async fn select_place(&mut self, place: Place) -> MutationState {
        let optimistic = mutation::add(&self.selection, place);
        self.selection = optimistic.visible;

        match optimistic.pending {
            Some(pending) => self.reconcile(pending).await,
            None => MutationState::Idle,
        }
    }

    /// Removes the place with `place_id` optimistically and waits for the
    /// store to confirm.
    pub async fn remove_place(&mut self, place_id: &str) -> MutationState {
        let optimistic = mutation::remove(&self.selection, place_id);
        self.selection = optimistic.visible;

        match optimistic.pending {
            Some(pending) => self.reconcile(pending).await,
            None => MutationState::Idle,
        }
    }

    async fn reconcile(&mut self, pending: mutation::PendingMutation) -> MutationState {
        let settlement = pending.persist(&self.store).await;
        let state = settlement.state();

        if let Some(error) = settlement.error() {
            self.update_error = Some(error.clone());
        }
        self.selection = settlement.into_list();

        state
    }
}
