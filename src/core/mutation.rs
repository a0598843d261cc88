//! Optimistic add/remove on a selection list.
//!
//! Each call returns the list to show right away plus, when something has to
//! be persisted, a [`PendingMutation`]. The pending mutation owns the snapshot
//! taken at call time, so rolling back never looks at whatever state the
//! caller holds once persistence resolves.
//!
//! Nothing here serializes independent mutations. Two pending mutations issued
//! back to back each roll back to their own snapshot; if both fail the final
//! list depends on which settles last.

use crate::core::{Result, SelectionStore};
use crate::domain::model::{contains_place, Place, SelectionList};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationState {
    Idle,
    Mutating,
    Settled(bool),
    RolledBack,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationKind {
    Add { place_id: String },
    Remove { place_id: String },
}

impl MutationKind {
    fn fallback_message(&self) -> &'static str {
        match self {
            MutationKind::Add { .. } => "Failed to update the places.",
            MutationKind::Remove { .. } => "Failed to delete the place.",
        }
    }
}

/// Reported to the user when a mutation could not be persisted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct UpdateError {
    pub message: String,
}

/// Result of [`add`] or [`remove`].
#[derive(Debug, Clone, PartialEq)]
pub struct Optimistic {
    /// The list to display immediately.
    pub visible: SelectionList,
    /// `None` when the call was a no-op that needs no persistence.
    pub pending: Option<PendingMutation>,
}

impl Optimistic {
    pub fn state(&self) -> MutationState {
        match self.pending {
            Some(_) => MutationState::Mutating,
            None => MutationState::Idle,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PendingMutation {
    kind: MutationKind,
    snapshot: SelectionList,
    proposed: SelectionList,
}

impl PendingMutation {
    pub fn kind(&self) -> &MutationKind {
        &self.kind
    }

    /// The list as it was before this mutation was applied.
    pub fn snapshot(&self) -> &[Place] {
        &self.snapshot
    }

    /// The list this mutation wants persisted.
    pub fn proposed(&self) -> &[Place] {
        &self.proposed
    }

    /// Resolves the mutation against the outcome of its persistence attempt.
    pub fn settle(self, outcome: Result<()>) -> Settlement {
        match outcome {
            Ok(()) => Settlement::Settled {
                list: self.proposed,
            },
            Err(e) => {
                let message = e.to_string();
                let message = if message.trim().is_empty() {
                    self.kind.fallback_message().to_string()
                } else {
                    message
                };

                Settlement::RolledBack {
                    restored: self.snapshot,
                    error: UpdateError { message },
                }
            }
        }
    }

    /// Saves the proposed list with exactly one store call, then settles.
    pub async fn persist<S>(self, store: &S) -> Settlement
    where
        S: SelectionStore + ?Sized,
    {
        tracing::debug!(
            "Persisting {:?} ({} places)",
            self.kind,
            self.proposed.len()
        );

        let outcome = store.save_selected(&self.proposed).await;
        if let Err(e) = &outcome {
            tracing::warn!("Persisting {:?} failed, rolling back: {}", self.kind, e);
        }

        self.settle(outcome)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Settlement {
    /// The optimistic list is now authoritative.
    Settled { list: SelectionList },
    /// Persistence failed; `restored` is the snapshot from call time.
    RolledBack {
        restored: SelectionList,
        error: UpdateError,
    },
}

impl Settlement {
    pub fn state(&self) -> MutationState {
        match self {
            Settlement::Settled { .. } => MutationState::Settled(true),
            Settlement::RolledBack { .. } => MutationState::RolledBack,
        }
    }

    pub fn error(&self) -> Option<&UpdateError> {
        match self {
            Settlement::Settled { .. } => None,
            Settlement::RolledBack { error, .. } => Some(error),
        }
    }

    /// The list the caller should hold once this mutation has resolved.
    pub fn into_list(self) -> SelectionList {
        match self {
            Settlement::Settled { list } => list,
            Settlement::RolledBack { restored, .. } => restored,
        }
    }
}

/// Prepends `place` unless a place with the same id is already selected.
pub fn add(current: &[Place], place: Place) -> Optimistic {
    if contains_place(current, &place.id) {
        return Optimistic {
            visible: current.to_vec(),
            pending: None,
        };
    }

    let kind = MutationKind::Add {
        place_id: place.id.clone(),
    };
    let mut proposed = Vec::with_capacity(current.len() + 1);
    proposed.push(place);
    proposed.extend_from_slice(current);

    Optimistic {
        visible: proposed.clone(),
        pending: Some(PendingMutation {
            kind,
            snapshot: current.to_vec(),
            proposed,
        }),
    }
}

/// Drops the place with `place_id`. An absent id leaves the list as is but
/// is still persisted.
pub fn remove(current: &[Place], place_id: &str) -> Optimistic {
    let proposed: SelectionList = current
        .iter()
        .filter(|place| place.id != place_id)
        .cloned()
        .collect();

    Optimistic {
        visible: proposed.clone(),
        pending: Some(PendingMutation {
            kind: MutationKind::Remove {
                place_id: place_id.to_string(),
            },
            snapshot: current.to_vec(),
            proposed,
        }),
    }
}
