//! Wishlist state container.

use super::StoreOutcome;
use crate::catalog::Plant;
use serde::{Deserialize, Serialize};

/// Actions the wishlist reducer understands.
#[derive(Debug, Clone)]
pub enum WishlistAction {
    Add(Plant),
    Remove(String),
    Clear,
}

/// Saved-for-later records, ordered, unique by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WishlistState {
    items: Vec<Plant>,
}

impl WishlistState {
    /// Applies one action and reports what happened. Same contract as the
    /// cart reducer: deterministic, synchronous, no persistence inside.
    pub fn apply(&mut self, action: WishlistAction) -> StoreOutcome {
        match action {
            WishlistAction::Add(plant) => {
                if self.contains(&plant.id) {
                    tracing::debug!(id = %plant.id, "already wishlisted");
                    return StoreOutcome::AlreadyPresent;
                }
                tracing::debug!(id = %plant.id, "added to wishlist");
                self.items.push(plant);
                StoreOutcome::Added
            }
            WishlistAction::Remove(id) => {
                let before = self.items.len();
                self.items.retain(|item| item.id != id);
                if self.items.len() == before {
                    StoreOutcome::NotFound
                } else {
                    tracing::debug!(%id, "removed from wishlist");
                    StoreOutcome::Removed
                }
            }
            WishlistAction::Clear => {
                self.items.clear();
                StoreOutcome::Cleared
            }
        }
    }

    pub fn items(&self) -> &[Plant] {
        &self.items
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
