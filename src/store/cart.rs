//! Cart state container.

use super::StoreOutcome;
use crate::catalog::Plant;
use serde::{Deserialize, Serialize};

/// Actions the cart reducer understands.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Add a record; a second add of the same id is reported, not duplicated.
    Add(Plant),
    /// Remove the record with this id.
    Remove(String),
    Clear,
}

/// The cart: an ordered list of unique records (the shop sells one of each
/// specimen, so there are no quantities).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartState {
    items: Vec<Plant>,
}

impl CartState {
    /// Applies one action and reports what happened, for the presentation
    /// layer to toast. Persisting the new state is the caller's side effect.
    pub fn apply(&mut self, action: CartAction) -> StoreOutcome {
        match action {
            CartAction::Add(plant) => {
                if self.contains(&plant.id) {
                    tracing::debug!(id = %plant.id, "already in cart");
                    return StoreOutcome::AlreadyPresent;
                }
                tracing::debug!(id = %plant.id, "added to cart");
                self.items.push(plant);
                StoreOutcome::Added
            }
            CartAction::Remove(id) => {
                let before = self.items.len();
                self.items.retain(|item| item.id != id);
                if self.items.len() == before {
                    StoreOutcome::NotFound
                } else {
                    tracing::debug!(%id, "removed from cart");
                    StoreOutcome::Removed
                }
            }
            CartAction::Clear => {
                self.items.clear();
                StoreOutcome::Cleared
            }
        }
    }

    /// Items in insertion order.
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

    /// Sum of item prices, for the checkout summary.
    pub fn total_price(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    fn priced(id: &str, name: &str, price: f64) -> Plant {
        let mut plant = Plant::new(id, name);
        plant.price = price;
        plant
    }

    #[test]
    fn add_dedupes_by_id() {
        let mut cart = CartState::default();
        check!(cart.apply(CartAction::Add(priced("1", "Monstera", 34.99))) == StoreOutcome::Added);
        check!(
            cart.apply(CartAction::Add(priced("1", "Monstera", 34.99)))
                == StoreOutcome::AlreadyPresent
        );
        check!(cart.len() == 1);
    }

    #[test]
    fn total_price_sums_items() {
        let mut cart = CartState::default();
        cart.apply(CartAction::Add(priced("1", "Monstera", 34.99)));
        cart.apply(CartAction::Add(priced("2", "Snake Plant", 15.00)));
        check!((cart.total_price() - 49.99).abs() < 1e-9);
    }

    #[test]
    fn remove_reports_missing_ids() {
        let mut cart = CartState::default();
        cart.apply(CartAction::Add(priced("1", "Monstera", 34.99)));

        check!(cart.apply(CartAction::Remove("2".to_string())) == StoreOutcome::NotFound);
        check!(cart.apply(CartAction::Remove("1".to_string())) == StoreOutcome::Removed);
        check!(cart.is_empty());
    }

    #[test]
    fn clear_empties_the_cart() {
        let mut cart = CartState::default();
        cart.apply(CartAction::Add(priced("1", "Monstera", 34.99)));
        cart.apply(CartAction::Add(priced("2", "Snake Plant", 15.00)));

        check!(cart.apply(CartAction::Clear) == StoreOutcome::Cleared);
        check!(cart.is_empty());
        check!(cart.total_price() == 0.0);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut cart = CartState::default();
        for id in ["3", "1", "2"] {
            cart.apply(CartAction::Add(priced(id, "Plant", 1.0)));
        }
        let ids: Vec<&str> = cart.items().iter().map(|p| p.id.as_str()).collect();
        check!(ids == vec!["3", "1", "2"]);
    }
}
