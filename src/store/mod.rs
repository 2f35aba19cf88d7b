//! Cart and wishlist state containers.
//!
//! Both are explicit reducer-style stores: applying an action is a
//! deterministic, synchronous state transition that returns a
//! [`StoreOutcome`] for the presentation layer. Persistence is a separate
//! side effect the host performs after a transition, via
//! [`StoreSnapshot`].

mod cart;
mod persist;
mod wishlist;

pub use cart::{CartAction, CartState};
pub use persist::StoreSnapshot;
pub use wishlist::{WishlistAction, WishlistState};

/// What a reducer did with an action; the UI maps these to toasts
/// ("Added to Wishlist", "Already in Wishlist", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOutcome {
    Added,
    AlreadyPresent,
    Removed,
    NotFound,
    Cleared,
}
