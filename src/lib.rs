//! Client-side core of the PlantShop storefront.
//!
//! What lives here: the typed product [`catalog`], the [`search`] engine
//! (field scoring, weighted ranking, suggestion-list selection), the cart
//! and wishlist [`store`] reducers, and the thin [`api`] client that
//! supplies catalog snapshots and submits orders.
//!
//! What deliberately does not: rendering, routing, and auth. The engine
//! consumes a catalog snapshot and raw input events, and hands back ranked
//! suggestions, [`NavIntent`]s for the host router, and store transitions.
//! Everything is synchronous and single-threaded except the I/O at the
//! edges (`api`, snapshot load/save).

pub mod api;
pub mod catalog;
pub mod error;
pub mod search;
pub mod store;
pub mod tracing;

pub use api::{Order, StoreClient};
pub use catalog::{Catalog, CatalogFilter, MaintenanceLevel, Plant, PlantStatus, PriceSort};
pub use error::{CatalogError, Result};
pub use search::{
    Key, MAX_SUGGESTIONS, MatchTier, MatchedField, NavIntent, SuggestBox, Suggestion, match_tier,
    rank,
};
pub use store::{
    CartAction, CartState, StoreOutcome, StoreSnapshot, WishlistAction, WishlistState,
};
