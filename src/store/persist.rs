//! Durable snapshots of the cart and wishlist.
//!
//! Reducers never touch storage themselves; the host applies an action and
//! then saves the resulting snapshot here. A missing file is the first-run
//! case and loads as an empty snapshot; corrupt contents are an error the
//! host decides how to handle.

use super::{CartState, WishlistState};
use crate::error::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything the storefront persists between sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    #[serde(default)]
    pub cart: CartState,
    #[serde(default)]
    pub wishlist: WishlistState,
}

impl StoreSnapshot {
    /// Loads the snapshot at `path`, or an empty one when none exists yet.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no store snapshot yet, starting empty");
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to read store snapshot at {}", path.display()));
            }
        };

        let snapshot: Self = serde_json::from_slice(&bytes)
            .with_context(|| format!("malformed store snapshot at {}", path.display()))?;

        tracing::debug!(
            path = %path.display(),
            cart = snapshot.cart.len(),
            wishlist = snapshot.wishlist.len(),
            "loaded store snapshot"
        );
        Ok(snapshot)
    }

    /// Writes the snapshot as pretty JSON (the file doubles as a debugging
    /// aid, so keep it readable).
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = serde_json::to_vec_pretty(self).context("failed to encode store snapshot")?;

        tokio::fs::write(path, bytes)
            .await
            .with_context(|| format!("failed to write store snapshot to {}", path.display()))?;

        tracing::debug!(path = %path.display(), "saved store snapshot");
        Ok(())
    }
}
