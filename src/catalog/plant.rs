//! Product records as served by the storefront backend.

use serde::{Deserialize, Serialize};

/// Stock availability shown on product cards.
///
/// Display-only: availability never participates in search scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PlantStatus {
    #[default]
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
    #[serde(rename = "Coming Soon")]
    ComingSoon,
    Discontinued,
}

/// Care difficulty, used by the products-page filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaintenanceLevel {
    Easy,
    Moderate,
    Expert,
}

/// One catalog entry.
///
/// Field names follow the backend's wire format (`_id`, camelCase). Every
/// field except `id` and `name` tolerates absence: a record missing an
/// optional field scores it as an empty string (score 0), identical to a
/// record carrying `""`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    /// Stable unique identifier across the catalog's lifetime.
    #[serde(rename = "_id")]
    pub id: String,
    /// Primary display name, required.
    pub name: String,
    /// Formal botanical name, rendered italicized when it is the match.
    #[serde(default)]
    pub scientific_name: Option<String>,
    /// Classification label, e.g. "Indoor Plants".
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Free-text labels, possibly empty.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub price: f64,
    /// Pre-discount price, shown struck through when present.
    #[serde(default)]
    pub old_price: Option<f64>,
    #[serde(default)]
    pub status: PlantStatus,
    #[serde(default)]
    pub maintenance_level: Option<MaintenanceLevel>,
    #[serde(default)]
    pub on_sale: bool,
    #[serde(default)]
    pub trending: bool,
}

impl Plant {
    /// Minimal record with the given identity; every other field takes its default.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            scientific_name: None,
            category: None,
            description: None,
            tags: Vec::new(),
            price: 0.0,
            old_price: None,
            status: PlantStatus::default(),
            maintenance_level: None,
            on_sale: false,
            trending: false,
        }
    }
}
