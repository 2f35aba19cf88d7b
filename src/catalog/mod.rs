//! Catalog snapshots: the ordered, read-only product list the rest of the
//! storefront works against.
//!
//! A snapshot is whatever the data-fetch layer last produced. The search
//! engine, filters, and stores treat it as immutable; a stale or absent
//! snapshot degrades to empty results rather than an error.

mod plant;

pub use plant::{MaintenanceLevel, Plant, PlantStatus};

use crate::error::CatalogError;
use ahash::AHashSet;
use std::path::Path;

/// Products-page filter. `None` dimensions match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogFilter {
    pub category: Option<String>,
    pub maintenance: Option<MaintenanceLevel>,
    /// Inclusive price bounds, `(min, max)`.
    pub price_range: Option<(f64, f64)>,
    pub status: Option<PlantStatus>,
}

impl CatalogFilter {
    /// Whether `plant` passes every configured dimension.
    pub fn matches(&self, plant: &Plant) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .is_none_or(|wanted| plant.category.as_deref() == Some(wanted));
        let maintenance_ok = self
            .maintenance
            .is_none_or(|wanted| plant.maintenance_level == Some(wanted));
        let price_ok = self
            .price_range
            .is_none_or(|(min, max)| plant.price >= min && plant.price <= max);
        let status_ok = self.status.is_none_or(|wanted| plant.status == wanted);

        category_ok && maintenance_ok && price_ok && status_ok
    }
}

/// Sort direction for price-ordered browsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceSort {
    #[default]
    Ascending,
    Descending,
}

/// An ordered snapshot of the product catalog.
///
/// Record order is the catalog order; the ranker relies on it as the
/// tie-break for equal-score results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    plants: Vec<Plant>,
}

impl Catalog {
    pub fn new(plants: Vec<Plant>) -> Self {
        Self { plants }
    }

    /// Reads a JSON snapshot (an array of records) from disk.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                CatalogError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                CatalogError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let plants: Vec<Plant> =
            serde_json::from_slice(&bytes).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!(
            path = %path.display(),
            count = plants.len(),
            "loaded catalog snapshot"
        );
        Ok(Self::new(plants))
    }

    /// The records in catalog order.
    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    /// Looks up a record by its stable identifier.
    pub fn get(&self, id: &str) -> Option<&Plant> {
        self.plants.iter().find(|plant| plant.id == id)
    }

    /// Sorted distinct category labels, for the category navigation strip.
    pub fn categories(&self) -> Vec<String> {
        let distinct: AHashSet<&str> = self
            .plants
            .iter()
            .filter_map(|plant| plant.category.as_deref())
            .collect();

        let mut labels: Vec<String> = distinct.into_iter().map(str::to_owned).collect();
        labels.sort_unstable();
        labels
    }

    /// Records passing `filter`, in catalog order.
    pub fn filter(&self, filter: &CatalogFilter) -> Vec<&Plant> {
        self.plants
            .iter()
            .filter(|plant| filter.matches(plant))
            .collect()
    }

    /// Filtered view sorted by price. The sort is stable, so equal-priced
    /// records keep catalog order.
    pub fn browse(&self, filter: &CatalogFilter, sort: PriceSort) -> Vec<&Plant> {
        let mut view = self.filter(filter);
        match sort {
            PriceSort::Ascending => view.sort_by(|a, b| a.price.total_cmp(&b.price)),
            PriceSort::Descending => view.sort_by(|a, b| b.price.total_cmp(&a.price)),
        }
        view
    }
}
