//! Catalog snapshot loading and products-page browsing.

mod common;

use assert2::check;
use common::nursery_catalog;
use plantshop_core::{
    Catalog, CatalogError, CatalogFilter, MaintenanceLevel, PlantStatus, PriceSort,
};
use rstest::rstest;
use tempfile::TempDir;

const SNAPSHOT_JSON: &str = r#"[
    {
        "_id": "p1",
        "name": "Monstera Deliciosa",
        "scientificName": "Monstera deliciosa",
        "category": "Indoor Plants",
        "tags": ["low light"],
        "price": 34.99,
        "status": "In Stock",
        "maintenanceLevel": "Easy"
    },
    {
        "_id": "p2",
        "name": "Golden Barrel Cactus",
        "category": "Succulents & Cacti",
        "price": 18.5,
        "status": "Low Stock"
    }
]"#;

#[tokio::test]
async fn loads_wire_format_snapshot() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plants.json");
    tokio::fs::write(&path, SNAPSHOT_JSON).await.unwrap();

    let catalog = Catalog::load(&path).await.unwrap();
    check!(catalog.len() == 2);

    let monstera = catalog.get("p1").unwrap();
    check!(monstera.scientific_name.as_deref() == Some("Monstera deliciosa"));
    check!(monstera.maintenance_level == Some(MaintenanceLevel::Easy));

    let cactus = catalog.get("p2").unwrap();
    check!(cactus.scientific_name.is_none());
    check!(cactus.status == PlantStatus::LowStock);
}

#[tokio::test]
async fn missing_snapshot_is_not_found() {
    let dir = TempDir::new().unwrap();
    let result = Catalog::load(dir.path().join("absent.json")).await;
    check!(matches!(result, Err(CatalogError::NotFound { .. })));
}

#[tokio::test]
async fn malformed_snapshot_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plants.json");
    tokio::fs::write(&path, b"[{\"name\": 42}]").await.unwrap();

    let result = Catalog::load(&path).await;
    check!(matches!(result, Err(CatalogError::Parse { .. })));
}

#[rstest]
fn category_filter_narrows_the_view(nursery_catalog: Catalog) {
    let filter = CatalogFilter {
        category: Some("Succulents & Cacti".to_string()),
        ..CatalogFilter::default()
    };

    let view = nursery_catalog.filter(&filter);
    check!(view.len() == 1);
    check!(view[0].id == "p4");
}

#[rstest]
fn combined_filters_intersect(nursery_catalog: Catalog) {
    let filter = CatalogFilter {
        category: Some("Indoor Plants".to_string()),
        price_range: Some((0.0, 20.0)),
        ..CatalogFilter::default()
    };

    let ids: Vec<&str> = nursery_catalog
        .filter(&filter)
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    check!(ids == vec!["p3", "p7", "p8"]);
}

#[rstest]
fn status_filter_matches_exactly(nursery_catalog: Catalog) {
    let filter = CatalogFilter {
        status: Some(PlantStatus::OutOfStock),
        ..CatalogFilter::default()
    };
    let view = nursery_catalog.filter(&filter);
    check!(view.len() == 1);
    check!(view[0].id == "p9");
}

#[rstest]
fn browse_orders_by_price(nursery_catalog: Catalog) {
    let cheapest_first =
        nursery_catalog.browse(&CatalogFilter::default(), PriceSort::Ascending);
    check!(cheapest_first.first().unwrap().id == "p9");

    let priciest_first =
        nursery_catalog.browse(&CatalogFilter::default(), PriceSort::Descending);
    check!(priciest_first.first().unwrap().id == "p6");
}

#[rstest]
fn categories_feed_the_nav_strip(nursery_catalog: Catalog) {
    check!(
        nursery_catalog.categories()
            == vec![
                "Flowering Plants".to_string(),
                "Herbs & Vegetables".to_string(),
                "Indoor Plants".to_string(),
                "Succulents & Cacti".to_string(),
            ]
    );
}
