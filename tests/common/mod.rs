//! Shared test fixtures for integration tests.
//!
//! `nursery_catalog` is a small but realistic storefront snapshot: enough
//! records to exercise every scored field, ties, and the result cap.

use plantshop_core::{Catalog, MaintenanceLevel, Plant, PlantStatus};
use rstest::fixture;

/// One record with the scored fields filled in.
#[allow(dead_code)] // Used across different integration test crates
pub fn plant(
    id: &str,
    name: &str,
    scientific_name: Option<&str>,
    category: Option<&str>,
    tags: &[&str],
    price: f64,
) -> Plant {
    let mut plant = Plant::new(id, name);
    plant.scientific_name = scientific_name.map(str::to_owned);
    plant.category = category.map(str::to_owned);
    plant.tags = tags.iter().map(|&t| t.to_owned()).collect();
    plant.price = price;
    plant
}

/// The shop's demo inventory.
#[fixture]
#[allow(dead_code)] // Used across different integration test crates
pub fn nursery_catalog() -> Catalog {
    let mut plants = vec![
        plant(
            "p1",
            "Monstera Deliciosa",
            Some("Monstera deliciosa"),
            Some("Indoor Plants"),
            &["low light", "air purifying"],
            34.99,
        ),
        plant(
            "p2",
            "Money Tree",
            Some("Pachira aquatica"),
            Some("Indoor Plants"),
            &["gift", "easy care"],
            27.50,
        ),
        plant(
            "p3",
            "Snake Plant",
            Some("Dracaena trifasciata"),
            Some("Indoor Plants"),
            &["low light", "air purifying", "easy care"],
            19.99,
        ),
        plant(
            "p4",
            "Aloe Vera",
            Some("Aloe barbadensis"),
            Some("Succulents & Cacti"),
            &["medicinal", "easy care"],
            12.00,
        ),
        plant(
            "p5",
            "Peace Lily",
            Some("Spathiphyllum wallisii"),
            Some("Flowering Plants"),
            &["air purifying", "shade"],
            24.99,
        ),
        plant(
            "p6",
            "Fiddle Leaf Fig",
            Some("Ficus lyrata"),
            Some("Indoor Plants"),
            &["statement"],
            59.00,
        ),
        plant(
            "p7",
            "Golden Pothos",
            Some("Epipremnum aureum"),
            Some("Indoor Plants"),
            &["low light", "trailing", "easy care"],
            14.50,
        ),
        plant(
            "p8",
            "Boston Fern",
            Some("Nephrolepis exaltata"),
            Some("Indoor Plants"),
            &["humidity loving", "pet friendly"],
            16.75,
        ),
        plant(
            "p9",
            "Lavender",
            Some("Lavandula angustifolia"),
            Some("Herbs & Vegetables"),
            &["fragrant", "outdoor"],
            9.99,
        ),
        plant(
            "p10",
            "ZZ Plant",
            Some("Zamioculcas zamiifolia"),
            Some("Indoor Plants"),
            &["drought tolerant", "low light"],
            22.00,
        ),
    ];

    plants[3].maintenance_level = Some(MaintenanceLevel::Easy);
    plants[5].maintenance_level = Some(MaintenanceLevel::Expert);
    plants[5].status = PlantStatus::LowStock;
    plants[8].status = PlantStatus::OutOfStock;
    plants[0].description = Some("Iconic split-leaf houseplant from southern Mexico.".to_string());
    plants[4].description = Some("Elegant white blooms, thrives in shade.".to_string());

    Catalog::new(plants)
}
