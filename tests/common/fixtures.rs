//! Catalog fixtures

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use vitrine::{Catalog, ItemEntry};

/// (category, title, description, image)
pub const SAMPLE_ITEMS: &[(&str, &str, &str, &str)] = &[
    ("nature", "Misty Forest", "Morning fog between pines", "forest.jpg"),
    ("nature", "Lake Mirror", "Still water at dawn", "lake.jpg"),
    ("city", "Night Bridge", "Lights over the river", "bridge.jpg"),
    ("nature", "Desert Dunes", "Wind-carved sand", "dunes.jpg"),
    ("city", "Old Market", "Crowded stalls at noon", "market.jpg"),
];

pub fn sample_entries() -> Vec<ItemEntry> {
    SAMPLE_ITEMS
        .iter()
        .map(|(category, title, description, image)| ItemEntry {
            category: category.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            image: image.to_string(),
        })
        .collect()
}

/// The five-item sample catalog: nature, nature, city, nature, city
pub fn sample_catalog() -> Catalog {
    Catalog::from_entries(sample_entries()).expect("sample catalog is valid")
}

/// Catalog with the given category tags and generated titles
pub fn catalog_with_categories(categories: &[&str]) -> Catalog {
    let entries = categories
        .iter()
        .enumerate()
        .map(|(i, category)| ItemEntry {
            category: category.to_string(),
            title: format!("Shot {i}"),
            description: format!("Frame number {i}"),
            image: format!("shots/{i}.jpg"),
        })
        .collect();
    Catalog::from_entries(entries).expect("fixture catalog is valid")
}

/// Write the sample catalog as TOML into `dir`
pub fn write_toml_catalog(dir: &TempDir) -> PathBuf {
    let mut contents = String::new();
    for (category, title, description, image) in SAMPLE_ITEMS {
        contents.push_str(&format!(
            "[[items]]\ncategory = \"{category}\"\ntitle = \"{title}\"\ndescription = \"{description}\"\nimage = \"{image}\"\n\n"
        ));
    }
    let path = dir.path().join("catalog.toml");
    fs::write(&path, contents).expect("Failed to write catalog");
    path
}

/// Write the sample catalog as JSON into `dir`
pub fn write_json_catalog(dir: &TempDir) -> PathBuf {
    let items: Vec<serde_json::Value> = SAMPLE_ITEMS
        .iter()
        .map(|(category, title, description, image)| {
            serde_json::json!({
                "category": category,
                "title": title,
                "description": description,
                "src": image,
            })
        })
        .collect();
    let path = dir.path().join("catalog.json");
    fs::write(&path, serde_json::json!({ "items": items }).to_string())
        .expect("Failed to write catalog");
    path
}
