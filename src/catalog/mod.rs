//! The fixed, ordered collection of gallery items.
//!
//! A catalog is read once (from a TOML or JSON file, or built in memory) and
//! never mutated afterwards. Every item keeps its ordinal position, which is
//! the stable identity used to address render signals.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Category tag reserved for "no category filter".
pub const ALL_CATEGORIES: &str = "all";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unsupported catalog format: {} (expected .toml or .json)", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("Category \"all\" is reserved (item {position})")]
    ReservedCategory { position: usize },
    #[error("Item {position} has a blank category")]
    BlankCategory { position: usize },
}

/// A single displayable entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub category: String,
    pub title: String,
    pub description: String,
    /// Opaque reference to the underlying image (path, URL, ...)
    pub image_ref: String,
    /// Position in the original catalog ordering
    pub position: usize,
}

/// Item as written in a catalog file
#[derive(Debug, Clone, Deserialize)]
pub struct ItemEntry {
    pub category: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(alias = "image_ref", alias = "src")]
    pub image: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct CatalogFile {
    #[serde(default, alias = "item")]
    items: Vec<ItemEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Build a catalog from entries, assigning positions in order.
    pub fn from_entries(entries: Vec<ItemEntry>) -> Result<Self, CatalogError> {
        let mut items = Vec::with_capacity(entries.len());
        for (position, entry) in entries.into_iter().enumerate() {
            let category = entry.category.trim().to_string();
            if category.is_empty() {
                return Err(CatalogError::BlankCategory { position });
            }
            if category == ALL_CATEGORIES {
                return Err(CatalogError::ReservedCategory { position });
            }
            items.push(Item {
                category,
                title: entry.title,
                description: entry.description,
                image_ref: entry.image,
                position,
            });
        }
        Ok(Self { items })
    }

    /// Load a catalog file. The format is picked from the extension.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let file: CatalogFile = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => toml::from_str(&contents)?,
            Some("json") => serde_json::from_str(&contents)?,
            _ => return Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
        };

        let catalog = Self::from_entries(file.items)?;
        tracing::info!(
            path = %path.display(),
            items = catalog.len(),
            categories = catalog.categories().len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, position: usize) -> Option<&Item> {
        self.items.get(position)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct category tags in order of first appearance
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for item in &self.items {
            if !seen.contains(&item.category.as_str()) {
                seen.push(&item.category);
            }
        }
        seen
    }

    pub fn has_category(&self, tag: &str) -> bool {
        self.items.iter().any(|item| item.category == tag)
    }
}
