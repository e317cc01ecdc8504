//! YAML parser for catalog seed files
//!
//! Parses and validates catalog YAML. Validation covers seed-file integrity
//! only (duplicate ids, empty titles, non-positive prices and quantities);
//! cross-references to meal ids are resolved later by the store.

use crate::error::{Error, Result};
use crate::loader::types::CatalogDefinition;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Load a catalog definition from a YAML file
pub fn load_catalog(path: impl AsRef<Path>) -> Result<CatalogDefinition> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::config(format!(
                "Failed to read catalog file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;
    load_catalog_from_str(&content)
}

/// Load a catalog definition from a YAML string
pub fn load_catalog_from_str(yaml: &str) -> Result<CatalogDefinition> {
    let def: CatalogDefinition = serde_yaml::from_str(yaml)
        .map_err(|e| Error::config(format!("Failed to parse catalog YAML: {e}")))?;

    validate_catalog(&def)?;
    Ok(def)
}

/// Validate a catalog definition
fn validate_catalog(def: &CatalogDefinition) -> Result<()> {
    if def.meals.is_empty() {
        return Err(Error::catalog("Catalog must have at least one meal"));
    }

    let mut meal_ids = HashSet::new();
    for meal in &def.meals {
        if meal.title.trim().is_empty() {
            return Err(Error::catalog(format!(
                "Meal {} has an empty title",
                meal.meal_id
            )));
        }
        if !meal.price.is_finite() || meal.price <= 0.0 {
            return Err(Error::catalog(format!(
                "Meal '{}' has a non-positive price",
                meal.title
            )));
        }
        if !meal_ids.insert(meal.meal_id) {
            return Err(Error::catalog(format!(
                "Duplicate meal id {}",
                meal.meal_id
            )));
        }
    }

    for menu in &def.menus {
        if menu.meals.is_empty() {
            return Err(Error::catalog(format!(
                "Menu {} has no meals",
                menu.date
            )));
        }
        let unique: HashSet<_> = menu.meals.iter().collect();
        if unique.len() != menu.meals.len() {
            return Err(Error::catalog(format!(
                "Menu {} lists the same meal more than once",
                menu.date
            )));
        }
    }

    let mut order_ids = HashSet::new();
    for order in &def.orders {
        if order.quantity == 0 {
            return Err(Error::catalog(format!(
                "Order {} has zero quantity",
                order.order_id
            )));
        }
        if !order_ids.insert(order.order_id) {
            return Err(Error::catalog(format!(
                "Duplicate order id {}",
                order.order_id
            )));
        }
    }

    Ok(())
}
