//! Tests for catalog loader

use super::*;
use crate::catalog::OrderStatus;
use crate::error::Error;
use std::io::Write;

const SEED: &str = r"
meals:
  - mealId: 1
    title: Jollof Rice
    imageUrl: https://example.com/jollof.jpg
    description: Smoky party-style jollof
    price: 1500
  - mealId: 2
    title: Moi Moi
    forVegetarians: true
    price: 800
menus:
  - date: 2026-08-30
    meals: [1, 2]
orders:
  - orderId: 1
    mealId: 1
    quantity: 2
    status: delivered
    deliveryAddress: 12 Allen Avenue
    date: 2026-08-30
  - orderId: 2
    mealId: 2
    date: 2026-08-30
";

#[test]
fn test_load_catalog_from_str() {
    let def = load_catalog_from_str(SEED).unwrap();

    assert_eq!(def.meals.len(), 2);
    assert_eq!(def.meals[0].title, "Jollof Rice");
    assert!(!def.meals[0].for_vegetarians);
    assert!(def.meals[1].for_vegetarians);

    assert_eq!(def.menus.len(), 1);
    assert_eq!(def.menus[0].meals, vec![1, 2]);

    assert_eq!(def.orders.len(), 2);
    assert_eq!(def.orders[0].status, OrderStatus::Delivered);
    assert_eq!(
        def.orders[0].delivery_address.as_deref(),
        Some("12 Allen Avenue")
    );
}

#[test]
fn test_order_defaults() {
    let def = load_catalog_from_str(SEED).unwrap();

    // Quantity and status were omitted for order 2
    assert_eq!(def.orders[1].quantity, 1);
    assert_eq!(def.orders[1].status, OrderStatus::Pending);
}

#[test]
fn test_menus_and_orders_optional() {
    let def = load_catalog_from_str(
        r"
meals:
  - mealId: 1
    title: Suya
    price: 500
",
    )
    .unwrap();

    assert_eq!(def.meals.len(), 1);
    assert!(def.menus.is_empty());
    assert!(def.orders.is_empty());
}

#[test]
fn test_invalid_yaml_rejected() {
    let err = load_catalog_from_str("meals: [not a meal").unwrap_err();
    assert!(err.to_string().contains("Failed to parse catalog YAML"));
}

#[test]
fn test_empty_catalog_rejected() {
    let err = load_catalog_from_str("meals: []").unwrap_err();
    assert!(err.to_string().contains("at least one meal"));
}

#[test]
fn test_empty_title_rejected() {
    let err = load_catalog_from_str(
        r"
meals:
  - mealId: 1
    title: '  '
    price: 500
",
    )
    .unwrap_err();
    assert!(err.to_string().contains("empty title"));
}

#[test]
fn test_non_positive_price_rejected() {
    let err = load_catalog_from_str(
        r"
meals:
  - mealId: 1
    title: Suya
    price: 0
",
    )
    .unwrap_err();
    assert!(err.to_string().contains("non-positive price"));
}

#[test]
fn test_duplicate_meal_id_rejected() {
    let err = load_catalog_from_str(
        r"
meals:
  - mealId: 1
    title: Suya
    price: 500
  - mealId: 1
    title: Kilishi
    price: 700
",
    )
    .unwrap_err();
    assert!(err.to_string().contains("Duplicate meal id 1"));
}

#[test]
fn test_menu_with_repeated_meal_rejected() {
    let err = load_catalog_from_str(
        r"
meals:
  - mealId: 1
    title: Suya
    price: 500
menus:
  - date: 2026-08-30
    meals: [1, 1]
",
    )
    .unwrap_err();
    assert!(err.to_string().contains("more than once"));
}

#[test]
fn test_zero_quantity_rejected() {
    let err = load_catalog_from_str(
        r"
meals:
  - mealId: 1
    title: Suya
    price: 500
orders:
  - orderId: 1
    mealId: 1
    quantity: 0
    date: 2026-08-30
",
    )
    .unwrap_err();
    assert!(err.to_string().contains("zero quantity"));
}

#[test]
fn test_load_catalog_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SEED.as_bytes()).unwrap();

    let def = load_catalog(file.path()).unwrap();
    assert_eq!(def.meals.len(), 2);
}

#[test]
fn test_missing_file_reported() {
    let err = load_catalog("no/such/catalog.yaml").unwrap_err();
    assert!(matches!(err, Error::FileNotFound { .. }));
}
