//! End-to-end catalog lifecycle through the service facades.

use catalog_core::db::open_db_in_memory;
use catalog_core::{
    CategoryDraft, CategoryService, DeleteOutcome, ProductDraft, ProductService,
    ProductServiceError, SqliteCategoryRepository, SqliteProductRepository,
};
use rust_decimal::Decimal;

fn price(text: &str) -> Decimal {
    text.parse().unwrap()
}

#[test]
fn category_and_product_lifecycle() {
    let conn = open_db_in_memory().unwrap();
    let categories = CategoryService::new(SqliteCategoryRepository::new(&conn));
    let products = ProductService::new(SqliteProductRepository::new(&conn));

    let electronics = categories
        .create_category(CategoryDraft::new("Electronics"))
        .unwrap();
    assert_eq!(electronics.name, "Electronics");

    let phone = products
        .create_product(ProductDraft::new(
            "Phone",
            price("699.99"),
            electronics.id,
        ))
        .unwrap();
    assert_eq!(phone.price, price("699.99"));

    // The created product reads back with its joined category name.
    let loaded = products.get_product(phone.id).unwrap().unwrap();
    assert_eq!(loaded.category_name, "Electronics");

    // The category cannot go while the phone references it.
    assert_eq!(
        categories.delete_category(electronics.id).unwrap(),
        DeleteOutcome::HasDependents
    );

    assert!(products.delete_product(phone.id).unwrap());
    assert_eq!(
        categories.delete_category(electronics.id).unwrap(),
        DeleteOutcome::Deleted
    );
    assert!(categories.get_category(electronics.id).unwrap().is_none());
}

#[test]
fn service_create_rejects_invalid_drafts_before_any_write() {
    let conn = open_db_in_memory().unwrap();
    let categories = CategoryService::new(SqliteCategoryRepository::new(&conn));
    let products = ProductService::new(SqliteProductRepository::new(&conn));

    let category = categories
        .create_category(CategoryDraft::new("Electronics"))
        .unwrap();

    let err = products
        .create_product(ProductDraft::new("Phone", price("-5.00"), category.id))
        .unwrap_err();
    assert!(matches!(err, ProductServiceError::InvalidDraft(_)));
    assert!(products.list_products().unwrap().is_empty());
}

#[test]
fn service_update_reports_missing_rows_as_false() {
    let conn = open_db_in_memory().unwrap();
    let categories = CategoryService::new(SqliteCategoryRepository::new(&conn));

    let updated = categories
        .update_category(404, CategoryDraft::new("Nobody"))
        .unwrap();
    assert!(!updated);
}

#[test]
fn service_list_reflects_created_entities() {
    let conn = open_db_in_memory().unwrap();
    let categories = CategoryService::new(SqliteCategoryRepository::new(&conn));
    let products = ProductService::new(SqliteProductRepository::new(&conn));

    let electronics = categories
        .create_category(CategoryDraft::new("Electronics"))
        .unwrap();
    products
        .create_product(ProductDraft::new("Phone", price("699.99"), electronics.id))
        .unwrap();
    products
        .create_product(ProductDraft::new("Laptop", price("1299.00"), electronics.id))
        .unwrap();

    assert_eq!(categories.list_categories().unwrap().len(), 1);
    let listed = products.list_products().unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed
        .iter()
        .all(|product| product.category_name == "Electronics"));
}
