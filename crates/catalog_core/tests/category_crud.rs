use catalog_core::db::open_db_in_memory;
use catalog_core::{
    CategoryDraft, CategoryRepository, DeleteOutcome, ProductDraft, ProductRepository, RepoError,
    SqliteCategoryRepository, SqliteProductRepository,
};
use rust_decimal::Decimal;

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::new(&conn);

    let draft = CategoryDraft {
        name: "Electronics".to_string(),
        description: Some("Gadgets and devices".to_string()),
    };
    let id = repo.create_category(&draft).unwrap();

    let loaded = repo.get_category(id).unwrap().unwrap();
    assert_eq!(loaded.id, id);
    assert_eq!(loaded.name, "Electronics");
    assert_eq!(loaded.description.as_deref(), Some("Gadgets and devices"));
}

#[test]
fn get_missing_category_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::new(&conn);

    assert!(repo.get_category(42).unwrap().is_none());
}

#[test]
fn list_returns_all_categories() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::new(&conn);

    repo.create_category(&CategoryDraft::new("Electronics"))
        .unwrap();
    repo.create_category(&CategoryDraft::new("Clothing"))
        .unwrap();

    let categories = repo.list_categories().unwrap();
    assert_eq!(categories.len(), 2);
}

#[test]
fn update_replaces_all_fields_wholesale() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::new(&conn);

    let id = repo
        .create_category(&CategoryDraft {
            name: "Electronics".to_string(),
            description: Some("old text".to_string()),
        })
        .unwrap();

    // Omitted description clears the stored value, it is not preserved.
    let updated = repo
        .update_category(id, &CategoryDraft::new("Consumer Electronics"))
        .unwrap();
    assert!(updated);

    let loaded = repo.get_category(id).unwrap().unwrap();
    assert_eq!(loaded.name, "Consumer Electronics");
    assert_eq!(loaded.description, None);
}

#[test]
fn update_missing_category_returns_false_and_leaves_store_unmodified() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::new(&conn);

    let updated = repo
        .update_category(7, &CategoryDraft::new("Ghost"))
        .unwrap();
    assert!(!updated);
    assert!(repo.list_categories().unwrap().is_empty());
}

#[test]
fn create_rejects_blank_name() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::new(&conn);

    let err = repo.create_category(&CategoryDraft::new("   ")).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
    assert!(repo.list_categories().unwrap().is_empty());
}

#[test]
fn delete_empty_category_succeeds_and_get_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::new(&conn);

    let id = repo.create_category(&CategoryDraft::new("Toys")).unwrap();

    assert_eq!(repo.delete_category(id).unwrap(), DeleteOutcome::Deleted);
    assert!(repo.get_category(id).unwrap().is_none());
}

#[test]
fn delete_missing_category_reports_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::new(&conn);

    assert_eq!(repo.delete_category(9).unwrap(), DeleteOutcome::NotFound);
}

#[test]
fn delete_referenced_category_is_refused_and_removes_nothing() {
    let conn = open_db_in_memory().unwrap();
    let categories = SqliteCategoryRepository::new(&conn);
    let products = SqliteProductRepository::new(&conn);

    let category_id = categories
        .create_category(&CategoryDraft::new("Electronics"))
        .unwrap();
    let product_id = products
        .create_product(&ProductDraft::new(
            "Phone",
            Decimal::new(69999, 2),
            category_id,
        ))
        .unwrap();

    assert_eq!(
        categories.delete_category(category_id).unwrap(),
        DeleteOutcome::HasDependents
    );
    assert!(categories.get_category(category_id).unwrap().is_some());
    assert!(products.get_product(product_id).unwrap().is_some());
}
