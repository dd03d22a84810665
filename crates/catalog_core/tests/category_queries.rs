use catalog_core::db::open_db_in_memory;
use catalog_core::query::{
    categories_with_average_prices, categories_with_counts, categories_with_expensive_flag,
    normalize_top_n, top_categories_by_count,
};
use catalog_core::{
    CategoryDraft, CategoryId, CategoryRepository, ProductDraft, ProductRepository,
    SqliteCategoryRepository, SqliteProductRepository,
};
use rusqlite::Connection;
use rust_decimal::Decimal;

fn price(text: &str) -> Decimal {
    text.parse().unwrap()
}

fn seed_category(conn: &Connection, name: &str) -> CategoryId {
    SqliteCategoryRepository::new(conn)
        .create_category(&CategoryDraft::new(name))
        .unwrap()
}

fn seed_product(conn: &Connection, name: &str, price_text: &str, category_id: CategoryId) {
    SqliteProductRepository::new(conn)
        .create_product(&ProductDraft::new(name, price(price_text), category_id))
        .unwrap();
}

struct Seeded {
    electronics: CategoryId,
    clothing: CategoryId,
    books: CategoryId,
}

/// Electronics: two products, Clothing: one, Books: none.
fn seed_catalog(conn: &Connection) -> Seeded {
    let electronics = seed_category(conn, "Electronics");
    let clothing = seed_category(conn, "Clothing");
    let books = seed_category(conn, "Books");
    seed_product(conn, "Phone", "699.99", electronics);
    seed_product(conn, "Laptop", "1300.01", electronics);
    seed_product(conn, "Jacket", "89.50", clothing);
    Seeded {
        electronics,
        clothing,
        books,
    }
}

#[test]
fn counts_cover_every_category_including_empty_ones() {
    let conn = open_db_in_memory().unwrap();
    let seeded = seed_catalog(&conn);

    let counts = categories_with_counts(&conn).unwrap();
    assert_eq!(counts.len(), 3);

    let count_of = |id: CategoryId| {
        counts
            .iter()
            .find(|entry| entry.id == id)
            .unwrap()
            .product_count
    };
    assert_eq!(count_of(seeded.electronics), 2);
    assert_eq!(count_of(seeded.clothing), 1);
    assert_eq!(count_of(seeded.books), 0);
}

#[test]
fn average_prices_are_exact_and_zero_for_empty_categories() {
    let conn = open_db_in_memory().unwrap();
    let seeded = seed_catalog(&conn);

    let averages = categories_with_average_prices(&conn).unwrap();
    assert_eq!(averages.len(), 3);

    let average_of = |id: CategoryId| {
        averages
            .iter()
            .find(|entry| entry.id == id)
            .unwrap()
            .average_price
    };
    // (699.99 + 1300.01) / 2 with no floating drift.
    assert_eq!(average_of(seeded.electronics), price("1000.00"));
    assert_eq!(average_of(seeded.clothing), price("89.50"));
    assert_eq!(average_of(seeded.books), Decimal::ZERO);
}

#[test]
fn expensive_flag_reflects_the_threshold() {
    let conn = open_db_in_memory().unwrap();
    let seeded = seed_catalog(&conn);

    let flags = categories_with_expensive_flag(&conn, price("500")).unwrap();
    assert_eq!(flags.len(), 3);

    let flag_of = |id: CategoryId| {
        flags
            .iter()
            .find(|entry| entry.id == id)
            .unwrap()
            .has_expensive_products
    };
    assert!(flag_of(seeded.electronics));
    assert!(!flag_of(seeded.clothing));
    assert!(!flag_of(seeded.books));
}

#[test]
fn expensive_flag_includes_exact_threshold_match() {
    let conn = open_db_in_memory().unwrap();
    let category_id = seed_category(&conn, "Clothing");
    seed_product(&conn, "Jacket", "89.50", category_id);

    let flags = categories_with_expensive_flag(&conn, price("89.50")).unwrap();
    assert!(flags[0].has_expensive_products);
}

#[test]
fn top_categories_are_ordered_by_count_descending() {
    let conn = open_db_in_memory().unwrap();
    let seeded = seed_catalog(&conn);

    let top = top_categories_by_count(&conn, 2).unwrap();
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].id, seeded.electronics);
    assert_eq!(top[0].product_count, 2);
    assert_eq!(top[1].id, seeded.clothing);
}

#[test]
fn top_categories_default_bound_covers_small_catalogs() {
    let conn = open_db_in_memory().unwrap();
    seed_catalog(&conn);

    let top = top_categories_by_count(&conn, normalize_top_n(None)).unwrap();
    assert_eq!(top.len(), 3);
}
