//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `catalog_core` linkage.
//! - Seed an in-memory catalog and print a deterministic summary.

use catalog_core::db::open_db_in_memory;
use catalog_core::{
    CategoryDraft, CategoryService, ProductDraft, ProductService, SqliteCategoryRepository,
    SqliteProductRepository,
};
use rust_decimal::Decimal;

fn main() {
    println!("catalog_core version={}", catalog_core::core_version());

    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("failed to open in-memory catalog: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = smoke(&conn) {
        eprintln!("catalog smoke failed: {err}");
        std::process::exit(1);
    }
}

fn smoke(conn: &rusqlite::Connection) -> Result<(), Box<dyn std::error::Error>> {
    let categories = CategoryService::new(SqliteCategoryRepository::new(conn));
    let products = ProductService::new(SqliteProductRepository::new(conn));

    let electronics = categories.create_category(CategoryDraft::new("Electronics"))?;
    let phone = products.create_product(ProductDraft::new(
        "Smartphone X",
        Decimal::new(69999, 2),
        electronics.id,
    ))?;

    println!(
        "seeded category id={} name={}",
        electronics.id, electronics.name
    );
    println!(
        "seeded product id={} name={} price={} category={}",
        phone.id, phone.name, phone.price, phone.category_name
    );
    println!(
        "average price={}",
        catalog_core::query::average_price(conn)?
    );

    Ok(())
}
