//! Category-centric aggregation queries.
//!
//! # Responsibility
//! - Per-category product counts, average prices, and price-threshold
//!   flags; top-N categories by product count.
//!
//! # Invariants
//! - Every category appears in each result, including categories
//!   without products (count 0, average exactly zero, flag false).

use super::products::load_products;
use crate::model::CategoryId;
use crate::repo::RepoResult;
use rusqlite::{Connection, Row};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const CATEGORY_COUNT_SQL: &str = "SELECT
    categories.id AS id,
    categories.name AS name,
    COUNT(products.id) AS product_count
FROM categories
LEFT JOIN products ON products.category_id = categories.id
GROUP BY categories.id, categories.name";

/// One category with its product count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryWithCount {
    pub id: CategoryId,
    pub name: String,
    pub product_count: u32,
}

/// One category with the exact mean price of its products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryWithAveragePrice {
    pub id: CategoryId,
    pub name: String,
    /// Exactly zero when the category has no products.
    pub average_price: Decimal,
}

/// One category with a price-threshold flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryWithFlag {
    pub id: CategoryId,
    pub name: String,
    /// Whether at least one product of the category has
    /// `price >= min_price`.
    pub has_expensive_products: bool,
}

/// Returns every category with the count of products referencing it.
pub fn categories_with_counts(conn: &Connection) -> RepoResult<Vec<CategoryWithCount>> {
    let mut stmt = conn.prepare(&format!("{CATEGORY_COUNT_SQL};"))?;
    let mut rows = stmt.query([])?;
    let mut counts = Vec::new();
    while let Some(row) = rows.next()? {
        counts.push(parse_count_row(row)?);
    }
    Ok(counts)
}

/// Returns the `n` categories with the most products, count descending.
pub fn top_categories_by_count(conn: &Connection, n: u32) -> RepoResult<Vec<CategoryWithCount>> {
    let mut stmt = conn.prepare(&format!(
        "{CATEGORY_COUNT_SQL} ORDER BY product_count DESC LIMIT ?1;"
    ))?;
    let mut rows = stmt.query([i64::from(n)])?;
    let mut counts = Vec::new();
    while let Some(row) = rows.next()? {
        counts.push(parse_count_row(row)?);
    }
    Ok(counts)
}

/// Returns every category with the exact mean price of its products,
/// or zero for categories without products.
pub fn categories_with_average_prices(
    conn: &Connection,
) -> RepoResult<Vec<CategoryWithAveragePrice>> {
    let prices_by_category = collect_prices_by_category(conn)?;

    let mut averages = Vec::new();
    for (id, name) in list_category_names(conn)? {
        let average_price = match prices_by_category.get(&id) {
            Some(prices) if !prices.is_empty() => {
                let total: Decimal = prices.iter().copied().sum();
                total / Decimal::from(prices.len() as u64)
            }
            _ => Decimal::ZERO,
        };
        averages.push(CategoryWithAveragePrice {
            id,
            name,
            average_price,
        });
    }
    Ok(averages)
}

/// Returns every category flagged by whether any of its products has
/// `price >= min_price`.
pub fn categories_with_expensive_flag(
    conn: &Connection,
    min_price: Decimal,
) -> RepoResult<Vec<CategoryWithFlag>> {
    let prices_by_category = collect_prices_by_category(conn)?;

    let mut flags = Vec::new();
    for (id, name) in list_category_names(conn)? {
        let has_expensive_products = prices_by_category
            .get(&id)
            .is_some_and(|prices| prices.iter().any(|price| *price >= min_price));
        flags.push(CategoryWithFlag {
            id,
            name,
            has_expensive_products,
        });
    }
    Ok(flags)
}

fn parse_count_row(row: &Row<'_>) -> RepoResult<CategoryWithCount> {
    Ok(CategoryWithCount {
        id: row.get("id")?,
        name: row.get("name")?,
        product_count: row.get("product_count")?,
    })
}

fn list_category_names(conn: &Connection) -> RepoResult<Vec<(CategoryId, String)>> {
    let mut stmt = conn.prepare("SELECT id, name FROM categories;")?;
    let mut rows = stmt.query([])?;
    let mut names = Vec::new();
    while let Some(row) = rows.next()? {
        names.push((row.get("id")?, row.get("name")?));
    }
    Ok(names)
}

fn collect_prices_by_category(
    conn: &Connection,
) -> RepoResult<HashMap<CategoryId, Vec<Decimal>>> {
    let mut prices: HashMap<CategoryId, Vec<Decimal>> = HashMap::new();
    for product in load_products(conn)? {
        prices.entry(product.category_id).or_default().push(product.price);
    }
    Ok(prices)
}
