//! Product-centric aggregation queries.
//!
//! # Responsibility
//! - Price filters, price ordering, keyword search and global price
//!   statistics over the product set.
//!
//! # Invariants
//! - Keyword search is a case-insensitive substring match on the
//!   product name only; LIKE metacharacters in the keyword match
//!   literally.
//! - The global average price is exactly zero for an empty product set.

use crate::model::{CategoryId, ProductRecord};
use crate::repo::product_repo::{parse_product_row, PRODUCT_SELECT_SQL};
use crate::repo::RepoResult;
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One category with its full nested product list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryWithProducts {
    pub category_id: CategoryId,
    pub category_name: String,
    /// Products owned by this category; empty categories are included
    /// with an empty list, not omitted.
    pub products: Vec<ProductRecord>,
}

/// Returns all products with `price >= min_price`.
///
/// There is no upper bound; a negative threshold filters nothing extra.
pub fn filter_by_min_price(conn: &Connection, min_price: Decimal) -> RepoResult<Vec<ProductRecord>> {
    let mut products = load_products(conn)?;
    products.retain(|product| product.price >= min_price);
    Ok(products)
}

/// Returns the `n` most expensive products, price descending.
pub fn top_products_by_price(conn: &Connection, n: u32) -> RepoResult<Vec<ProductRecord>> {
    let mut products = load_products(conn)?;
    products.sort_by(|a, b| b.price.cmp(&a.price));
    products.truncate(n as usize);
    Ok(products)
}

/// Returns all products owned by the given category.
///
/// An unknown category and a category without products are both an
/// empty list.
pub fn products_by_category(
    conn: &Connection,
    category_id: CategoryId,
) -> RepoResult<Vec<ProductRecord>> {
    let mut stmt = conn.prepare(&format!(
        "{PRODUCT_SELECT_SQL} WHERE products.category_id = ?1;"
    ))?;
    let mut rows = stmt.query([category_id])?;
    let mut products = Vec::new();
    while let Some(row) = rows.next()? {
        products.push(parse_product_row(row)?);
    }
    Ok(products)
}

/// Returns all products whose name contains the keyword,
/// case-insensitively. An empty keyword matches every product.
pub fn search_products(conn: &Connection, keyword: &str) -> RepoResult<Vec<ProductRecord>> {
    let mut stmt = conn.prepare(&format!(
        "{PRODUCT_SELECT_SQL} WHERE products.name LIKE '%' || ?1 || '%' ESCAPE '\\';"
    ))?;
    let mut rows = stmt.query([escape_like(keyword)])?;
    let mut products = Vec::new();
    while let Some(row) = rows.next()? {
        products.push(parse_product_row(row)?);
    }
    Ok(products)
}

/// Returns the exact arithmetic mean of all product prices, or zero
/// when no products exist.
pub fn average_price(conn: &Connection) -> RepoResult<Decimal> {
    let products = load_products(conn)?;
    if products.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let total: Decimal = products.iter().map(|product| product.price).sum();
    Ok(total / Decimal::from(products.len() as u64))
}

/// Returns the product with the lowest price, or `None` when no
/// products exist. Tie order among equal extrema is unspecified.
pub fn cheapest_product(conn: &Connection) -> RepoResult<Option<ProductRecord>> {
    let products = load_products(conn)?;
    Ok(products.into_iter().min_by_key(|product| product.price))
}

/// Returns the product with the highest price, or `None` when no
/// products exist. Tie order among equal extrema is unspecified.
pub fn most_expensive_product(conn: &Connection) -> RepoResult<Option<ProductRecord>> {
    let products = load_products(conn)?;
    Ok(products.into_iter().max_by_key(|product| product.price))
}

/// Returns every category exactly once with its nested product list.
pub fn products_grouped_by_category(conn: &Connection) -> RepoResult<Vec<CategoryWithProducts>> {
    let mut stmt = conn.prepare("SELECT id, name FROM categories;")?;
    let mut rows = stmt.query([])?;
    let mut groups: Vec<CategoryWithProducts> = Vec::new();
    let mut index_by_id: HashMap<CategoryId, usize> = HashMap::new();
    while let Some(row) = rows.next()? {
        let category_id: CategoryId = row.get("id")?;
        index_by_id.insert(category_id, groups.len());
        groups.push(CategoryWithProducts {
            category_id,
            category_name: row.get("name")?,
            products: Vec::new(),
        });
    }

    for product in load_products(conn)? {
        if let Some(&index) = index_by_id.get(&product.category_id) {
            groups[index].products.push(product);
        }
    }

    Ok(groups)
}

pub(crate) fn load_products(conn: &Connection) -> RepoResult<Vec<ProductRecord>> {
    let mut stmt = conn.prepare(&format!("{PRODUCT_SELECT_SQL};"))?;
    let mut rows = stmt.query([])?;
    let mut products = Vec::new();
    while let Some(row) = rows.next()? {
        products.push(parse_product_row(row)?);
    }
    Ok(products)
}

fn escape_like(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len());
    for ch in keyword.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
