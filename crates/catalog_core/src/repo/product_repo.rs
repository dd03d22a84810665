//! Product repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `products` table.
//! - Join the owning category so read shapes carry `category_name`.
//!
//! # Invariants
//! - Prices are written as canonical decimal text and parsed back into
//!   `Decimal`; a non-decimal `price` cell is invalid persisted state.
//! - A dangling `category_id` is rejected by the store's foreign-key
//!   constraint, not pre-checked here.

use crate::model::{ProductDraft, ProductId, ProductRecord};
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, Row};
use rust_decimal::Decimal;
use std::str::FromStr;

pub(crate) const PRODUCT_SELECT_SQL: &str = "SELECT
    products.id AS id,
    products.name AS name,
    products.description AS description,
    products.price AS price,
    products.category_id AS category_id,
    categories.name AS category_name
FROM products
JOIN categories ON categories.id = products.category_id";

/// Repository interface for product CRUD operations.
pub trait ProductRepository {
    /// Lists all products with their category name, store-default order.
    fn list_products(&self) -> RepoResult<Vec<ProductRecord>>;
    /// Gets one product by id; `None` when absent.
    fn get_product(&self, id: ProductId) -> RepoResult<Option<ProductRecord>>;
    /// Inserts one product and returns the store-assigned id.
    fn create_product(&self, draft: &ProductDraft) -> RepoResult<ProductId>;
    /// Replaces all mutable fields; `false` when no row has this id.
    fn update_product(&self, id: ProductId, draft: &ProductDraft) -> RepoResult<bool>;
    /// Deletes one product unconditionally; `false` when absent.
    fn delete_product(&self, id: ProductId) -> RepoResult<bool>;
}

/// SQLite-backed product repository.
pub struct SqliteProductRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProductRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ProductRepository for SqliteProductRepository<'_> {
    fn list_products(&self) -> RepoResult<Vec<ProductRecord>> {
        let mut stmt = self.conn.prepare(&format!("{PRODUCT_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut products = Vec::new();
        while let Some(row) = rows.next()? {
            products.push(parse_product_row(row)?);
        }
        Ok(products)
    }

    fn get_product(&self, id: ProductId) -> RepoResult<Option<ProductRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PRODUCT_SELECT_SQL} WHERE products.id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_product_row(row)?));
        }
        Ok(None)
    }

    fn create_product(&self, draft: &ProductDraft) -> RepoResult<ProductId> {
        draft.validate()?;

        self.conn.execute(
            "INSERT INTO products (name, description, price, category_id)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                draft.name.as_str(),
                draft.description.as_deref(),
                draft.price.to_string(),
                draft.category_id,
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update_product(&self, id: ProductId, draft: &ProductDraft) -> RepoResult<bool> {
        draft.validate()?;

        let changed = self.conn.execute(
            "UPDATE products
             SET
                name = ?1,
                description = ?2,
                price = ?3,
                category_id = ?4
             WHERE id = ?5;",
            params![
                draft.name.as_str(),
                draft.description.as_deref(),
                draft.price.to_string(),
                draft.category_id,
                id,
            ],
        )?;

        Ok(changed > 0)
    }

    fn delete_product(&self, id: ProductId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM products WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }
}

pub(crate) fn parse_product_row(row: &Row<'_>) -> RepoResult<ProductRecord> {
    let price_text: String = row.get("price")?;
    let price = parse_price(&price_text)?;

    Ok(ProductRecord {
        id: row.get("id")?,
        name: row.get("name")?,
        description: row.get("description")?,
        price,
        category_id: row.get("category_id")?,
        category_name: row.get("category_name")?,
    })
}

pub(crate) fn parse_price(value: &str) -> RepoResult<Decimal> {
    Decimal::from_str(value).map_err(|_| {
        RepoError::InvalidData(format!("invalid price value `{value}` in products.price"))
    })
}
