//! Category repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `categories` table.
//! - Refuse deletes while products still reference the category.
//!
//! # Invariants
//! - `update_category` is wholesale replacement of all mutable fields.
//! - Delete refusal reasons are reported via [`DeleteOutcome`], not a
//!   collapsed boolean.

use crate::model::{CategoryDraft, CategoryId, CategoryRecord};
use crate::repo::{DeleteOutcome, RepoResult};
use rusqlite::{params, Connection, Row};

const CATEGORY_SELECT_SQL: &str = "SELECT
    id,
    name,
    description
FROM categories";

/// Repository interface for category CRUD operations.
pub trait CategoryRepository {
    /// Lists all categories in store-default order.
    fn list_categories(&self) -> RepoResult<Vec<CategoryRecord>>;
    /// Gets one category by id; `None` when absent.
    fn get_category(&self, id: CategoryId) -> RepoResult<Option<CategoryRecord>>;
    /// Inserts one category and returns the store-assigned id.
    fn create_category(&self, draft: &CategoryDraft) -> RepoResult<CategoryId>;
    /// Replaces all mutable fields; `false` when no row has this id.
    fn update_category(&self, id: CategoryId, draft: &CategoryDraft) -> RepoResult<bool>;
    /// Deletes one category unless products still reference it.
    fn delete_category(&self, id: CategoryId) -> RepoResult<DeleteOutcome>;
}

/// SQLite-backed category repository.
pub struct SqliteCategoryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCategoryRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CategoryRepository for SqliteCategoryRepository<'_> {
    fn list_categories(&self) -> RepoResult<Vec<CategoryRecord>> {
        let mut stmt = self.conn.prepare(&format!("{CATEGORY_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut categories = Vec::new();
        while let Some(row) = rows.next()? {
            categories.push(parse_category_row(row)?);
        }
        Ok(categories)
    }

    fn get_category(&self, id: CategoryId) -> RepoResult<Option<CategoryRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CATEGORY_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_category_row(row)?));
        }
        Ok(None)
    }

    fn create_category(&self, draft: &CategoryDraft) -> RepoResult<CategoryId> {
        draft.validate()?;

        self.conn.execute(
            "INSERT INTO categories (name, description) VALUES (?1, ?2);",
            params![draft.name.as_str(), draft.description.as_deref()],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update_category(&self, id: CategoryId, draft: &CategoryDraft) -> RepoResult<bool> {
        draft.validate()?;

        let changed = self.conn.execute(
            "UPDATE categories
             SET
                name = ?1,
                description = ?2
             WHERE id = ?3;",
            params![draft.name.as_str(), draft.description.as_deref(), id],
        )?;

        Ok(changed > 0)
    }

    fn delete_category(&self, id: CategoryId) -> RepoResult<DeleteOutcome> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM categories WHERE id = ?1);",
            [id],
            |row| row.get(0),
        )?;
        if exists == 0 {
            return Ok(DeleteOutcome::NotFound);
        }

        let dependents: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM products WHERE category_id = ?1;",
            [id],
            |row| row.get(0),
        )?;
        if dependents > 0 {
            return Ok(DeleteOutcome::HasDependents);
        }

        self.conn
            .execute("DELETE FROM categories WHERE id = ?1;", [id])?;
        Ok(DeleteOutcome::Deleted)
    }
}

fn parse_category_row(row: &Row<'_>) -> RepoResult<CategoryRecord> {
    Ok(CategoryRecord {
        id: row.get("id")?,
        name: row.get("name")?,
        description: row.get("description")?,
    })
}
