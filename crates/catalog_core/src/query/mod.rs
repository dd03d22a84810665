//! Read-only aggregation query catalog.
//!
//! # Responsibility
//! - Provide the fixed set of parameterized read queries over products
//!   and categories (filters, top-N, search, averages, grouping).
//! - Keep SQL and row decoding inside the core persistence boundary.
//!
//! # Invariants
//! - Every query is stateless request/response over the connection.
//! - Price comparison, ordering and averaging run over `Decimal`
//!   values; prices persist as fixed-point text that SQLite cannot
//!   compare numerically without lossy REAL casts.
//! - Tie order among equal prices or equal counts is store-default and
//!   not guaranteed.

pub mod categories;
pub mod products;

pub use categories::{
    categories_with_average_prices, categories_with_counts, categories_with_expensive_flag,
    top_categories_by_count, CategoryWithAveragePrice, CategoryWithCount, CategoryWithFlag,
};
pub use products::{
    average_price, cheapest_product, filter_by_min_price, most_expensive_product,
    products_by_category, products_grouped_by_category, search_products, top_products_by_price,
    CategoryWithProducts,
};

const DEFAULT_TOP_N: u32 = 5;

/// Normalizes a caller-provided top-N bound.
///
/// An unspecified bound defaults to 5. An explicit bound is honored
/// as-is, including zero.
pub fn normalize_top_n(n: Option<u32>) -> u32 {
    n.unwrap_or(DEFAULT_TOP_N)
}
