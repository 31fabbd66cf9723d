use rust_decimal::Decimal;
use thiserror::Error;

pub mod ademe;
pub mod category_registry;
pub mod item_catalog;

/// Reference-data violations are fatal at startup. The scanner never starts
/// with a table it cannot trust.
#[derive(Debug, Error)]
pub enum InvalidConfig {
    #[error("duplicate category id: {0}")]
    DuplicateCategory(String),
    #[error("category {id}: baseline factor must be positive, got {factor}")]
    NonPositiveBaselineFactor { id: String, factor: Decimal },
    #[error("duplicate item identifier: {0}")]
    DuplicateItem(String),
    #[error("item {identifier}: average weight must be positive, got {weight}")]
    NonPositiveWeight { identifier: String, weight: Decimal },
    #[error("item {identifier}: emission factor must be positive, got {factor}")]
    NonPositiveEmissionFactor { identifier: String, factor: Decimal },
    #[error("item {identifier} references unknown category {category_id}")]
    UnknownCategory {
        identifier: String,
        category_id: String,
    },
}
