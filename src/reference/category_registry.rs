use crate::reference::InvalidConfig;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// A product category with the average manufacturing emission factor
/// (kg CO2e per kg of product) for that category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub display_name: String,
    pub baseline_factor: Decimal,
}

#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    categories: HashMap<String, Category>,
}

impl CategoryRegistry {
    pub fn new(categories: Vec<Category>) -> Result<Self, InvalidConfig> {
        let mut by_id = HashMap::new();

        for category in categories {
            if category.baseline_factor <= Decimal::ZERO {
                return Err(InvalidConfig::NonPositiveBaselineFactor {
                    id: category.id,
                    factor: category.baseline_factor,
                });
            }

            let id = category.id.clone();
            if by_id.insert(id.clone(), category).is_some() {
                return Err(InvalidConfig::DuplicateCategory(id));
            }
        }

        Ok(Self { categories: by_id })
    }

    pub fn lookup(&self, category_id: &str) -> Option<&Category> {
        self.categories.get(category_id)
    }

    pub fn contains(&self, category_id: &str) -> bool {
        self.categories.contains_key(category_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn category(id: &str, baseline_factor: Decimal) -> Category {
        Category {
            id: id.to_string(),
            display_name: id.to_string(),
            baseline_factor,
        }
    }

    #[test]
    fn lookup_returns_registered_category() {
        let registry = CategoryRegistry::new(vec![category("textiles", dec!(12.0))]).unwrap();

        let found = registry.lookup("textiles").unwrap();
        assert_eq!(found.baseline_factor, dec!(12.0));
    }

    #[test]
    fn lookup_misses_unregistered_category() {
        let registry = CategoryRegistry::new(vec![category("textiles", dec!(12.0))]).unwrap();

        assert!(registry.lookup("glass").is_none());
    }

    #[test]
    fn rejects_non_positive_baseline_factor() {
        let result = CategoryRegistry::new(vec![category("textiles", Decimal::ZERO)]);

        assert!(matches!(
            result,
            Err(InvalidConfig::NonPositiveBaselineFactor { .. })
        ));
    }

    #[test]
    fn rejects_duplicate_category_ids() {
        let result = CategoryRegistry::new(vec![
            category("textiles", dec!(12.0)),
            category("textiles", dec!(13.0)),
        ]);

        assert!(matches!(result, Err(InvalidConfig::DuplicateCategory(id)) if id == "textiles"));
    }
}
