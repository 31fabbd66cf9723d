use crate::reference::category_registry::CategoryRegistry;
use crate::reference::InvalidConfig;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// One recognizable product, keyed by its normalized identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    pub identifier: String,
    pub category_id: String,
    pub average_weight_kg: Decimal,
    pub specific_emission_factor: Decimal,
    pub recommendation: String,
}

#[derive(Debug, Clone)]
pub struct ItemCatalog {
    items: HashMap<String, CatalogItem>,
}

impl ItemCatalog {
    /// Every item must carry positive weight and factor and reference a
    /// category that exists in the registry.
    pub fn new(
        items: Vec<CatalogItem>,
        registry: &CategoryRegistry,
    ) -> Result<Self, InvalidConfig> {
        let mut by_identifier = HashMap::new();

        for item in items {
            if item.average_weight_kg <= Decimal::ZERO {
                return Err(InvalidConfig::NonPositiveWeight {
                    identifier: item.identifier,
                    weight: item.average_weight_kg,
                });
            }

            if item.specific_emission_factor <= Decimal::ZERO {
                return Err(InvalidConfig::NonPositiveEmissionFactor {
                    identifier: item.identifier,
                    factor: item.specific_emission_factor,
                });
            }

            if !registry.contains(&item.category_id) {
                return Err(InvalidConfig::UnknownCategory {
                    identifier: item.identifier,
                    category_id: item.category_id,
                });
            }

            let identifier = item.identifier.clone();
            if by_identifier.insert(identifier.clone(), item).is_some() {
                return Err(InvalidConfig::DuplicateItem(identifier));
            }
        }

        Ok(Self {
            items: by_identifier,
        })
    }

    /// Classifiers commonly return comma-joined synonym lists
    /// ("laptop, notebook computer"); only the first synonym is the key.
    pub fn normalize(raw_label: &str) -> String {
        raw_label
            .to_lowercase()
            .split(',')
            .next()
            .unwrap_or("")
            .trim()
            .to_string()
    }

    /// Absence is an expected outcome, not an error: unrecognized items get
    /// the no-data assessment.
    pub fn lookup(&self, identifier: &str) -> Option<&CatalogItem> {
        self.items.get(identifier)
    }
}
