use crate::assessment::impact;
use crate::assessment::record::{AssessmentRecord, ImpactTier};
use crate::reference::category_registry::CategoryRegistry;
use crate::reference::item_catalog::ItemCatalog;
use rust_decimal::Decimal;

const NO_DATA_RECOMMENDATION: &str = "No emissions data available for this item.";

/// Turns a raw classifier label into an assessment against the reference
/// tables. Pure: no side effects, total over any label string.
#[derive(Debug, Clone)]
pub struct ClassificationAdapter {
    category_registry: CategoryRegistry,
    item_catalog: ItemCatalog,
}

impl ClassificationAdapter {
    pub fn new(category_registry: CategoryRegistry, item_catalog: ItemCatalog) -> Self {
        Self {
            category_registry,
            item_catalog,
        }
    }

    pub fn assess(&self, raw_label: &str) -> AssessmentRecord {
        let identifier = ItemCatalog::normalize(raw_label);

        let known = self.item_catalog.lookup(&identifier).and_then(|item| {
            // Present for every catalog item once the tables validated.
            let category = self.category_registry.lookup(&item.category_id)?;

            Some(AssessmentRecord {
                display_name: identifier.clone(),
                manufacturing_co2: impact::footprint(
                    item.average_weight_kg,
                    item.specific_emission_factor,
                ),
                recommendation: item.recommendation.clone(),
                relative_impact: impact::assess_tier(
                    item.specific_emission_factor,
                    category.baseline_factor,
                ),
                category_name: category.display_name.clone(),
            })
        });

        known.unwrap_or_else(|| AssessmentRecord {
            display_name: format!("Unknown: {}", identifier),
            manufacturing_co2: Decimal::ZERO,
            recommendation: NO_DATA_RECOMMENDATION.to_string(),
            relative_impact: ImpactTier::NotApplicable,
            category_name: "Unknown".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::ademe;
    use rust_decimal_macros::dec;

    fn adapter() -> ClassificationAdapter {
        let registry = CategoryRegistry::new(ademe::categories()).unwrap();
        let catalog = ItemCatalog::new(ademe::items(), &registry).unwrap();
        ClassificationAdapter::new(registry, catalog)
    }

    #[test]
    fn laptop_is_high_impact_electronics() {
        let record = adapter().assess("laptop");

        assert_eq!(record.display_name, "laptop");
        assert_eq!(record.manufacturing_co2, dec!(36.00));
        assert_eq!(record.relative_impact, ImpactTier::High);
        assert_eq!(record.category_name, "Electronics");
    }

    #[test]
    fn smartphone_matches_its_category_baseline() {
        let record = adapter().assess("smartphone");

        assert_eq!(record.manufacturing_co2, dec!(5.00));
        assert_eq!(record.relative_impact, ImpactTier::Average);
    }

    #[test]
    fn organic_cotton_shirt_is_low_impact() {
        let record = adapter().assess("t-shirt");

        assert_eq!(record.manufacturing_co2, dec!(1.88));
        assert_eq!(record.relative_impact, ImpactTier::Low);
        assert_eq!(record.category_name, "Textiles");
    }

    #[test]
    fn synonym_list_resolves_on_first_synonym() {
        let record = adapter().assess("Laptop, notebook computer");

        assert_eq!(record.display_name, "laptop");
        assert_eq!(record.manufacturing_co2, dec!(36.00));
    }

    #[test]
    fn unrecognized_label_yields_no_data_record() {
        let record = adapter().assess("chair, furniture");

        assert_eq!(record.display_name, "Unknown: chair");
        assert_eq!(record.manufacturing_co2, Decimal::ZERO);
        assert_eq!(record.relative_impact, ImpactTier::NotApplicable);
        assert_eq!(record.category_name, "Unknown");
        assert_eq!(record.recommendation, NO_DATA_RECOMMENDATION);
    }

    #[test]
    fn assessment_is_deterministic() {
        let adapter = adapter();

        assert_eq!(adapter.assess("television"), adapter.assess("television"));
    }
}
