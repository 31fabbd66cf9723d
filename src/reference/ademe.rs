use crate::reference::category_registry::Category;
use crate::reference::item_catalog::CatalogItem;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// ADEME category baselines: the average manufacturing emission factor
/// (kg CO2e per kg of product) for each product category.
pub fn categories() -> Vec<Category> {
    vec![
        category("electronics", "Electronics", dec!(15.5)),
        category("small_electronics", "Small Electronics", dec!(25.0)),
        category("textiles", "Textiles", dec!(12.0)),
        category("plastic", "Plastics", dec!(2.3)),
        category("aluminum", "Aluminum", dec!(8.2)),
    ]
}

/// Item-specific emission factors, each compared against its category
/// baseline to decide the relative impact tier.
pub fn items() -> Vec<CatalogItem> {
    vec![
        item(
            "laptop",
            "electronics",
            dec!(2.0),
            dec!(18.0),
            "This appears to be a standard or performance laptop. Models using \
             recycled materials can have a footprint up to 20% lower.",
        ),
        item(
            "smartphone",
            "small_electronics",
            dec!(0.2),
            dec!(25.0),
            "The biggest impact comes from frequent replacement. Making your \
             phone last an extra year significantly reduces its lifetime footprint.",
        ),
        item(
            "television",
            "electronics",
            dec!(15.0),
            dec!(15.5),
            "Look for an 'Energy Star' rating on your next purchase to reduce \
             usage emissions, which often outweigh manufacturing.",
        ),
        item(
            "water bottle",
            "plastic",
            dec!(0.05),
            dec!(2.1),
            "This bottle has a relatively low manufacturing footprint. The key \
             is to reuse it instead of buying new ones.",
        ),
        item(
            "t-shirt",
            "textiles",
            dec!(0.25),
            dec!(7.5),
            "This item has a lower-than-average footprint for textiles, likely \
             due to materials like organic cotton. Well done.",
        ),
        item(
            "can",
            "aluminum",
            dec!(0.015),
            dec!(8.2),
            "The impact is in the metal production. Aluminum is infinitely \
             recyclable, so always ensure this ends up in the recycling bin.",
        ),
    ]
}

fn category(id: &str, display_name: &str, baseline_factor: Decimal) -> Category {
    Category {
        id: id.to_string(),
        display_name: display_name.to_string(),
        baseline_factor,
    }
}

fn item(
    identifier: &str,
    category_id: &str,
    average_weight_kg: Decimal,
    specific_emission_factor: Decimal,
    recommendation: &str,
) -> CatalogItem {
    CatalogItem {
        identifier: identifier.to_string(),
        category_id: category_id.to_string(),
        average_weight_kg,
        specific_emission_factor,
        recommendation: recommendation.to_string(),
    }
}
