use rust_decimal::Decimal;

/// How an item's specific emission factor compares to its category baseline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImpactTier {
    Low,
    Average,
    High,
    NotApplicable,
}

impl std::fmt::Display for ImpactTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImpactTier::Low => write!(f, "Low"),
            ImpactTier::Average => write!(f, "Average"),
            ImpactTier::High => write!(f, "High"),
            ImpactTier::NotApplicable => write!(f, "N/A"),
        }
    }
}

/// The outcome of assessing one classification label. Immutable once created;
/// whoever receives it owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentRecord {
    pub display_name: String,
    pub manufacturing_co2: Decimal,
    pub recommendation: String,
    pub relative_impact: ImpactTier,
    pub category_name: String,
}
