use crate::assessment::record::AssessmentRecord;
use rust_decimal::{Decimal, RoundingStrategy};

/// Running state for one scanning session. Lives in memory only and dies
/// with the process. Append-only: entries are never edited or removed.
#[derive(Debug, Clone, Default)]
pub struct Session {
    scanned_items: Vec<AssessmentRecord>,
    last_scanned: Option<AssessmentRecord>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unknown items (zero footprint) still become the last scanned record so
    /// the display can show the no-data message, but they never enter the
    /// running totals.
    pub fn record_scan(&mut self, record: AssessmentRecord) {
        if record.manufacturing_co2 > Decimal::ZERO {
            self.scanned_items.push(record.clone());
        }
        self.last_scanned = Some(record);
    }

    pub fn last_scanned(&self) -> Option<&AssessmentRecord> {
        self.last_scanned.as_ref()
    }

    #[allow(dead_code)]
    pub fn scanned_items(&self) -> &[AssessmentRecord] {
        &self.scanned_items
    }

    pub fn count(&self) -> usize {
        self.scanned_items.len()
    }

    pub fn total_co2(&self) -> Decimal {
        self.scanned_items
            .iter()
            .map(|item| item.manufacturing_co2)
            .sum()
    }

    /// Share of the assumed average annual household manufacturing footprint,
    /// fixed at two decimal places.
    pub fn household_percentage(&self, household_baseline_kg: Decimal) -> Decimal {
        (self.total_co2() / household_baseline_kg * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
}
