use crate::assessment::record::AssessmentRecord;
use rust_decimal::Decimal;
use std::error::Error;

/// Presentation surface for scan results. Implementations decide the layout;
/// callers only supply content.
pub trait DeviceDisplay: Send + Sync {
    /// One-line progress message (connecting, loading, identifying).
    fn show_status(&mut self, message: &str) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// The assessment card for the most recent scan.
    fn show_assessment(
        &mut self,
        record: &AssessmentRecord,
    ) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// The session summary: accepted scan count, total footprint, and share
    /// of the average annual household footprint.
    fn show_summary(
        &mut self,
        count: usize,
        total_co2: Decimal,
        household_percentage: Decimal,
    ) -> Result<(), Box<dyn Error + Send + Sync>>;
}
