use crate::assessment::record::AssessmentRecord;
use crate::device_display::interface::DeviceDisplay;
use rust_decimal::Decimal;
use std::error::Error;

/// Records everything it is asked to show, for assertions in tests.
#[allow(dead_code)]
pub struct DeviceDisplayFake {
    pub statuses: Vec<String>,
    pub assessments: Vec<AssessmentRecord>,
    pub summaries: Vec<(usize, Decimal, Decimal)>,
}

impl DeviceDisplayFake {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self {
            statuses: Vec::new(),
            assessments: Vec::new(),
            summaries: Vec::new(),
        }
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn show_status(&mut self, message: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.statuses.push(message.to_string());
        Ok(())
    }

    fn show_assessment(
        &mut self,
        record: &AssessmentRecord,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.assessments.push(record.clone());
        Ok(())
    }

    fn show_summary(
        &mut self,
        count: usize,
        total_co2: Decimal,
        household_percentage: Decimal,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.summaries.push((count, total_co2, household_percentage));
        Ok(())
    }
}
