use crate::assessment::record::AssessmentRecord;
use crate::device_display::interface::DeviceDisplay;
use rust_decimal::Decimal;
use std::error::Error;

const CARD_WIDTH: usize = 46;

pub struct DeviceDisplayConsole {}

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self {}
    }

    fn print_card(&self, title: &str, lines: &[String]) {
        println!("┌{}┐", "─".repeat(CARD_WIDTH));
        println!("│ {:<width$} │", title, width = CARD_WIDTH - 2);
        println!("├{}┤", "─".repeat(CARD_WIDTH));
        for line in lines {
            for chunk in wrap(line, CARD_WIDTH - 2) {
                println!("│ {:<width$} │", chunk, width = CARD_WIDTH - 2);
            }
        }
        println!("└{}┘", "─".repeat(CARD_WIDTH));
    }
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn show_status(&mut self, message: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        println!("[scanner] {}", message);
        Ok(())
    }

    fn show_assessment(
        &mut self,
        record: &AssessmentRecord,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let lines = vec![
            format!("Item: {}", record.display_name),
            format!("Category: {}", record.category_name),
            format!(
                "Manufacturing footprint: {} kg CO2e",
                record.manufacturing_co2
            ),
            format!("Relative impact: {}", record.relative_impact),
            record.recommendation.clone(),
        ];

        self.print_card("Impact Assessment", &lines);
        Ok(())
    }

    fn show_summary(
        &mut self,
        count: usize,
        total_co2: Decimal,
        household_percentage: Decimal,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let lines = vec![
            format!("Items scanned: {}", count),
            format!("Total manufacturing CO2e: {} kg", total_co2),
            format!(
                "{}% of average annual household footprint",
                household_percentage
            ),
        ];

        self.print_card("Session Summary", &lines);
        Ok(())
    }
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + word.len() + 1 > width {
            lines.push(line);
            line = String::new();
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }

    if !line.is_empty() {
        lines.push(line);
    }

    lines
}
