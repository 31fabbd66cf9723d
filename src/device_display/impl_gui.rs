use crate::assessment::record::AssessmentRecord;
use crate::device_display::interface::DeviceDisplay;
use eframe::egui;
use rust_decimal::Decimal;
use std::error::Error;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Clone)]
struct ScannerWindow {
    lines: Arc<Mutex<Vec<String>>>,
}

impl eframe::App for ScannerWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let lines = self.lines.lock().unwrap();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical(|ui| {
                ui.add_space(10.0);
                for line in lines.iter() {
                    ui.label(egui::RichText::new(line).monospace().size(16.0));
                }
            });
        });

        ctx.request_repaint();
    }
}

#[allow(dead_code)]
pub struct DeviceDisplayGui {
    lines: Arc<Mutex<Vec<String>>>,
    started: bool,
}

impl DeviceDisplayGui {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self {
            lines: Arc::new(Mutex::new(Vec::new())),
            started: false,
        }
    }

    fn ensure_window(&mut self) {
        if self.started {
            return;
        }
        self.started = true;

        let lines = self.lines.clone();

        // The window blocks its own thread until closed
        thread::spawn(move || {
            let options = eframe::NativeOptions {
                viewport: egui::ViewportBuilder::default()
                    .with_inner_size([480.0, 360.0])
                    .with_resizable(false),
                ..Default::default()
            };

            let window = ScannerWindow { lines };

            let _ = eframe::run_native("Carbon Scanner", options, Box::new(|_cc| Box::new(window)));
        });
    }
}

impl DeviceDisplay for DeviceDisplayGui {
    fn show_status(&mut self, message: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.ensure_window();
        *self.lines.lock().unwrap() = vec![message.to_string()];
        Ok(())
    }

    fn show_assessment(
        &mut self,
        record: &AssessmentRecord,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.ensure_window();
        *self.lines.lock().unwrap() = vec![
            "Impact Assessment".to_string(),
            String::new(),
            format!("Item: {}", record.display_name),
            format!("Category: {}", record.category_name),
            format!(
                "Manufacturing footprint: {} kg CO2e",
                record.manufacturing_co2
            ),
            format!("Relative impact: {}", record.relative_impact),
            record.recommendation.clone(),
        ];
        Ok(())
    }

    // Appends below the assessment card; the renderer writes the card first.
    fn show_summary(
        &mut self,
        count: usize,
        total_co2: Decimal,
        household_percentage: Decimal,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.ensure_window();
        let mut lines = self.lines.lock().unwrap();
        lines.push(String::new());
        lines.push("Session Summary".to_string());
        lines.push(format!("Items scanned: {}", count));
        lines.push(format!("Total manufacturing CO2e: {} kg", total_co2));
        lines.push(format!(
            "{}% of average annual household footprint",
            household_percentage
        ));
        Ok(())
    }
}
