use crate::assessment::adapter::ClassificationAdapter;
use crate::carbon_scanner::main::CarbonScanner;
use crate::config::Config;
use crate::device_camera::impl_fake::DeviceCameraFake;
use crate::device_display::impl_console::DeviceDisplayConsole;
use crate::image_classifier::impl_fake::ImageClassifierFake;
use crate::library::logger::impl_console::LoggerConsole;
use crate::reference::ademe;
use crate::reference::category_registry::CategoryRegistry;
use crate::reference::item_catalog::ItemCatalog;
use std::sync::{Arc, Mutex};

mod assessment;
mod carbon_scanner;
mod config;
mod device_camera;
mod device_display;
mod image_classifier;
mod library;
mod reference;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();

    let logger = Arc::new(LoggerConsole::new(config.logger_timezone));

    let category_registry = CategoryRegistry::new(ademe::categories())?;
    let item_catalog = ItemCatalog::new(ademe::items(), &category_registry)?;
    let adapter = ClassificationAdapter::new(category_registry, item_catalog);

    let device_camera = Arc::new(DeviceCameraFake::new(logger.clone()));
    let device_display = Arc::new(Mutex::new(DeviceDisplayConsole::new()));
    let image_classifier = Arc::new(ImageClassifierFake::new(logger.clone()));

    let scanner = CarbonScanner::new(
        config,
        adapter,
        logger,
        device_camera,
        device_display,
        image_classifier,
    );

    scanner.run().map_err(|e| e.to_string())?;

    Ok(())
}
