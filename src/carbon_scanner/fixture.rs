use crate::assessment::adapter::ClassificationAdapter;
use crate::carbon_scanner::main::CarbonScanner;
use crate::carbon_scanner::render::Render;
use crate::config::Config;
use crate::device_camera::impl_fake::DeviceCameraFake;
use crate::device_display::impl_fake::DeviceDisplayFake;
use crate::image_classifier::impl_fake::ImageClassifierFake;
use crate::library::logger::impl_console::LoggerConsole;
use crate::reference::ademe;
use crate::reference::category_registry::CategoryRegistry;
use crate::reference::item_catalog::ItemCatalog;
use std::sync::{Arc, Mutex};

#[allow(dead_code)]
pub struct Fixture {
    pub config: Config,
    pub adapter: ClassificationAdapter,
    pub device_display: Arc<Mutex<DeviceDisplayFake>>,
    pub render: Render,
    pub scanner: CarbonScanner,
}

impl Fixture {
    pub fn new() -> Self {
        let config = Config::default();
        let logger = Arc::new(LoggerConsole::new(config.logger_timezone));
        let adapter = test_adapter();
        let device_camera = Arc::new(DeviceCameraFake::new(logger.clone()));
        let device_display = Arc::new(Mutex::new(DeviceDisplayFake::new()));
        let image_classifier = Arc::new(ImageClassifierFake::new(logger.clone()));

        let render = Render::new(device_display.clone(), config.clone());

        let scanner = CarbonScanner::new(
            config.clone(),
            adapter.clone(),
            logger,
            device_camera,
            device_display.clone(),
            image_classifier,
        );

        Self {
            config,
            adapter,
            device_display,
            render,
            scanner,
        }
    }
}

pub fn test_adapter() -> ClassificationAdapter {
    let registry = CategoryRegistry::new(ademe::categories()).unwrap();
    let catalog = ItemCatalog::new(ademe::items(), &registry).unwrap();
    ClassificationAdapter::new(registry, catalog)
}
