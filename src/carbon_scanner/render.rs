use crate::carbon_scanner::core::{CameraState, ClassifierState, DeviceStates, Phase, State};
use crate::config::Config;
use crate::device_display::interface::DeviceDisplay;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct Render {
    device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
    config: Config,
}

impl Render {
    pub fn new(device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>, config: Config) -> Self {
        Self {
            device_display,
            config,
        }
    }

    pub fn render(&self, state: &State) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut device_display = self.device_display.lock().unwrap();

        match &state.phase {
            Phase::DevicesInitializing { device_states } => {
                device_display.show_status(initializing_status(device_states))?;
            }
            Phase::Identifying => {
                device_display.show_status("Identifying...")?;
            }
            Phase::Idle => {
                match state.session.last_scanned() {
                    Some(record) => device_display.show_assessment(record)?,
                    None => device_display.show_status("Ready. Point the camera at an item.")?,
                }

                device_display.show_summary(
                    state.session.count(),
                    state.session.total_co2(),
                    state
                        .session
                        .household_percentage(self.config.household_baseline_kg),
                )?;
            }
        }

        Ok(())
    }
}

fn initializing_status(device_states: &DeviceStates) -> &'static str {
    match (&device_states.camera, &device_states.classifier) {
        (CameraState::Disconnected, _) => "Camera connecting...",
        (CameraState::Connected(_), _) => "Starting video stream...",
        (CameraState::Started, ClassifierState::Loading) => "Loading model...",
        (CameraState::Started, ClassifierState::Loaded) => "Ready",
    }
}
