use crate::device_camera::interface::{DeviceCamera, DeviceCameraEvent};
use crate::library::logger::interface::Logger;
use std::sync::Arc;

pub struct DeviceCameraFake {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceCameraFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("camera").with_namespace("fake"),
        }
    }
}

impl DeviceCamera for DeviceCameraFake {
    fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Starting video stream...")?;
        std::thread::sleep(std::time::Duration::from_millis(500));
        self.logger.info("Video stream started")?;
        Ok(())
    }

    fn stop(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Stopping video stream...")?;
        Ok(())
    }

    fn capture_frame(&self) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Capturing frame...")?;
        std::thread::sleep(std::time::Duration::from_millis(200));
        // 224x224 RGB, the input size the classifier expects
        Ok(vec![0; 224 * 224 * 3])
    }

    fn events(&self) -> std::sync::mpsc::Receiver<DeviceCameraEvent> {
        let (sender, receiver) = std::sync::mpsc::channel();
        std::thread::spawn(move || {
            let _ = sender.send(DeviceCameraEvent::Connected);
        });
        receiver
    }
}
