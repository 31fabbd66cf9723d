use crate::carbon_scanner::core::{Effect, Event};
use crate::carbon_scanner::main::CarbonScanner;
use std::time::Instant;

impl CarbonScanner {
    pub fn interpret_effect(&self, effect: Effect) {
        let _ = self
            .logger
            .info(&format!("Running effect: {}", effect.to_display_string()));

        match effect {
            Effect::SubscribeCamera => {
                let events = self.device_camera.events();
                loop {
                    match events.recv() {
                        Ok(event) => {
                            if self.event_sender.send(Event::CameraEvent(event)).is_err() {
                                break;
                            }
                        }
                        Err(_) => break,
                    }
                }
            }
            Effect::SubscribeTick => loop {
                std::thread::sleep(self.config.tick_rate);
                if self.event_sender.send(Event::Tick(Instant::now())).is_err() {
                    break;
                }
            },
            Effect::LoadClassifier => {
                let loaded = self.image_classifier.load();
                let _ = self.event_sender.send(Event::ClassifierLoadDone(loaded));
            }
            Effect::StartCamera => {
                let started = self.device_camera.start();
                let _ = self.event_sender.send(Event::CameraStartDone(started));
            }
            Effect::CaptureFrame => {
                let frame = self.device_camera.capture_frame();
                let _ = self.event_sender.send(Event::FrameCaptureDone(frame));
            }
            Effect::ClassifyFrame { frame } => {
                let classifications = self.image_classifier.classify(&frame);
                let _ = self
                    .event_sender
                    .send(Event::FrameClassifyDone(classifications));
            }
        }
    }
}
