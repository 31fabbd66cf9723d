use crate::assessment::adapter::ClassificationAdapter;
use crate::carbon_scanner::core::{init, transition, Effect, Event, State};
use crate::carbon_scanner::render::Render;
use crate::config::Config;
use crate::device_camera::interface::DeviceCamera;
use crate::device_display::interface::DeviceDisplay;
use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::interface::Logger;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct CarbonScanner {
    pub config: Config,
    pub adapter: Arc<ClassificationAdapter>,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub device_camera: Arc<dyn DeviceCamera + Send + Sync>,
    pub image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    pub event_sender: Sender<Event>,
    pub event_receiver: Arc<Mutex<Receiver<Event>>>,
    pub model: Arc<Mutex<State>>,
    render: Render,
}

impl CarbonScanner {
    pub fn new(
        config: Config,
        adapter: ClassificationAdapter,
        logger: Arc<dyn Logger + Send + Sync>,
        device_camera: Arc<dyn DeviceCamera + Send + Sync>,
        device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    ) -> Self {
        let (event_sender, event_receiver) = channel();
        let (initial_state, _) = init();

        Self {
            render: Render::new(device_display, config.clone()),
            config,
            adapter: Arc::new(adapter),
            logger,
            device_camera,
            image_classifier,
            event_sender,
            event_receiver: Arc::new(Mutex::new(event_receiver)),
            model: Arc::new(Mutex::new(initial_state)),
        }
    }

    fn spawn_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let self_clone = self.clone();
            std::thread::spawn(move || self_clone.interpret_effect(effect));
        }
    }

    pub fn run(&self) -> Result<(), Arc<dyn std::error::Error + Send + Sync>> {
        let (initial_state, initial_effects) = init();

        let mut current_state = initial_state.clone();
        *self.model.lock().unwrap() = initial_state;

        self.spawn_effects(initial_effects);

        loop {
            match self.event_receiver.lock().unwrap().recv() {
                Ok(event) => {
                    let _ = self
                        .logger
                        .info(&format!("Processing event: {}", event.to_display_string()));

                    let (new_state, effects) =
                        transition(&self.adapter, current_state, event);
                    current_state = new_state.clone();
                    *self.model.lock().unwrap() = new_state;

                    if let Err(e) = self.render.render(&self.model.lock().unwrap()) {
                        let _ = self.logger.error(&format!("Render failed: {}", e));
                    }

                    self.spawn_effects(effects);
                }
                Err(e) => {
                    return Err(Arc::new(e));
                }
            }
        }
    }
}
