use crate::image_classifier::interface::{Classification, ImageClassifier};
use crate::library::logger::interface::Logger;
use rand::distr::{Distribution, Uniform};
use std::sync::Arc;

pub struct ImageClassifierFake {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("classifier").with_namespace("fake"),
        }
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn load(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Loading model...")?;
        std::thread::sleep(std::time::Duration::from_millis(500));
        self.logger.info("Model loaded")?;
        Ok(())
    }

    fn classify(
        &self,
        _frame: &[u8],
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>> {
        // Labels in the shape MobileNet produces: comma-joined synonym lists.
        let labels = [
            "laptop, notebook computer",
            "smartphone, mobile phone",
            "television, tv",
            "water bottle",
            "t-shirt, tee shirt",
            "can, tin can",
            "chair, furniture",
            "coffee mug",
            "running shoe",
        ];

        let mut rng = rand::rng();

        let label_dist = Uniform::new(0, labels.len())?;
        let confidence_dist = Uniform::new(0.5f32, 1.0f32)?;

        let classification = Classification {
            label: labels[label_dist.sample(&mut rng)].to_string(),
            confidence: confidence_dist.sample(&mut rng),
        };

        self.logger.info(&format!(
            "Classified as {} ({:.2})",
            classification.label, classification.confidence
        ))?;

        Ok(vec![classification])
    }
}
