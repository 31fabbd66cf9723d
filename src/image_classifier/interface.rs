#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub confidence: f32,
}

/// Candidates come back ordered by descending confidence; the first entry is
/// the top-ranked label.
pub trait ImageClassifier: Send + Sync {
    fn load(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    fn classify(
        &self,
        frame: &[u8],
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>>;
}
