// ABOUTME: Pluggable clothing-recognition provider
// Ships a simulated recogniser; a real classifier can slot in behind the trait

use crate::media::ImageRef;
use async_trait::async_trait;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Clothing category assigned by recognition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClothingCategory {
    Top,
    Bottom,
    Dress,
    Outerwear,
    Footwear,
    Accessory,
}

impl ClothingCategory {
    /// All categories the recogniser can assign.
    pub fn all() -> &'static [ClothingCategory] {
        &[
            Self::Top,
            Self::Bottom,
            Self::Dress,
            Self::Outerwear,
            Self::Footwear,
            Self::Accessory,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Top => "Top",
            Self::Bottom => "Bottom",
            Self::Dress => "Dress",
            Self::Outerwear => "Outerwear",
            Self::Footwear => "Footwear",
            Self::Accessory => "Accessory",
        }
    }
}

/// Outcome of a recognition attempt.
///
/// Failure is a branch value the UI switches on, not an error: the provider
/// ran fine, it just could not categorise the garment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognitionOutcome {
    Success(ClothingCategory),
    Failure,
}

impl RecognitionOutcome {
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn category(self) -> Option<ClothingCategory> {
        match self {
            Self::Success(category) => Some(category),
            Self::Failure => None,
        }
    }
}

/// Recognition capability the create-outfit flow depends on.
///
/// Swapping in a real classifier must not touch any flow logic, so the
/// provider is object-safe and async (a real one would do network or
/// on-device inference).
#[async_trait]
pub trait RecognitionProvider: Send + Sync {
    async fn recognize(&self, image: &ImageRef) -> RecognitionOutcome;
}

/// Simulated recogniser: sleeps out a processing delay, then draws the
/// outcome with the configured success rate and a uniformly random category.
pub struct SimulatedRecognizer {
    delay: Duration,
    success_rate: f64,
}

impl SimulatedRecognizer {
    pub fn new(delay: Duration, success_rate: f64) -> Self {
        Self {
            delay,
            success_rate: success_rate.clamp(0.0, 1.0),
        }
    }
}

#[async_trait]
impl RecognitionProvider for SimulatedRecognizer {
    async fn recognize(&self, image: &ImageRef) -> RecognitionOutcome {
        tokio::time::sleep(self.delay).await;

        let mut rng = rand::thread_rng();
        let outcome = if rng.gen_bool(self.success_rate) {
            let categories = ClothingCategory::all();
            RecognitionOutcome::Success(categories[rng.gen_range(0..categories.len())])
        } else {
            RecognitionOutcome::Failure
        };

        debug!(image = %image, ?outcome, "recognition finished");
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_certain_success_assigns_category() {
        let recognizer = SimulatedRecognizer::new(Duration::from_millis(1), 1.0);
        let outcome = recognizer.recognize(&ImageRef::new("poshakh://shirt")).await;
        assert!(outcome.is_success());
        assert!(outcome.category().is_some());
    }

    #[tokio::test]
    async fn test_certain_failure_has_no_category() {
        let recognizer = SimulatedRecognizer::new(Duration::from_millis(1), 0.0);
        let outcome = recognizer.recognize(&ImageRef::new("poshakh://shirt")).await;
        assert_eq!(outcome, RecognitionOutcome::Failure);
        assert!(outcome.category().is_none());
    }

    #[test]
    fn test_success_rate_is_clamped() {
        // Out-of-range config values must not panic gen_bool.
        let _ = SimulatedRecognizer::new(Duration::ZERO, 1.7);
        let _ = SimulatedRecognizer::new(Duration::ZERO, -0.3);
    }

    #[test]
    fn test_category_labels_are_distinct() {
        let labels: Vec<&str> = ClothingCategory::all().iter().map(|c| c.label()).collect();
        let mut deduped = labels.clone();
        deduped.dedup();
        assert_eq!(labels.len(), deduped.len());
    }
}
