//! Image Generation Orchestrator - one independent image request per beat.
//!
//! The orchestrator works as follows:
//! 1. **Derive**: Pick the beat's explicit prompt or synthesize one from its text
//! 2. **Fan out**: Issue every request without waiting on any single one
//! 3. **Barrier**: Wait until every request has settled
//! 4. **Collect**: Keep the beats that came back with image data
//!
//! Failures are logged and dropped. The orchestrator itself never fails.

mod prompt;

pub use prompt::*;

use async_trait::async_trait;
use futures::future::join_all;
use presentation_script::{Beat, BeatId, ImageMap};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Failure raised by an image backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Prompt rejected: {0}")]
    Rejected(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

/// A backend's answer to one generation request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageResponse {
    pub success: bool,
    /// String-encoded image payload.
    pub image_data: Option<String>,
}

impl ImageResponse {
    /// A successful response carrying image data.
    pub fn success(image_data: impl Into<String>) -> Self {
        Self {
            success: true,
            image_data: Some(image_data.into()),
        }
    }

    /// An unsuccessful response.
    pub fn failure() -> Self {
        Self::default()
    }

    /// The image payload, if this response counts as a generated image.
    ///
    /// A response flagged successful but lacking data is not one.
    pub fn into_image_data(self) -> Option<String> {
        if !self.success {
            return None;
        }
        self.image_data.filter(|data| !data.is_empty())
    }
}

/// An image generation backend.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generate one image.
    ///
    /// `references` carries images that convey the target aspect ratio.
    async fn generate(
        &self,
        prompt: &str,
        references: &[String],
    ) -> Result<ImageResponse, GenerationError>;
}

/// Fans out image requests for a batch of beats.
pub struct ImageOrchestrator {
    config: OrchestratorConfig,
}

impl ImageOrchestrator {
    /// Create an orchestrator with the given configuration.
    pub fn new(config: OrchestratorConfig) -> Self {
        Self { config }
    }

    /// Create an orchestrator with the default prompt template.
    pub fn with_defaults() -> Self {
        Self::new(OrchestratorConfig::default())
    }

    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    /// Generate an image for every beat and collect the successes.
    ///
    /// With no generator the map is empty. Completes only once every request
    /// has settled; there is no timeout, cancellation, or retry.
    pub async fn generate_images(
        &self,
        beats: &[Beat],
        references: &[String],
        generator: Option<&dyn ImageGenerator>,
    ) -> ImageMap {
        let Some(generator) = generator else {
            debug!(beats = beats.len(), "No image generator available, skipping images");
            return ImageMap::new();
        };

        let requests = beats.iter().map(|beat| {
            let prompt = self.config.prompt_for(beat);
            async move { (beat.id, Self::request(generator, beat.id, &prompt, references).await) }
        });

        let images: ImageMap = join_all(requests)
            .await
            .into_iter()
            .filter_map(|(id, image_data)| image_data.map(|data| (id, data)))
            .collect();

        info!(
            requested = beats.len(),
            generated = images.len(),
            "Image generation settled"
        );
        images
    }

    /// Issue one request; any failure is logged and folded into `None`.
    async fn request(
        generator: &dyn ImageGenerator,
        beat_id: BeatId,
        prompt: &str,
        references: &[String],
    ) -> Option<String> {
        match generator.generate(prompt, references).await {
            Ok(response) => {
                let success = response.success;
                match response.into_image_data() {
                    Some(data) => {
                        debug!(beat_id = %beat_id, bytes = data.len(), "Image generated");
                        Some(data)
                    }
                    None => {
                        warn!(beat_id = %beat_id, success, "Image backend returned no image data");
                        None
                    }
                }
            }
            Err(e) => {
                warn!(beat_id = %beat_id, error = %e, "Failed to generate image for beat");
                None
            }
        }
    }
}

impl Default for ImageOrchestrator {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ============================================================================
// Mock Generator for Testing
// ============================================================================

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::{HashMap, HashSet};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tokio::sync::Barrier;

    /// Scripted backend. Succeeds with `image:<prompt>` unless told otherwise.
    #[derive(Default)]
    pub struct MockGenerator {
        fail_all: bool,
        fail_on: HashSet<String>,
        reject_on: HashSet<String>,
        no_data_on: HashSet<String>,
        delays: HashMap<String, Duration>,
        barrier: Option<Arc<Barrier>>,
        calls: Mutex<Vec<(String, Vec<String>)>>,
    }

    impl MockGenerator {
        pub fn succeeding() -> Self {
            Self::default()
        }

        pub fn failing() -> Self {
            Self {
                fail_all: true,
                ..Self::default()
            }
        }

        /// Raise an error for this prompt.
        pub fn fail_on(mut self, prompt: &str) -> Self {
            self.fail_on.insert(prompt.to_string());
            self
        }

        /// Answer this prompt with an unsuccessful response.
        pub fn reject_on(mut self, prompt: &str) -> Self {
            self.reject_on.insert(prompt.to_string());
            self
        }

        /// Answer this prompt with success but no data.
        pub fn no_data_on(mut self, prompt: &str) -> Self {
            self.no_data_on.insert(prompt.to_string());
            self
        }

        pub fn delay_on(mut self, prompt: &str, delay: Duration) -> Self {
            self.delays.insert(prompt.to_string(), delay);
            self
        }

        /// Every request waits on the barrier before answering.
        pub fn with_barrier(mut self, barrier: Arc<Barrier>) -> Self {
            self.barrier = Some(barrier);
            self
        }

        pub fn calls(&self) -> Vec<(String, Vec<String>)> {
            self.calls.lock().unwrap().clone()
        }

        pub fn image_for(prompt: &str) -> String {
            format!("image:{}", prompt)
        }
    }

    #[async_trait]
    impl ImageGenerator for MockGenerator {
        async fn generate(
            &self,
            prompt: &str,
            references: &[String],
        ) -> Result<ImageResponse, GenerationError> {
            self.calls
                .lock()
                .unwrap()
                .push((prompt.to_string(), references.to_vec()));

            if let Some(barrier) = &self.barrier {
                barrier.wait().await;
            }
            if let Some(delay) = self.delays.get(prompt) {
                tokio::time::sleep(*delay).await;
            }

            if self.fail_all || self.fail_on.contains(prompt) {
                return Err(GenerationError::Backend("mock failure".to_string()));
            }
            if self.reject_on.contains(prompt) {
                return Ok(ImageResponse::failure());
            }
            if self.no_data_on.contains(prompt) {
                return Ok(ImageResponse {
                    success: true,
                    image_data: None,
                });
            }
            Ok(ImageResponse::success(Self::image_for(prompt)))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
