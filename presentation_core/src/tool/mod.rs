//! Host-facing entry point.
//!
//! The host supplies a [`ToolContext`] with whichever capabilities it has
//! and a validated [`PresentationBrief`]; [`show_presentation`] always
//! returns a [`PresentationResult`].

mod manifest;

pub use manifest::*;

use async_trait::async_trait;
use presentation_script::PresentationBrief;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::assembler::{PresentationResult, ScriptAssembler};
use crate::enricher::enrich_beats;
use crate::image_generation::{ImageGenerator, ImageOrchestrator};

/// Failure loading the reference image.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReferenceImageError {
    #[error("Reference image unavailable: {0}")]
    Unavailable(String),
}

/// Supplies the blank image that conveys the target aspect ratio.
#[async_trait]
pub trait ReferenceImageSource: Send + Sync {
    /// Load the blank image, string-encoded.
    async fn load_blank_image(&self) -> Result<String, ReferenceImageError>;
}

/// Capabilities the host makes available. Either may be absent.
#[derive(Clone, Default)]
pub struct ToolContext {
    pub image_generator: Option<Arc<dyn ImageGenerator>>,
    pub reference_images: Option<Arc<dyn ReferenceImageSource>>,
}

impl ToolContext {
    /// A context with no capabilities.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image_generator(mut self, generator: Arc<dyn ImageGenerator>) -> Self {
        self.image_generator = Some(generator);
        self
    }

    pub fn with_reference_images(mut self, source: Arc<dyn ReferenceImageSource>) -> Self {
        self.reference_images = Some(source);
        self
    }

    /// Reference images for aspect ratio guidance.
    ///
    /// Empty when the source is missing, fails, or returns an empty image.
    pub async fn load_reference_images(&self) -> Vec<String> {
        let Some(source) = &self.reference_images else {
            return Vec::new();
        };
        match source.load_blank_image().await {
            Ok(image) if !image.is_empty() => vec![image],
            Ok(_) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Proceeding without reference image");
                Vec::new()
            }
        }
    }
}

impl std::fmt::Debug for ToolContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolContext")
            .field("image_generator", &self.image_generator.is_some())
            .field("reference_images", &self.reference_images.is_some())
            .finish()
    }
}

/// Runs a brief through enrichment, image generation, and assembly.
#[derive(Default)]
pub struct Presenter {
    orchestrator: ImageOrchestrator,
    assembler: ScriptAssembler,
}

impl Presenter {
    pub fn new(orchestrator: ImageOrchestrator, assembler: ScriptAssembler) -> Self {
        Self {
            orchestrator,
            assembler,
        }
    }

    /// A presenter with the standard prompt template and presentation parameters.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Process a brief. Never fails; missing images only shrink the image map.
    pub async fn present(&self, ctx: &ToolContext, brief: &PresentationBrief) -> PresentationResult {
        debug!(title = %brief.title, beats = brief.beats.len(), "Processing presentation brief");

        let references = ctx.load_reference_images().await;
        let beats = enrich_beats(&brief.beats);

        let images = self
            .orchestrator
            .generate_images(&beats, &references, ctx.image_generator.as_deref())
            .await;

        let script = self.assembler.assemble(&brief.title, &brief.lang, beats);
        let result = self.assembler.package(script, images);

        info!(
            title = %result.title,
            beats = result.script().beat_count(),
            images = result.images().len(),
            "Presentation ready"
        );
        result
    }
}

/// Process a brief with the standard configuration.
pub async fn show_presentation(ctx: &ToolContext, brief: &PresentationBrief) -> PresentationResult {
    Presenter::with_defaults().present(ctx, brief).await
}
