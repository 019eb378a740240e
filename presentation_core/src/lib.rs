//! # Presentation Core (The Presenter)
//!
//! Turns a short presentation brief into a fully parameterized script plus
//! one generated image per beat. This crate interfaces with
//! `presentation_script` for the data model and delegates image generation to
//! an injected backend.
//!
//! ## Core Components
//!
//! - **enricher**: Assigns identifiers and the presenter label to each beat
//! - **image_generation**: Fans out one image request per beat and collects the successes
//! - **assembler**: Stamps the fixed parameters onto the beats and packages the result
//! - **tool**: Host-facing context, entry point, and tool manifest
//!
//! ## Design Philosophy
//!
//! - **Never Fails**: A brief always yields a result; in the worst case a script with no images
//! - **Isolated Beats**: One beat's image failure never affects its siblings
//! - **Injected Backends**: No image provider is wired in; hosts supply one or none

pub mod assembler;
pub mod enricher;
pub mod image_generation;
pub mod tool;

pub use assembler::*;
pub use enricher::*;
pub use image_generation::*;
pub use tool::*;
