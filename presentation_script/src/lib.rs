//! # Presentation Script
//!
//! The "Script Bible" crate - contains the beat types, the fixed presentation
//! parameters, and the presentation script format handed to the video renderer.
//! This crate is the single source of truth for the script shape and does not
//! contain any orchestration logic.

pub mod beats;
pub mod brief;
pub mod params;
pub mod script;

pub use beats::*;
pub use brief::*;
pub use params::*;
pub use script::*;
