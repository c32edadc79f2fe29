//! Intermediate model for extracted documents and generated artifacts.
//!
//! The parser turns the main document part into a [`Document`] of body
//! paragraphs; renderers wrap its plain text into an [`Artifact`].

mod artifact;
mod document;
mod paragraph;

pub use artifact::*;
pub use document::*;
pub use paragraph::*;
