//! Office Open XML (OOXML) format implementation.
//!
//! This module provides the writer side of WordprocessingML paragraphs.
//! Package handling (ZIP parts, content types, relationship parts) is left
//! to the caller; the registries in `docx::writer` expose what a packager
//! needs (media bytes, relationship IDs, numbering definitions).
pub mod docx;
pub mod error;

// Re-export error types
pub use error::{OoxmlError, Result};
