//! Litchi paragraph builder - a document-object-model for WordprocessingML paragraphs
//!
//! This library builds the `w:p` element of a Word (.docx) document body from
//! a declarative options structure or incremental mutator calls, and writes
//! the resulting node tree as WordprocessingML.
//!
//! # Features
//!
//! - **Three construction shapes**: plain text, a single picture run, or full options
//! - **Deterministic property order**: `w:pPr` leaves are written in a fixed order
//! - **Properties first**: content mutators never displace the properties container
//! - **YAML configuration**: paragraph options deserialize with serde
//!
//! # Example - Building a list item
//!
//! ```rust
//! use litchi_para::{Paragraph, ParagraphOptions};
//!
//! let mut item = Paragraph::new(ParagraphOptions::new().with_text("Milk").with_bullet(0));
//! item.reference_footnote(1);
//!
//! assert_eq!(item.properties().len(), 2);
//! assert_eq!(item.child_count(), 3);
//! ```
//!
//! # Example - Embedding an image
//!
//! ```rust
//! use litchi_para::{Media, Paragraph};
//!
//! # fn main() -> Result<(), litchi_para::OoxmlError> {
//! let png = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0x0D];
//! let mut media = Media::new();
//! let image = media.add_image(png.to_vec(), None, None)?;
//!
//! let mut para = Paragraph::new("Figure ");
//! para.add_sequential_identifier("Figure");
//! if let Some(drawing) = para.add_image(&image).drawing_mut() {
//!     drawing.set_description("Chart");
//! }
//!
//! let xml = para.to_xml_string()?;
//! assert!(xml.contains("SEQ Figure"));
//! # Ok(())
//! # }
//! ```

/// OOXML (Office Open XML) writer support
///
/// This module provides the paragraph writer for Word documents (.docx).
pub mod ooxml;

// Re-export commonly used types for convenience
pub use ooxml::docx::format::{AlignmentType, HeadingLevel, LeaderType, LineRule};
pub use ooxml::docx::writer::{
    Bookmark, BorderOptions, Hyperlink, Image, IndentOptions, Media, Num, NumberingOptions,
    Numbering, Paragraph, ParagraphChild, ParagraphContent, ParagraphInput, ParagraphNode,
    ParagraphOptions, ParagraphProperties, ParagraphProperty, PictureRun, Run, SpacingOptions,
    TabStopOptions,
};
pub use ooxml::error::{OoxmlError, Result};
