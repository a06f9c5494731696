/// Word (.docx) paragraph support.
///
/// This module builds the paragraph part of a WordprocessingML document
/// body: a `w:p` element with its `w:pPr` properties and inline content.
///
/// # Architecture
///
/// The module is organized around these key types:
/// - `Paragraph`: The paragraph node and its mutators
/// - `ParagraphOptions`: Declarative paragraph settings
/// - `ParagraphProperties`: The ordered `w:pPr` container
/// - `Run`, `Hyperlink`, `Bookmark`: Inline content
/// - `Media`, `Numbering`: Registries the paragraph refers to
///
/// # Example
///
/// ```rust
/// use litchi_para::ooxml::docx::writer::{Bookmark, Paragraph, ParagraphOptions, Run};
/// use litchi_para::ooxml::docx::format::AlignmentType;
///
/// let mut para = Paragraph::new(
///     ParagraphOptions::new()
///         .with_text("Results")
///         .with_alignment(AlignmentType::Center),
/// );
/// para.add_run(Run::text(" are in").with_italic(true))
///     .add_bookmark(Bookmark::new(0, "Results", "here"));
///
/// let xml = para.to_xml_string()?;
/// assert!(xml.starts_with("<w:p><w:pPr>"));
/// # Ok::<(), litchi_para::OoxmlError>(())
/// ```
pub mod format;
pub mod writer;

pub use format::{
    AlignmentType, BorderStyle, HeadingLevel, ImageFormat, LeaderType, LineRule, TabStopType,
    UnderlineStyle,
};
pub use writer::{Paragraph, ParagraphInput, ParagraphOptions};
