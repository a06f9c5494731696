//! Paragraph writer components for DOCX.
//!
//! This module builds the node tree of a WordprocessingML paragraph: the
//! `w:pPr` properties container followed by runs, pictures, hyperlinks and
//! bookmark markers.

pub mod bookmark;
pub mod field;
pub mod formatting;
pub mod hyperlink;
pub mod image;
pub mod numbering;
pub mod options;
pub mod paragraph;
pub mod properties;
pub mod run;


// Re-export paragraph types
pub use paragraph::{
    LIST_PARAGRAPH_STYLE, Paragraph, ParagraphChild, ParagraphContent, ParagraphNode,
};

// Re-export option types
pub use options::{
    BulletOptions, MaxRightTabStop, NumberingOptions, ParagraphInput, ParagraphOptions,
    TabStopOptions, TabStopPosition,
};

// Re-export property types
pub use properties::{ParagraphProperties, ParagraphProperty};

// Re-export formatting leaves
pub use formatting::{
    BorderOptions, BorderSide, IndentOptions, MAX_RIGHT_TAB_POSITION, NumberProperties,
    SpacingOptions, TabStop,
};

// Re-export run types
pub use field::FieldChar;
pub use run::{PictureRun, Run, RunContent};

// Re-export link and bookmark types
pub use bookmark::{Bookmark, BookmarkEnd, BookmarkStart};
pub use hyperlink::{Hyperlink, HyperlinkTarget};

// Re-export collaborators
pub use image::{Drawing, Image, Media, MediaEntry};
pub use numbering::{BULLET_NUM_ID, Num, Numbering};

/// Escape XML special characters.
pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
