//! Shared formatting types for DOCX paragraphs and runs.
use serde::{Deserialize, Serialize};

/// Paragraph alignment (`w:jc`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AlignmentType {
    Start,
    End,
    Center,
    Both,
    Distribute,
    Left,
    Right,
}

impl AlignmentType {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Center => "center",
            Self::Both => "both",
            Self::Distribute => "distribute",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Built-in heading styles.
///
/// A heading is written as a paragraph style reference, so the style must
/// exist in the document's style part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeadingLevel {
    Heading1,
    Heading2,
    Heading3,
    Heading4,
    Heading5,
    Heading6,
    Title,
}

impl HeadingLevel {
    /// Style ID referenced by `w:pStyle`.
    pub fn style_id(&self) -> &'static str {
        match self {
            Self::Heading1 => "Heading1",
            Self::Heading2 => "Heading2",
            Self::Heading3 => "Heading3",
            Self::Heading4 => "Heading4",
            Self::Heading5 => "Heading5",
            Self::Heading6 => "Heading6",
            Self::Title => "Title",
        }
    }
}

/// Tab leader characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LeaderType {
    Dot,
    Hyphen,
    MiddleDot,
    None,
    Underscore,
}

impl LeaderType {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Dot => "dot",
            Self::Hyphen => "hyphen",
            Self::MiddleDot => "middleDot",
            Self::None => "none",
            Self::Underscore => "underscore",
        }
    }
}

/// Tab stop alignment kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TabStopType {
    Left,
    Right,
    Center,
}

impl TabStopType {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
        }
    }
}

/// Border line styles for paragraph borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BorderStyle {
    Nil,
    None,
    Single,
    Thick,
    Double,
    Dotted,
    Dashed,
    DotDash,
    DotDotDash,
    Triple,
    Wave,
}

impl BorderStyle {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::None => "none",
            Self::Single => "single",
            Self::Thick => "thick",
            Self::Double => "double",
            Self::Dotted => "dotted",
            Self::Dashed => "dashed",
            Self::DotDash => "dotDash",
            Self::DotDotDash => "dotDotDash",
            Self::Triple => "triple",
            Self::Wave => "wave",
        }
    }
}

/// Line spacing rule (`w:lineRule`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineRule {
    /// `w:line` is in 240ths of a line
    Auto,
    /// `w:line` is an exact height in twips
    Exact,
    /// `w:line` is a minimum height in twips
    AtLeast,
}

impl LineRule {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Exact => "exact",
            Self::AtLeast => "atLeast",
        }
    }
}

/// Underline styles for text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnderlineStyle {
    Single,
    Double,
    Thick,
    Dotted,
    Dashed,
    DotDash,
    DotDotDash,
    Wave,
}

impl UnderlineStyle {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
            Self::Thick => "thick",
            Self::Dotted => "dotted",
            Self::Dashed => "dash",
            Self::DotDash => "dotDash",
            Self::DotDotDash => "dotDotDash",
            Self::Wave => "wave",
        }
    }
}

/// Image format detection and properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Bmp,
    Tiff,
    Emf,
    Wmf,
}

impl ImageFormat {
    /// Detect image format from byte signature.
    pub fn detect_from_bytes(data: &[u8]) -> Option<Self> {
        if data.len() < 8 {
            return None;
        }

        // PNG signature
        if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
            return Some(Self::Png);
        }

        // JPEG signature
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some(Self::Jpeg);
        }

        if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
            return Some(Self::Gif);
        }

        if data.starts_with(b"BM") {
            return Some(Self::Bmp);
        }

        // TIFF, little-endian and big-endian
        if data.starts_with(&[0x49, 0x49, 0x2A, 0x00])
            || data.starts_with(&[0x4D, 0x4D, 0x00, 0x2A])
        {
            return Some(Self::Tiff);
        }

        // EMF carries " EMF" at offset 40
        if data.len() >= 44 && data[40..44] == [0x20, 0x45, 0x4D, 0x46] {
            return Some(Self::Emf);
        }

        // Placeable WMF
        if data.starts_with(&[0xD7, 0xCD, 0xC6, 0x9A]) {
            return Some(Self::Wmf);
        }

        None
    }

    /// File extension used for the media part.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Gif => "gif",
            Self::Bmp => "bmp",
            Self::Tiff => "tiff",
            Self::Emf => "emf",
            Self::Wmf => "wmf",
        }
    }

    /// MIME content type of the media part.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
            Self::Bmp => "image/bmp",
            Self::Tiff => "image/tiff",
            Self::Emf => "image/x-emf",
            Self::Wmf => "image/x-wmf",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_png() {
        let png = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00];
        assert_eq!(ImageFormat::detect_from_bytes(&png), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::Png.extension(), "png");
    }

    #[test]
    fn test_detect_rejects_short_or_unknown() {
        assert_eq!(ImageFormat::detect_from_bytes(b"GIF"), None);
        assert_eq!(ImageFormat::detect_from_bytes(b"not an image"), None);
    }

    #[test]
    fn test_heading_style_ids() {
        assert_eq!(HeadingLevel::Heading3.style_id(), "Heading3");
        assert_eq!(HeadingLevel::Title.style_id(), "Title");
    }
}
