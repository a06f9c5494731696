/// Bookmark writer support for DOCX paragraphs.
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

use super::run::Run;

/// Bookmark start marker (`w:bookmarkStart`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkStart {
    id: u32,
    name: String,
}

impl BookmarkStart {
    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        write!(
            xml,
            r#"<w:bookmarkStart w:id="{}" w:name="{}"/>"#,
            self.id,
            super::escape_xml(&self.name)
        )?;
        Ok(())
    }
}

/// Bookmark end marker (`w:bookmarkEnd`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookmarkEnd {
    id: u32,
}

impl BookmarkEnd {
    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        write!(xml, r#"<w:bookmarkEnd w:id="{}"/>"#, self.id)?;
        Ok(())
    }
}

/// A bookmark around a piece of text.
///
/// Bookmarks mark named locations in a document for quick navigation and
/// cross-referencing. They are written as three sibling nodes: the start
/// marker, the enclosed text run and the end marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Bookmark {
    pub start: BookmarkStart,
    pub text: Run,
    pub end: BookmarkEnd,
}

impl Bookmark {
    /// Create a new bookmark.
    ///
    /// # Arguments
    ///
    /// * `id` - Bookmark ID, shared by the start and end markers
    /// * `name` - Bookmark name (must not start with underscore for user bookmarks)
    /// * `text` - Text enclosed by the bookmark
    pub fn new(id: u32, name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            start: BookmarkStart {
                id,
                name: name.into(),
            },
            text: Run::text(text),
            end: BookmarkEnd { id },
        }
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.start.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.start.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bookmark_creation() {
        let bookmark = Bookmark::new(1, "Section1", "Introduction");
        assert_eq!(bookmark.id(), 1);
        assert_eq!(bookmark.end.id(), 1);
        assert_eq!(bookmark.name(), "Section1");
        assert_eq!(bookmark.text.get_text(), "Introduction");
    }

    #[test]
    fn test_bookmark_xml() {
        let bookmark = Bookmark::new(42, "My\"Mark", "");

        let mut start_xml = String::new();
        bookmark.start.to_xml(&mut start_xml).unwrap();
        assert_eq!(
            start_xml,
            r#"<w:bookmarkStart w:id="42" w:name="My&quot;Mark"/>"#
        );

        let mut end_xml = String::new();
        bookmark.end.to_xml(&mut end_xml).unwrap();
        assert_eq!(end_xml, r#"<w:bookmarkEnd w:id="42"/>"#);
    }
}
