/// Run types and implementation for DOCX documents.
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

// Import shared format types
pub use super::super::format::UnderlineStyle;
use super::field::FieldChar;
use super::image::Drawing;

/// Character style applied to footnote reference marks.
pub const FOOTNOTE_REFERENCE_STYLE: &str = "FootnoteReference";

/// Run content item.
#[derive(Debug, Clone, PartialEq)]
pub enum RunContent {
    /// Plain text
    Text(String),
    /// Tab character
    Tab,
    /// Line break
    Break,
    /// Page break
    PageBreak,
    /// Footnote reference
    FootnoteReference(u32),
    /// Complex field character
    Field(FieldChar),
    /// Inline drawing
    Drawing(Drawing),
}

/// A run.
///
/// Runs contain inline content and character formatting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Run {
    /// Run content, in output order
    pub(crate) children: Vec<RunContent>,
    /// Run properties
    pub(crate) properties: RunProperties,
}

impl Run {
    /// Element name of a run.
    pub const TAG: &'static str = "w:r";

    /// Create an empty run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a run holding text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            children: vec![RunContent::Text(text.into())],
            properties: RunProperties::default(),
        }
    }

    /// Create a run holding a page break.
    pub fn page_break() -> Self {
        Self {
            children: vec![RunContent::PageBreak],
            properties: RunProperties::default(),
        }
    }

    /// Create a run referencing the footnote with the given ID.
    pub fn footnote_reference(id: u32) -> Self {
        Self {
            children: vec![RunContent::FootnoteReference(id)],
            properties: RunProperties {
                style: Some(FOOTNOTE_REFERENCE_STYLE.to_string()),
                ..RunProperties::default()
            },
        }
    }

    /// Create a run holding an auto-numbering `SEQ` field.
    ///
    /// The identifier names the sequence ("Figure", "Table", ...); every
    /// field with the same identifier counts up independently of others.
    pub fn sequential_identifier(identifier: &str) -> Self {
        let instruction = format!("SEQ {}", identifier);
        Self {
            children: FieldChar::complete(instruction)
                .into_iter()
                .map(RunContent::Field)
                .collect(),
            properties: RunProperties::default(),
        }
    }

    /// Append a content item.
    pub fn push(&mut self, content: RunContent) -> &mut Self {
        self.children.push(content);
        self
    }

    /// Content items in output order.
    #[inline]
    pub fn children(&self) -> &[RunContent] {
        &self.children
    }

    /// Concatenated text of all text items.
    pub fn get_text(&self) -> String {
        let mut text = String::new();
        for child in &self.children {
            match child {
                RunContent::Text(s) => text.push_str(s),
                RunContent::Tab => text.push('\t'),
                RunContent::Break => text.push('\n'),
                _ => {},
            }
        }
        text
    }

    /// Replace the content with a single text item.
    pub fn set_text(&mut self, text: &str) {
        self.children.clear();
        self.children.push(RunContent::Text(text.to_string()));
    }

    /// Make the text bold.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.properties.bold = Some(bold);
        self
    }

    /// Make the text italic.
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.properties.italic = Some(italic);
        self
    }

    /// Set underline style.
    pub fn with_underline(mut self, style: UnderlineStyle) -> Self {
        self.properties.underline = Some(style);
        self
    }

    /// Set font size in half-points (e.g., 24 = 12pt).
    pub fn with_font_size(mut self, size: u32) -> Self {
        self.properties.font_size = Some(size);
        self
    }

    /// Set font name.
    pub fn with_font_name(mut self, name: impl Into<String>) -> Self {
        self.properties.font_name = Some(name.into());
        self
    }

    /// Set text color using hex RGB (e.g., "FF0000" for red).
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.properties.color = Some(color.into());
        self
    }

    /// Set the character style.
    pub fn with_style(mut self, style_id: impl Into<String>) -> Self {
        self.properties.style = Some(style_id.into());
        self
    }

    /// Character style ID, if any.
    pub fn style(&self) -> Option<&str> {
        self.properties.style.as_deref()
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:r>");
        self.properties.to_xml(xml)?;

        for child in &self.children {
            match child {
                RunContent::Text(text) => {
                    write!(
                        xml,
                        r#"<w:t xml:space="preserve">{}</w:t>"#,
                        super::escape_xml(text)
                    )?;
                },
                RunContent::Tab => xml.push_str("<w:tab/>"),
                RunContent::Break => xml.push_str("<w:br/>"),
                RunContent::PageBreak => xml.push_str(r#"<w:br w:type="page"/>"#),
                RunContent::FootnoteReference(id) => {
                    write!(xml, r#"<w:footnoteReference w:id="{}"/>"#, id)?;
                },
                RunContent::Field(field) => field.to_xml(xml)?,
                RunContent::Drawing(drawing) => drawing.to_xml(xml)?,
            }
        }

        xml.push_str("</w:r>");
        Ok(())
    }
}

/// Run properties (`w:rPr`).
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct RunProperties {
    pub(crate) style: Option<String>,
    pub(crate) bold: Option<bool>,
    pub(crate) italic: Option<bool>,
    pub(crate) underline: Option<UnderlineStyle>,
    pub(crate) font_size: Option<u32>,
    pub(crate) font_name: Option<String>,
    pub(crate) color: Option<String>,
}

impl RunProperties {
    pub(crate) fn has_properties(&self) -> bool {
        self.style.is_some()
            || self.bold.is_some()
            || self.italic.is_some()
            || self.underline.is_some()
            || self.font_size.is_some()
            || self.font_name.is_some()
            || self.color.is_some()
    }

    fn to_xml(&self, xml: &mut String) -> Result<()> {
        if !self.has_properties() {
            return Ok(());
        }

        xml.push_str("<w:rPr>");

        if let Some(ref style) = self.style {
            write!(xml, r#"<w:rStyle w:val="{}"/>"#, super::escape_xml(style))?;
        }

        if let Some(ref font_name) = self.font_name {
            let font_name = super::escape_xml(font_name);
            write!(
                xml,
                r#"<w:rFonts w:ascii="{}" w:hAnsi="{}"/>"#,
                font_name, font_name
            )?;
        }

        if let Some(bold) = self.bold {
            xml.push_str(if bold { "<w:b/>" } else { r#"<w:b w:val="0"/>"# });
        }

        if let Some(italic) = self.italic {
            xml.push_str(if italic { "<w:i/>" } else { r#"<w:i w:val="0"/>"# });
        }

        if let Some(ref color) = self.color {
            write!(xml, r#"<w:color w:val="{}"/>"#, super::escape_xml(color))?;
        }

        if let Some(size) = self.font_size {
            write!(xml, r#"<w:sz w:val="{}"/>"#, size)?;
        }

        if let Some(underline_style) = self.underline {
            write!(xml, r#"<w:u w:val="{}"/>"#, underline_style.as_str())?;
        }

        xml.push_str("</w:rPr>");
        Ok(())
    }
}

/// A run whose content is an inline picture.
#[derive(Debug, Clone, PartialEq)]
pub struct PictureRun {
    run: Run,
}

impl PictureRun {
    /// Wrap a drawing in a run.
    pub fn new(drawing: Drawing) -> Self {
        Self {
            run: Run {
                children: vec![RunContent::Drawing(drawing)],
                properties: RunProperties::default(),
            },
        }
    }

    /// The drawing carried by this run.
    pub fn drawing(&self) -> Option<&Drawing> {
        self.run.children.iter().find_map(|c| match c {
            RunContent::Drawing(d) => Some(d),
            _ => None,
        })
    }

    /// Mutable access to the drawing carried by this run.
    pub fn drawing_mut(&mut self) -> Option<&mut Drawing> {
        self.run.children.iter_mut().find_map(|c| match c {
            RunContent::Drawing(d) => Some(d),
            _ => None,
        })
    }

    /// The underlying run.
    #[inline]
    pub fn as_run(&self) -> &Run {
        &self.run
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        self.run.to_xml(xml)
    }
}

impl From<PictureRun> for Run {
    fn from(picture: PictureRun) -> Self {
        picture.run
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_run_xml() {
        let run = Run::text("Fish & Chips").with_bold(true).with_font_size(24);
        let mut xml = String::new();
        run.to_xml(&mut xml).unwrap();
        assert_eq!(
            xml,
            r#"<w:r><w:rPr><w:b/><w:sz w:val="24"/></w:rPr><w:t xml:space="preserve">Fish &amp; Chips</w:t></w:r>"#
        );
    }

    #[test]
    fn test_run_properties_xml_order() {
        let run = Run::text("x")
            .with_underline(UnderlineStyle::Dashed)
            .with_color("FF0000")
            .with_font_size(28)
            .with_italic(true)
            .with_bold(false)
            .with_font_name("Arial")
            .with_style("Emphasis");
        let mut xml = String::new();
        run.properties.to_xml(&mut xml).unwrap();
        assert_eq!(
            xml,
            concat!(
                r#"<w:rPr><w:rStyle w:val="Emphasis"/>"#,
                r#"<w:rFonts w:ascii="Arial" w:hAnsi="Arial"/>"#,
                r#"<w:b w:val="0"/><w:i/><w:color w:val="FF0000"/>"#,
                r#"<w:sz w:val="28"/><w:u w:val="dash"/></w:rPr>"#,
            )
        );
    }

    #[test]
    fn test_italic_color_font_and_underline() {
        let run = Run::text("x")
            .with_font_name("Arial")
            .with_italic(true)
            .with_color("FF0000")
            .with_underline(UnderlineStyle::Dashed);
        let mut xml = String::new();
        run.to_xml(&mut xml).unwrap();
        assert!(xml.starts_with(
            r#"<w:r><w:rPr><w:rFonts w:ascii="Arial" w:hAnsi="Arial"/><w:i/><w:color w:val="FF0000"/><w:u w:val="dash"/></w:rPr>"#
        ));
    }

    #[test]
    fn test_footnote_reference_run() {
        let run = Run::footnote_reference(3);
        assert_eq!(run.style(), Some(FOOTNOTE_REFERENCE_STYLE));

        let mut xml = String::new();
        run.to_xml(&mut xml).unwrap();
        assert!(xml.contains(r#"<w:rStyle w:val="FootnoteReference"/>"#));
        assert!(xml.contains(r#"<w:footnoteReference w:id="3"/>"#));
    }

    #[test]
    fn test_sequential_identifier_run() {
        let run = Run::sequential_identifier("Figure");
        assert_eq!(run.children().len(), 4);
        assert_eq!(
            run.children()[1],
            RunContent::Field(FieldChar::Instruction("SEQ Figure".to_string()))
        );
        assert!(run.get_text().is_empty());
    }

    #[test]
    fn test_page_break_run() {
        let mut xml = String::new();
        Run::page_break().to_xml(&mut xml).unwrap();
        assert_eq!(xml, r#"<w:r><w:br w:type="page"/></w:r>"#);
    }

    #[test]
    fn test_get_text_joins_items() {
        let mut run = Run::text("a");
        run.push(RunContent::Tab).push(RunContent::Text("b".to_string()));
        assert_eq!(run.get_text(), "a\tb");

        run.set_text("c");
        assert_eq!(run.get_text(), "c");
    }
}
