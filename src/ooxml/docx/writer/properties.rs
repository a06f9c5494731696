/// Paragraph properties container (`w:pPr`).
use crate::ooxml::error::Result;
use smallvec::SmallVec;
use std::fmt::Write as FmtWrite;

use super::formatting::{BorderOptions, IndentOptions, NumberProperties, SpacingOptions, TabStop};
pub use super::super::format::AlignmentType;

/// A single property leaf inside `w:pPr`.
#[derive(Debug, Clone, PartialEq)]
pub enum ParagraphProperty {
    /// `w:pBdr`
    Border(BorderOptions),
    /// Bottom border drawn as a horizontal rule
    ThematicBreak,
    /// `w:spacing`
    Spacing(SpacingOptions),
    /// `w:outlineLvl`
    OutlineLevel(u32),
    /// `w:jc`
    Alignment(AlignmentType),
    /// `w:pStyle`
    Style(String),
    /// `w:bidi`
    Bidirectional,
    /// `w:pageBreakBefore`
    PageBreakBefore,
    /// `w:contextualSpacing`
    ContextualSpacing(bool),
    /// `w:ind`
    Indent(IndentOptions),
    /// `w:keepLines`
    KeepLines,
    /// `w:keepNext`
    KeepNext,
    /// `w:tabs` with a single stop
    TabStop(TabStop),
    /// `w:numPr`
    NumberProperties(NumberProperties),
}

impl ParagraphProperty {
    /// Element name written for this property.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Border(_) | Self::ThematicBreak => "w:pBdr",
            Self::Spacing(_) => "w:spacing",
            Self::OutlineLevel(_) => "w:outlineLvl",
            Self::Alignment(_) => "w:jc",
            Self::Style(_) => "w:pStyle",
            Self::Bidirectional => "w:bidi",
            Self::PageBreakBefore => "w:pageBreakBefore",
            Self::ContextualSpacing(_) => "w:contextualSpacing",
            Self::Indent(_) => "w:ind",
            Self::KeepLines => "w:keepLines",
            Self::KeepNext => "w:keepNext",
            Self::TabStop(_) => "w:tabs",
            Self::NumberProperties(_) => "w:numPr",
        }
    }

    /// Position of this element in the CT_PPr sequence.
    pub fn schema_rank(&self) -> u8 {
        match self {
            Self::Style(_) => 0,
            Self::KeepNext => 1,
            Self::KeepLines => 2,
            Self::PageBreakBefore => 3,
            Self::NumberProperties(_) => 6,
            Self::Border(_) | Self::ThematicBreak => 8,
            Self::TabStop(_) => 10,
            Self::Bidirectional => 18,
            Self::Spacing(_) => 21,
            Self::Indent(_) => 22,
            Self::ContextualSpacing(_) => 23,
            Self::Alignment(_) => 26,
            Self::OutlineLevel(_) => 30,
        }
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        match self {
            Self::Border(border) => border.to_xml(xml)?,
            Self::ThematicBreak => BorderOptions::thematic_break().to_xml(xml)?,
            Self::Spacing(spacing) => spacing.to_xml(xml)?,
            Self::OutlineLevel(level) => write!(xml, r#"<w:outlineLvl w:val="{}"/>"#, level)?,
            Self::Alignment(alignment) => write!(xml, r#"<w:jc w:val="{}"/>"#, alignment.as_str())?,
            Self::Style(style) => write!(
                xml,
                r#"<w:pStyle w:val="{}"/>"#,
                super::escape_xml(style)
            )?,
            Self::Bidirectional => xml.push_str("<w:bidi/>"),
            Self::PageBreakBefore => xml.push_str("<w:pageBreakBefore/>"),
            Self::ContextualSpacing(value) => write!(
                xml,
                r#"<w:contextualSpacing w:val="{}"/>"#,
                if *value { 1 } else { 0 }
            )?,
            Self::Indent(indent) => indent.to_xml(xml)?,
            Self::KeepLines => xml.push_str("<w:keepLines/>"),
            Self::KeepNext => xml.push_str("<w:keepNext/>"),
            Self::TabStop(tab) => tab.to_xml(xml)?,
            Self::NumberProperties(numbering) => numbering.to_xml(xml)?,
        }
        Ok(())
    }
}

/// Ordered collection of paragraph property leaves.
///
/// Children keep the order in which they were pushed. The paragraph composer
/// pushes them in a fixed order, so the output is deterministic for a given
/// set of options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParagraphProperties {
    children: SmallVec<[ParagraphProperty; 8]>,
}

impl ParagraphProperties {
    /// Element name of the container.
    pub const TAG: &'static str = "w:pPr";

    /// Create a container, seeded with a border when one is given.
    ///
    /// The border is the only property set at construction time, so it
    /// always comes before anything pushed afterwards.
    pub fn new(border: Option<BorderOptions>) -> Self {
        let mut properties = Self::default();
        if let Some(border) = border {
            properties.push(ParagraphProperty::Border(border));
        }
        properties
    }

    /// Append a property leaf.
    pub fn push(&mut self, property: ParagraphProperty) {
        self.children.push(property);
    }

    /// Property leaves in output order.
    #[inline]
    pub fn children(&self) -> &[ParagraphProperty] {
        &self.children
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Check whether a `w:pStyle` with the given ID is present.
    pub fn has_style(&self, style_id: &str) -> bool {
        self.children
            .iter()
            .any(|p| matches!(p, ParagraphProperty::Style(s) if s == style_id))
    }

    /// Check whether the children already follow the CT_PPr sequence.
    pub fn is_schema_ordered(&self) -> bool {
        self.children
            .windows(2)
            .all(|pair| pair[0].schema_rank() <= pair[1].schema_rank())
    }

    /// Reorder children into CT_PPr sequence order.
    ///
    /// The sort is stable: repeated leaves of the same kind (tab stops,
    /// duplicate style references) keep their relative order.
    pub fn normalize(&mut self) {
        self.children.sort_by_key(ParagraphProperty::schema_rank);
    }

    /// Serialize the container. Nothing is written when it is empty.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        if self.children.is_empty() {
            return Ok(());
        }

        xml.push_str("<w:pPr>");
        for property in &self.children {
            property.to_xml(xml)?;
        }
        xml.push_str("</w:pPr>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::docx::writer::formatting::{BorderSide, BorderStyle};

    #[test]
    fn test_empty_container_writes_nothing() {
        let properties = ParagraphProperties::new(None);
        let mut xml = String::new();
        properties.to_xml(&mut xml).unwrap();
        assert!(xml.is_empty());
    }

    #[test]
    fn test_border_is_seeded_first() {
        let border = BorderOptions {
            top: Some(BorderSide::new(BorderStyle::Single, 4, 1)),
            ..Default::default()
        };
        let mut properties = ParagraphProperties::new(Some(border));
        properties.push(ParagraphProperty::KeepNext);

        assert!(matches!(properties.children()[0], ParagraphProperty::Border(_)));
        assert_eq!(properties.children()[1], ParagraphProperty::KeepNext);
    }

    #[test]
    fn test_normalize_is_stable() {
        let mut properties = ParagraphProperties::default();
        properties.push(ParagraphProperty::Alignment(AlignmentType::Center));
        properties.push(ParagraphProperty::TabStop(TabStop::left(100, None)));
        properties.push(ParagraphProperty::Style("Quote".to_string()));
        properties.push(ParagraphProperty::TabStop(TabStop::center(200, None)));
        assert!(!properties.is_schema_ordered());

        properties.normalize();

        assert!(properties.is_schema_ordered());
        assert_eq!(
            properties.children()[0],
            ParagraphProperty::Style("Quote".to_string())
        );
        assert_eq!(
            properties.children()[1],
            ParagraphProperty::TabStop(TabStop::left(100, None))
        );
        assert_eq!(
            properties.children()[2],
            ParagraphProperty::TabStop(TabStop::center(200, None))
        );
    }

    #[test]
    fn test_contextual_spacing_xml() {
        let mut properties = ParagraphProperties::default();
        properties.push(ParagraphProperty::ContextualSpacing(true));
        properties.push(ParagraphProperty::Style("A&B".to_string()));

        let mut xml = String::new();
        properties.to_xml(&mut xml).unwrap();
        assert_eq!(
            xml,
            r#"<w:pPr><w:contextualSpacing w:val="1"/><w:pStyle w:val="A&amp;B"/></w:pPr>"#
        );
    }
}
