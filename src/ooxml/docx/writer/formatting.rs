/// Paragraph formatting leaves written inside `w:pPr`.
use crate::ooxml::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Write as FmtWrite;

pub use super::super::format::{BorderStyle, LeaderType, LineRule, TabStopType};

/// Position of the max-right tab stop, in twips.
///
/// Matches the right margin of an A4 page with default margins.
pub const MAX_RIGHT_TAB_POSITION: u32 = 9026;

/// One side of a paragraph border.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderSide {
    /// Line style
    pub style: BorderStyle,
    /// Width in eighths of a point
    #[serde(default)]
    pub size: u32,
    /// Distance from text in points
    #[serde(default)]
    pub space: u32,
    /// Hex RGB color or `auto`
    #[serde(default = "BorderSide::auto_color")]
    pub color: String,
}

impl BorderSide {
    /// Create a border side with the given style and `auto` color.
    pub fn new(style: BorderStyle, size: u32, space: u32) -> Self {
        Self {
            style,
            size,
            space,
            color: Self::auto_color(),
        }
    }

    /// Set the border color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    fn auto_color() -> String {
        "auto".to_string()
    }

    fn to_xml(&self, xml: &mut String, side: &str) -> Result<()> {
        write!(
            xml,
            r#"<w:{} w:val="{}" w:color="{}" w:space="{}" w:sz="{}"/>"#,
            side,
            self.style.as_str(),
            super::escape_xml(&self.color),
            self.space,
            self.size
        )?;
        Ok(())
    }
}

/// Paragraph border (`w:pBdr`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderOptions {
    pub top: Option<BorderSide>,
    pub bottom: Option<BorderSide>,
    pub left: Option<BorderSide>,
    pub right: Option<BorderSide>,
}

impl BorderOptions {
    /// Border drawn by a thematic break: a thin single line below the paragraph.
    pub fn thematic_break() -> Self {
        Self {
            bottom: Some(BorderSide::new(BorderStyle::Single, 6, 1)),
            ..Self::default()
        }
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:pBdr>");
        // CT_PBdr sequence order
        if let Some(ref top) = self.top {
            top.to_xml(xml, "top")?;
        }
        if let Some(ref left) = self.left {
            left.to_xml(xml, "left")?;
        }
        if let Some(ref bottom) = self.bottom {
            bottom.to_xml(xml, "bottom")?;
        }
        if let Some(ref right) = self.right {
            right.to_xml(xml, "right")?;
        }
        xml.push_str("</w:pBdr>");
        Ok(())
    }
}

/// Paragraph spacing (`w:spacing`), values in twips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacingOptions {
    pub before: Option<u32>,
    pub after: Option<u32>,
    pub line: Option<u32>,
    pub line_rule: Option<LineRule>,
}

impl SpacingOptions {
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:spacing");
        if let Some(before) = self.before {
            write!(xml, r#" w:before="{}""#, before)?;
        }
        if let Some(after) = self.after {
            write!(xml, r#" w:after="{}""#, after)?;
        }
        if let Some(line) = self.line {
            write!(xml, r#" w:line="{}""#, line)?;
        }
        if let Some(rule) = self.line_rule {
            write!(xml, r#" w:lineRule="{}""#, rule.as_str())?;
        }
        xml.push_str("/>");
        Ok(())
    }
}

/// Paragraph indentation (`w:ind`), values in twips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndentOptions {
    pub start: Option<i32>,
    pub end: Option<i32>,
    pub left: Option<i32>,
    pub right: Option<i32>,
    pub hanging: Option<u32>,
    pub first_line: Option<u32>,
}

impl IndentOptions {
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:ind");
        if let Some(start) = self.start {
            write!(xml, r#" w:start="{}""#, start)?;
        }
        if let Some(end) = self.end {
            write!(xml, r#" w:end="{}""#, end)?;
        }
        if let Some(left) = self.left {
            write!(xml, r#" w:left="{}""#, left)?;
        }
        if let Some(right) = self.right {
            write!(xml, r#" w:right="{}""#, right)?;
        }
        if let Some(hanging) = self.hanging {
            write!(xml, r#" w:hanging="{}""#, hanging)?;
        }
        if let Some(first_line) = self.first_line {
            write!(xml, r#" w:firstLine="{}""#, first_line)?;
        }
        xml.push_str("/>");
        Ok(())
    }
}

/// A single tab stop, written as its own `w:tabs` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabStop {
    kind: TabStopType,
    position: u32,
    leader: Option<LeaderType>,
}

impl TabStop {
    pub fn left(position: u32, leader: Option<LeaderType>) -> Self {
        Self {
            kind: TabStopType::Left,
            position,
            leader,
        }
    }

    pub fn right(position: u32, leader: Option<LeaderType>) -> Self {
        Self {
            kind: TabStopType::Right,
            position,
            leader,
        }
    }

    pub fn center(position: u32, leader: Option<LeaderType>) -> Self {
        Self {
            kind: TabStopType::Center,
            position,
            leader,
        }
    }

    /// Right-aligned tab stop at the right margin.
    pub fn max_right(leader: Option<LeaderType>) -> Self {
        Self::right(MAX_RIGHT_TAB_POSITION, leader)
    }

    #[inline]
    pub fn kind(&self) -> TabStopType {
        self.kind
    }

    #[inline]
    pub fn position(&self) -> u32 {
        self.position
    }

    #[inline]
    pub fn leader(&self) -> Option<LeaderType> {
        self.leader
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        write!(
            xml,
            r#"<w:tabs><w:tab w:val="{}" w:pos="{}""#,
            self.kind.as_str(),
            self.position
        )?;
        if let Some(leader) = self.leader {
            write!(xml, r#" w:leader="{}""#, leader.as_str())?;
        }
        xml.push_str("/></w:tabs>");
        Ok(())
    }
}

/// List membership (`w:numPr`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberProperties {
    /// Concrete numbering definition ID
    pub num_id: u32,
    /// Indentation level, zero based
    pub level: u32,
}

impl NumberProperties {
    pub fn new(num_id: u32, level: u32) -> Self {
        Self { num_id, level }
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        write!(
            xml,
            r#"<w:numPr><w:ilvl w:val="{}"/><w:numId w:val="{}"/></w:numPr>"#,
            self.level, self.num_id
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_right_tab_stop() {
        let tab = TabStop::max_right(Some(LeaderType::Dot));
        assert_eq!(tab.kind(), TabStopType::Right);
        assert_eq!(tab.position(), MAX_RIGHT_TAB_POSITION);

        let mut xml = String::new();
        tab.to_xml(&mut xml).unwrap();
        assert_eq!(
            xml,
            r#"<w:tabs><w:tab w:val="right" w:pos="9026" w:leader="dot"/></w:tabs>"#
        );
    }

    #[test]
    fn test_tab_stop_without_leader() {
        let mut xml = String::new();
        TabStop::center(4513, None).to_xml(&mut xml).unwrap();
        assert!(!xml.contains("w:leader"));
        assert!(xml.contains(r#"w:val="center""#));
    }

    #[test]
    fn test_spacing_xml() {
        let spacing = SpacingOptions {
            before: Some(120),
            line: Some(360),
            line_rule: Some(LineRule::Auto),
            ..Default::default()
        };
        let mut xml = String::new();
        spacing.to_xml(&mut xml).unwrap();
        assert_eq!(
            xml,
            r#"<w:spacing w:before="120" w:line="360" w:lineRule="auto"/>"#
        );
    }

    #[test]
    fn test_border_sides_follow_schema_order() {
        let border = BorderOptions {
            bottom: Some(BorderSide::new(BorderStyle::Single, 6, 1)),
            top: Some(BorderSide::new(BorderStyle::Double, 4, 0).with_color("FF0000")),
            ..Default::default()
        };
        let mut xml = String::new();
        border.to_xml(&mut xml).unwrap();
        let top = xml.find("<w:top").unwrap();
        let bottom = xml.find("<w:bottom").unwrap();
        assert!(top < bottom);
        assert!(xml.contains(r#"w:color="FF0000""#));
    }

    #[test]
    fn test_numbering_xml() {
        let mut xml = String::new();
        NumberProperties::new(7, 2).to_xml(&mut xml).unwrap();
        assert_eq!(
            xml,
            r#"<w:numPr><w:ilvl w:val="2"/><w:numId w:val="7"/></w:numPr>"#
        );
    }
}
