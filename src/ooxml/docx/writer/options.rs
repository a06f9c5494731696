//! Declarative paragraph configuration.
//!
//! [`ParagraphOptions`] lists every optional paragraph setting. Options can
//! be built in code with the `with_*` methods or loaded from YAML:
//!
//! ```rust
//! use litchi_para::{AlignmentType, ParagraphOptions};
//!
//! let options = ParagraphOptions::from_yaml_str(
//!     "text: Hello\nalignment: center\nbullet:\n  level: 1\n",
//! )?;
//! assert_eq!(options.alignment, Some(AlignmentType::Center));
//! # Ok::<(), litchi_para::OoxmlError>(())
//! ```

use crate::ooxml::error::{OoxmlError, Result};
use serde::{Deserialize, Serialize};

use super::formatting::{BorderOptions, IndentOptions, SpacingOptions};
use super::numbering::Num;
use super::paragraph::ParagraphChild;
use super::run::PictureRun;
pub use super::super::format::{AlignmentType, HeadingLevel, LeaderType};

/// Position and leader of a tab stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabStopPosition {
    /// Position in twips from the start margin
    pub position: u32,
    #[serde(default)]
    pub leader: Option<LeaderType>,
}

impl TabStopPosition {
    pub fn new(position: u32) -> Self {
        Self {
            position,
            leader: None,
        }
    }

    pub fn with_leader(mut self, leader: LeaderType) -> Self {
        self.leader = Some(leader);
        self
    }
}

/// Leader of the tab stop placed at the right margin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaxRightTabStop {
    pub leader: Option<LeaderType>,
}

/// Tab stops of a paragraph; each kind is independent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabStopOptions {
    pub left: Option<TabStopPosition>,
    pub right: Option<TabStopPosition>,
    pub max_right: Option<MaxRightTabStop>,
    pub center: Option<TabStopPosition>,
}

/// Membership in the default bullet list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulletOptions {
    pub level: u32,
}

/// Membership in a numbered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberingOptions {
    pub num: Num,
    pub level: u32,
    /// Skip the implied `ListParagraph` style reference
    #[serde(default)]
    pub custom: bool,
}

impl NumberingOptions {
    pub fn new(num: Num, level: u32) -> Self {
        Self {
            num,
            level,
            custom: false,
        }
    }

    pub fn with_custom(mut self, custom: bool) -> Self {
        self.custom = custom;
        self
    }
}

/// Every optional setting of a paragraph.
///
/// Absent settings contribute nothing to the paragraph. Setting both
/// `bullet` and `numbering` emits the list properties of each.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParagraphOptions {
    /// Text of a run placed before `children`; empty text adds no run
    pub text: Option<String>,
    pub border: Option<BorderOptions>,
    pub spacing: Option<SpacingOptions>,
    pub outline_level: Option<u32>,
    pub alignment: Option<AlignmentType>,
    pub heading: Option<HeadingLevel>,
    pub bidirectional: bool,
    pub thematic_break: bool,
    pub page_break_before: bool,
    pub contextual_spacing: bool,
    pub indent: Option<IndentOptions>,
    pub keep_lines: bool,
    pub keep_next: bool,
    pub tab_stops: Option<TabStopOptions>,
    /// Paragraph style ID; empty IDs are ignored
    pub style: Option<String>,
    pub bullet: Option<BulletOptions>,
    pub numbering: Option<NumberingOptions>,
    /// Inline content appended in order
    #[serde(skip)]
    pub children: Vec<ParagraphChild>,
}

impl ParagraphOptions {
    /// Create options with nothing set.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a YAML document.
    ///
    /// `children` cannot be given in YAML; add content afterwards with
    /// [`ParagraphOptions::with_child`] or the paragraph mutators.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let options: Self = serde_saphyr::from_str(yaml)
            .map_err(|e| OoxmlError::Config(format!("Failed to parse paragraph options: {}", e)))?;
        tracing::debug!(
            has_text = options.text.is_some(),
            list = options.bullet.is_some() || options.numbering.is_some(),
            "loaded paragraph options from YAML"
        );
        Ok(options)
    }

    #[inline]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[inline]
    pub fn with_border(mut self, border: BorderOptions) -> Self {
        self.border = Some(border);
        self
    }

    #[inline]
    pub fn with_spacing(mut self, spacing: SpacingOptions) -> Self {
        self.spacing = Some(spacing);
        self
    }

    #[inline]
    pub fn with_outline_level(mut self, level: u32) -> Self {
        self.outline_level = Some(level);
        self
    }

    #[inline]
    pub fn with_alignment(mut self, alignment: AlignmentType) -> Self {
        self.alignment = Some(alignment);
        self
    }

    #[inline]
    pub fn with_heading(mut self, heading: HeadingLevel) -> Self {
        self.heading = Some(heading);
        self
    }

    #[inline]
    pub fn with_bidirectional(mut self, bidirectional: bool) -> Self {
        self.bidirectional = bidirectional;
        self
    }

    #[inline]
    pub fn with_thematic_break(mut self, thematic_break: bool) -> Self {
        self.thematic_break = thematic_break;
        self
    }

    #[inline]
    pub fn with_page_break_before(mut self, page_break_before: bool) -> Self {
        self.page_break_before = page_break_before;
        self
    }

    #[inline]
    pub fn with_contextual_spacing(mut self, contextual_spacing: bool) -> Self {
        self.contextual_spacing = contextual_spacing;
        self
    }

    #[inline]
    pub fn with_indent(mut self, indent: IndentOptions) -> Self {
        self.indent = Some(indent);
        self
    }

    #[inline]
    pub fn with_keep_lines(mut self, keep_lines: bool) -> Self {
        self.keep_lines = keep_lines;
        self
    }

    #[inline]
    pub fn with_keep_next(mut self, keep_next: bool) -> Self {
        self.keep_next = keep_next;
        self
    }

    #[inline]
    pub fn with_tab_stops(mut self, tab_stops: TabStopOptions) -> Self {
        self.tab_stops = Some(tab_stops);
        self
    }

    #[inline]
    pub fn with_style(mut self, style_id: impl Into<String>) -> Self {
        self.style = Some(style_id.into());
        self
    }

    #[inline]
    pub fn with_bullet(mut self, level: u32) -> Self {
        self.bullet = Some(BulletOptions { level });
        self
    }

    #[inline]
    pub fn with_numbering(mut self, numbering: NumberingOptions) -> Self {
        self.numbering = Some(numbering);
        self
    }

    /// Append an inline child (run, picture run or hyperlink).
    ///
    /// Bookmark markers are not children; they would split the bookmark.
    ///
    /// ```compile_fail
    /// use litchi_para::{Bookmark, ParagraphContent, ParagraphOptions};
    ///
    /// let bookmark = Bookmark::new(9, "Orphan", "x");
    /// let _ = ParagraphOptions::new().with_child(ParagraphContent::BookmarkStart(bookmark.start));
    /// ```
    #[inline]
    pub fn with_child(mut self, child: impl Into<ParagraphChild>) -> Self {
        self.children.push(child.into());
        self
    }
}

/// The three shapes a paragraph can be built from.
#[derive(Debug, Clone, PartialEq)]
pub enum ParagraphInput {
    /// A single text run
    Text(String),
    /// A single picture run
    Picture(PictureRun),
    /// The general case
    Options(ParagraphOptions),
}

impl From<&str> for ParagraphInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for ParagraphInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<PictureRun> for ParagraphInput {
    fn from(picture: PictureRun) -> Self {
        Self::Picture(picture)
    }
}

impl From<ParagraphOptions> for ParagraphInput {
    fn from(options: ParagraphOptions) -> Self {
        Self::Options(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::docx::format::LineRule;

    #[test]
    fn test_yaml_options() {
        let yaml = r#"
text: Chapter one
heading: heading1
keep_next: true
spacing:
  before: 240
  line_rule: atLeast
tab_stops:
  left:
    position: 2268
    leader: middleDot
  max_right: {}
numbering:
  num:
    id: 7
  level: 2
  custom: true
"#;
        let options = ParagraphOptions::from_yaml_str(yaml).unwrap();
        assert_eq!(options.text.as_deref(), Some("Chapter one"));
        assert_eq!(options.heading, Some(HeadingLevel::Heading1));
        assert!(options.keep_next);
        assert!(!options.keep_lines);

        let spacing = options.spacing.unwrap();
        assert_eq!(spacing.before, Some(240));
        assert_eq!(spacing.line_rule, Some(LineRule::AtLeast));

        let tabs = options.tab_stops.unwrap();
        assert_eq!(
            tabs.left,
            Some(TabStopPosition::new(2268).with_leader(LeaderType::MiddleDot))
        );
        assert_eq!(tabs.max_right, Some(MaxRightTabStop { leader: None }));
        assert!(tabs.center.is_none());

        let numbering = options.numbering.unwrap();
        assert_eq!(numbering.num.id(), 7);
        assert_eq!(numbering.level, 2);
        assert!(numbering.custom);
        assert!(options.children.is_empty());
    }

    #[test]
    fn test_invalid_yaml_is_config_error() {
        let err = ParagraphOptions::from_yaml_str("alignment: sideways\n");
        assert!(matches!(err, Err(OoxmlError::Config(_))));
    }

    #[test]
    fn test_builder_matches_literal() {
        let built = ParagraphOptions::new()
            .with_text("A")
            .with_bullet(0)
            .with_keep_lines(true);
        let literal = ParagraphOptions {
            text: Some("A".to_string()),
            bullet: Some(BulletOptions { level: 0 }),
            keep_lines: true,
            ..Default::default()
        };
        assert_eq!(built, literal);
    }

    #[test]
    fn test_input_conversions() {
        assert_eq!(
            ParagraphInput::from("Hi"),
            ParagraphInput::Text("Hi".to_string())
        );
        assert!(matches!(
            ParagraphInput::from(ParagraphOptions::new()),
            ParagraphInput::Options(_)
        ));
    }
}
