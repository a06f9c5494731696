/// Paragraph types and implementation for DOCX documents.
use crate::ooxml::error::Result;

use super::bookmark::{Bookmark, BookmarkEnd, BookmarkStart};
use super::formatting::{NumberProperties, TabStop};
use super::hyperlink::Hyperlink;
use super::image::Image;
use super::numbering::BULLET_NUM_ID;
use super::options::{ParagraphInput, ParagraphOptions, TabStopOptions};
use super::properties::{ParagraphProperties, ParagraphProperty};
use super::run::{PictureRun, Run};

/// Paragraph style applied to list items.
pub const LIST_PARAGRAPH_STYLE: &str = "ListParagraph";

/// Content that can appear in a paragraph after its properties.
#[derive(Debug, Clone, PartialEq)]
pub enum ParagraphContent {
    Run(Run),
    Picture(PictureRun),
    Hyperlink(Hyperlink),
    BookmarkStart(BookmarkStart),
    BookmarkEnd(BookmarkEnd),
}

impl ParagraphContent {
    /// Element name written for this content.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Run(_) | Self::Picture(_) => Run::TAG,
            Self::Hyperlink(_) => Hyperlink::TAG,
            Self::BookmarkStart(_) => "w:bookmarkStart",
            Self::BookmarkEnd(_) => "w:bookmarkEnd",
        }
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        match self {
            Self::Run(run) => run.to_xml(xml),
            Self::Picture(picture) => picture.to_xml(xml),
            Self::Hyperlink(hyperlink) => hyperlink.to_xml(xml),
            Self::BookmarkStart(start) => start.to_xml(xml),
            Self::BookmarkEnd(end) => end.to_xml(xml),
        }
    }
}

/// Inline content accepted by [`ParagraphOptions::children`].
///
/// Bookmark markers are left out; a bookmark is only added whole, through
/// [`Paragraph::add_bookmark`].
#[derive(Debug, Clone, PartialEq)]
pub enum ParagraphChild {
    Run(Run),
    Picture(PictureRun),
    Hyperlink(Hyperlink),
}

impl From<Run> for ParagraphChild {
    fn from(run: Run) -> Self {
        Self::Run(run)
    }
}

impl From<PictureRun> for ParagraphChild {
    fn from(picture: PictureRun) -> Self {
        Self::Picture(picture)
    }
}

impl From<Hyperlink> for ParagraphChild {
    fn from(hyperlink: Hyperlink) -> Self {
        Self::Hyperlink(hyperlink)
    }
}

impl From<ParagraphChild> for ParagraphContent {
    fn from(child: ParagraphChild) -> Self {
        match child {
            ParagraphChild::Run(run) => Self::Run(run),
            ParagraphChild::Picture(picture) => Self::Picture(picture),
            ParagraphChild::Hyperlink(hyperlink) => Self::Hyperlink(hyperlink),
        }
    }
}

/// A child of a paragraph, as seen in output order.
#[derive(Debug, Clone, Copy)]
pub enum ParagraphNode<'a> {
    Properties(&'a ParagraphProperties),
    Content(&'a ParagraphContent),
}

impl ParagraphNode<'_> {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Properties(_) => ParagraphProperties::TAG,
            Self::Content(content) => content.tag(),
        }
    }
}

/// A paragraph (`w:p`).
///
/// The properties container is held apart from the content, so it is
/// always the first child no matter how content is added or inserted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    properties: ParagraphProperties,
    content: Vec<ParagraphContent>,
}

impl Paragraph {
    /// Element name of a paragraph.
    pub const TAG: &'static str = "w:p";

    /// Build a paragraph from text, a picture run or a full set of options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use litchi_para::{Paragraph, ParagraphOptions};
    ///
    /// let plain = Paragraph::new("Hello");
    /// assert_eq!(plain.child_count(), 2);
    ///
    /// let item = Paragraph::new(ParagraphOptions::new().with_text("A").with_bullet(0));
    /// assert_eq!(item.properties().len(), 2);
    /// ```
    pub fn new(input: impl Into<ParagraphInput>) -> Self {
        match input.into() {
            ParagraphInput::Text(text) => Self {
                properties: ParagraphProperties::default(),
                content: vec![ParagraphContent::Run(Run::text(text))],
            },
            ParagraphInput::Picture(picture) => Self {
                properties: ParagraphProperties::default(),
                content: vec![ParagraphContent::Picture(picture)],
            },
            ParagraphInput::Options(options) => Self::from_options(options),
        }
    }

    /// Build a paragraph from options.
    ///
    /// Properties are pushed in a fixed order: border, spacing, outline
    /// level, alignment, heading, bidi, thematic break, page break before,
    /// contextual spacing, indent, keep lines, keep next, tab stops, style,
    /// bullet, numbering. Content is the `text` run followed by `children`.
    pub fn from_options(options: ParagraphOptions) -> Self {
        let ParagraphOptions {
            text,
            border,
            spacing,
            outline_level,
            alignment,
            heading,
            bidirectional,
            thematic_break,
            page_break_before,
            contextual_spacing,
            indent,
            keep_lines,
            keep_next,
            tab_stops,
            style,
            bullet,
            numbering,
            children,
        } = options;

        let mut properties = ParagraphProperties::new(border);
        let mut content = Vec::with_capacity(children.len() + 1);

        if let Some(text) = text.filter(|t| !t.is_empty()) {
            content.push(ParagraphContent::Run(Run::text(text)));
        }

        if let Some(spacing) = spacing {
            properties.push(ParagraphProperty::Spacing(spacing));
        }

        if let Some(level) = outline_level {
            properties.push(ParagraphProperty::OutlineLevel(level));
        }

        if let Some(alignment) = alignment {
            properties.push(ParagraphProperty::Alignment(alignment));
        }

        if let Some(heading) = heading {
            properties.push(ParagraphProperty::Style(heading.style_id().to_string()));
        }

        if bidirectional {
            properties.push(ParagraphProperty::Bidirectional);
        }

        if thematic_break {
            properties.push(ParagraphProperty::ThematicBreak);
        }

        if page_break_before {
            properties.push(ParagraphProperty::PageBreakBefore);
        }

        if contextual_spacing {
            properties.push(ParagraphProperty::ContextualSpacing(true));
        }

        if let Some(indent) = indent {
            properties.push(ParagraphProperty::Indent(indent));
        }

        if keep_lines {
            properties.push(ParagraphProperty::KeepLines);
        }

        if keep_next {
            properties.push(ParagraphProperty::KeepNext);
        }

        if let Some(tab_stops) = tab_stops {
            push_tab_stops(&mut properties, &tab_stops);
        }

        if let Some(style) = style.filter(|s| !s.is_empty()) {
            properties.push(ParagraphProperty::Style(style));
        }

        if bullet.is_some() && numbering.is_some() {
            tracing::debug!("bullet and numbering both set; writing list properties for each");
        }

        if let Some(bullet) = bullet {
            properties.push(ParagraphProperty::Style(LIST_PARAGRAPH_STYLE.to_string()));
            properties.push(ParagraphProperty::NumberProperties(NumberProperties::new(
                BULLET_NUM_ID,
                bullet.level,
            )));
        }

        if let Some(numbering) = numbering {
            if !numbering.custom {
                properties.push(ParagraphProperty::Style(LIST_PARAGRAPH_STYLE.to_string()));
            }
            properties.push(ParagraphProperty::NumberProperties(NumberProperties::new(
                numbering.num.id(),
                numbering.level,
            )));
        }

        content.extend(children.into_iter().map(ParagraphContent::from));

        tracing::trace!(
            properties = properties.len(),
            content = content.len(),
            "composed paragraph"
        );

        Self {
            properties,
            content,
        }
    }

    /// The properties container.
    #[inline]
    pub fn properties(&self) -> &ParagraphProperties {
        &self.properties
    }

    /// Mutable access to the properties container.
    #[inline]
    pub fn properties_mut(&mut self) -> &mut ParagraphProperties {
        &mut self.properties
    }

    /// Content after the properties, in output order.
    #[inline]
    pub fn content(&self) -> &[ParagraphContent] {
        &self.content
    }

    /// All children in output order, starting with the properties container.
    pub fn children(&self) -> impl Iterator<Item = ParagraphNode<'_>> {
        std::iter::once(ParagraphNode::Properties(&self.properties))
            .chain(self.content.iter().map(ParagraphNode::Content))
    }

    /// Number of children, counting the properties container.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.content.len() + 1
    }

    /// Concatenated text of all runs, hyperlinks included.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for content in &self.content {
            match content {
                ParagraphContent::Run(run) => text.push_str(&run.get_text()),
                ParagraphContent::Hyperlink(hyperlink) => text.push_str(&hyperlink.text()),
                _ => {},
            }
        }
        text
    }

    /// Append a run.
    pub fn add_run(&mut self, run: Run) -> &mut Self {
        self.content.push(ParagraphContent::Run(run));
        self
    }

    /// Append a hyperlink.
    pub fn add_hyperlink(&mut self, hyperlink: Hyperlink) -> &mut Self {
        self.content.push(ParagraphContent::Hyperlink(hyperlink));
        self
    }

    /// Append a bookmark as its start marker, text run and end marker.
    pub fn add_bookmark(&mut self, bookmark: Bookmark) -> &mut Self {
        let Bookmark { start, text, end } = bookmark;
        self.content.reserve(3);
        self.content.push(ParagraphContent::BookmarkStart(start));
        self.content.push(ParagraphContent::Run(text));
        self.content.push(ParagraphContent::BookmarkEnd(end));
        self
    }

    /// Append the picture run bound to an image and return it.
    pub fn add_image(&mut self, image: &Image) -> &mut PictureRun {
        self.content.push(ParagraphContent::Picture(image.run().clone()));
        match self.content.last_mut() {
            Some(ParagraphContent::Picture(picture)) => picture,
            _ => unreachable!(),
        }
    }

    /// Append a page break run.
    pub fn page_break(&mut self) -> &mut Self {
        self.add_run(Run::page_break())
    }

    /// Append a reference to the footnote with the given ID.
    pub fn reference_footnote(&mut self, id: u32) -> &mut Self {
        self.add_run(Run::footnote_reference(id))
    }

    /// Insert a run before all existing content, right after the properties.
    pub fn add_run_to_front(&mut self, run: Run) -> &mut Self {
        self.content.insert(0, ParagraphContent::Run(run));
        self
    }

    /// Append an auto-numbering field for the named sequence.
    pub fn add_sequential_identifier(&mut self, identifier: &str) -> &mut Self {
        self.add_run(Run::sequential_identifier(identifier))
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:p>");
        self.properties.to_xml(xml)?;
        for content in &self.content {
            content.to_xml(xml)?;
        }
        xml.push_str("</w:p>");
        Ok(())
    }

    /// Serialize the paragraph to a WordprocessingML fragment.
    pub fn to_xml_string(&self) -> Result<String> {
        let mut xml = String::with_capacity(64 + self.content.len() * 64);
        self.to_xml(&mut xml)?;
        Ok(xml)
    }
}

/// Push tab stops in left, right, max-right, center order.
fn push_tab_stops(properties: &mut ParagraphProperties, tab_stops: &TabStopOptions) {
    if let Some(left) = tab_stops.left {
        properties.push(ParagraphProperty::TabStop(TabStop::left(
            left.position,
            left.leader,
        )));
    }

    if let Some(right) = tab_stops.right {
        properties.push(ParagraphProperty::TabStop(TabStop::right(
            right.position,
            right.leader,
        )));
    }

    if let Some(max_right) = tab_stops.max_right {
        properties.push(ParagraphProperty::TabStop(TabStop::max_right(
            max_right.leader,
        )));
    }

    if let Some(center) = tab_stops.center {
        properties.push(ParagraphProperty::TabStop(TabStop::center(
            center.position,
            center.leader,
        )));
    }
}
