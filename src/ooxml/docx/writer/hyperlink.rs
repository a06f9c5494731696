/// Hyperlink support for DOCX paragraphs.
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

use super::run::Run;

/// Character style applied to hyperlink text.
pub const HYPERLINK_STYLE: &str = "Hyperlink";

/// Where a hyperlink points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HyperlinkTarget {
    /// External URL, referenced through a relationship of the document part
    External { rel_id: String },
    /// Bookmark inside the same document
    Internal { anchor: String },
}

/// A hyperlink in a paragraph.
#[derive(Debug, Clone, PartialEq)]
pub struct Hyperlink {
    pub(crate) target: HyperlinkTarget,
    pub(crate) runs: Vec<Run>,
    /// Optional tooltip text
    pub(crate) tooltip: Option<String>,
}

impl Hyperlink {
    /// Element name of a hyperlink.
    pub const TAG: &'static str = "w:hyperlink";

    /// Create a link to an external URL.
    ///
    /// The URL itself lives in the relationship identified by `rel_id`.
    pub fn external(rel_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::with_target(HyperlinkTarget::External { rel_id: rel_id.into() }, text.into())
    }

    /// Create a link to a bookmark in the same document.
    pub fn internal(anchor: impl Into<String>, text: impl Into<String>) -> Self {
        Self::with_target(HyperlinkTarget::Internal { anchor: anchor.into() }, text.into())
    }

    fn with_target(target: HyperlinkTarget, text: String) -> Self {
        Self {
            target,
            runs: vec![Run::text(text).with_style(HYPERLINK_STYLE)],
            tooltip: None,
        }
    }

    /// Set the tooltip text.
    pub fn set_tooltip(&mut self, tooltip: impl Into<String>) -> &mut Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    #[inline]
    pub fn target(&self) -> &HyperlinkTarget {
        &self.target
    }

    /// Runs shown as the link text.
    #[inline]
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Display text of the link.
    pub fn text(&self) -> String {
        self.runs.iter().map(Run::get_text).collect()
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:hyperlink");
        match &self.target {
            HyperlinkTarget::External { rel_id } => {
                write!(
                    xml,
                    r#" r:id="{}" w:history="1""#,
                    super::escape_xml(rel_id)
                )?;
            },
            HyperlinkTarget::Internal { anchor } => {
                write!(xml, r#" w:anchor="{}""#, super::escape_xml(anchor))?;
            },
        }
        if let Some(ref tooltip) = self.tooltip {
            write!(xml, r#" w:tooltip="{}""#, super::escape_xml(tooltip))?;
        }
        xml.push('>');
        for run in &self.runs {
            run.to_xml(xml)?;
        }
        xml.push_str("</w:hyperlink>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_hyperlink_xml() {
        let mut link = Hyperlink::external("rId5", "Rust");
        link.set_tooltip("Go to rust-lang.org");

        let mut xml = String::new();
        link.to_xml(&mut xml).unwrap();
        assert!(xml.starts_with(
            r#"<w:hyperlink r:id="rId5" w:history="1" w:tooltip="Go to rust-lang.org">"#
        ));
        assert!(xml.contains(r#"<w:rStyle w:val="Hyperlink"/>"#));
        assert!(xml.ends_with("</w:hyperlink>"));
    }

    #[test]
    fn test_internal_hyperlink() {
        let link = Hyperlink::internal("Summary", "see summary");
        assert_eq!(
            link.target(),
            &HyperlinkTarget::Internal {
                anchor: "Summary".to_string()
            }
        );
        assert_eq!(link.text(), "see summary");

        let mut xml = String::new();
        link.to_xml(&mut xml).unwrap();
        assert!(xml.starts_with(r#"<w:hyperlink w:anchor="Summary">"#));
    }
}
