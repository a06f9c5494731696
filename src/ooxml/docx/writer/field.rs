/// Complex field characters for DOCX runs.
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

/// One piece of a complex field.
///
/// A complete field spans begin, instruction, separate and end. The pieces
/// live inside runs, so a single run can carry a whole field or a field can
/// be split across several runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChar {
    /// Field begin character
    Begin {
        /// Whether the field result must be recalculated on open
        dirty: bool,
    },
    /// Field instruction text (e.g. `SEQ Figure`)
    Instruction(String),
    /// Field separate character
    Separate {
        /// Whether the field is dirty
        dirty: bool,
    },
    /// Field end character
    End {
        /// Whether the field is dirty
        dirty: bool,
    },
}

impl FieldChar {
    /// Build the four characters of a field with no cached result.
    ///
    /// Every character is marked dirty so the consumer computes the value.
    pub fn complete(instruction: impl Into<String>) -> [FieldChar; 4] {
        [
            Self::Begin { dirty: true },
            Self::Instruction(instruction.into()),
            Self::Separate { dirty: true },
            Self::End { dirty: true },
        ]
    }

    /// Get the instruction text, if this is an instruction.
    pub fn instruction(&self) -> Option<&str> {
        match self {
            Self::Instruction(text) => Some(text),
            _ => None,
        }
    }

    /// Check if the field is dirty (needs update).
    pub fn is_dirty(&self) -> bool {
        match self {
            Self::Begin { dirty } | Self::Separate { dirty } | Self::End { dirty } => *dirty,
            Self::Instruction(_) => false,
        }
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        match self {
            Self::Begin { dirty } => write_fld_char(xml, "begin", *dirty)?,
            Self::Instruction(text) => write!(
                xml,
                r#"<w:instrText xml:space="preserve">{}</w:instrText>"#,
                super::escape_xml(text)
            )?,
            Self::Separate { dirty } => write_fld_char(xml, "separate", *dirty)?,
            Self::End { dirty } => write_fld_char(xml, "end", *dirty)?,
        }
        Ok(())
    }
}

fn write_fld_char(xml: &mut String, kind: &str, dirty: bool) -> Result<()> {
    write!(xml, r#"<w:fldChar w:fldCharType="{}""#, kind)?;
    if dirty {
        xml.push_str(r#" w:dirty="true""#);
    }
    xml.push_str("/>");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_field() {
        let chars = FieldChar::complete("SEQ Table");
        assert!(matches!(chars[0], FieldChar::Begin { dirty: true }));
        assert_eq!(chars[1].instruction(), Some("SEQ Table"));
        assert!(chars[2].is_dirty());
        assert!(matches!(chars[3], FieldChar::End { .. }));
    }

    #[test]
    fn test_field_xml() {
        let mut xml = String::new();
        for c in FieldChar::complete("SEQ Figure") {
            c.to_xml(&mut xml).unwrap();
        }
        assert_eq!(
            xml,
            concat!(
                r#"<w:fldChar w:fldCharType="begin" w:dirty="true"/>"#,
                r#"<w:instrText xml:space="preserve">SEQ Figure</w:instrText>"#,
                r#"<w:fldChar w:fldCharType="separate" w:dirty="true"/>"#,
                r#"<w:fldChar w:fldCharType="end" w:dirty="true"/>"#,
            )
        );
    }

    #[test]
    fn test_clean_begin_has_no_dirty_attribute() {
        let mut xml = String::new();
        FieldChar::Begin { dirty: false }.to_xml(&mut xml).unwrap();
        assert_eq!(xml, r#"<w:fldChar w:fldCharType="begin"/>"#);
    }
}
