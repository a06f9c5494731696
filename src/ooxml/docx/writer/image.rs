/// Image support for DOCX paragraphs.
///
/// `Media` is the registry that owns image bytes and hands out relationship
/// IDs; an `Image` is the handle a paragraph embeds through its bound
/// `PictureRun`.
use crate::ooxml::error::{OoxmlError, Result};
use std::fmt::Write as FmtWrite;
use std::path::Path;

// Import shared format types
pub use super::super::format::ImageFormat;
use super::run::PictureRun;

/// Extent used when the caller gives no dimension (one inch).
pub const DEFAULT_EXTENT_EMU: i64 = 914400;

/// An inline DrawingML picture (`w:drawing`).
#[derive(Debug, Clone, PartialEq)]
pub struct Drawing {
    /// Relationship ID of the image part
    pub(crate) rel_id: String,
    /// Drawing object ID, unique within the document
    pub(crate) doc_pr_id: u32,
    /// Width in EMUs (English Metric Units, 1 inch = 914400 EMUs)
    pub(crate) width_emu: i64,
    /// Height in EMUs
    pub(crate) height_emu: i64,
    /// Alt text
    pub(crate) description: String,
}

impl Drawing {
    pub fn new(rel_id: impl Into<String>, doc_pr_id: u32, width_emu: i64, height_emu: i64) -> Self {
        Self {
            rel_id: rel_id.into(),
            doc_pr_id,
            width_emu,
            height_emu,
            description: String::new(),
        }
    }

    #[inline]
    pub fn rel_id(&self) -> &str {
        &self.rel_id
    }

    /// Width and height in EMUs.
    #[inline]
    pub fn extent(&self) -> (i64, i64) {
        (self.width_emu, self.height_emu)
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Set the image description/alt text.
    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = description.into();
        self
    }

    /// Convert image dimensions from pixels to EMUs (assuming 96 DPI).
    pub fn px_to_emu(px: u32) -> i64 {
        ((px as f64) * 914400.0 / 96.0) as i64
    }

    /// Convert image dimensions from points to EMUs.
    pub fn pt_to_emu(pt: f64) -> i64 {
        (pt * 12700.0) as i64
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        let desc = super::escape_xml(&self.description);
        let rel_id = super::escape_xml(&self.rel_id);
        let (width, height) = (self.width_emu, self.height_emu);
        let id = self.doc_pr_id;

        write!(
            xml,
            r#"<w:drawing><wp:inline distT="0" distB="0" distL="0" distR="0"><wp:extent cx="{}" cy="{}"/><wp:effectExtent l="0" t="0" r="0" b="0"/><wp:docPr id="{}" name="Picture {}" descr="{}"/><wp:cNvGraphicFramePr><a:graphicFrameLocks xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" noChangeAspect="1"/></wp:cNvGraphicFramePr><a:graphic xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main"><a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/picture"><pic:pic xmlns:pic="http://schemas.openxmlformats.org/drawingml/2006/picture"><pic:nvPicPr><pic:cNvPr id="0" name="Picture {}" descr="{}"/><pic:cNvPicPr/></pic:nvPicPr><pic:blipFill><a:blip r:embed="{}"/><a:stretch><a:fillRect/></a:stretch></pic:blipFill><pic:spPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="{}" cy="{}"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom></pic:spPr></pic:pic></a:graphicData></a:graphic></wp:inline></w:drawing>"#,
            width, height, id, id, desc, id, desc, rel_id, width, height
        )?;

        Ok(())
    }
}

/// An image registered with [`Media`], bound to the run that embeds it.
#[derive(Debug, Clone)]
pub struct Image {
    format: ImageFormat,
    run: PictureRun,
}

impl Image {
    /// The picture run that embeds this image.
    #[inline]
    pub fn run(&self) -> &PictureRun {
        &self.run
    }

    #[inline]
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Relationship ID of the image part.
    pub fn rel_id(&self) -> &str {
        self.run.drawing().map(Drawing::rel_id).unwrap_or_default()
    }
}

/// Image bytes waiting to be written as a media part.
#[derive(Debug, Clone)]
pub struct MediaEntry {
    /// Relationship ID from the document part
    pub rel_id: String,
    /// Part file name under `word/media/`
    pub file_name: String,
    pub format: ImageFormat,
    pub data: Vec<u8>,
}

impl MediaEntry {
    /// Content type to declare for the part in `[Content_Types].xml`.
    #[inline]
    pub fn content_type(&self) -> &'static str {
        self.format.mime_type()
    }
}

/// Registry of images embedded in a document.
///
/// Relationship IDs are handed out as `rId1`, `rId2`, ... and drawing IDs
/// count from 1.
#[derive(Debug, Default)]
pub struct Media {
    entries: Vec<MediaEntry>,
}

impl Media {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register image bytes and return an image bound to a picture run.
    ///
    /// # Arguments
    /// * `data` - Image binary data
    /// * `width_emu` - Optional width in EMUs, one inch when omitted
    /// * `height_emu` - Optional height in EMUs, one inch when omitted
    pub fn add_image(
        &mut self,
        data: Vec<u8>,
        width_emu: Option<i64>,
        height_emu: Option<i64>,
    ) -> Result<Image> {
        let format = ImageFormat::detect_from_bytes(&data)
            .ok_or_else(|| OoxmlError::InvalidFormat("Unknown image format".to_string()))?;

        let index = self.entries.len() + 1;
        let rel_id = format!("rId{}", index);
        let file_name = format!("image{}.{}", index, format.extension());

        tracing::debug!(
            rel_id = %rel_id,
            format = format.extension(),
            bytes = data.len(),
            "registered image"
        );

        let drawing = Drawing::new(
            rel_id.clone(),
            index as u32,
            width_emu.unwrap_or(DEFAULT_EXTENT_EMU),
            height_emu.unwrap_or(DEFAULT_EXTENT_EMU),
        );

        self.entries.push(MediaEntry {
            rel_id,
            file_name,
            format,
            data,
        });

        Ok(Image {
            format,
            run: PictureRun::new(drawing),
        })
    }

    /// Register an image read from a file.
    pub fn add_image_from_path(
        &mut self,
        path: impl AsRef<Path>,
        width_emu: Option<i64>,
        height_emu: Option<i64>,
    ) -> Result<Image> {
        let data = std::fs::read(path)?;
        self.add_image(data, width_emu, height_emu)
    }

    /// Registered images in registration order.
    #[inline]
    pub fn entries(&self) -> &[MediaEntry] {
        &self.entries
    }

    /// Look up a registered image by relationship ID.
    pub fn get(&self, rel_id: &str) -> Option<&MediaEntry> {
        self.entries.iter().find(|e| e.rel_id == rel_id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const PNG: [u8; 12] = [
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D,
    ];

    #[test]
    fn test_add_image_assigns_ids() {
        let mut media = Media::new();
        let first = media.add_image(PNG.to_vec(), None, None).unwrap();
        let second = media.add_image(PNG.to_vec(), Some(100), Some(200)).unwrap();

        assert_eq!(first.rel_id(), "rId1");
        assert_eq!(second.rel_id(), "rId2");
        assert_eq!(media.len(), 2);
        let entry = media.get("rId2").unwrap();
        assert_eq!(entry.file_name, "image2.png");
        assert_eq!(entry.content_type(), "image/png");

        let drawing = second.run().drawing().unwrap();
        assert_eq!(drawing.extent(), (100, 200));
        assert_eq!(
            first.run().drawing().unwrap().extent(),
            (DEFAULT_EXTENT_EMU, DEFAULT_EXTENT_EMU)
        );
    }

    #[test]
    fn test_add_image_rejects_unknown_format() {
        let mut media = Media::new();
        let err = media.add_image(b"plain text bytes".to_vec(), None, None);
        assert!(matches!(err, Err(OoxmlError::InvalidFormat(_))));
        assert!(media.is_empty());
    }

    #[test]
    fn test_add_image_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&PNG).unwrap();

        let mut media = Media::new();
        let image = media.add_image_from_path(file.path(), None, None).unwrap();
        assert_eq!(image.format(), ImageFormat::Png);
        assert_eq!(media.entries()[0].data, PNG.to_vec());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut media = Media::new();
        let err = media.add_image_from_path(dir.path().join("missing.png"), None, None);
        assert!(matches!(err, Err(OoxmlError::Io(_))));
    }

    #[test]
    fn test_drawing_xml() {
        let mut drawing = Drawing::new("rId9", 4, Drawing::px_to_emu(96), Drawing::pt_to_emu(72.0));
        drawing.set_description("Logo <1>");

        let mut xml = String::new();
        drawing.to_xml(&mut xml).unwrap();
        assert!(xml.contains(r#"<wp:extent cx="914400" cy="914400"/>"#));
        assert!(xml.contains(r#"r:embed="rId9""#));
        assert!(xml.contains(r#"<wp:docPr id="4" name="Picture 4" descr="Logo &lt;1&gt;"/>"#));
    }
}
