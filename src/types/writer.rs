use std::io::{Cursor, Write};

use chrono::{SecondsFormat, Utc};
use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

use crate::traits::XmlEmit;
use crate::types::{Composer, Result};

const XML_DECL: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\r\n";
const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// A4 in twentieths of a point
const PAGE_WIDTH: u32 = 11906;
const PAGE_HEIGHT: u32 = 16838;

/// # The serialization engine
///
/// Borrows a finished `Composer`, emits WordprocessingML for its block list and
/// assembles the fixed set of OPC parts around it. Everything is built in
/// memory; the caller writes the returned bytes to disk in one operation so a
/// failed save never leaves a truncated package.
pub struct PackageWriter<'a> {
    composer: &'a Composer,
}

impl<'a> PackageWriter<'a> {
    pub fn new(composer: &'a Composer) -> Self {
        PackageWriter { composer }
    }

    /// the `word/document.xml` part: background, body blocks, section properties
    pub fn document_xml(&self) -> String {
        let mut xml = String::with_capacity(16 * 1024);
        xml.push_str(XML_DECL);
        xml.push_str(&format!("<w:document xmlns:w=\"{W_NS}\">"));

        if let Some(background) = self.composer.background {
            xml.push_str(&format!(
                "<w:background w:color=\"{}\"/>",
                background.hex()
            ));
        }

        xml.push_str("<w:body>");
        for block in &self.composer.blocks {
            block.emit_xml(&mut xml);
        }

        let margins = self.composer.margins;
        xml.push_str(&format!(
            "<w:sectPr><w:pgSz w:w=\"{PAGE_WIDTH}\" w:h=\"{PAGE_HEIGHT}\"/>\
             <w:pgMar w:top=\"{}\" w:right=\"{}\" w:bottom=\"{}\" w:left=\"{}\" \
             w:header=\"708\" w:footer=\"708\" w:gutter=\"0\"/></w:sectPr>",
            margins.top, margins.right, margins.bottom, margins.left
        ));
        xml.push_str("</w:body></w:document>");

        xml
    }

    /// zips every part into the final `.docx` byte buffer
    pub fn finish(&self) -> Result<Vec<u8>> {
        let mut archive = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        let document = self.document_xml();
        let core = self.core_properties_xml();
        let settings = self.settings_xml();

        let parts: [(&str, &str); 9] = [
            ("[Content_Types].xml", CONTENT_TYPES),
            ("_rels/.rels", PACKAGE_RELS),
            ("word/document.xml", &document),
            ("word/_rels/document.xml.rels", DOCUMENT_RELS),
            ("word/styles.xml", STYLES),
            ("word/numbering.xml", NUMBERING),
            ("word/settings.xml", &settings),
            ("docProps/core.xml", &core),
            ("docProps/app.xml", APP_PROPERTIES),
        ];

        for (name, content) in parts {
            archive.start_file(name, options)?;
            archive.write_all(content.as_bytes())?;
        }

        let cursor = archive.finish()?;
        Ok(cursor.into_inner())
    }

    fn core_properties_xml(&self) -> String {
        let stamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        format!(
            "{XML_DECL}<cp:coreProperties \
             xmlns:cp=\"http://schemas.openxmlformats.org/package/2006/metadata/core-properties\" \
             xmlns:dc=\"http://purl.org/dc/elements/1.1/\" \
             xmlns:dcterms=\"http://purl.org/dc/terms/\" \
             xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\">\
             <dc:creator>docweave</dc:creator>\
             <cp:lastModifiedBy>docweave</cp:lastModifiedBy>\
             <dcterms:created xsi:type=\"dcterms:W3CDTF\">{stamp}</dcterms:created>\
             <dcterms:modified xsi:type=\"dcterms:W3CDTF\">{stamp}</dcterms:modified>\
             </cp:coreProperties>"
        )
    }

    fn settings_xml(&self) -> String {
        // Word only paints w:background when the shape flag is on
        let background_shape = if self.composer.background.is_some() {
            "<w:displayBackgroundShape/>"
        } else {
            ""
        };
        format!("{XML_DECL}<w:settings xmlns:w=\"{W_NS}\">{background_shape}</w:settings>")
    }
}

const CONTENT_TYPES: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\r\n",
    "<Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">",
    "<Default Extension=\"rels\" ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>",
    "<Default Extension=\"xml\" ContentType=\"application/xml\"/>",
    "<Override PartName=\"/word/document.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml\"/>",
    "<Override PartName=\"/word/styles.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml\"/>",
    "<Override PartName=\"/word/numbering.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml\"/>",
    "<Override PartName=\"/word/settings.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.settings+xml\"/>",
    "<Override PartName=\"/docProps/core.xml\" ContentType=\"application/vnd.openxmlformats-package.core-properties+xml\"/>",
    "<Override PartName=\"/docProps/app.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.extended-properties+xml\"/>",
    "</Types>"
);

const PACKAGE_RELS: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\r\n",
    "<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">",
    "<Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument\" Target=\"word/document.xml\"/>",
    "<Relationship Id=\"rId2\" Type=\"http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties\" Target=\"docProps/core.xml\"/>",
    "<Relationship Id=\"rId3\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties\" Target=\"docProps/app.xml\"/>",
    "</Relationships>"
);

const DOCUMENT_RELS: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\r\n",
    "<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">",
    "<Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles\" Target=\"styles.xml\"/>",
    "<Relationship Id=\"rId2\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering\" Target=\"numbering.xml\"/>",
    "<Relationship Id=\"rId3\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/settings\" Target=\"settings.xml\"/>",
    "</Relationships>"
);

const STYLES: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\r\n",
    "<w:styles xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">",
    "<w:docDefaults><w:rPrDefault><w:rPr>",
    "<w:rFonts w:ascii=\"Calibri\" w:hAnsi=\"Calibri\"/><w:sz w:val=\"22\"/>",
    "</w:rPr></w:rPrDefault><w:pPrDefault/></w:docDefaults>",
    "<w:style w:type=\"paragraph\" w:default=\"1\" w:styleId=\"Normal\"><w:name w:val=\"Normal\"/></w:style>",
    "<w:style w:type=\"paragraph\" w:styleId=\"Heading1\"><w:name w:val=\"heading 1\"/><w:basedOn w:val=\"Normal\"/>",
    "<w:pPr><w:keepNext/><w:spacing w:before=\"240\" w:after=\"120\"/><w:outlineLvl w:val=\"0\"/></w:pPr>",
    "<w:rPr><w:b/><w:sz w:val=\"32\"/></w:rPr></w:style>",
    "<w:style w:type=\"paragraph\" w:styleId=\"Heading2\"><w:name w:val=\"heading 2\"/><w:basedOn w:val=\"Normal\"/>",
    "<w:pPr><w:keepNext/><w:spacing w:before=\"200\" w:after=\"100\"/><w:outlineLvl w:val=\"1\"/></w:pPr>",
    "<w:rPr><w:b/><w:sz w:val=\"26\"/></w:rPr></w:style>",
    "<w:style w:type=\"paragraph\" w:styleId=\"Heading3\"><w:name w:val=\"heading 3\"/><w:basedOn w:val=\"Normal\"/>",
    "<w:pPr><w:keepNext/><w:spacing w:before=\"200\" w:after=\"100\"/><w:outlineLvl w:val=\"2\"/></w:pPr>",
    "<w:rPr><w:b/><w:sz w:val=\"24\"/></w:rPr></w:style>",
    "<w:style w:type=\"paragraph\" w:styleId=\"ListBullet\"><w:name w:val=\"List Bullet\"/><w:basedOn w:val=\"Normal\"/>",
    "<w:pPr><w:numPr><w:numId w:val=\"1\"/></w:numPr></w:pPr></w:style>",
    "</w:styles>"
);

const NUMBERING: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\r\n",
    "<w:numbering xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">",
    "<w:abstractNum w:abstractNumId=\"0\"><w:lvl w:ilvl=\"0\">",
    "<w:start w:val=\"1\"/><w:numFmt w:val=\"bullet\"/><w:lvlText w:val=\"\u{2022}\"/><w:lvlJc w:val=\"left\"/>",
    "<w:pPr><w:ind w:left=\"720\" w:hanging=\"360\"/></w:pPr>",
    "</w:lvl></w:abstractNum>",
    "<w:num w:numId=\"1\"><w:abstractNumId w:val=\"0\"/></w:num>",
    "</w:numbering>"
);

const APP_PROPERTIES: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\r\n",
    "<Properties xmlns=\"http://schemas.openxmlformats.org/officeDocument/2006/extended-properties\">",
    "<Application>docweave</Application>",
    "</Properties>"
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, TextOptions};

    #[test]
    fn document_part_orders_blocks_as_appended() {
        let mut composer = Composer::new();
        composer.add_heading("Sommaire", 1).unwrap();
        composer.add_paragraph("premier", TextOptions::new());
        composer.add_page_break();
        composer.add_paragraph("second", TextOptions::new());

        let xml = PackageWriter::new(&composer).document_xml();
        let sommaire = xml.find("Sommaire").unwrap();
        let premier = xml.find("premier").unwrap();
        let saut = xml.find("<w:br w:type=\"page\"/>").unwrap();
        let second = xml.find("second").unwrap();
        assert!(sommaire < premier && premier < saut && saut < second);
    }

    #[test]
    fn background_is_absent_until_set() {
        let mut composer = Composer::new();
        let writer = PackageWriter::new(&composer);
        assert!(!writer.document_xml().contains("<w:background"));
        assert!(!writer.settings_xml().contains("displayBackgroundShape"));

        composer.set_page_background(Color::new(0x03, 0x00, 0x14));
        let writer = PackageWriter::new(&composer);
        assert!(writer
            .document_xml()
            .contains("<w:background w:color=\"030014\"/>"));
        assert!(writer.settings_xml().contains("<w:displayBackgroundShape/>"));
    }

    #[test]
    fn default_margins_match_the_report_layout() {
        let composer = Composer::new();
        let xml = PackageWriter::new(&composer).document_xml();
        assert!(xml.contains("w:top=\"1134\""));
        assert!(xml.contains("w:left=\"1417\""));
    }

    #[test]
    fn finish_yields_a_zip_package() {
        let mut composer = Composer::new();
        composer.add_paragraph("contenu", TextOptions::new());

        let bytes = PackageWriter::new(&composer).finish().unwrap();
        // local file header magic
        assert_eq!(&bytes[0..4], b"PK\x03\x04");

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        assert!(names.contains(&"[Content_Types].xml".to_string()));
        assert!(names.contains(&"word/document.xml".to_string()));
        assert!(names.contains(&"word/styles.xml".to_string()));
    }
}
