use crate::traits::{escape_into, XmlEmit};
use crate::types::{Alignment, Color, Table};

/// character-level formatting for one `Run`; unset fields fall back to the
/// document defaults in `word/styles.xml`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunProps {
    pub font: Option<String>,
    /// half-points, the unit of `w:sz`
    pub size: Option<u32>,
    pub color: Option<Color>,
    pub bold: bool,
    pub italic: bool,
}

impl RunProps {
    fn is_plain(&self) -> bool {
        self.font.is_none() && self.size.is_none() && self.color.is_none() && !self.bold && !self.italic
    }
}

/// a styled contiguous span of text within a paragraph
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub text: String,
    pub props: RunProps,
}

impl Run {
    pub fn new(text: impl Into<String>) -> Self {
        Run {
            text: text.into(),
            props: RunProps::default(),
        }
    }

    /// builder function setting the font family
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.props.font = Some(font.into());
        self
    }

    /// builder function setting the font size in points
    pub fn with_size_pt(mut self, points: f32) -> Self {
        self.props.size = Some((points * 2.0).round() as u32);
        self
    }

    /// builder function setting the text color
    pub fn and_color(mut self, color: Color) -> Self {
        self.props.color = Some(color);
        self
    }

    pub fn and_bold(mut self) -> Self {
        self.props.bold = true;
        self
    }

    pub fn and_italic(mut self) -> Self {
        self.props.italic = true;
        self
    }
}

/// named paragraph styles defined in `word/styles.xml`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphStyle {
    Heading(u8),
    ListBullet,
}

impl ParagraphStyle {
    fn style_id(&self) -> String {
        match self {
            ParagraphStyle::Heading(level) => format!("Heading{level}"),
            ParagraphStyle::ListBullet => "ListBullet".to_string(),
        }
    }
}

/// A block-level paragraph: optional named style, justification, spacing and an
/// ordered list of runs. Fields are public so a freshly appended paragraph can
/// be styled further before the next append.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    pub style: Option<ParagraphStyle>,
    pub align: Option<Alignment>,
    /// twentieths of a point
    pub space_before: Option<u32>,
    /// twentieths of a point
    pub space_after: Option<u32>,
    pub runs: Vec<Run>,
}

impl Paragraph {
    pub fn new() -> Self {
        Paragraph::default()
    }

    /// builder function setting block alignment
    pub fn and_alignment(mut self, align: Alignment) -> Self {
        self.align = Some(align);
        self
    }

    pub fn push_run(&mut self, run: Run) -> &mut Self {
        self.runs.push(run);
        self
    }

    /// concatenated text of all runs, for inspection before serialization
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    fn has_format(&self) -> bool {
        self.style.is_some()
            || self.align.is_some()
            || self.space_before.is_some()
            || self.space_after.is_some()
    }
}

/// ordered block-level element of the document body
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
    PageBreak,
}

impl XmlEmit for Run {
    fn emit_xml(&self, xml: &mut String) {
        xml.push_str("<w:r>");

        if !self.props.is_plain() {
            xml.push_str("<w:rPr>");
            if let Some(font) = &self.props.font {
                xml.push_str("<w:rFonts w:ascii=\"");
                escape_into(xml, font);
                xml.push_str("\" w:hAnsi=\"");
                escape_into(xml, font);
                xml.push_str("\"/>");
            }
            if self.props.bold {
                xml.push_str("<w:b/>");
            }
            if self.props.italic {
                xml.push_str("<w:i/>");
            }
            if let Some(color) = self.props.color {
                xml.push_str("<w:color w:val=\"");
                xml.push_str(&color.hex());
                xml.push_str("\"/>");
            }
            if let Some(size) = self.props.size {
                xml.push_str("<w:sz w:val=\"");
                xml.push_str(&size.to_string());
                xml.push_str("\"/>");
            }
            xml.push_str("</w:rPr>");
        }

        xml.push_str("<w:t xml:space=\"preserve\">");
        escape_into(xml, &self.text);
        xml.push_str("</w:t></w:r>");
    }
}

impl XmlEmit for Paragraph {
    fn emit_xml(&self, xml: &mut String) {
        xml.push_str("<w:p>");

        if self.has_format() {
            xml.push_str("<w:pPr>");
            if let Some(style) = &self.style {
                xml.push_str("<w:pStyle w:val=\"");
                xml.push_str(&style.style_id());
                xml.push_str("\"/>");
                if *style == ParagraphStyle::ListBullet {
                    xml.push_str("<w:numPr><w:ilvl w:val=\"0\"/><w:numId w:val=\"1\"/></w:numPr>");
                }
            }
            if self.space_before.is_some() || self.space_after.is_some() {
                xml.push_str("<w:spacing");
                if let Some(before) = self.space_before {
                    xml.push_str(&format!(" w:before=\"{before}\""));
                }
                if let Some(after) = self.space_after {
                    xml.push_str(&format!(" w:after=\"{after}\""));
                }
                xml.push_str("/>");
            }
            if let Some(align) = self.align {
                xml.push_str("<w:jc w:val=\"");
                xml.push_str(align.word_value());
                xml.push_str("\"/>");
            }
            xml.push_str("</w:pPr>");
        }

        for run in &self.runs {
            run.emit_xml(xml);
        }

        xml.push_str("</w:p>");
    }
}

impl XmlEmit for Block {
    fn emit_xml(&self, xml: &mut String) {
        match self {
            Block::Paragraph(paragraph) => paragraph.emit_xml(xml),
            Block::Table(table) => table.emit_xml(xml),
            Block::PageBreak => xml.push_str("<w:p><w:r><w:br w:type=\"page\"/></w:r></w:p>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Alignment;

    #[test]
    fn run_emits_properties_in_schema_order() {
        let run = Run::new("TIMETRAVEL AGENCY")
            .with_font("Georgia")
            .with_size_pt(36.0)
            .and_color(Color::new(0xD4, 0xAF, 0x37))
            .and_bold();

        let xml = run.to_xml();
        assert_eq!(
            xml,
            "<w:r><w:rPr><w:rFonts w:ascii=\"Georgia\" w:hAnsi=\"Georgia\"/><w:b/>\
             <w:color w:val=\"D4AF37\"/><w:sz w:val=\"72\"/></w:rPr>\
             <w:t xml:space=\"preserve\">TIMETRAVEL AGENCY</w:t></w:r>"
        );
    }

    #[test]
    fn plain_run_has_no_rpr() {
        let xml = Run::new("plain").to_xml();
        assert_eq!(xml, "<w:r><w:t xml:space=\"preserve\">plain</w:t></w:r>");
    }

    #[test]
    fn half_point_sizes_round() {
        let run = Run::new("x").with_size_pt(10.5);
        assert_eq!(run.props.size, Some(21));
    }

    #[test]
    fn paragraph_emits_style_and_alignment() {
        let mut paragraph = Paragraph::new().and_alignment(Alignment::Center);
        paragraph.style = Some(ParagraphStyle::Heading(1));
        paragraph.push_run(Run::new("Sommaire"));

        let xml = paragraph.to_xml();
        assert!(xml.starts_with("<w:p><w:pPr><w:pStyle w:val=\"Heading1\"/>"));
        assert!(xml.contains("<w:jc w:val=\"center\"/>"));
        assert!(xml.contains(">Sommaire</w:t>"));
    }

    #[test]
    fn bullet_paragraph_references_numbering() {
        let mut paragraph = Paragraph::new();
        paragraph.style = Some(ParagraphStyle::ListBullet);
        paragraph.push_run(Run::new("Hero section"));

        let xml = paragraph.to_xml();
        assert!(xml.contains("<w:pStyle w:val=\"ListBullet\"/>"));
        assert!(xml.contains("<w:numId w:val=\"1\"/>"));
    }

    #[test]
    fn page_break_block() {
        assert_eq!(
            Block::PageBreak.to_xml(),
            "<w:p><w:r><w:br w:type=\"page\"/></w:r></w:p>"
        );
    }
}
