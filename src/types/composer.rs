use std::path::Path;

use crate::types::{
    table, Alignment, Block, Color, Error, PackageWriter, Paragraph, ParagraphStyle, Result, Run,
    Section, Table, TableCell, TableRow,
};

const DIVIDER_WIDTH: usize = 40;

/// fonts and accent applied to headings, dividers and body defaults
#[derive(Debug, Clone)]
pub struct Theme {
    pub accent: Color,
    pub display_font: String,
    pub body_font: String,
    pub body_color: Color,
    pub bullet_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            accent: Color::new(0xD4, 0xAF, 0x37),
            display_font: "Georgia".to_string(),
            body_font: "Calibri".to_string(),
            body_color: Color::new(0x33, 0x33, 0x33),
            bullet_color: Color::new(0x44, 0x44, 0x44),
        }
    }
}

/// page margins in twentieths of a point
#[derive(Debug, Clone, Copy)]
pub struct PageMargins {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

impl Default for PageMargins {
    /// 2 cm top and bottom, 2.5 cm left and right
    fn default() -> Self {
        PageMargins {
            top: 1134,
            bottom: 1134,
            left: 1417,
            right: 1417,
        }
    }
}

/// options accepted by `add_paragraph` and `add_bullet`
#[derive(Debug, Clone, Default)]
pub struct TextOptions {
    pub bold: bool,
    pub color: Option<Color>,
    /// points
    pub size: Option<f32>,
    pub align: Option<Alignment>,
}

impl TextOptions {
    pub fn new() -> Self {
        TextOptions::default()
    }

    pub fn bolded(mut self) -> Self {
        self.bold = true;
        self
    }

    /// builder function overriding the text color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// builder function overriding the font size in points
    pub fn with_size(mut self, points: f32) -> Self {
        self.size = Some(points);
        self
    }

    /// builder function setting block alignment
    pub fn and_alignment(mut self, align: Alignment) -> Self {
        self.align = Some(align);
        self
    }
}

/// # Main entry point of the library
///
/// Owns the accumulating document model. Every `add_*` call appends one block;
/// `save` serializes the whole model as an OPC package in a single pass. The
/// composition is strictly linear: there is no editing of blocks the composer
/// has moved past, and any error aborts the build.
#[derive(Debug, Default)]
pub struct Composer {
    pub(crate) theme: Theme,
    pub(crate) blocks: Vec<Block>,
    pub(crate) background: Option<Color>,
    pub(crate) margins: PageMargins,
}

impl Composer {
    /// default theme: gold accent, Georgia display font, Calibri body
    pub fn new() -> Self {
        Composer::default()
    }

    /// builder function replacing the default theme
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// the accumulated block list, for inspection before serialization
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Appends a heading styled with the theme accent and display font.
    /// Supported levels are 1 to 3; anything else fails.
    pub fn add_heading(&mut self, text: &str, level: u8) -> Result<&mut Paragraph> {
        if !(1..=3).contains(&level) {
            return Err(Error::UnsupportedHeadingLevel(level));
        }

        // half-point sizes matching the built-in Heading1..3 styles
        let size = match level {
            1 => 32,
            2 => 26,
            _ => 24,
        };

        let mut run = Run::new(text)
            .with_font(self.theme.display_font.clone())
            .and_color(self.theme.accent)
            .and_bold();
        run.props.size = Some(size);

        let mut paragraph = Paragraph::new();
        paragraph.style = Some(ParagraphStyle::Heading(level));
        paragraph.push_run(run);

        Ok(self.push_paragraph(paragraph))
    }

    /// appends a body paragraph; defaults: body font, 11 pt, body color,
    /// 6 pt space after
    pub fn add_paragraph(&mut self, text: &str, options: TextOptions) -> &mut Paragraph {
        let mut run = Run::new(text)
            .with_font(self.theme.body_font.clone())
            .with_size_pt(options.size.unwrap_or(11.0))
            .and_color(options.color.unwrap_or(self.theme.body_color));
        run.props.bold = options.bold;

        let mut paragraph = Paragraph::new();
        paragraph.align = options.align;
        paragraph.space_after = Some(120);
        paragraph.push_run(run);

        self.push_paragraph(paragraph)
    }

    /// appends a paragraph assembled from pre-styled runs (cover page lines
    /// mix several fonts and colors on one line)
    pub fn add_runs(&mut self, runs: Vec<Run>, align: Option<Alignment>) -> &mut Paragraph {
        let mut paragraph = Paragraph::new();
        paragraph.align = align;
        paragraph.runs = runs;

        self.push_paragraph(paragraph)
    }

    /// appends a bulleted paragraph; defaults: body font, 10.5 pt, bullet color
    pub fn add_bullet(&mut self, text: &str, options: TextOptions) -> &mut Paragraph {
        let mut run = Run::new(text)
            .with_font(self.theme.body_font.clone())
            .with_size_pt(options.size.unwrap_or(10.5))
            .and_color(options.color.unwrap_or(self.theme.bullet_color));
        run.props.bold = options.bold;

        let mut paragraph = Paragraph::new();
        paragraph.style = Some(ParagraphStyle::ListBullet);
        paragraph.align = options.align;
        paragraph.push_run(run);

        self.push_paragraph(paragraph)
    }

    /// Appends a centered table: shaded header row, zebra-striped body,
    /// borders derived from `accent`. Every row must have exactly as many
    /// cells as the header.
    pub fn add_table(
        &mut self,
        headers: &[String],
        rows: &[Vec<String>],
        accent: Color,
    ) -> Result<&mut Table> {
        let columns = headers.len();
        for (index, row) in rows.iter().enumerate() {
            if row.len() != columns {
                return Err(Error::MalformedTable {
                    row: index,
                    expected: columns,
                    found: row.len(),
                });
            }
        }

        let header_row = TableRow {
            cells: headers
                .iter()
                .map(|text| {
                    let mut content = Paragraph::new().and_alignment(Alignment::Center);
                    content.push_run(
                        Run::new(text)
                            .with_font(self.theme.display_font.clone())
                            .with_size_pt(10.0)
                            .and_color(accent)
                            .and_bold(),
                    );
                    TableCell {
                        fill: table::HEADER_FILL,
                        content,
                    }
                })
                .collect(),
        };

        let mut table_rows = vec![header_row];
        for (index, row) in rows.iter().enumerate() {
            let fill = if index % 2 == 0 {
                table::STRIPE_EVEN
            } else {
                table::STRIPE_ODD
            };
            table_rows.push(TableRow {
                cells: row
                    .iter()
                    .map(|text| {
                        let mut content = Paragraph::new();
                        content.push_run(
                            Run::new(text)
                                .with_font(self.theme.body_font.clone())
                                .with_size_pt(9.5)
                                .and_color(table::BODY_TEXT),
                        );
                        TableCell { fill, content }
                    })
                    .collect(),
            });
        }

        self.blocks.push(Block::Table(Table {
            accent,
            columns,
            rows: table_rows,
        }));

        match self.blocks.last_mut() {
            Some(Block::Table(table)) => Ok(table),
            _ => unreachable!("a table was just pushed"),
        }
    }

    /// appends a centered horizontal rule: 40 box-drawing dashes in the
    /// accent color
    pub fn add_section_divider(&mut self) -> &mut Paragraph {
        let mut paragraph = Paragraph::new().and_alignment(Alignment::Center);
        paragraph.space_before = Some(240);
        paragraph.space_after = Some(240);
        paragraph.push_run(
            Run::new("\u{2500}".repeat(DIVIDER_WIDTH))
                .with_size_pt(8.0)
                .and_color(self.theme.accent),
        );

        self.push_paragraph(paragraph)
    }

    /// appends a hard page break
    pub fn add_page_break(&mut self) {
        self.blocks.push(Block::PageBreak);
    }

    /// appends an empty paragraph (vertical whitespace)
    pub fn add_spacer(&mut self) {
        self.blocks.push(Block::Paragraph(Paragraph::new()));
    }

    /// document-wide background color; last call wins
    pub fn set_page_background(&mut self, color: Color) {
        self.background = Some(color);
    }

    /// page margins in centimeters
    pub fn set_margins(&mut self, top_cm: f32, bottom_cm: f32, left_cm: f32, right_cm: f32) {
        let twips = |cm: f32| (cm * 1440.0 / 2.54).round() as u32;
        self.margins = PageMargins {
            top: twips(top_cm),
            bottom: twips(bottom_cm),
            left: twips(left_cm),
            right: twips(right_cm),
        };
    }

    /// renders one section descriptor into the model
    pub fn apply(&mut self, section: &Section) -> Result<()> {
        match section {
            Section::Heading { text, level } => {
                self.add_heading(text, *level)?;
            }
            Section::Paragraph { spans, align } => {
                let runs = spans
                    .iter()
                    .map(|span| {
                        let font = span
                            .font
                            .clone()
                            .unwrap_or_else(|| self.theme.body_font.clone());
                        let mut run = Run::new(span.text.clone())
                            .with_font(font)
                            .with_size_pt(span.size.unwrap_or(11.0))
                            .and_color(span.color.unwrap_or(self.theme.body_color));
                        run.props.bold = span.bold;
                        run.props.italic = span.italic;
                        run
                    })
                    .collect();
                self.add_runs(runs, *align);
            }
            Section::Bullet { text, color } => {
                let mut options = TextOptions::new();
                options.color = *color;
                self.add_bullet(text, options);
            }
            Section::Table {
                headers,
                rows,
                accent,
            } => {
                self.add_table(headers, rows, accent.unwrap_or(self.theme.accent))?;
            }
            Section::Divider => {
                self.add_section_divider();
            }
            Section::PageBreak => self.add_page_break(),
            Section::Spacer => self.add_spacer(),
        }

        Ok(())
    }

    /// runs a whole content script through `apply`, in order
    pub fn compose(&mut self, sections: &[Section]) -> Result<()> {
        for section in sections {
            self.apply(section)?;
        }
        log::debug!(
            "composed {} sections into {} blocks",
            sections.len(),
            self.blocks.len()
        );

        Ok(())
    }

    /// Serializes the model and writes the package in one shot. The package is
    /// assembled fully in memory first, so a failing path leaves no partial
    /// file behind.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = PackageWriter::new(self).finish()?;
        std::fs::write(path, bytes)?;
        log::info!("wrote {} blocks to {}", self.blocks.len(), path.display());

        Ok(())
    }

    fn push_paragraph(&mut self, paragraph: Paragraph) -> &mut Paragraph {
        self.blocks.push(Block::Paragraph(paragraph));
        match self.blocks.last_mut() {
            Some(Block::Paragraph(paragraph)) => paragraph,
            _ => unreachable!("a paragraph was just pushed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_levels_outside_one_to_three_fail() {
        let mut composer = Composer::new();
        assert!(matches!(
            composer.add_heading("Sommaire", 0),
            Err(Error::UnsupportedHeadingLevel(0))
        ));
        assert!(matches!(
            composer.add_heading("Sommaire", 4),
            Err(Error::UnsupportedHeadingLevel(4))
        ));
        assert!(composer.blocks().is_empty());
    }

    #[test]
    fn heading_takes_accent_and_display_font() {
        let mut composer = Composer::new();
        composer.add_heading("1. Présentation", 1).unwrap();

        let Block::Paragraph(paragraph) = &composer.blocks()[0] else {
            panic!("expected a paragraph block");
        };
        assert_eq!(paragraph.style, Some(ParagraphStyle::Heading(1)));
        let run = &paragraph.runs[0];
        assert_eq!(run.props.font.as_deref(), Some("Georgia"));
        assert_eq!(run.props.color, Some(Color::new(0xD4, 0xAF, 0x37)));
        assert!(run.props.bold);
    }

    #[test]
    fn paragraph_defaults_apply_when_options_omitted() {
        let mut composer = Composer::new();
        composer.add_paragraph("Une webapp interactive.", TextOptions::new());

        let Block::Paragraph(paragraph) = &composer.blocks()[0] else {
            panic!("expected a paragraph block");
        };
        let run = &paragraph.runs[0];
        assert_eq!(run.props.font.as_deref(), Some("Calibri"));
        assert_eq!(run.props.size, Some(22));
        assert_eq!(run.props.color, Some(Color::new(0x33, 0x33, 0x33)));
        assert!(!run.props.bold);
        assert_eq!(paragraph.space_after, Some(120));
    }

    #[test]
    fn short_table_row_is_rejected_at_its_index() {
        let mut composer = Composer::new();
        let headers = vec!["A".to_string(), "B".to_string()];
        let rows = vec![
            vec!["1".to_string(), "2".to_string()],
            vec!["3".to_string()],
        ];

        let err = composer
            .add_table(&headers, &rows, Color::new(0, 0, 0))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedTable {
                row: 1,
                expected: 2,
                found: 1,
            }
        ));
        // nothing is appended on failure
        assert!(composer.blocks().is_empty());
    }

    #[test]
    fn table_header_plus_zebra_rows() {
        let mut composer = Composer::new();
        let headers = vec!["A".to_string(), "B".to_string()];
        let rows = vec![
            vec!["1".to_string(), "2".to_string()],
            vec!["3".to_string(), "4".to_string()],
        ];

        let created = composer
            .add_table(&headers, &rows, Color::new(0xD4, 0xAF, 0x37))
            .unwrap();
        assert_eq!(created.row_count(), 3);
        assert_eq!(created.columns, 2);
        assert_eq!(created.rows[0].cells[0].fill, table::HEADER_FILL);
        assert_eq!(created.rows[1].cells[0].fill, table::STRIPE_EVEN);
        assert_eq!(created.rows[2].cells[0].fill, table::STRIPE_ODD);
        assert_eq!(created.cell_text(2, 1).as_deref(), Some("4"));
    }

    #[test]
    fn divider_is_forty_dashes_centered() {
        let mut composer = Composer::new();
        composer.add_section_divider();

        let Block::Paragraph(paragraph) = &composer.blocks()[0] else {
            panic!("expected a paragraph block");
        };
        assert_eq!(paragraph.align, Some(Alignment::Center));
        assert_eq!(paragraph.text().chars().count(), 40);
        assert!(paragraph.text().chars().all(|c| c == '\u{2500}'));
    }

    #[test]
    fn background_last_call_wins() {
        let mut composer = Composer::new();
        composer.set_page_background(Color::new(0x03, 0x00, 0x14));
        composer.set_page_background(Color::new(0x0A, 0x06, 0x2A));
        assert_eq!(composer.background, Some(Color::new(0x0A, 0x06, 0x2A)));
    }

    #[test]
    fn margins_convert_from_centimeters() {
        let mut composer = Composer::new();
        composer.set_margins(2.0, 2.0, 2.5, 2.5);
        assert_eq!(composer.margins.top, 1134);
        assert_eq!(composer.margins.left, 1417);
    }

    #[test]
    fn returned_heading_can_be_styled_further() {
        let mut composer = Composer::new();
        let heading = composer.add_heading("Sommaire", 1).unwrap();
        heading.align = Some(Alignment::Center);

        let Block::Paragraph(paragraph) = &composer.blocks()[0] else {
            panic!("expected a paragraph block");
        };
        assert_eq!(paragraph.align, Some(Alignment::Center));
    }

    #[test]
    fn compose_preserves_script_order() {
        use crate::types::{Section, Span};

        let script = vec![
            Section::Heading {
                text: "Stack technique".to_string(),
                level: 1,
            },
            Section::Divider,
            Section::Paragraph {
                spans: vec![Span::new("corps")],
                align: None,
            },
            Section::PageBreak,
        ];

        let mut composer = Composer::new();
        composer.compose(&script).unwrap();

        assert_eq!(composer.blocks().len(), 4);
        assert!(matches!(composer.blocks()[3], Block::PageBreak));
    }
}
