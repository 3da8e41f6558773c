use crate::traits::XmlEmit;
use crate::types::{Color, Paragraph};

/// header row fill
pub const HEADER_FILL: Color = Color::new(0x03, 0x00, 0x14);
/// zebra fills for even / odd data rows
pub const STRIPE_EVEN: Color = Color::new(0x0A, 0x06, 0x2A);
pub const STRIPE_ODD: Color = Color::new(0x0F, 0x0B, 0x35);
/// inner grid hairline
pub const GRID_COLOR: Color = Color::new(0x1A, 0x16, 0x40);
/// body cell text color
pub const BODY_TEXT: Color = Color::new(0xAA, 0xAA, 0xBB);

/// one shaded cell holding a single paragraph, vertically centered
#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    pub fill: Color,
    pub content: Paragraph,
}

impl TableCell {
    pub fn text(&self) -> String {
        self.content.text()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

/// A centered table whose first row is the header. Accent color drives the
/// outer borders and header text; data rows alternate between the two stripe
/// fills. Invariant, enforced at construction: every row has exactly
/// `columns` cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub accent: Color,
    pub columns: usize,
    pub rows: Vec<TableRow>,
}

impl Table {
    /// total row count, header included
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn cell_text(&self, row: usize, column: usize) -> Option<String> {
        self.rows
            .get(row)
            .and_then(|r| r.cells.get(column))
            .map(TableCell::text)
    }
}

impl XmlEmit for Table {
    fn emit_xml(&self, xml: &mut String) {
        let accent = self.accent.hex();
        let grid = GRID_COLOR.hex();

        xml.push_str("<w:tbl><w:tblPr><w:tblW w:w=\"0\" w:type=\"auto\"/><w:jc w:val=\"center\"/>");
        xml.push_str("<w:tblBorders>");
        xml.push_str(&format!(
            "<w:top w:val=\"single\" w:sz=\"4\" w:space=\"0\" w:color=\"{accent}\"/>"
        ));
        xml.push_str(&format!(
            "<w:bottom w:val=\"single\" w:sz=\"4\" w:space=\"0\" w:color=\"{accent}\"/>"
        ));
        xml.push_str(&format!(
            "<w:insideH w:val=\"single\" w:sz=\"2\" w:space=\"0\" w:color=\"{grid}\"/>"
        ));
        xml.push_str(&format!(
            "<w:insideV w:val=\"single\" w:sz=\"2\" w:space=\"0\" w:color=\"{grid}\"/>"
        ));
        xml.push_str("</w:tblBorders></w:tblPr><w:tblGrid>");

        for _ in 0..self.columns {
            xml.push_str("<w:gridCol/>");
        }
        xml.push_str("</w:tblGrid>");

        for row in &self.rows {
            xml.push_str("<w:tr>");
            for cell in &row.cells {
                xml.push_str("<w:tc><w:tcPr><w:tcW w:w=\"0\" w:type=\"auto\"/>");
                xml.push_str(&format!(
                    "<w:shd w:val=\"clear\" w:color=\"auto\" w:fill=\"{}\"/>",
                    cell.fill.hex()
                ));
                xml.push_str("<w:vAlign w:val=\"center\"/></w:tcPr>");
                cell.content.emit_xml(xml);
                xml.push_str("</w:tc>");
            }
            xml.push_str("</w:tr>");
        }

        xml.push_str("</w:tbl>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Run;

    fn cell(text: &str, fill: Color) -> TableCell {
        let mut content = Paragraph::new();
        content.push_run(Run::new(text));
        TableCell { fill, content }
    }

    #[test]
    fn borders_take_the_accent_color() {
        let table = Table {
            accent: Color::new(0xD4, 0xAF, 0x37),
            columns: 1,
            rows: vec![TableRow {
                cells: vec![cell("Technologie", HEADER_FILL)],
            }],
        };

        let xml = table.to_xml();
        assert!(xml.contains("<w:top w:val=\"single\" w:sz=\"4\" w:space=\"0\" w:color=\"D4AF37\"/>"));
        assert!(xml.contains("<w:insideH w:val=\"single\" w:sz=\"2\" w:space=\"0\" w:color=\"1A1640\"/>"));
        assert!(xml.contains("w:fill=\"030014\""));
    }

    #[test]
    fn cell_text_lookup() {
        let table = Table {
            accent: Color::new(0, 0, 0),
            columns: 2,
            rows: vec![TableRow {
                cells: vec![cell("A", HEADER_FILL), cell("B", HEADER_FILL)],
            }],
        };

        assert_eq!(table.cell_text(0, 1).as_deref(), Some("B"));
        assert_eq!(table.cell_text(1, 0), None);
    }
}
