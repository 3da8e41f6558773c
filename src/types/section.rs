use serde::{Deserialize, Serialize};

use crate::types::{Alignment, Color, Result};

/// # One entry of a content script
///
/// A report is an ordered list of sections — data, not code — fed to
/// `Composer::compose`. The same shape deserializes from JSON, so a whole
/// script can live in a file next to the binary instead of being compiled in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Section {
    Heading {
        text: String,
        level: u8,
    },
    Paragraph {
        spans: Vec<Span>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        align: Option<Alignment>,
    },
    Bullet {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<Color>,
    },
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        accent: Option<Color>,
    },
    Divider,
    PageBreak,
    /// empty paragraph used for vertical whitespace on the cover page
    Spacer,
}

/// Deserialized from the `spans` field: one styled span of a paragraph.
/// Unset fields inherit the body defaults (Calibri 11pt, color 333333).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    /// points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,
}

fn is_false(flag: &bool) -> bool {
    !flag
}

impl Span {
    pub fn new(text: impl Into<String>) -> Self {
        Span {
            text: text.into(),
            font: None,
            size: None,
            color: None,
            bold: false,
            italic: false,
        }
    }

    /// builder function setting the font family
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    /// builder function setting the font size in points
    pub fn with_size(mut self, points: f32) -> Self {
        self.size = Some(points);
        self
    }

    /// builder function setting the text color
    pub fn and_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn and_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn and_italic(mut self) -> Self {
        self.italic = true;
        self
    }
}

/// parses a JSON array of sections into a runnable script
pub fn script_from_json(json: &str) -> Result<Vec<Section>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Error;

    #[test]
    fn script_round_trips_through_json() {
        let script = vec![
            Section::Heading {
                text: "1. Présentation du projet".to_string(),
                level: 1,
            },
            Section::Divider,
            Section::Paragraph {
                spans: vec![Span::new("Une webapp interactive.").with_size(11.0)],
                align: Some(Alignment::Justify),
            },
            Section::Table {
                headers: vec!["Technologie".to_string(), "Usage".to_string()],
                rows: vec![vec!["React 19".to_string(), "Framework UI".to_string()]],
                accent: Some(Color::new(0xD4, 0xAF, 0x37)),
            },
            Section::PageBreak,
        ];

        let json = serde_json::to_string(&script).unwrap();
        let back = script_from_json(&json).unwrap();
        assert_eq!(back.len(), 5);
        assert!(matches!(&back[0], Section::Heading { level: 1, .. }));
        assert!(matches!(&back[4], Section::PageBreak));
    }

    #[test]
    fn unknown_alignment_is_a_script_error() {
        let json = r#"[{"type":"paragraph","spans":[{"text":"x"}],"align":"middle"}]"#;
        let err = script_from_json(json).unwrap_err();
        assert!(matches!(err, Error::Script(_)));
    }

    #[test]
    fn tagged_form_matches_the_documented_shape() {
        let json = r#"[
            {"type":"heading","text":"Sommaire","level":1},
            {"type":"bullet","text":"Hero section","color":"D4AF37"},
            {"type":"divider"}
        ]"#;
        let script = script_from_json(json).unwrap();
        assert_eq!(script.len(), 3);
    }
}
