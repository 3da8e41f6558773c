use serde::{Deserialize, Serialize};

/// Paragraph justification. Deserialized from the `align` field of JSON section
/// scripts; an unknown name is rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    /// the `w:jc` attribute value ("justify" is spelled `both` in the schema)
    pub fn word_value(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "both",
        }
    }
}
