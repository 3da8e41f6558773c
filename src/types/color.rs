use serde::{Deserialize, Serialize};

/// RGB color carried on runs, fills and borders. WordprocessingML wants colors
/// as 6-digit uppercase hex with no leading `#`, which is also the form used in
/// JSON section scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// attribute form, e.g. `D4AF37`
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Color { r, g, b })
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value).ok_or_else(|| format!("not a 6-digit hex color: {value:?}"))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> String {
        color.hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        let gold = Color::new(0xD4, 0xAF, 0x37);
        assert_eq!(gold.hex(), "D4AF37");
        assert_eq!(Color::from_hex("D4AF37"), Some(gold));
        assert_eq!(Color::from_hex("#d4af37"), Some(gold));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(Color::from_hex("D4AF3"), None);
        assert_eq!(Color::from_hex("GGGGGG"), None);
    }

    #[test]
    fn serde_uses_the_hex_string_form() {
        let json = serde_json::to_string(&Color::new(0x03, 0x00, 0x14)).unwrap();
        assert_eq!(json, "\"030014\"");

        let back: Color = serde_json::from_str("\"0A062A\"").unwrap();
        assert_eq!(back, Color::new(0x0A, 0x06, 0x2A));
    }
}
