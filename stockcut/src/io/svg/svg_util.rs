use crate::geometry::Rect;
use anyhow::{Result, ensure};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use svg::node::element::Path;
use svg::node::element::path::Data;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgLayoutTheme,
    ///Draw the tolerance margin around every component
    #[serde(default = "default_true")]
    pub draw_tolerance: bool,
    ///Write the dimensions of every component on top of it
    #[serde(default = "default_true")]
    pub draw_labels: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutTheme::default(),
            draw_tolerance: true,
            draw_labels: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f64,
    pub sheet_fill: Color,
    pub component_fill: Color,
    pub tolerance_fill: Color,
    pub tolerance_opac: f64,
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        SvgLayoutTheme::BLUEPRINT
    }
}

impl SvgLayoutTheme {
    pub const BLUEPRINT: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 1.0,
        sheet_fill: Color(0xCC, 0xCC, 0xCC),
        component_fill: Color(0x00, 0x00, 0xFF),
        tolerance_fill: Color(0xFF, 0xA5, 0x00), // ORANGE
        tolerance_opac: 0.2,
    };

    pub const EARTH_TONES: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.0,
        sheet_fill: Color(0xCC, 0x82, 0x4A),
        component_fill: Color(0xFF, 0xC8, 0x79),
        tolerance_fill: Color(0x2D, 0x2D, 0x2D),
        tolerance_opac: 0.3,
    };
}

/// Black or white, whichever reads best on top of `background`
pub fn contrasting_color(background: Color) -> Color {
    match background.relative_luminance() > 0.179 {
        true => Color(0x00, 0x00, 0x00),
        false => Color(0xFF, 0xFF, 0xFF),
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// Relative luminance as defined by WCAG 2.x, between 0 (black) and 1 (white)
    pub fn relative_luminance(&self) -> f64 {
        let channel = |c: u8| {
            let c = c as f64 / 255.0;
            match c <= 0.03928 {
                true => c / 12.92,
                false => ((c + 0.055) / 1.055).powf(2.4),
            }
        };
        0.2126 * channel(self.0) + 0.7152 * channel(self.1) + 0.0722 * channel(self.2)
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        ensure!(
            hex.len() == 6 && hex.is_ascii(),
            "invalid color, expected #RRGGBB: {s:?}"
        );
        let r = u8::from_str_radix(&hex[0..2], 16)?;
        let g = u8::from_str_radix(&hex[2..4], 16)?;
        let b = u8::from_str_radix(&hex[4..6], 16)?;
        Ok(Color(r, g, b))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_str(&s).map_err(serde::de::Error::custom)
    }
}

pub fn rect_data(rect: &Rect) -> Data {
    Data::new()
        .move_to((rect.x_min, rect.y_min))
        .line_to((rect.x_max, rect.y_min))
        .line_to((rect.x_max, rect.y_max))
        .line_to((rect.x_min, rect.y_max))
        .close()
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}
