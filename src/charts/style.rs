// src/charts/style.rs

use plotters::style::RGBColor;
use serde::{Deserialize, Serialize};

/// Named series colours accepted in the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesColor {
    Blue,
    Green,
    Red,
    Orange,
    Purple,
    Cyan,
    Magenta,
    Black,
}

impl SeriesColor {
    /// Palette used when a chart has more series than configured colours
    pub const PALETTE: [SeriesColor; 8] = [
        SeriesColor::Blue,
        SeriesColor::Orange,
        SeriesColor::Green,
        SeriesColor::Red,
        SeriesColor::Purple,
        SeriesColor::Cyan,
        SeriesColor::Magenta,
        SeriesColor::Black,
    ];

    pub fn nth(index: usize) -> Self {
        Self::PALETTE[index % Self::PALETTE.len()]
    }

    pub fn rgb(self) -> RGBColor {
        match self {
            SeriesColor::Blue => RGBColor(31, 119, 180),
            SeriesColor::Green => RGBColor(44, 160, 44),
            SeriesColor::Red => RGBColor(214, 39, 40),
            SeriesColor::Orange => RGBColor(255, 127, 14),
            SeriesColor::Purple => RGBColor(148, 103, 189),
            SeriesColor::Cyan => RGBColor(23, 190, 207),
            SeriesColor::Magenta => RGBColor(227, 119, 194),
            SeriesColor::Black => RGBColor(0, 0, 0),
        }
    }
}

/// Line pattern. Config files may use the short matplotlib forms (`-`, `--`, `-.`, `:`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    #[default]
    #[serde(alias = "-")]
    Solid,
    #[serde(alias = "--")]
    Dashed,
    #[serde(alias = "-.")]
    DashDot,
    #[serde(alias = ":")]
    Dotted,
}

impl LineStyle {
    /// Style for a kernel variant, keyed on the mode name suffix
    pub fn for_mode(mode: &str) -> Self {
        if mode.ends_with("Ifs") {
            LineStyle::DashDot
        } else if mode.ends_with("2D") {
            LineStyle::Dotted
        } else {
            LineStyle::Solid
        }
    }

    /// Dash length and gap in pixels, `None` for a solid line
    pub fn dash_pattern(self) -> Option<(u32, u32)> {
        match self {
            LineStyle::Solid => None,
            LineStyle::Dashed => Some((12, 6)),
            LineStyle::DashDot => Some((8, 4)),
            LineStyle::Dotted => Some((2, 4)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_style_for_mode() {
        assert_eq!(LineStyle::for_mode("CUDA"), LineStyle::Solid);
        assert_eq!(LineStyle::for_mode("OpenCL Ifs"), LineStyle::DashDot);
        assert_eq!(LineStyle::for_mode("CUDA 2D"), LineStyle::Dotted);
    }

    #[test]
    fn test_short_line_style_names() {
        let styles: Vec<LineStyle> = serde_json::from_str(r#"["-", "--", "-.", ":", "dash_dot"]"#).unwrap();
        assert_eq!(
            styles,
            vec![
                LineStyle::Solid,
                LineStyle::Dashed,
                LineStyle::DashDot,
                LineStyle::Dotted,
                LineStyle::DashDot
            ]
        );
    }

    #[test]
    fn test_palette_wraps() {
        assert_eq!(SeriesColor::nth(0), SeriesColor::Blue);
        assert_eq!(SeriesColor::nth(8), SeriesColor::Blue);
    }
}
