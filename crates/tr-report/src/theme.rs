//! Report color schemes.

use printpdf::{Color, Rgb};

/// Colors for the banner chrome and the record table.
///
/// The composer is parameterized over this one struct; the older and the
/// current report styles are variants of it rather than separate code
/// paths.
#[derive(Debug, Clone)]
pub struct ReportTheme {
    pub name: &'static str,
    pub banner: (f32, f32, f32),
    pub banner_text: (f32, f32, f32),
    pub table_header_bg: (f32, f32, f32),
    pub table_header_text: (f32, f32, f32),
    pub row_shade: (f32, f32, f32),
}

impl ReportTheme {
    /// Current style: dark blue bands, whitesmoke header text, light grey
    /// body rows.
    pub fn standard() -> Self {
        Self {
            name: "standard",
            banner: (0.0, 0.0, 0.545),
            banner_text: (1.0, 1.0, 1.0),
            table_header_bg: (0.0, 0.0, 0.545),
            table_header_text: (0.96, 0.96, 0.96),
            row_shade: (0.827, 0.827, 0.827),
        }
    }

    /// Older style with grey bands, kept selectable for continuity with
    /// reports generated before the restyle.
    pub fn legacy() -> Self {
        Self {
            name: "legacy",
            banner: (0.33, 0.33, 0.33),
            banner_text: (1.0, 1.0, 1.0),
            table_header_bg: (0.33, 0.33, 0.33),
            table_header_text: (1.0, 1.0, 1.0),
            row_shade: (0.9, 0.9, 0.9),
        }
    }

    /// Look up a theme by config name. Unknown names fall back to the
    /// standard style.
    pub fn from_name(name: &str) -> Self {
        match name {
            "legacy" => Self::legacy(),
            _ => Self::standard(),
        }
    }

    pub(crate) fn color((r, g, b): (f32, f32, f32)) -> Color {
        Color::Rgb(Rgb::new(r, g, b, None))
    }

    pub(crate) fn black() -> Color {
        Self::color((0.0, 0.0, 0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_resolves_known_themes() {
        assert_eq!(ReportTheme::from_name("standard").name, "standard");
        assert_eq!(ReportTheme::from_name("legacy").name, "legacy");
    }

    #[test]
    fn unknown_name_falls_back_to_standard() {
        assert_eq!(ReportTheme::from_name("neon").name, "standard");
    }
}
