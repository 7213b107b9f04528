//! Named color themes for the icon.
//!
//! A theme supplies the border stroke and fill plus one color per hexagon
//! slot. Themes are validated on construction, so any `Theme` value covers
//! every slot referenced by [`HEXAGON_SLOTS`](crate::grid::HEXAGON_SLOTS).

use serde::Serialize;

use crate::color::Srgb;
use crate::error::IconError;
use crate::grid::max_color_index;

/// Names of the built-in themes, in listing order.
const THEME_NAMES: &[&str] = &["basalt", "obsidian", "moss", "ember"];

/// A named palette: border colors and an ordered list of hexagon colors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Theme {
    name: String,
    border_color: Srgb,
    border_fill: Srgb,
    hexagon_colors: Vec<Srgb>,
}

impl Theme {
    /// Creates a theme, checking that `hexagon_colors` covers every grid slot.
    pub fn new(
        name: impl Into<String>,
        border_color: Srgb,
        border_fill: Srgb,
        hexagon_colors: Vec<Srgb>,
    ) -> Result<Self, IconError> {
        let name = name.into();
        let required = max_color_index() + 1;
        if hexagon_colors.len() < required {
            return Err(IconError::InvalidTheme(format!(
                "theme '{name}' has {} hexagon colors, needs at least {required}",
                hexagon_colors.len()
            )));
        }
        Ok(Self {
            name,
            border_color,
            border_fill,
            hexagon_colors,
        })
    }

    /// Creates a theme by parsing hex color strings.
    pub fn from_hex(
        name: impl Into<String>,
        border_color: &str,
        border_fill: &str,
        hexagon_colors: &[&str],
    ) -> Result<Self, IconError> {
        let colors: Result<Vec<Srgb>, IconError> =
            hexagon_colors.iter().map(|h| Srgb::from_hex(h)).collect();
        Self::new(
            name,
            Srgb::from_hex(border_color)?,
            Srgb::from_hex(border_fill)?,
            colors?,
        )
    }

    /// Looks up a built-in theme by name.
    pub fn from_name(name: &str) -> Result<Self, IconError> {
        match name {
            "basalt" => Ok(Self::basalt()),
            "obsidian" => Ok(Self::obsidian()),
            "moss" => Ok(Self::moss()),
            "ember" => Ok(Self::ember()),
            _ => Err(IconError::UnknownTheme(name.to_string())),
        }
    }

    /// Returns the names of all built-in themes.
    pub fn list_names() -> &'static [&'static str] {
        THEME_NAMES
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stroke color of the rounded border.
    pub fn border_color(&self) -> Srgb {
        self.border_color
    }

    /// Fill color of the rounded border, i.e. the icon background.
    pub fn border_fill(&self) -> Srgb {
        self.border_fill
    }

    pub fn hexagon_colors(&self) -> &[Srgb] {
        &self.hexagon_colors
    }

    // -- Built-in themes --

    /// Cool grays of columnar basalt. The default theme.
    pub fn basalt() -> Self {
        Self::from_hex(
            "basalt",
            "#1f2124",
            "#34373c",
            &[
                "#5b6770", "#6f7d86", "#83939c", "#4e5a62", "#62717a", "#778891",
            ],
        )
        .expect("basalt theme hex values are valid")
    }

    /// Near-black glass with violet highlights.
    pub fn obsidian() -> Self {
        Self::from_hex(
            "obsidian",
            "#0b0b10",
            "#17161f",
            &[
                "#3d2f5c", "#4f3d75", "#634b8f", "#2f2447", "#463663", "#5a4480",
            ],
        )
        .expect("obsidian theme hex values are valid")
    }

    /// Mossy greens over dark stone.
    pub fn moss() -> Self {
        Self::from_hex(
            "moss",
            "#1c2418",
            "#2a3325",
            &[
                "#4f6b3a", "#5f7f46", "#719453", "#42592f", "#56733f", "#6a8a4d",
            ],
        )
        .expect("moss theme hex values are valid")
    }

    /// Cooling lava: reds and oranges.
    pub fn ember() -> Self {
        Self::from_hex(
            "ember",
            "#241412",
            "#35201c",
            &[
                "#a33a1f", "#c24e24", "#e0672b", "#8a2f1c", "#b04422", "#d65a28",
            ],
        )
        .expect("ember theme hex values are valid")
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::basalt()
    }
}
