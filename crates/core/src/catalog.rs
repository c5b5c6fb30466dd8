//! Theme and font catalogs offered by the page editor.
//!
//! These lists drive the editor's pickers only. Stored customizations are not
//! checked against them; any theme or font name is passed through to the
//! presentation layer verbatim.

use serde::Serialize;

/// Themes offered by the editor, in display order.
pub const THEMES: &[&str] = &[
    "light",
    "dark",
    "cupcake",
    "bumblebee",
    "emerald",
    "corporate",
    "synthwave",
    "retro",
    "cyberpunk",
    "valentine",
    "halloween",
    "garden",
    "forest",
    "aqua",
    "lofi",
    "pastel",
    "fantasy",
    "wireframe",
    "black",
    "luxury",
    "dracula",
    "cmyk",
    "autumn",
    "business",
    "acid",
    "lemonade",
    "night",
    "coffee",
    "winter",
    "dim",
];

/// Fonts offered by the editor, in display order.
pub const FONTS: &[&str] = &[
    "Roboto",
    "Open Sans",
    "Lato",
    "Montserrat",
    "Raleway",
    "Poppins",
    "Oswald",
    "Source Sans Pro",
    "Slabo 27px",
    "Merriweather",
];

/// Catalog payload served to the editor.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorOptions {
    pub themes: &'static [&'static str],
    pub fonts: &'static [&'static str],
    pub default_theme: &'static str,
    pub default_font: &'static str,
}

/// The editor catalogs together with the defaults applied on first save.
pub fn editor_options() -> EditorOptions {
    EditorOptions {
        themes: THEMES,
        fonts: FONTS,
        default_theme: crate::landing_page::DEFAULT_THEME,
        default_font: crate::landing_page::DEFAULT_FONT,
    }
}
