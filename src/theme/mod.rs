//! Theme color roles and the style factories that derive widget styles
//! from them.

mod color;
mod sheet;
#[cfg(test)]
mod tests;

use crate::runtime::Color;
use crate::styles::{ComputedStyle, StyleQuery, Stylesheet};

pub use color::{Rgba, change_opacity};
pub use sheet::{ThemedStyleSheet, make_style_sheet_from_theme};

pub const DEFAULT_THEME: &str = "denim";

/// Semantic color roles shared by every themed component.
///
/// Components receive the theme as `Arc<Theme>`; the `Arc` identity is what
/// themed stylesheets memoize on, so a host should only build a new one when
/// the colors actually change.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: String,
    pub sidebar_bg: Color,
    pub sidebar_text: Color,
    pub center_channel_bg: Color,
    pub center_channel_color: Color,
    pub link_color: Color,
    pub button_bg: Color,
    pub button_color: Color,
    pub error_text_color: Color,
}

impl Theme {
    pub fn denim() -> Self {
        Self {
            name: "denim".into(),
            sidebar_bg: Color::Rgb(0x1e, 0x32, 0x5c),
            sidebar_text: Color::Rgb(0xff, 0xff, 0xff),
            center_channel_bg: Color::Rgb(0xff, 0xff, 0xff),
            center_channel_color: Color::Rgb(0x3f, 0x43, 0x50),
            link_color: Color::Rgb(0x38, 0x6f, 0xe5),
            button_bg: Color::Rgb(0x1c, 0x58, 0xd9),
            button_color: Color::Rgb(0xff, 0xff, 0xff),
            error_text_color: Color::Rgb(0xd2, 0x4b, 0x4e),
        }
    }

    pub fn onyx() -> Self {
        Self {
            name: "onyx".into(),
            sidebar_bg: Color::Rgb(0x20, 0x22, 0x28),
            sidebar_text: Color::Rgb(0xff, 0xff, 0xff),
            center_channel_bg: Color::Rgb(0x19, 0x1b, 0x1f),
            center_channel_color: Color::Rgb(0xe3, 0xe4, 0xe8),
            link_color: Color::Rgb(0x5d, 0x89, 0xea),
            button_bg: Color::Rgb(0x4a, 0x7c, 0xe8),
            button_color: Color::Rgb(0xff, 0xff, 0xff),
            error_text_color: Color::Rgb(0xda, 0x6c, 0x6e),
        }
    }

    pub fn preset(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "denim" => Some(Self::denim()),
            "onyx" => Some(Self::onyx()),
            _ => None,
        }
    }

    /// Builds the theme called `name` from a stylesheet.
    ///
    /// Starts from the matching preset (denim when there is none), then
    /// applies `:root` custom properties and finally the `theme#<name>` rule.
    pub fn from_stylesheet(sheet: &Stylesheet, name: &str) -> Self {
        let mut theme = Self::preset(name).unwrap_or_else(|| Self {
            name: name.to_string(),
            ..Self::denim()
        });
        let style = sheet.query(StyleQuery::element("theme").with_id(name));
        theme.apply(&style);
        theme
    }

    fn apply(&mut self, style: &ComputedStyle) {
        let roles: [(&str, &mut Color); 8] = [
            ("--sidebar-bg", &mut self.sidebar_bg),
            ("--sidebar-text", &mut self.sidebar_text),
            ("--center-channel-bg", &mut self.center_channel_bg),
            ("--center-channel-color", &mut self.center_channel_color),
            ("--link-color", &mut self.link_color),
            ("--button-bg", &mut self.button_bg),
            ("--button-color", &mut self.button_color),
            ("--error-text-color", &mut self.error_text_color),
        ];
        for (property, slot) in roles {
            if let Some(color) = style.color(property) {
                *slot = color;
            }
        }
    }

    /// `change_opacity` against this theme's center channel background.
    pub fn faded(&self, color: Color, opacity: f32) -> Color {
        change_opacity(color, opacity).over(self.center_channel_bg)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::denim()
    }
}
