use crate::runtime::Color;

/// A color with an alpha channel, produced by [`change_opacity`].
///
/// Terminals cannot blend, so an `Rgba` is composited over a known
/// background with [`Rgba::over`] before it reaches a widget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub base: Color,
    pub alpha: f32,
}

pub fn change_opacity(color: Color, opacity: f32) -> Rgba {
    let alpha = if opacity.is_nan() {
        1.0
    } else {
        opacity.clamp(0.0, 1.0)
    };
    Rgba { base: color, alpha }
}

impl Rgba {
    pub fn over(self, background: Color) -> Color {
        match (rgb_of(self.base), rgb_of(background)) {
            (Some(fg), Some(bg)) => Color::Rgb(
                blend(fg.0, bg.0, self.alpha),
                blend(fg.1, bg.1, self.alpha),
                blend(fg.2, bg.2, self.alpha),
            ),
            _ if self.alpha >= 0.5 => self.base,
            _ => background,
        }
    }
}

fn blend(fg: u8, bg: u8, alpha: f32) -> u8 {
    let mixed = f32::from(fg) * alpha + f32::from(bg) * (1.0 - alpha);
    mixed.round().clamp(0.0, 255.0) as u8
}

/// RGB triple for colors with a well-known value; `None` for indexed/reset.
fn rgb_of(color: Color) -> Option<(u8, u8, u8)> {
    let rgb = match color {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Black => (0, 0, 0),
        Color::Red => (128, 0, 0),
        Color::Green => (0, 128, 0),
        Color::Yellow => (128, 128, 0),
        Color::Blue => (0, 0, 128),
        Color::Magenta => (128, 0, 128),
        Color::Cyan => (0, 128, 128),
        Color::Gray => (192, 192, 192),
        Color::DarkGray => (128, 128, 128),
        Color::LightRed => (255, 0, 0),
        Color::LightGreen => (0, 255, 0),
        Color::LightYellow => (255, 255, 0),
        Color::LightBlue => (0, 0, 255),
        Color::LightMagenta => (255, 0, 255),
        Color::LightCyan => (0, 255, 255),
        Color::White => (255, 255, 255),
        Color::Reset | Color::Indexed(_) => return None,
    };
    Some(rgb)
}
