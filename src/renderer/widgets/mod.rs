use ratatui::Frame;
use ratatui::layout::Rect;

use crate::runtime::View;
use crate::styles::Spacing;
use crate::text_input::TextInputs;

pub type RenderFn = fn(&mut Frame<'_>, Rect, &View, &TextInputs);

pub mod container;
pub mod flex;
pub mod input;
pub mod text;

pub use container::render_container;
pub use flex::render_flex;
pub use input::render_text_input;
pub use text::render_text;

/// Shrinks `area` by `spacing`, never below zero.
pub(crate) fn inset(area: Rect, spacing: Spacing) -> Rect {
    let x = area.x.saturating_add(spacing.left.min(area.width));
    let y = area.y.saturating_add(spacing.top.min(area.height));
    Rect {
        x,
        y,
        width: area.width.saturating_sub(spacing.width()),
        height: area.height.saturating_sub(spacing.height()),
    }
}
