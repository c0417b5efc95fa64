use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::runtime::{Color, TextInputView};
use crate::text_input::{Hitbox, TextInputs};

use super::inset;
use super::text::text_style;

pub fn render_text_input(
    frame: &mut Frame<'_>,
    area: Rect,
    input: &TextInputView,
    inputs: &TextInputs,
) {
    let outer = inset(area, input.style.margin);
    if outer.width == 0 || outer.height == 0 {
        return;
    }
    if let Some(background) = input.style.background {
        frame.render_widget(Block::default().style(Style::default().bg(background)), outer);
    }
    let inner = inset(outer, input.style.padding);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    inputs.register_hitbox(
        &input.id,
        Hitbox {
            x: outer.x,
            y: outer.y,
            width: outer.width,
            height: outer.height,
        },
    );

    let mut style = text_style(&input.style);
    if !input.editable {
        style = style.add_modifier(Modifier::DIM);
    }
    let showing_placeholder = input.value.is_empty() && input.placeholder.is_some();
    let content = if showing_placeholder {
        style = style.fg(Color::DarkGray);
        input.placeholder.clone().unwrap_or_default()
    } else {
        input.value.clone()
    };
    let show_cursor = input.focused && input.editable;
    let cursor = if show_cursor && !showing_placeholder {
        let prefix: String = input.value.chars().take(input.cursor).collect();
        u16::try_from(UnicodeWidthStr::width(prefix.as_str())).unwrap_or(u16::MAX)
    } else {
        0
    };
    // Scroll sideways so the cursor cell stays inside the field.
    let scroll = horizontal_scroll(cursor, inner.width);
    frame.render_widget(
        Paragraph::new(Line::from(content))
            .style(style)
            .scroll((0, scroll)),
        inner,
    );

    if show_cursor {
        frame.set_cursor(inner.x.saturating_add(cursor - scroll), inner.y);
    }
}

/// Columns to skip so that column `cursor` is visible in a field `width` wide.
fn horizontal_scroll(cursor: u16, width: u16) -> u16 {
    if width == 0 {
        return cursor;
    }
    cursor.saturating_sub(width - 1)
}
