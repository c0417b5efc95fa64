use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::runtime::TextView;
use crate::styles::TextStyle;

use super::inset;

pub fn render_text(frame: &mut Frame<'_>, area: Rect, view: &TextView) {
    let outer = inset(area, view.style.margin);
    if let Some(background) = view.style.background {
        frame.render_widget(Block::default().style(Style::default().bg(background)), outer);
    }
    let inner = inset(outer, view.style.padding);
    if inner.width == 0 || inner.height == 0 {
        return;
    }
    let widget = Paragraph::new(Line::from(view.content.clone()))
        .style(text_style(&view.style))
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, inner);
}

pub(crate) fn text_style(style: &TextStyle) -> Style {
    let mut out = Style::default();
    if let Some(color) = style.color {
        out = out.fg(color);
    }
    if let Some(background) = style.background {
        out = out.bg(background);
    }
    if style.bold {
        out = out.add_modifier(Modifier::BOLD);
    }
    out
}
