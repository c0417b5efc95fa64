use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders};

use crate::runtime::ContainerView;
use crate::styles;
use crate::text_input::TextInputs;

use super::{RenderFn, inset};

pub fn render_container(
    frame: &mut Frame<'_>,
    area: Rect,
    view: &ContainerView,
    inputs: &TextInputs,
    render_child: RenderFn,
) {
    let outer = inset(area, view.style.margin);
    let mut block = Block::default().borders(block_borders(view.style.borders));
    if let Some(color) = view.style.border_color {
        block = block.border_style(Style::default().fg(color));
    }
    if let Some(background) = view.style.background {
        block = block.style(Style::default().bg(background));
    }
    frame.render_widget(block.clone(), outer);

    if let Some(child) = view.child.as_deref() {
        let inner = inset(block.inner(outer), view.style.padding);
        render_child(frame, inner, child, inputs);
    }
}

fn block_borders(borders: styles::Borders) -> Borders {
    let mut out = Borders::NONE;
    if borders.top {
        out |= Borders::TOP;
    }
    if borders.bottom {
        out |= Borders::BOTTOM;
    }
    if borders.left {
        out |= Borders::LEFT;
    }
    if borders.right {
        out |= Borders::RIGHT;
    }
    out
}
