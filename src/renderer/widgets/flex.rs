use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::runtime::{FlexDirection, FlexView, View};
use crate::text_input::TextInputs;

use super::RenderFn;

pub fn render_flex(
    frame: &mut Frame<'_>,
    area: Rect,
    view: &FlexView,
    inputs: &TextInputs,
    render_child: RenderFn,
) {
    if view.children.is_empty() {
        return;
    }

    let mut constraints: Vec<Constraint> = view
        .children
        .iter()
        .map(|child| constraint_for(child, view.direction, area))
        .collect();
    // Leftover space goes to a trailing filler so fixed children keep their size.
    if constraints
        .iter()
        .all(|constraint| matches!(constraint, Constraint::Length(_)))
    {
        constraints.push(Constraint::Min(0));
    }
    let layout = Layout::default()
        .direction(Direction::from(view.direction))
        .constraints(constraints);
    let chunks = layout.split(area);
    for (child, rect) in view.children.iter().zip(chunks.iter()) {
        render_child(frame, *rect, child, inputs);
    }
}

/// Fixed size when the child knows how much it needs, otherwise a share of
/// whatever is left.
fn constraint_for(child: &View, direction: FlexDirection, area: Rect) -> Constraint {
    let hint = match direction {
        FlexDirection::Column => child.height_hint(area.width),
        FlexDirection::Row => child.width_hint(),
    };
    match hint {
        Some(cells) => Constraint::Length(cells),
        None => Constraint::Min(0),
    }
}

impl From<FlexDirection> for Direction {
    fn from(value: FlexDirection) -> Self {
        match value {
            FlexDirection::Row => Direction::Horizontal,
            FlexDirection::Column => Direction::Vertical,
        }
    }
}
