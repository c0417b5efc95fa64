use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::styles::{BoxStyle, TextStyle};
use crate::text_input::AutoCapitalize;

use super::element::FlexDirection;

#[derive(Clone, Debug, PartialEq)]
pub enum View {
    Empty,
    Text(TextView),
    Flex(FlexView),
    Container(ContainerView),
    Input(TextInputView),
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextView {
    pub content: String,
    pub style: TextStyle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FlexView {
    pub direction: FlexDirection,
    pub children: Vec<View>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContainerView {
    pub style: BoxStyle,
    pub child: Option<Box<View>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextInputView {
    pub id: String,
    pub value: String,
    pub placeholder: Option<String>,
    pub cursor: usize,
    pub focused: bool,
    pub editable: bool,
    pub max_length: Option<usize>,
    pub auto_capitalize: AutoCapitalize,
    pub auto_correct: bool,
    pub disable_fullscreen_ui: bool,
    pub style: TextStyle,
}

impl View {
    /// Rows this view needs when laid out `width` columns wide, or `None`
    /// when it can take any height. Text wraps, so its height grows as the
    /// width shrinks.
    pub fn height_hint(&self, width: u16) -> Option<u16> {
        match self {
            View::Empty => Some(0),
            View::Text(text) => {
                let chrome = text.style.margin.plus(text.style.padding);
                let rows = wrapped_rows(&text.content, width.saturating_sub(chrome.width()));
                Some(rows.saturating_add(chrome.height()))
            }
            View::Input(input) => Some(
                1u16.saturating_add(input.style.margin.height())
                    .saturating_add(input.style.padding.height()),
            ),
            View::Container(container) => {
                let inner = width.saturating_sub(container.style.chrome_columns());
                let child = match container.child.as_deref() {
                    Some(child) => child.height_hint(inner)?,
                    None => 0,
                };
                Some(child.saturating_add(container.style.chrome_rows()))
            }
            View::Flex(flex) => match flex.direction {
                FlexDirection::Column => flex.children.iter().try_fold(0u16, |total, child| {
                    child
                        .height_hint(width)
                        .map(|rows| total.saturating_add(rows))
                }),
                FlexDirection::Row => flex.children.iter().try_fold(0u16, |tallest, child| {
                    let columns = child.width_hint().map_or(width, |hint| hint.min(width));
                    child.height_hint(columns).map(|rows| tallest.max(rows))
                }),
            },
        }
    }

    /// Columns this view needs inside a row, or `None` to share the rest.
    pub fn width_hint(&self) -> Option<u16> {
        match self {
            View::Empty => Some(0),
            View::Text(text) => {
                let content = u16::try_from(text.content.width()).unwrap_or(u16::MAX);
                Some(
                    content
                        .saturating_add(text.style.margin.width())
                        .saturating_add(text.style.padding.width()),
                )
            }
            _ => None,
        }
    }

    /// Depth-first search for the first text view with `content`.
    pub fn find_text(&self, content: &str) -> Option<&TextView> {
        match self {
            View::Text(text) if text.content == content => Some(text),
            View::Flex(flex) => flex.children.iter().find_map(|child| child.find_text(content)),
            View::Container(container) => container
                .child
                .as_deref()
                .and_then(|child| child.find_text(content)),
            _ => None,
        }
    }

    pub fn find_input(&self, id: &str) -> Option<&TextInputView> {
        match self {
            View::Input(input) if input.id == id => Some(input),
            View::Flex(flex) => flex.children.iter().find_map(|child| child.find_input(id)),
            View::Container(container) => container
                .child
                .as_deref()
                .and_then(|child| child.find_input(id)),
            _ => None,
        }
    }

    /// Every text view in document order.
    pub fn texts(&self) -> Vec<&TextView> {
        let mut out = Vec::new();
        self.collect_texts(&mut out);
        out
    }

    fn collect_texts<'a>(&'a self, out: &mut Vec<&'a TextView>) {
        match self {
            View::Text(text) => out.push(text),
            View::Flex(flex) => flex
                .children
                .iter()
                .for_each(|child| child.collect_texts(out)),
            View::Container(container) => {
                if let Some(child) = container.child.as_deref() {
                    child.collect_texts(out);
                }
            }
            View::Empty | View::Input(_) => {}
        }
    }
}

/// Rows `content` occupies once word-wrapped to `width` columns. Always at
/// least one so empty text keeps its line.
fn wrapped_rows(content: &str, width: u16) -> u16 {
    if width == 0 {
        return 1;
    }
    let rows = Paragraph::new(Line::from(content))
        .wrap(Wrap { trim: true })
        .line_count(width);
    u16::try_from(rows).unwrap_or(u16::MAX).max(1)
}
