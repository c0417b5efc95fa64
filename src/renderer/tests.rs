use std::sync::Arc;

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use super::render_view;
use crate::components::{FormFieldProps, form_field};
use crate::events::{EventBus, FrameworkEvent};
use crate::intl::MessageDescriptor;
use crate::runtime::{
    Color, ContainerView, Dispatcher, FlexDirection, FlexView, TextInputNode, TextInputView,
    TextView, View,
};
use crate::styles::{BoxStyle, Borders, Spacing, TextStyle};
use crate::runtime::App;
use crate::text_input::{AutoCapitalize, TextInputs};
use crate::theme::Theme;

fn draw(view: &View, inputs: &TextInputs) -> Vec<String> {
    draw_sized(view, inputs, 30, 6).0
}

/// Rows of the drawn buffer plus the terminal cursor position.
fn draw_sized(
    view: &View,
    inputs: &TextInputs,
    width: u16,
    height: u16,
) -> (Vec<String>, (u16, u16)) {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    inputs.reset_hitboxes();
    terminal
        .draw(|frame| render_view(frame, frame.size(), view, inputs))
        .expect("draw");
    let cursor = terminal.get_cursor().expect("cursor");
    let buffer = terminal.backend().buffer();
    let rows = (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer.get(x, y).symbol().to_string())
                .collect::<String>()
        })
        .collect();
    (rows, cursor)
}

fn input_view(id: &str, value: &str) -> View {
    View::Input(TextInputView {
        id: id.to_string(),
        value: value.to_string(),
        placeholder: None,
        cursor: value.chars().count(),
        focused: false,
        editable: true,
        max_length: None,
        auto_capitalize: AutoCapitalize::None,
        auto_correct: false,
        disable_fullscreen_ui: true,
        style: TextStyle::default().padding(Spacing::horizontal(1)),
    })
}

#[test]
fn column_stacks_title_above_bordered_input() {
    let inputs = TextInputs::new();
    let view = View::Flex(FlexView {
        direction: FlexDirection::Column,
        children: vec![
            View::Text(TextView {
                content: "Username".to_string(),
                style: TextStyle::default().color(Color::Gray),
            }),
            View::Container(ContainerView {
                style: BoxStyle::default().borders(Borders::HORIZONTAL, Color::DarkGray),
                child: Some(Box::new(input_view("username", "ada"))),
            }),
        ],
    });

    let rows = draw(&view, &inputs);

    assert!(rows[0].starts_with("Username"));
    assert!(rows[1].starts_with("──"));
    assert!(rows[2].starts_with(" ada"));
    assert!(rows[3].starts_with("──"));
}

#[test]
fn drawn_inputs_can_be_focused_by_click() {
    let inputs = TextInputs::new();
    inputs.begin_frame();
    inputs.sync(&TextInputNode::new("first", "a"));
    inputs.sync(&TextInputNode::new("second", "b"));
    inputs.end_frame();
    assert!(inputs.is_focused("first"));

    let view = View::Flex(FlexView {
        direction: FlexDirection::Column,
        children: vec![input_view("first", "a"), input_view("second", "b")],
    });
    draw(&view, &inputs);

    let click = FrameworkEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 3,
        row: 1,
        modifiers: KeyModifiers::NONE,
    });
    let dispatcher = Dispatcher::detached(EventBus::new(2));
    assert!(inputs.handle_event(&click, &dispatcher));
    assert!(inputs.is_focused("second"));
}

#[test]
fn long_help_text_wraps_under_disabled_field() {
    let help = "This field is handled through your login provider. \
                If you want to change it, you need to do so through your login provider.";
    let props = FormFieldProps::new(
        "position",
        "Analyst",
        MessageDescriptor::new("user.settings.general.position", "Position"),
        Arc::new(Theme::denim()),
        |_| {},
    )
    .disabled(true)
    .help_text(help);
    let app = App::new("wrap-test", form_field(props));
    let view = app.render_snapshot().expect("render");

    let (rows, _) = draw_sized(&view, app.inputs(), 40, 10);

    let drawn: Vec<&str> = rows.iter().flat_map(|row| row.split_whitespace()).collect();
    let words: Vec<&str> = help.split_whitespace().collect();
    assert!(
        drawn.windows(words.len()).any(|window| window == words.as_slice()),
        "help text clipped: {rows:#?}"
    );
    assert!(rows.last().is_some_and(|row| row.trim().is_empty()));
}

#[test]
fn long_value_scrolls_to_keep_cursor_visible() {
    let inputs = TextInputs::new();
    let value = "abcdefghijklmnopqrstuvwxyz";
    let View::Input(mut input) = input_view("position", value) else {
        unreachable!("input_view builds an input");
    };
    input.focused = true;
    let view = View::Input(input);

    let (rows, cursor) = draw_sized(&view, &inputs, 10, 1);

    assert_eq!(rows[0], " tuvwxyz  ");
    assert_eq!(cursor, (8, 0));
}

#[test]
fn unfocused_long_value_shows_its_start() {
    let inputs = TextInputs::new();
    let view = input_view("position", "abcdefghijklmnopqrstuvwxyz");

    let (rows, _) = draw_sized(&view, &inputs, 10, 1);

    assert_eq!(rows[0], " abcdefgh ");
}
