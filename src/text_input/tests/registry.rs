use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use parking_lot::Mutex;

use crate::events::{EventBus, FrameworkEvent};
use crate::runtime::{Dispatcher, TextInputNode};
use crate::text_input::TextInputs;

fn dispatcher() -> Dispatcher {
    Dispatcher::detached(EventBus::new(2))
}

fn key(code: KeyCode) -> FrameworkEvent {
    FrameworkEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn frame(inputs: &TextInputs, nodes: &[TextInputNode]) {
    inputs.begin_frame();
    for node in nodes {
        inputs.sync(node);
    }
    inputs.end_frame();
}

fn recording(id: &str, value: &str, log: &Arc<Mutex<Vec<String>>>) -> TextInputNode {
    let log = log.clone();
    TextInputNode::new(id, value).on_change_text(move |text| log.lock().push(text))
}

#[test]
fn first_editable_input_is_focused() {
    let inputs = TextInputs::new();
    frame(
        &inputs,
        &[
            TextInputNode::new("email", "a@b.c").editable(false),
            TextInputNode::new("first", ""),
            TextInputNode::new("last", ""),
        ],
    );

    assert_eq!(inputs.focused().as_deref(), Some("first"));
}

#[test]
fn tab_cycles_through_editable_inputs() {
    let inputs = TextInputs::new();
    frame(
        &inputs,
        &[
            TextInputNode::new("first", ""),
            TextInputNode::new("email", "").editable(false),
            TextInputNode::new("last", ""),
        ],
    );
    let dispatcher = dispatcher();

    assert!(inputs.handle_event(&key(KeyCode::Tab), &dispatcher));
    assert!(inputs.is_focused("last"));
    inputs.handle_event(&key(KeyCode::Tab), &dispatcher);
    assert!(inputs.is_focused("first"));
    inputs.handle_event(&key(KeyCode::BackTab), &dispatcher);
    assert!(inputs.is_focused("last"));
}

#[test]
fn edits_call_back_once_with_full_text() {
    let inputs = TextInputs::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    frame(&inputs, &[recording("nickname", "al", &log)]);
    let dispatcher = dispatcher();

    inputs.handle_event(&key(KeyCode::Char('i')), &dispatcher);
    inputs.handle_event(&key(KeyCode::Left), &dispatcher);
    inputs.handle_event(&key(KeyCode::Backspace), &dispatcher);
    inputs.handle_event(&FrameworkEvent::Paste("l\n".into()), &dispatcher);

    assert_eq!(*log.lock(), vec!["ali", "ai", "ali"]);
}

#[test]
fn cursor_moves_do_not_call_back() {
    let inputs = TextInputs::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    frame(&inputs, &[recording("first", "ada", &log)]);
    let dispatcher = dispatcher();

    inputs.handle_event(&key(KeyCode::Home), &dispatcher);
    inputs.handle_event(&key(KeyCode::Backspace), &dispatcher);
    inputs.handle_event(&key(KeyCode::End), &dispatcher);
    inputs.handle_event(&key(KeyCode::Delete), &dispatcher);

    assert!(log.lock().is_empty());
}

#[test]
fn control_chords_are_not_typed() {
    let inputs = TextInputs::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    frame(&inputs, &[recording("first", "", &log)]);

    let chord = FrameworkEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(!inputs.handle_event(&chord, &dispatcher()));
    assert!(log.lock().is_empty());
}

#[test]
fn read_only_input_ignores_edits() {
    let inputs = TextInputs::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    frame(&inputs, &[recording("email", "a@b.c", &log).editable(false)]);

    assert!(!inputs.focus("email"));
    assert!(!inputs.handle_event(&key(KeyCode::Char('x')), &dispatcher()));
    assert!(log.lock().is_empty());
    assert_eq!(inputs.value("email").as_deref(), Some("a@b.c"));
}

#[test]
fn max_length_rejects_and_truncates() {
    let inputs = TextInputs::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    frame(&inputs, &[recording("username", "abc", &log).max_length(Some(5))]);
    let dispatcher = dispatcher();

    inputs.handle_event(&FrameworkEvent::Paste("defg".into()), &dispatcher);
    inputs.handle_event(&key(KeyCode::Char('h')), &dispatcher);

    assert_eq!(*log.lock(), vec!["abcde"]);
}

#[test]
fn controlled_value_wins_on_next_frame() {
    let inputs = TextInputs::new();
    frame(&inputs, &[TextInputNode::new("first", "ada")]);

    inputs.handle_event(&key(KeyCode::Char('m')), &dispatcher());
    assert_eq!(inputs.value("first").as_deref(), Some("adam"));

    frame(&inputs, &[TextInputNode::new("first", "ada")]);
    assert_eq!(inputs.value("first").as_deref(), Some("ada"));
}

#[test]
fn unmounted_inputs_are_dropped_and_lose_focus() {
    let inputs = TextInputs::new();
    frame(
        &inputs,
        &[TextInputNode::new("first", ""), TextInputNode::new("last", "")],
    );
    assert!(inputs.is_focused("first"));

    frame(&inputs, &[TextInputNode::new("last", "")]);

    assert!(inputs.value("first").is_none());
    assert!(inputs.is_focused("last"));
}

#[test]
fn input_locked_while_focused_loses_focus() {
    let inputs = TextInputs::new();
    frame(&inputs, &[TextInputNode::new("first", "")]);

    frame(&inputs, &[TextInputNode::new("first", "").editable(false)]);

    assert_eq!(inputs.focused(), None);
}

#[test]
fn repeated_id_keeps_the_first_input() {
    let inputs = TextInputs::new();
    let first = Arc::new(Mutex::new(Vec::new()));
    let second = Arc::new(Mutex::new(Vec::new()));
    frame(
        &inputs,
        &[
            recording("username", "ada", &first),
            recording("username", "grace", &second),
        ],
    );

    assert_eq!(inputs.value("username").as_deref(), Some("ada"));
    assert!(inputs.handle_event(&key(KeyCode::Char('1')), &dispatcher()));
    assert_eq!(*first.lock(), vec!["ada1".to_string()]);
    assert!(second.lock().is_empty());
    assert_eq!(inputs.focus_next().as_deref(), Some("username"));
}
