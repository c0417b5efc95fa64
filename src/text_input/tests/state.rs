use crate::text_input::{AutoCapitalize, TextInputState};

#[test]
fn new_state_places_cursor_at_end_in_chars() {
    let state = TextInputState::new("añb".into());
    assert_eq!(state.value, "añb");
    assert_eq!(state.cursor, 3);
    assert!(state.editable);
}

#[test]
fn insert_and_delete_work_at_the_cursor() {
    let mut state = TextInputState::new("ada".into());
    state.move_cursor(-1);
    assert!(state.insert("é"));
    assert_eq!(state.value, "adéa");
    assert_eq!(state.cursor, 3);

    assert!(state.backspace());
    assert_eq!(state.value, "ada");
    assert!(state.delete());
    assert_eq!(state.value, "ad");
    assert!(!state.delete());

    state.move_home();
    assert!(!state.backspace());
    state.move_cursor(10);
    assert_eq!(state.cursor, 2);
}

#[test]
fn max_length_rejects_overflow_and_truncates_pastes() {
    let mut state = TextInputState::new("abc".into());
    state.max_length = Some(5);
    assert!(state.insert("defg"));
    assert_eq!(state.value, "abcde");
    assert!(!state.insert("x"));
    assert_eq!(state.value, "abcde");
}

#[test]
fn newlines_are_stripped_from_inserted_text() {
    let mut state = TextInputState::new(String::new());
    assert!(state.insert("line\r\nbreak"));
    assert_eq!(state.value, "linebreak");
    assert!(!state.insert("\n"));
}

#[test]
fn adopt_replaces_value_and_clamps_cursor() {
    let mut state = TextInputState::new("username".into());
    state.adopt("ada");
    assert_eq!(state.value, "ada");
    assert_eq!(state.cursor, 3);

    state.move_home();
    state.adopt("ada");
    assert_eq!(state.cursor, 0, "same value keeps the cursor");
}

#[test]
fn insert_applies_auto_capitalize() {
    let mut state = TextInputState::new("hello".into());
    state.auto_capitalize = AutoCapitalize::Words;
    assert!(state.insert(" world"));
    assert_eq!(state.value, "hello World");
}
