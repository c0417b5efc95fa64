use super::options::{AutoCapitalize, ChangeTextFn};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Hitbox {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Hitbox {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && column < self.x.saturating_add(self.width)
            && row >= self.y
            && row < self.y.saturating_add(self.height)
    }
}

/// Transient state of one mounted input between renders.
///
/// `cursor` counts characters, not bytes.
#[derive(Clone)]
pub struct TextInputState {
    pub value: String,
    pub cursor: usize,
    pub editable: bool,
    pub max_length: Option<usize>,
    pub auto_capitalize: AutoCapitalize,
    pub(crate) on_change_text: Option<ChangeTextFn>,
    pub(crate) hitbox: Option<Hitbox>,
}

impl TextInputState {
    pub fn new(initial: String) -> Self {
        let cursor = initial.chars().count();
        Self {
            value: initial,
            cursor,
            editable: true,
            max_length: None,
            auto_capitalize: AutoCapitalize::None,
            on_change_text: None,
            hitbox: None,
        }
    }

    pub fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    /// Takes a value pushed down by the owner of the input.
    pub fn adopt(&mut self, value: &str) {
        if self.value != value {
            self.value = value.to_string();
            self.cursor = self.cursor.min(self.char_len());
        }
    }

    /// Inserts at the cursor, honoring auto-capitalization and `max_length`.
    /// Returns whether the value changed.
    pub fn insert(&mut self, text: &str) -> bool {
        let mut incoming = String::new();
        let mut preceding: String = self.value.chars().take(self.cursor).collect();
        for ch in text.chars().filter(|ch| *ch != '\n' && *ch != '\r') {
            let transformed = self.auto_capitalize.apply(&preceding, ch);
            preceding.push_str(&transformed);
            incoming.push_str(&transformed);
        }
        if let Some(max) = self.max_length {
            let room = max.saturating_sub(self.char_len());
            incoming = incoming.chars().take(room).collect();
        }
        if incoming.is_empty() {
            return false;
        }
        let at = byte_index(&self.value, self.cursor);
        self.value.insert_str(at, &incoming);
        self.cursor += incoming.chars().count();
        true
    }

    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let start = byte_index(&self.value, self.cursor - 1);
        let end = byte_index(&self.value, self.cursor);
        self.value.replace_range(start..end, "");
        self.cursor -= 1;
        true
    }

    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.char_len() {
            return false;
        }
        let start = byte_index(&self.value, self.cursor);
        let end = byte_index(&self.value, self.cursor + 1);
        self.value.replace_range(start..end, "");
        true
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let next = self.cursor.saturating_add_signed(delta);
        self.cursor = next.min(self.char_len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }
}

pub(crate) fn byte_index(value: &str, char_index: usize) -> usize {
    value
        .char_indices()
        .nth(char_index)
        .map(|(index, _)| index)
        .unwrap_or(value.len())
}

/// What a render needs to know about an input after syncing it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextInputSnapshot {
    pub value: String,
    pub cursor: usize,
    pub focused: bool,
}
