use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyModifiers, MouseButton};
use parking_lot::Mutex;
use tracing::{trace, warn};

use crate::events::{FrameworkEvent, is_mouse_click, mouse_position};
use crate::runtime::{Dispatcher, TextInputNode};

use super::state::{Hitbox, TextInputSnapshot, TextInputState};

/// Every text input mounted by one app, plus keyboard focus.
///
/// Inputs are synced from their nodes on each render and edited here when
/// terminal events arrive; edits are reported to the node's
/// `on_change_text` callback.
#[derive(Default)]
pub struct TextInputs {
    inner: Mutex<Inputs>,
}

#[derive(Default)]
struct Inputs {
    states: HashMap<String, TextInputState>,
    order: Vec<String>,
    focused: Option<String>,
}

enum Edit {
    Insert(String),
    Backspace,
    Delete,
    Move(isize),
    Home,
    End,
}

impl TextInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn begin_frame(&self) {
        self.inner.lock().order.clear();
    }

    /// Registers or refreshes the input described by `node` for this frame.
    ///
    /// Ids must be unique per frame. A repeated id is reported and mirrors
    /// the input that claimed it first.
    pub(crate) fn sync(&self, node: &TextInputNode) -> TextInputSnapshot {
        let mut inner = self.inner.lock();
        let inputs = &mut *inner;
        if let Some(state) = inputs
            .states
            .get(&node.id)
            .filter(|_| inputs.order.contains(&node.id))
        {
            warn!(input = %node.id, "text input id rendered twice in one frame");
            return TextInputSnapshot {
                value: state.value.clone(),
                cursor: state.cursor,
                focused: inputs.focused.as_deref() == Some(node.id.as_str()),
            };
        }
        let state = inputs
            .states
            .entry(node.id.clone())
            .or_insert_with(|| TextInputState::new(node.value.clone()));
        state.adopt(&node.value);
        state.editable = node.editable;
        state.max_length = node.max_length;
        state.auto_capitalize = node.auto_capitalize;
        state.on_change_text = node.on_change_text.clone();
        let (value, cursor) = (state.value.clone(), state.cursor);

        inputs.order.push(node.id.clone());
        if inputs.focused.is_none() && node.editable {
            trace!(input = %node.id, "auto-focusing first editable input");
            inputs.focused = Some(node.id.clone());
        }
        TextInputSnapshot {
            value,
            cursor,
            focused: inputs.focused.as_deref() == Some(node.id.as_str()),
        }
    }

    /// Drops inputs that were not rendered this frame. Focus on an input that
    /// is gone or read-only moves to the first editable one.
    pub(crate) fn end_frame(&self) {
        let mut inner = self.inner.lock();
        let inputs = &mut *inner;
        let order = &inputs.order;
        inputs.states.retain(|id, _| order.contains(id));
        let focus_lost = inputs
            .focused
            .as_ref()
            .map(|id| {
                inputs
                    .states
                    .get(id)
                    .map(|state| !state.editable)
                    .unwrap_or(true)
            })
            .unwrap_or(false);
        if focus_lost {
            trace!(input = ?inputs.focused, "focused input unmounted or read-only");
            let states = &inputs.states;
            inputs.focused = inputs
                .order
                .iter()
                .find(|id| states.get(*id).map(|state| state.editable).unwrap_or(false))
                .cloned();
        }
    }

    pub(crate) fn reset_hitboxes(&self) {
        for state in self.inner.lock().states.values_mut() {
            state.hitbox = None;
        }
    }

    pub(crate) fn register_hitbox(&self, id: &str, hitbox: Hitbox) {
        if let Some(state) = self.inner.lock().states.get_mut(id) {
            state.hitbox = Some(hitbox);
        }
    }

    /// Focuses `id` when it is mounted and editable.
    pub fn focus(&self, id: &str) -> bool {
        let mut inner = self.inner.lock();
        let editable = inner
            .states
            .get(id)
            .map(|state| state.editable)
            .unwrap_or(false);
        if editable {
            inner.focused = Some(id.to_string());
        }
        editable
    }

    pub fn focused(&self) -> Option<String> {
        self.inner.lock().focused.clone()
    }

    pub fn is_focused(&self, id: &str) -> bool {
        self.inner.lock().focused.as_deref() == Some(id)
    }

    pub fn value(&self, id: &str) -> Option<String> {
        self.inner.lock().states.get(id).map(|state| state.value.clone())
    }

    pub fn focus_next(&self) -> Option<String> {
        self.cycle_focus(1)
    }

    pub fn focus_prev(&self) -> Option<String> {
        self.cycle_focus(-1)
    }

    fn cycle_focus(&self, step: isize) -> Option<String> {
        let mut inner = self.inner.lock();
        let editable: Vec<String> = inner
            .order
            .iter()
            .filter(|id| {
                inner
                    .states
                    .get(*id)
                    .map(|state| state.editable)
                    .unwrap_or(false)
            })
            .cloned()
            .collect();
        if editable.is_empty() {
            return None;
        }
        let len = editable.len() as isize;
        let next = match inner
            .focused
            .as_ref()
            .and_then(|id| editable.iter().position(|candidate| candidate == id))
        {
            Some(current) => (current as isize + step).rem_euclid(len),
            None if step >= 0 => 0,
            None => len - 1,
        };
        let id = editable[next as usize].clone();
        inner.focused = Some(id.clone());
        Some(id)
    }

    /// Routes one terminal event to the focused input.
    ///
    /// Returns `true` when the event was consumed by an input.
    pub fn handle_event(&self, event: &FrameworkEvent, dispatcher: &Dispatcher) -> bool {
        match event {
            FrameworkEvent::Key(key) => match key.code {
                KeyCode::Tab => self.refocus(self.focus_next(), dispatcher),
                KeyCode::BackTab => self.refocus(self.focus_prev(), dispatcher),
                KeyCode::Char(ch)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    self.apply(Edit::Insert(ch.to_string()), dispatcher)
                }
                KeyCode::Backspace => self.apply(Edit::Backspace, dispatcher),
                KeyCode::Delete => self.apply(Edit::Delete, dispatcher),
                KeyCode::Left => self.apply(Edit::Move(-1), dispatcher),
                KeyCode::Right => self.apply(Edit::Move(1), dispatcher),
                KeyCode::Home => self.apply(Edit::Home, dispatcher),
                KeyCode::End => self.apply(Edit::End, dispatcher),
                _ => false,
            },
            FrameworkEvent::Paste(text) => self.apply(Edit::Insert(text.clone()), dispatcher),
            FrameworkEvent::Mouse(_) if is_mouse_click(event, MouseButton::Left) => {
                let Some((column, row)) = mouse_position(event) else {
                    return false;
                };
                let target = {
                    let inner = self.inner.lock();
                    inner.states.iter().find_map(|(id, state)| {
                        state
                            .hitbox
                            .filter(|hitbox| hitbox.contains(column, row))
                            .map(|_| id.clone())
                    })
                };
                match target {
                    Some(id) if self.focus(&id) => self.refocus(Some(id), dispatcher),
                    _ => false,
                }
            }
            _ => false,
        }
    }

    fn refocus(&self, focused: Option<String>, dispatcher: &Dispatcher) -> bool {
        match focused {
            Some(id) => {
                trace!(input = %id, "focus moved");
                dispatcher.request_render();
                true
            }
            None => false,
        }
    }

    fn apply(&self, edit: Edit, dispatcher: &Dispatcher) -> bool {
        let notify = {
            let mut inner = self.inner.lock();
            let Some(id) = inner.focused.clone() else {
                return false;
            };
            let Some(state) = inner.states.get_mut(&id) else {
                return false;
            };
            if !state.editable {
                return false;
            }
            let changed = match edit {
                Edit::Insert(text) => state.insert(&text),
                Edit::Backspace => state.backspace(),
                Edit::Delete => state.delete(),
                Edit::Move(delta) => {
                    state.move_cursor(delta);
                    false
                }
                Edit::Home => {
                    state.move_home();
                    false
                }
                Edit::End => {
                    state.move_end();
                    false
                }
            };
            if !changed {
                None
            } else {
                trace!(input = %id, "text changed");
                state
                    .on_change_text
                    .clone()
                    .map(|callback| (callback, state.value.clone()))
            }
        };
        // Callbacks run without the registry lock held.
        if let Some((callback, value)) = notify {
            callback(value);
        }
        dispatcher.request_render();
        true
    }
}
