use std::fmt;

use crate::intl::MessageDescriptor;
use crate::styles::{BoxStyle, TextStyle};
use crate::text_input::{AutoCapitalize, ChangeTextFn};

use super::component::ComponentElement;

#[derive(Clone, Debug)]
pub enum Element {
    Empty,
    Text(TextNode),
    FormattedText(FormattedTextNode),
    Flex(FlexNode),
    Container(ContainerNode),
    Input(TextInputNode),
    Fragment(Vec<Element>),
    Component(ComponentElement),
}

#[derive(Clone, Debug)]
pub struct TextNode {
    pub content: String,
    pub style: TextStyle,
}

/// Text resolved against the nearest message catalog at render time.
#[derive(Clone, Debug)]
pub struct FormattedTextNode {
    pub message: MessageDescriptor,
    pub values: Vec<(String, String)>,
    pub style: TextStyle,
}

impl FormattedTextNode {
    pub fn new(message: MessageDescriptor) -> Self {
        Self {
            message,
            values: Vec::new(),
            style: TextStyle::default(),
        }
    }

    pub fn value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.push((name.into(), value.into()));
        self
    }

    pub fn style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }
}

#[derive(Clone, Debug)]
pub struct FlexNode {
    pub direction: FlexDirection,
    pub children: Vec<Element>,
}

#[derive(Clone, Debug)]
pub struct ContainerNode {
    pub style: BoxStyle,
    pub child: Box<Element>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlexDirection {
    Row,
    Column,
}

impl Element {
    pub fn text(content: impl Into<String>) -> Self {
        Element::Text(TextNode {
            content: content.into(),
            style: TextStyle::default(),
        })
    }

    pub fn styled_text(content: impl Into<String>, style: TextStyle) -> Self {
        Element::Text(TextNode {
            content: content.into(),
            style,
        })
    }

    pub fn formatted_text(node: FormattedTextNode) -> Self {
        Element::FormattedText(node)
    }

    pub fn vstack(children: Vec<Element>) -> Self {
        Element::Flex(FlexNode {
            direction: FlexDirection::Column,
            children,
        })
    }

    pub fn hstack(children: Vec<Element>) -> Self {
        Element::Flex(FlexNode {
            direction: FlexDirection::Row,
            children,
        })
    }

    pub fn container(style: BoxStyle, child: Element) -> Self {
        Element::Container(ContainerNode {
            style,
            child: Box::new(child),
        })
    }

    pub fn fragment(children: Vec<Element>) -> Self {
        Element::Fragment(children)
    }

    pub fn text_input(node: TextInputNode) -> Self {
        Element::Input(node)
    }
}

/// A single-line text box.
///
/// The box is controlled: `value` is what it shows after every render, and
/// edits are only reported through `on_change_text`.
#[derive(Clone)]
pub struct TextInputNode {
    pub id: String,
    pub value: String,
    pub on_change_text: Option<ChangeTextFn>,
    pub placeholder: Option<String>,
    pub max_length: Option<usize>,
    pub editable: bool,
    pub auto_capitalize: AutoCapitalize,
    pub auto_correct: bool,
    pub disable_fullscreen_ui: bool,
    pub style: TextStyle,
}

impl TextInputNode {
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
            on_change_text: None,
            placeholder: None,
            max_length: None,
            editable: true,
            auto_capitalize: AutoCapitalize::Sentences,
            auto_correct: true,
            disable_fullscreen_ui: false,
            style: TextStyle::default(),
        }
    }

    pub fn on_change_text<F>(mut self, callback: F) -> Self
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.on_change_text = Some(std::sync::Arc::new(callback));
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn max_length(mut self, max_length: Option<usize>) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    pub fn auto_capitalize(mut self, mode: AutoCapitalize) -> Self {
        self.auto_capitalize = mode;
        self
    }

    pub fn auto_correct(mut self, enabled: bool) -> Self {
        self.auto_correct = enabled;
        self
    }

    pub fn disable_fullscreen_ui(mut self, disabled: bool) -> Self {
        self.disable_fullscreen_ui = disabled;
        self
    }

    pub fn style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }
}

impl fmt::Debug for TextInputNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextInputNode")
            .field("id", &self.id)
            .field("value", &self.value)
            .field("editable", &self.editable)
            .field("max_length", &self.max_length)
            .finish_non_exhaustive()
    }
}
