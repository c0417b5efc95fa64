use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

use crate::intl::MessageDescriptor;
use crate::runtime::{ComponentElement, Element, FormattedTextNode, TextInputNode, component};
use crate::styles::{BoxStyle, Borders, Spacing, TextStyle};
use crate::text_input::AutoCapitalize;
use crate::theme::{Theme, ThemedStyleSheet, make_style_sheet_from_theme};

/// Single-entry mapping from a field name to its new full value.
pub type ValueUpdate = BTreeMap<String, String>;

pub type UpdateValue = Arc<dyn Fn(ValueUpdate) + Send + Sync>;

const OPTIONAL_ID: &str = "channel_modal.optional";
const OPTIONAL_DEFAULT: &str = "(optional)";

/// Everything a form field renders from. The field keeps no state of its
/// own; the parent passes a fresh set of props on every render.
///
/// `field` also identifies the text input, so it must be unique on a screen.
#[derive(Clone)]
pub struct FormFieldProps {
    pub field: String,
    pub value: String,
    pub format: MessageDescriptor,
    pub help_text: Option<String>,
    pub max_length: Option<usize>,
    pub optional: bool,
    pub disabled: bool,
    pub theme: Arc<Theme>,
    pub update_value: UpdateValue,
}

impl FormFieldProps {
    pub fn new<F>(
        field: impl Into<String>,
        value: impl Into<String>,
        format: MessageDescriptor,
        theme: Arc<Theme>,
        update_value: F,
    ) -> Self
    where
        F: Fn(ValueUpdate) + Send + Sync + 'static,
    {
        Self {
            field: field.into(),
            value: value.into(),
            format,
            help_text: None,
            max_length: None,
            optional: false,
            disabled: false,
            theme,
            update_value: Arc::new(update_value),
        }
    }

    pub fn help_text(mut self, text: impl Into<String>) -> Self {
        self.help_text = Some(text.into());
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl fmt::Debug for FormFieldProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormFieldProps")
            .field("field", &self.field)
            .field("value", &self.value)
            .field("format", &self.format)
            .field("help_text", &self.help_text)
            .field("max_length", &self.max_length)
            .field("optional", &self.optional)
            .field("disabled", &self.disabled)
            .field("theme", &self.theme.name)
            .finish_non_exhaustive()
    }
}

/// Styles of one form field, derived from the theme.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldStyles {
    pub input_container: BoxStyle,
    pub input: TextStyle,
    /// Background of the text box while it is read-only.
    pub disabled: TextStyle,
    pub title: TextStyle,
    pub title_container: BoxStyle,
    pub optional: TextStyle,
    pub help_text: TextStyle,
}

impl FieldStyles {
    pub fn from_theme(theme: &Theme) -> Self {
        let text = theme.center_channel_color;
        let muted = theme.faded(text, 0.5);
        let tint = theme.faded(text, 0.1);
        Self {
            input_container: BoxStyle::default()
                .borders(Borders::HORIZONTAL, tint)
                .background(theme.center_channel_bg),
            input: TextStyle::default()
                .color(text)
                .padding(Spacing::horizontal(1)),
            disabled: TextStyle::default().background(tint),
            title: TextStyle::default().color(text).margin(Spacing::left(1)),
            title_container: BoxStyle::default().margin(Spacing::top(1)),
            optional: TextStyle::default().color(muted).margin(Spacing::left(1)),
            help_text: TextStyle::default()
                .color(muted)
                .margin(Spacing::horizontal(1)),
        }
    }

    fn input_style(&self, disabled: bool) -> TextStyle {
        match (disabled, self.disabled.background) {
            (true, Some(background)) => self.input.background(background),
            _ => self.input,
        }
    }
}

static FIELD_STYLES: LazyLock<ThemedStyleSheet<FieldStyles>> =
    LazyLock::new(|| make_style_sheet_from_theme(FieldStyles::from_theme));

/// Field styles for `theme`, rebuilt only when a different theme `Arc` is
/// passed in.
pub fn field_styles(theme: &Arc<Theme>) -> Arc<FieldStyles> {
    FIELD_STYLES.get(theme)
}

/// The element tree of a form field: title row, then the bordered input and,
/// while disabled, the help row under it (empty without help text).
pub fn render_form_field(props: &FormFieldProps) -> Element {
    let styles = field_styles(&props.theme);

    let mut title_row = vec![Element::formatted_text(
        FormattedTextNode::new(props.format.clone()).style(styles.title),
    )];
    if props.optional {
        title_row.push(Element::formatted_text(
            FormattedTextNode::new(MessageDescriptor::new(OPTIONAL_ID, OPTIONAL_DEFAULT))
                .style(styles.optional),
        ));
    }

    let field = props.field.clone();
    let update_value = props.update_value.clone();
    let input = TextInputNode::new(props.field.clone(), props.value.clone())
        .on_change_text(move |text| {
            let mut update = ValueUpdate::new();
            update.insert(field.clone(), text);
            update_value(update);
        })
        .max_length(props.max_length)
        .editable(!props.disabled)
        .auto_capitalize(AutoCapitalize::None)
        .auto_correct(false)
        .disable_fullscreen_ui(true)
        .style(styles.input_style(props.disabled));

    let mut input_rows = vec![Element::text_input(input)];
    // Disabled fields always carry a help row, empty without help text.
    if props.disabled {
        let help_text = props.help_text.clone().unwrap_or_default();
        input_rows.push(Element::styled_text(help_text, styles.help_text));
    }

    Element::vstack(vec![
        Element::container(styles.title_container, Element::hstack(title_row)),
        Element::container(styles.input_container, Element::vstack(input_rows)),
    ])
}

/// Mounts a form field, keyed by its field name.
pub fn form_field(props: FormFieldProps) -> ComponentElement {
    let key = props.field.clone();
    component("FormField", move |_| render_form_field(&props)).key(key)
}
