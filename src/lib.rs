pub mod components;
pub mod context;
pub mod events;
pub mod hooks;
pub mod intl;
pub mod renderer;
pub mod runtime;
pub mod styles;
pub mod text_input;
pub mod theme;

pub use components::{FormFieldProps, ValueUpdate, form_field};
pub use events::{FrameworkEvent, is_ctrl_c, is_key, is_mouse_click, mouse_position};
pub use hooks::{ReducerDispatch, Scope, StateHandle};
pub use intl::{Catalog, MessageDescriptor};
pub use runtime::{
    App, AppConfig, ComponentElement, Dispatcher, Element, FlexDirection, FormattedTextNode,
    TextInputNode, View, component,
};
pub use styles::{ComputedStyle, StyleQuery, Stylesheet};
pub use text_input::{AutoCapitalize, TextInputs};
pub use theme::{Theme, change_opacity, make_style_sheet_from_theme};
