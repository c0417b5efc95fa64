mod app;
mod component;
mod dispatcher;
mod element;
mod tasks;
mod view;

#[cfg(test)]
mod tests;

pub use ratatui::style::Color;

pub use app::{App, AppConfig};
pub use component::{ComponentElement, ComponentFn, ComponentId, component};
pub use dispatcher::{AppMessage, Dispatcher};
pub use element::{
    ContainerNode, Element, FlexDirection, FlexNode, FormattedTextNode, TextInputNode, TextNode,
};
pub use tasks::{DefaultRuntimeDriver, RuntimeDriver};
pub use view::{ContainerView, FlexView, TextInputView, TextView, View};
