mod computed;
mod layout;
mod parser;
mod query;
mod stylesheet;
#[cfg(test)]
mod tests;

pub use computed::ComputedStyle;
pub use layout::{BoxStyle, Borders, Spacing, TextStyle};
pub use query::StyleQuery;
pub use stylesheet::Stylesheet;
