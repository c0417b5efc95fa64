mod options;
mod registry;
mod state;
#[cfg(test)]
mod tests;

pub use options::{AutoCapitalize, ChangeTextFn};
pub use registry::TextInputs;
pub use state::{Hitbox, TextInputSnapshot, TextInputState};
