//! Message catalogs and the localized-text renderer used by
//! `FormattedText` elements.

mod catalog;
mod format;

use serde::{Deserialize, Serialize};

pub use catalog::Catalog;
pub use format::interpolate;

pub const DEFAULT_LOCALE: &str = "en";

/// Localization key plus the text to show when a catalog lacks the key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageDescriptor {
    pub id: String,
    #[serde(rename = "defaultMessage")]
    pub default_message: String,
}

impl MessageDescriptor {
    pub fn new(id: impl Into<String>, default_message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            default_message: default_message.into(),
        }
    }
}
