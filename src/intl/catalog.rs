use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::trace;

use super::MessageDescriptor;
use super::format::interpolate;

/// Translated message templates for one locale, keyed by message id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    locale: String,
    messages: HashMap<String, String>,
}

impl Catalog {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            messages: HashMap::new(),
        }
    }

    /// Parses a flat JSON object mapping message ids to templates.
    pub fn from_json_str(locale: impl Into<String>, json: &str) -> Result<Self> {
        let locale = locale.into();
        let messages: HashMap<String, String> = serde_json::from_str(json)
            .with_context(|| format!("parse message catalog for locale {locale}"))?;
        Ok(Self { locale, messages })
    }

    /// Loads `<dir>/<locale>.json`.
    pub fn load(dir: impl AsRef<Path>, locale: &str) -> Result<Self> {
        let path = dir.as_ref().join(format!("{locale}.json"));
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("read message catalog {}", path.display()))?;
        Self::from_json_str(locale, &contents)
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn insert(&mut self, id: impl Into<String>, template: impl Into<String>) {
        self.messages.insert(id.into(), template.into());
    }

    pub fn render(&self, id: &str, default_message: &str) -> String {
        self.template(id, default_message).to_string()
    }

    pub fn format(&self, descriptor: &MessageDescriptor, values: &[(String, String)]) -> String {
        interpolate(
            self.template(&descriptor.id, &descriptor.default_message),
            values,
        )
    }

    fn template<'a>(&'a self, id: &str, default_message: &'a str) -> &'a str {
        match self.messages.get(id) {
            Some(template) => template,
            None => {
                trace!(locale = %self.locale, id, "message missing from catalog");
                default_message
            }
        }
    }
}
