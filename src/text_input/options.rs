use std::sync::Arc;

/// Called with the full text after every edit.
pub type ChangeTextFn = Arc<dyn Fn(String) + Send + Sync>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AutoCapitalize {
    #[default]
    None,
    Sentences,
    Words,
    Characters,
}

impl AutoCapitalize {
    /// Transforms `ch` given the text already before the cursor.
    pub fn apply(self, preceding: &str, ch: char) -> String {
        let upper = match self {
            AutoCapitalize::None => false,
            AutoCapitalize::Characters => true,
            AutoCapitalize::Words => preceding
                .chars()
                .last()
                .map(char::is_whitespace)
                .unwrap_or(true),
            AutoCapitalize::Sentences => {
                let ends_with_space = preceding
                    .chars()
                    .last()
                    .map(char::is_whitespace)
                    .unwrap_or(true);
                let sentence_over = preceding
                    .trim_end()
                    .chars()
                    .last()
                    .map(|last| matches!(last, '.' | '!' | '?'))
                    .unwrap_or(true);
                ends_with_space && sentence_over
            }
        };
        if upper {
            ch.to_uppercase().collect()
        } else {
            ch.to_string()
        }
    }
}
