use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::trace;

use super::Theme;

type Builder<S> = Box<dyn Fn(&Theme) -> S + Send + Sync>;

/// Style mapping derived from a theme, cached for the last theme seen.
///
/// The cache key is the identity of the `Arc<Theme>`, not its contents.
pub struct ThemedStyleSheet<S> {
    build: Builder<S>,
    cache: Mutex<Option<(Arc<Theme>, Arc<S>)>>,
}

pub fn make_style_sheet_from_theme<S, F>(build: F) -> ThemedStyleSheet<S>
where
    F: Fn(&Theme) -> S + Send + Sync + 'static,
{
    ThemedStyleSheet {
        build: Box::new(build),
        cache: Mutex::new(None),
    }
}

impl<S> ThemedStyleSheet<S> {
    pub fn get(&self, theme: &Arc<Theme>) -> Arc<S> {
        let mut cache = self.cache.lock();
        if let Some((cached_theme, styles)) = cache.as_ref() {
            if Arc::ptr_eq(cached_theme, theme) {
                return styles.clone();
            }
        }
        trace!(theme = %theme.name, "building themed stylesheet");
        let styles = Arc::new((self.build)(theme));
        *cache = Some((theme.clone(), styles.clone()));
        styles
    }

    pub fn invalidate(&self) {
        self.cache.lock().take();
    }
}

impl<S> fmt::Debug for ThemedStyleSheet<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cached = self.cache.lock().as_ref().map(|(theme, _)| theme.name.clone());
        f.debug_struct("ThemedStyleSheet")
            .field("cached_theme", &cached)
            .finish()
    }
}
