use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use crossterm::event::KeyCode;
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};

use profile_form::intl::DEFAULT_LOCALE;
use profile_form::runtime::AppConfig;
use profile_form::styles::{BoxStyle, Spacing, TextStyle};
use profile_form::theme::DEFAULT_THEME;
use profile_form::{
    App, Catalog, Element, FormFieldProps, FormattedTextNode, MessageDescriptor, Scope,
    Stylesheet, Theme, ValueUpdate, component, form_field, is_key,
};

const APP_NAME: &str = "Edit Profile";
const THEME_STYLES: &str = include_str!("../styles/theme.css");
const THEME_STYLES_PATH: &str = "styles/theme.css";
const CATALOG_DIR: &str = "i18n";
const EMBEDDED_CATALOG: &str = include_str!("../i18n/en.json");
const EMAIL_FIELD: &str = "email";

/// One row of the edit profile screen.
struct FieldSpec {
    field: &'static str,
    label_id: &'static str,
    label: &'static str,
    max_length: Option<usize>,
    optional: bool,
}

const FIELDS: [FieldSpec; 6] = [
    FieldSpec {
        field: "first_name",
        label_id: "user.settings.general.firstName",
        label: "First Name",
        max_length: Some(64),
        optional: false,
    },
    FieldSpec {
        field: "last_name",
        label_id: "user.settings.general.lastName",
        label: "Last Name",
        max_length: Some(64),
        optional: false,
    },
    FieldSpec {
        field: "username",
        label_id: "user.settings.general.username",
        label: "Username",
        max_length: Some(22),
        optional: false,
    },
    FieldSpec {
        field: "nickname",
        label_id: "user.settings.general.nickname",
        label: "Nickname",
        max_length: Some(64),
        optional: true,
    },
    FieldSpec {
        field: "position",
        label_id: "user.settings.general.position",
        label: "Position",
        max_length: Some(128),
        optional: true,
    },
    FieldSpec {
        field: EMAIL_FIELD,
        label_id: "user.settings.general.email",
        label: "Email",
        max_length: None,
        optional: false,
    },
];

/// Host settings read from the environment at startup.
struct ScreenConfig {
    theme: String,
    locked: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let stylesheet = load_stylesheet()?;
    let theme = env_or("PROFILE_FORM_THEME", DEFAULT_THEME);
    if Theme::preset(&theme).is_none() && !stylesheet.ids_for("theme").contains(&theme) {
        warn!(
            theme = %theme,
            available = ?stylesheet.ids_for("theme"),
            "unknown theme, using denim colors",
        );
    }
    let catalog = load_catalog(&env_or("PROFILE_FORM_LOCALE", DEFAULT_LOCALE))?;
    let locked = locked_fields();
    info!(
        theme = %theme,
        locale = catalog.locale(),
        locked = ?locked,
        "edit profile screen configured"
    );

    let mut app = App::new(APP_NAME, component("EditProfile", edit_profile))
        .with_config(AppConfig {
            tick_rate: Duration::from_millis(250),
        })
        .with_stylesheet(stylesheet)
        .provide(catalog)
        .provide(ScreenConfig { theme, locked });
    if env_flag("PROFILE_FORM_WATCH_THEME") {
        if Path::new(THEME_STYLES_PATH).exists() {
            app = app.watch_stylesheet(THEME_STYLES_PATH);
        } else {
            warn!(
                path = THEME_STYLES_PATH,
                "PROFILE_FORM_WATCH_THEME was set but stylesheet file was not found",
            );
        }
    }
    app.run().await
}

fn load_stylesheet() -> anyhow::Result<Stylesheet> {
    match Stylesheet::from_file(THEME_STYLES_PATH) {
        Ok(sheet) => Ok(sheet),
        Err(err) => {
            warn!(
                path = THEME_STYLES_PATH,
                error = ?err,
                "unable to read stylesheet from disk, falling back to embedded CSS",
            );
            Stylesheet::parse(THEME_STYLES).context("parse embedded theme stylesheet")
        }
    }
}

fn load_catalog(locale: &str) -> anyhow::Result<Catalog> {
    match Catalog::load(CATALOG_DIR, locale) {
        Ok(catalog) => Ok(catalog),
        Err(err) => {
            warn!(
                locale,
                error = ?err,
                "unable to load message catalog, falling back to embedded English",
            );
            Catalog::from_json_str(DEFAULT_LOCALE, EMBEDDED_CATALOG)
                .context("parse embedded message catalog")
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn env_flag(name: &str) -> bool {
    match std::env::var(name) {
        Ok(value) => {
            let normalized = value.to_ascii_lowercase();
            matches!(normalized.as_str(), "1" | "true" | "on")
        }
        Err(_) => false,
    }
}

fn locked_fields() -> Vec<String> {
    std::env::var("PROFILE_FORM_LOCKED")
        .map(|value| {
            value
                .split(',')
                .map(str::trim)
                .filter(|field| !field.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[derive(Clone, Debug, PartialEq)]
struct Profile {
    values: BTreeMap<String, String>,
}

impl Profile {
    fn demo() -> Self {
        let values = [
            ("first_name", "Ada"),
            ("last_name", "Lovelace"),
            ("username", "ada"),
            ("nickname", ""),
            ("position", "Analyst"),
            (EMAIL_FIELD, "ada@example.com"),
        ]
        .into_iter()
        .map(|(field, value)| (field.to_string(), value.to_string()))
        .collect();
        Self { values }
    }

    fn value(&self, field: &str) -> String {
        self.values.get(field).cloned().unwrap_or_default()
    }

    fn changed_from(&self, original: &Profile) -> usize {
        self.values
            .iter()
            .filter(|(field, value)| original.values.get(*field) != Some(*value))
            .count()
    }
}

#[derive(Clone)]
enum ProfileAction {
    Update(ValueUpdate),
    Reset,
}

fn reduce_profile(profile: &mut Profile, action: ProfileAction) {
    match action {
        ProfileAction::Update(update) => profile.values.extend(update),
        ProfileAction::Reset => *profile = Profile::demo(),
    }
}

fn edit_profile(ctx: &mut Scope) -> Element {
    let config = ctx.use_context::<ScreenConfig>().unwrap_or_else(|| {
        Arc::new(ScreenConfig {
            theme: DEFAULT_THEME.to_string(),
            locked: Vec::new(),
        })
    });
    let catalog = ctx
        .use_context::<Catalog>()
        .unwrap_or_else(|| Arc::new(Catalog::new(DEFAULT_LOCALE)));
    let theme = {
        let styles = ctx.styles_arc();
        let revision = ctx.styles_revision();
        let name = config.theme.clone();
        ctx.use_memo((revision, name.clone()), move || {
            Theme::from_stylesheet(&styles, &name)
        })
    };

    let (profile, profile_dispatch) = ctx.use_reducer(Profile::demo, reduce_profile);
    let original = ctx.use_memo((), Profile::demo);
    let changed = {
        let current = profile.clone();
        let original = original.clone();
        ctx.use_memo(profile.clone(), move || current.changed_from(&original))
    };

    let update_profile = {
        let dispatch = profile_dispatch.clone();
        ctx.use_callback((), move || {
            move |update: ValueUpdate| dispatch.dispatch(ProfileAction::Update(update))
        })
    };

    let reset = profile_dispatch.clone();
    ctx.use_effect((), move |dispatcher| {
        let mut events = dispatcher.events().subscribe();
        let handle = tokio::spawn(async move {
            loop {
                match events.recv().await {
                    Ok(event) if is_key(&event, KeyCode::Esc) => {
                        reset.dispatch(ProfileAction::Reset)
                    }
                    Ok(_) | Err(RecvError::Lagged(_)) => continue,
                    Err(RecvError::Closed) => break,
                }
            }
        });
        Some(Box::new(move || handle.abort()))
    });

    let text = theme.center_channel_color;
    let muted = theme.faded(text, 0.5);
    let mut rows = vec![Element::formatted_text(
        FormattedTextNode::new(MessageDescriptor::new("mobile.routes.edit_profile", APP_NAME))
            .style(
                TextStyle::default()
                    .color(theme.button_color)
                    .background(theme.sidebar_bg)
                    .bold()
                    .padding(Spacing::horizontal(1)),
            ),
    )];

    for spec in &FIELDS {
        let update_profile = update_profile.clone();
        let mut props = FormFieldProps::new(
            spec.field,
            profile.value(spec.field),
            MessageDescriptor::new(spec.label_id, spec.label),
            theme.clone(),
            move |update: ValueUpdate| update_profile(update),
        )
        .optional(spec.optional);
        if let Some(max_length) = spec.max_length {
            props = props.max_length(max_length);
        }
        if spec.field == EMAIL_FIELD {
            props = props.disabled(true).help_text(catalog.render(
                "user.settings.general.emailCantUpdate",
                "Email must be updated using a web client or desktop application.",
            ));
        } else if config.locked.iter().any(|locked| locked == spec.field) {
            props = props.disabled(true).help_text(catalog.render(
                "user.settings.general.field_handled_externally",
                "This field is handled through your login provider. If you want to change it, you need to do so through your login provider.",
            ));
        }
        rows.push(form_field(props).into());
    }

    let status = if *changed == 0 {
        FormattedTextNode::new(MessageDescriptor::new(
            "edit_profile.no_changes",
            "No unsaved changes",
        ))
    } else {
        FormattedTextNode::new(MessageDescriptor::new(
            "edit_profile.changes",
            "{count} unsaved change(s)",
        ))
        .value("count", changed.to_string())
    };
    rows.push(Element::formatted_text(
        status.style(
            TextStyle::default()
                .color(theme.link_color)
                .margin(Spacing::top(1).plus(Spacing::left(1))),
        ),
    ));
    rows.push(Element::formatted_text(
        FormattedTextNode::new(MessageDescriptor::new(
            "edit_profile.hint",
            "Tab/Shift+Tab to move between fields, Esc to discard changes, Ctrl+C to quit",
        ))
        .style(TextStyle::default().color(muted).margin(Spacing::left(1))),
    ));

    Element::container(
        BoxStyle::default().background(theme.center_channel_bg),
        Element::vstack(rows),
    )
}
