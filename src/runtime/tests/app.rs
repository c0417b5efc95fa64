use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::events::FrameworkEvent;
use crate::intl::{Catalog, MessageDescriptor};
use crate::runtime::{
    App, AppMessage, Element, FormattedTextNode, RuntimeDriver, TextInputNode, View, component,
};

fn key(code: KeyCode) -> FrameworkEvent {
    FrameworkEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn texts(view: &View) -> Vec<String> {
    view.texts()
        .into_iter()
        .map(|text| text.content.clone())
        .collect()
}

#[derive(Debug, PartialEq)]
struct Label(&'static str);

#[test]
fn formatted_text_uses_provided_catalog() {
    let mut catalog = Catalog::new("es");
    catalog.insert("channel_modal.optional", "(opcional)");
    let root = component("Root", |_| {
        Element::formatted_text(FormattedTextNode::new(MessageDescriptor::new(
            "channel_modal.optional",
            "(optional)",
        )))
    });

    let localized = App::new("test", root.clone())
        .provide(catalog)
        .render_snapshot()
        .expect("render");
    let fallback = App::new("test", root).render_snapshot().expect("render");

    assert_eq!(texts(&localized), vec!["(opcional)"]);
    assert_eq!(texts(&fallback), vec!["(optional)"]);
}

#[test]
fn component_context_reaches_descendants_only() {
    fn read_label(scope: &mut crate::hooks::Scope<'_>) -> Element {
        let label = scope
            .use_context::<Label>()
            .map(|label| label.0)
            .unwrap_or("none");
        Element::text(label)
    }

    let root = component("Root", |_| {
        Element::vstack(vec![
            component("Provider", |scope| {
                scope.provide_context(Label("inner"));
                component("Reader", read_label).into()
            })
            .into(),
            component("Sibling", read_label).into(),
        ])
    });

    let view = App::new("test", root)
        .provide(Label("outer"))
        .render_snapshot()
        .expect("render");

    assert_eq!(texts(&view), vec!["inner", "outer"]);
}

#[test]
fn controlled_input_reports_keystrokes_and_shows_state() {
    let root = component("Root", |scope| {
        let (value, handle) = scope.use_state(|| "ada".to_string());
        Element::text_input(
            TextInputNode::new("username", value).on_change_text(move |next| handle.set(next)),
        )
    });
    let app = App::new("test", root);

    let first = app.render_snapshot().expect("render");
    let input = first.find_input("username").expect("input rendered");
    assert_eq!(input.value, "ada");
    assert!(input.focused);

    assert!(app.send_event(key(KeyCode::Char('1'))));
    let second = app.render_snapshot().expect("render");
    assert_eq!(second.find_input("username").map(|i| i.value.as_str()), Some("ada1"));
}

#[test]
fn rejected_edit_reverts_to_prop_value() {
    let root = component("Root", |_| {
        Element::text_input(TextInputNode::new("locked", "fixed").on_change_text(|_| {}))
    });
    let app = App::new("test", root);

    app.render_snapshot().expect("render");
    app.send_event(key(KeyCode::Char('x')));
    assert_eq!(app.inputs().value("locked").as_deref(), Some("fixedx"));

    let view = app.render_snapshot().expect("render");
    assert_eq!(view.find_input("locked").map(|i| i.value.as_str()), Some("fixed"));
}

#[test]
fn memo_is_computed_once_across_snapshots() {
    let computed = Arc::new(AtomicUsize::new(0));
    let counter = computed.clone();
    let root = component("Root", move |scope| {
        let counter = counter.clone();
        let label = scope.use_memo("en", move || {
            counter.fetch_add(1, Ordering::SeqCst);
            "memoized".to_string()
        });
        Element::text(label.as_str())
    });
    let app = App::new("test", root);

    app.render_snapshot().expect("render");
    let view = app.render_snapshot().expect("render");

    assert_eq!(texts(&view), vec!["memoized"]);
    assert_eq!(computed.load(Ordering::SeqCst), 1);
}

#[test]
fn fragment_with_single_child_collapses() {
    let root = component("Root", |_| Element::fragment(vec![Element::text("only")]));

    let view = App::new("test", root).render_snapshot().expect("render");

    assert!(matches!(view, View::Text(ref text) if text.content == "only"));
}

/// Replays a fixed list of terminal events after the first render, then
/// shuts the app down.
struct ScriptedDriver {
    events: Vec<FrameworkEvent>,
}

impl RuntimeDriver for ScriptedDriver {
    fn spawn_terminal_events(&self, tx: mpsc::Sender<AppMessage>) -> JoinHandle<()> {
        let events = self.events.clone();
        tokio::spawn(async move {
            let _ = tx.send(AppMessage::RequestRender).await;
            for event in events {
                let _ = tx.send(AppMessage::ExternalEvent(event)).await;
            }
            let _ = tx.send(AppMessage::Shutdown).await;
        })
    }

    fn spawn_tick_loop(&self, _tx: mpsc::Sender<AppMessage>, _rate: Duration) -> JoinHandle<()> {
        tokio::spawn(async {})
    }

    fn spawn_shutdown_watcher(&self, _tx: mpsc::Sender<AppMessage>) -> JoinHandle<()> {
        tokio::spawn(async {})
    }
}

#[tokio::test]
async fn run_loop_routes_driver_events_to_inputs() {
    let changes = Arc::new(Mutex::new(Vec::new()));
    let recorded = changes.clone();
    let root = component("Root", move |scope| {
        let (value, handle) = scope.use_state(|| "ada".to_string());
        let recorded = recorded.clone();
        Element::text_input(TextInputNode::new("username", value).on_change_text(
            move |next| {
                recorded.lock().push(next.clone());
                handle.set(next);
            },
        ))
    });
    let driver = ScriptedDriver {
        events: vec![key(KeyCode::Char('1')), key(KeyCode::Char('2'))],
    };

    App::new("test", root)
        .headless()
        .with_driver(driver)
        .run()
        .await
        .expect("run");

    assert_eq!(*changes.lock(), vec!["ada1".to_string(), "ada12".to_string()]);
}
