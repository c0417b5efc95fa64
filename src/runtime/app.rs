use std::any::TypeId;
use std::collections::{HashSet, hash_map::DefaultHasher};
use std::env;
use std::hash::{Hash, Hasher};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::fs;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, info, trace, warn};

use crate::context::{AnyArc, ContextStack};
use crate::events::{DEFAULT_TICK_RATE, EventBus, FrameworkEvent};
use crate::hooks::{EffectInvocation, HookRegistry, Scope};
use crate::intl::{Catalog, interpolate};
use crate::renderer::Renderer;
use crate::styles::Stylesheet;
use crate::text_input::TextInputs;

use super::component::{ComponentElement, ComponentId};
use super::dispatcher::{AppMessage, Dispatcher};
use super::element::{Element, FlexDirection};
use super::tasks::{DefaultRuntimeDriver, RuntimeDriver};
use super::view::{ContainerView, FlexView, TextInputView, TextView, View};

#[derive(Clone, Copy)]
enum RendererMode {
    Interactive,
    Headless,
}

#[derive(Clone)]
pub struct App {
    name: &'static str,
    root: ComponentElement,
    hooks: Arc<HookRegistry>,
    inputs: Arc<TextInputs>,
    event_bus: EventBus,
    config: AppConfig,
    styles: Arc<Stylesheet>,
    styles_revision: u64,
    providers: Vec<(TypeId, AnyArc)>,
    driver: Arc<dyn RuntimeDriver>,
    stylesheet_watch: Option<PathBuf>,
    renderer_mode: RendererMode,
}

#[derive(Clone, Copy)]
pub struct AppConfig {
    pub tick_rate: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_rate: DEFAULT_TICK_RATE,
        }
    }
}

/// Output of one pass over the component tree.
struct RenderPass {
    view: View,
    effects: Vec<EffectInvocation>,
    live: HashSet<ComponentId>,
}

impl App {
    pub fn new(name: &'static str, root: ComponentElement) -> Self {
        Self {
            name,
            root,
            hooks: Arc::new(HookRegistry::new()),
            inputs: Arc::new(TextInputs::new()),
            event_bus: EventBus::new(64),
            config: AppConfig::default(),
            styles: Arc::new(Stylesheet::default()),
            styles_revision: 0,
            providers: Vec::new(),
            driver: Arc::new(DefaultRuntimeDriver),
            stylesheet_watch: None,
            renderer_mode: RendererMode::Interactive,
        }
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.styles = Arc::new(stylesheet);
        self
    }

    /// Provides `value` to every component, below any component provider.
    pub fn provide<T>(mut self, value: T) -> Self
    where
        T: Send + Sync + 'static,
    {
        self.providers.push((TypeId::of::<T>(), Arc::new(value)));
        self
    }

    pub fn watch_stylesheet<P>(mut self, path: P) -> Self
    where
        P: Into<PathBuf>,
    {
        let candidate = path.into();
        let resolved = if candidate.is_absolute() {
            candidate
        } else {
            match env::current_dir() {
                Ok(cwd) => cwd.join(&candidate),
                Err(_) => candidate,
            }
        };
        self.stylesheet_watch = Some(resolved);
        self
    }

    pub fn with_driver<D>(mut self, driver: D) -> Self
    where
        D: RuntimeDriver + 'static,
    {
        self.driver = Arc::new(driver);
        self
    }

    pub fn headless(mut self) -> Self {
        self.renderer_mode = RendererMode::Headless;
        self
    }

    pub fn inputs(&self) -> &TextInputs {
        &self.inputs
    }

    /// Renders the tree once without a terminal and returns the view.
    ///
    /// Effects are not run; state handles created during the pass schedule
    /// no renders.
    pub fn render_snapshot(&self) -> anyhow::Result<View> {
        let dispatcher = Dispatcher::detached(self.event_bus.clone());
        let pass = self.render_pass(&dispatcher)?;
        self.hooks.prune(&pass.live);
        Ok(pass.view)
    }

    /// Delivers `event` to the focused input and the event bus, as the run
    /// loop does. Returns `true` when an input consumed it.
    pub fn send_event(&self, event: FrameworkEvent) -> bool {
        let dispatcher = Dispatcher::detached(self.event_bus.clone());
        let consumed = self.inputs.handle_event(&event, &dispatcher);
        self.event_bus.publish(event);
        consumed
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        info!(app = self.name, "starting runtime");
        let (tx, mut rx) = mpsc::channel(128);
        let dispatcher = Dispatcher::new(tx.clone(), self.event_bus.clone());
        let mut renderer = match self.renderer_mode {
            RendererMode::Interactive => Renderer::new(self.name).context("initialize renderer")?,
            RendererMode::Headless => Renderer::headless().context("initialize renderer")?,
        };
        let mut last_view: Option<View> = None;

        let event_task = self.driver.spawn_terminal_events(tx.clone());
        let tick_task = self
            .driver
            .spawn_tick_loop(tx.clone(), self.config.tick_rate);
        let shutdown_task = self.driver.spawn_shutdown_watcher(tx.clone());
        let stylesheet_task = self
            .stylesheet_watch
            .clone()
            .map(|path| spawn_stylesheet_watcher(path, tx.clone()));

        if tx.send(AppMessage::RequestRender).await.is_err() {
            warn!(app = self.name, "failed to enqueue initial render request");
        }

        while let Some(message) = rx.recv().await {
            trace!(app = self.name, message = ?message, "processing app message");
            match message {
                AppMessage::RequestRender => {
                    let RenderPass {
                        view,
                        effects,
                        live,
                    } = self.render_pass(&dispatcher)?;

                    let should_render =
                        last_view.as_ref().map(|prev| prev != &view).unwrap_or(true);
                    if should_render {
                        renderer.draw(&view, &self.inputs).map_err(|err| {
                            warn!(app = self.name, error = ?err, "renderer draw failed");
                            err
                        })?;
                        trace!(app = self.name, "frame drawn");
                    }
                    last_view = Some(view);
                    trace!(
                        app = self.name,
                        effect_count = effects.len(),
                        "render completed"
                    );
                    self.run_effects(effects, &dispatcher);
                    let unmounted = self.hooks.prune(&live);
                    if unmounted > 0 {
                        debug!(app = self.name, unmounted, "pruned unmounted components");
                    }
                }
                AppMessage::ExternalEvent(event) => {
                    trace!(app = self.name, event = ?event, "dispatching external event");
                    if let FrameworkEvent::Resize(..) = event {
                        last_view = None;
                        dispatcher.request_render();
                    }
                    self.inputs.handle_event(&event, &dispatcher);
                    self.event_bus.publish(event);
                }
                AppMessage::Shutdown => {
                    info!(app = self.name, "shutdown requested");
                    break;
                }
                AppMessage::StylesheetUpdated(stylesheet) => {
                    self.styles = stylesheet;
                    self.styles_revision += 1;
                    info!(
                        app = self.name,
                        revision = self.styles_revision,
                        "stylesheet reloaded"
                    );
                    dispatcher.request_render();
                }
            }
        }

        drop(renderer);
        trace!(app = self.name, "tearing down runtime tasks");
        abort_and_log("terminal_events", event_task).await;
        abort_and_log("tick_loop", tick_task).await;
        abort_and_log("shutdown_watcher", shutdown_task).await;
        if let Some(task) = stylesheet_task {
            task.abort();
        }
        info!(app = self.name, "runtime stopped");
        Ok(())
    }

    fn render_pass(&self, dispatcher: &Dispatcher) -> anyhow::Result<RenderPass> {
        let mut live = HashSet::new();
        let mut effects = Vec::new();
        let mut context = ContextStack::new();
        for (type_id, value) in &self.providers {
            context.push(*type_id, value.clone());
        }
        let mut path = vec![0usize];
        self.inputs.begin_frame();
        let view = self
            .render_element(
                Element::from(self.root.clone()),
                dispatcher,
                &mut path,
                &mut context,
                &mut live,
                &mut effects,
            )?
            .unwrap_or(View::Empty);
        self.inputs.end_frame();
        Ok(RenderPass {
            view,
            effects,
            live,
        })
    }

    fn run_effects(&self, effects: Vec<EffectInvocation>, dispatcher: &Dispatcher) {
        for effect in effects {
            let EffectInvocation {
                component_id,
                slot_index,
                deps,
                task,
            } = effect;
            trace!(
                component = %component_id,
                slot_index,
                "running effect cleanup"
            );
            self.hooks
                .with_effect_slot(&component_id, slot_index, |slot| {
                    if let Some(cleanup) = slot.take_cleanup() {
                        cleanup();
                    }
                });
            trace!(component = %component_id, slot_index, "invoking effect task");
            let cleanup = task(dispatcher.clone());
            self.hooks
                .with_effect_slot(&component_id, slot_index, |slot| {
                    slot.set_deps(deps);
                    slot.set_cleanup(cleanup);
                });
        }
    }

    fn render_children(
        &self,
        children: Vec<Element>,
        dispatcher: &Dispatcher,
        path: &mut Vec<usize>,
        context: &mut ContextStack,
        live: &mut HashSet<ComponentId>,
        effects: &mut Vec<EffectInvocation>,
    ) -> anyhow::Result<Vec<View>> {
        let mut views = Vec::new();
        for (index, child) in children.into_iter().enumerate() {
            path.push(index);
            let view = self.render_element(child, dispatcher, path, context, live, effects);
            path.pop();
            if let Some(view) = view? {
                views.push(view);
            }
        }
        Ok(views)
    }

    fn render_element(
        &self,
        element: Element,
        dispatcher: &Dispatcher,
        path: &mut Vec<usize>,
        context: &mut ContextStack,
        live: &mut HashSet<ComponentId>,
        effects: &mut Vec<EffectInvocation>,
    ) -> anyhow::Result<Option<View>> {
        match element {
            Element::Empty => Ok(Some(View::Empty)),
            Element::Text(node) => Ok(Some(View::Text(TextView {
                content: node.content,
                style: node.style,
            }))),
            Element::FormattedText(node) => {
                let content = match context.get::<Catalog>() {
                    Some(catalog) => catalog.format(&node.message, &node.values),
                    None => interpolate(&node.message.default_message, &node.values),
                };
                Ok(Some(View::Text(TextView {
                    content,
                    style: node.style,
                })))
            }
            Element::Flex(node) => {
                let children =
                    self.render_children(node.children, dispatcher, path, context, live, effects)?;
                if children.is_empty() {
                    Ok(Some(View::Empty))
                } else {
                    Ok(Some(View::Flex(FlexView {
                        direction: node.direction,
                        children,
                    })))
                }
            }
            Element::Container(node) => {
                path.push(0);
                let child =
                    self.render_element(*node.child, dispatcher, path, context, live, effects);
                path.pop();
                Ok(Some(View::Container(ContainerView {
                    style: node.style,
                    child: child?.map(Box::new),
                })))
            }
            Element::Input(node) => {
                let snapshot = self.inputs.sync(&node);
                Ok(Some(View::Input(TextInputView {
                    id: node.id,
                    value: snapshot.value,
                    placeholder: node.placeholder,
                    cursor: snapshot.cursor,
                    focused: snapshot.focused,
                    editable: node.editable,
                    max_length: node.max_length,
                    auto_capitalize: node.auto_capitalize,
                    auto_correct: node.auto_correct,
                    disable_fullscreen_ui: node.disable_fullscreen_ui,
                    style: node.style,
                })))
            }
            Element::Fragment(children) => {
                let mut views =
                    self.render_children(children, dispatcher, path, context, live, effects)?;
                if views.is_empty() {
                    Ok(Some(View::Empty))
                } else if views.len() == 1 {
                    Ok(views.pop())
                } else {
                    Ok(Some(View::Flex(FlexView {
                        direction: FlexDirection::Column,
                        children: views,
                    })))
                }
            }
            Element::Component(component) => {
                self.render_component(component, dispatcher, path, context, live, effects)
            }
        }
    }

    fn render_component(
        &self,
        component: ComponentElement,
        dispatcher: &Dispatcher,
        path: &mut Vec<usize>,
        context: &mut ContextStack,
        live: &mut HashSet<ComponentId>,
        effects: &mut Vec<EffectInvocation>,
    ) -> anyhow::Result<Option<View>> {
        let id = ComponentId::new(path, component.name, component.key.as_deref());
        if !live.insert(id.clone()) {
            warn!(component = %id, "duplicate component identity in one render");
        }
        let store = self.hooks.store_for(&id);
        let (child, provided) = {
            let mut scope = Scope::new(
                id,
                store,
                dispatcher.clone(),
                context,
                self.styles.clone(),
                self.styles_revision,
            );
            let child = (component.render)(&mut scope);
            effects.extend(scope.take_effects());
            (child, scope.take_provided())
        };
        for (type_id, value) in &provided {
            context.push(*type_id, value.clone());
        }
        let view = self.render_element(child, dispatcher, path, context, live, effects);
        for (type_id, _) in provided.iter().rev() {
            context.pop(*type_id);
        }
        view
    }
}

fn spawn_stylesheet_watcher(path: PathBuf, tx: mpsc::Sender<AppMessage>) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(path = %path.display(), "stylesheet watcher started");
        let mut snapshot = fingerprint_if_exists(&path).await;
        loop {
            match maybe_reload_stylesheet(&path, &mut snapshot).await {
                Ok(Some(stylesheet)) => {
                    info!(path = %path.display(), "stylesheet change detected");
                    if tx
                        .send(AppMessage::StylesheetUpdated(stylesheet))
                        .await
                        .is_err()
                    {
                        break;
                    }
                }
                Ok(None) => {}
                Err(err) => warn!(path = %path.display(), error = ?err, "stylesheet reload failed"),
            }
            sleep(Duration::from_millis(400)).await;
        }
    })
}

async fn fingerprint_if_exists(path: &Path) -> Option<StylesheetSnapshot> {
    match fs::read_to_string(path).await {
        Ok(contents) => Some(StylesheetSnapshot {
            fingerprint: fingerprint(&contents),
        }),
        Err(_) => None,
    }
}

async fn maybe_reload_stylesheet(
    path: &Path,
    snapshot: &mut Option<StylesheetSnapshot>,
) -> anyhow::Result<Option<Arc<Stylesheet>>> {
    let contents = match fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    let fingerprint = fingerprint(&contents);
    if snapshot
        .as_ref()
        .map(|snap| snap.fingerprint == fingerprint)
        .unwrap_or(false)
    {
        return Ok(None);
    }
    let stylesheet = Stylesheet::parse(&contents)
        .with_context(|| format!("parse stylesheet {}", path.display()))?;
    *snapshot = Some(StylesheetSnapshot { fingerprint });
    Ok(Some(Arc::new(stylesheet)))
}

#[derive(Clone, Copy, Debug, Default)]
struct StylesheetSnapshot {
    fingerprint: u64,
}

fn fingerprint(input: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    input.hash(&mut hasher);
    hasher.finish()
}

async fn abort_and_log(label: &str, handle: JoinHandle<()>) {
    handle.abort();
    match handle.await {
        Ok(_) => trace!(task = label, "task aborted cleanly"),
        Err(err) if err.is_cancelled() => trace!(task = label, "task cancellation confirmed"),
        Err(err) => warn!(task = label, error = ?err, "task join failed"),
    }
}
