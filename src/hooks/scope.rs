use std::any::TypeId;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::context::{AnyArc, ContextStack};
use crate::runtime::{ComponentId, Dispatcher};
use crate::styles::Stylesheet;

use super::handles::{ReducerDispatch, ReducerFn, StateHandle};
use super::registry::{AnySlot, Cleanup, EffectHook, EffectInvocation, HookSlot, HookStore};

/// What a component sees while it renders: its hook slots, the contexts
/// provided by its ancestors and the app stylesheet.
pub struct Scope<'a> {
    component_id: ComponentId,
    store: Arc<Mutex<HookStore>>,
    dispatcher: Dispatcher,
    hook_cursor: usize,
    context: &'a ContextStack,
    pending_effects: Vec<EffectInvocation>,
    provided: Vec<(TypeId, AnyArc)>,
    styles: Arc<Stylesheet>,
    styles_revision: u64,
}

impl<'a> Scope<'a> {
    pub(crate) fn new(
        component_id: ComponentId,
        store: Arc<Mutex<HookStore>>,
        dispatcher: Dispatcher,
        context: &'a ContextStack,
        styles: Arc<Stylesheet>,
        styles_revision: u64,
    ) -> Self {
        Self {
            component_id,
            store,
            dispatcher,
            hook_cursor: 0,
            context,
            pending_effects: Vec::new(),
            provided: Vec::new(),
            styles,
            styles_revision,
        }
    }

    pub fn id(&self) -> &ComponentId {
        &self.component_id
    }

    pub fn use_state<T, F>(&mut self, init: F) -> (T, StateHandle<T>)
    where
        T: Clone + Send + 'static,
        F: FnOnce() -> T,
    {
        let index = self.next_index();
        let shared = {
            let mut store = self.store.lock();
            let slot = store.slot(index);
            match slot {
                HookSlot::Vacant => {
                    let state = Arc::new(Mutex::new(init()));
                    *slot = HookSlot::State(Box::new(state.clone()));
                    state
                }
                HookSlot::State(existing) => existing
                    .downcast_ref::<Arc<Mutex<T>>>()
                    .expect("use_state hook order mismatch")
                    .clone(),
                _ => panic!("use_state hook order mismatch"),
            }
        };
        let value = shared.lock().clone();
        let handle = StateHandle::new(shared, self.dispatcher.clone());
        (value, handle)
    }

    pub fn use_effect<D, F>(&mut self, deps: D, effect: F)
    where
        D: PartialEq + Clone + Send + Sync + 'static,
        F: FnOnce(Dispatcher) -> Option<Cleanup> + Send + Sync + 'static,
    {
        let index = self.next_index();
        let should_run = {
            let mut store = self.store.lock();
            let slot = store.slot(index);
            match slot {
                HookSlot::Vacant => {
                    *slot = HookSlot::Effect(EffectHook::default());
                    true
                }
                HookSlot::Effect(effect_slot) => effect_slot
                    .deps
                    .as_ref()
                    .and_then(|value| value.downcast_ref::<D>())
                    .map(|existing| existing != &deps)
                    .unwrap_or(true),
                _ => panic!("use_effect hook order mismatch"),
            }
        };

        if should_run {
            self.pending_effects.push(EffectInvocation {
                component_id: self.component_id.clone(),
                slot_index: index,
                deps: Box::new(deps),
                task: Box::new(effect),
            });
        }
    }

    /// Makes `value` visible to `use_context` in this component's subtree.
    ///
    /// The component providing the value does not see it itself.
    pub fn provide_context<T>(&mut self, value: T)
    where
        T: Send + Sync + 'static,
    {
        self.provide_shared(Arc::new(value));
    }

    pub fn provide_shared<T>(&mut self, value: Arc<T>)
    where
        T: Send + Sync + 'static,
    {
        self.provided.push((TypeId::of::<T>(), value));
    }

    pub fn use_context<T>(&self) -> Option<Arc<T>>
    where
        T: Send + Sync + 'static,
    {
        self.context.get::<T>()
    }

    pub fn use_memo<T, D, F>(&mut self, deps: D, compute: F) -> Arc<T>
    where
        T: Send + Sync + 'static,
        D: PartialEq + Clone + Send + Sync + 'static,
        F: FnOnce() -> T,
    {
        let index = self.next_index();
        let result = {
            let mut store = self.store.lock();
            let slot = store.slot(index);
            match slot {
                HookSlot::Vacant => {
                    let value = Arc::new(compute());
                    *slot = HookSlot::Memo(Box::new(MemoEntry::new(deps.clone(), value.clone())));
                    value
                }
                HookSlot::Memo(entry) => entry
                    .downcast_mut::<MemoEntry>()
                    .expect("use_memo hook order mismatch")
                    .apply_or_update(deps, compute),
                _ => panic!("use_memo hook order mismatch"),
            }
        };
        result
    }

    pub fn use_callback<T, D, F>(&mut self, deps: D, factory: F) -> Arc<T>
    where
        T: Send + Sync + 'static,
        D: PartialEq + Clone + Send + Sync + 'static,
        F: FnOnce() -> T,
    {
        self.use_memo(deps, factory)
    }

    pub fn use_reducer<S, A, Init, R>(
        &mut self,
        init: Init,
        reducer: R,
    ) -> (S, ReducerDispatch<S, A>)
    where
        S: Clone + Send + 'static,
        A: Send + 'static,
        Init: FnOnce() -> S,
        R: Fn(&mut S, A) + Send + Sync + 'static,
    {
        let index = self.next_index();
        let (shared, driver) = {
            let mut store = self.store.lock();
            let slot = store.slot(index);
            match slot {
                HookSlot::Vacant => {
                    let state = Arc::new(Mutex::new(init()));
                    let reducer = into_reducer_arc(reducer);
                    *slot = HookSlot::Reducer(Box::new(ReducerEntry::new(
                        state.clone(),
                        reducer.clone(),
                    )));
                    (state, reducer)
                }
                HookSlot::Reducer(entry) => {
                    let entry = entry
                        .downcast_mut::<ReducerEntry<S, A>>()
                        .expect("use_reducer hook order mismatch");
                    let reducer = into_reducer_arc(reducer);
                    entry.update_reducer(reducer.clone());
                    (entry.state.clone(), entry.reducer.clone())
                }
                _ => panic!("use_reducer hook order mismatch"),
            }
        };
        let value = shared.lock().clone();
        let handle = ReducerDispatch::new(shared, driver, self.dispatcher.clone());
        (value, handle)
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn styles(&self) -> &Stylesheet {
        &self.styles
    }

    pub fn styles_arc(&self) -> Arc<Stylesheet> {
        self.styles.clone()
    }

    /// Bumped each time the stylesheet is reloaded; use it as a memo dependency
    /// for anything derived from `styles()`.
    pub fn styles_revision(&self) -> u64 {
        self.styles_revision
    }

    pub(crate) fn take_effects(&mut self) -> Vec<EffectInvocation> {
        std::mem::take(&mut self.pending_effects)
    }

    pub(crate) fn take_provided(&mut self) -> Vec<(TypeId, AnyArc)> {
        std::mem::take(&mut self.provided)
    }

    fn next_index(&mut self) -> usize {
        let current = self.hook_cursor;
        self.hook_cursor += 1;
        current
    }
}

struct MemoEntry {
    deps: Box<AnySlot>,
    value: Box<AnySlot>,
}

struct ReducerEntry<S: Send + 'static, A: Send + 'static> {
    state: Arc<Mutex<S>>,
    reducer: Arc<ReducerFn<S, A>>,
}

impl<S: Send + 'static, A: Send + 'static> ReducerEntry<S, A> {
    fn new(state: Arc<Mutex<S>>, reducer: Arc<ReducerFn<S, A>>) -> Self {
        Self { state, reducer }
    }

    fn update_reducer(&mut self, reducer: Arc<ReducerFn<S, A>>) {
        self.reducer = reducer;
    }
}

impl MemoEntry {
    fn new<D, T>(deps: D, value: Arc<T>) -> Self
    where
        D: Send + Sync + 'static,
        T: Send + Sync + 'static,
    {
        Self {
            deps: Box::new(deps),
            value: Box::new(value),
        }
    }

    fn apply_or_update<T, D, F>(&mut self, deps: D, compute: F) -> Arc<T>
    where
        T: Send + Sync + 'static,
        D: PartialEq + Clone + Send + Sync + 'static,
        F: FnOnce() -> T,
    {
        let should_recompute = self
            .deps
            .as_ref()
            .downcast_ref::<D>()
            .map(|existing| existing != &deps)
            .unwrap_or(true);

        if should_recompute {
            let value = Arc::new(compute());
            self.deps = Box::new(deps);
            self.value = Box::new(value.clone());
            value
        } else {
            self.value
                .as_ref()
                .downcast_ref::<Arc<T>>()
                .expect("use_memo stored value mismatch")
                .clone()
        }
    }
}

fn into_reducer_arc<S, A, R>(reducer: R) -> Arc<ReducerFn<S, A>>
where
    S: Send + 'static,
    A: Send + 'static,
    R: Fn(&mut S, A) + Send + Sync + 'static,
{
    Arc::new(move |state: &mut S, action: A| reducer(state, action))
}
