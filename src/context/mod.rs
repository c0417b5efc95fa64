use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

pub(crate) type AnyArc = Arc<dyn Any + Send + Sync>;

/// Typed provider stack threaded through a single render pass.
///
/// Each type keeps its own layer list so nested providers shadow outer ones
/// until they are popped again.
#[derive(Default, Debug)]
pub struct ContextStack {
    layers: HashMap<TypeId, Vec<AnyArc>>,
}

impl ContextStack {
    pub fn new() -> Self {
        Self {
            layers: HashMap::new(),
        }
    }

    pub fn provide<T>(&mut self, value: T)
    where
        T: Send + Sync + 'static,
    {
        self.push(TypeId::of::<T>(), Arc::new(value));
    }

    pub fn get<T>(&self) -> Option<Arc<T>>
    where
        T: Send + Sync + 'static,
    {
        self.layers
            .get(&TypeId::of::<T>())
            .and_then(|entries| entries.last())
            .and_then(|arc| arc.clone().downcast::<T>().ok())
    }

    pub(crate) fn push(&mut self, type_id: TypeId, value: AnyArc) {
        self.layers.entry(type_id).or_default().push(value);
    }

    pub(crate) fn pop(&mut self, type_id: TypeId) {
        if let Some(stack) = self.layers.get_mut(&type_id) {
            stack.pop();
            if stack.is_empty() {
                self.layers.remove(&type_id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::any::TypeId;
    use std::sync::Arc;

    use super::ContextStack;

    #[derive(Debug, PartialEq)]
    struct Locale(&'static str);

    #[test]
    fn inner_provider_shadows_outer_until_popped() {
        let mut stack = ContextStack::new();
        stack.provide(Locale("en"));
        stack.push(TypeId::of::<Locale>(), Arc::new(Locale("es")));
        assert_eq!(stack.get::<Locale>().as_deref(), Some(&Locale("es")));

        stack.pop(TypeId::of::<Locale>());
        assert_eq!(stack.get::<Locale>().as_deref(), Some(&Locale("en")));

        stack.pop(TypeId::of::<Locale>());
        assert!(stack.get::<Locale>().is_none());
    }
}
