use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::hooks::registry::{EffectHook, HookRegistry, HookSlot};
use crate::runtime::ComponentId;

#[test]
fn prune_runs_effect_cleanup_and_drops_store() {
    let registry = HookRegistry::new();
    let component = ComponentId::new(&[0], "Test", None);
    let flag = Arc::new(AtomicBool::new(false));
    {
        let store = registry.store_for(&component);
        let mut guard = store.lock();
        let slot = guard.slot(0);
        *slot = HookSlot::Effect(EffectHook::default());
        if let HookSlot::Effect(effect) = slot {
            let flag = flag.clone();
            effect.set_cleanup(Some(Box::new(move || flag.store(true, Ordering::SeqCst))));
        }
    }

    assert_eq!(registry.prune(&HashSet::new()), 1);
    assert!(flag.load(Ordering::SeqCst));
    assert!(registry.is_empty());
}

#[test]
fn with_effect_slot_initializes_vacant_entries() {
    let registry = HookRegistry::new();
    let component = ComponentId::new(&[1], "Comp", None);

    registry.with_effect_slot(&component, 2, |effect| {
        assert!(effect.deps.is_none());
        effect.set_deps(Box::new(123usize));
    });

    let store = registry.store_for(&component);
    let mut guard = store.lock();
    match guard.slot(2) {
        HookSlot::Effect(effect) => {
            assert!(effect.deps.is_some());
        }
        _ => panic!("expected effect slot"),
    }
}

#[test]
fn prune_keeps_live_components() {
    let registry = HookRegistry::new();
    let kept = ComponentId::new(&[0, 0], "FormField", Some("username"));
    let dropped = ComponentId::new(&[0, 1], "FormField", Some("nickname"));
    registry.store_for(&kept);
    registry.store_for(&dropped);

    let live = HashSet::from([kept.clone()]);
    assert_eq!(registry.prune(&live), 1);
    assert_eq!(registry.len(), 1);
}
