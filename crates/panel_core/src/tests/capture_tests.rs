use super::*;

#[test]
fn fresh_registry_holds_no_captures() {
    let registry = PointerCaptureRegistry::new();
    assert_eq!(registry.active_count(), 0);
}

#[test]
fn acquire_and_drop_balance_the_count() {
    let registry = PointerCaptureRegistry::new();
    let guard = registry.acquire();
    assert_eq!(registry.active_count(), 1);
    drop(guard);
    assert_eq!(registry.active_count(), 0);
}

#[test]
fn guards_release_independently() {
    let registry = PointerCaptureRegistry::new();
    let first = registry.acquire();
    let second = registry.acquire();
    assert_eq!(registry.active_count(), 2);
    drop(first);
    assert_eq!(registry.active_count(), 1);
    drop(second);
    assert_eq!(registry.active_count(), 0);
}

#[test]
fn guard_outliving_other_handles_still_releases() {
    let registry = PointerCaptureRegistry::new();
    let guard = {
        let clone = Rc::clone(&registry);
        clone.acquire()
    };
    assert_eq!(registry.active_count(), 1);
    drop(guard);
    assert_eq!(registry.active_count(), 0);
}
