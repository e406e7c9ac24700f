// Host-side tests for the build-once session slot.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod lazy {
    include!("../src/core/lazy.rs");
}

use lazy::*;
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn empty_until_first_build() {
    let slot: LazySlot<u32> = LazySlot::new();
    assert!(!slot.is_built());
    assert!(slot.get().is_none());
}

#[test]
fn builds_exactly_once() {
    let slot = LazySlot::new();
    let builds = Cell::new(0);
    for _ in 0..5 {
        let v = slot
            .get_or_try_build(|| {
                builds.set(builds.get() + 1);
                Ok::<_, ()>(7u32)
            })
            .expect("build succeeds");
        assert_eq!(*v, 7);
    }
    assert_eq!(builds.get(), 1);
    assert!(slot.is_built());
}

#[test]
fn later_calls_share_the_first_value() {
    let slot = LazySlot::new();
    let a = slot.get_or_try_build(|| Ok::<_, ()>(String::from("ctx"))).unwrap();
    let b = slot.get_or_try_build(|| Ok::<_, ()>(String::from("other"))).unwrap();
    assert!(Rc::ptr_eq(&a, &b));
    assert_eq!(*b, "ctx");
}

#[test]
fn failed_build_leaves_slot_empty_and_retries() {
    let slot = LazySlot::new();
    let builds = Cell::new(0);
    let first = slot.get_or_try_build(|| {
        builds.set(builds.get() + 1);
        Err::<u32, _>("effect chain construction failed")
    });
    assert!(first.is_err());
    assert!(!slot.is_built());

    let second = slot.get_or_try_build(|| {
        builds.set(builds.get() + 1);
        Ok::<_, &str>(3u32)
    });
    assert_eq!(second.map(|v| *v), Ok(3));
    assert_eq!(builds.get(), 2);

    // Once built, a failing builder is never consulted
    let third = slot.get_or_try_build(|| Err::<u32, _>("unreachable"));
    assert_eq!(third.map(|v| *v), Ok(3));
    assert_eq!(builds.get(), 2);
}
