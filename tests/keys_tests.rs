// Host-side tests for keyboard shortcuts.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod keys {
    include!("../src/core/keys.rs");
}

use keys::*;

#[test]
fn arrows_navigate_gallery() {
    assert_eq!(key_action("ArrowLeft"), Some(KeyAction::PrevImage));
    assert_eq!(key_action("ArrowRight"), Some(KeyAction::NextImage));
}

#[test]
fn drone_reset_accepts_both_cases() {
    assert_eq!(key_action("o"), Some(KeyAction::ResetDrones));
    assert_eq!(key_action("O"), Some(KeyAction::ResetDrones));
}

#[test]
fn chord_keys_have_no_binding() {
    // Retuning the drones is an API operation only; no key reaches it
    assert_eq!(key_action("c"), None);
    assert_eq!(key_action("C"), None);
}

#[test]
fn other_keys_are_ignored() {
    for key in ["ArrowUp", "ArrowDown", "a", "Enter", " ", "Escape", "", "oo"] {
        assert_eq!(key_action(key), None, "unexpected action for {key:?}");
    }
}
