// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_are_positive() {
    assert!(IMAGE_SWAP_DELAY_MS > 0);
    assert!(SAMPLE_FADE_SEC > 0.0);
    assert_eq!(POINTER_THROTTLE_MS, 200);
    assert!(DRONE_SMOOTHING_SEC > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn bucket_width_covers_twelve_notes_plus_overflow() {
    assert_eq!(CHANNEL_BUCKET_WIDTH, 20);
    assert_eq!(255 / CHANNEL_BUCKET_WIDTH as u32, 12);
    assert_eq!(239 / CHANNEL_BUCKET_WIDTH as u32, 11);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn effect_levels_are_stable() {
    // Feedback at or above unity would never decay
    assert!(DELAY_FEEDBACK_GAIN > 0.0 && DELAY_FEEDBACK_GAIN < 1.0);
    assert!(DELAY_TIME_SEC > 0.0 && DELAY_TIME_SEC < 1.0);
    assert!(REVERB_IR_SECONDS > REVERB_IR_DECAY_SEC);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn drone_constants_have_logical_relationships() {
    assert_eq!(DRONE_VOICE_COUNT, 4);
    assert!(DRONE_FREQ_MIN_HZ < DRONE_FREQ_MAX_HZ);
    assert!(DRONE_BASE_FREQ_HZ >= DRONE_FREQ_MIN_HZ && DRONE_BASE_FREQ_HZ <= DRONE_FREQ_MAX_HZ);
    assert!(DRONE_MIN_GAIN_RATIO > 0.0 && DRONE_MIN_GAIN_RATIO < 1.0);
    assert!(DRONE_DARK_ATTENUATION > 0.0 && DRONE_DARK_ATTENUATION < 1.0);
    assert!(DRONE_DARK_THRESHOLD > 0.0 && DRONE_DARK_THRESHOLD < 255.0);
    assert!(DRONE_VOLUME_FACTOR <= 1.0);
}
