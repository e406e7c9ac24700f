// Host-side tests for color-to-note mapping and drone targets.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod notes {
    include!("../src/core/notes.rs");
}

use notes::*;

#[test]
fn zero_maps_to_first_note() {
    assert_eq!(map_color_to_bass(0), Some("c2"));
    assert_eq!(map_color_to_keyboard(0), Some("c2"));
}

#[test]
fn bucket_edges_follow_floor_of_twenty() {
    assert_eq!(channel_bucket(19), 0);
    assert_eq!(channel_bucket(20), 1);
    assert_eq!(channel_bucket(39), 1);
    assert_eq!(channel_bucket(40), 2);
    assert_eq!(channel_bucket(239), 11);
    assert_eq!(channel_bucket(240), 12);
    assert_eq!(channel_bucket(255), 12);
}

#[test]
fn last_in_table_bucket_maps_to_b2() {
    assert_eq!(map_color_to_bass(220), Some("b2"));
    assert_eq!(map_color_to_bass(239), Some("b2"));
    assert_eq!(map_color_to_keyboard(239), Some("b2"));
}

#[test]
fn values_past_the_table_map_to_no_note() {
    // 250 / 20 floors to 12, one past the twelve-entry table
    assert_eq!(channel_bucket(250), 12);
    assert_eq!(map_color_to_bass(250), None);
    assert_eq!(map_color_to_bass(255), None);
    assert_eq!(map_color_to_keyboard(240), None);
    assert_eq!(map_color_to_keyboard(255), None);
}

#[test]
fn mapping_is_a_monotonic_step_function() {
    let mut prev_bucket = 0usize;
    for v in 0..=255u8 {
        let b = channel_bucket(v);
        assert!(b >= prev_bucket, "bucket decreased at {v}");
        assert!(b - prev_bucket <= 1, "bucket skipped at {v}");
        prev_bucket = b;

        let expected = NOTE_NAMES.get(b).copied();
        assert_eq!(map_color_to_bass(v), expected);
        assert_eq!(map_color_to_keyboard(v), expected);
    }
}

#[test]
fn brightness_is_unweighted_mean() {
    let p = PixelSample::new(30, 60, 90);
    assert!((p.brightness() - 60.0).abs() < 1e-6);
    assert!((p.volume_factor() - 60.0 / 255.0).abs() < 1e-6);

    let white = PixelSample::new(255, 255, 255);
    assert!((white.volume_factor() - 1.0).abs() < 1e-6);
    assert_eq!(PixelSample::default().volume_factor(), 0.0);
}

#[test]
fn pixel_from_rgba_ignores_alpha_and_rejects_short_input() {
    assert_eq!(
        PixelSample::from_rgba(&[1, 2, 3, 4]),
        Some(PixelSample::new(1, 2, 3))
    );
    assert_eq!(PixelSample::from_rgba(&[1, 2]), None);
    assert_eq!(PixelSample::from_rgba(&[]), None);
}

#[test]
fn voicing_routes_channels_to_instruments() {
    let v = voicing_for_pixel(PixelSample::new(0, 45, 250));
    assert_eq!(v.bass, Some("c2"));
    assert_eq!(v.keys, [Some("d2"), None]);
    assert!((v.volume - (295.0 / 3.0) / 255.0).abs() < 1e-6);
}

#[test]
fn sample_urls_follow_folder_layout() {
    assert_eq!(
        sample_url("music", SampleKind::Bass, "c2sharp"),
        "music/bass/c2sharp.mp3"
    );
    assert_eq!(
        sample_url("music/", SampleKind::Keyboard, "a2"),
        "music/keyboard/a2.mp3"
    );
    assert_eq!(sample_url("", SampleKind::Bass, "b2"), "bass/b2.mp3");
}

#[test]
fn each_kind_lists_twelve_notes() {
    assert_eq!(SampleKind::Bass.notes().len(), 12);
    assert_eq!(SampleKind::Keyboard.notes().len(), 12);
    assert_eq!(SampleKind::Bass.folder(), "bass");
    assert_eq!(SampleKind::Keyboard.folder(), "keyboard");
}

#[test]
fn get_frequency_known_and_default() {
    assert!((get_frequency("A4") - 440.0).abs() < 1e-4);
    assert!((get_frequency("C2") - 65.41).abs() < 1e-4);
    assert!((get_frequency("C5") - 523.25).abs() < 1e-4);
    assert!((get_frequency("H9") - 261.63).abs() < 1e-4);
    assert!((get_frequency("") - 261.63).abs() < 1e-4);
    // Lookup is case-sensitive
    assert!((get_frequency("a4") - 261.63).abs() < 1e-4);
}

#[test]
fn drone_target_clamps_frequency() {
    // C2 (65.41 Hz) is below the floor
    assert_eq!(drone_target("C2", 255.0).frequency_hz, 100.0);
    assert!((drone_target("A4", 255.0).frequency_hz - 440.0).abs() < 1e-4);
    for note in ["C2", "G2", "C3", "A4", "C5", "unknown"] {
        let f = drone_target(note, 128.0).frequency_hz;
        assert!((100.0..=1000.0).contains(&f), "{note} -> {f}");
    }
}

#[test]
fn drone_target_gain_scales_with_brightness() {
    let full = drone_target("C4", 255.0).gain;
    assert!((full - 0.05).abs() < 1e-6);

    let mid = drone_target("C4", 127.5).gain;
    assert!((mid - 0.025).abs() < 1e-6);

    // Below the dark threshold the gain is cut to a tenth
    let dark = drone_target("C4", 40.0).gain;
    assert!((dark - (40.0 / 255.0) * 0.05 * 0.1).abs() < 1e-7);

    // Floor applies before the dark attenuation
    let black = drone_target("C4", 0.0).gain;
    assert!((black - 0.0005 * 0.1).abs() < 1e-8);

    // Exactly at the threshold is not attenuated
    let edge = drone_target("C4", 50.0).gain;
    assert!((edge - (50.0 / 255.0) * 0.05).abs() < 1e-7);
}
