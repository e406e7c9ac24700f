/// Gallery, playback and drone tuning constants.
///
/// These constants express intended behavior (fade times, clamp limits,
/// effect levels) and keep magic numbers out of the browser wiring.
// Gallery cross-fade: opacity drops immediately, the new source lands after this delay
pub const IMAGE_SWAP_DELAY_MS: i32 = 500;

// Sample playback envelope (seconds) for both fade-in and fade-out
pub const SAMPLE_FADE_SEC: f64 = 0.1;

// Minimum spacing between pointer-triggered sound events
pub const POINTER_THROTTLE_MS: u64 = 200;

// Pixel channels are split into buckets of this width (0..=255 / 20 -> 0..=12)
pub const CHANNEL_BUCKET_WIDTH: u8 = 20;

// Send effects
pub const DELAY_TIME_SEC: f32 = 0.3;
pub const DELAY_FEEDBACK_GAIN: f32 = 0.4;
pub const REVERB_IR_SECONDS: f32 = 2.5;
pub const REVERB_IR_DECAY_SEC: f32 = 0.8;

// Drone voices
pub const DRONE_VOICE_COUNT: usize = 4;
pub const DRONE_BASE_FREQ_HZ: f32 = 261.63; // C4, also the unknown-note fallback
pub const DRONE_FREQ_MIN_HZ: f32 = 100.0;
pub const DRONE_FREQ_MAX_HZ: f32 = 1000.0;
pub const DRONE_SMOOTHING_SEC: f32 = 0.1; // setTargetAtTime time constant
pub const DRONE_VOLUME_FACTOR: f32 = 0.05; // ceiling for a drone voice gain
pub const DRONE_MIN_GAIN_RATIO: f32 = 0.01; // floor as a fraction of the ceiling
pub const DRONE_DARK_THRESHOLD: f32 = 50.0; // brightness below this is attenuated
pub const DRONE_DARK_ATTENUATION: f32 = 0.1;
