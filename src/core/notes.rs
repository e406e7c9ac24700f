use crate::constants::{
    CHANNEL_BUCKET_WIDTH, DRONE_BASE_FREQ_HZ, DRONE_DARK_ATTENUATION, DRONE_DARK_THRESHOLD,
    DRONE_FREQ_MAX_HZ, DRONE_FREQ_MIN_HZ, DRONE_MIN_GAIN_RATIO, DRONE_VOLUME_FACTOR,
};

/// Note identifiers shared by the bass and keyboard sample folders, in
/// ascending pitch order. Each one names a `<note>.mp3` file.
pub const NOTE_NAMES: [&str; 12] = [
    "c2", "c2sharp", "d2", "d2sharp", "e2", "f2", "f2sharp", "g2", "g2sharp", "a2", "a2sharp",
    "b2",
];

pub const BASS_NOTES: [&str; 12] = NOTE_NAMES;
pub const KEYBOARD_NOTES: [&str; 12] = NOTE_NAMES;

/// Which sample set a note belongs to. Doubles as the folder name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SampleKind {
    Bass,
    Keyboard,
}

impl SampleKind {
    pub fn folder(self) -> &'static str {
        match self {
            SampleKind::Bass => "bass",
            SampleKind::Keyboard => "keyboard",
        }
    }

    pub fn notes(self) -> &'static [&'static str] {
        match self {
            SampleKind::Bass => &BASS_NOTES,
            SampleKind::Keyboard => &KEYBOARD_NOTES,
        }
    }
}

/// URL of a note sample relative to the page, e.g. `music/bass/c2.mp3`.
pub fn sample_url(root: &str, kind: SampleKind, note: &str) -> String {
    let root = root.trim_end_matches('/');
    if root.is_empty() {
        format!("{}/{}.mp3", kind.folder(), note)
    } else {
        format!("{}/{}/{}.mp3", root, kind.folder(), note)
    }
}

/// Bucket a color channel into `floor(value / 20)`.
///
/// The result lies in `0..=12`. Twelve notes cover buckets 0..=11; values
/// 240..=255 land in bucket 12, one past the end of the note tables.
#[inline]
pub fn channel_bucket(value: u8) -> usize {
    (value / CHANNEL_BUCKET_WIDTH) as usize
}

/// Red channel to bass note. `None` for the out-of-table bucket.
#[inline]
pub fn map_color_to_bass(red: u8) -> Option<&'static str> {
    BASS_NOTES.get(channel_bucket(red)).copied()
}

/// Green or blue channel to keyboard note. `None` for the out-of-table bucket.
#[inline]
pub fn map_color_to_keyboard(value: u8) -> Option<&'static str> {
    KEYBOARD_NOTES.get(channel_bucket(value)).copied()
}

/// One pixel read from the sampling canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PixelSample {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl PixelSample {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Build from an RGBA byte slice; alpha is ignored.
    pub fn from_rgba(data: &[u8]) -> Option<Self> {
        match data {
            [r, g, b, ..] => Some(Self::new(*r, *g, *b)),
            _ => None,
        }
    }

    /// Unweighted mean of the three channels, 0..=255.
    pub fn brightness(&self) -> f32 {
        (self.red as f32 + self.green as f32 + self.blue as f32) / 3.0
    }

    pub fn volume_factor(&self) -> f32 {
        self.brightness() / 255.0
    }
}

/// Notes and level triggered by one pixel: red drives bass, green and blue
/// each drive a keyboard note.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelVoicing {
    pub bass: Option<&'static str>,
    pub keys: [Option<&'static str>; 2],
    pub volume: f32,
}

pub fn voicing_for_pixel(sample: PixelSample) -> PixelVoicing {
    PixelVoicing {
        bass: map_color_to_bass(sample.red),
        keys: [
            map_color_to_keyboard(sample.green),
            map_color_to_keyboard(sample.blue),
        ],
        volume: sample.volume_factor(),
    }
}

const FREQUENCIES: [(&str, f32); 18] = [
    ("C2", 65.41),
    ("G2", 98.00),
    ("C3", 130.81),
    ("E3", 164.81),
    ("B2", 123.47),
    ("D3", 146.83),
    ("F3", 174.61),
    ("A3", 220.00),
    ("G3", 196.00),
    ("B3", 246.94),
    ("D4", 293.66),
    ("F4", 349.23),
    ("A4", 440.00),
    ("C4", 261.63),
    ("E4", 329.63),
    ("G4", 392.00),
    ("B4", 493.88),
    ("C5", 523.25),
];

/// Frequency for a scientific-pitch note name such as `"A4"`.
/// Unknown names fall back to middle C (261.63 Hz). Lookup is case-sensitive.
pub fn get_frequency(note: &str) -> f32 {
    FREQUENCIES
        .iter()
        .find(|(name, _)| *name == note)
        .map(|(_, hz)| *hz)
        .unwrap_or(DRONE_BASE_FREQ_HZ)
}

/// Frequency and gain a drone voice should glide to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DroneTarget {
    pub frequency_hz: f32,
    pub gain: f32,
}

pub fn drone_target(note: &str, brightness: f32) -> DroneTarget {
    let frequency_hz = get_frequency(note).clamp(DRONE_FREQ_MIN_HZ, DRONE_FREQ_MAX_HZ);
    let mut gain = ((brightness / 255.0) * DRONE_VOLUME_FACTOR).clamp(
        DRONE_MIN_GAIN_RATIO * DRONE_VOLUME_FACTOR,
        DRONE_VOLUME_FACTOR,
    );
    if brightness < DRONE_DARK_THRESHOLD {
        gain *= DRONE_DARK_ATTENUATION;
    }
    DroneTarget { frequency_hz, gain }
}
