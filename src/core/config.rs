/// Page-level settings handed to the gallery and the audio session.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub images: Vec<String>,
    /// Directory holding the `bass/` and `keyboard/` sample folders.
    pub sample_root: String,
}

pub const DEFAULT_IMAGES: [&str; 8] = [
    "images/STScI-01J7492J6AJFB5C8Z8P18T5C18.png",
    "images/big_galaxy.png",
    "images/comet.png",
    "images/young_star.png",
    "images/star_cluster.png",
    "images/ring_nebula.png",
    "images/crab_nebula.png",
    "images/big_cluster.png",
];

pub const DEFAULT_SAMPLE_ROOT: &str = "music";

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            images: DEFAULT_IMAGES.iter().map(|s| s.to_string()).collect(),
            sample_root: DEFAULT_SAMPLE_ROOT.to_string(),
        }
    }
}
