use crate::audio::{self, FxBuses};
use crate::core::{
    voicing_for_pixel, LazySlot, NoteBank, PixelSample, SampleKind, SessionConfig, Unplayable,
};
use crate::drone::DroneSynth;
use crate::loader::{SampleLoader, SharedBank};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Everything that lives for one audio-context lifetime.
pub struct AudioSession {
    audio_ctx: web::AudioContext,
    fx: FxBuses,
    drones: RefCell<DroneSynth>,
    bass: SharedBank,
    keyboard: SharedBank,
    loader: SampleLoader,
}

/// Filled on the first click; empty until then.
pub type SessionSlot = Rc<LazySlot<AudioSession>>;

/// Build the session on the first call; later calls return the existing one.
pub fn ensure_session(slot: &SessionSlot, config: &SessionConfig) -> Option<Rc<AudioSession>> {
    if slot.is_built() {
        log::debug!("[audio] context already exists");
    }
    slot.get_or_try_build(|| AudioSession::start(config))
        .map_err(|e| log::error!("[audio] session init error: {:?}", e))
        .ok()
}

impl AudioSession {
    pub fn start(config: &SessionConfig) -> anyhow::Result<Self> {
        let audio_ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        _ = audio_ctx.resume();
        log::info!("[audio] context created");

        let built = audio::build_fx_buses(&audio_ctx)
            .map_err(|_| anyhow::anyhow!("effect chain construction failed"))
            .and_then(|fx| {
                let mut drones = DroneSynth::new();
                drones
                    .reset(&audio_ctx, &fx)
                    .map_err(|_| anyhow::anyhow!("drone construction failed"))?;
                Ok((fx, drones))
            });
        let (fx, drones) = match built {
            Ok(parts) => parts,
            Err(e) => {
                // A half-built context must not keep the audio device open
                _ = audio_ctx.close();
                return Err(e);
            }
        };

        // Fetches start only once nothing else can fail
        let bass: SharedBank = Rc::new(RefCell::new(NoteBank::new(SampleKind::Bass.notes())));
        let keyboard: SharedBank =
            Rc::new(RefCell::new(NoteBank::new(SampleKind::Keyboard.notes())));
        let loader = SampleLoader::new(&config.sample_root);
        loader.load_set(&audio_ctx, SampleKind::Bass, &bass);
        loader.load_set(&audio_ctx, SampleKind::Keyboard, &keyboard);

        log::info!("[audio] session initialized");
        Ok(Self {
            audio_ctx,
            fx,
            drones: RefCell::new(drones),
            bass,
            keyboard,
            loader,
        })
    }

    fn bank(&self, kind: SampleKind) -> &SharedBank {
        match kind {
            SampleKind::Bass => &self.bass,
            SampleKind::Keyboard => &self.keyboard,
        }
    }

    /// True once both sample sets have fully decoded.
    pub fn is_ready(&self) -> bool {
        self.bass.borrow().is_ready() && self.keyboard.borrow().is_ready()
    }

    /// Play one note if its buffer has decoded. Returns whether a source was
    /// started; missing notes only warn.
    pub fn play_note(&self, kind: SampleKind, note: Option<&str>, volume: f32) -> bool {
        let buffer = match self.bank(kind).borrow().playable(note) {
            Ok(b) => b.clone(),
            Err(Unplayable::Unmapped) => {
                log::warn!("[audio] no {} note for this color", kind.folder());
                return false;
            }
            Err(Unplayable::NotLoaded(n)) => {
                log::warn!("[audio] {} buffer for {} not loaded", kind.folder(), n);
                return false;
            }
            Err(Unplayable::Failed(n)) => {
                log::warn!("[audio] {} buffer for {} failed to load", kind.folder(), n);
                return false;
            }
        };
        audio::play_sample(&self.audio_ctx, &buffer, volume).is_ok()
    }

    /// Red drives bass, green and blue each drive a keyboard note.
    pub fn play_pixel(&self, sample: PixelSample) {
        if !self.is_ready() {
            log::debug!("[audio] samples still loading");
        }
        let voicing = voicing_for_pixel(sample);
        self.play_note(SampleKind::Bass, voicing.bass, voicing.volume);
        for key in voicing.keys {
            self.play_note(SampleKind::Keyboard, key, voicing.volume);
        }
    }

    pub fn reset_drones(&self) {
        if self
            .drones
            .borrow_mut()
            .reset(&self.audio_ctx, &self.fx)
            .is_err()
        {
            log::error!("[drone] reset failed");
        }
    }

    pub fn update_chord(&self, notes: &[&str], brightness: f32) {
        self.drones
            .borrow()
            .update_chord(&self.audio_ctx, notes, brightness);
    }

    pub fn cancel_loading(&self) {
        self.loader.cancel();
    }
}
