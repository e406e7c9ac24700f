use crate::audio::{self, FxBuses};
use crate::constants::{DRONE_BASE_FREQ_HZ, DRONE_SMOOTHING_SEC, DRONE_VOICE_COUNT};
use crate::core::drone_target;
use smallvec::SmallVec;
use web_sys as web;

pub struct DroneVoice {
    pub osc: web::OscillatorNode,
    pub gain: web::GainNode,
}

/// Continuously running sine voices layered under the sampled notes.
///
/// Each voice gain feeds the delay send, the reverb send and the output.
/// Gains start at zero, so the drones are silent until `update_chord`.
#[derive(Default)]
pub struct DroneSynth {
    voices: SmallVec<[DroneVoice; DRONE_VOICE_COUNT]>,
}

impl DroneSynth {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&mut self) {
        for v in self.voices.drain(..) {
            _ = v.osc.stop();
            _ = v.osc.disconnect();
            _ = v.gain.disconnect();
        }
    }

    /// Tear down any running voices and start a fresh set.
    pub fn reset(&mut self, audio_ctx: &web::AudioContext, fx: &FxBuses) -> Result<(), ()> {
        self.stop();
        let now = audio_ctx.current_time();
        let destination = audio_ctx.destination();
        for _ in 0..DRONE_VOICE_COUNT {
            let osc = web::OscillatorNode::new(audio_ctx)
                .map_err(|e| {
                    log::error!("OscillatorNode error: {:?}", e);
                })
                .map_err(|_| ())?;
            osc.set_type(web::OscillatorType::Sine);
            _ = osc.frequency().set_value_at_time(DRONE_BASE_FREQ_HZ, now);
            let gain = audio::create_gain(audio_ctx, 0.0, "Drone")?;
            _ = gain.gain().set_value_at_time(0.0, now);
            _ = osc.connect_with_audio_node(&gain);
            _ = gain.connect_with_audio_node(&fx.delay);
            _ = gain.connect_with_audio_node(&fx.reverb);
            _ = gain.connect_with_audio_node(&destination);
            if let Err(e) = osc.start() {
                log::error!("[drone] oscillator start failed: {:?}", e);
            }
            self.voices.push(DroneVoice { osc, gain });
        }
        log::info!("[drone] {} voices running", self.voices.len());
        Ok(())
    }

    /// Glide voice `i` toward `notes[i]` with a brightness-scaled gain.
    /// Notes beyond the voice count are ignored; voices beyond the note list
    /// keep their current settings.
    pub fn update_chord(&self, audio_ctx: &web::AudioContext, notes: &[&str], brightness: f32) {
        let now = audio_ctx.current_time();
        for (voice, note) in self.voices.iter().zip(notes) {
            let target = drone_target(note, brightness);
            _ = voice
                .osc
                .frequency()
                .set_target_at_time(target.frequency_hz, now, DRONE_SMOOTHING_SEC.into());
            _ = voice
                .gain
                .gain()
                .set_target_at_time(target.gain, now, DRONE_SMOOTHING_SEC.into());
        }
        log::debug!("[drone] chord {:?} at brightness {:.0}", notes, brightness);
    }
}
