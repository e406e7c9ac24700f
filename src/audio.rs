use crate::constants::{
    DELAY_FEEDBACK_GAIN, DELAY_TIME_SEC, REVERB_IR_DECAY_SEC, REVERB_IR_SECONDS, SAMPLE_FADE_SEC,
};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Send effects shared by the drone voices.
pub struct FxBuses {
    pub delay: web::DelayNode,
    pub delay_feedback: web::GainNode,
    pub reverb: web::ConvolverNode,
}

pub fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &str,
) -> Result<web::GainNode, ()> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("{} GainNode error: {:?}", label, e);
            Err(())
        }
    }
}

pub fn build_fx_buses(audio_ctx: &web::AudioContext) -> Result<FxBuses, ()> {
    let destination = audio_ctx.destination();

    // Delay with a feedback loop; the loop tap is what reaches the output
    let delay = audio_ctx
        .create_delay()
        .map_err(|e| {
            log::error!("DelayNode error: {:?}", e);
        })
        .map_err(|_| ())?;
    delay.delay_time().set_value(DELAY_TIME_SEC);
    let delay_feedback = create_gain(audio_ctx, DELAY_FEEDBACK_GAIN, "Delay feedback")?;
    _ = delay.connect_with_audio_node(&delay_feedback);
    _ = delay_feedback.connect_with_audio_node(&delay);
    _ = delay_feedback.connect_with_audio_node(&destination);

    let reverb = web::ConvolverNode::new(audio_ctx)
        .map_err(|e| {
            log::error!("ConvolverNode error: {:?}", e);
        })
        .map_err(|_| ())?;
    reverb.set_normalize(true);
    match build_impulse_response(audio_ctx) {
        Some(ir) => reverb.set_buffer(Some(&ir)),
        None => log::warn!("[audio] reverb impulse response unavailable; reverb is silent"),
    }
    _ = reverb.connect_with_audio_node(&destination);

    Ok(FxBuses {
        delay,
        delay_feedback,
        reverb,
    })
}

// Stereo noise burst with an exponential tail
fn build_impulse_response(audio_ctx: &web::AudioContext) -> Option<web::AudioBuffer> {
    let sr = audio_ctx.sample_rate();
    let len = (sr * REVERB_IR_SECONDS) as u32;
    let ir = audio_ctx.create_buffer(2, len, sr).ok()?;
    let mut seeds: [u32; 2] = [0x1234ABCD, 0x7890FEDC];
    let dt = 1.0_f32 / sr;
    for (ch, seed) in seeds.iter_mut().enumerate() {
        let mut buf: Vec<f32> = vec![0.0; len as usize];
        for (i, v) in buf.iter_mut().enumerate() {
            let mut x = *seed;
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            *seed = x;
            let n = (x as f32 / u32::MAX as f32) * 2.0 - 1.0;
            let t = i as f32 * dt;
            *v = n * (-t / REVERB_IR_DECAY_SEC).exp();
        }
        _ = ir.copy_to_channel(&mut buf, ch as i32);
    }
    Some(ir)
}

/// Play `buffer` once through a fresh source and gain node.
///
/// Gain ramps 0 -> `volume` over the fade time, and back to 0 over the same
/// time once the buffer has ended; the gain is then disconnected. `volume`
/// is used as given.
pub fn play_sample(
    audio_ctx: &web::AudioContext,
    buffer: &web::AudioBuffer,
    volume: f32,
) -> Result<(), ()> {
    let src = web::AudioBufferSourceNode::new(audio_ctx)
        .map_err(|e| {
            log::error!("AudioBufferSourceNode error: {:?}", e);
        })
        .map_err(|_| ())?;
    src.set_buffer(Some(buffer));
    let gain = create_gain(audio_ctx, volume, "Sample")?;
    _ = src.connect_with_audio_node(&gain);
    _ = gain.connect_with_audio_node(&audio_ctx.destination());

    let now = audio_ctx.current_time();
    let param = gain.gain();
    _ = param.cancel_scheduled_values(now);
    _ = param.set_value_at_time(0.0, now);
    _ = param.linear_ramp_to_value_at_time(volume, now + SAMPLE_FADE_SEC);

    let ctx_end = audio_ctx.clone();
    let src_end = src.clone();
    let onended = Closure::once_into_js(move || {
        let t = ctx_end.current_time();
        _ = gain.gain().linear_ramp_to_value_at_time(0.0, t + SAMPLE_FADE_SEC);
        _ = src_end.disconnect();
        dom::set_timeout((SAMPLE_FADE_SEC * 1000.0) as i32, move || {
            _ = gain.disconnect();
        });
    });
    src.set_onended(Some(onended.unchecked_ref()));

    src.start().map_err(|e| {
        log::error!("[audio] sample start failed: {:?}", e);
    })
}
