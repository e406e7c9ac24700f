use crate::core::{sample_url, LoadError, NoteBank, SampleKind};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub type SharedBank = Rc<RefCell<NoteBank<web::AudioBuffer>>>;

/// Fetches and decodes note samples, one task per note.
///
/// All fetches share one abort signal so a session can drop its in-flight
/// requests at once.
pub struct SampleLoader {
    sample_root: String,
    abort: Option<web::AbortController>,
}

impl SampleLoader {
    pub fn new(sample_root: &str) -> Self {
        let abort = web::AbortController::new()
            .map_err(|e| log::warn!("[loader] AbortController unavailable: {:?}", e))
            .ok();
        Self {
            sample_root: sample_root.to_string(),
            abort,
        }
    }

    pub fn load_set(&self, audio_ctx: &web::AudioContext, kind: SampleKind, bank: &SharedBank) {
        let signal = self.abort.as_ref().map(|a| a.signal());
        for &note in kind.notes() {
            let url = sample_url(&self.sample_root, kind, note);
            let audio_ctx = audio_ctx.clone();
            let signal = signal.clone();
            let bank = bank.clone();
            spawn_local(async move {
                match fetch_and_decode(&audio_ctx, &url, signal.as_ref()).await {
                    Ok(buffer) => {
                        log::info!("[loader] loaded {} note: {}", kind.folder(), note);
                        bank.borrow_mut().insert(note, buffer);
                    }
                    Err(e) => {
                        log::error!("[loader] error loading {} note {}: {}", kind.folder(), note, e);
                        bank.borrow_mut().mark_failed(note);
                    }
                }
                report_if_settled(kind, &bank);
            });
        }
    }

    /// Abort every fetch that has not completed yet.
    pub fn cancel(&self) {
        if let Some(a) = &self.abort {
            a.abort();
            log::info!("[loader] cancelled pending sample loads");
        }
    }
}

fn report_if_settled(kind: SampleKind, bank: &SharedBank) {
    let b = bank.borrow();
    if !b.is_settled() {
        return;
    }
    let failed = b.failed();
    if failed.is_empty() {
        log::info!("[loader] {} ready ({} notes)", kind.folder(), b.loaded_count());
    } else {
        log::warn!(
            "[loader] {} settled with {}/{} notes; unavailable: {:?}",
            kind.folder(),
            b.loaded_count(),
            b.expected_len(),
            failed
        );
    }
}

#[inline]
fn js_msg(e: &JsValue) -> String {
    format!("{:?}", e)
}

async fn fetch_and_decode(
    audio_ctx: &web::AudioContext,
    url: &str,
    signal: Option<&web::AbortSignal>,
) -> Result<web::AudioBuffer, LoadError> {
    let window = web::window().ok_or(LoadError::NoWindow)?;
    let init = web::RequestInit::new();
    init.set_signal(signal);

    let aborted = || signal.map(|s| s.aborted()).unwrap_or(false);

    let resp = JsFuture::from(window.fetch_with_str_and_init(url, &init))
        .await
        .map_err(|e| {
            if aborted() {
                LoadError::Aborted
            } else {
                LoadError::Network(js_msg(&e))
            }
        })?;
    let resp: web::Response = resp
        .dyn_into()
        .map_err(|e| LoadError::Network(js_msg(&e)))?;
    if !resp.ok() {
        return Err(LoadError::Status(resp.status()));
    }

    let body = resp.array_buffer().map_err(|e| LoadError::Body(js_msg(&e)))?;
    let body = JsFuture::from(body).await.map_err(|e| {
        if aborted() {
            LoadError::Aborted
        } else {
            LoadError::Body(js_msg(&e))
        }
    })?;
    let body: js_sys::ArrayBuffer = body.dyn_into().map_err(|e| LoadError::Body(js_msg(&e)))?;

    let decoded = audio_ctx
        .decode_audio_data(&body)
        .map_err(|e| LoadError::Decode(js_msg(&e)))?;
    JsFuture::from(decoded)
        .await
        .map_err(|e| LoadError::Decode(js_msg(&e)))?
        .dyn_into::<web::AudioBuffer>()
        .map_err(|e| LoadError::Decode(js_msg(&e)))
}
