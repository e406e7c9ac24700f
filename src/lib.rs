#![cfg(target_arch = "wasm32")]
use crate::constants::POINTER_THROTTLE_MS;
use crate::core::{Carousel, LazySlot, SessionConfig, Throttle};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod drone;
mod events;
mod gallery;
mod loader;
mod session;

use gallery::Gallery;
use session::SessionSlot;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cosmic-sampler starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

// Audio needs a user gesture, so the session is only built on the first click
fn wire_audio_unlock(config: Rc<SessionConfig>, slot: SessionSlot) {
    let closure = Closure::wrap(Box::new(move || {
        session::ensure_session(&slot, &config);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pagehide(slot: SessionSlot) {
    let closure = Closure::wrap(Box::new(move || {
        if let Some(s) = slot.get() {
            s.cancel_loading();
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let config = Rc::new(SessionConfig::default());

    let img: web::HtmlImageElement = dom::element_by_id(&document, "image")?;
    for id in ["prev", "next"] {
        if document.get_element_by_id(id).is_none() {
            anyhow::bail!("missing #{}", id);
        }
    }

    let carousel = Carousel::new(config.images.clone())
        .ok_or_else(|| anyhow::anyhow!("image list is empty"))?;
    let gallery = Gallery::new(&document, img.clone(), carousel)?;
    gallery.sync_canvas();

    let gallery_prev = gallery.clone();
    dom::add_click_listener(&document, "prev", move || gallery_prev.prev());
    let gallery_next = gallery.clone();
    dom::add_click_listener(&document, "next", move || gallery_next.next());

    let slot: SessionSlot = Rc::new(LazySlot::new());
    wire_audio_unlock(config.clone(), slot.clone());
    wire_pagehide(slot.clone());

    events::wire_pointermove(events::PointerWiring {
        img,
        gallery: gallery.clone(),
        session: slot.clone(),
        throttle: Rc::new(RefCell::new(Throttle::new(Duration::from_millis(
            POINTER_THROTTLE_MS,
        )))),
    });
    events::wire_global_keydown(gallery, slot);

    log::info!("[gallery] ready with {} images", config.images.len());
    Ok(())
}
