use crate::core::{key_action, KeyAction};
use crate::gallery::Gallery;
use crate::session::SessionSlot;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, gallery: &Rc<Gallery>, session: &SessionSlot) {
    let Some(action) = key_action(&ev.key()) else {
        return;
    };
    match action {
        KeyAction::PrevImage => gallery.prev(),
        KeyAction::NextImage => gallery.next(),
        KeyAction::ResetDrones => {
            let Some(s) = session.get() else {
                log::info!("[keys] click the page to start audio first");
                return;
            };
            s.reset_drones();
            log::info!("[keys] drones reset");
        }
    }
}

pub fn wire_global_keydown(gallery: Rc<Gallery>, session: SessionSlot) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &gallery, &session);
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
