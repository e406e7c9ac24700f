use crate::core::Throttle;
use crate::gallery::Gallery;
use crate::session::SessionSlot;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub img: web::HtmlImageElement,
    pub gallery: Rc<Gallery>,
    pub session: SessionSlot,
    pub throttle: Rc<RefCell<Throttle>>,
}

/// Sample the pixel under the pointer and play the notes it maps to.
pub fn wire_pointermove(w: PointerWiring) {
    let target = w.img.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        // The window is consumed before any other check
        if !w.throttle.borrow_mut().try_fire(Instant::now()) {
            return;
        }

        let Some(sample) = w.gallery.sample_pixel(ev.offset_x(), ev.offset_y()) else {
            return;
        };

        let session = w.session.get();
        match session {
            Some(s) => {
                log::debug!(
                    "[pointer] rgb=({}, {}, {}) brightness={:.1}",
                    sample.red,
                    sample.green,
                    sample.blue,
                    sample.brightness()
                );
                s.play_pixel(sample);
            }
            None => log::debug!("[pointer] audio not started; click to enable sound"),
        }
    }) as Box<dyn FnMut(_)>);

    _ = target.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}
