use crate::constants::IMAGE_SWAP_DELAY_MS;
use crate::core::{Carousel, PixelSample};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Displayed image plus the offscreen canvas that mirrors it for pixel reads.
pub struct Gallery {
    img: web::HtmlImageElement,
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    carousel: RefCell<Carousel>,
    // Detached copies keep every image warm in the browser cache
    _preloaded: Vec<web::HtmlImageElement>,
}

impl Gallery {
    pub fn new(
        document: &web::Document,
        img: web::HtmlImageElement,
        carousel: Carousel,
    ) -> anyhow::Result<Rc<Self>> {
        let canvas: web::HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("canvas cast: {:?}", e))?;
        canvas.set_width(0);
        canvas.set_height(0);
        let ctx: web::CanvasRenderingContext2d = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("get_context: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("2d context cast: {:?}", e))?;

        let preloaded = preload_images(carousel.images());
        log::info!("[gallery] preloading {} images", preloaded.len());

        Ok(Rc::new(Self {
            img,
            canvas,
            ctx,
            carousel: RefCell::new(carousel),
            _preloaded: preloaded,
        }))
    }

    pub fn next(self: &Rc<Self>) {
        self.carousel.borrow_mut().next();
        self.show_current();
    }

    pub fn prev(self: &Rc<Self>) {
        self.carousel.borrow_mut().prev();
        self.show_current();
    }

    /// Wrap `requested` into range and cross-fade to it.
    pub fn change_image(self: &Rc<Self>, requested: isize) {
        self.carousel.borrow_mut().go_to(requested);
        self.show_current();
    }

    // Fade out, swap the source after the fade delay, then fade back in.
    // The sampling canvas is redrawn on load.
    fn show_current(self: &Rc<Self>) {
        let (index, src) = {
            let c = self.carousel.borrow();
            (c.index(), c.current().to_string())
        };
        log::info!("[gallery] showing image {} ({})", index, src);
        dom::set_opacity(&self.img, 0.0);

        let this = self.clone();
        dom::set_timeout(IMAGE_SWAP_DELAY_MS, move || {
            this.redraw_on_load();
            this.img.set_src(&src);
            dom::set_opacity(&this.img, 1.0);
        });
    }

    /// Mirror the displayed image onto the canvas once it has loaded. Draws
    /// immediately when the current source is already decoded.
    pub fn sync_canvas(self: &Rc<Self>) {
        if self.img.complete() && self.img.natural_width() > 0 {
            self.draw_current();
        } else {
            self.redraw_on_load();
        }
    }

    fn redraw_on_load(self: &Rc<Self>) {
        let this = self.clone();
        let onload = Closure::once_into_js(move || this.draw_current());
        self.img.set_onload(Some(onload.unchecked_ref()));
    }

    fn draw_current(&self) {
        let w = self.img.width();
        let h = self.img.height();
        self.canvas.set_width(w);
        self.canvas.set_height(h);
        if let Err(e) = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            &self.img, 0.0, 0.0, w as f64, h as f64,
        ) {
            log::warn!("[gallery] drawImage failed: {:?}", e);
        }
    }

    /// Color under `(x, y)` in image coordinates. `None` until the canvas has
    /// been sized, or when the read is refused (e.g. a tainted canvas).
    pub fn sample_pixel(&self, x: i32, y: i32) -> Option<PixelSample> {
        if self.canvas.width() == 0 || self.canvas.height() == 0 {
            return None;
        }
        match self.ctx.get_image_data(x as f64, y as f64, 1.0, 1.0) {
            Ok(data) => PixelSample::from_rgba(&data.data().0),
            Err(e) => {
                log::warn!("[gallery] getImageData failed: {:?}", e);
                None
            }
        }
    }
}

fn preload_images(paths: &[String]) -> Vec<web::HtmlImageElement> {
    paths
        .iter()
        .filter_map(|src| match web::HtmlImageElement::new() {
            Ok(img) => {
                img.set_src(src);
                Some(img)
            }
            Err(e) => {
                log::warn!("[gallery] preload {} failed: {:?}", src, e);
                None
            }
        })
        .collect()
}
