use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::dom;
use super::page::PageRef;
use crate::error::InviteError;
use crate::fireworks::{FireworkField, SparkPainter, Viewport};

const CANVAS_ID: &str = "fireworks-canvas";

/// Draws sparks onto the firework canvas in CSS pixels.
struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
}

impl SparkPainter for CanvasPainter {
    fn fade(&mut self, width: f64, height: f64, alpha: f64) {
        self.ctx.set_fill_style_str(&format!("rgba(255,255,255,{alpha:.2})"));
        self.ctx.fill_rect(0.0, 0.0, width, height);
    }

    fn dot(&mut self, x: f64, y: f64, radius: f64, hue: f64, lightness: u8, alpha: f64) {
        self.ctx.begin_path();
        self.ctx
            .set_fill_style_str(&format!("hsla({hue:.0},95%,{lightness}%,{alpha:.3})"));
        self.ctx.arc(x, y, radius, 0.0, std::f64::consts::TAU).ok();
        self.ctx.fill();
    }
}

fn viewport(page: &PageRef) -> Viewport {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    Viewport {
        width: dim(page.window.inner_width()),
        height: dim(page.window.inner_height()),
    }
}

/// Backing store at device pixels, drawing in CSS pixels.
fn fit(page: &PageRef, canvas: &HtmlCanvasElement, ctx: &CanvasRenderingContext2d) {
    let view = viewport(page);
    let dpr = page.window.device_pixel_ratio().max(1.0);
    canvas.set_width((view.width * dpr) as u32);
    canvas.set_height((view.height * dpr) as u32);
    canvas.style().set_property("width", &format!("{}px", view.width)).ok();
    canvas.style().set_property("height", &format!("{}px", view.height)).ok();
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0).ok();
}

/// Start the burst loop and its visibility window.
pub fn start(page: &PageRef) -> Result<(), InviteError> {
    let canvas: HtmlCanvasElement = dom::by_id(&page.document, CANVAS_ID)?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| InviteError::Js("2d context not supported".to_string()))?
        .dyn_into()
        .map_err(|_| InviteError::WrongElementType(format!("#{CANVAS_ID} context")))?;

    fit(page, &canvas, &ctx);
    {
        let target: web_sys::EventTarget = page.window.clone().into();
        let page = page.clone();
        let canvas = canvas.clone();
        let ctx = ctx.clone();
        dom::on(&target, "resize", move |_: web_sys::Event| fit(&page, &canvas, &ctx))?;
    }

    let field = Rc::new(RefCell::new(FireworkField::new(page.config.fireworks.clone())));
    let running = Rc::new(Cell::new(true));

    // Animation loop
    // `f` holds the animation-frame closure so that it can keep calling
    // `request_animation_frame` on itself. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    {
        let page = page.clone();
        let field = field.clone();
        let running = running.clone();
        let mut painter = CanvasPainter { ctx: ctx.clone() };
        *g.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
            if !running.get() {
                return;
            }
            let view = viewport(&page);
            field
                .borrow_mut()
                .frame(now, view, &mut *page.rng(), &mut painter);

            // schedule next
            if let Some(cb) = f.borrow().as_ref() {
                if let Err(e) = dom::request_animation_frame(cb) {
                    log::warn!("fireworks stopped: {e}");
                }
            }
        }) as Box<dyn FnMut(f64)>));
    }
    if let Some(cb) = g.borrow().as_ref() {
        dom::request_animation_frame(cb)?;
    }

    let cfg = &page.config.fireworks;
    {
        let canvas = canvas.clone();
        dom::set_timeout(cfg.show_after_ms, move || {
            canvas.class_list().add_1("active").ok();
        })?;
    }
    // Closing the window also ends the loop; nothing is drawn while hidden.
    dom::set_timeout(cfg.hide_after_ms, move || {
        canvas.class_list().remove_1("active").ok();
        running.set(false);
        field.borrow_mut().clear();
        let view = Viewport {
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        };
        ctx.clear_rect(0.0, 0.0, view.width, view.height);
        log::debug!("fireworks finished");
    })?;
    Ok(())
}
