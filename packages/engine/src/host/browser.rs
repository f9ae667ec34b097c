use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use crate::error::EngineError;
use crate::render::CanvasSurface;
use crate::simulation::FieldCore;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Attach a field to `#canvas_id`, sized to the window, and run it for the
/// life of the page.
#[wasm_bindgen]
pub fn mount(canvas_id: &str) -> Result<(), JsValue> {
    mount_field(canvas_id)?;
    Ok(())
}

/// Same as `mount`, returning the shared field so the caller can inspect it.
pub fn mount_field(canvas_id: &str) -> Result<Rc<RefCell<FieldCore>>, EngineError> {
    let window = web_sys::window().ok_or_else(|| EngineError::Host("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| EngineError::Host("no document".into()))?;
    let canvas: HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| EngineError::Host(format!("missing #{}", canvas_id)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| EngineError::Host(format!("#{} is not a canvas", canvas_id)))?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| EngineError::Host(format!("{:?}", e)))?
        .ok_or_else(|| EngineError::Host("2d context unavailable".into()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| EngineError::Host("unexpected context type".into()))?;

    let (width, height) = inner_size(&window);
    canvas.set_width(width);
    canvas.set_height(height);

    let field = Rc::new(RefCell::new(FieldCore::new(width, height)));
    listen_pointer(&window, &field)?;
    listen_resize(&window, &canvas, &field)?;
    start_frame_loop(&window, field.clone(), CanvasSurface::new(ctx))?;

    log::info!(
        "starfield mounted on #{} ({}x{}, {} particles)",
        canvas_id,
        width,
        height,
        field.borrow().particle_count()
    );
    Ok(field)
}

fn inner_size(window: &Window) -> (u32, u32) {
    let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32;
    (dim(window.inner_width()), dim(window.inner_height()))
}

fn listen_pointer(window: &Window, field: &Rc<RefCell<FieldCore>>) -> Result<(), EngineError> {
    let on_move = {
        let field = field.clone();
        Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            field
                .borrow_mut()
                .pointer_move(event.client_x() as f64, event.client_y() as f64);
        })
    };
    window
        .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
        .map_err(|e| EngineError::Host(format!("{:?}", e)))?;
    on_move.forget();

    let on_leave = {
        let field = field.clone();
        Closure::<dyn FnMut()>::new(move || field.borrow_mut().pointer_leave())
    };
    window
        .add_event_listener_with_callback("mouseout", on_leave.as_ref().unchecked_ref())
        .map_err(|e| EngineError::Host(format!("{:?}", e)))?;
    on_leave.forget();
    Ok(())
}

fn listen_resize(
    window: &Window,
    canvas: &HtmlCanvasElement,
    field: &Rc<RefCell<FieldCore>>,
) -> Result<(), EngineError> {
    let on_resize = {
        let field = field.clone();
        let canvas = canvas.clone();
        Closure::<dyn FnMut()>::new(move || {
            let Some(window) = web_sys::window() else {
                return;
            };
            let (width, height) = inner_size(&window);
            canvas.set_width(width);
            canvas.set_height(height);
            field.borrow_mut().resize(width, height);
        })
    };
    window
        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
        .map_err(|e| EngineError::Host(format!("{:?}", e)))?;
    on_resize.forget();
    Ok(())
}

/// Self-rescheduling rAF callback. Events run between frames on the same
/// thread, so the field is never borrowed by two callbacks at once.
fn start_frame_loop(
    window: &Window,
    field: Rc<RefCell<FieldCore>>,
    mut surface: CanvasSurface,
) -> Result<(), EngineError> {
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let next = callback.clone();

    *callback.borrow_mut() = Some(Closure::<dyn FnMut()>::new(move || {
        field.borrow_mut().tick(&mut surface);

        let scheduled = web_sys::window().and_then(|w| {
            next.borrow()
                .as_ref()
                .and_then(|cb| w.request_animation_frame(cb.as_ref().unchecked_ref()).ok())
        });
        if scheduled.is_none() {
            log::error!("could not schedule next frame; field stopped");
        }
    }));

    let first = callback.borrow();
    let cb = first
        .as_ref()
        .ok_or_else(|| EngineError::Host("frame callback missing".into()))?;
    window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .map_err(|e| EngineError::Host(format!("{:?}", e)))?;
    Ok(())
}
