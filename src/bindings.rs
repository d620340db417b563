//! Browser binding: exposes [`EngineCore`] to a script host via `wasm-bindgen`.
//!
//! Pointer-down is observed on the circle element only. Move, up and cancel
//! are observed on the window, so a drag that leaves the element keeps
//! tracking and still ends when the pointer is released elsewhere. The host
//! should set `touch-action: none` on the element so touch drags are not
//! claimed by scrolling.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, EventTarget, PointerEvent, Window};

use crate::engine::{Action, EngineCore};
use crate::frame::Point;

type Listener = Closure<dyn FnMut(PointerEvent)>;

/// Shared between the exported handle and the DOM listeners.
struct Shared {
    core: RefCell<EngineCore>,
    on_change: RefCell<Option<js_sys::Function>>,
}

impl Shared {
    /// Run `f` against the core, then notify the host if a redraw is needed.
    ///
    /// The core borrow is released before the callback runs so the callback
    /// may call back into the engine.
    fn dispatch(&self, f: impl FnOnce(&mut EngineCore) -> Vec<Action>) {
        let actions = f(&mut *self.core.borrow_mut());
        if !actions.iter().any(|a| matches!(a, Action::RenderNeeded)) {
            return;
        }
        let json = match self.core.borrow().scene_json() {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!(error = %err, "failed to serialize scene");
                return;
            }
        };
        if let Some(cb) = self.on_change.borrow().as_ref() {
            if let Err(err) = cb.call1(&JsValue::NULL, &JsValue::from_str(&json)) {
                tracing::warn!(error = ?err, "change callback threw");
            }
        }
    }
}

/// Center of `element` in client coordinates.
fn element_center(element: &Element) -> Point {
    let rect = element.get_bounding_client_rect();
    Point::new(rect.x() + rect.width() * 0.5, rect.y() + rect.height() * 0.5)
}

fn client_point(ev: &PointerEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// The engine handle owned by the page.
#[wasm_bindgen]
pub struct Engine {
    shared: Rc<Shared>,
    listeners: Vec<(EventTarget, &'static str, Listener)>,
}

#[wasm_bindgen]
impl Engine {
    /// Attach to the circle `element`. `config_json` may be a partial config.
    ///
    /// # Errors
    ///
    /// Returns a JS error string for an invalid config or when no window exists.
    #[wasm_bindgen(constructor)]
    pub fn new(element: Element, config_json: Option<String>) -> Result<Engine, JsValue> {
        let core = match config_json {
            Some(raw) => EngineCore::from_json(&raw).map_err(js_error)?,
            None => EngineCore::new(),
        };
        let window: Window = web_sys::window().ok_or_else(|| JsValue::from_str("no window available"))?;
        let shared = Rc::new(Shared { core: RefCell::new(core), on_change: RefCell::new(None) });
        let mut engine = Self { shared, listeners: Vec::new() };

        let down = {
            let shared = Rc::clone(&engine.shared);
            let element = element.clone();
            Closure::wrap(Box::new(move |ev: PointerEvent| {
                ev.prevent_default();
                let center = element_center(&element);
                shared.dispatch(|core| {
                    core.set_pointer_center(center);
                    core.on_pointer_down(client_point(&ev))
                });
            }) as Box<dyn FnMut(PointerEvent)>)
        };
        engine.listen(element.unchecked_into(), "pointerdown", down)?;

        let moved = {
            let shared = Rc::clone(&engine.shared);
            Closure::wrap(Box::new(move |ev: PointerEvent| {
                shared.dispatch(|core| core.on_pointer_move(client_point(&ev)));
            }) as Box<dyn FnMut(PointerEvent)>)
        };
        engine.listen(window.clone().unchecked_into(), "pointermove", moved)?;

        for event in ["pointerup", "pointercancel"] {
            let shared = Rc::clone(&engine.shared);
            let release = Closure::wrap(Box::new(move |_ev: PointerEvent| {
                shared.dispatch(EngineCore::on_pointer_up);
            }) as Box<dyn FnMut(PointerEvent)>);
            engine.listen(window.clone().unchecked_into(), event, release)?;
        }

        tracing::debug!(listeners = engine.listeners.len(), "engine attached");
        Ok(engine)
    }

    /// Register a callback invoked with the scene JSON after every change.
    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&self, callback: js_sys::Function) {
        *self.shared.on_change.borrow_mut() = Some(callback);
    }

    /// Set the angle in radians.
    #[wasm_bindgen(js_name = setAngle)]
    pub fn set_angle(&self, radians: f64) {
        self.shared.dispatch(|core| core.set_angle(radians));
    }

    /// Set the angle from a 0–360 slider value.
    #[wasm_bindgen(js_name = setAngleDegrees)]
    pub fn set_angle_degrees(&self, degrees: f64) {
        self.shared.dispatch(|core| core.set_angle_degrees(degrees));
    }

    /// Replace the configuration.
    ///
    /// # Errors
    ///
    /// Returns a JS error string when the JSON is malformed or invalid.
    #[wasm_bindgen(js_name = setConfig)]
    pub fn set_config(&self, config_json: &str) -> Result<(), JsValue> {
        let config = crate::config::VizConfig::from_json(config_json).map_err(js_error)?;
        let actions = self.shared.core.borrow_mut().set_config(config).map_err(js_error)?;
        self.shared.dispatch(|_| actions);
        Ok(())
    }

    /// Current scene as JSON.
    ///
    /// # Errors
    ///
    /// Returns a JS error string if serialization fails.
    pub fn scene(&self) -> Result<String, JsValue> {
        self.shared.core.borrow().scene_json().map_err(js_error)
    }

    /// Cached waveform paths as JSON.
    ///
    /// # Errors
    ///
    /// Returns a JS error string if serialization fails.
    pub fn waves(&self) -> Result<String, JsValue> {
        self.shared.core.borrow().waves_json().map_err(js_error)
    }

    /// Current angle in `[0, 2π)`.
    pub fn angle(&self) -> f64 {
        self.shared.core.borrow().angle().normalized()
    }

    #[wasm_bindgen(js_name = isDragging)]
    pub fn is_dragging(&self) -> bool {
        self.shared.core.borrow().drag_state() == crate::input::DragState::Dragging
    }
}

impl Engine {
    fn listen(&mut self, target: EventTarget, event: &'static str, listener: Listener) -> Result<(), JsValue> {
        target.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())?;
        self.listeners.push((target, event, listener));
        Ok(())
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        for (target, event, listener) in self.listeners.drain(..) {
            if let Err(err) = target.remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref()) {
                tracing::warn!(event, error = ?err, "failed to detach listener");
            }
        }
    }
}
