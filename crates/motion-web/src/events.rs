//! Event listener wiring with RAII deregistration.
//!
//! Each listener writes one Signal and returns; nothing here triggers a
//! recompute. Dropping a [`ListenerHandle`] removes the listener, so a view
//! that unmounts releases its input sources with it.

use crate::signals::SharedSignals;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct ListenerHandle {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl ListenerHandle {
    pub fn attach(
        target: &web::EventTarget,
        event: &'static str,
        f: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut(web::Event)>);
        let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event,
            closure,
        }
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Wire pointer, scroll and resize listeners that keep `signals` current.
pub fn wire_signal_listeners(window: &web::Window, signals: SharedSignals) -> Vec<ListenerHandle> {
    let target: &web::EventTarget = window.as_ref();
    let mut handles = Vec::with_capacity(3);

    {
        let signals = signals.clone();
        handles.push(ListenerHandle::attach(target, "pointermove", move |ev| {
            let ev: web::PointerEvent = ev.unchecked_into();
            let stamp = ev.time_stamp() / 1000.0;
            signals.borrow_mut().pointer.set(
                Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
                stamp,
            );
        }));
    }

    {
        let signals = signals.clone();
        let window = window.clone();
        handles.push(ListenerHandle::attach(target, "scroll", move |ev| {
            let y = window.scroll_y().unwrap_or(0.0) as f32;
            signals
                .borrow_mut()
                .scroll_y
                .set(y, ev.time_stamp() / 1000.0);
        }));
    }

    {
        let signals = signals.clone();
        let window = window.clone();
        handles.push(ListenerHandle::attach(target, "resize", move |ev| {
            let size = viewport_size(&window);
            signals
                .borrow_mut()
                .viewport
                .set(size, ev.time_stamp() / 1000.0);
        }));
    }

    handles
}

pub fn viewport_size(window: &web::Window) -> Vec2 {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    Vec2::new(w.max(1.0) as f32, h.max(1.0) as f32)
}
