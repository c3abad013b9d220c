//! Shared requestAnimationFrame loop.
//!
//! One browser timer serves every subscriber. The loop keeps itself alive by
//! rescheduling from inside the tick closure and stops rescheduling when the
//! last subscription is dropped, so an idle page costs nothing.

use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Subscriber {
    alive: Rc<Cell<bool>>,
    f: Box<dyn FnMut(f32, f32)>,
}

struct DriverInner {
    window: web::Window,
    subs: RefCell<Vec<Subscriber>>,
    running: Cell<bool>,
    started: Cell<Option<Instant>>,
    last: Cell<Option<Instant>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

/// Owns the rAF loop; hand out [`FrameSubscription`]s via [`subscribe`].
///
/// [`subscribe`]: FrameDriver::subscribe
#[derive(Clone)]
pub struct FrameDriver {
    inner: Rc<DriverInner>,
}

/// Keeps one frame callback registered; dropping it unsubscribes.
pub struct FrameSubscription {
    alive: Rc<Cell<bool>>,
}

impl Drop for FrameSubscription {
    fn drop(&mut self) {
        self.alive.set(false);
    }
}

impl FrameDriver {
    pub fn new(window: web::Window) -> Self {
        let inner = Rc::new(DriverInner {
            window,
            subs: RefCell::new(Vec::new()),
            running: Cell::new(false),
            started: Cell::new(None),
            last: Cell::new(None),
            tick: RefCell::new(None),
        });

        let tick_inner = inner.clone();
        let tick = Closure::wrap(Box::new(move || {
            DriverInner::tick(&tick_inner);
        }) as Box<dyn FnMut()>);
        *inner.tick.borrow_mut() = Some(tick);

        Self { inner }
    }

    /// Register `f(dt_sec, elapsed_sec)` to run every animation frame.
    pub fn subscribe(&self, f: impl FnMut(f32, f32) + 'static) -> FrameSubscription {
        let alive = Rc::new(Cell::new(true));
        self.inner.subs.borrow_mut().push(Subscriber {
            alive: alive.clone(),
            f: Box::new(f),
        });
        self.inner.ensure_running();
        FrameSubscription { alive }
    }
}

impl DriverInner {
    fn ensure_running(&self) {
        if self.running.get() {
            return;
        }
        self.running.set(true);
        // Restart the clock so a long pause does not land as one huge dt.
        let now = Instant::now();
        if self.started.get().is_none() {
            self.started.set(Some(now));
        }
        self.last.set(Some(now));
        self.request_frame();
    }

    fn request_frame(&self) {
        if let Some(tick) = self.tick.borrow().as_ref() {
            let _ = self
                .window
                .request_animation_frame(tick.as_ref().unchecked_ref());
        }
    }

    fn tick(inner: &Rc<DriverInner>) {
        let now = Instant::now();
        let started = inner.started.get().unwrap_or(now);
        let last = inner.last.get().unwrap_or(now);
        inner.last.set(Some(now));

        let dt = now.duration_since(last).as_secs_f32();
        let elapsed = now.duration_since(started).as_secs_f32();

        {
            let mut subs = inner.subs.borrow_mut();
            for sub in subs.iter_mut() {
                if sub.alive.get() {
                    (sub.f)(dt, elapsed);
                }
            }
            subs.retain(|s| s.alive.get());
            if subs.is_empty() {
                inner.running.set(false);
                return;
            }
        }

        inner.request_frame();
    }
}
