use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::warn;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::Window;

use super::App;
use crate::error::{Error, Result};
use crate::schedule::{Scheduler, Task};

/// Pending `requestAnimationFrame` callback.
pub struct FrameTask {
    window: Window,
    id: Option<i32>,
}

impl Task for FrameTask {
    fn cancel(&mut self) {
        if let Some(id) = self.id.take() {
            self.window.cancel_animation_frame(id).ok();
        }
    }
}

/// Running `setInterval` timer.
pub struct TimerTask {
    window: Window,
    id: Option<i32>,
}

impl Task for TimerTask {
    fn cancel(&mut self) {
        if let Some(id) = self.id.take() {
            self.window.clear_interval_with_handle(id);
        }
    }
}

/// Browser-backed scheduler. The two callbacks are created once, when the
/// scheduler is attached to its session, and live as long as the session,
/// so a callback is never dropped while the browser may still invoke it.
pub struct WebScheduler {
    callbacks: Option<Callbacks>,
}

struct Callbacks {
    window: Window,
    frame: Closure<dyn FnMut(f64)>,
    tick: Closure<dyn FnMut()>,
}

impl WebScheduler {
    /// A scheduler that refuses to schedule until [`WebScheduler::attach`].
    pub fn detached() -> Self {
        WebScheduler { callbacks: None }
    }

    /// Point the app's scheduler callbacks back at the app.
    pub fn attach(app: &Rc<RefCell<App>>) -> Result<()> {
        let window = web_sys::window().ok_or(Error::NoWindow)?;

        let weak: Weak<RefCell<App>> = Rc::downgrade(app);
        let frame = Closure::wrap(Box::new(move |now: f64| {
            if let Some(app) = weak.upgrade() {
                if let Err(e) = app.borrow_mut().frame(now) {
                    warn!("frame: {e}");
                }
            }
        }) as Box<dyn FnMut(f64)>);

        let weak: Weak<RefCell<App>> = Rc::downgrade(app);
        let tick = Closure::wrap(Box::new(move || {
            if let Some(app) = weak.upgrade() {
                if let Err(e) = app.borrow_mut().tick() {
                    warn!("tick: {e}");
                }
            }
        }) as Box<dyn FnMut()>);

        app.borrow_mut().scheduler_mut().callbacks = Some(Callbacks {
            window,
            frame,
            tick,
        });
        Ok(())
    }
}

impl Scheduler for WebScheduler {
    type Frame = FrameTask;
    type Timer = TimerTask;

    fn request_frame(&mut self) -> Result<FrameTask> {
        let cb = self.callbacks.as_ref().ok_or(Error::Detached)?;
        let id = cb
            .window
            .request_animation_frame(cb.frame.as_ref().unchecked_ref::<js_sys::Function>())?;
        Ok(FrameTask {
            window: cb.window.clone(),
            id: Some(id),
        })
    }

    fn every(&mut self, period_ms: f64) -> Result<TimerTask> {
        let cb = self.callbacks.as_ref().ok_or(Error::Detached)?;
        let id = cb.window.set_interval_with_callback_and_timeout_and_arguments_0(
            cb.tick.as_ref().unchecked_ref::<js_sys::Function>(),
            period_ms.round() as i32,
        )?;
        Ok(TimerTask {
            window: cb.window.clone(),
            id: Some(id),
        })
    }
}
