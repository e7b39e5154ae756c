#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use jumpstart_wasm::geometry::Rect;
use jumpstart_wasm::schedule::{Scheduler, Task};
use jumpstart_wasm::spawner::Placement;
use jumpstart_wasm::surface::Surface;
use jumpstart_wasm::Controller;

/// In-memory light board.
#[derive(Debug, Default)]
pub struct Board {
    pub container: Rect,
    pub fixed: Vec<Rect>,
    pub lit: Vec<bool>,
    pub viewport: f64,
    pub extras: Vec<Placement>,
    pub bridge: f64,
    pub time: String,
    pub verdict: Option<String>,
    pub best: Option<String>,
    /// `light_fixed` calls that actually turned a strip on.
    pub fixed_changes: usize,
    /// Make `light_fixed` fail.
    pub broken_lights: bool,
}

impl Board {
    /// `n` strips of `width` separated by `gap`, starting `inset` px into a
    /// container at `origin`.
    pub fn row(origin: f64, inset: f64, width: f64, gap: f64, n: usize, viewport: f64) -> Self {
        let fixed = (0..n)
            .map(|i| Rect::new(origin + inset + i as f64 * (width + gap), width))
            .collect();
        Board {
            container: Rect::new(origin, inset * 2.0 + n as f64 * (width + gap)),
            fixed,
            lit: vec![false; n],
            viewport,
            ..Board::default()
        }
    }

    pub fn lit_count(&self) -> usize {
        self.lit.iter().filter(|on| **on).count()
    }
}

impl Surface for Board {
    fn container_rect(&self) -> Rect {
        self.container
    }

    fn fixed_strip_rects(&self) -> Vec<Rect> {
        self.fixed.clone()
    }

    fn fixed_strip_count(&self) -> usize {
        self.fixed.len()
    }

    fn viewport_width(&self) -> f64 {
        self.viewport
    }

    fn light_fixed(&mut self, index: usize) -> jumpstart_wasm::Result<()> {
        if self.broken_lights {
            return Err(jumpstart_wasm::Error::Js("classList unavailable".into()));
        }
        if let Some(on) = self.lit.get_mut(index) {
            if !*on {
                *on = true;
                self.fixed_changes += 1;
            }
        }
        Ok(())
    }

    fn reset_fixed(&mut self) -> jumpstart_wasm::Result<()> {
        self.lit.iter_mut().for_each(|on| *on = false);
        Ok(())
    }

    fn append_extra(&mut self, placement: &Placement) -> jumpstart_wasm::Result<f64> {
        self.extras.push(*placement);
        // Measured against wherever the container sits right now.
        Ok(self.container.left + placement.left + placement.width)
    }

    fn clear_extras(&mut self) -> jumpstart_wasm::Result<()> {
        self.extras.clear();
        Ok(())
    }

    fn set_bridge_width(&mut self, width: f64) -> jumpstart_wasm::Result<()> {
        self.bridge = width;
        Ok(())
    }

    fn show_time(&mut self, text: &str) -> jumpstart_wasm::Result<()> {
        self.time = text.to_string();
        self.verdict = None;
        Ok(())
    }

    fn show_verdict(&mut self, text: &str) -> jumpstart_wasm::Result<()> {
        self.verdict = Some(text.to_string());
        Ok(())
    }

    fn show_best(&mut self, text: &str) -> jumpstart_wasm::Result<()> {
        self.best = Some(text.to_string());
        Ok(())
    }
}

pub struct Handle {
    live: Rc<Cell<bool>>,
}

impl Task for Handle {
    fn cancel(&mut self) {
        self.live.set(false);
    }
}

/// Scheduler driven by hand: the test decides when frames and ticks fire.
#[derive(Default)]
pub struct Manual {
    frames: Vec<Rc<Cell<bool>>>,
    timers: Vec<(f64, Rc<Cell<bool>>)>,
}

impl Manual {
    pub fn live_frames(&self) -> usize {
        self.frames.iter().filter(|f| f.get()).count()
    }

    pub fn live_timers(&self) -> usize {
        self.timers.iter().filter(|(_, t)| t.get()).count()
    }

    pub fn timers_started(&self) -> usize {
        self.timers.len()
    }

    pub fn last_period(&self) -> Option<f64> {
        self.timers.last().map(|(p, _)| *p)
    }

    /// Consume the pending frame request, if any.
    fn take_frame(&mut self) -> bool {
        match self.frames.iter().find(|f| f.get()) {
            Some(f) => {
                f.set(false);
                true
            }
            None => false,
        }
    }
}

impl Scheduler for Manual {
    type Frame = Handle;
    type Timer = Handle;

    fn request_frame(&mut self) -> jumpstart_wasm::Result<Handle> {
        let live = Rc::new(Cell::new(true));
        self.frames.push(live.clone());
        Ok(Handle { live })
    }

    fn every(&mut self, period_ms: f64) -> jumpstart_wasm::Result<Handle> {
        let live = Rc::new(Cell::new(true));
        self.timers.push((period_ms, live.clone()));
        Ok(Handle { live })
    }
}

pub type TestController = Controller<Board, Manual>;

/// Deliver a frame at `now` if one was requested. Returns whether it fired.
pub fn pump_frame(ctrl: &mut TestController, now: f64) -> bool {
    if !ctrl.scheduler_mut().take_frame() {
        return false;
    }
    ctrl.frame(now).unwrap();
    true
}

/// Fire the interval timer once if it is running. Returns whether it fired.
pub fn pump_tick(ctrl: &mut TestController) -> bool {
    if ctrl.scheduler().live_timers() == 0 {
        return false;
    }
    ctrl.tick().unwrap();
    true
}
