//! The session controller: start/stop transitions and input routing.
//!
//! A run is `Sequencing` until the sequencer reports its threshold, then
//! `Spawning` until the player taps again. The sequencing variant, and with
//! it the pending frame task, is consumed before the spawn timer is created,
//! so the two continuations never overlap.
//!
//! There is no lights-out signal, so every stop is reported as a false start.

use log::{debug, info, trace};

use crate::best::BestTimeStore;
use crate::config::Config;
use crate::error::Result;
use crate::format::format_time;
use crate::geometry;
use crate::schedule::{Scheduler, Task};
use crate::sequencer::{Sequencer, Step};
use crate::spawner::Spawner;
use crate::surface::Surface;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    FalseStart,
}

impl Outcome {
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::FalseStart => "Jump start!",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Sequencing,
    Spawning,
}

/// One raw activation from any input device.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tap {
    /// Timestamp in the same clock the scheduler's frames use.
    pub at: f64,
    /// The tap landed on (or inside) a hyperlink.
    pub on_link: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disposition {
    /// Not ours; let the browser do its default thing.
    PassThrough,
    Started,
    Ended(Outcome),
}

impl Disposition {
    pub fn suppresses_default(&self) -> bool {
        !matches!(self, Disposition::PassThrough)
    }
}

enum Run<K: Scheduler> {
    Sequencing {
        sequencer: Sequencer,
        frame: Option<K::Frame>,
    },
    Spawning {
        spawner: Spawner,
        timer: Option<K::Timer>,
    },
}

impl<K: Scheduler> Run<K> {
    fn cancel(&mut self) {
        match self {
            Run::Sequencing { sequencer, frame } => {
                sequencer.cancel();
                if let Some(frame) = frame {
                    frame.cancel();
                }
            }
            Run::Spawning { timer, .. } => {
                if let Some(timer) = timer {
                    timer.cancel();
                }
            }
        }
    }
}

pub struct Controller<S, K: Scheduler> {
    surface: S,
    scheduler: K,
    config: Config,
    run: Option<Run<K>>,
    started_at: f64,
}

impl<S: Surface, K: Scheduler> Controller<S, K> {
    /// Build an idle controller and show the stored best time, if any.
    pub fn new(
        mut surface: S,
        scheduler: K,
        config: Config,
        best: &impl BestTimeStore,
    ) -> Result<Self> {
        if let Some(ms) = best.read() {
            surface.show_best(&format_time(ms))?;
        }
        Ok(Controller {
            surface,
            scheduler,
            config,
            run: None,
            started_at: 0.0,
        })
    }

    pub fn phase(&self) -> Phase {
        match self.run {
            None => Phase::Idle,
            Some(Run::Sequencing { .. }) => Phase::Sequencing,
            Some(Run::Spawning { .. }) => Phase::Spawning,
        }
    }

    pub fn is_active(&self) -> bool {
        self.run.is_some()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn scheduler(&self) -> &K {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut K {
        &mut self.scheduler
    }

    /// Route a raw activation: start when idle, stop when active. Link taps
    /// are left alone while idle so navigation keeps working.
    pub fn tap(&mut self, tap: Tap) -> Result<Disposition> {
        if self.is_active() {
            let outcome = self.end(tap.at)?;
            Ok(Disposition::Ended(outcome))
        } else if tap.on_link {
            Ok(Disposition::PassThrough)
        } else {
            self.start(tap.at)?;
            Ok(Disposition::Started)
        }
    }

    /// Tear down whatever ran before and begin sequencing from `now`.
    pub fn start(&mut self, now: f64) -> Result<()> {
        self.teardown();

        self.surface.clear_extras()?;
        self.surface.set_bridge_width(0.0)?;
        self.surface.reset_fixed()?;
        self.surface.show_time(&format_time(0.0))?;

        let fixed = self.surface.fixed_strip_count();
        info!("run started: {fixed} fixed strips");
        self.started_at = now;
        self.run = Some(Run::Sequencing {
            sequencer: Sequencer::new(
                now,
                self.config.interval_ms,
                fixed,
                self.config.threshold,
            ),
            frame: None,
        });

        let next = self.scheduler.request_frame()?;
        if let Some(Run::Sequencing { frame, .. }) = &mut self.run {
            *frame = Some(next);
        }
        Ok(())
    }

    /// Stop the run. Always a false start. Nothing is shown when no run is
    /// active.
    pub fn end(&mut self, now: f64) -> Result<Outcome> {
        let outcome = Outcome::FalseStart;
        if !self.is_active() {
            return Ok(outcome);
        }
        info!("run ended after {:.0} ms", now - self.started_at);
        self.teardown();
        self.surface.show_verdict(outcome.message())?;
        Ok(outcome)
    }

    /// Frame continuation for the sequencer.
    pub fn frame(&mut self, now: f64) -> Result<()> {
        let Some(Run::Sequencing { sequencer, frame }) = &mut self.run else {
            return Ok(());
        };

        match sequencer.frame(now) {
            Step::Continue { lit } => {
                // Keep the sequence going even if lighting fails below.
                *frame = Some(self.scheduler.request_frame()?);
                for i in 0..lit {
                    self.surface.light_fixed(i)?;
                }
                Ok(())
            }
            Step::Threshold { lit } => {
                for i in 0..lit {
                    self.surface.light_fixed(i)?;
                }
                debug!("threshold reached with {lit} strips lit");
                self.begin_spawn()
            }
            Step::Stopped => Ok(()),
        }
    }

    /// Timer continuation for the spawner.
    pub fn tick(&mut self) -> Result<()> {
        let Some(Run::Spawning { spawner, timer }) = &mut self.run else {
            return Ok(());
        };

        if let Some(placement) = spawner.place() {
            trace!("extra strip {} at {}px", placement.index, placement.left);
            let right_edge = self.surface.append_extra(&placement)?;
            spawner.settle(right_edge <= self.surface.viewport_width());
            self.surface.set_bridge_width(placement.bridge_width)?;
        }

        if spawner.is_exhausted() {
            if let Some(mut timer) = timer.take() {
                timer.cancel();
                debug!("spawner left the viewport after {} strips", spawner.produced());
            }
        }
        Ok(())
    }

    fn begin_spawn(&mut self) -> Result<()> {
        let Some(mut sequencing) = self.run.take() else {
            return Ok(());
        };
        sequencing.cancel();
        drop(sequencing);

        let geometry = geometry::sample(
            self.surface.container_rect(),
            &self.surface.fixed_strip_rects(),
            self.config.fallback_gap,
        );
        self.surface.set_bridge_width(0.0)?;

        self.run = Some(Run::Spawning {
            spawner: Spawner::new(geometry),
            timer: None,
        });

        let next = self.scheduler.every(self.config.interval_ms)?;
        if let Some(Run::Spawning { timer, .. }) = &mut self.run {
            *timer = Some(next);
        }
        Ok(())
    }

    fn teardown(&mut self) {
        if let Some(mut run) = self.run.take() {
            run.cancel();
        }
    }
}
