//! Frame-driven stepping of the fixed strips.
//!
//! The sequencer is fed frame timestamps and answers how many fixed strips
//! should be lit. One strip comes on per interval, counting the first frame
//! as the first strip. Once the raw count reaches the threshold the
//! sequencer finishes and hands over to the spawner; there is no
//! "lights out" step.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Keep requesting frames; `lit` fixed strips should be on.
    Continue { lit: usize },
    /// Threshold reached on this frame. Reported once.
    Threshold { lit: usize },
    /// Finished or cancelled; the frame should be ignored.
    Stopped,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Running,
    Finished,
    Cancelled,
}

#[derive(Clone, Debug)]
pub struct Sequencer {
    start: f64,
    interval: f64,
    fixed: usize,
    threshold: usize,
    lit: usize,
    state: State,
}

impl Sequencer {
    pub fn new(start: f64, interval: f64, fixed: usize, threshold: usize) -> Self {
        Sequencer {
            start,
            interval,
            fixed,
            threshold,
            lit: 0,
            state: State::Running,
        }
    }

    /// Number of strips that should be on `elapsed` ms into the run.
    pub fn count_at(elapsed: f64, interval: f64) -> usize {
        let steps = (elapsed / interval).floor() + 1.0;
        if steps > 0.0 {
            steps as usize
        } else {
            0
        }
    }

    pub fn frame(&mut self, now: f64) -> Step {
        if self.state != State::Running {
            return Step::Stopped;
        }

        let count = Self::count_at(now - self.start, self.interval);
        // Never step backwards on a jittery timestamp.
        self.lit = self.lit.max(count.min(self.fixed));

        if count >= self.threshold {
            self.state = State::Finished;
            Step::Threshold { lit: self.lit }
        } else {
            Step::Continue { lit: self.lit }
        }
    }

    /// Stop without reaching the threshold. Safe to call repeatedly.
    pub fn cancel(&mut self) {
        if self.state == State::Running {
            self.state = State::Cancelled;
        }
    }

    pub fn lit(&self) -> usize {
        self.lit
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn is_running(&self) -> bool {
        self.state == State::Running
    }
}
