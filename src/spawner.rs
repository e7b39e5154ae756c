//! Procedural generation of extra strips once the sequencer is done.
//!
//! Each [`Spawner::place`] advances the cursor and the [`Bridge`] by one
//! pitch. The caller then reports through [`Spawner::settle`] whether the
//! placed strip is still in view; the first one that is not ends the
//! sequence. [`Spawner::bounded`] wraps the same two steps in an iterator
//! driven by a predicate.

use crate::geometry::Geometry;

/// Backing structure that grows under the extra strips.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bridge {
    width: f64,
}

impl Bridge {
    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn grow(&mut self, by: f64) {
        self.width += by.max(0.0);
    }

    pub fn reset(&mut self) {
        self.width = 0.0;
    }
}

/// Where one extra strip goes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Zero-based tick number within the run.
    pub index: usize,
    /// Offset from the container's left edge.
    pub left: f64,
    pub width: f64,
    /// Expected right edge in viewport coordinates, from the layout sampled
    /// when spawning began.
    pub right_edge: f64,
    /// Bridge width after this placement.
    pub bridge_width: f64,
}

#[derive(Clone, Debug)]
pub struct Spawner {
    geometry: Geometry,
    cursor: f64,
    produced: usize,
    bridge: Bridge,
    exhausted: bool,
}

impl Spawner {
    pub fn new(geometry: Geometry) -> Self {
        Spawner {
            geometry,
            cursor: geometry.insertion_origin,
            produced: 0,
            bridge: Bridge::default(),
            exhausted: false,
        }
    }

    /// Produce the next placement, or `None` once a strip has left the view.
    pub fn place(&mut self) -> Option<Placement> {
        if self.exhausted {
            return None;
        }

        let pitch = self.geometry.pitch();
        let left = self.cursor;
        self.cursor += pitch;
        self.bridge.grow(pitch);

        let placement = Placement {
            index: self.produced,
            left,
            width: self.geometry.strip_width,
            right_edge: self.geometry.container_origin + left + self.geometry.strip_width,
            bridge_width: self.bridge.width(),
        };
        self.produced += 1;
        Some(placement)
    }

    /// Record whether the last placed strip is still in view. Once it is
    /// not, no further placements are produced.
    pub fn settle(&mut self, in_view: bool) {
        if !in_view {
            self.exhausted = true;
        }
    }

    /// Iterate placements, asking `in_view` once per strip.
    pub fn bounded<B>(self, in_view: B) -> Bounded<B>
    where
        B: FnMut(&Placement) -> bool,
    {
        Bounded {
            spawner: self,
            in_view,
        }
    }

    /// Next insertion offset relative to the container.
    pub fn cursor(&self) -> f64 {
        self.cursor
    }

    pub fn bridge(&self) -> Bridge {
        self.bridge
    }

    pub fn produced(&self) -> usize {
        self.produced
    }

    /// No more placements will be produced.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

pub struct Bounded<B> {
    spawner: Spawner,
    in_view: B,
}

impl<B> Bounded<B> {
    pub fn spawner(&self) -> &Spawner {
        &self.spawner
    }
}

impl<B> Iterator for Bounded<B>
where
    B: FnMut(&Placement) -> bool,
{
    type Item = Placement;

    fn next(&mut self) -> Option<Placement> {
        let placement = self.spawner.place()?;
        let in_view = (self.in_view)(&placement);
        self.spawner.settle(in_view);
        Some(placement)
    }
}

/// A strip is in view while its right edge has not passed the viewport width.
pub fn within_viewport(viewport_width: f64) -> impl FnMut(&Placement) -> bool {
    move |p| p.right_edge <= viewport_width
}
