//! Spacing measured from the fixed strips, used to line up spawned strips.

/// Horizontal extent of an element in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub width: f64,
}

impl Rect {
    pub fn new(left: f64, width: f64) -> Self {
        Rect { left, width }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    /// Container's left edge in viewport coordinates.
    pub container_origin: f64,
    pub strip_width: f64,
    pub gap: f64,
    /// First free offset after the fixed strips, relative to the container.
    pub insertion_origin: f64,
}

impl Geometry {
    /// Horizontal advance between consecutive strips.
    pub fn pitch(&self) -> f64 {
        self.strip_width + self.gap
    }
}

/// Derive spacing from the current layout. Assumes the fixed strips share a
/// width; with fewer than two strips the gap is `fallback_gap`, and with none
/// the insertion point sits one gap into the container.
pub fn sample(container: Rect, strips: &[Rect], fallback_gap: f64) -> Geometry {
    let strip_width = strips.first().map_or(0.0, |r| r.width);
    let gap = match strips {
        [first, second, ..] => second.left - first.right(),
        _ => fallback_gap,
    };
    let last_right = strips.last().map_or(container.left, Rect::right);

    Geometry {
        container_origin: container.left,
        strip_width,
        gap,
        insertion_origin: last_right - container.left + gap,
    }
}
