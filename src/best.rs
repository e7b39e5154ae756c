//! Read side of the stored best time. Nothing in this crate writes it back.

pub trait BestTimeStore {
    /// Best reaction time in milliseconds, if one was ever recorded.
    fn read(&self) -> Option<f64>;
}

/// Interpret a raw stored value. Empty, non-numeric, zero or negative
/// values are treated as "no best time".
pub fn parse_best(raw: Option<&str>) -> Option<f64> {
    let ms = raw?.trim().parse::<f64>().ok()?;
    (ms.is_finite() && ms > 0.0).then_some(ms)
}

/// Store with nothing recorded.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoBestTime;

impl BestTimeStore for NoBestTime {
    fn read(&self) -> Option<f64> {
        None
    }
}

impl BestTimeStore for Option<f64> {
    fn read(&self) -> Option<f64> {
        *self
    }
}
