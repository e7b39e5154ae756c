use crate::error::Result;
use crate::geometry::Rect;
use crate::spawner::Placement;

/// The board the session draws on: fixed strips, extra strips, the bridge
/// and the status text.
pub trait Surface {
    fn container_rect(&self) -> Rect;
    fn fixed_strip_rects(&self) -> Vec<Rect>;
    fn fixed_strip_count(&self) -> usize;
    /// Current viewport width; may change between calls.
    fn viewport_width(&self) -> f64;

    /// Turn fixed strip `index` on. Already-lit strips are left alone.
    fn light_fixed(&mut self, index: usize) -> Result<()>;
    /// Turn every fixed strip off.
    fn reset_fixed(&mut self) -> Result<()>;

    /// Append a lit extra strip at `placement` and return its measured
    /// right edge in viewport coordinates.
    fn append_extra(&mut self, placement: &Placement) -> Result<f64>;
    /// Remove every extra strip.
    fn clear_extras(&mut self) -> Result<()>;
    fn set_bridge_width(&mut self, width: f64) -> Result<()>;

    /// Plain elapsed-time text.
    fn show_time(&mut self, text: &str) -> Result<()>;
    /// Animated outcome text.
    fn show_verdict(&mut self, text: &str) -> Result<()>;
    fn show_best(&mut self, text: &str) -> Result<()>;
}
