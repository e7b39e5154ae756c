/// Render milliseconds as seconds with three decimals, zero-padded to six
/// characters (`1234.0` → `"01.234"`).
pub fn format_time(ms: f64) -> String {
    let ms = ms.max(0.0).round();
    format!("{:06.3}", ms / 1000.0)
}
