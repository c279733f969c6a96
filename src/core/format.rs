//! Display formatting for per-game averages.

/// Render an average the way the stat lines show it: shortest exact decimal,
/// but whole numbers keep one fractional digit (`27.0`, not `27`).
pub fn format_stat(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Render a 0..1 ratio as a percentage with two decimals (`0.516` -> `51.60`).
pub fn format_percent(ratio: f64) -> String {
    format!("{:.2}", ratio * 100.0)
}
