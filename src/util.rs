// Display helpers shared by the web components.

/// Milliseconds as seconds with two decimals, e.g. `3.50s`.
pub fn format_ms(ms: f64) -> String {
    format!("{:.2}s", ms.max(0.0) / 1000.0)
}
