/// Rounds to the nearest tenth of an inch.
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Rounds to the nearest eighth of an inch.
pub fn round_eighth(value: f64) -> f64 {
    (value * 8.0).round() / 8.0
}

/// Formats inches the way deck shops print them: `8.1"`.
pub fn format_inches(value: f64) -> String {
    format!("{}\"", value)
}
