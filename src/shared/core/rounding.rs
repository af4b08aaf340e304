/// Round to two decimals. Only applied when a value leaves the service.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
