//! Parsing of the free-form performance strings the upstream reports

use regex::Regex;
use std::sync::OnceLock;

/// Latency assumed for ranking when a provider reports none
pub const LATENCY_SENTINEL: f64 = 999.0;

/// Uptime value the upstream uses when it has no measurement
pub const UPTIME_UNAVAILABLE: &str = "N/A";

fn latency_token() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\d*\.?\d+").expect("latency pattern is valid"))
}

fn leading_number() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)").expect("uptime pattern is valid")
    })
}

/// First decimal or integer token anywhere in the string (`"~1.2s"` -> 1.2)
pub fn parse_latency(raw: &str) -> Option<f64> {
    latency_token()
        .find(raw)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Uptime percentage, `None` for the `N/A` sentinel or anything unparsable
pub fn parse_uptime(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case(UPTIME_UNAVAILABLE) {
        return None;
    }

    leading_number()
        .find(trimmed)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Round half away from zero to `places` decimals
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
