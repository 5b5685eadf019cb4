//! Presentation effects
//!
//! Simulated brightness is implemented by rewriting a `brightness(x)`
//! term inside the media element's filter string, leaving any other
//! filter components untouched. There is no native media analog; the
//! filter is purely cosmetic.

/// Lowest brightness the filter may reach
pub const BRIGHTNESS_MIN: f64 = 0.1;

/// Highest brightness the filter may reach
pub const BRIGHTNESS_MAX: f64 = 2.0;

/// Extract the brightness term from a filter string
///
/// Returns None when the string carries no parseable `brightness(x)`
/// term, in which case the effective brightness is 1.
pub fn parse_brightness(filter: &str) -> Option<f64> {
    let start = filter.find("brightness(")?;
    let rest = &filter[start + "brightness(".len()..];
    let end = rest.find(')')?;
    rest[..end].trim().parse().ok()
}

/// Apply a brightness delta to a filter string
///
/// Parses the current term (defaulting to 1 when absent), clamps the
/// adjusted value to [0.1, 2], and returns the rewritten filter string
/// together with the new value. Other filter components are preserved.
pub fn adjust_brightness(filter: &str, delta: f64) -> (String, f64) {
    let current = parse_brightness(filter).unwrap_or(1.0);
    let adjusted = (current + delta).clamp(BRIGHTNESS_MIN, BRIGHTNESS_MAX);
    (with_brightness(filter, adjusted), adjusted)
}

/// Rewrite the brightness term of a filter string
fn with_brightness(filter: &str, value: f64) -> String {
    let stripped = strip_brightness(filter);
    let mut parts: Vec<&str> = stripped.split_whitespace().collect();
    let term = format!("brightness({})", value);
    parts.push(&term);
    parts.join(" ")
}

/// Remove an existing brightness term, keeping everything else
fn strip_brightness(filter: &str) -> String {
    match filter.find("brightness(") {
        Some(start) => {
            let after = &filter[start..];
            match after.find(')') {
                Some(close) => {
                    let mut out = String::with_capacity(filter.len());
                    out.push_str(&filter[..start]);
                    out.push_str(&after[close + 1..]);
                    out
                }
                // Malformed term, drop the tail
                None => filter[..start].to_string(),
            }
        }
        None => filter.to_string(),
    }
}

/// Percentage shown on a transient indicator
pub fn indicator_percent(value: f64) -> u32 {
    (value * 100.0).round().max(0.0) as u32
}
