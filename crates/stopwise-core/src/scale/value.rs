//! Numeric reading of display strings.
//!
//! Places a display value on a continuous "stops of darkening" axis so a
//! value missing from a table can still be compared with its entries.
//!
//! ```text
//! shutter   "1/125", "2s"  →  -log2(seconds)
//! aperture  "f/8"          →  2 × log2(N)
//! ISO       "400"          →  -log2(ISO / 100)
//! ```
//!
//! Larger results always mean less light, for every parameter.

use super::ParameterKind;

/// Position of `display` on the darkening axis, in stops.
///
/// Returns `None` when the string does not read as a positive, finite
/// value of the given kind.
pub fn light_stops(parameter: ParameterKind, display: &str) -> Option<f64> {
    match parameter {
        ParameterKind::ShutterSpeed => parse_seconds(display).map(|t| -t.log2()),
        ParameterKind::Aperture => parse_f_number(display).map(|n| 2.0 * n.log2()),
        ParameterKind::Iso => parse_positive(display).map(|iso| -(iso / 100.0).log2()),
    }
}

/// Exposure time in seconds: `"1/250"`, `"1/1.3"`, `"2s"`, `"2.5\""`, `"30"`.
pub fn parse_seconds(display: &str) -> Option<f64> {
    let s = display.trim();
    if let Some((num, den)) = s.split_once('/') {
        let num = parse_positive(num)?;
        let den = parse_positive(den)?;
        return Some(num / den);
    }
    let s = s.strip_suffix(['s', '"']).unwrap_or(s);
    parse_positive(s)
}

/// f-number from `"f/5.6"` (the `f/` prefix is optional).
pub fn parse_f_number(display: &str) -> Option<f64> {
    let s = display.trim();
    let s = s
        .strip_prefix("f/")
        .or_else(|| s.strip_prefix("F/"))
        .unwrap_or(s);
    parse_positive(s)
}

fn parse_positive(s: &str) -> Option<f64> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}
