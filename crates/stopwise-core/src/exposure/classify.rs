//! Classification of solved indices and nearest-entry lookup.
//!
//! Bounds are judged on the darkening axis, so "past the end of the table"
//! means overexposed for a shutter or aperture but underexposed for ISO.

use super::outcome::ExposureOutcome;
use super::request::ExposureSettings;
use crate::scale::mapper::to_display;
use crate::scale::value::light_stops;
use crate::scale::{Increment, ParameterKind, get_scale};

/// Minimum distance improvement, in stops, for a later entry to replace an
/// earlier one as nearest.
const NEAREST_EPSILON: f64 = 1e-9;

/// Turn an unclamped solved index into an outcome.
///
/// `settings` carries the fixed parameters; on success its `parameter` slot
/// is overwritten with the solved display value.
pub fn classify(
    parameter: ParameterKind,
    increment: Increment,
    raw_index: i64,
    mut settings: ExposureSettings,
) -> ExposureOutcome {
    if let Ok(value) = to_display(parameter, increment, raw_index) {
        settings.set(parameter, value);
        return ExposureOutcome::Success { settings };
    }

    let scale = get_scale(parameter, increment);
    // Steps past the table end, on the darkening axis. Positive means the
    // scene needs less light than the table can give.
    let overshoot = if raw_index < 0 {
        raw_index
    } else {
        raw_index - scale.max_index()
    };
    let past_end = overshoot.saturating_mul(parameter.light_direction());
    let stops = past_end.unsigned_abs() as f64 / f64::from(increment.steps_per_stop());

    tracing::debug!(%parameter, %increment, raw_index, stops, "solved value is off the scale");

    if past_end > 0 {
        ExposureOutcome::Overexposed { stops }
    } else {
        ExposureOutcome::Underexposed { stops }
    }
}

/// Entry of the `(parameter, increment)` table closest to `requested`.
///
/// Distance is measured in stops between the parsed values; ties go to the
/// lower index. A value that does not parse at all maps to the first entry.
pub fn nearest_available(
    parameter: ParameterKind,
    increment: Increment,
    requested: &str,
) -> &'static str {
    let scale = get_scale(parameter, increment);
    let values = scale.values();
    let Some(target) = light_stops(parameter, requested) else {
        return values[0];
    };

    let mut best = values[0];
    let mut best_distance = f64::INFINITY;
    for &value in values {
        let Some(stops) = light_stops(parameter, value) else {
            continue;
        };
        let distance = (stops - target).abs();
        if distance < best_distance - NEAREST_EPSILON {
            best = value;
            best_distance = distance;
        }
    }
    best
}

/// A [`ExposureOutcome::ParameterLimit`] for a value missing from its table.
pub fn parameter_limit(
    parameter: ParameterKind,
    increment: Increment,
    requested: &str,
) -> ExposureOutcome {
    let nearest = nearest_available(parameter, increment, requested);
    tracing::warn!(%parameter, %increment, requested, nearest, "value not on scale");
    ExposureOutcome::ParameterLimit {
        parameter,
        requested: requested.to_string(),
        nearest: nearest.to_string(),
    }
}
