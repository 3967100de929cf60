//! Conversion between display strings and stop indices.
//!
//! Lookups are exact. Nearest-entry resolution lives in
//! [`crate::exposure::classify`] and is only used to report where a
//! rejected value would have landed.

use super::{Increment, ParameterKind, get_scale};
use crate::error::{Result, StopwiseError};

/// Stop index of `display` within the `(parameter, increment)` table.
pub fn to_index(parameter: ParameterKind, increment: Increment, display: &str) -> Result<usize> {
    get_scale(parameter, increment)
        .position(display)
        .ok_or_else(|| StopwiseError::NotFound {
            parameter,
            increment,
            value: display.to_string(),
        })
}

/// Canonical display string for `index` within the `(parameter, increment)` table.
pub fn to_display(
    parameter: ParameterKind,
    increment: Increment,
    index: i64,
) -> Result<&'static str> {
    let scale = get_scale(parameter, increment);
    scale.get(index).ok_or(StopwiseError::OutOfRange {
        parameter,
        increment,
        index,
        len: scale.len(),
    })
}
