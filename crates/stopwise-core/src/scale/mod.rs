//! Stop scales — the discrete shutter, aperture and ISO progressions a
//! camera exposes, at full, half or third-stop granularity.
//!
//! A [`StopScale`] is a view over one of nine embedded literal tables. The
//! stop index of an entry is its position in the table, so indices are
//! strictly increasing along the sequence by construction.

pub mod mapper;
pub mod tables;
pub mod value;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StopwiseError;

/// Granularity of the discrete scale shown to the photographer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Increment {
    /// Whole stops (`1/60`, `1/125`, `1/250`).
    Full,
    /// Half stops (`1/60`, `1/90`, `1/125`).
    Half,
    /// Third stops (`1/60`, `1/80`, `1/100`, `1/125`).
    Third,
}

impl Increment {
    /// Number of table steps that make up one stop.
    pub const fn steps_per_stop(self) -> u32 {
        match self {
            Self::Full => 1,
            Self::Half => 2,
            Self::Third => 3,
        }
    }

    /// Human-readable label for menus and log lines.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Full => "full stop",
            Self::Half => "half stop",
            Self::Third => "third stop",
        }
    }

    pub fn all() -> &'static [Self] {
        const ALL: [Increment; 3] = [Increment::Full, Increment::Half, Increment::Third];
        &ALL
    }
}

impl fmt::Display for Increment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Increment {
    type Err = StopwiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" | "1" => Ok(Self::Full),
            "half" | "2" => Ok(Self::Half),
            "third" | "3" => Ok(Self::Third),
            _ => Err(StopwiseError::UnknownIncrement(s.to_string())),
        }
    }
}

/// One corner of the exposure triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterKind {
    /// Exposure time (`"30s"` … `"1/8000"`).
    ShutterSpeed,
    /// Lens f-number (`"f/1.4"` … `"f/64"`).
    Aperture,
    /// Sensor sensitivity (`"50"` … `"102400"`).
    Iso,
}

impl ParameterKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::ShutterSpeed => "Shutter speed",
            Self::Aperture => "Aperture",
            Self::Iso => "ISO",
        }
    }

    /// Sign that turns a table step into a step on the "less light" axis.
    ///
    /// Shutter and aperture tables run from most to least light, so moving
    /// up the table darkens the exposure (`+1`). ISO tables run in ascending
    /// sensitivity, so moving up brightens it (`-1`).
    pub const fn light_direction(self) -> i64 {
        match self {
            Self::ShutterSpeed | Self::Aperture => 1,
            Self::Iso => -1,
        }
    }

    /// The two parameters held fixed when solving for `self`, in
    /// shutter, aperture, ISO order.
    pub const fn others(self) -> [Self; 2] {
        match self {
            Self::ShutterSpeed => [Self::Aperture, Self::Iso],
            Self::Aperture => [Self::ShutterSpeed, Self::Iso],
            Self::Iso => [Self::ShutterSpeed, Self::Aperture],
        }
    }

    pub fn all() -> &'static [Self] {
        const ALL: [ParameterKind; 3] = [
            ParameterKind::ShutterSpeed,
            ParameterKind::Aperture,
            ParameterKind::Iso,
        ];
        &ALL
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ParameterKind {
    type Err = StopwiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shutter" | "shutterspeed" | "shutter_speed" | "shutter speed" => {
                Ok(Self::ShutterSpeed)
            }
            "aperture" | "fstop" | "f-stop" => Ok(Self::Aperture),
            "iso" => Ok(Self::Iso),
            _ => Err(StopwiseError::UnknownParameter(s.to_string())),
        }
    }
}

/// An ordered, immutable stop table for one parameter at one increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopScale {
    parameter: ParameterKind,
    increment: Increment,
    values: &'static [&'static str],
}

impl StopScale {
    pub const fn parameter(&self) -> ParameterKind {
        self.parameter
    }

    pub const fn increment(&self) -> Increment {
        self.increment
    }

    /// Display column, in stop-index order.
    pub const fn values(&self) -> &'static [&'static str] {
        self.values
    }

    pub const fn len(&self) -> usize {
        self.values.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Largest valid stop index.
    pub const fn max_index(&self) -> i64 {
        self.values.len() as i64 - 1
    }

    /// `(display value, stop index)` pairs in table order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, usize)> + '_ {
        self.values.iter().enumerate().map(|(i, v)| (*v, i))
    }

    /// Display value at `index`, or `None` outside `0..=max_index`.
    pub fn get(&self, index: i64) -> Option<&'static str> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.values.get(i))
            .copied()
    }

    /// Exact (case-sensitive) lookup of a display value.
    pub fn position(&self, value: &str) -> Option<usize> {
        self.values.iter().position(|v| *v == value)
    }
}

/// Look up the stop table for a parameter at the given increment.
///
/// Total over every `(parameter, increment)` pair; the nine tables are
/// compile-time constants.
pub const fn get_scale(parameter: ParameterKind, increment: Increment) -> StopScale {
    StopScale {
        parameter,
        increment,
        values: tables::table(parameter, increment),
    }
}
