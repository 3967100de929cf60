//! Literal stop progressions as printed on camera dials and in viewfinders.
//!
//! Every table runs from the setting that admits the most light to the one
//! that admits the least, except ISO, which is listed in ascending
//! sensitivity like a camera's ISO dial (see [`ParameterKind::light_direction`]).
//!
//! These values are not `2^(n/steps)` rounded generically. Third- and
//! half-stop tables follow the rounding camera makers actually print
//! (`1/13`, `f/7.1`, `1/10` at half stops, and so on).
//!
//! [`ParameterKind::light_direction`]: super::ParameterKind::light_direction

use super::{Increment, ParameterKind};

pub const SHUTTER_FULL: &[&str] = &[
    "30s", "15s", "8s", "4s", "2s", "1s", "1/2", "1/4", "1/8", "1/15", "1/30", "1/60",
    "1/125", "1/250", "1/500", "1/1000", "1/2000", "1/4000", "1/8000",
];

pub const SHUTTER_HALF: &[&str] = &[
    "30s", "20s", "15s", "10s", "8s", "6s", "4s", "3s", "2s", "1.5s", "1s", "1/1.5", "1/2",
    "1/3", "1/4", "1/6", "1/8", "1/10", "1/15", "1/20", "1/30", "1/45", "1/60", "1/90",
    "1/125", "1/180", "1/250", "1/350", "1/500", "1/750", "1/1000", "1/1500", "1/2000",
    "1/3000", "1/4000", "1/6000", "1/8000",
];

pub const SHUTTER_THIRD: &[&str] = &[
    "30s", "25s", "20s", "15s", "13s", "10s", "8s", "6s", "5s", "4s", "3.2s", "2.5s", "2s",
    "1.6s", "1.3s", "1s", "1/1.3", "1/1.6", "1/2", "1/2.5", "1/3", "1/4", "1/5", "1/6",
    "1/8", "1/10", "1/13", "1/15", "1/20", "1/25", "1/30", "1/40", "1/50", "1/60", "1/80",
    "1/100", "1/125", "1/160", "1/200", "1/250", "1/320", "1/400", "1/500", "1/640",
    "1/800", "1/1000", "1/1250", "1/1600", "1/2000", "1/2500", "1/3200", "1/4000", "1/5000",
    "1/6400", "1/8000",
];

pub const APERTURE_FULL: &[&str] = &[
    "f/1.4", "f/2", "f/2.8", "f/4", "f/5.6", "f/8", "f/11", "f/16", "f/22", "f/32", "f/45",
    "f/64",
];

pub const APERTURE_HALF: &[&str] = &[
    "f/1.4", "f/1.7", "f/2", "f/2.4", "f/2.8", "f/3.3", "f/4", "f/4.8", "f/5.6", "f/6.7",
    "f/8", "f/9.5", "f/11", "f/13", "f/16", "f/19", "f/22", "f/27", "f/32", "f/38", "f/45",
    "f/54", "f/64",
];

pub const APERTURE_THIRD: &[&str] = &[
    "f/1.4", "f/1.6", "f/1.8", "f/2", "f/2.2", "f/2.5", "f/2.8", "f/3.2", "f/3.5", "f/4",
    "f/4.5", "f/5", "f/5.6", "f/6.3", "f/7.1", "f/8", "f/9", "f/10", "f/11", "f/13", "f/14",
    "f/16", "f/18", "f/20", "f/22", "f/25", "f/29", "f/32", "f/36", "f/40", "f/45", "f/51",
    "f/57", "f/64",
];

pub const ISO_FULL: &[&str] = &[
    "50", "100", "200", "400", "800", "1600", "3200", "6400", "12800", "25600", "51200",
    "102400",
];

pub const ISO_HALF: &[&str] = &[
    "50", "70", "100", "140", "200", "280", "400", "560", "800", "1100", "1600", "2200",
    "3200", "4500", "6400", "9000", "12800", "18000", "25600", "36000", "51200", "72000",
    "102400",
];

pub const ISO_THIRD: &[&str] = &[
    "50", "64", "80", "100", "125", "160", "200", "250", "320", "400", "500", "640", "800",
    "1000", "1250", "1600", "2000", "2500", "3200", "4000", "5000", "6400", "8000", "10000",
    "12800", "16000", "20000", "25600", "32000", "40000", "51200", "64000", "80000",
    "102400",
];

/// Display column for one `(parameter, increment)` pair.
pub(crate) const fn table(parameter: ParameterKind, increment: Increment) -> &'static [&'static str] {
    match (parameter, increment) {
        (ParameterKind::ShutterSpeed, Increment::Full) => SHUTTER_FULL,
        (ParameterKind::ShutterSpeed, Increment::Half) => SHUTTER_HALF,
        (ParameterKind::ShutterSpeed, Increment::Third) => SHUTTER_THIRD,
        (ParameterKind::Aperture, Increment::Full) => APERTURE_FULL,
        (ParameterKind::Aperture, Increment::Half) => APERTURE_HALF,
        (ParameterKind::Aperture, Increment::Third) => APERTURE_THIRD,
        (ParameterKind::Iso, Increment::Full) => ISO_FULL,
        (ParameterKind::Iso, Increment::Half) => ISO_HALF,
        (ParameterKind::Iso, Increment::Third) => ISO_THIRD,
    }
}
