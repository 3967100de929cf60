//! Exposure equivalence — requests, the conservation-law solver, and
//! classification of solved values into outcomes.

pub mod classify;
pub mod outcome;
pub mod request;
pub mod solver;

pub use outcome::ExposureOutcome;
pub use request::{EquivalenceRequest, ExposureSettings, ExposureTriple};
pub use solver::{RoundingMode, solve};
