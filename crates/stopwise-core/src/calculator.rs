//! Public entry points for equivalent-exposure calculations.
//!
//! # Pipeline
//! ```text
//!   request ──→ every caller value on the scale? ──no──→ ParameterLimit
//!                         │ yes
//!                         ▼
//!                  solve (raw index) ──→ classify ──→ Success / Overexposed / Underexposed
//! ```
//!
//! The calculator holds only its configuration; every call is independent
//! and the stop tables are immutable, so a shared `&ExposureCalculator`
//! can serve any number of threads.

use crate::config::CalculatorConfig;
use crate::error::Result;
use crate::exposure::classify::{classify, parameter_limit};
use crate::exposure::{EquivalenceRequest, ExposureOutcome, ExposureSettings, solve};
use crate::scale::mapper::to_index;
use crate::scale::{Increment, ParameterKind, get_scale};

#[derive(Debug, Clone, Default)]
pub struct ExposureCalculator {
    config: CalculatorConfig,
}

impl ExposureCalculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Shutter speeds at `increment`, slowest first.
    pub fn get_shutter_speeds(&self, increment: Increment) -> &'static [&'static str] {
        get_scale(ParameterKind::ShutterSpeed, increment).values()
    }

    /// Apertures at `increment`, widest first.
    pub fn get_apertures(&self, increment: Increment) -> &'static [&'static str] {
        get_scale(ParameterKind::Aperture, increment).values()
    }

    /// ISO values at `increment`, lowest first.
    pub fn get_isos(&self, increment: Increment) -> &'static [&'static str] {
        get_scale(ParameterKind::Iso, increment).values()
    }

    /// Shutter speed that keeps `base`'s exposure after moving to
    /// `target_aperture` and `target_iso`.
    pub fn calculate_shutter_speed(
        &self,
        base: &ExposureSettings,
        target_aperture: &str,
        target_iso: &str,
        increment: Increment,
        ev_compensation: f64,
    ) -> Result<ExposureOutcome> {
        self.calculate(&EquivalenceRequest::new(
            ParameterKind::ShutterSpeed,
            base.clone(),
            [target_aperture.to_string(), target_iso.to_string()],
            increment,
            ev_compensation,
        ))
    }

    /// Aperture that keeps `base`'s exposure after moving to
    /// `target_shutter_speed` and `target_iso`.
    pub fn calculate_aperture(
        &self,
        base: &ExposureSettings,
        target_shutter_speed: &str,
        target_iso: &str,
        increment: Increment,
        ev_compensation: f64,
    ) -> Result<ExposureOutcome> {
        self.calculate(&EquivalenceRequest::new(
            ParameterKind::Aperture,
            base.clone(),
            [target_shutter_speed.to_string(), target_iso.to_string()],
            increment,
            ev_compensation,
        ))
    }

    /// ISO that keeps `base`'s exposure after moving to
    /// `target_shutter_speed` and `target_aperture`.
    pub fn calculate_iso(
        &self,
        base: &ExposureSettings,
        target_shutter_speed: &str,
        target_aperture: &str,
        increment: Increment,
        ev_compensation: f64,
    ) -> Result<ExposureOutcome> {
        self.calculate(&EquivalenceRequest::new(
            ParameterKind::Iso,
            base.clone(),
            [target_shutter_speed.to_string(), target_aperture.to_string()],
            increment,
            ev_compensation,
        ))
    }

    /// Run any equivalence request through validation, solving and classification.
    ///
    /// Caller mistakes come back as [`ExposureOutcome::ParameterLimit`]. The
    /// only `Err` is a non-finite `ev_compensation`.
    pub fn calculate(&self, request: &EquivalenceRequest) -> Result<ExposureOutcome> {
        if let Some(limit) = first_missing_value(request) {
            return Ok(limit);
        }

        let raw_index = solve(request, self.config.rounding)?;
        Ok(classify(
            request.solve_for,
            request.increment,
            raw_index,
            request.fixed_settings(),
        ))
    }
}

/// Check the three base values, then the two fixed targets.
fn first_missing_value(request: &EquivalenceRequest) -> Option<ExposureOutcome> {
    let increment = request.increment;
    ParameterKind::all()
        .iter()
        .map(|&parameter| (parameter, request.base.get(parameter)))
        .chain(request.fixed_targets())
        .find(|(parameter, value)| to_index(*parameter, increment, value).is_err())
        .map(|(parameter, value)| parameter_limit(parameter, increment, value))
}
