//! Exposure settings and equivalence requests.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::scale::mapper::to_index;
use crate::scale::{Increment, ParameterKind};

/// A full exposure triangle expressed as display strings (`"1/125"`, `"f/8"`, `"400"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExposureSettings {
    /// Shutter speed display value, e.g. `"1/125"` or `"2s"`.
    pub shutter_speed: String,
    /// Aperture display value, e.g. `"f/8"`.
    pub aperture: String,
    /// ISO display value, e.g. `"400"`.
    pub iso: String,
}

impl ExposureSettings {
    pub fn new(
        shutter_speed: impl Into<String>,
        aperture: impl Into<String>,
        iso: impl Into<String>,
    ) -> Self {
        Self {
            shutter_speed: shutter_speed.into(),
            aperture: aperture.into(),
            iso: iso.into(),
        }
    }

    pub fn get(&self, parameter: ParameterKind) -> &str {
        match parameter {
            ParameterKind::ShutterSpeed => &self.shutter_speed,
            ParameterKind::Aperture => &self.aperture,
            ParameterKind::Iso => &self.iso,
        }
    }

    pub fn set(&mut self, parameter: ParameterKind, value: impl Into<String>) {
        let slot = match parameter {
            ParameterKind::ShutterSpeed => &mut self.shutter_speed,
            ParameterKind::Aperture => &mut self.aperture,
            ParameterKind::Iso => &mut self.iso,
        };
        *slot = value.into();
    }
}

/// Stop indices of one exposure, all relative to the same increment's tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExposureTriple {
    /// Index into the shutter table, slowest first.
    pub shutter_speed: usize,
    /// Index into the aperture table, widest first.
    pub aperture: usize,
    /// Index into the ISO table, lowest first.
    pub iso: usize,
}

impl ExposureTriple {
    /// Resolve every display value in `settings` to its stop index.
    pub fn resolve(settings: &ExposureSettings, increment: Increment) -> Result<Self> {
        Ok(Self {
            shutter_speed: to_index(ParameterKind::ShutterSpeed, increment, &settings.shutter_speed)?,
            aperture: to_index(ParameterKind::Aperture, increment, &settings.aperture)?,
            iso: to_index(ParameterKind::Iso, increment, &settings.iso)?,
        })
    }

    pub fn get(&self, parameter: ParameterKind) -> usize {
        match parameter {
            ParameterKind::ShutterSpeed => self.shutter_speed,
            ParameterKind::Aperture => self.aperture,
            ParameterKind::Iso => self.iso,
        }
    }
}

/// Everything needed to solve for one parameter of an equivalent exposure.
///
/// `targets` holds the new values of the two fixed parameters, ordered as
/// [`ParameterKind::others`] returns them for `solve_for`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquivalenceRequest {
    /// Granularity all values belong to.
    pub increment: Increment,
    /// The known, correctly exposed settings.
    pub base: ExposureSettings,
    /// The parameter to compute.
    pub solve_for: ParameterKind,
    /// New values of the two fixed parameters.
    pub targets: [String; 2],
    /// Signed stops; positive asks the solved parameter for less light.
    pub ev_compensation: f64,
}

impl EquivalenceRequest {
    pub fn new(
        solve_for: ParameterKind,
        base: ExposureSettings,
        targets: [String; 2],
        increment: Increment,
        ev_compensation: f64,
    ) -> Self {
        Self {
            increment,
            base,
            solve_for,
            targets,
            ev_compensation,
        }
    }

    /// Build a request from a full target triangle, ignoring its `solve_for` slot.
    pub fn from_settings(
        solve_for: ParameterKind,
        base: ExposureSettings,
        target: &ExposureSettings,
        increment: Increment,
        ev_compensation: f64,
    ) -> Self {
        let [a, b] = solve_for.others();
        Self::new(
            solve_for,
            base,
            [target.get(a).to_string(), target.get(b).to_string()],
            increment,
            ev_compensation,
        )
    }

    /// `(parameter, target value)` for the two fixed parameters.
    pub fn fixed_targets(&self) -> impl Iterator<Item = (ParameterKind, &str)> {
        self.solve_for
            .others()
            .into_iter()
            .zip(self.targets.iter().map(String::as_str))
    }

    /// The base settings with both fixed targets applied. The solved slot
    /// still carries its base value.
    pub fn fixed_settings(&self) -> ExposureSettings {
        let mut settings = self.base.clone();
        for (parameter, value) in self.fixed_targets() {
            settings.set(parameter, value);
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_settings_orders_targets() {
        let base = ExposureSettings::new("1/125", "f/8", "100");
        let target = ExposureSettings::new("1/60", "f/11", "200");
        let request =
            EquivalenceRequest::from_settings(ParameterKind::Aperture, base, &target, Increment::Full, 0.0);
        assert_eq!(request.targets, ["1/60".to_string(), "200".to_string()]);

        let fixed: Vec<_> = request.fixed_targets().collect();
        assert_eq!(
            fixed,
            vec![(ParameterKind::ShutterSpeed, "1/60"), (ParameterKind::Iso, "200")]
        );
    }

    #[test]
    fn test_fixed_settings_keeps_solved_base() {
        let base = ExposureSettings::new("1/125", "f/8", "100");
        let request = EquivalenceRequest::new(
            ParameterKind::ShutterSpeed,
            base,
            ["f/11".to_string(), "400".to_string()],
            Increment::Full,
            0.0,
        );
        assert_eq!(
            request.fixed_settings(),
            ExposureSettings::new("1/125", "f/11", "400")
        );
    }

    #[test]
    fn test_resolve_triple() {
        let settings = ExposureSettings::new("1/125", "f/8", "100");
        let triple = ExposureTriple::resolve(&settings, Increment::Full).unwrap();
        assert_eq!(triple.get(ParameterKind::ShutterSpeed), 12);
        assert_eq!(triple.get(ParameterKind::Aperture), 5);
        assert_eq!(triple.get(ParameterKind::Iso), 1);

        let bad = ExposureSettings::new("1/80", "f/8", "100");
        assert!(ExposureTriple::resolve(&bad, Increment::Full).is_err());
    }
}
