/*
 * Flock Parameters Module
 *
 * This module defines the FlockParams struct holding the species-level
 * tunables shared by every boid in one flock: the steering limits, the
 * three neighborhood radii (stored squared), the per-rule weights, and the
 * toroidal domain size. Parameters are validated fail-fast when a Flock is
 * constructed or reconfigured, so invalid numbers surface as errors rather
 * than as silently wrong motion.
 */

use std::ops::RangeInclusive;

use thiserror::Error;

/// Rejected configuration detected during [`FlockParams::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamsError {
    #[error("domain dimensions must be finite and positive, got {width} x {height}")]
    NonPositiveDomain { width: f32, height: f32 },
    #[error("{name} must be finite and non-negative, got {value}")]
    NegativeTunable { name: &'static str, value: f32 },
}

/// Species-level tunables for one flock.
///
/// All boids of a flock share one set of parameters; hosts running several
/// species keep one `FlockParams` per flock, so tuning one species never
/// bleeds into another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlockParams {
    /// Width of the toroidal domain.
    pub width: f32,
    /// Height of the toroidal domain.
    pub height: f32,
    /// Upper bound on the magnitude of any steering force.
    pub max_force: f32,
    /// Upper bound on the magnitude of any boid's velocity.
    pub max_speed: f32,
    /// Squared radius of the separation neighborhood.
    pub separation_radius_sq: f32,
    /// Squared radius of the alignment neighborhood.
    pub alignment_radius_sq: f32,
    /// Squared radius of the cohesion neighborhood.
    pub cohesion_radius_sq: f32,
    pub separation_weight: f32,
    pub alignment_weight: f32,
    pub cohesion_weight: f32,
}

impl Default for FlockParams {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            max_force: 0.03,
            max_speed: 2.0,
            separation_radius_sq: 625.0,
            alignment_radius_sq: 2500.0,
            cohesion_radius_sq: 2500.0,
            separation_weight: 1.5,
            alignment_weight: 1.0,
            cohesion_weight: 1.0,
        }
    }
}

impl FlockParams {
    /// Checks every tunable, returning the first offending value.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(ParamsError::NonPositiveDomain {
                width: self.width,
                height: self.height,
            });
        }
        let tunables = [
            ("max_force", self.max_force),
            ("max_speed", self.max_speed),
            ("separation_radius_sq", self.separation_radius_sq),
            ("alignment_radius_sq", self.alignment_radius_sq),
            ("cohesion_radius_sq", self.cohesion_radius_sq),
            ("separation_weight", self.separation_weight),
            ("alignment_weight", self.alignment_weight),
            ("cohesion_weight", self.cohesion_weight),
        ];
        for (name, value) in tunables {
            if !value.is_finite() || value < 0.0 {
                return Err(ParamsError::NegativeTunable { name, value });
            }
        }
        Ok(())
    }

    // Parameter ranges for host UI sliders

    pub fn max_speed_range() -> RangeInclusive<f32> {
        0.5..=10.0
    }

    pub fn max_force_range() -> RangeInclusive<f32> {
        0.001..=0.5
    }

    pub fn weight_range() -> RangeInclusive<f32> {
        0.0..=3.0
    }

    pub fn radius_sq_range() -> RangeInclusive<f32> {
        25.0..=10000.0
    }
}

#[cfg(test)]
mod tests {
    use super::{FlockParams, ParamsError};

    #[test]
    fn default_params_are_valid() {
        assert_eq!(FlockParams::default().validate(), Ok(()));
    }

    #[test]
    fn non_positive_domain_is_rejected() {
        let params = FlockParams {
            width: 0.0,
            ..FlockParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ParamsError::NonPositiveDomain { .. })
        ));

        let params = FlockParams {
            height: -10.0,
            ..FlockParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ParamsError::NonPositiveDomain { .. })
        ));
    }

    #[test]
    fn negative_and_non_finite_tunables_are_rejected() {
        let params = FlockParams {
            max_speed: -2.0,
            ..FlockParams::default()
        };
        assert_eq!(
            params.validate(),
            Err(ParamsError::NegativeTunable {
                name: "max_speed",
                value: -2.0,
            })
        );

        let params = FlockParams {
            separation_radius_sq: f32::NAN,
            ..FlockParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ParamsError::NegativeTunable {
                name: "separation_radius_sq",
                ..
            })
        ));
    }
}
