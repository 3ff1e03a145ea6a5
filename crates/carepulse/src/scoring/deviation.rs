use serde::Serialize;

/// Which side(s) of the normal band contribute to the deviation index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviationShape {
    TwoSided,
    LowOnly,
    HighOnly,
}

/// Normal and clinically extreme bounds for one metric.
///
/// For a [`DeviationShape::LowOnly`] range only `normal_min`/`extreme_min` are read, and for
/// [`DeviationShape::HighOnly`] only `normal_max`/`extreme_max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceRange {
    pub normal_min: f64,
    pub normal_max: f64,
    pub extreme_min: f64,
    pub extreme_max: f64,
    pub shape: DeviationShape,
}

impl ReferenceRange {
    pub const fn two_sided(
        normal_min: f64,
        normal_max: f64,
        extreme_min: f64,
        extreme_max: f64,
    ) -> Self {
        Self {
            normal_min,
            normal_max,
            extreme_min,
            extreme_max,
            shape: DeviationShape::TwoSided,
        }
    }

    /// Penalizes only values below `normal_min`.
    pub const fn low_only(normal_min: f64, extreme_min: f64) -> Self {
        Self {
            normal_min,
            normal_max: f64::INFINITY,
            extreme_min,
            extreme_max: f64::INFINITY,
            shape: DeviationShape::LowOnly,
        }
    }

    /// Penalizes only values above `normal_max`.
    pub const fn high_only(normal_max: f64, extreme_max: f64) -> Self {
        Self {
            normal_min: f64::NEG_INFINITY,
            normal_max,
            extreme_min: f64::NEG_INFINITY,
            extreme_max,
            shape: DeviationShape::HighOnly,
        }
    }

    pub fn penalizes_low(&self) -> bool {
        matches!(self.shape, DeviationShape::TwoSided | DeviationShape::LowOnly)
    }

    pub fn penalizes_high(&self) -> bool {
        matches!(self.shape, DeviationShape::TwoSided | DeviationShape::HighOnly)
    }

    /// True when every penalized side has a strictly wider extreme bound.
    pub fn is_well_formed(&self) -> bool {
        let low_ok = !self.penalizes_low() || self.extreme_min < self.normal_min;
        let high_ok = !self.penalizes_high() || self.extreme_max > self.normal_max;
        let band_ok = !(self.penalizes_low() && self.penalizes_high())
            || self.normal_min <= self.normal_max;
        low_ok && high_ok && band_ok
    }

    pub fn deviation(&self, value: f64) -> f64 {
        if self.penalizes_high() && value > self.normal_max {
            return saturating_ramp(value - self.normal_max, self.extreme_max - self.normal_max);
        }
        if self.penalizes_low() && value < self.normal_min {
            return saturating_ramp(self.normal_min - value, self.normal_min - self.extreme_min);
        }
        0.0
    }
}

/// Two-sided deviation index in `[0, 1]`.
///
/// Zero inside `[normal_min, normal_max]`, then a quadratic ramp that saturates at 1.0 once the
/// value reaches the matching extreme bound. Requires `extreme_max > normal_max` and
/// `extreme_min < normal_min`; the fixed tables are checked by
/// [`validate_reference_tables`](super::reference::validate_reference_tables).
pub fn bounded_deviation(
    value: f64,
    normal_min: f64,
    normal_max: f64,
    extreme_min: f64,
    extreme_max: f64,
) -> f64 {
    ReferenceRange::two_sided(normal_min, normal_max, extreme_min, extreme_max).deviation(value)
}

fn saturating_ramp(distance: f64, span: f64) -> f64 {
    (distance / span).powi(2).min(1.0)
}
