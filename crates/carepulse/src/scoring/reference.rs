//! Fixed clinical reference ranges, weights, and thresholds used by the scoring engine.
//!
//! Everything tunable lives here so composition code never carries bare literals.

use super::deviation::ReferenceRange;

pub const HEART_RATE: ReferenceRange = ReferenceRange::two_sided(60.0, 100.0, 30.0, 180.0);
pub const MEAN_ARTERIAL_PRESSURE: ReferenceRange =
    ReferenceRange::two_sided(70.0, 93.0, 50.0, 130.0);
pub const OXYGEN_SATURATION: ReferenceRange = ReferenceRange::low_only(95.0, 85.0);
pub const BODY_TEMPERATURE: ReferenceRange = ReferenceRange::two_sided(36.5, 37.3, 32.0, 41.0);
pub const RESPIRATORY_RATE: ReferenceRange = ReferenceRange::two_sided(12.0, 18.0, 6.0, 40.0);
pub const BLOOD_GLUCOSE: ReferenceRange = ReferenceRange::two_sided(100.0, 180.0, 50.0, 400.0);
pub const AGE: ReferenceRange = ReferenceRange::high_only(50.0, 100.0);
pub const BMI: ReferenceRange = ReferenceRange::two_sided(18.5, 24.9, 12.0, 45.0);
pub const HEMOGLOBIN_MALE: ReferenceRange = ReferenceRange::two_sided(13.2, 16.6, 7.0, 20.0);
pub const HEMOGLOBIN_FEMALE: ReferenceRange = ReferenceRange::two_sided(11.6, 15.0, 7.0, 20.0);
pub const HYDRATION: ReferenceRange = ReferenceRange::low_only(95.0, 50.0);

/// Component weights, ordered: heart rate, MAP, SpO2, temperature, respiratory rate, glucose,
/// age, BMI, hemoglobin, hydration.
pub const PATIENT_WEIGHTS: [f64; 10] = [0.10, 0.10, 0.15, 0.10, 0.15, 0.05, 0.10, 0.05, 0.10, 0.10];

pub const SCORE_CEILING: f64 = 100.0;
pub const CHRONIC_MULTIPLIER: f64 = 1.15;
pub const EMERGENCY_BONUS: f64 = 15.0;
pub const ICU_FLOOR: f64 = 75.0;
pub const OXYGEN_CRISIS_MULTIPLIER: f64 = 1.25;

pub const SEVERITY_WATCH_FROM: f64 = 20.0;
pub const SEVERITY_SEVERE_FROM: f64 = 50.0;
pub const SEVERITY_CRITICAL_FROM: f64 = 75.0;

pub const BASELINE_ROOM_TEMPERATURE: f64 = 22.0;
pub const FEVER_COOLING_TRIGGER: f64 = 39.0;
pub const FEVER_COOLING_DELTA: f64 = 2.0;

pub const DIET_GLUCOSE_TRIGGER: f64 = 200.0;
pub const DIET_MAP_TRIGGER: f64 = 110.0;
pub const DIET_BMI_TRIGGER: f64 = 30.0;

/// Stress index weights: ICU occupancy, ventilator pressure, ER load, bed occupancy, operation
/// load.
pub const HSI_WEIGHTS: [f64; 5] = [0.35, 0.25, 0.20, 0.10, 0.10];

pub const HSI_ELEVATED_FROM: f64 = 0.4;
pub const HSI_CRITICAL_FROM: f64 = 0.7;
pub const HSI_OVERLOAD_FROM: f64 = 0.9;

pub const BED_FREE_STOP_BELOW: f64 = 0.10;
pub const ER_LOAD_DIVERT_ABOVE: f64 = 0.90;
pub const OXYGEN_CRISIS_BELOW_PERCENT: f64 = 40.0;

pub const ACTION_STANDARD_ADMISSION: &str = "Standard Admission";
pub const ACTION_STOP_ADMISSIONS: &str = "Stop New Admissions";
pub const ACTION_ACCEPTING_TRIAGE: &str = "Accepting Triage";
pub const ACTION_DIVERT_AMBULANCES: &str = "Divert Ambulances";
pub const FRAGMENT_OXYGEN_CRISIS: &str = "OXYGEN CRISIS ALERT";
pub const FRAGMENT_VENTILATOR_SHORTAGE: &str = "VENTILATOR SHORTAGE - Triage Sort Top-K Only";
pub const FRAGMENT_FACILITY_TRANSFER: &str = "Trigger high-priority facility transfer alert";
pub const ACTION_SEPARATOR: &str = " | ";

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReferenceTableError {
    #[error("reference range '{name}' is degenerate on a penalized side")]
    DegenerateRange { name: &'static str },
    #[error("weight table '{name}' sums to {sum}, expected 1.0")]
    WeightSum { name: &'static str, sum: f64 },
}

pub(crate) const PATIENT_RANGES: [(&str, ReferenceRange); 11] = [
    ("heart_rate", HEART_RATE),
    ("mean_arterial_pressure", MEAN_ARTERIAL_PRESSURE),
    ("oxygen_saturation", OXYGEN_SATURATION),
    ("body_temperature", BODY_TEMPERATURE),
    ("respiratory_rate", RESPIRATORY_RATE),
    ("blood_glucose", BLOOD_GLUCOSE),
    ("age", AGE),
    ("bmi", BMI),
    ("hemoglobin_male", HEMOGLOBIN_MALE),
    ("hemoglobin_female", HEMOGLOBIN_FEMALE),
    ("hydration", HYDRATION),
];

/// Startup check that the constant tables satisfy the deviation preconditions.
pub fn validate_reference_tables() -> Result<(), ReferenceTableError> {
    check_ranges(&PATIENT_RANGES)?;
    check_weights("patient", &PATIENT_WEIGHTS)?;
    check_weights("hospital_stress", &HSI_WEIGHTS)?;
    Ok(())
}

pub(crate) fn check_ranges(
    ranges: &[(&'static str, ReferenceRange)],
) -> Result<(), ReferenceTableError> {
    match ranges.iter().find(|(_, range)| !range.is_well_formed()) {
        Some((name, _)) => Err(ReferenceTableError::DegenerateRange { name: *name }),
        None => Ok(()),
    }
}

pub(crate) fn check_weights(name: &'static str, weights: &[f64]) -> Result<(), ReferenceTableError> {
    let sum: f64 = weights.iter().sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(ReferenceTableError::WeightSum { name, sum });
    }
    Ok(())
}
