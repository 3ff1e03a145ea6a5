//! Input guard run in front of the scoring engine.
//!
//! The engine scores any finite value, however implausible. This guard only rejects values
//! it cannot score at all.

use crate::scoring::{HospitalRecord, PatientRecord};

/// Validation errors raised before a record reaches the engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntakeViolation {
    #[error("field '{field}' must be a finite number")]
    NonFinite { field: &'static str },
    #[error("patient_id must not be empty")]
    MissingPatientId,
}

pub fn validate_patient(record: &PatientRecord) -> Result<(), IntakeViolation> {
    if record.patient_id.trim().is_empty() {
        return Err(IntakeViolation::MissingPatientId);
    }

    require_finite(&[
        ("heart_rate_bpm", record.heart_rate_bpm),
        ("systolic_bp_mmHg", record.systolic_bp_mmhg),
        ("diastolic_bp_mmHg", record.diastolic_bp_mmhg),
        ("oxygen_saturation_percent", record.oxygen_saturation_percent),
        ("body_temperature_celsius", record.body_temperature_celsius),
        ("respiratory_rate_bpm", record.respiratory_rate_bpm),
        ("blood_sugar_mg_dl", record.blood_sugar_mg_dl),
        ("bmi", record.bmi),
        ("hemoglobin_g_dl", record.hemoglobin_g_dl),
        ("hydration_level_percent", record.hydration_level_percent),
    ])
}

pub fn validate_hospital(record: &HospitalRecord) -> Result<(), IntakeViolation> {
    require_finite(&[
        ("room_temperature_celsius", record.room_temperature_celsius),
        (
            "oxygen_supply_level_percent",
            record.oxygen_supply_level_percent,
        ),
    ])
}

fn require_finite(fields: &[(&'static str, f64)]) -> Result<(), IntakeViolation> {
    match fields.iter().find(|(_, value)| !value.is_finite()) {
        Some((field, _)) => Err(IntakeViolation::NonFinite { field: *field }),
        None => Ok(()),
    }
}
