//! Deterministic scoring engine: patient risk and hospital stress.
//!
//! Every function here is pure. No I/O, no shared state, no logging.

pub mod deviation;
pub mod hospital;
pub mod patient;
pub mod reference;

#[cfg(test)]
mod tests;

pub use deviation::{bounded_deviation, DeviationShape, ReferenceRange};
pub use hospital::{
    evaluate_hospital, HospitalRecord, HospitalStressResult, StressClassification, StressRatios,
};
pub use patient::{
    evaluate_patient, evaluate_patients, ComponentIndices, DietRecommendation, Gender,
    PatientRecord, PatientRiskResult, SeverityClass,
};
pub use reference::{validate_reference_tables, ReferenceTableError};

/// Rounds to `places` decimals; exact ties go to the even digit (0.0625 -> 0.062).
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round_ties_even() / factor
}
