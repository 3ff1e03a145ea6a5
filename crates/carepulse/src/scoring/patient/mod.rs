mod domain;
mod modifiers;
mod recommendations;

pub use domain::{DietRecommendation, Gender, PatientRecord, PatientRiskResult, SeverityClass};
pub use modifiers::{amplify_for_oxygen_crisis, apply_modifiers, classify_severity, ScoreModifier};
pub use recommendations::{diet_recommendation, target_room_temperature};

use super::reference::{
    AGE, BLOOD_GLUCOSE, BMI, BODY_TEMPERATURE, HEART_RATE, HEMOGLOBIN_FEMALE, HEMOGLOBIN_MALE,
    HYDRATION, MEAN_ARTERIAL_PRESSURE, OXYGEN_SATURATION, PATIENT_WEIGHTS, RESPIRATORY_RATE,
};
use super::round_to;
use serde::Serialize;

/// The ten per-metric deviation indices, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComponentIndices {
    pub heart_rate: f64,
    pub mean_arterial_pressure: f64,
    pub oxygen_saturation: f64,
    pub body_temperature: f64,
    pub respiratory_rate: f64,
    pub blood_glucose: f64,
    pub age: f64,
    pub bmi: f64,
    pub hemoglobin: f64,
    pub hydration: f64,
}

impl ComponentIndices {
    pub fn from_record(record: &PatientRecord) -> Self {
        let hemoglobin_range = match record.gender {
            Gender::Male => HEMOGLOBIN_MALE,
            Gender::Female => HEMOGLOBIN_FEMALE,
        };

        Self {
            heart_rate: HEART_RATE.deviation(record.heart_rate_bpm),
            mean_arterial_pressure: MEAN_ARTERIAL_PRESSURE
                .deviation(record.mean_arterial_pressure()),
            oxygen_saturation: OXYGEN_SATURATION.deviation(record.oxygen_saturation_percent),
            body_temperature: BODY_TEMPERATURE.deviation(record.body_temperature_celsius),
            respiratory_rate: RESPIRATORY_RATE.deviation(record.respiratory_rate_bpm),
            blood_glucose: BLOOD_GLUCOSE.deviation(record.blood_sugar_mg_dl),
            age: AGE.deviation(f64::from(record.age)),
            bmi: BMI.deviation(record.bmi),
            hemoglobin: hemoglobin_range.deviation(record.hemoglobin_g_dl),
            hydration: HYDRATION.deviation(record.hydration_level_percent),
        }
    }

    /// Same order as [`PATIENT_WEIGHTS`].
    pub fn as_array(&self) -> [f64; 10] {
        [
            self.heart_rate,
            self.mean_arterial_pressure,
            self.oxygen_saturation,
            self.body_temperature,
            self.respiratory_rate,
            self.blood_glucose,
            self.age,
            self.bmi,
            self.hemoglobin,
            self.hydration,
        ]
    }

    /// Weighted sum scaled to `[0, 100]`, unrounded.
    pub fn base_score(&self) -> f64 {
        let weighted: f64 = PATIENT_WEIGHTS
            .iter()
            .zip(self.as_array())
            .map(|(weight, index)| weight * index)
            .sum();
        weighted * 100.0
    }
}

/// Scores one patient. Pure; identical inputs always produce identical results.
pub fn evaluate_patient(record: &PatientRecord, oxygen_crisis: bool) -> PatientRiskResult {
    let base_score = ComponentIndices::from_record(record).base_score();
    let adjusted = apply_modifiers(base_score, record);
    let severity = classify_severity(adjusted);
    let (final_score, severity) =
        amplify_for_oxygen_crisis(adjusted, severity, record, oxygen_crisis);

    PatientRiskResult {
        patient_id: record.patient_id.clone(),
        base_score: round_to(base_score, 2),
        final_risk_score: round_to(final_score, 2),
        severity_class: severity,
        diet_recommendation: diet_recommendation(record),
        target_room_temperature: target_room_temperature(record),
    }
}

/// Scores each record independently; output order mirrors input order.
pub fn evaluate_patients<'a, I>(records: I, oxygen_crisis: bool) -> Vec<PatientRiskResult>
where
    I: IntoIterator<Item = &'a PatientRecord>,
{
    records
        .into_iter()
        .map(|record| evaluate_patient(record, oxygen_crisis))
        .collect()
}
