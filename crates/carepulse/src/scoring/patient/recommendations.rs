use super::domain::{DietRecommendation, PatientRecord};
use crate::scoring::reference::{
    BASELINE_ROOM_TEMPERATURE, DIET_BMI_TRIGGER, DIET_GLUCOSE_TRIGGER, DIET_MAP_TRIGGER,
    FEVER_COOLING_DELTA, FEVER_COOLING_TRIGGER,
};

pub fn target_room_temperature(record: &PatientRecord) -> f64 {
    if record.body_temperature_celsius > FEVER_COOLING_TRIGGER {
        BASELINE_ROOM_TEMPERATURE - FEVER_COOLING_DELTA
    } else {
        BASELINE_ROOM_TEMPERATURE
    }
}

/// First matching rule wins: glucose, then blood pressure, then BMI.
pub fn diet_recommendation(record: &PatientRecord) -> DietRecommendation {
    if record.blood_sugar_mg_dl > DIET_GLUCOSE_TRIGGER {
        DietRecommendation::DiabeticStrictControl
    } else if record.mean_arterial_pressure() > DIET_MAP_TRIGGER {
        DietRecommendation::LowSodium
    } else if record.bmi > DIET_BMI_TRIGGER {
        DietRecommendation::CaloricRestriction
    } else {
        DietRecommendation::Standard
    }
}
