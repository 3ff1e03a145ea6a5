use crate::scoring::{Gender, HospitalRecord, PatientRecord};

/// Every vital sits at the midpoint of its normal band.
pub(super) fn midpoint_patient(id: &str) -> PatientRecord {
    PatientRecord {
        patient_id: id.to_string(),
        age: 30,
        gender: Gender::Male,
        heart_rate_bpm: 80.0,
        // MAP = (110.5 + 2 * 67) / 3 = 81.5
        systolic_bp_mmhg: 110.5,
        diastolic_bp_mmhg: 67.0,
        oxygen_saturation_percent: 98.0,
        body_temperature_celsius: 36.9,
        respiratory_rate_bpm: 15.0,
        blood_sugar_mg_dl: 140.0,
        bmi: 21.7,
        hemoglobin_g_dl: 14.9,
        hydration_level_percent: 98.0,
        chronic_disease_flag: false,
        emergency_case_flag: false,
        icu_required_flag: false,
        admission_type: "General".to_string(),
        diagnosis_category: "Checkup".to_string(),
    }
}

pub(super) fn extreme_patient(id: &str) -> PatientRecord {
    PatientRecord {
        patient_id: id.to_string(),
        age: 90,
        heart_rate_bpm: 190.0,
        systolic_bp_mmhg: 40.0,
        diastolic_bp_mmhg: 30.0,
        oxygen_saturation_percent: 80.0,
        body_temperature_celsius: 42.0,
        blood_sugar_mg_dl: 450.0,
        hemoglobin_g_dl: 5.0,
        hydration_level_percent: 40.0,
        chronic_disease_flag: true,
        emergency_case_flag: true,
        icu_required_flag: true,
        ..PatientRecord::default()
    }
}

/// Moderately unwell respiratory admission that is ICU-bound.
pub(super) fn respiratory_icu_patient(id: &str) -> PatientRecord {
    PatientRecord {
        patient_id: id.to_string(),
        age: 60,
        gender: Gender::Male,
        heart_rate_bpm: 130.0,
        systolic_bp_mmhg: 150.0,
        diastolic_bp_mmhg: 95.0,
        oxygen_saturation_percent: 88.0,
        body_temperature_celsius: 38.0,
        respiratory_rate_bpm: 24.0,
        blood_sugar_mg_dl: 140.0,
        bmi: 28.0,
        hemoglobin_g_dl: 12.0,
        hydration_level_percent: 90.0,
        chronic_disease_flag: true,
        emergency_case_flag: true,
        icu_required_flag: true,
        admission_type: "ER".to_string(),
        diagnosis_category: "Respiratory".to_string(),
    }
}

pub(super) fn calm_hospital(id: u64) -> HospitalRecord {
    HospitalRecord {
        hospital_id: id,
        total_beds: 200,
        occupied_beds: 100,
        icu_beds_total: 20,
        icu_beds_occupied: 5,
        er_capacity: 50,
        er_occupied: 10,
        ongoing_operations_count: 2,
        available_doctors: 20,
        available_nurses: 60,
        ventilators_available: 20,
        ambulance_available_count: 6,
        room_temperature_celsius: 22.0,
        oxygen_supply_level_percent: 90.0,
        total_patients_current: 115,
    }
}

pub(super) fn saturated_hospital(id: u64) -> HospitalRecord {
    HospitalRecord {
        hospital_id: id,
        total_beds: 100,
        occupied_beds: 100,
        icu_beds_total: 20,
        icu_beds_occupied: 20,
        er_capacity: 50,
        er_occupied: 60,
        ongoing_operations_count: 5,
        available_doctors: 10,
        available_nurses: 30,
        ventilators_available: 10,
        ambulance_available_count: 1,
        room_temperature_celsius: 24.0,
        oxygen_supply_level_percent: 10.0,
        total_patients_current: 180,
    }
}
