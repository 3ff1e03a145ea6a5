use crate::scoring::{Gender, HospitalRecord, PatientRecord};
use serde::Deserialize;
use std::io::Read;

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.trim(csv::Trim::All);
    builder
}

pub(crate) fn parse_patient_rows<R: Read>(reader: R) -> Result<Vec<PatientRecord>, csv::Error> {
    let mut csv_reader = reader_builder().from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<PatientRow>() {
        records.push(row?.into_record());
    }

    Ok(records)
}

pub(crate) fn parse_hospital_rows<R: Read>(reader: R) -> Result<Vec<HospitalRecord>, csv::Error> {
    let mut csv_reader = reader_builder().from_reader(reader);
    csv_reader.deserialize::<HospitalRecord>().collect()
}

/// Spreadsheet exports leave optional cells blank; blanks fall back to record defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PatientRow {
    patient_id: String,
    age: Option<u32>,
    gender: Option<String>,
    heart_rate_bpm: Option<f64>,
    #[serde(rename = "systolic_bp_mmHg")]
    systolic_bp_mmhg: Option<f64>,
    #[serde(rename = "diastolic_bp_mmHg")]
    diastolic_bp_mmhg: Option<f64>,
    oxygen_saturation_percent: Option<f64>,
    body_temperature_celsius: Option<f64>,
    respiratory_rate_bpm: Option<f64>,
    blood_sugar_mg_dl: Option<f64>,
    bmi: Option<f64>,
    hemoglobin_g_dl: Option<f64>,
    hydration_level_percent: Option<f64>,
    chronic_disease_flag: Option<u8>,
    emergency_case_flag: Option<u8>,
    icu_required_flag: Option<u8>,
    admission_type: Option<String>,
    diagnosis_category: Option<String>,
}

impl PatientRow {
    fn into_record(self) -> PatientRecord {
        let defaults = PatientRecord::default();
        PatientRecord {
            patient_id: self.patient_id,
            age: self.age.unwrap_or(defaults.age),
            gender: self
                .gender
                .as_deref()
                .map(Gender::parse)
                .unwrap_or(defaults.gender),
            heart_rate_bpm: self.heart_rate_bpm.unwrap_or(defaults.heart_rate_bpm),
            systolic_bp_mmhg: self.systolic_bp_mmhg.unwrap_or(defaults.systolic_bp_mmhg),
            diastolic_bp_mmhg: self.diastolic_bp_mmhg.unwrap_or(defaults.diastolic_bp_mmhg),
            oxygen_saturation_percent: self
                .oxygen_saturation_percent
                .unwrap_or(defaults.oxygen_saturation_percent),
            body_temperature_celsius: self
                .body_temperature_celsius
                .unwrap_or(defaults.body_temperature_celsius),
            respiratory_rate_bpm: self
                .respiratory_rate_bpm
                .unwrap_or(defaults.respiratory_rate_bpm),
            blood_sugar_mg_dl: self.blood_sugar_mg_dl.unwrap_or(defaults.blood_sugar_mg_dl),
            bmi: self.bmi.unwrap_or(defaults.bmi),
            hemoglobin_g_dl: self.hemoglobin_g_dl.unwrap_or(defaults.hemoglobin_g_dl),
            hydration_level_percent: self
                .hydration_level_percent
                .unwrap_or(defaults.hydration_level_percent),
            chronic_disease_flag: is_set(self.chronic_disease_flag),
            emergency_case_flag: is_set(self.emergency_case_flag),
            icu_required_flag: is_set(self.icu_required_flag),
            admission_type: non_blank(self.admission_type).unwrap_or(defaults.admission_type),
            diagnosis_category: non_blank(self.diagnosis_category)
                .unwrap_or(defaults.diagnosis_category),
        }
    }
}

/// Only an exact 1 sets a flag.
fn is_set(flag: Option<u8>) -> bool {
    flag == Some(1)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}
