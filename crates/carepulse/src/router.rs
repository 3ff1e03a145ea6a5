use axum::{
    extract::{Query, State},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use tracing::debug;

use crate::config::EngineConfig;
use crate::error::AppError;
use crate::intake::{validate_hospital, validate_patient};
use crate::scoring::{
    evaluate_hospital, evaluate_patient, evaluate_patients, HospitalRecord, HospitalStressResult,
    PatientRecord, PatientRiskResult,
};

#[derive(Debug, Default, Deserialize)]
pub struct PatientQuery {
    #[serde(default)]
    pub is_oxygen_crisis: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct HospitalQuery {
    #[serde(default)]
    pub critical_patients_count: u32,
}

/// HTTP endpoints over the scoring engine.
pub fn engine_router(config: EngineConfig) -> Router {
    Router::new()
        .route("/api/v1/patient/analyze", post(analyze_patient))
        .route("/api/v1/patient/analyze_bulk", post(analyze_patient_bulk))
        .route("/api/v1/hospital/stress", post(hospital_stress))
        .with_state(config)
}

pub(crate) async fn analyze_patient(
    Query(query): Query<PatientQuery>,
    Json(record): Json<PatientRecord>,
) -> Result<Json<PatientRiskResult>, AppError> {
    validate_patient(&record)?;
    let result = evaluate_patient(&record, query.is_oxygen_crisis);
    debug!(
        patient_id = %result.patient_id,
        score = result.final_risk_score,
        severity = result.severity_class.label(),
        oxygen_crisis = query.is_oxygen_crisis,
        "patient scored"
    );
    Ok(Json(result))
}

pub(crate) async fn analyze_patient_bulk(
    State(config): State<EngineConfig>,
    Query(query): Query<PatientQuery>,
    Json(records): Json<Vec<PatientRecord>>,
) -> Result<Json<Vec<PatientRiskResult>>, AppError> {
    if records.len() > config.max_bulk_records {
        return Err(AppError::BatchTooLarge {
            received: records.len(),
            limit: config.max_bulk_records,
        });
    }
    for record in &records {
        validate_patient(record)?;
    }

    let results = evaluate_patients(&records, query.is_oxygen_crisis);
    debug!(
        count = results.len(),
        oxygen_crisis = query.is_oxygen_crisis,
        "patient batch scored"
    );
    Ok(Json(results))
}

pub(crate) async fn hospital_stress(
    Query(query): Query<HospitalQuery>,
    Json(record): Json<HospitalRecord>,
) -> Result<Json<HospitalStressResult>, AppError> {
    validate_hospital(&record)?;
    let result = evaluate_hospital(&record, query.critical_patients_count);
    debug!(
        hospital_id = result.hospital_id,
        stress_index = result.hospital_stress_index,
        classification = result.global_system_classification.label(),
        "hospital stress evaluated"
    );
    Ok(Json(result))
}
