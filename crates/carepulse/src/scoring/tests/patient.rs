use super::common::*;
use crate::scoring::{
    evaluate_patient, evaluate_patients, ComponentIndices, DietRecommendation, Gender,
    PatientRecord, SeverityClass,
};

#[test]
fn midpoint_vitals_score_zero() {
    let record = midpoint_patient("P-MID");

    let indices = ComponentIndices::from_record(&record);
    assert!(indices.as_array().iter().all(|index| *index == 0.0));

    let result = evaluate_patient(&record, false);
    assert_eq!(result.patient_id, "P-MID");
    assert_eq!(result.base_score, 0.0);
    assert_eq!(result.final_risk_score, 0.0);
    assert_eq!(result.severity_class, SeverityClass::Normal);
    assert_eq!(result.diet_recommendation, DietRecommendation::Standard);
    assert_eq!(result.target_room_temperature, 22.0);
}

#[test]
fn extreme_patient_is_critical_and_bounded() {
    let result = evaluate_patient(&extreme_patient("P-EXT"), false);

    assert_eq!(result.severity_class, SeverityClass::Critical);
    assert!(result.final_risk_score <= 100.0);
    assert_eq!(result.final_risk_score, 100.0);
    assert_eq!(result.target_room_temperature, 20.0);
    assert_eq!(
        result.diet_recommendation,
        DietRecommendation::DiabeticStrictControl
    );
}

#[test]
fn base_score_is_the_weighted_index_sum() {
    let record = PatientRecord {
        chronic_disease_flag: false,
        emergency_case_flag: false,
        icu_required_flag: false,
        ..extreme_patient("P-BASE")
    };

    let result = evaluate_patient(&record, false);

    // Every index saturates except respiratory rate (0), BMI (0) and age (0.64).
    assert_eq!(result.base_score, 76.4);
    assert_eq!(result.final_risk_score, 76.4);
    assert_eq!(result.severity_class, SeverityClass::Critical);
}

#[test]
fn final_score_stays_within_bounds_for_extreme_grid() {
    let heart_rates = [0.0, 30.0, 80.0, 250.0];
    let saturations = [0.0, 85.0, 100.0];
    let temperatures = [25.0, 37.0, 45.0];
    let flags = [false, true];

    for &heart_rate_bpm in &heart_rates {
        for &oxygen_saturation_percent in &saturations {
            for &body_temperature_celsius in &temperatures {
                for &flag in &flags {
                    for &crisis in &flags {
                        let record = PatientRecord {
                            heart_rate_bpm,
                            oxygen_saturation_percent,
                            body_temperature_celsius,
                            age: 120,
                            blood_sugar_mg_dl: 900.0,
                            chronic_disease_flag: flag,
                            emergency_case_flag: flag,
                            icu_required_flag: !flag,
                            ..PatientRecord::default()
                        };
                        let result = evaluate_patient(&record, crisis);
                        assert!(
                            (0.0..=100.0).contains(&result.final_risk_score),
                            "score {} escaped bounds",
                            result.final_risk_score
                        );
                        assert!((0.0..=100.0).contains(&result.base_score));
                    }
                }
            }
        }
    }
}

#[test]
fn icu_flag_forces_critical_floor() {
    let record = PatientRecord {
        icu_required_flag: true,
        ..midpoint_patient("P-ICU")
    };

    let result = evaluate_patient(&record, false);

    assert_eq!(result.base_score, 0.0);
    assert_eq!(result.final_risk_score, 75.0);
    assert_eq!(result.severity_class, SeverityClass::Critical);
}

#[test]
fn oxygen_crisis_amplifies_icu_patients() {
    let record = respiratory_icu_patient("P-O2");

    let baseline = evaluate_patient(&record, false);
    let crisis = evaluate_patient(&record, true);

    assert_eq!(baseline.final_risk_score, 75.0);
    assert_eq!(crisis.final_risk_score, 93.75);
    assert_eq!(crisis.severity_class, SeverityClass::Critical);
    assert_eq!(crisis.base_score, baseline.base_score);
}

#[test]
fn oxygen_crisis_matches_multiplier_for_critical_patients() {
    let unflagged_critical = PatientRecord {
        chronic_disease_flag: false,
        emergency_case_flag: false,
        icu_required_flag: false,
        ..extreme_patient("P-CRIT")
    };

    for record in [
        unflagged_critical,
        extreme_patient("P-EXT"),
        respiratory_icu_patient("P-RESP"),
    ] {
        let baseline = evaluate_patient(&record, false);
        let crisis = evaluate_patient(&record, true);
        let expected = (baseline.final_risk_score * 1.25).min(100.0);
        assert!(
            (crisis.final_risk_score - expected).abs() <= 0.01,
            "{}: expected {expected}, got {}",
            record.patient_id,
            crisis.final_risk_score
        );
    }
}

#[test]
fn oxygen_crisis_leaves_non_critical_patients_alone() {
    let record = PatientRecord {
        heart_rate_bpm: 150.0,
        oxygen_saturation_percent: 88.0,
        emergency_case_flag: true,
        ..midpoint_patient("P-WATCH")
    };

    let baseline = evaluate_patient(&record, false);
    let crisis = evaluate_patient(&record, true);

    assert_ne!(baseline.severity_class, SeverityClass::Critical);
    assert_eq!(baseline, crisis);
}

#[test]
fn hemoglobin_range_depends_on_gender() {
    let male = PatientRecord {
        hemoglobin_g_dl: 12.0,
        ..midpoint_patient("P-M")
    };
    let female = PatientRecord {
        gender: Gender::Female,
        ..male.clone()
    };

    assert!(ComponentIndices::from_record(&male).hemoglobin > 0.0);
    assert_eq!(ComponentIndices::from_record(&female).hemoglobin, 0.0);
    assert!(evaluate_patient(&male, false).base_score > evaluate_patient(&female, false).base_score);
}

#[test]
fn gender_parsing_is_case_insensitive_exact_match() {
    assert_eq!(Gender::parse("MALE"), Gender::Male);
    assert_eq!(Gender::parse("male"), Gender::Male);
    assert_eq!(Gender::parse(" Male "), Gender::Female);
    assert_eq!(Gender::parse("Female"), Gender::Female);
}

#[test]
fn json_flags_are_set_only_by_true_or_one() {
    let record: PatientRecord = serde_json::from_value(serde_json::json!({
        "patient_id": "P-FLAGS",
        "chronic_disease_flag": 2,
        "emergency_case_flag": "1",
        "icu_required_flag": true
    }))
    .expect("record deserializes");

    assert!(!record.chronic_disease_flag);
    assert!(record.emergency_case_flag);
    assert!(record.icu_required_flag);

    let cleared: PatientRecord = serde_json::from_value(serde_json::json!({
        "icu_required_flag": -1
    }))
    .expect("record deserializes");
    assert!(!cleared.icu_required_flag);
}

#[test]
fn evaluation_is_deterministic() {
    let record = respiratory_icu_patient("P-DET");
    let first = evaluate_patient(&record, true);
    for _ in 0..10 {
        assert_eq!(evaluate_patient(&record, true), first);
    }
}

#[test]
fn bulk_evaluation_preserves_order_and_results() {
    let records: Vec<PatientRecord> = (0..25)
        .map(|index| midpoint_patient(&format!("P-{index:03}")))
        .collect();

    let results = evaluate_patients(&records, false);

    assert_eq!(results.len(), records.len());
    for (record, result) in records.iter().zip(&results) {
        assert_eq!(result.patient_id, record.patient_id);
        assert_eq!(result.final_risk_score, 0.0);
        assert_eq!(result.severity_class, SeverityClass::Normal);
    }
}

#[test]
fn bulk_evaluation_of_mixed_records_matches_single_calls() {
    let records = vec![
        extreme_patient("A"),
        midpoint_patient("B"),
        respiratory_icu_patient("C"),
    ];

    let bulk = evaluate_patients(&records, true);
    let single: Vec<_> = records
        .iter()
        .map(|record| evaluate_patient(record, true))
        .collect();

    assert_eq!(bulk, single);
}
