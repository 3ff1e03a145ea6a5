use super::domain::{PatientRecord, SeverityClass};
use crate::scoring::reference::{
    CHRONIC_MULTIPLIER, EMERGENCY_BONUS, ICU_FLOOR, OXYGEN_CRISIS_MULTIPLIER, SCORE_CEILING,
    SEVERITY_CRITICAL_FROM, SEVERITY_SEVERE_FROM, SEVERITY_WATCH_FROM,
};

/// One step of the post-composition adjustment chain. Each step consumes the running score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreModifier {
    Chronic,
    Emergency,
    Clamp,
    IcuFloor,
}

impl ScoreModifier {
    /// Order is significant: the ICU floor must see the clamped score.
    pub const PIPELINE: [ScoreModifier; 4] = [
        ScoreModifier::Chronic,
        ScoreModifier::Emergency,
        ScoreModifier::Clamp,
        ScoreModifier::IcuFloor,
    ];

    pub fn apply(self, score: f64, record: &PatientRecord) -> f64 {
        match self {
            ScoreModifier::Chronic if record.chronic_disease_flag => score * CHRONIC_MULTIPLIER,
            ScoreModifier::Emergency if record.emergency_case_flag => score + EMERGENCY_BONUS,
            ScoreModifier::Clamp => score.min(SCORE_CEILING),
            ScoreModifier::IcuFloor if record.icu_required_flag => score.max(ICU_FLOOR),
            _ => score,
        }
    }
}

pub fn apply_modifiers(base_score: f64, record: &PatientRecord) -> f64 {
    ScoreModifier::PIPELINE
        .iter()
        .fold(base_score, |score, modifier| modifier.apply(score, record))
}

pub fn classify_severity(score: f64) -> SeverityClass {
    if score < SEVERITY_WATCH_FROM {
        SeverityClass::Normal
    } else if score < SEVERITY_SEVERE_FROM {
        SeverityClass::Watch
    } else if score < SEVERITY_CRITICAL_FROM {
        SeverityClass::Severe
    } else {
        SeverityClass::Critical
    }
}

/// Oxygen-scarcity amplifier. Only Critical or ICU-bound patients are boosted, and the only
/// severity change it can cause is promotion to Critical.
pub fn amplify_for_oxygen_crisis(
    score: f64,
    severity: SeverityClass,
    record: &PatientRecord,
    oxygen_crisis: bool,
) -> (f64, SeverityClass) {
    let eligible = severity == SeverityClass::Critical || record.icu_required_flag;
    if !oxygen_crisis || !eligible {
        return (score, severity);
    }

    let amplified = (score * OXYGEN_CRISIS_MULTIPLIER).min(SCORE_CEILING);
    let severity = if amplified >= SEVERITY_CRITICAL_FROM {
        SeverityClass::Critical
    } else {
        severity
    };
    (amplified, severity)
}
