use super::domain::HospitalRecord;
use super::StressRatios;
use crate::scoring::reference::{
    ACTION_ACCEPTING_TRIAGE, ACTION_DIVERT_AMBULANCES, ACTION_SEPARATOR,
    ACTION_STANDARD_ADMISSION, ACTION_STOP_ADMISSIONS, BED_FREE_STOP_BELOW, ER_LOAD_DIVERT_ABOVE,
    FRAGMENT_FACILITY_TRANSFER, FRAGMENT_OXYGEN_CRISIS, FRAGMENT_VENTILATOR_SHORTAGE,
    OXYGEN_CRISIS_BELOW_PERCENT,
};

fn oxygen_crisis(record: &HospitalRecord) -> bool {
    record.oxygen_supply_level_percent < OXYGEN_CRISIS_BELOW_PERCENT
}

/// `[OXYGEN CRISIS ALERT | ] <base> [ | facility transfer]`
pub fn bed_allocation_action(record: &HospitalRecord, ratios: &StressRatios) -> String {
    let base = if ratios.bed_free < BED_FREE_STOP_BELOW {
        ACTION_STOP_ADMISSIONS
    } else {
        ACTION_STANDARD_ADMISSION
    };

    let mut fragments = Vec::with_capacity(3);
    if oxygen_crisis(record) {
        fragments.push(FRAGMENT_OXYGEN_CRISIS);
    }
    fragments.push(base);
    if record.icu_free_capacity() <= 0 {
        fragments.push(FRAGMENT_FACILITY_TRANSFER);
    }
    fragments.join(ACTION_SEPARATOR)
}

/// `[VENTILATOR SHORTAGE | ] <base>`; the shortage fragment needs an oxygen crisis and fewer
/// ventilators than declared critical patients.
pub fn er_routing_action(
    record: &HospitalRecord,
    ratios: &StressRatios,
    critical_patient_count: u32,
) -> String {
    let base = if ratios.er_load > ER_LOAD_DIVERT_ABOVE {
        ACTION_DIVERT_AMBULANCES
    } else {
        ACTION_ACCEPTING_TRIAGE
    };

    if oxygen_crisis(record) && record.ventilators_available < critical_patient_count {
        [FRAGMENT_VENTILATOR_SHORTAGE, base].join(ACTION_SEPARATOR)
    } else {
        base.to_string()
    }
}
