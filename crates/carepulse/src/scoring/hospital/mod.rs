mod domain;
mod routing;

pub use domain::{HospitalRecord, HospitalStressResult, StressClassification};
pub use routing::{bed_allocation_action, er_routing_action};

use super::reference::{HSI_CRITICAL_FROM, HSI_ELEVATED_FROM, HSI_OVERLOAD_FROM, HSI_WEIGHTS};
use super::round_to;
use serde::Serialize;

/// Resource-pressure ratios, unrounded. ER load and operation load are not capped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StressRatios {
    pub bed_free: f64,
    pub icu_free: f64,
    pub er_load: f64,
    pub operation_load: f64,
    pub ventilator_pressure: f64,
}

impl StressRatios {
    pub fn from_record(record: &HospitalRecord) -> Self {
        Self {
            bed_free: free_ratio(record.total_beds, record.occupied_beds),
            icu_free: free_ratio(record.icu_beds_total, record.icu_beds_occupied),
            er_load: guarded_ratio(record.er_occupied, record.er_capacity),
            operation_load: guarded_ratio(
                record.ongoing_operations_count,
                record.available_doctors,
            ),
            // ICU occupancy stands in for ventilator demand.
            ventilator_pressure: guarded_ratio(
                record.icu_beds_occupied,
                record.ventilators_available,
            ),
        }
    }

    /// Weighted composite. Not clamped: ER and operation load can push it past 1.0.
    pub fn stress_index(&self) -> f64 {
        let [icu, ventilator, er, beds, operations] = HSI_WEIGHTS;
        icu * (1.0 - self.icu_free)
            + ventilator * self.ventilator_pressure.min(1.0)
            + er * self.er_load
            + beds * (1.0 - self.bed_free)
            + operations * self.operation_load
    }
}

fn guarded_ratio(numerator: u32, denominator: u32) -> f64 {
    f64::from(numerator) / f64::from(denominator.max(1))
}

fn free_ratio(total: u32, occupied: u32) -> f64 {
    (f64::from(total) - f64::from(occupied)) / f64::from(total.max(1))
}

pub fn classify_stress(index: f64) -> StressClassification {
    if index < HSI_ELEVATED_FROM {
        StressClassification::NormalOperations
    } else if index < HSI_CRITICAL_FROM {
        StressClassification::ElevatedStress
    } else if index < HSI_OVERLOAD_FROM {
        StressClassification::CriticalCapacity
    } else {
        StressClassification::SystemOverload
    }
}

/// Computes the stress index, classification, and routing actions for one facility.
pub fn evaluate_hospital(record: &HospitalRecord, critical_patient_count: u32) -> HospitalStressResult {
    let ratios = StressRatios::from_record(record);
    let index = ratios.stress_index();

    HospitalStressResult {
        hospital_id: record.hospital_id,
        bed_availability_ratio: round_to(ratios.bed_free, 3),
        icu_availability_ratio: round_to(ratios.icu_free, 3),
        er_load_ratio: round_to(ratios.er_load, 3),
        operation_load_ratio: round_to(ratios.operation_load, 3),
        ventilator_pressure_ratio: round_to(ratios.ventilator_pressure, 3),
        hospital_stress_index: round_to(index, 3),
        global_system_classification: classify_stress(index),
        bed_allocation_action: bed_allocation_action(record, &ratios),
        er_routing_action: er_routing_action(record, &ratios, critical_patient_count),
    }
}
