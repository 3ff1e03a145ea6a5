use serde::{Deserialize, Serialize};

/// Point-in-time resource snapshot for one facility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HospitalRecord {
    pub hospital_id: u64,
    pub total_beds: u32,
    pub occupied_beds: u32,
    pub icu_beds_total: u32,
    pub icu_beds_occupied: u32,
    pub er_capacity: u32,
    pub er_occupied: u32,
    pub ongoing_operations_count: u32,
    pub available_doctors: u32,
    pub available_nurses: u32,
    pub ventilators_available: u32,
    pub ambulance_available_count: u32,
    pub room_temperature_celsius: f64,
    pub oxygen_supply_level_percent: f64,
    pub total_patients_current: u32,
}

impl HospitalRecord {
    /// Free ICU beds; negative when the unit is over capacity.
    pub fn icu_free_capacity(&self) -> i64 {
        i64::from(self.icu_beds_total) - i64::from(self.icu_beds_occupied)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StressClassification {
    #[serde(rename = "Normal Operations")]
    NormalOperations,
    #[serde(rename = "Elevated Stress")]
    ElevatedStress,
    #[serde(rename = "Critical Capacity")]
    CriticalCapacity,
    #[serde(rename = "System Overload")]
    SystemOverload,
}

impl StressClassification {
    pub fn label(self) -> &'static str {
        match self {
            StressClassification::NormalOperations => "Normal Operations",
            StressClassification::ElevatedStress => "Elevated Stress",
            StressClassification::CriticalCapacity => "Critical Capacity",
            StressClassification::SystemOverload => "System Overload",
        }
    }
}

/// Stress assessment for one facility. Ratios and index are rounded to three decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HospitalStressResult {
    pub hospital_id: u64,
    pub bed_availability_ratio: f64,
    pub icu_availability_ratio: f64,
    pub er_load_ratio: f64,
    pub operation_load_ratio: f64,
    pub ventilator_pressure_ratio: f64,
    pub hospital_stress_index: f64,
    pub global_system_classification: StressClassification,
    pub bed_allocation_action: String,
    pub er_routing_action: String,
}
