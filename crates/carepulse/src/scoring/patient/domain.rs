use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Sex used to select the hemoglobin reference range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// Case-insensitive exact match; anything else, padded text included, selects the female range.
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("male") {
            Self::Male
        } else {
            Self::Female
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl Serialize for Gender {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Gender {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// Snapshot of one patient's vitals and admission flags.
///
/// Missing fields fall back to the defaults the intake forms use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientRecord {
    pub patient_id: String,
    pub age: u32,
    pub gender: Gender,
    pub heart_rate_bpm: f64,
    #[serde(rename = "systolic_bp_mmHg")]
    pub systolic_bp_mmhg: f64,
    #[serde(rename = "diastolic_bp_mmHg")]
    pub diastolic_bp_mmhg: f64,
    pub oxygen_saturation_percent: f64,
    pub body_temperature_celsius: f64,
    pub respiratory_rate_bpm: f64,
    pub blood_sugar_mg_dl: f64,
    pub bmi: f64,
    pub hemoglobin_g_dl: f64,
    pub hydration_level_percent: f64,
    #[serde(deserialize_with = "flag")]
    pub chronic_disease_flag: bool,
    #[serde(deserialize_with = "flag")]
    pub emergency_case_flag: bool,
    #[serde(deserialize_with = "flag")]
    pub icu_required_flag: bool,
    pub admission_type: String,
    pub diagnosis_category: String,
}

impl Default for PatientRecord {
    fn default() -> Self {
        Self {
            patient_id: String::new(),
            age: 50,
            gender: Gender::Male,
            heart_rate_bpm: 80.0,
            systolic_bp_mmhg: 120.0,
            diastolic_bp_mmhg: 80.0,
            oxygen_saturation_percent: 98.0,
            body_temperature_celsius: 37.0,
            respiratory_rate_bpm: 16.0,
            blood_sugar_mg_dl: 120.0,
            bmi: 22.0,
            hemoglobin_g_dl: 14.0,
            hydration_level_percent: 98.0,
            chronic_disease_flag: false,
            emergency_case_flag: false,
            icu_required_flag: false,
            admission_type: "Unknown".to_string(),
            diagnosis_category: "Unknown".to_string(),
        }
    }
}

impl PatientRecord {
    /// `(systolic + 2 * diastolic) / 3`
    pub fn mean_arterial_pressure(&self) -> f64 {
        (self.systolic_bp_mmhg + 2.0 * self.diastolic_bp_mmhg) / 3.0
    }
}

/// Admission flags arrive as JSON booleans from the API and as 0/1 from spreadsheet exports.
/// Only `true` or exactly 1 sets a flag; other integers read as unset.
pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawFlag {
        Bool(bool),
        Int(i64),
        Text(String),
    }

    match RawFlag::deserialize(deserializer)? {
        RawFlag::Bool(value) => Ok(value),
        RawFlag::Int(value) => Ok(value == 1),
        RawFlag::Text(value) => {
            let value = value.trim().to_ascii_lowercase();
            if let Ok(number) = value.parse::<i64>() {
                return Ok(number == 1);
            }
            match value.as_str() {
                "" | "false" | "no" => Ok(false),
                "true" | "yes" => Ok(true),
                other => Err(serde::de::Error::custom(format!(
                    "expected 0/1 or true/false flag, got '{other}'"
                ))),
            }
        }
    }
}

/// Severity band derived from the final risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SeverityClass {
    Normal,
    Watch,
    Severe,
    Critical,
}

impl SeverityClass {
    pub fn label(self) -> &'static str {
        match self {
            SeverityClass::Normal => "Normal",
            SeverityClass::Watch => "Watch",
            SeverityClass::Severe => "Severe",
            SeverityClass::Critical => "Critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DietRecommendation {
    #[serde(rename = "Diabetic strict control, low carb")]
    DiabeticStrictControl,
    #[serde(rename = "Low sodium (DASH diet)")]
    LowSodium,
    #[serde(rename = "Caloric restriction")]
    CaloricRestriction,
    #[serde(rename = "Standard nutritional diet")]
    Standard,
}

impl DietRecommendation {
    pub fn label(self) -> &'static str {
        match self {
            DietRecommendation::DiabeticStrictControl => "Diabetic strict control, low carb",
            DietRecommendation::LowSodium => "Low sodium (DASH diet)",
            DietRecommendation::CaloricRestriction => "Caloric restriction",
            DietRecommendation::Standard => "Standard nutritional diet",
        }
    }
}

/// Scored outcome for one patient. Scores are rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRiskResult {
    pub patient_id: String,
    pub base_score: f64,
    pub final_risk_score: f64,
    pub severity_class: SeverityClass,
    pub diet_recommendation: DietRecommendation,
    pub target_room_temperature: f64,
}
