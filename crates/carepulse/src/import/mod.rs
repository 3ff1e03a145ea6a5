//! Batch import of exported patient and hospital spreadsheets saved as CSV.

mod parser;

use crate::intake::{validate_hospital, validate_patient, IntakeViolation};
use crate::scoring::{HospitalRecord, PatientRecord};
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row} rejected: {source}")]
    Intake {
        row: usize,
        #[source]
        source: IntakeViolation,
    },
}

pub struct PatientCsvImporter;

impl PatientCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<PatientRecord>, ImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Parses and validates every row. Rows are numbered from 1, excluding the header.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<PatientRecord>, ImportError> {
        let records = parser::parse_patient_rows(reader)?;
        for (index, record) in records.iter().enumerate() {
            validate_patient(record).map_err(|source| ImportError::Intake {
                row: index + 1,
                source,
            })?;
        }
        Ok(records)
    }
}

pub struct HospitalCsvImporter;

impl HospitalCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<HospitalRecord>, ImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<HospitalRecord>, ImportError> {
        let records = parser::parse_hospital_rows(reader)?;
        for (index, record) in records.iter().enumerate() {
            validate_hospital(record).map_err(|source| ImportError::Intake {
                row: index + 1,
                source,
            })?;
        }
        Ok(records)
    }
}
