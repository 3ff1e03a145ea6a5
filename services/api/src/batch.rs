use carepulse::error::AppError;
use carepulse::export::CsvExporter;
use carepulse::import::{HospitalCsvImporter, PatientCsvImporter};
use carepulse::scoring::{
    evaluate_hospital, evaluate_patients, validate_reference_tables, HospitalStressResult,
    PatientRiskResult,
};
use clap::Args;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct PatientBatchArgs {
    /// Patient CSV export with one record per row
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Apply the oxygen-scarcity amplifier to critical and ICU-bound patients
    #[arg(long)]
    pub(crate) oxygen_crisis: bool,
    /// Write results to this CSV file instead of printing JSON
    #[arg(long)]
    pub(crate) out: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct HospitalBatchArgs {
    /// Hospital resource CSV export with one snapshot per row
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Declared count of critical patients competing for ventilators
    #[arg(long, default_value_t = 0)]
    pub(crate) critical_patients: u32,
    /// Write results to this CSV file instead of printing JSON
    #[arg(long)]
    pub(crate) out: Option<PathBuf>,
}

pub(crate) fn run_patient_batch(args: PatientBatchArgs) -> Result<(), AppError> {
    let results = score_patient_file(&args.csv, args.oxygen_crisis)?;
    emit(&results, args.out.as_deref())
}

pub(crate) fn run_hospital_batch(args: HospitalBatchArgs) -> Result<(), AppError> {
    let results = score_hospital_file(&args.csv, args.critical_patients)?;
    emit(&results, args.out.as_deref())
}

/// CSV to `out` when given, pretty JSON on stdout otherwise.
fn emit<T: Serialize>(results: &[T], out: Option<&Path>) -> Result<(), AppError> {
    match out {
        Some(path) => CsvExporter::to_path(path, results)?,
        None => println!("{}", serde_json::to_string_pretty(results)?),
    }
    Ok(())
}

pub(crate) fn score_patient_file(
    path: &Path,
    oxygen_crisis: bool,
) -> Result<Vec<PatientRiskResult>, AppError> {
    validate_reference_tables()?;
    let records = PatientCsvImporter::from_path(path)?;
    Ok(evaluate_patients(&records, oxygen_crisis))
}

pub(crate) fn score_hospital_file(
    path: &Path,
    critical_patients: u32,
) -> Result<Vec<HospitalStressResult>, AppError> {
    validate_reference_tables()?;
    let records = HospitalCsvImporter::from_path(path)?;
    Ok(records
        .iter()
        .map(|record| evaluate_hospital(record, critical_patients))
        .collect())
}
