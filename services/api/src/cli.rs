use crate::batch::{run_hospital_batch, run_patient_batch, HospitalBatchArgs, PatientBatchArgs};
use crate::server;
use carepulse::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "CarePulse",
    about = "Serve or batch-run the deterministic patient risk and hospital stress engine",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score every patient in a CSV export; prints JSON or writes CSV with --out
    Patients(PatientBatchArgs),
    /// Evaluate every hospital snapshot in a CSV export; prints JSON or writes CSV with --out
    Hospitals(HospitalBatchArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Patients(args) => run_patient_batch(args),
        Command::Hospitals(args) => run_hospital_batch(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["carepulse"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_patient_batch_flags() {
        let cli = Cli::try_parse_from([
            "carepulse",
            "patients",
            "--csv",
            "patients.csv",
            "--oxygen-crisis",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Patients(args)) => {
                assert!(args.oxygen_crisis);
                assert_eq!(args.csv.to_str(), Some("patients.csv"));
                assert!(args.out.is_none());
            }
            other => panic!("expected patients command, got {other:?}"),
        }
    }

    #[test]
    fn parses_hospital_critical_patient_count() {
        let cli = Cli::try_parse_from([
            "carepulse",
            "hospitals",
            "--csv",
            "hospitals.csv",
            "--critical-patients",
            "12",
            "--out",
            "scored.csv",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Hospitals(args)) => {
                assert_eq!(args.critical_patients, 12);
                assert_eq!(
                    args.out.as_deref().and_then(|path| path.to_str()),
                    Some("scored.csv")
                );
            }
            other => panic!("expected hospitals command, got {other:?}"),
        }
    }
}
