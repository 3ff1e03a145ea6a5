//! Deterministic patient risk and hospital stress scoring, plus the intake, import, and HTTP
//! plumbing that feeds it.

pub mod config;
pub mod error;
pub mod export;
pub mod import;
pub mod intake;
pub mod router;
pub mod scoring;
pub mod telemetry;

pub use router::engine_router;
