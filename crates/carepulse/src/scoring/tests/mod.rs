mod common;
mod patient;
