//! Keytrust - idempotent installer for CA certificates in Java trust stores.

pub mod cli;
pub mod config;
pub mod converge;
pub mod doctor;
pub mod java_home;
pub mod keytool;
pub mod outcome;
pub mod runner;
pub mod store;
