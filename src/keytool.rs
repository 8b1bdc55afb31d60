//! Locating and invoking the keytool binary.
//!
//! The argument vectors built here are the wire contract with keytool: exit
//! status plus captured stdout/stderr decide every probe, and nothing else
//! is inspected.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::config;
use crate::runner::{ExecOutput, Invocation, Runner};

/// A validated keytool binary bound to the Java installation it serves.
///
/// JAVA_HOME rides along on every invocation as an explicit environment
/// entry instead of mutating process state, so concurrent in-process runs
/// cannot leak into each other.
pub struct Keytool {
    path: PathBuf,
    java_home: PathBuf,
}

impl Keytool {
    /// Locate keytool: the system binary first, then
    /// `<java_home>/bin/keytool`. A candidate counts only if `-help` runs
    /// cleanly.
    pub fn locate(java_home: &Path, runner: &dyn Runner) -> Option<Keytool> {
        let candidates = [
            config::system_keytool(),
            java_home.join("bin").join("keytool"),
        ];
        for candidate in candidates {
            let kt = Keytool {
                path: candidate,
                java_home: java_home.to_path_buf(),
            };
            match runner.run(&kt.invocation().arg("-help")) {
                Ok(out) if out.success => {
                    log::debug!("keytool: {}", kt.path.display());
                    return Some(kt);
                }
                _ => {}
            }
        }
        None
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn invocation(&self) -> Invocation {
        Invocation::new(self.path.clone()).env("JAVA_HOME", &self.java_home)
    }

    /// `-list -alias`: succeeds iff the alias exists in the store.
    pub fn list_alias(
        &self,
        store: &Path,
        alias: &str,
        storepass: &str,
        runner: &dyn Runner,
    ) -> Result<ExecOutput> {
        runner.run(
            &self
                .invocation()
                .arg("-keystore")
                .arg(store)
                .arg("-list")
                .arg("-alias")
                .arg(alias)
                .arg("-storepass")
                .arg(storepass),
        )
    }

    /// `-list` without an alias filter: fails on a wrong password or an
    /// unreadable store.
    pub fn list_store(
        &self,
        store: &Path,
        storepass: &str,
        runner: &dyn Runner,
    ) -> Result<ExecOutput> {
        runner.run(
            &self
                .invocation()
                .arg("-keystore")
                .arg(store)
                .arg("-list")
                .arg("-storepass")
                .arg(storepass),
        )
    }

    /// `-printcert`: fails when the file does not decode as a certificate.
    pub fn print_cert(&self, cert_file: &Path, runner: &dyn Runner) -> Result<ExecOutput> {
        runner.run(&self.invocation().arg("-printcert").arg("-file").arg(cert_file))
    }

    /// `-importcert -trustcacerts -noprompt`: the only mutating call.
    pub fn import_cert(
        &self,
        store: &Path,
        cert_file: &Path,
        alias: &str,
        storepass: &str,
        runner: &dyn Runner,
    ) -> Result<ExecOutput> {
        runner.run(
            &self
                .invocation()
                .arg("-importcert")
                .arg("-trustcacerts")
                .arg("-file")
                .arg(cert_file)
                .arg("-keystore")
                .arg(store)
                .arg("-alias")
                .arg(alias)
                .arg("-storepass")
                .arg(storepass)
                .arg("-noprompt"),
        )
    }
}
