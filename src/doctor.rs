//! Doctor command: reports what discovery finds on this host.

use std::path::Path;

use crate::java_home;
use crate::keytool::Keytool;
use crate::runner::Runner;
use crate::store;

/// Result of a single check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub ok: bool,
    pub message: String,
}

/// Run the discovery probes read-only: Java root, trust store, keytool.
pub fn run_checks(explicit_java_home: Option<&Path>, runner: &dyn Runner) -> Vec<CheckResult> {
    let mut results = Vec::new();

    let Some(java_home) = java_home::resolve(explicit_java_home, runner) else {
        results.push(CheckResult {
            ok: false,
            message: "Java not found. Install a JDK/JRE or pass --java-home.".to_string(),
        });
        return results;
    };
    results.push(CheckResult {
        ok: true,
        message: format!("Java installation: {}", java_home.display()),
    });

    match store::find_trust_store(&java_home) {
        Some(ts) => results.push(CheckResult {
            ok: true,
            message: format!("Trust store: {}", ts.display()),
        }),
        None => results.push(CheckResult {
            ok: false,
            message: "No cacerts trust store under the Java installation.".to_string(),
        }),
    }

    match Keytool::locate(&java_home, runner) {
        Some(kt) => results.push(CheckResult {
            ok: true,
            message: format!("keytool: {}", kt.path().display()),
        }),
        None => results.push(CheckResult {
            ok: false,
            message: "keytool binary not found or not runnable.".to_string(),
        }),
    }

    results
}
