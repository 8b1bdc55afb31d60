//! The convergence engine: ordered read-only probes that decide between
//! no-op, failure, and (dry-run or live) certificate install.

use std::path::PathBuf;

use crate::java_home;
use crate::keytool::Keytool;
use crate::outcome::{Changes, Outcome, Status};
use crate::runner::{ProcessRunner, Runner};
use crate::store;

/// Well-known default password of the JDK cacerts store.
pub const DEFAULT_STOREPASS: &str = "changeit";

/// Execution mode supplied by the caller: live runs mutate the trust store,
/// dry runs only report what would happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Live,
    DryRun,
}

impl Mode {
    fn failure(self) -> Status {
        match self {
            Mode::Live => Status::Failure,
            Mode::DryRun => Status::WouldFail,
        }
    }

    fn success(self) -> Status {
        match self {
            Mode::Live => Status::Success,
            Mode::DryRun => Status::WouldSucceed,
        }
    }
}

/// Caller-supplied inputs for one convergence run. Everything is resolved
/// fresh per run; nothing is cached across calls.
#[derive(Debug, Clone)]
pub struct TrustRequest {
    /// Identifier echoed back in the outcome; not interpreted.
    pub name: String,
    /// Path to the public certificate on the local filesystem.
    pub cert_file: PathBuf,
    /// Alias the certificate is stored under.
    pub alias: String,
    /// Trust store password.
    pub storepass: String,
    /// Explicit Java installation root; discovery runs when absent.
    pub java_home: Option<PathBuf>,
}

/// Ensure `alias` is present in the Java trust store, using real process
/// invocations.
pub fn ensure_trusted(req: &TrustRequest, mode: Mode) -> Outcome {
    ensure_trusted_with_runner(req, mode, &ProcessRunner)
}

/// Ensure `alias` is present in the Java trust store.
///
/// Always returns an Outcome; discovery and probe failures are encoded in
/// its status and comment, never raised. Only the final import in live mode
/// mutates anything.
pub fn ensure_trusted_with_runner(req: &TrustRequest, mode: Mode, runner: &dyn Runner) -> Outcome {
    // Java absent means there is nothing to converge.
    let Some(java_home) = java_home::resolve(req.java_home.as_deref(), runner) else {
        return Outcome::new(&req.name, Status::Neutral, "Java is not installed");
    };

    let Some(trust_store) = store::find_trust_store(&java_home) else {
        return Outcome::new(&req.name, mode.failure(), "Could not find Java trust store.");
    };

    let Some(keytool) = Keytool::locate(&java_home, runner) else {
        return Outcome::new(&req.name, mode.failure(), "Could not find keytool binary.");
    };

    // Alias already present: converged. A failed listing means the alias is
    // missing; the next probe surfaces anything worse.
    if let Ok(out) = keytool.list_alias(&trust_store, &req.alias, &req.storepass, runner) {
        if out.success {
            return Outcome::new(&req.name, Status::Neutral, "CA alias exists in trust store.");
        }
    }

    // Catch a wrong password or corrupt store before the apply step, so a
    // dry run reports it too.
    match keytool.list_store(&trust_store, &req.storepass, runner) {
        Ok(out) if out.success => {}
        Ok(out) => {
            return Outcome::new(
                &req.name,
                mode.failure(),
                format!("Keystore {} problem:\n{}", trust_store.display(), out.combined()),
            );
        }
        Err(e) => {
            return Outcome::new(
                &req.name,
                mode.failure(),
                format!("Keystore {} problem:\n{e}", trust_store.display()),
            );
        }
    }

    match keytool.print_cert(&req.cert_file, runner) {
        Ok(out) if out.success => {}
        Ok(out) => {
            return Outcome::new(
                &req.name,
                mode.failure(),
                format!(
                    "File {} is not a valid certificate:\n{}",
                    req.cert_file.display(),
                    out.combined()
                ),
            );
        }
        Err(e) => {
            return Outcome::new(
                &req.name,
                mode.failure(),
                format!(
                    "File {} is not a valid certificate:\n{e}",
                    req.cert_file.display()
                ),
            );
        }
    }

    match mode {
        Mode::DryRun => Outcome::new(
            &req.name,
            mode.success(),
            format!("Certificate \"{}\" will be added as a trusted root.", req.alias),
        )
        .with_changes(Changes::added(&req.alias)),
        Mode::Live => {
            match keytool.import_cert(
                &trust_store,
                &req.cert_file,
                &req.alias,
                &req.storepass,
                runner,
            ) {
                Ok(out) if out.success => Outcome::new(
                    &req.name,
                    mode.success(),
                    format!("Certificate \"{}\" was added as a trusted root.", req.alias),
                )
                .with_changes(Changes::added(&req.alias)),
                Ok(out) => Outcome::new(&req.name, mode.failure(), out.combined()),
                Err(e) => Outcome::new(&req.name, mode.failure(), e.to_string()),
            }
        }
    }
}
