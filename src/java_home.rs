//! JAVA_HOME resolution: explicit override, else login-shell discovery.

use std::path::{Path, PathBuf};

use crate::config;
use crate::runner::{Invocation, Runner};

/// Resolve the Java installation root.
///
/// An explicit override wins when it names an existing directory (after
/// following symlinks); deeper validation is left to the trust store and
/// keytool lookups. Otherwise a login shell sources the system profile and
/// echoes `$JAVA_HOME`, because the calling process may not have had the
/// profile applied. The shell runs with a cleared environment so only the
/// sourced profile supplies the value.
///
/// `None` means Java is absent, which is a valid state, not an error.
pub fn resolve(explicit: Option<&Path>, runner: &dyn Runner) -> Option<PathBuf> {
    if let Some(root) = explicit {
        if let Ok(real) = std::fs::canonicalize(root) {
            if real.is_dir() {
                return Some(root.to_path_buf());
            }
        }
    }

    let script = format!(
        "source {} && echo -n $JAVA_HOME",
        config::profile_path().display()
    );
    let inv = Invocation::new(config::SHELL)
        .arg("-c")
        .arg(script)
        .clear_env();
    match runner.run(&inv) {
        Ok(out) if out.success => {
            let home = out.stdout.trim();
            if home.is_empty() {
                None
            } else {
                log::debug!("discovered JAVA_HOME: {home}");
                Some(PathBuf::from(home))
            }
        }
        _ => None,
    }
}
