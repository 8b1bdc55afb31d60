//! Fixed paths for discovery, with env var overrides for testing.

use std::path::PathBuf;

/// Shell used for JAVA_HOME discovery.
pub const SHELL: &str = "/bin/bash";

const DEFAULT_PROFILE: &str = "/etc/profile";
const DEFAULT_SYSTEM_KEYTOOL: &str = "/usr/bin/keytool";

/// Profile script sourced by the discovery shell (KEYTRUST_PROFILE overrides,
/// e.g. in tests).
pub fn profile_path() -> PathBuf {
    std::env::var_os("KEYTRUST_PROFILE")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PROFILE))
}

/// System-wide keytool candidate tried before `<java_home>/bin/keytool`
/// (KEYTRUST_SYSTEM_KEYTOOL overrides).
pub fn system_keytool() -> PathBuf {
    std::env::var_os("KEYTRUST_SYSTEM_KEYTOOL")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SYSTEM_KEYTOOL))
}
