//! Trust store discovery inside a Java installation.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

const TRUST_STORE_FILE: &str = "cacerts";

/// Find the trust store under `java_home`.
///
/// Walks the installation tree and returns the first file named exactly
/// `cacerts`. Entries are visited in sorted order so the tie-break between
/// multiple stores is stable across runs; no preference is applied beyond
/// that. Unreadable entries are skipped.
pub fn find_trust_store(java_home: &Path) -> Option<PathBuf> {
    for entry in WalkDir::new(java_home).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };
        if entry.file_type().is_file() && entry.file_name() == TRUST_STORE_FILE {
            log::debug!("trust store: {}", entry.path().display());
            return Some(entry.into_path());
        }
    }
    None
}
