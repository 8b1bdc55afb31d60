//! Shared test helpers: a fake Java installation with a scripted keytool.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const STOREPASS: &str = "changeit";

/// Point the system keytool candidate somewhere empty so the fake
/// installation's bin/keytool is the one found.
pub fn isolate_system_keytool() {
    std::env::set_var("KEYTRUST_SYSTEM_KEYTOOL", "/nonexistent/keytool");
}

/// Create a temp directory inside the workspace so sandboxed test runs keep
/// full access, including exec permission for the fake keytool.
pub fn temp_dir() -> TempDir {
    tempfile::Builder::new()
        .prefix("keytrust_test_")
        .tempdir_in(std::env::current_dir().unwrap_or_else(|_| std::path::Path::new(".").into()))
        .expect("temp dir")
}

/// A fake Java installation: a cacerts trust store plus a bin/keytool script
/// that emulates the keytool subcommands keytrust issues. Imported aliases
/// are recorded one per line in an `aliases` file next to the store.
pub struct FakeJava {
    dir: TempDir,
}

impl FakeJava {
    pub fn new() -> Self {
        let dir = temp_dir();
        let home = dir.path();
        fs::create_dir_all(home.join("lib/security")).unwrap();
        fs::write(home.join("lib/security/cacerts"), b"fake trust store\n").unwrap();
        fs::create_dir_all(home.join("bin")).unwrap();
        let script = KEYTOOL_SCRIPT.replace("__HOME__", home.to_str().unwrap());
        let keytool = home.join("bin/keytool");
        fs::write(&keytool, script).unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&keytool, fs::Permissions::from_mode(0o755)).unwrap();
        }
        Self { dir }
    }

    pub fn home(&self) -> &Path {
        self.dir.path()
    }

    pub fn trust_store(&self) -> PathBuf {
        self.home().join("lib/security/cacerts")
    }

    pub fn aliases_file(&self) -> PathBuf {
        self.home().join("aliases")
    }

    /// Pre-seed an alias as already imported.
    pub fn add_alias(&self, alias: &str) {
        use std::io::Write;
        let mut f = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.aliases_file())
            .unwrap();
        writeln!(f, "{alias}").unwrap();
    }

    /// Aliases the fake keytool has recorded as imported.
    pub fn aliases(&self) -> Vec<String> {
        fs::read_to_string(self.aliases_file())
            .unwrap_or_default()
            .lines()
            .map(String::from)
            .collect()
    }

    /// Drop the bundled keytool so neither candidate resolves.
    pub fn remove_keytool(&self) {
        fs::remove_file(self.home().join("bin/keytool")).unwrap();
    }

    /// Drop the cacerts file so store discovery fails.
    pub fn remove_trust_store(&self) {
        fs::remove_file(self.trust_store()).unwrap();
    }
}

/// Write a file the fake keytool accepts as a certificate.
pub fn write_cert(dir: &Path, name: &str) -> PathBuf {
    let p = dir.join(name);
    fs::write(
        &p,
        "-----BEGIN CERTIFICATE-----\nMIIBfakefakefake\n-----END CERTIFICATE-----\n",
    )
    .unwrap();
    p
}

/// Write a file the fake keytool rejects as a certificate.
pub fn write_junk(dir: &Path, name: &str) -> PathBuf {
    let p = dir.join(name);
    fs::write(&p, "this is not a certificate\n").unwrap();
    p
}

/// Build a TrustRequest against a fake installation.
pub fn request(java: &FakeJava, cert_file: PathBuf, alias: &str) -> keytrust::converge::TrustRequest {
    keytrust::converge::TrustRequest {
        name: alias.to_string(),
        cert_file,
        alias: alias.to_string(),
        storepass: STOREPASS.to_string(),
        java_home: Some(java.home().to_path_buf()),
    }
}

const KEYTOOL_SCRIPT: &str = r#"#!/bin/sh
home="__HOME__"
mode=""; alias=""; file=""; pass=""; keystore=""
while [ $# -gt 0 ]; do
    case "$1" in
        -help) exit 0 ;;
        -list) mode=list ;;
        -printcert) mode=print ;;
        -importcert) mode=import ;;
        -alias) alias="$2"; shift ;;
        -file) file="$2"; shift ;;
        -storepass) pass="$2"; shift ;;
        -keystore) keystore="$2"; shift ;;
    esac
    shift
done
case "$mode" in
    list)
        [ -f "$keystore" ] || { echo "keytool error: keystore not found"; exit 1; }
        if [ "$pass" != "changeit" ]; then
            echo "keytool error: java.io.IOException: Keystore was tampered with, or password was incorrect"
            exit 1
        fi
        if [ -n "$alias" ]; then
            grep -qx "$alias" "$home/aliases" 2>/dev/null && exit 0
            echo "keytool error: java.lang.Exception: Alias <$alias> does not exist"
            exit 1
        fi
        exit 0 ;;
    print)
        grep -q "BEGIN CERTIFICATE" "$file" 2>/dev/null && exit 0
        echo "keytool error: java.lang.Exception: Input not an X.509 certificate"
        exit 1 ;;
    import)
        if [ "$pass" != "changeit" ]; then
            echo "keytool error: java.io.IOException: Keystore was tampered with, or password was incorrect"
            exit 1
        fi
        echo "$alias" >> "$home/aliases"
        exit 0 ;;
esac
exit 1
"#;
