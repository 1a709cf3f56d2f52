//! Safety checks for destructive runs
//!
//! Deleting originals in a protected system directory is refused outright.
//! Only the delete path is guarded; a plain conversion never removes
//! anything and needs no check.

use std::path::Path;

const PROTECTED_DIRS: &[&str] = &[
    "/",
    "/System",
    "/usr",
    "/bin",
    "/sbin",
    "/etc",
    "/var",
    "/Library",
    "/Applications",
    "/Users",
    "/home",
    "/root",
    "/boot",
    "/dev",
    "/proc",
    "/sys",
    "/opt",
];

pub fn check_delete_safety(path: &Path) -> Result<(), String> {
    let path_str = path.to_string_lossy();

    for protected in PROTECTED_DIRS {
        if path_str == *protected {
            return Err(format!(
                "Refusing to delete originals in protected directory '{}'.\n\
                 Pick a dedicated photo folder instead.",
                protected
            ));
        }
    }

    Ok(())
}
