//! Single-instance guard for the interactive variant
//!
//! Wraps the OS-level named lock in a guard value: acquire it in `main`
//! before building any UI, keep it alive for the process lifetime, and the
//! lock is released on exit, normal or not. No manual release call exists.

use crate::errors::ConvertError;
use single_instance::SingleInstance;

pub struct InstanceGuard {
    _lock: SingleInstance,
}

impl InstanceGuard {
    /// Fails with `AlreadyRunning` if another live process holds the lock.
    pub fn acquire(name: &str) -> Result<Self, ConvertError> {
        let lock =
            SingleInstance::new(name).map_err(|e| ConvertError::InstanceLock(e.to_string()))?;
        if !lock.is_single() {
            return Err(ConvertError::AlreadyRunning);
        }
        Ok(Self { _lock: lock })
    }
}
