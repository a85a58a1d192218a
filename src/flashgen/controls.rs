//! # Input Controls
//!
//! A UI exposes two triggers that mutate the card store: *generate* and
//! *load* (file import or URL fetch). While a generation request is in
//! flight both are disabled, so a load can never race the generation result
//! into the store.
//!
//! [`Controls::begin_generation`] hands out a [`BusyGuard`]. Both controls
//! stay disabled until the guard is dropped, which happens on success, on an
//! early `?` return and during unwinding alike.
//!
//! `Controls` is a shared handle. Clones observe the same state, so a
//! renderer can grey out its buttons (or a test can check them) while a
//! request is running.

use crate::error::{FlashError, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct Controls {
    busy: Arc<AtomicBool>,
    display_only: Arc<AtomicBool>,
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generate_enabled(&self) -> bool {
        self.inputs_enabled()
    }

    pub fn load_enabled(&self) -> bool {
        self.inputs_enabled()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    pub fn is_display_only(&self) -> bool {
        self.display_only.load(Ordering::SeqCst)
    }

    /// Permanently disable both inputs. Used when a deck was opened from a
    /// shared URL and the session is view-only.
    pub fn suppress_inputs(&self) {
        self.display_only.store(true, Ordering::SeqCst);
    }

    /// Disable both controls until the returned guard is dropped.
    pub fn begin_generation(&self) -> Result<BusyGuard> {
        self.check_display_only()?;
        if self
            .busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(FlashError::Busy);
        }
        debug!("controls disabled for generation");
        Ok(BusyGuard {
            busy: Arc::clone(&self.busy),
        })
    }

    /// Fail unless a load may start right now.
    pub fn ensure_load_enabled(&self) -> Result<()> {
        self.ensure_inputs_enabled()
    }

    /// Fail unless the generate control is usable right now.
    pub fn ensure_generate_enabled(&self) -> Result<()> {
        self.ensure_inputs_enabled()
    }

    fn ensure_inputs_enabled(&self) -> Result<()> {
        self.check_display_only()?;
        if self.is_busy() {
            return Err(FlashError::Busy);
        }
        Ok(())
    }

    fn inputs_enabled(&self) -> bool {
        !self.is_busy() && !self.is_display_only()
    }

    fn check_display_only(&self) -> Result<()> {
        if self.is_display_only() {
            return Err(FlashError::DisplayOnly);
        }
        Ok(())
    }
}

/// Re-enables the controls when dropped.
#[must_use = "controls are re-enabled as soon as the guard is dropped"]
#[derive(Debug)]
pub struct BusyGuard {
    busy: Arc<AtomicBool>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::SeqCst);
        debug!("controls re-enabled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_by_default() {
        let controls = Controls::new();
        assert!(controls.generate_enabled());
        assert!(controls.load_enabled());
        assert!(controls.ensure_load_enabled().is_ok());
    }

    #[test]
    fn test_guard_disables_until_dropped() {
        let controls = Controls::new();
        let observer = controls.clone();

        let guard = controls.begin_generation().unwrap();
        assert!(!observer.load_enabled());
        assert!(!observer.generate_enabled());
        assert!(matches!(
            observer.ensure_load_enabled(),
            Err(FlashError::Busy)
        ));

        drop(guard);
        assert!(observer.load_enabled());
        assert!(observer.generate_enabled());
    }

    #[test]
    fn test_second_generation_is_refused() {
        let controls = Controls::new();
        let _guard = controls.begin_generation().unwrap();
        assert!(matches!(controls.begin_generation(), Err(FlashError::Busy)));
    }

    #[test]
    fn test_guard_released_on_error_path() {
        fn failing(controls: &Controls) -> Result<()> {
            let _busy = controls.begin_generation()?;
            Err(FlashError::Generation("nope".into()))
        }

        let controls = Controls::new();
        assert!(failing(&controls).is_err());
        assert!(controls.load_enabled());
    }

    #[test]
    fn test_guard_released_on_panic() {
        let controls = Controls::new();
        let inner = controls.clone();
        let result = std::panic::catch_unwind(move || {
            let _busy = inner.begin_generation().unwrap();
            panic!("collaborator blew up");
        });
        assert!(result.is_err());
        assert!(controls.load_enabled());
    }

    #[test]
    fn test_display_mode_refuses_inputs() {
        let controls = Controls::new();
        controls.suppress_inputs();
        assert!(!controls.load_enabled());
        assert!(matches!(
            controls.begin_generation(),
            Err(FlashError::DisplayOnly)
        ));
        assert!(matches!(
            controls.ensure_load_enabled(),
            Err(FlashError::DisplayOnly)
        ));
    }
}
