//! Access gate — the Locked / PromptOpen / Unlocked state machine
//! guarding the editor.
//!
//! This is a deliberately weak gate: the secret is a plaintext string in
//! the document and the comparison happens right here. It deters casual
//! tampering only. There is no lockout, backoff, or rate limiting on
//! attempts, and that is intentional — do not turn this into a real
//! authentication system without a stated requirement.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::store::{LocalStore, AUTHORIZED_KEY};

/// Secret used when the document has no configured password.
pub const FALLBACK_PASSWORD: &str = "liam2025";

/// How long the mismatch indicator stays raised before it self-clears.
const ERROR_CLEAR: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GateState {
    Locked,
    PromptOpen,
    Unlocked,
}

/// Snapshot of the gate for status responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GateStatus {
    pub state: GateState,
    pub edit_mode: bool,
    /// Transient mismatch indicator; self-clears after a fixed delay.
    pub error: bool,
}

struct GateInner {
    state: GateState,
    /// Whether the editor drawer is open. Independent of authorization:
    /// a returning authorized user starts Unlocked but not mid-edit.
    edit_mode: bool,
    error_until: Option<Instant>,
}

pub struct AccessGate {
    store: LocalStore,
    inner: Mutex<GateInner>,
    error_clear: Duration,
}

impl AccessGate {
    /// Restores the gate from the persisted authorization flag.
    pub fn restore(store: LocalStore) -> Self {
        Self::restore_with_error_clear(store, ERROR_CLEAR)
    }

    fn restore_with_error_clear(store: LocalStore, error_clear: Duration) -> Self {
        let authorized = matches!(store.get(AUTHORIZED_KEY), Ok(Some(v)) if v == "true");
        let state = if authorized {
            info!("Restored persisted authorization, gate starts unlocked");
            GateState::Unlocked
        } else {
            GateState::Locked
        };
        Self {
            store,
            inner: Mutex::new(GateInner {
                state,
                edit_mode: false,
                error_until: None,
            }),
            error_clear,
        }
    }

    /// User requested edit mode. Unlocked → toggle the editor drawer;
    /// otherwise the password prompt opens.
    pub fn request_edit(&self) -> GateStatus {
        let mut inner = self.lock();
        match inner.state {
            GateState::Unlocked => inner.edit_mode = !inner.edit_mode,
            GateState::Locked | GateState::PromptOpen => inner.state = GateState::PromptOpen,
        }
        snapshot(&mut inner)
    }

    /// Submits the shared secret. A match unlocks the gate, opens the
    /// editor, and persists the authorization flag. A mismatch keeps the
    /// prompt open and raises the transient error indicator.
    pub fn unlock(&self, secret: &str, configured: Option<&str>) -> Result<GateStatus, AppError> {
        let expected = configured.filter(|p| !p.is_empty()).unwrap_or(FALLBACK_PASSWORD);
        let mut inner = self.lock();
        if secret == expected {
            inner.state = GateState::Unlocked;
            inner.edit_mode = true;
            inner.error_until = None;
            self.store.set(AUTHORIZED_KEY, "true")?;
            info!("Access gate unlocked");
        } else {
            inner.state = GateState::PromptOpen;
            inner.error_until = Some(Instant::now() + self.error_clear);
        }
        Ok(snapshot(&mut inner))
    }

    /// Dismisses the password prompt without submitting.
    pub fn cancel(&self) -> GateStatus {
        let mut inner = self.lock();
        if inner.state == GateState::PromptOpen {
            inner.state = GateState::Locked;
            inner.error_until = None;
        }
        snapshot(&mut inner)
    }

    /// Explicit logout: locks the gate and clears the persisted flag.
    pub fn logout(&self) -> Result<GateStatus, AppError> {
        let mut inner = self.lock();
        inner.state = GateState::Locked;
        inner.edit_mode = false;
        inner.error_until = None;
        self.store.remove(AUTHORIZED_KEY)?;
        info!("Access gate locked");
        Ok(snapshot(&mut inner))
    }

    /// Locks the gate without touching storage. Used by factory reset,
    /// which removes the persisted flag itself.
    pub fn reset(&self) -> GateStatus {
        let mut inner = self.lock();
        inner.state = GateState::Locked;
        inner.edit_mode = false;
        inner.error_until = None;
        snapshot(&mut inner)
    }

    pub fn status(&self) -> GateStatus {
        snapshot(&mut self.lock())
    }

    /// Guard for mutation endpoints: the edit session is only reachable
    /// through an unlocked gate.
    pub fn require_unlocked(&self) -> Result<(), AppError> {
        if self.lock().state == GateState::Unlocked {
            Ok(())
        } else {
            Err(AppError::Unauthorized)
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, GateInner> {
        // The mutex is never held across an await point; a poisoned lock
        // means a panic already happened, so propagating it is fine.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn snapshot(inner: &mut GateInner) -> GateStatus {
    // The error indicator self-clears on expiry; reads past the deadline
    // observe it as already gone.
    let error = match inner.error_until {
        Some(until) if Instant::now() < until => true,
        _ => {
            inner.error_until = None;
            false
        }
    };
    GateStatus {
        state: inner.state,
        edit_mode: inner.edit_mode,
        error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn gate() -> (TempDir, AccessGate) {
        gate_with_clear(ERROR_CLEAR)
    }

    fn gate_with_clear(clear: Duration) -> (TempDir, AccessGate) {
        let dir = TempDir::new().unwrap();
        let store = LocalStore::open(dir.path()).unwrap();
        let gate = AccessGate::restore_with_error_clear(store, clear);
        (dir, gate)
    }

    #[test]
    fn test_starts_locked_without_persisted_flag() {
        let (_dir, gate) = gate();
        let status = gate.status();
        assert_eq!(status.state, GateState::Locked);
        assert!(!status.edit_mode);
        assert!(!status.error);
    }

    #[test]
    fn test_request_edit_while_locked_opens_prompt() {
        let (_dir, gate) = gate();
        let status = gate.request_edit();
        assert_eq!(status.state, GateState::PromptOpen);
        assert!(!status.edit_mode);
    }

    #[test]
    fn test_cancel_returns_to_locked() {
        let (_dir, gate) = gate();
        gate.request_edit();
        let status = gate.cancel();
        assert_eq!(status.state, GateState::Locked);
    }

    #[test]
    fn test_correct_secret_unlocks_and_persists_flag() {
        let dir = TempDir::new().unwrap();
        let store = LocalStore::open(dir.path()).unwrap();
        let gate = AccessGate::restore(store.clone());

        gate.request_edit();
        let status = gate.unlock("x", Some("x")).unwrap();
        assert_eq!(status.state, GateState::Unlocked);
        assert!(status.edit_mode);
        assert!(!status.error);
        assert_eq!(store.get(AUTHORIZED_KEY).unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_wrong_secret_stays_prompt_open_with_error() {
        let (_dir, gate) = gate();
        gate.request_edit();
        let status = gate.unlock("y", Some("x")).unwrap();
        assert_eq!(status.state, GateState::PromptOpen);
        assert!(status.error);
        // A later correct submission still goes through.
        let status = gate.unlock("x", Some("x")).unwrap();
        assert_eq!(status.state, GateState::Unlocked);
    }

    #[test]
    fn test_error_indicator_self_clears_after_delay() {
        let (_dir, gate) = gate_with_clear(Duration::from_millis(10));
        gate.request_edit();
        assert!(gate.unlock("wrong", Some("x")).unwrap().error);
        std::thread::sleep(Duration::from_millis(20));
        assert!(!gate.status().error);
        assert_eq!(gate.status().state, GateState::PromptOpen);
    }

    #[test]
    fn test_fallback_password_used_when_unset() {
        let (_dir, gate) = gate();
        let status = gate.unlock(FALLBACK_PASSWORD, None).unwrap();
        assert_eq!(status.state, GateState::Unlocked);
    }

    #[test]
    fn test_empty_configured_password_falls_back() {
        let (_dir, gate) = gate();
        let status = gate.unlock(FALLBACK_PASSWORD, Some("")).unwrap();
        assert_eq!(status.state, GateState::Unlocked);
    }

    #[test]
    fn test_logout_locks_and_clears_flag() {
        let dir = TempDir::new().unwrap();
        let store = LocalStore::open(dir.path()).unwrap();
        let gate = AccessGate::restore(store.clone());
        gate.unlock("x", Some("x")).unwrap();

        let status = gate.logout().unwrap();
        assert_eq!(status.state, GateState::Locked);
        assert!(!status.edit_mode);
        assert_eq!(store.get(AUTHORIZED_KEY).unwrap(), None);
    }

    #[test]
    fn test_restore_from_persisted_flag_starts_unlocked_not_editing() {
        let dir = TempDir::new().unwrap();
        let store = LocalStore::open(dir.path()).unwrap();
        store.set(AUTHORIZED_KEY, "true").unwrap();

        let gate = AccessGate::restore(store);
        let status = gate.status();
        assert_eq!(status.state, GateState::Unlocked);
        assert!(!status.edit_mode);
    }

    #[test]
    fn test_request_edit_toggles_drawer_when_unlocked() {
        let (_dir, gate) = gate();
        gate.unlock("x", Some("x")).unwrap();
        assert!(gate.status().edit_mode);
        assert!(!gate.request_edit().edit_mode);
        assert!(gate.request_edit().edit_mode);
    }

    #[test]
    fn test_require_unlocked_rejects_locked_and_prompt_open() {
        let (_dir, gate) = gate();
        assert!(gate.require_unlocked().is_err());
        gate.request_edit();
        assert!(gate.require_unlocked().is_err());
        gate.unlock("x", Some("x")).unwrap();
        assert!(gate.require_unlocked().is_ok());
    }

    #[test]
    fn test_reset_locks_regardless_of_prior_state() {
        let (_dir, gate) = gate();
        gate.unlock("x", Some("x")).unwrap();
        let status = gate.reset();
        assert_eq!(status.state, GateState::Locked);
        assert!(!status.edit_mode);
    }
}
