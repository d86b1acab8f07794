//! Per-session single-flight guard: one outstanding lookup per session id.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Default)]
pub struct LookupGuard {
    in_flight: Arc<Mutex<HashSet<String>>>,
}

impl LookupGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims `session_id`. Returns `None` while another lookup for it is outstanding.
    pub fn acquire(&self, session_id: &str) -> Option<LookupPermit> {
        if !lock(&self.in_flight).insert(session_id.to_string()) {
            return None;
        }
        Some(LookupPermit {
            in_flight: Arc::clone(&self.in_flight),
            session_id: session_id.to_string(),
        })
    }
}

/// Releases its session when dropped.
#[derive(Debug)]
pub struct LookupPermit {
    in_flight: Arc<Mutex<HashSet<String>>>,
    session_id: String,
}

impl Drop for LookupPermit {
    fn drop(&mut self) {
        lock(&self.in_flight).remove(&self.session_id);
    }
}

// The set stays consistent even if a holder panicked, so poisoning is ignored.
fn lock(set: &Mutex<HashSet<String>>) -> MutexGuard<'_, HashSet<String>> {
    set.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_acquire_for_same_session_is_rejected() {
        let guard = LookupGuard::new();
        let _permit = guard.acquire("session-a").unwrap();

        assert!(guard.acquire("session-a").is_none());
    }

    #[test]
    fn test_sessions_are_independent() {
        let guard = LookupGuard::new();
        let _a = guard.acquire("session-a").unwrap();

        assert!(guard.acquire("session-b").is_some());
    }

    #[test]
    fn test_drop_releases_session() {
        let guard = LookupGuard::new();
        let permit = guard.acquire("session-a").unwrap();
        drop(permit);

        assert!(guard.acquire("session-a").is_some());
    }

    #[test]
    fn test_clones_share_state() {
        let guard = LookupGuard::new();
        let clone = guard.clone();
        let _permit = guard.acquire("session-a").unwrap();

        assert!(clone.acquire("session-a").is_none());
    }
}
