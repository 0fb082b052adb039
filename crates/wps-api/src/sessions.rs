// ============================================================================
// WPS API - Wizard Session Store
// File: crates/wps-api/src/sessions.rs
// ============================================================================
//! Server-held scenario wizards keyed by uuid.
//!
//! Leaving a wizard without closing it is a normal way to cancel, so idle
//! sessions expire after a TTL and the store never grows past its cap. A
//! session with a submission in flight is never evicted.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use parking_lot::Mutex;
use tracing::{debug, info};
use uuid::Uuid;
use wps_core::ScenarioWizard;
use wps_shared::config::DashboardSettings;

pub type WizardSession = Arc<Mutex<ScenarioWizard>>;

struct SessionEntry {
    session: WizardSession,
    last_touched: DateTime<Utc>,
}

impl SessionEntry {
    /// Sessions locked by a request or mid-submission stay put.
    fn is_busy(&self) -> bool {
        self.session
            .try_lock()
            .map_or(true, |wizard| wizard.is_submitting())
    }
}

pub struct WizardSessions {
    entries: DashMap<Uuid, SessionEntry>,
    max_sessions: usize,
    ttl: Duration,
}

impl WizardSessions {
    pub fn new(max_sessions: usize, ttl_secs: u64) -> Self {
        let ttl_secs = i64::try_from(ttl_secs).unwrap_or(i64::MAX).min(i64::MAX / 1000);
        Self {
            entries: DashMap::new(),
            max_sessions: max_sessions.max(1),
            ttl: Duration::seconds(ttl_secs),
        }
    }

    pub fn from_settings(settings: &DashboardSettings) -> Self {
        Self::new(settings.max_wizard_sessions, settings.wizard_session_ttl_secs)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn open(&self, wizard: ScenarioWizard) -> (Uuid, WizardSession) {
        self.open_at(wizard, Utc::now())
    }

    /// Stores a new session, first dropping expired ones and then the least
    /// recently used while the store is full.
    pub fn open_at(&self, wizard: ScenarioWizard, now: DateTime<Utc>) -> (Uuid, WizardSession) {
        self.sweep(now);
        while self.entries.len() >= self.max_sessions {
            if !self.evict_least_recent() {
                break;
            }
        }

        let id = Uuid::new_v4();
        let session = Arc::new(Mutex::new(wizard));
        self.entries.insert(
            id,
            SessionEntry {
                session: session.clone(),
                last_touched: now,
            },
        );
        (id, session)
    }

    pub fn get(&self, id: Uuid) -> Option<WizardSession> {
        self.get_at(id, Utc::now())
    }

    /// Looks a session up and marks it as used.
    pub fn get_at(&self, id: Uuid, now: DateTime<Utc>) -> Option<WizardSession> {
        self.entries.get_mut(&id).map(|mut entry| {
            entry.last_touched = now;
            entry.session.clone()
        })
    }

    pub fn remove(&self, id: Uuid) -> bool {
        self.entries.remove(&id).is_some()
    }

    /// Drops sessions idle for longer than the TTL. Returns how many went.
    pub fn sweep(&self, now: DateTime<Utc>) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| now - entry.last_touched < self.ttl || entry.is_busy());
        let removed = before.saturating_sub(self.entries.len());
        if removed > 0 {
            info!("Expired {} idle wizard session(s)", removed);
        }
        removed
    }

    pub fn sweep_expired(&self) -> usize {
        self.sweep(Utc::now())
    }

    fn evict_least_recent(&self) -> bool {
        let oldest = self
            .entries
            .iter()
            .filter(|entry| !entry.is_busy())
            .min_by_key(|entry| entry.last_touched)
            .map(|entry| *entry.key());

        match oldest {
            Some(id) => {
                debug!("Evicting wizard session {} at capacity", id);
                self.entries.remove(&id).is_some()
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wps_core::ToastCenter;

    fn wizard() -> ScenarioWizard {
        ScenarioWizard::new(Arc::new(ToastCenter::new(10)))
    }

    #[test]
    fn test_idle_sessions_expire_after_ttl() {
        let sessions = WizardSessions::new(10, 60);
        let start = Utc::now();
        let (stale, _) = sessions.open_at(wizard(), start);
        let (active, _) = sessions.open_at(wizard(), start);

        assert!(sessions.get_at(active, start + Duration::seconds(50)).is_some());
        assert_eq!(sessions.sweep(start + Duration::seconds(90)), 1);
        assert!(sessions.get_at(stale, start + Duration::seconds(90)).is_none());
        assert!(sessions.get_at(active, start + Duration::seconds(90)).is_some());
    }

    #[test]
    fn test_cap_evicts_least_recently_used() {
        let sessions = WizardSessions::new(2, 3600);
        let start = Utc::now();
        let (first, _) = sessions.open_at(wizard(), start);
        let (second, _) = sessions.open_at(wizard(), start + Duration::seconds(1));
        sessions.get_at(first, start + Duration::seconds(2));

        let (third, _) = sessions.open_at(wizard(), start + Duration::seconds(3));

        assert_eq!(sessions.len(), 2);
        assert!(sessions.get(second).is_none());
        assert!(sessions.get(first).is_some());
        assert!(sessions.get(third).is_some());
    }

    #[test]
    fn test_locked_sessions_are_never_evicted() {
        let sessions = WizardSessions::new(1, 60);
        let start = Utc::now();
        let (held, session) = sessions.open_at(wizard(), start);
        let guard = session.lock();

        assert_eq!(sessions.sweep(start + Duration::seconds(600)), 0);
        let (_, _) = sessions.open_at(wizard(), start + Duration::seconds(600));
        drop(guard);

        assert_eq!(sessions.len(), 2);
        assert!(sessions.get(held).is_some());
    }
}
