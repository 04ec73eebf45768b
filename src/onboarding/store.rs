//! OnboardingStore: the shared, hydratable onboarding state.
//!
//! Holds the live `OnboardingState` behind a `watch` channel so that readers
//! can subscribe to changes. The state starts at its default and is loaded
//! from the settings table at most once (`hydrate`). Every failure to load
//! leaves the default in place, so an unreadable store always reads as
//! "not onboarded".

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, OnceCell, watch};
use tracing::{debug, info, warn};

use crate::error::DatabaseError;
use crate::store::Database;

use super::model::{Goal, SkillLevel, settings_keys};
use super::state::{HydrationStatus, OnboardingState, StoreSnapshot};

/// Shared onboarding state with one-time hydration from the settings table.
pub struct OnboardingStore {
    db: Arc<dyn Database>,
    user_id: String,
    hydrate_timeout: Duration,
    tx: watch::Sender<StoreSnapshot>,
    hydration: OnceCell<HydrationStatus>,
    /// Serializes flow mutations so persisted rows land in publish order.
    write_lock: Mutex<()>,
}

impl OnboardingStore {
    /// Create a store holding the default state. Nothing is read until `hydrate`.
    pub fn new(db: Arc<dyn Database>, user_id: impl Into<String>, hydrate_timeout: Duration) -> Arc<Self> {
        let (tx, _rx) = watch::channel(StoreSnapshot::default());
        Arc::new(Self {
            db,
            user_id: user_id.into(),
            hydrate_timeout,
            tx,
            hydration: OnceCell::new(),
            write_lock: Mutex::new(()),
        })
    }

    /// Selector: the current completion flag.
    ///
    /// Before hydration settles this is the default (`false`).
    pub fn is_complete(&self) -> bool {
        self.tx.borrow().state.is_complete
    }

    /// The current state and hydration status.
    pub fn snapshot(&self) -> StoreSnapshot {
        self.tx.borrow().clone()
    }

    /// Subscribe to snapshot changes. Dropping the handle unsubscribes.
    pub fn subscribe(&self) -> Subscription {
        Subscription {
            rx: self.tx.subscribe(),
        }
    }

    /// Load the persisted state into memory.
    ///
    /// Idempotent: the first call reads storage, every later or concurrent
    /// call waits for and returns that same outcome.
    pub async fn hydrate(&self) -> HydrationStatus {
        self.hydration
            .get_or_init(|| self.load())
            .await
            .clone()
    }

    async fn load(&self) -> HydrationStatus {
        debug!(user_id = %self.user_id, "Hydrating onboarding state");

        let read = tokio::time::timeout(
            self.hydrate_timeout,
            self.db
                .get_setting(&self.user_id, settings_keys::ONBOARDING_STATE),
        )
        .await
        .unwrap_or(Err(DatabaseError::Timeout(self.hydrate_timeout)));

        let (loaded, status) = match read {
            Ok(Some(value)) => match serde_json::from_value::<OnboardingState>(value) {
                Ok(state) => (Some(state), HydrationStatus::Hydrated),
                Err(e) => {
                    warn!(user_id = %self.user_id, error = %e, "Stored onboarding state is corrupt, using default");
                    (None, HydrationStatus::Failed(format!("corrupt onboarding state: {e}")))
                }
            },
            Ok(None) => (None, HydrationStatus::Hydrated),
            Err(e) => {
                warn!(user_id = %self.user_id, error = %e, "Failed to hydrate onboarding state, using default");
                (None, HydrationStatus::Failed(e.to_string()))
            }
        };

        self.tx.send_modify(|snapshot| {
            if let Some(state) = loaded {
                snapshot.state = state;
            }
            snapshot.hydration = status.clone();
        });

        info!(
            user_id = %self.user_id,
            is_complete = self.is_complete(),
            hydration = ?status,
            "Onboarding state hydrated"
        );
        status
    }

    // ── Flow mutations ──────────────────────────────────────────────

    /// Record the user's skill level.
    pub async fn set_skill_level(&self, level: SkillLevel) -> OnboardingState {
        self.update(|state| state.skill_level = Some(level)).await
    }

    /// Record the user's goals (deduplicated, first occurrence wins).
    pub async fn set_goals(&self, goals: Vec<Goal>) -> OnboardingState {
        let mut unique = Vec::with_capacity(goals.len());
        for goal in goals {
            if !unique.contains(&goal) {
                unique.push(goal);
            }
        }
        self.update(|state| state.goals = unique).await
    }

    /// Mark onboarding finished.
    pub async fn complete(&self) -> OnboardingState {
        self.update(OnboardingState::complete).await
    }

    /// Forget all onboarding answers, in memory and in storage.
    pub async fn reset(&self) -> OnboardingState {
        let status = self.hydrate().await;
        let _guard = self.write_lock.lock().await;

        self.tx.send_if_modified(|snapshot| {
            let changed = snapshot.state != OnboardingState::default();
            snapshot.state = OnboardingState::default();
            changed
        });

        if !matches!(status, HydrationStatus::Hydrated) {
            warn!(user_id = %self.user_id, "Onboarding reset kept in memory: stored state could not be read");
            return OnboardingState::default();
        }
        if let Err(e) = self
            .db
            .delete_setting(&self.user_id, settings_keys::ONBOARDING_STATE)
            .await
        {
            warn!(user_id = %self.user_id, error = %e, "Failed to delete persisted onboarding state");
        }
        info!(user_id = %self.user_id, "Onboarding state reset");
        OnboardingState::default()
    }

    /// Apply a mutation on top of the hydrated state, publish it, then persist it.
    async fn update(&self, mutate: impl FnOnce(&mut OnboardingState)) -> OnboardingState {
        // Writing over an unhydrated default would clobber the stored answers.
        let status = self.hydrate().await;
        let _guard = self.write_lock.lock().await;

        let mut updated = OnboardingState::default();
        self.tx.send_if_modified(|snapshot| {
            let before = snapshot.state.clone();
            mutate(&mut snapshot.state);
            updated = snapshot.state.clone();
            before != snapshot.state
        });

        // The stored row is unknown after a failed read, so leave it untouched.
        if matches!(status, HydrationStatus::Hydrated) {
            self.persist(&updated).await;
        } else {
            warn!(user_id = %self.user_id, "Onboarding state not persisted: stored state could not be read");
        }
        updated
    }

    async fn persist(&self, state: &OnboardingState) {
        let value = match serde_json::to_value(state) {
            Ok(v) => v,
            Err(e) => {
                warn!("Failed to serialize onboarding state: {}", e);
                return;
            }
        };
        if let Err(e) = self
            .db
            .set_setting(&self.user_id, settings_keys::ONBOARDING_STATE, &value)
            .await
        {
            warn!(user_id = %self.user_id, error = %e, "Failed to persist onboarding state");
        }
    }
}

/// A live subscription to store snapshots.
///
/// Acquired with [`OnboardingStore::subscribe`]; released on drop.
pub struct Subscription {
    rx: watch::Receiver<StoreSnapshot>,
}

impl Subscription {
    /// The latest snapshot, marking it as seen.
    pub fn current(&mut self) -> StoreSnapshot {
        self.rx.borrow_and_update().clone()
    }

    /// Wait for the next published change. `None` once the store is gone.
    pub async fn changed(&mut self) -> Option<StoreSnapshot> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }
}
