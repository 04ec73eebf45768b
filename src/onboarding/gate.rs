//! OnboardingGate: forwards a visitor to the dashboard or into onboarding.
//!
//! Mounting a gate does two independent things:
//!
//! 1. spawns the store's hydration (fire-and-forget; the handle is kept only
//!    so callers can observe it), and
//! 2. spawns an evaluation task that owns a store subscription and, on every
//!    published change, checks whether hydration has settled. The first
//!    settled snapshot decides the destination and the task ends.
//!
//! Dropping the gate aborts the evaluation task and with it the
//! subscription, so a hydration that finishes after unmount only updates
//! the store and never navigates.

use std::sync::Arc;

use maud::Markup;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::flow::OnboardingStep;
use super::navigator::Navigator;
use super::state::HydrationStatus;
use super::store::OnboardingStore;

/// Entry route of the dashboard.
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// Where a resolved gate sent the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDestination {
    Dashboard,
    Onboarding,
}

impl GateDestination {
    /// Completed users go to the dashboard, everyone else into onboarding.
    pub fn for_completion(is_complete: bool) -> Self {
        if is_complete {
            Self::Dashboard
        } else {
            Self::Onboarding
        }
    }

    pub fn route(&self) -> String {
        match self {
            Self::Dashboard => DASHBOARD_ROUTE.to_string(),
            Self::Onboarding => OnboardingStep::FIRST.route(),
        }
    }
}

impl std::fmt::Display for GateDestination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "dashboard"),
            Self::Onboarding => write!(f, "onboarding"),
        }
    }
}

/// Gate lifecycle. `Resolved` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Unresolved,
    Resolved(GateDestination),
}

/// A mounted onboarding gate.
pub struct OnboardingGate {
    id: Uuid,
    state: watch::Receiver<GateState>,
    hydration: JoinHandle<HydrationStatus>,
    evaluation: JoinHandle<()>,
}

impl OnboardingGate {
    /// Mount the gate: start hydration and begin watching the store.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(store: Arc<OnboardingStore>, navigator: Arc<dyn Navigator>) -> Self {
        let id = Uuid::new_v4();
        let (state_tx, state_rx) = watch::channel(GateState::Unresolved);

        // Subscribe before hydration starts so its update cannot be missed.
        let mut subscription = store.subscribe();

        let hydration = {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.hydrate().await })
        };

        let evaluation = tokio::spawn(async move {
            let mut snapshot = subscription.current();
            loop {
                if snapshot.hydration.is_settled() {
                    let destination = GateDestination::for_completion(snapshot.state.is_complete);
                    let route = destination.route();
                    match navigator.replace(&route) {
                        Ok(()) => info!(
                            gate_id = %id,
                            %destination,
                            hydration = ?snapshot.hydration,
                            "Onboarding gate resolved"
                        ),
                        Err(e) => warn!(gate_id = %id, route = %route, error = %e, "Onboarding gate redirect failed"),
                    }
                    let _ = state_tx.send(GateState::Resolved(destination));
                    return;
                }

                debug!(gate_id = %id, "Waiting for onboarding state to hydrate");
                match subscription.changed().await {
                    Some(next) => snapshot = next,
                    None => return,
                }
            }
        });

        debug!(gate_id = %id, "Onboarding gate mounted");
        Self {
            id,
            state: state_rx,
            hydration,
            evaluation,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> GateState {
        *self.state.borrow()
    }

    /// Wait until the gate has decided. `None` if it can no longer decide
    /// (the store went away before hydration settled).
    pub async fn resolved(&mut self) -> Option<GateDestination> {
        let state = self
            .state
            .wait_for(|state| matches!(state, GateState::Resolved(_)))
            .await
            .ok()?;
        match *state {
            GateState::Resolved(destination) => Some(destination),
            GateState::Unresolved => None,
        }
    }

    /// The hydration task started on mount.
    pub fn hydration(&self) -> &JoinHandle<HydrationStatus> {
        &self.hydration
    }

    /// What the gate renders: the loading indicator, whatever its state.
    pub fn view(&self) -> Markup {
        crate::web::loading::loading_screen("Checking your progress")
    }

    /// Unmount explicitly. Equivalent to dropping the gate.
    pub fn unmount(self) {}
}

impl Drop for OnboardingGate {
    fn drop(&mut self) {
        self.evaluation.abort();
        let state = *self.state.borrow();
        debug!(gate_id = %self.id, state = ?state, "Onboarding gate unmounted");
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::sync::Notify;

    use super::*;
    use crate::onboarding::navigator::tests::HistoryNavigator;
    use crate::onboarding::store::tests::ScriptedDb;

    const GATE_ROUTE: &str = "/onboarding";

    fn history() -> Arc<HistoryNavigator> {
        let history = HistoryNavigator::new("/");
        history.push(GATE_ROUTE);
        Arc::new(history)
    }

    fn store_over(db: ScriptedDb) -> Arc<OnboardingStore> {
        OnboardingStore::new(Arc::new(db), "default", Duration::from_secs(1))
    }

    async fn resolve(store: Arc<OnboardingStore>, history: Arc<HistoryNavigator>) -> GateDestination {
        let mut gate = OnboardingGate::mount(store, history);
        tokio::time::timeout(Duration::from_secs(1), gate.resolved())
            .await
            .expect("gate did not resolve")
            .expect("gate gave up")
    }

    #[test]
    fn destination_routes() {
        assert_eq!(GateDestination::for_completion(true).route(), "/dashboard");
        assert_eq!(
            GateDestination::for_completion(false).route(),
            "/onboarding/welcome"
        );
    }

    #[tokio::test]
    async fn cold_start_goes_to_welcome() {
        let history = history();
        let destination = resolve(store_over(ScriptedDb::with_value(None)), history.clone()).await;

        assert_eq!(destination, GateDestination::Onboarding);
        assert_eq!(history.current().as_deref(), Some("/onboarding/welcome"));
    }

    #[tokio::test]
    async fn stored_incomplete_goes_to_welcome() {
        let history = history();
        let db = ScriptedDb::with_value(Some(serde_json::json!({ "is_complete": false })));
        let destination = resolve(store_over(db), history.clone()).await;

        assert_eq!(destination, GateDestination::Onboarding);
    }

    #[tokio::test]
    async fn returning_user_goes_to_dashboard() {
        let history = history();
        let destination = resolve(store_over(ScriptedDb::completed()), history.clone()).await;

        assert_eq!(destination, GateDestination::Dashboard);
        assert_eq!(history.current().as_deref(), Some("/dashboard"));
    }

    #[tokio::test]
    async fn redirect_replaces_the_gate_entry() {
        let history = history();
        resolve(store_over(ScriptedDb::completed()), history.clone()).await;

        assert_eq!(history.entries(), vec!["/", "/dashboard"]);
        assert!(!history.entries().iter().any(|e| e == GATE_ROUTE));
    }

    #[tokio::test]
    async fn storage_failure_goes_to_welcome() {
        let history = history();
        let destination = resolve(store_over(ScriptedDb::failing()), history.clone()).await;

        assert_eq!(destination, GateDestination::Onboarding);
        assert_eq!(history.current().as_deref(), Some("/onboarding/welcome"));
    }

    #[tokio::test]
    async fn hung_storage_times_out_to_welcome() {
        let db = ScriptedDb::completed().held(Arc::new(Notify::new()));
        let store = OnboardingStore::new(Arc::new(db), "default", Duration::from_millis(30));
        let history = history();

        let destination = resolve(store, history.clone()).await;
        assert_eq!(destination, GateDestination::Onboarding);
    }

    #[tokio::test]
    async fn does_not_decide_before_hydration() {
        let release = Arc::new(Notify::new());
        let store = store_over(ScriptedDb::completed().held(release.clone()));
        let history = history();

        let mut gate = OnboardingGate::mount(store.clone(), history.clone());
        tokio::time::sleep(Duration::from_millis(30)).await;

        // The default `false` is visible but untrusted: no redirect yet.
        assert!(!store.is_complete());
        assert_eq!(gate.state(), GateState::Unresolved);
        assert_eq!(history.current().as_deref(), Some(GATE_ROUTE));

        release.notify_waiters();
        let destination = gate.resolved().await;
        assert_eq!(destination, Some(GateDestination::Dashboard));
        assert_eq!(history.entries(), vec!["/", "/dashboard"]);
    }

    #[tokio::test]
    async fn already_hydrated_store_resolves_immediately() {
        let store = store_over(ScriptedDb::completed());
        store.hydrate().await;

        let history = history();
        let destination = resolve(store, history).await;
        assert_eq!(destination, GateDestination::Dashboard);
    }

    #[tokio::test]
    async fn later_changes_do_not_redirect_again() {
        let store = store_over(ScriptedDb::with_value(None));
        let history = history();

        let destination = resolve(store.clone(), history.clone()).await;
        assert_eq!(destination, GateDestination::Onboarding);

        store.complete().await;
        tokio::time::sleep(Duration::from_millis(20)).await;

        assert_eq!(history.entries(), vec!["/", "/onboarding/welcome"]);
    }

    #[tokio::test]
    async fn unmount_before_hydration_cancels_redirect() {
        let release = Arc::new(Notify::new());
        let store = store_over(ScriptedDb::completed().held(release.clone()));
        let history = history();

        let gate = OnboardingGate::mount(store.clone(), history.clone());
        tokio::time::sleep(Duration::from_millis(20)).await;
        gate.unmount();

        release.notify_waiters();
        tokio::time::sleep(Duration::from_millis(30)).await;

        // Hydration still lands in the store, but nobody navigates.
        assert!(store.is_complete());
        assert_eq!(history.entries(), vec!["/", GATE_ROUTE]);
    }

    #[tokio::test]
    async fn view_is_only_the_loading_indicator() {
        let release = Arc::new(Notify::new());
        let store = store_over(ScriptedDb::completed().held(release.clone()));
        let mut gate = OnboardingGate::mount(store, history());

        let pending = gate.view().into_string();
        assert!(pending.contains("role=\"status\""));
        assert!(!pending.contains("Welcome to YoYo Academy"));
        assert!(!pending.contains("Your dashboard"));

        release.notify_waiters();
        gate.resolved().await;
        assert_eq!(gate.view().into_string(), pending);
    }

    #[tokio::test]
    async fn hydration_runs_in_the_background() {
        let store = store_over(ScriptedDb::failing());
        let mut gate = OnboardingGate::mount(store.clone(), history());
        gate.resolved().await;

        for _ in 0..100 {
            if gate.hydration().is_finished() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        assert!(gate.hydration().is_finished());
        assert!(matches!(store.snapshot().hydration, HydrationStatus::Failed(_)));
    }
}
