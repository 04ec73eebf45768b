//! Persisted onboarding state and the snapshot the store publishes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::model::{Goal, SkillLevel};

/// Persisted onboarding state.
///
/// Stored in the `settings` table under key `"onboarding_state"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingState {
    /// Whether the user has finished the onboarding sequence.
    pub is_complete: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_level: Option<SkillLevel>,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl OnboardingState {
    /// Mark the sequence finished. Completing twice keeps the first timestamp.
    pub fn complete(&mut self) {
        if !self.is_complete {
            self.is_complete = true;
            self.completed_at = Some(Utc::now());
        }
    }
}

/// Where the store is in its one-time load from durable storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum HydrationStatus {
    /// Not yet loaded; the published state is the default.
    Pending,
    /// Loaded (or nothing was stored and the default stands).
    Hydrated,
    /// The load failed; the default state stands.
    Failed(String),
}

impl HydrationStatus {
    /// Whether the flag can be trusted for routing.
    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// What subscribers observe: the live state plus its hydration status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreSnapshot {
    pub state: OnboardingState,
    pub hydration: HydrationStatus,
}

impl Default for StoreSnapshot {
    fn default() -> Self {
        Self {
            state: OnboardingState::default(),
            hydration: HydrationStatus::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_incomplete() {
        let state = OnboardingState::default();
        assert!(!state.is_complete);
        assert!(state.skill_level.is_none());
        assert!(state.goals.is_empty());
        assert!(state.completed_at.is_none());
    }

    #[test]
    fn complete_keeps_first_timestamp() {
        let mut state = OnboardingState::default();
        state.complete();
        let first = state.completed_at;
        assert!(state.is_complete);
        assert!(first.is_some());

        state.complete();
        assert_eq!(state.completed_at, first);
    }

    #[test]
    fn older_rows_without_answers_deserialize() {
        let parsed: OnboardingState = serde_json::from_str(r#"{"is_complete": true}"#).unwrap();
        assert!(parsed.is_complete);
        assert!(parsed.goals.is_empty());
    }

    #[test]
    fn hydration_status_serializes_with_reason() {
        let json = serde_json::to_value(HydrationStatus::Failed("disk".into())).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["reason"], "disk");

        let json = serde_json::to_value(HydrationStatus::Hydrated).unwrap();
        assert_eq!(json["status"], "hydrated");
    }

    #[test]
    fn only_pending_is_unsettled() {
        assert!(!HydrationStatus::Pending.is_settled());
        assert!(HydrationStatus::Hydrated.is_settled());
        assert!(HydrationStatus::Failed("x".into()).is_settled());
    }
}
