//! Answers collected by the onboarding flow.

use serde::{Deserialize, Serialize};

/// Self-reported yo-yo experience.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Human-readable label for forms and the dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    pub fn blurb(&self) -> &'static str {
        match self {
            Self::Beginner => "I'm still learning to throw a solid sleeper.",
            Self::Intermediate => "I can bind and I know a handful of string tricks.",
            Self::Advanced => "I'm working on slacks, whips and competition combos.",
        }
    }
}

impl std::fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        };
        write!(f, "{s}")
    }
}

/// What the user wants out of the platform.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    LearnBasics,
    MasterStringTricks,
    Competition,
    JustForFun,
}

impl Goal {
    pub const ALL: [Goal; 4] = [
        Self::LearnBasics,
        Self::MasterStringTricks,
        Self::Competition,
        Self::JustForFun,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::LearnBasics => "Learn the basics",
            Self::MasterStringTricks => "Master string tricks",
            Self::Competition => "Train for competition",
            Self::JustForFun => "Just for fun",
        }
    }
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::LearnBasics => "learn_basics",
            Self::MasterStringTricks => "master_string_tricks",
            Self::Competition => "competition",
            Self::JustForFun => "just_for_fun",
        };
        write!(f, "{s}")
    }
}

/// Settings keys used for onboarding persistence.
pub mod settings_keys {
    /// Key for the OnboardingState JSON blob in the settings table.
    pub const ONBOARDING_STATE: &str = "onboarding_state";
    /// Default user ID (single-user deployment).
    pub const DEFAULT_USER: &str = "default";
}
