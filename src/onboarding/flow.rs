//! Onboarding steps: the linear sequence the user walks through.

use serde::{Deserialize, Serialize};

/// The onboarding steps, in order.
///
/// Progresses linearly: Welcome → SkillLevel → Goals → Ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OnboardingStep {
    Welcome,
    SkillLevel,
    Goals,
    Ready,
}

impl OnboardingStep {
    pub const ALL: [OnboardingStep; 4] = [Self::Welcome, Self::SkillLevel, Self::Goals, Self::Ready];

    /// The step the gate sends new users to.
    pub const FIRST: OnboardingStep = Self::Welcome;

    pub fn next(&self) -> Option<OnboardingStep> {
        use OnboardingStep::*;
        match self {
            Welcome => Some(SkillLevel),
            SkillLevel => Some(Goals),
            Goals => Some(Ready),
            Ready => None,
        }
    }

    pub fn previous(&self) -> Option<OnboardingStep> {
        use OnboardingStep::*;
        match self {
            Welcome => None,
            SkillLevel => Some(Welcome),
            Goals => Some(SkillLevel),
            Ready => Some(Goals),
        }
    }

    /// URL segment, e.g. `skill-level`.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::SkillLevel => "skill-level",
            Self::Goals => "goals",
            Self::Ready => "ready",
        }
    }

    pub fn from_slug(slug: &str) -> Option<OnboardingStep> {
        Self::ALL.into_iter().find(|step| step.slug() == slug)
    }

    /// Full route path of this step.
    pub fn route(&self) -> String {
        format!("/onboarding/{}", self.slug())
    }

    /// 1-based position, for progress indicators.
    pub fn position(&self) -> usize {
        Self::ALL
            .iter()
            .position(|step| step == self)
            .map(|i| i + 1)
            .unwrap_or(1)
    }
}

impl std::fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}
