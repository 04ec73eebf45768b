//! Content records: tricks, learning paths and their modules.

use serde::{Deserialize, Serialize};

use crate::onboarding::SkillLevel;

/// How hard a trick or path is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl From<SkillLevel> for Difficulty {
    fn from(level: SkillLevel) -> Self {
        match level {
            SkillLevel::Beginner => Self::Beginner,
            SkillLevel::Intermediate => Self::Intermediate,
            SkillLevel::Advanced => Self::Advanced,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrickCategory {
    Fundamentals,
    Looping,
    StringTricks,
    Slacks,
}

impl TrickCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fundamentals => "Fundamentals",
            Self::Looping => "Looping",
            Self::StringTricks => "String tricks",
            Self::Slacks => "Slacks",
        }
    }
}

/// A single trick in the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trick {
    pub slug: String,
    pub name: String,
    pub difficulty: Difficulty,
    pub category: TrickCategory,
    pub summary: String,
    /// Ordered practice steps.
    pub steps: Vec<String>,
    pub tips: Vec<String>,
}

impl Trick {
    pub fn new(
        slug: &str,
        name: &str,
        difficulty: Difficulty,
        category: TrickCategory,
        summary: &str,
    ) -> Self {
        Self {
            slug: slug.to_string(),
            name: name.to_string(),
            difficulty,
            category,
            summary: summary.to_string(),
            steps: Vec::new(),
            tips: Vec::new(),
        }
    }

    pub fn with_steps(mut self, steps: &[&str]) -> Self {
        self.steps = steps.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_tips(mut self, tips: &[&str]) -> Self {
        self.tips = tips.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn detail_route(&self) -> String {
        format!("/tricks/{}", self.slug)
    }

    pub fn practice_route(&self) -> String {
        format!("/tricks/{}/practice", self.slug)
    }
}

/// A module inside a learning path: a themed group of tricks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathModule {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub trick_slugs: Vec<String>,
}

impl PathModule {
    pub fn new(id: &str, title: &str, summary: &str, trick_slugs: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            summary: summary.to_string(),
            trick_slugs: trick_slugs.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// A curated sequence of modules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LearningPath {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub level: Difficulty,
    pub modules: Vec<PathModule>,
}

impl LearningPath {
    pub fn route(&self) -> String {
        format!("/paths/{}", self.slug)
    }

    pub fn module_route(&self, module: &PathModule) -> String {
        format!("/paths/{}/modules/{}", self.slug, module.id)
    }

    pub fn trick_count(&self) -> usize {
        self.modules.iter().map(|m| m.trick_slugs.len()).sum()
    }
}
