//! Page bodies. Every function here is pure: it takes the data to show and
//! returns the finished document.

use maud::{Markup, html};

use super::layout::{self, NavItem};
use super::metadata::PageMetadata;
use crate::content::{Catalog, Difficulty, LearningPath, PathModule, Trick};
use crate::onboarding::{Goal, OnboardingState, OnboardingStep, SkillLevel};
use crate::style::cn;

const BUTTON: &str = "inline-flex items-center rounded-md bg-[color:var(--color-primary)] px-5 py-2.5 font-medium text-white hover:bg-[color:var(--color-primary-dark)]";
const BUTTON_GHOST: &str = "inline-flex items-center rounded-md border border-gray-300 px-5 py-2.5 font-medium text-gray-700 hover:bg-gray-50";
const CARD: &str = "block rounded-lg border border-gray-200 bg-white p-5 shadow-sm hover:shadow-md";

fn difficulty_badge(difficulty: Difficulty) -> Markup {
    let tone = match difficulty {
        Difficulty::Beginner => "bg-green-100 text-green-800",
        Difficulty::Intermediate => "bg-yellow-100 text-yellow-800",
        Difficulty::Advanced => "bg-red-100 text-red-800",
    };
    html! {
        span class=(cn(["rounded-full px-2.5 py-0.5 text-xs font-medium", tone])) {
            (difficulty.label())
        }
    }
}

fn trick_card(trick: &Trick) -> Markup {
    html! {
        a href=(trick.detail_route()) class=(CARD) {
            div class="mb-2 flex items-center justify-between" {
                h3 class="font-semibold" { (trick.name) }
                (difficulty_badge(trick.difficulty))
            }
            p class="text-sm text-gray-600" { (trick.summary) }
        }
    }
}

fn path_card(path: &LearningPath) -> Markup {
    html! {
        a href=(path.route()) class=(CARD) {
            div class="mb-2 flex items-center justify-between" {
                h3 class="font-semibold" { (path.title) }
                (difficulty_badge(path.level))
            }
            p class="text-sm text-gray-600" { (path.description) }
            p class="mt-3 text-xs text-gray-500" {
                (path.modules.len()) " modules · " (path.trick_count()) " tricks"
            }
        }
    }
}

// ── Marketing ───────────────────────────────────────────────────────────

pub fn landing(catalog: &Catalog) -> Markup {
    layout::marketing_shell(
        &PageMetadata::home(),
        html! {
            section class="py-16 text-center" {
                h1 class="mb-6 text-5xl font-extrabold" { "Throw better, one trick at a time" }
                p class="mx-auto mb-10 max-w-2xl text-xl text-gray-600" {
                    "Step-by-step lessons and learning paths for every level, from your first sleeper to competition slack."
                }
                div class="flex justify-center gap-4" {
                    a href="/onboarding" class=(BUTTON) { "Start learning" }
                    a href="/tricks" class=(BUTTON_GHOST) { "Browse tricks" }
                }
            }
            section class="grid grid-cols-1 gap-6 md:grid-cols-3" {
                @for path in catalog.paths() {
                    (path_card(path))
                }
            }
        },
    )
}

pub fn about() -> Markup {
    layout::marketing_shell(
        &PageMetadata::new("About", "Who we are and how YoYo Academy teaches."),
        html! {
            article class="mx-auto max-w-2xl space-y-4" {
                h1 class="text-3xl font-bold" { "About YoYo Academy" }
                p { "YoYo Academy breaks every trick into small, repeatable steps so you always know what to practice next." }
                p { "Tell us where you're at and we'll recommend a learning path. You can always browse the full trick library." }
            }
        },
    )
}

// ── App ─────────────────────────────────────────────────────────────────

pub fn dashboard(state: &OnboardingState, catalog: &Catalog) -> Markup {
    let recommended = catalog.recommended_path(state.skill_level);
    layout::app_shell(
        &PageMetadata::new("Dashboard", "Your progress and what to practice next."),
        NavItem::Dashboard,
        html! {
            h1 class="mb-2 text-3xl font-bold" { "Your dashboard" }
            @if let Some(level) = state.skill_level {
                p class="mb-8 text-gray-600" { "Skill level: " (level.label()) }
            }
            @if !state.goals.is_empty() {
                ul class="mb-8 flex flex-wrap gap-2" {
                    @for goal in &state.goals {
                        li class="rounded-full bg-gray-100 px-3 py-1 text-sm" { (goal.label()) }
                    }
                }
            }
            @if let Some(path) = recommended {
                section {
                    h2 class="mb-4 text-xl font-semibold" { "Recommended for you" }
                    (path_card(path))
                }
            }
        },
    )
}

pub fn trick_library(catalog: &Catalog, filter: Option<Difficulty>) -> Markup {
    let tricks: Vec<&Trick> = match filter {
        Some(difficulty) => catalog.tricks_by_difficulty(difficulty),
        None => catalog.tricks().iter().collect(),
    };
    let chip = "rounded-full border border-gray-300 px-3 py-1 text-sm";
    layout::app_shell(
        &PageMetadata::new("Trick library", "Every trick, sorted by difficulty."),
        NavItem::Tricks,
        html! {
            h1 class="mb-6 text-3xl font-bold" { "Trick library" }
            nav class="mb-6 flex gap-2" aria-label="Filter by difficulty" {
                a href="/tricks" class=(cn([chip, if filter.is_none() { "border-gray-900" } else { "" }])) { "All" }
                @for difficulty in Difficulty::ALL {
                    @let selected = filter == Some(difficulty);
                    a href=(format!("/tricks?difficulty={}", serde_label(difficulty)))
                        class=(cn([chip, if selected { "border-gray-900" } else { "" }])) {
                        (difficulty.label())
                    }
                }
            }
            @if tricks.is_empty() {
                p class="text-gray-600" { "No tricks at this level yet." }
            } @else {
                div class="grid grid-cols-1 gap-4 md:grid-cols-2" {
                    @for trick in tricks {
                        (trick_card(trick))
                    }
                }
            }
        },
    )
}

fn serde_label(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Beginner => "beginner",
        Difficulty::Intermediate => "intermediate",
        Difficulty::Advanced => "advanced",
    }
}

pub fn trick_detail(trick: &Trick) -> Markup {
    layout::app_shell(
        &PageMetadata::new(trick.name.clone(), trick.summary.clone()),
        NavItem::Tricks,
        html! {
            a href="/tricks" class="text-sm text-gray-500 hover:text-gray-700" { "← All tricks" }
            div class="mb-6 mt-4 flex items-center gap-3" {
                h1 class="text-3xl font-bold" { (trick.name) }
                (difficulty_badge(trick.difficulty))
            }
            p class="mb-2 text-sm uppercase tracking-wide text-gray-500" { (trick.category.label()) }
            p class="mb-8 text-lg text-gray-700" { (trick.summary) }
            @if !trick.tips.is_empty() {
                section class="mb-8" {
                    h2 class="mb-3 text-xl font-semibold" { "Tips" }
                    ul class="list-disc space-y-1 pl-6" {
                        @for tip in &trick.tips {
                            li { (tip) }
                        }
                    }
                }
            }
            a href=(trick.practice_route()) class=(BUTTON) { "Practice this trick" }
        },
    )
}

pub fn trick_practice(trick: &Trick) -> Markup {
    layout::app_shell(
        &PageMetadata::new(format!("Practice {}", trick.name), trick.summary.clone()),
        NavItem::Tricks,
        html! {
            a href=(trick.detail_route()) class="text-sm text-gray-500 hover:text-gray-700" { "← " (trick.name) }
            h1 class="mb-6 mt-4 text-3xl font-bold" { "Practice: " (trick.name) }
            ol class="space-y-4" {
                @for (i, step) in trick.steps.iter().enumerate() {
                    li class="flex gap-4 rounded-lg border border-gray-200 bg-white p-4" {
                        span class="flex h-8 w-8 shrink-0 items-center justify-center rounded-full bg-gray-100 font-semibold" {
                            (i + 1)
                        }
                        p { (step) }
                    }
                }
            }
        },
    )
}

pub fn path_list(catalog: &Catalog) -> Markup {
    layout::app_shell(
        &PageMetadata::new("Learning paths", "Curated sequences of tricks for every level."),
        NavItem::Paths,
        html! {
            h1 class="mb-6 text-3xl font-bold" { "Learning paths" }
            div class="grid grid-cols-1 gap-4 md:grid-cols-2" {
                @for path in catalog.paths() {
                    (path_card(path))
                }
            }
        },
    )
}

pub fn path_detail(path: &LearningPath) -> Markup {
    layout::app_shell(
        &PageMetadata::new(path.title.clone(), path.description.clone()),
        NavItem::Paths,
        html! {
            a href="/paths" class="text-sm text-gray-500 hover:text-gray-700" { "← All paths" }
            div class="mb-4 mt-4 flex items-center gap-3" {
                h1 class="text-3xl font-bold" { (path.title) }
                (difficulty_badge(path.level))
            }
            p class="mb-8 text-lg text-gray-700" { (path.description) }
            ol class="space-y-3" {
                @for (i, module) in path.modules.iter().enumerate() {
                    li {
                        a href=(path.module_route(module)) class=(CARD) {
                            p class="text-xs uppercase tracking-wide text-gray-500" { "Module " (i + 1) }
                            h2 class="font-semibold" { (module.title) }
                            p class="text-sm text-gray-600" { (module.summary) }
                        }
                    }
                }
            }
        },
    )
}

pub fn module_detail(catalog: &Catalog, path: &LearningPath, module: &PathModule) -> Markup {
    layout::app_shell(
        &PageMetadata::new(
            format!("{} · {}", module.title, path.title),
            module.summary.clone(),
        ),
        NavItem::Paths,
        html! {
            a href=(path.route()) class="text-sm text-gray-500 hover:text-gray-700" { "← " (path.title) }
            h1 class="mb-2 mt-4 text-3xl font-bold" { (module.title) }
            p class="mb-8 text-gray-700" { (module.summary) }
            div class="grid grid-cols-1 gap-4 md:grid-cols-2" {
                @for trick in catalog.module_tricks(module) {
                    (trick_card(trick))
                }
            }
        },
    )
}

pub fn not_found() -> Markup {
    layout::marketing_shell(
        &PageMetadata::new("Page not found", "This page does not exist."),
        html! {
            div class="py-24 text-center" {
                h1 class="mb-4 text-6xl font-bold" { "404" }
                p class="mb-8 text-xl text-gray-600" { "That trick isn't in our library." }
                a href="/" class="text-[color:var(--color-primary)] underline" { "Back to the start" }
            }
        },
    )
}

// ── Onboarding ──────────────────────────────────────────────────────────

pub fn onboarding_step(step: OnboardingStep, state: &OnboardingState) -> Markup {
    let (title, body) = match step {
        OnboardingStep::Welcome => ("Welcome", welcome_step()),
        OnboardingStep::SkillLevel => ("Your level", skill_level_step(state.skill_level)),
        OnboardingStep::Goals => ("Your goals", goals_step(&state.goals)),
        OnboardingStep::Ready => ("You're ready", ready_step(state)),
    };
    layout::onboarding_shell(
        &PageMetadata::new(title, "Set up YoYo Academy in a few quick steps."),
        Some(step),
        html! {},
        html! {
            (body)
            @if let Some(previous) = step.previous() {
                a href=(previous.route()) class="mt-6 inline-block text-sm text-gray-500 hover:text-gray-700" { "← Back" }
            }
        },
    )
}

fn welcome_step() -> Markup {
    let next = OnboardingStep::Welcome.next().unwrap_or(OnboardingStep::FIRST);
    html! {
        h1 class="mb-4 text-3xl font-bold" { "Welcome to YoYo Academy" }
        p class="mb-8 text-gray-600" {
            "Answer two quick questions and we'll point you at the right tricks."
        }
        a href=(next.route()) class=(BUTTON) { "Get started" }
    }
}

fn skill_level_step(selected: Option<SkillLevel>) -> Markup {
    html! {
        h1 class="mb-6 text-2xl font-bold" { "How would you describe your throwing?" }
        form method="post" action="/onboarding/skill-level" class="space-y-3" {
            @for level in SkillLevel::ALL {
                label class="flex cursor-pointer gap-3 rounded-lg border border-gray-200 p-4 hover:bg-gray-50" {
                    input type="radio" name="skill_level" value=(level) required
                        checked[selected == Some(level)];
                    span {
                        span class="block font-medium" { (level.label()) }
                        span class="block text-sm text-gray-600" { (level.blurb()) }
                    }
                }
            }
            button type="submit" class=(cn([BUTTON, "mt-4"])) { "Continue" }
        }
    }
}

fn goals_step(selected: &[Goal]) -> Markup {
    html! {
        h1 class="mb-6 text-2xl font-bold" { "What do you want to get out of it?" }
        form method="post" action="/onboarding/goals" class="space-y-3" {
            @for goal in Goal::ALL {
                label class="flex cursor-pointer items-center gap-3 rounded-lg border border-gray-200 p-4 hover:bg-gray-50" {
                    input type="checkbox" name="goal" value=(goal) checked[selected.contains(&goal)];
                    span class="font-medium" { (goal.label()) }
                }
            }
            button type="submit" class=(cn([BUTTON, "mt-4"])) { "Continue" }
        }
    }
}

fn ready_step(state: &OnboardingState) -> Markup {
    html! {
        h1 class="mb-4 text-2xl font-bold" { "You're all set" }
        dl class="mb-8 space-y-2 text-gray-700" {
            div class="flex gap-2" {
                dt class="font-medium" { "Level:" }
                dd { (state.skill_level.map(|l| l.label()).unwrap_or("Not set")) }
            }
            div class="flex gap-2" {
                dt class="font-medium" { "Goals:" }
                dd {
                    @if state.goals.is_empty() {
                        "None picked"
                    } @else {
                        (state.goals.iter().map(|g| g.label()).collect::<Vec<_>>().join(", "))
                    }
                }
            }
        }
        div class="flex gap-3" {
            form method="post" action="/onboarding/finish" {
                button type="submit" class=(BUTTON) { "Go to my dashboard" }
            }
            form method="post" action="/onboarding/reset" {
                button type="submit" class=(BUTTON_GHOST) { "Start over" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn dashboard_recommends_by_level() {
        let state = OnboardingState {
            skill_level: Some(SkillLevel::Advanced),
            goals: vec![Goal::Competition],
            ..Default::default()
        };
        let html = dashboard(&state, &catalog()).into_string();
        assert!(html.contains("Your dashboard"));
        assert!(html.contains("Competition Ready"));
        assert!(html.contains("Train for competition"));
    }

    #[test]
    fn dashboard_without_answers_still_recommends() {
        let html = dashboard(&OnboardingState::default(), &catalog()).into_string();
        assert!(html.contains("First Throws"));
    }

    #[test]
    fn library_filter() {
        let catalog = catalog();
        let all = trick_library(&catalog, None).into_string();
        let advanced = trick_library(&catalog, Some(Difficulty::Advanced)).into_string();
        assert!(all.contains("Sleeper"));
        assert!(!advanced.contains(r#"href="/tricks/sleeper""#));
        assert!(advanced.contains(r#"href="/tricks/whip""#));
    }

    #[test]
    fn trick_pages() {
        let catalog = catalog();
        let trick = catalog.trick("sleeper").unwrap();
        let detail = trick_detail(trick).into_string();
        assert!(detail.contains("<title>Sleeper | YoYo Academy</title>"));
        assert!(detail.contains(r#"href="/tricks/sleeper/practice""#));

        let practice = trick_practice(trick).into_string();
        for step in &trick.steps {
            assert!(practice.contains(step.as_str()));
        }
    }

    #[test]
    fn module_page_lists_its_tricks() {
        let catalog = catalog();
        let (path, module) = catalog.module("first-throws", "first-tricks").unwrap();
        let html = module_detail(&catalog, path, module).into_string();
        assert!(html.contains("Walk the Dog"));
        assert!(!html.contains("Split the Atom"));
    }

    #[test]
    fn skill_level_step_preselects_answer() {
        let state = OnboardingState {
            skill_level: Some(SkillLevel::Intermediate),
            ..Default::default()
        };
        let html = onboarding_step(OnboardingStep::SkillLevel, &state).into_string();
        assert!(html.contains(r#"action="/onboarding/skill-level""#));
        assert!(html.contains(r#"value="intermediate" required checked"#));
        assert!(html.contains(r#"href="/onboarding/welcome""#));
    }

    #[test]
    fn ready_step_offers_finish_and_reset() {
        let html = onboarding_step(OnboardingStep::Ready, &OnboardingState::default()).into_string();
        assert!(html.contains(r#"action="/onboarding/finish""#));
        assert!(html.contains(r#"action="/onboarding/reset""#));
        assert!(html.contains("None picked"));
    }

    #[test]
    fn welcome_step_has_no_back_link() {
        let html = onboarding_step(OnboardingStep::Welcome, &OnboardingState::default()).into_string();
        assert!(html.contains("Welcome to YoYo Academy"));
        assert!(html.contains(r#"href="/onboarding/skill-level""#));
        assert!(!html.contains("← Back"));
    }
}
