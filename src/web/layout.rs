//! Page shells: the HTML document plus the marketing, app and onboarding
//! chrome around page bodies.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use super::metadata::PageMetadata;
use crate::onboarding::OnboardingStep;
use crate::style::colors::{self, PRIMARY};
use crate::style::easing::{self, Easing};
use crate::style::cn;

/// Sidebar entries of the app shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Dashboard,
    Tricks,
    Paths,
}

impl NavItem {
    const ALL: [NavItem; 3] = [Self::Dashboard, Self::Tricks, Self::Paths];

    fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Tricks => "Trick library",
            Self::Paths => "Learning paths",
        }
    }

    fn href(&self) -> &'static str {
        match self {
            Self::Dashboard => "/dashboard",
            Self::Tricks => "/tricks",
            Self::Paths => "/paths",
        }
    }
}

fn base_css() -> String {
    format!(
        "{root}\
         body{{background:var(--color-surface);color:var(--color-ink)}}\
         a,button{{transition:{hover}}}\
         .yoyo-spinner{{width:3rem;height:3rem;border-radius:9999px;\
         border:4px solid {ring};border-top-color:{primary};\
         animation:yoyo-spin {spin}ms {spin_ease} infinite}}\
         @keyframes yoyo-spin{{to{{transform:rotate(360deg)}}}}",
        root = colors::root_css(),
        hover = easing::transition("color", easing::DURATION_FAST, Easing::EaseOut),
        ring = PRIMARY.with_alpha(0.2).unwrap_or_default(),
        primary = PRIMARY.var(),
        spin = easing::DURATION_SPIN.as_millis(),
        spin_ease = Easing::Snap.css(),
    )
}

/// The bare HTML document.
pub fn document(meta: &PageMetadata, head: Markup, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (meta.title()) }
                meta name="description" content=(meta.description);
                script src="https://cdn.tailwindcss.com" {}
                style { (PreEscaped(base_css())) }
                (head)
            }
            body class="min-h-screen antialiased" {
                (body)
            }
        }
    }
}

fn logo() -> Markup {
    html! {
        span class="text-xl font-bold text-[color:var(--color-primary)]" { "YoYo Academy" }
    }
}

/// Public pages: top navigation, content, footer.
pub fn marketing_shell(meta: &PageMetadata, body: Markup) -> Markup {
    document(
        meta,
        html! {},
        html! {
            header class="border-b border-gray-200 bg-white" {
                nav class="mx-auto flex h-16 max-w-6xl items-center justify-between px-4" {
                    a href="/" { (logo()) }
                    div class="flex items-center gap-6" {
                        a href="/about" class="font-medium text-gray-700 hover:text-gray-900" { "About" }
                        a href="/onboarding"
                            class="rounded-md bg-[color:var(--color-primary)] px-4 py-2 font-medium text-white" {
                            "Start learning"
                        }
                    }
                }
            }
            main class="mx-auto max-w-6xl px-4 py-12" { (body) }
            footer class="border-t border-gray-200 py-8 text-center text-sm text-gray-500" {
                "YoYo Academy. Keep your string fresh."
            }
        },
    )
}

/// Signed-in pages: sidebar navigation next to the content.
pub fn app_shell(meta: &PageMetadata, active: NavItem, body: Markup) -> Markup {
    let link = "block rounded-md px-3 py-2 text-sm font-medium text-gray-700 hover:bg-gray-100";
    document(
        meta,
        html! {},
        html! {
            div class="flex min-h-screen" {
                aside class="w-64 shrink-0 border-r border-gray-200 bg-white p-6" {
                    a href="/" class="mb-8 block" { (logo()) }
                    nav class="space-y-1" aria-label="Main" {
                        @for item in NavItem::ALL {
                            @let current = item == active;
                            a href=(item.href())
                                class=(cn([link, if current { "bg-gray-100 text-gray-900" } else { "" }]))
                                aria-current=[current.then_some("page")] {
                                (item.label())
                            }
                        }
                    }
                }
                main class="flex-1 px-8 py-10" { (body) }
            }
        },
    )
}

/// Onboarding pages: a single centered card with step progress.
pub fn onboarding_shell(
    meta: &PageMetadata,
    step: Option<OnboardingStep>,
    head: Markup,
    body: Markup,
) -> Markup {
    document(
        meta,
        head,
        html! {
            div class="flex min-h-screen flex-col items-center justify-center px-4" {
                div class="mb-8" { (logo()) }
                div class="w-full max-w-xl rounded-xl bg-white p-8 shadow-md" {
                    @if let Some(step) = step {
                        (progress(step))
                    }
                    (body)
                }
            }
        },
    )
}

fn progress(step: OnboardingStep) -> Markup {
    let total = OnboardingStep::ALL.len();
    html! {
        ol class="mb-6 flex gap-2" aria-label=(format!("Step {} of {}", step.position(), total)) {
            @for s in OnboardingStep::ALL {
                li class=(cn([
                    "h-1.5 flex-1 rounded-full bg-gray-200",
                    if s.position() <= step.position() { "bg-[color:var(--color-primary)]" } else { "" },
                ])) {}
            }
        }
    }
}
