//! Loading indicator shown while the onboarding gate waits on hydration.
//!
//! The indicator deliberately carries no navigation: no links, forms or
//! buttons, and nothing from the pages the gate might lead to.

use maud::{Markup, html};

use super::layout;
use super::metadata::PageMetadata;

/// Seconds before the gate page reloads itself to ask again.
pub const GATE_REFRESH_SECS: u32 = 1;

/// Spinner with a screen-reader label.
pub fn loading_screen(message: &str) -> Markup {
    html! {
        div class="flex min-h-[60vh] flex-col items-center justify-center gap-4"
            role="status" aria-busy="true" aria-live="polite" {
            div class="yoyo-spinner" aria-hidden="true" {}
            p class="text-sm text-[color:var(--color-muted)]" { (message) }
        }
    }
}

/// Full page served by `GET /onboarding` while the gate is still unresolved.
/// It refreshes itself so the next request can pick up the decision.
pub fn gate_loading_page(body: Markup) -> Markup {
    let head = html! {
        meta http-equiv="refresh" content=(GATE_REFRESH_SECS);
    };
    layout::onboarding_shell(
        &PageMetadata::new("Getting ready", "Checking your progress."),
        None,
        head,
        body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_is_accessible_and_inert() {
        let html = loading_screen("Checking your progress").into_string();
        assert!(html.contains(r#"role="status""#));
        assert!(html.contains(r#"aria-busy="true""#));
        assert!(html.contains("Checking your progress"));
        for tag in ["<a ", "<form", "<button"] {
            assert!(!html.contains(tag), "indicator contains {tag}");
        }
    }

    #[test]
    fn gate_page_refreshes() {
        let html = gate_loading_page(loading_screen("Checking your progress")).into_string();
        assert!(html.contains(r#"http-equiv="refresh""#));
        assert!(html.contains("<title>Getting ready | YoYo Academy</title>"));
        assert!(!html.contains("<form"));
    }
}
