//! Utility-class merging.
//!
//! `cn` joins class lists and resolves conflicting utilities so that the
//! last one wins, the way the stylesheet would apply them. Only the utility
//! families the site uses are classified; anything unknown is kept unless it
//! is an exact duplicate.

use std::collections::HashSet;

/// Merge class lists. Empty entries are skipped, duplicates collapse, and
/// within a conflict group (scoped by variant prefix) the last class wins.
pub fn cn<I, S>(classes: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let tokens: Vec<String> = classes
        .into_iter()
        .flat_map(|s| {
            s.as_ref()
                .split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect();

    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut kept: Vec<&str> = Vec::with_capacity(tokens.len());

    for token in tokens.iter().rev() {
        let (variant, utility) = split_variant(token);
        let group = match class_group(utility) {
            Some(group) => group.to_string(),
            None => format!("={utility}"),
        };
        if seen.contains(&(variant.to_string(), group.clone())) {
            continue;
        }
        for covered in covered_groups(&group) {
            seen.insert((variant.to_string(), covered.to_string()));
        }
        seen.insert((variant.to_string(), group));
        kept.push(token);
    }

    kept.reverse();
    kept.join(" ")
}

/// Split `md:hover:px-4` into (`md:hover`, `px-4`). Colons inside arbitrary
/// values (`bg-[url(a:b)]`) are not variant separators.
fn split_variant(token: &str) -> (&str, &str) {
    let mut depth = 0i32;
    let mut split = None;
    for (i, c) in token.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth -= 1,
            ':' if depth == 0 => split = Some(i),
            _ => {}
        }
    }
    match split {
        Some(i) => (&token[..i], &token[i + 1..]),
        None => ("", token),
    }
}

const DISPLAY: &[&str] = &[
    "block", "inline-block", "inline", "flex", "inline-flex", "grid", "inline-grid", "contents",
    "hidden", "table",
];
const POSITION: &[&str] = &["static", "fixed", "absolute", "relative", "sticky"];
const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const FONT_WEIGHTS: &[&str] = &[
    "thin", "extralight", "light", "normal", "medium", "semibold", "bold", "extrabold", "black",
];

/// Prefix families, longest prefix first so `px-` is matched before `p-`.
const PREFIX_GROUPS: &[(&str, &str)] = &[
    ("px-", "px"),
    ("py-", "py"),
    ("pt-", "pt"),
    ("pr-", "pr"),
    ("pb-", "pb"),
    ("pl-", "pl"),
    ("p-", "p"),
    ("mx-", "mx"),
    ("my-", "my"),
    ("mt-", "mt"),
    ("mr-", "mr"),
    ("mb-", "mb"),
    ("ml-", "ml"),
    ("m-", "m"),
    ("gap-x-", "gap-x"),
    ("gap-y-", "gap-y"),
    ("gap-", "gap"),
    ("min-w-", "min-w"),
    ("max-w-", "max-w"),
    ("min-h-", "min-h"),
    ("max-h-", "max-h"),
    ("w-", "w"),
    ("h-", "h"),
    ("bg-", "bg-color"),
    ("items-", "align-items"),
    ("justify-", "justify-content"),
    ("opacity-", "opacity"),
    ("z-", "z"),
    ("duration-", "duration"),
    ("ease-", "ease"),
    ("grid-cols-", "grid-cols"),
];

/// The conflict group a utility (without variant) belongs to.
fn class_group(utility: &str) -> Option<&'static str> {
    let utility = utility.strip_prefix('-').unwrap_or(utility);

    if DISPLAY.contains(&utility) {
        return Some("display");
    }
    if POSITION.contains(&utility) {
        return Some("position");
    }
    if utility == "rounded" || utility.starts_with("rounded-") {
        return Some("rounded");
    }
    if utility == "shadow" || utility.starts_with("shadow-") {
        return Some("shadow");
    }
    if let Some(rest) = utility.strip_prefix("text-") {
        if FONT_SIZES.contains(&rest) {
            return Some("font-size");
        }
        if TEXT_ALIGN.contains(&rest) {
            return Some("text-align");
        }
        return Some("text-color");
    }
    if let Some(rest) = utility.strip_prefix("font-") {
        if FONT_WEIGHTS.contains(&rest) {
            return Some("font-weight");
        }
        return Some("font-family");
    }
    if utility == "border" {
        return Some("border-width");
    }
    if let Some(rest) = utility.strip_prefix("border-") {
        if rest.chars().all(|c| c.is_ascii_digit()) {
            return Some("border-width");
        }
        return Some("border-color");
    }

    PREFIX_GROUPS
        .iter()
        .find(|(prefix, _)| utility.starts_with(prefix))
        .map(|(_, group)| *group)
}

/// Groups that a later class in `group` overrides in addition to its own.
fn covered_groups(group: &str) -> &'static [&'static str] {
    match group {
        "p" => &["px", "py", "pt", "pr", "pb", "pl"],
        "px" => &["pr", "pl"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "mt", "mr", "mb", "ml"],
        "mx" => &["mr", "ml"],
        "my" => &["mt", "mb"],
        "gap" => &["gap-x", "gap-y"],
        _ => &[],
    }
}
