//! The in-memory content catalog and its lookups.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ContentError;
use crate::onboarding::SkillLevel;

use super::model::{Difficulty, LearningPath, PathModule, Trick, TrickCategory};

static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("slug pattern compiles"));

/// Immutable catalog of tricks and learning paths.
#[derive(Debug, Clone)]
pub struct Catalog {
    tricks: Vec<Trick>,
    paths: Vec<LearningPath>,
}

impl Catalog {
    /// Build a catalog, rejecting malformed slugs, duplicates, and module
    /// references to tricks that do not exist.
    pub fn new(tricks: Vec<Trick>, paths: Vec<LearningPath>) -> Result<Self, ContentError> {
        let mut trick_slugs = HashSet::new();
        for trick in &tricks {
            check_slug(&trick.slug)?;
            if !trick_slugs.insert(trick.slug.as_str()) {
                return Err(ContentError::DuplicateSlug {
                    kind: "trick",
                    slug: trick.slug.clone(),
                });
            }
        }

        let mut path_slugs = HashSet::new();
        for path in &paths {
            check_slug(&path.slug)?;
            if !path_slugs.insert(path.slug.as_str()) {
                return Err(ContentError::DuplicateSlug {
                    kind: "path",
                    slug: path.slug.clone(),
                });
            }

            let mut module_ids = HashSet::new();
            for module in &path.modules {
                check_slug(&module.id)?;
                if !module_ids.insert(module.id.as_str()) {
                    return Err(ContentError::DuplicateModule {
                        path: path.slug.clone(),
                        module_id: module.id.clone(),
                    });
                }
                if let Some(missing) = module
                    .trick_slugs
                    .iter()
                    .find(|slug| !trick_slugs.contains(slug.as_str()))
                {
                    return Err(ContentError::UnknownTrick {
                        path: path.slug.clone(),
                        module_id: module.id.clone(),
                        trick: missing.clone(),
                    });
                }
            }
        }

        Ok(Self { tricks, paths })
    }

    pub fn tricks(&self) -> &[Trick] {
        &self.tricks
    }

    pub fn paths(&self) -> &[LearningPath] {
        &self.paths
    }

    pub fn trick(&self, slug: &str) -> Option<&Trick> {
        self.tricks.iter().find(|t| t.slug == slug)
    }

    pub fn path(&self, slug: &str) -> Option<&LearningPath> {
        self.paths.iter().find(|p| p.slug == slug)
    }

    pub fn module(&self, path_slug: &str, module_id: &str) -> Option<(&LearningPath, &PathModule)> {
        let path = self.path(path_slug)?;
        let module = path.modules.iter().find(|m| m.id == module_id)?;
        Some((path, module))
    }

    pub fn tricks_by_difficulty(&self, difficulty: Difficulty) -> Vec<&Trick> {
        self.tricks
            .iter()
            .filter(|t| t.difficulty == difficulty)
            .collect()
    }

    /// Resolve a module's trick slugs to tricks, in module order.
    pub fn module_tricks(&self, module: &PathModule) -> Vec<&Trick> {
        module
            .trick_slugs
            .iter()
            .filter_map(|slug| self.trick(slug))
            .collect()
    }

    /// The first path at the user's level, or the first path at all when
    /// no level is known.
    pub fn recommended_path(&self, level: Option<SkillLevel>) -> Option<&LearningPath> {
        match level {
            Some(level) => {
                let difficulty = Difficulty::from(level);
                self.paths
                    .iter()
                    .find(|p| p.level == difficulty)
                    .or_else(|| self.paths.first())
            }
            None => self.paths.first(),
        }
    }

    /// The built-in catalog served by the site.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::new(builtin_tricks(), builtin_paths())
    }
}

fn check_slug(slug: &str) -> Result<(), ContentError> {
    if SLUG_RE.is_match(slug) {
        Ok(())
    } else {
        Err(ContentError::InvalidSlug {
            slug: slug.to_string(),
            reason: "expected lowercase words separated by single hyphens".to_string(),
        })
    }
}

fn builtin_tricks() -> Vec<Trick> {
    use Difficulty::*;
    use TrickCategory::*;

    vec![
        Trick::new("gravity-pull", "Gravity Pull", Beginner, Fundamentals,
            "The very first throw: drop the yo-yo and tug it back to your hand.")
            .with_steps(&[
                "Wind the string and slip the slipknot onto your middle finger.",
                "Hold the yo-yo palm up with the string coming over the top.",
                "Let it fall, and give a light tug as it reaches the bottom.",
                "Catch it palm down as it climbs back up.",
            ])
            .with_tips(&["Keep your wrist loose; the tug is small."]),
        Trick::new("sleeper", "Sleeper", Beginner, Fundamentals,
            "Throw hard enough that the yo-yo spins at the end of the string.")
            .with_steps(&[
                "Start with your arm bent like you're showing off a bicep.",
                "Throw down firmly, snapping your wrist at the end.",
                "Turn your palm down and let the yo-yo spin.",
                "Give a short tug to bring it back.",
            ])
            .with_tips(&[
                "Aim for a straight throw; a tilted yo-yo won't sleep long.",
                "Count how long it sleeps and try to beat it.",
            ]),
        Trick::new("forward-pass", "Forward Pass", Beginner, Fundamentals,
            "Swing the yo-yo out in front of you and catch it on the way back.")
            .with_steps(&[
                "Hold the yo-yo at your side, palm facing behind you.",
                "Swing your arm forward and release the yo-yo toward the floor in front.",
                "Turn your palm up as it returns and catch it.",
            ]),
        Trick::new("walk-the-dog", "Walk the Dog", Beginner, Fundamentals,
            "Let a sleeping yo-yo roll along the floor before pulling it back.")
            .with_steps(&[
                "Throw a strong sleeper.",
                "Lower the yo-yo gently until it touches the floor.",
                "Let it roll forward, then tug to return it.",
            ])
            .with_tips(&["Practice on carpet first; hard floors scratch."]),
        Trick::new("breakaway", "Breakaway", Beginner, Fundamentals,
            "A sideways throw that swings the yo-yo across your body.")
            .with_steps(&[
                "Flex your arm with the yo-yo held at shoulder height.",
                "Throw sideways, releasing toward the outside.",
                "Let the yo-yo swing in an arc across the front of your body.",
            ]),
        Trick::new("around-the-world", "Around the World", Intermediate, Fundamentals,
            "A full overhead loop with a sleeping yo-yo.")
            .with_steps(&[
                "Throw a strong forward pass.",
                "Let the yo-yo travel out and follow it around in a big circle.",
                "Tug it back as it comes around to the front.",
            ])
            .with_tips(&["Clear the space around you before trying this."]),
        Trick::new("rock-the-baby", "Rock the Baby", Intermediate, StringTricks,
            "Form a cradle with the string and rock the sleeping yo-yo through it.")
            .with_steps(&[
                "Throw a long sleeper.",
                "Pinch the string about halfway down and bring it up over your hand.",
                "Spread the string into a triangle with your fingers.",
                "Rock the yo-yo back and forth, then drop the cradle and return it.",
            ]),
        Trick::new("trapeze", "Trapeze", Intermediate, StringTricks,
            "Land the yo-yo on the string stretched between your hands.")
            .with_steps(&[
                "Throw a breakaway.",
                "Hold your non-throwing index finger out in the string's path.",
                "Let the yo-yo swing over the finger and land on the string.",
            ])
            .with_tips(&["Keep the yo-yo's plane straight as it swings over."]),
        Trick::new("bind", "Bind Return", Intermediate, StringTricks,
            "Bring back an unresponsive yo-yo by snagging the string.")
            .with_steps(&[
                "Throw a sleeper.",
                "Swing the string around your non-throwing hand to form a loop.",
                "Let the loop catch on the spinning yo-yo and pull it up.",
            ]),
        Trick::new("double-or-nothing", "Double or Nothing", Advanced, StringTricks,
            "A trapeze that wraps around both fingers before landing.")
            .with_steps(&[
                "Throw a breakaway.",
                "Swing the yo-yo over your non-throwing finger.",
                "Let it wrap over your throwing finger as well.",
                "Land it on the outermost string.",
            ]),
        Trick::new("split-the-atom", "Split the Atom", Advanced, StringTricks,
            "Swing the yo-yo around and through the string to land a trapeze.")
            .with_steps(&[
                "Throw a strong sleeper and let it swing in front.",
                "Swing the yo-yo around your non-throwing hand.",
                "Bring it through the gap and land a trapeze.",
            ]),
        Trick::new("loop-the-loop", "Loop the Loop", Intermediate, Looping,
            "Throw the yo-yo forward and let it loop over your wrist repeatedly.")
            .with_steps(&[
                "Throw a forward pass.",
                "As it returns, flick your wrist to send it back out.",
                "Keep the rhythm going for several loops.",
            ]),
        Trick::new("whip", "Whip", Advanced, Slacks,
            "Throw a loop of slack string that lands back on the yo-yo.")
            .with_steps(&[
                "Start from a trapeze.",
                "Swing the string with your throwing hand to create slack.",
                "Let the slack loop land over the yo-yo.",
            ])
            .with_tips(&["Small, quick movements make cleaner slack."]),
    ]
}

fn builtin_paths() -> Vec<LearningPath> {
    vec![
        LearningPath {
            slug: "first-throws".to_string(),
            title: "First Throws".to_string(),
            description: "Everything you need to go from a new yo-yo to a confident sleeper.".to_string(),
            level: Difficulty::Beginner,
            modules: vec![
                PathModule::new("getting-started", "Getting Started",
                    "Set up the string and learn the basic throw.",
                    &["gravity-pull", "sleeper"]),
                PathModule::new("first-tricks", "First Tricks",
                    "Put the sleeper to work.",
                    &["forward-pass", "walk-the-dog", "breakaway"]),
            ],
        },
        LearningPath {
            slug: "string-tricks".to_string(),
            title: "String Tricks".to_string(),
            description: "Cradles, mounts and binds: the foundation of modern string play.".to_string(),
            level: Difficulty::Intermediate,
            modules: vec![
                PathModule::new("classics", "Classics",
                    "The tricks everybody asks to see.",
                    &["around-the-world", "rock-the-baby", "loop-the-loop"]),
                PathModule::new("mounts-and-binds", "Mounts and Binds",
                    "Land on the string and bring the yo-yo back by hand.",
                    &["trapeze", "bind"]),
            ],
        },
        LearningPath {
            slug: "competition-ready".to_string(),
            title: "Competition Ready".to_string(),
            description: "Technical combos and slack work for players chasing their first contest.".to_string(),
            level: Difficulty::Advanced,
            modules: vec![
                PathModule::new("advanced-mounts", "Advanced Mounts",
                    "Multi-string landings.",
                    &["double-or-nothing", "split-the-atom"]),
                PathModule::new("slack", "Slack",
                    "Control string that isn't under tension.",
                    &["whip"]),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trick(slug: &str) -> Trick {
        Trick::new(slug, slug, Difficulty::Beginner, TrickCategory::Fundamentals, "")
    }

    fn path(slug: &str, modules: Vec<PathModule>) -> LearningPath {
        LearningPath {
            slug: slug.to_string(),
            title: slug.to_string(),
            description: String::new(),
            level: Difficulty::Beginner,
            modules,
        }
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().unwrap();
        assert!(!catalog.tricks().is_empty());
        assert_eq!(catalog.paths().len(), 3);
    }

    #[test]
    fn every_difficulty_has_tricks_and_a_path() {
        let catalog = Catalog::builtin().unwrap();
        for difficulty in Difficulty::ALL {
            assert!(!catalog.tricks_by_difficulty(difficulty).is_empty());
            assert!(catalog.paths().iter().any(|p| p.level == difficulty));
        }
    }

    #[test]
    fn lookups() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.trick("sleeper").unwrap().name, "Sleeper");
        assert!(catalog.trick("sleeper-2").is_none());

        let (path, module) = catalog.module("string-tricks", "mounts-and-binds").unwrap();
        assert_eq!(path.slug, "string-tricks");
        let names: Vec<_> = catalog.module_tricks(module).iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Trapeze", "Bind Return"]);

        assert!(catalog.module("string-tricks", "getting-started").is_none());
        assert!(catalog.module("nope", "classics").is_none());
    }

    #[test]
    fn recommended_path_follows_skill_level() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.recommended_path(None).unwrap().slug, "first-throws");
        assert_eq!(
            catalog.recommended_path(Some(SkillLevel::Intermediate)).unwrap().slug,
            "string-tricks"
        );
        assert_eq!(
            catalog.recommended_path(Some(SkillLevel::Advanced)).unwrap().slug,
            "competition-ready"
        );
    }

    #[test]
    fn rejects_bad_slugs() {
        for bad in ["", "Sleeper", "walk the dog", "double--or", "-lead", "trail-"] {
            let err = Catalog::new(vec![trick(bad)], vec![]).unwrap_err();
            assert!(matches!(err, ContentError::InvalidSlug { .. }), "{bad:?} accepted");
        }
    }

    #[test]
    fn rejects_duplicate_tricks() {
        let err = Catalog::new(vec![trick("sleeper"), trick("sleeper")], vec![]).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateSlug { kind: "trick", .. }));
    }

    #[test]
    fn rejects_duplicate_modules() {
        let modules = vec![
            PathModule::new("basics", "A", "", &[]),
            PathModule::new("basics", "B", "", &[]),
        ];
        let err = Catalog::new(vec![], vec![path("p", modules)]).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateModule { .. }));
    }

    #[test]
    fn rejects_dangling_trick_reference() {
        let modules = vec![PathModule::new("basics", "Basics", "", &["sleeper", "ghost"])];
        let err = Catalog::new(vec![trick("sleeper")], vec![path("p", modules)]).unwrap_err();
        match err {
            ContentError::UnknownTrick { trick, module_id, .. } => {
                assert_eq!(trick, "ghost");
                assert_eq!(module_id, "basics");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
