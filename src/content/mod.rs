//! Static content: the trick library and learning paths.

pub mod catalog;
pub mod model;
pub mod params;

pub use catalog::Catalog;
pub use model::{Difficulty, LearningPath, PathModule, Trick, TrickCategory};
pub use params::{
    ModuleParams, PathParams, TrickParams, content_routes, module_params, path_params,
    trick_params,
};
