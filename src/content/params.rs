//! Route parameters for every pre-renderable content page.
//!
//! These are pure mappings over the catalog, in catalog order. Detail
//! handlers only serve parameters that appear here.

use serde::Serialize;

use super::catalog::Catalog;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrickParams {
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathParams {
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleParams {
    pub slug: String,
    pub module_id: String,
}

/// One entry per trick, for `/tricks/{slug}` and `/tricks/{slug}/practice`.
pub fn trick_params(catalog: &Catalog) -> Vec<TrickParams> {
    catalog
        .tricks()
        .iter()
        .map(|t| TrickParams {
            slug: t.slug.clone(),
        })
        .collect()
}

/// One entry per learning path, for `/paths/{slug}`.
pub fn path_params(catalog: &Catalog) -> Vec<PathParams> {
    catalog
        .paths()
        .iter()
        .map(|p| PathParams {
            slug: p.slug.clone(),
        })
        .collect()
}

/// One entry per (path, module) pair, for `/paths/{slug}/modules/{module_id}`.
pub fn module_params(catalog: &Catalog) -> Vec<ModuleParams> {
    catalog
        .paths()
        .iter()
        .flat_map(|p| {
            p.modules.iter().map(move |m| ModuleParams {
                slug: p.slug.clone(),
                module_id: m.id.clone(),
            })
        })
        .collect()
}

/// Every URL the site can pre-render: static pages first, then content pages.
pub fn content_routes(catalog: &Catalog) -> Vec<String> {
    let mut routes: Vec<String> = ["/", "/about", "/dashboard", "/tricks", "/paths"]
        .iter()
        .map(|r| r.to_string())
        .collect();

    for TrickParams { slug } in trick_params(catalog) {
        routes.push(format!("/tricks/{slug}"));
        routes.push(format!("/tricks/{slug}/practice"));
    }
    for PathParams { slug } in path_params(catalog) {
        routes.push(format!("/paths/{slug}"));
    }
    for ModuleParams { slug, module_id } in module_params(catalog) {
        routes.push(format!("/paths/{slug}/modules/{module_id}"));
    }
    routes
}
