//! HTML views and the HTTP router.

pub mod layout;
pub mod loading;
pub mod metadata;
pub mod pages;
pub mod routes;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use maud::Markup;

pub use metadata::PageMetadata;
pub use routes::{AppState, app};

/// Turn a finished document into an HTML response body.
pub fn render(markup: Markup) -> Html<String> {
    Html(markup.into_string())
}

/// The 404 page with its status code.
pub fn not_found_response() -> Response {
    (StatusCode::NOT_FOUND, render(pages::not_found())).into_response()
}
