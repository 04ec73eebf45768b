//! YoYo Academy: yo-yo tutorial web front end.

pub mod config;
pub mod content;
pub mod error;
pub mod onboarding;
pub mod store;
pub mod style;
pub mod web;
