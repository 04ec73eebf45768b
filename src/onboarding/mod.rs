//! Onboarding: the first-visit flow and the gate in front of it.
//!
//! The flow collects a skill level and goals across a few steps and finally
//! flags the user as onboarded. The gate at `/onboarding` reads that flag
//! from the hydrated store and forwards the visitor to the dashboard or to
//! the first step.

pub mod flow;
pub mod gate;
pub mod model;
pub mod navigator;
pub mod routes;
pub mod state;
pub mod store;

pub use flow::OnboardingStep;
pub use gate::{DASHBOARD_ROUTE, GateDestination, GateState, OnboardingGate};
pub use model::{Goal, SkillLevel};
pub use navigator::{Navigator, OneShotNavigator};
pub use routes::onboarding_routes;
pub use state::{HydrationStatus, OnboardingState, StoreSnapshot};
pub use store::{OnboardingStore, Subscription};
