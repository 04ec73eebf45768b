//! HTTP endpoints for the onboarding gate, the flow steps and status.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Form, Path, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info};

use super::flow::OnboardingStep;
use super::gate::{DASHBOARD_ROUTE, OnboardingGate};
use super::model::{Goal, SkillLevel};
use super::navigator::OneShotNavigator;
use super::state::{HydrationStatus, OnboardingState};
use super::store::OnboardingStore;
use crate::web::{loading, not_found_response, pages, render};

pub const GATE_ROUTE: &str = "/onboarding";

/// Shared state for onboarding routes.
#[derive(Clone)]
pub struct OnboardingRouteState {
    pub store: Arc<OnboardingStore>,
    /// How long `GET /onboarding` waits on the gate before serving the
    /// loading page instead of a redirect.
    pub gate_render_budget: Duration,
}

#[derive(Debug, Serialize)]
struct StatusResponse {
    onboarding_completed: bool,
    hydration: HydrationStatus,
    state: OnboardingState,
}

/// GET /onboarding
///
/// Mounts a gate for this request. If it decides within the render budget
/// the visitor is redirected (303, so the gate URL is replaced); otherwise
/// the loading page is served and the gate is unmounted with the response.
async fn gate(State(state): State<OnboardingRouteState>) -> Response {
    let (navigator, route_rx) = OneShotNavigator::new();
    let gate = OnboardingGate::mount(Arc::clone(&state.store), Arc::new(navigator));

    let response = match tokio::time::timeout(state.gate_render_budget, route_rx).await {
        Ok(Ok(route)) => Redirect::to(&route).into_response(),
        Ok(Err(_)) | Err(_) => {
            debug!(gate_id = %gate.id(), "Gate unresolved within budget, serving loading page");
            render(loading::gate_loading_page(gate.view())).into_response()
        }
    };

    gate.unmount();
    response
}

/// GET /onboarding/{step}
async fn step_page(
    State(state): State<OnboardingRouteState>,
    Path(slug): Path<String>,
) -> Response {
    let Some(step) = OnboardingStep::from_slug(&slug) else {
        return not_found_response();
    };
    state.store.hydrate().await;
    let snapshot = state.store.snapshot();
    render(pages::onboarding_step(step, &snapshot.state)).into_response()
}

/// POST /onboarding/{step}
///
/// Takes the raw field list so repeated `goal` fields survive decoding.
async fn submit_step(
    State(state): State<OnboardingRouteState>,
    Path(slug): Path<String>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Response {
    let Some(step) = OnboardingStep::from_slug(&slug) else {
        return not_found_response();
    };

    match step {
        OnboardingStep::SkillLevel => {
            let level = fields
                .iter()
                .find(|(name, _)| name == "skill_level")
                .and_then(|(_, value)| parse_skill_level(value));
            let Some(level) = level else {
                return (StatusCode::UNPROCESSABLE_ENTITY, "Pick a skill level").into_response();
            };
            state.store.set_skill_level(level).await;
        }
        OnboardingStep::Goals => {
            let mut goals = Vec::new();
            for (_, value) in fields.iter().filter(|(name, _)| name == "goal") {
                match parse_goal(value) {
                    Some(goal) => goals.push(goal),
                    None => {
                        return (StatusCode::UNPROCESSABLE_ENTITY, format!("Unknown goal: {value}"))
                            .into_response();
                    }
                }
            }
            state.store.set_goals(goals).await;
        }
        OnboardingStep::Welcome | OnboardingStep::Ready => {
            return StatusCode::METHOD_NOT_ALLOWED.into_response();
        }
    }

    let next = step.next().unwrap_or(OnboardingStep::Ready);
    Redirect::to(&next.route()).into_response()
}

fn parse_skill_level(value: &str) -> Option<SkillLevel> {
    SkillLevel::ALL.into_iter().find(|l| l.to_string() == value)
}

fn parse_goal(value: &str) -> Option<Goal> {
    Goal::ALL.into_iter().find(|g| g.to_string() == value)
}

/// POST /onboarding/finish
async fn finish(State(state): State<OnboardingRouteState>) -> Redirect {
    let onboarding = state.store.complete().await;
    info!(
        skill_level = ?onboarding.skill_level,
        goals = onboarding.goals.len(),
        "Onboarding finished"
    );
    Redirect::to(DASHBOARD_ROUTE)
}

/// POST /onboarding/reset
async fn reset(State(state): State<OnboardingRouteState>) -> Redirect {
    state.store.reset().await;
    Redirect::to(GATE_ROUTE)
}

/// GET /api/onboarding/status
///
/// Whether onboarding is completed, how hydration went, and the answers so far.
async fn get_status(State(state): State<OnboardingRouteState>) -> impl IntoResponse {
    state.store.hydrate().await;
    let snapshot = state.store.snapshot();
    Json(StatusResponse {
        onboarding_completed: snapshot.state.is_complete,
        hydration: snapshot.hydration,
        state: snapshot.state,
    })
}

/// Build the onboarding routes.
pub fn onboarding_routes(state: OnboardingRouteState) -> Router {
    let api = Router::new()
        .route("/api/onboarding/status", get(get_status))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET]),
        );

    Router::new()
        .route(GATE_ROUTE, get(gate))
        .route("/onboarding/{step}", get(step_page).post(submit_step))
        .route("/onboarding/finish", post(finish))
        .route("/onboarding/reset", post(reset))
        .merge(api)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, header};
    use tokio::sync::Notify;
    use tower::ServiceExt;

    use super::*;
    use crate::onboarding::store::tests::ScriptedDb;

    fn router_over(db: ScriptedDb, budget: Duration) -> (Router, Arc<OnboardingStore>) {
        let store = OnboardingStore::new(Arc::new(db), "default", Duration::from_millis(200));
        let router = onboarding_routes(OnboardingRouteState {
            store: Arc::clone(&store),
            gate_render_budget: budget,
        });
        (router, store)
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Option<String>, String) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .map(|v| v.to_str().unwrap().to_string());
        let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .unwrap();
        (status, location, String::from_utf8(body.to_vec()).unwrap())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_form(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn gate_redirects_new_visitor_to_welcome() {
        let (router, _) = router_over(ScriptedDb::with_value(None), Duration::from_secs(1));
        let (status, location, _) = send(router, get("/onboarding")).await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location.as_deref(), Some("/onboarding/welcome"));
    }

    #[tokio::test]
    async fn gate_redirects_returning_user_to_dashboard() {
        let (router, _) = router_over(ScriptedDb::completed(), Duration::from_secs(1));
        let (status, location, _) = send(router, get("/onboarding")).await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location.as_deref(), Some("/dashboard"));
    }

    #[tokio::test]
    async fn gate_serves_loading_page_while_storage_is_slow() {
        let release = Arc::new(Notify::new());
        let db = ScriptedDb::completed().held(release.clone());
        let (router, store) = router_over(db, Duration::from_millis(20));

        let (status, location, body) = send(router.clone(), get("/onboarding")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(location.is_none());
        assert!(body.contains(r#"role="status""#));
        assert!(body.contains(r#"http-equiv="refresh""#));
        assert!(!body.contains("Your dashboard"));

        // The refresh after storage answers gets the real decision.
        release.notify_waiters();
        store.hydrate().await;
        let (status, location, _) = send(router, get("/onboarding")).await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location.as_deref(), Some("/dashboard"));
    }

    #[tokio::test]
    async fn unknown_step_is_not_found() {
        let (router, _) = router_over(ScriptedDb::with_value(None), Duration::from_secs(1));
        let (status, _, _) = send(router.clone(), get("/onboarding/tutorial")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _, _) = send(router, post_form("/onboarding/tutorial", "")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn flow_collects_answers_and_finishes() {
        let (router, store) = router_over(ScriptedDb::with_value(None), Duration::from_secs(1));

        let (status, location, _) = send(
            router.clone(),
            post_form("/onboarding/skill-level", "skill_level=intermediate"),
        )
        .await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location.as_deref(), Some("/onboarding/goals"));

        let (_, location, _) = send(
            router.clone(),
            post_form("/onboarding/goals", "goal=learn_basics&goal=competition"),
        )
        .await;
        assert_eq!(location.as_deref(), Some("/onboarding/ready"));

        let (_, location, _) = send(router.clone(), post_form("/onboarding/finish", "")).await;
        assert_eq!(location.as_deref(), Some("/dashboard"));

        let state = store.snapshot().state;
        assert!(state.is_complete);
        assert_eq!(state.skill_level, Some(SkillLevel::Intermediate));
        assert_eq!(state.goals, vec![Goal::LearnBasics, Goal::Competition]);

        let (_, location, _) = send(router, get("/onboarding")).await;
        assert_eq!(location.as_deref(), Some("/dashboard"));
    }

    #[tokio::test]
    async fn invalid_answers_are_rejected() {
        let (router, store) = router_over(ScriptedDb::with_value(None), Duration::from_secs(1));

        let (status, _, _) = send(
            router.clone(),
            post_form("/onboarding/skill-level", "skill_level=grandmaster"),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _, _) = send(router, post_form("/onboarding/goals", "goal=fame")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        assert_eq!(store.snapshot().state, OnboardingState::default());
    }

    #[tokio::test]
    async fn reset_returns_to_the_gate() {
        let (router, store) = router_over(ScriptedDb::completed(), Duration::from_secs(1));
        store.hydrate().await;

        let (status, location, _) = send(router.clone(), post_form("/onboarding/reset", "")).await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location.as_deref(), Some("/onboarding"));
        assert!(!store.is_complete());

        let (_, location, _) = send(router, get("/onboarding")).await;
        assert_eq!(location.as_deref(), Some("/onboarding/welcome"));
    }

    #[tokio::test]
    async fn status_reports_hydration_outcome() {
        let (router, _) = router_over(ScriptedDb::failing(), Duration::from_secs(1));
        let (status, _, body) = send(router, get("/api/onboarding/status")).await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["onboarding_completed"], false);
        assert_eq!(json["hydration"]["status"], "failed");
        assert_eq!(json["state"]["is_complete"], false);
    }

    #[tokio::test]
    async fn step_pages_show_saved_answers() {
        let db = ScriptedDb::with_value(Some(serde_json::json!({
            "is_complete": false,
            "skill_level": "advanced",
        })));
        let (router, _) = router_over(db, Duration::from_secs(1));
        let (status, _, body) = send(router, get("/onboarding/skill-level")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"value="advanced" required checked"#));
    }
}
