// ============================================================================
// WPS API - Router
// File: crates/wps-api/src/routes.rs
// ============================================================================

use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    routing::{get, patch, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing::warn;
use wps_shared::config::CorsSettings;
use wps_shared::constants::ROLE_HEADER;

use crate::handlers::{
    attributes, company, goals, health, lines_of_business, navigation, notifications, scenarios,
    spaces, wizard,
};
use crate::state::AppState;

pub fn build_router(state: AppState, cors: &CorsSettings) -> Router {
    let api = Router::new()
        // Company profile
        .route(
            "/company",
            get(company::get_profile)
                .post(company::initialize_profile)
                .patch(company::update_profile),
        )
        .route("/company/view", get(company::profile_view))
        // Workspace attributes
        .route(
            "/attributes",
            get(attributes::list_attributes).post(attributes::add_attribute),
        )
        .route("/attributes/view", get(attributes::attributes_view))
        .route(
            "/attributes/{id}",
            get(attributes::get_attribute).delete(attributes::delete_attribute),
        )
        .route(
            "/attributes/{id}/importance",
            patch(attributes::update_attribute_importance),
        )
        .route("/attributes/{id}/toggle", post(attributes::toggle_attribute))
        .route("/weightings", get(attributes::list_weightings))
        // Company goals
        .route("/goals", get(goals::list_goals).post(goals::add_goal))
        .route("/goals/view", get(goals::goals_view))
        .route("/goals/{id}", get(goals::get_goal).delete(goals::delete_goal))
        .route("/goals/{id}/importance", patch(goals::update_goal_importance))
        .route("/goals/{id}/toggle", post(goals::toggle_goal))
        // Lines of business
        .route(
            "/lobs",
            get(lines_of_business::list_lobs).post(lines_of_business::create_lob),
        )
        .route(
            "/lobs/{id}",
            get(lines_of_business::get_lob)
                .patch(lines_of_business::update_lob)
                .delete(lines_of_business::delete_lob),
        )
        // Spaces
        .route("/spaces", get(spaces::list_spaces).post(spaces::create_space))
        .route(
            "/spaces/{id}",
            get(spaces::get_space)
                .patch(spaces::update_space)
                .delete(spaces::delete_space),
        )
        // Scenarios
        .route("/scenarios", get(scenarios::list_scenarios))
        .route("/scenarios/view", get(scenarios::scenarios_view))
        .route("/scenarios/{id}", get(scenarios::get_scenario))
        .route("/scenarios/{id}/detail", get(scenarios::scenario_detail))
        // Scenario wizard
        .route("/scenarios/wizard", post(wizard::open_wizard))
        .route(
            "/scenarios/wizard/{id}",
            get(wizard::get_wizard)
                .patch(wizard::edit_wizard)
                .delete(wizard::close_wizard),
        )
        .route("/scenarios/wizard/{id}/next", post(wizard::next_step))
        .route("/scenarios/wizard/{id}/back", post(wizard::previous_step))
        .route("/scenarios/wizard/{id}/submit", post(wizard::submit_wizard))
        // Shell
        .route("/navigation", get(navigation::sidebar))
        .route("/navigation/resolve", get(navigation::resolve_route))
        .route("/dashboard", get(navigation::dashboard))
        .route("/notifications", get(notifications::drain_notifications));

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1", api)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
                .layer(CatchPanicLayer::new())
                .layer(cors_layer(cors)),
        )
}

fn cors_layer(settings: &CorsSettings) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(ROLE_HEADER)]);

    if settings.allowed_origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = settings
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();
    layer.allow_origin(origins)
}
