//! HTTP routes

pub mod employees;
pub mod health;
pub mod login;
pub mod recommendations;
pub mod surveys;
pub mod tasks;

use axum::routing::{get, post};
use axum::{Router, middleware};
use tower_http::trace::TraceLayer;

use crate::auth::require_basic_auth;
use crate::state::AppState;

/// Create the application router
pub fn router(state: AppState) -> Router {
    // Login form and health probe stay reachable without credentials
    let open = Router::new()
        .route("/login", get(login::login_page))
        .route("/health", get(health::health_check));

    let protected = Router::new()
        .route("/", get(employees::overview))
        .route("/employees", get(employees::manage))
        .route("/employee", post(employees::create))
        .route("/employee/{id}", post(employees::update))
        .route("/employee/{id}/delete", post(employees::delete))
        .route("/surveys", get(surveys::list))
        .route("/survey", post(surveys::create))
        .route("/survey/{id}", get(surveys::new_form))
        .route("/survey/{id}/details", get(surveys::details))
        .route("/survey/{id}/delete", post(surveys::delete))
        .route("/tasks", get(tasks::list))
        .route("/task", post(tasks::create))
        .route("/task/{id}/delete", post(tasks::delete))
        .route("/recommendations/{employee_id}", get(recommendations::for_employee))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_basic_auth,
        ));

    Router::new()
        .merge(open)
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
