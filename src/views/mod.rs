pub mod admin;
pub mod site;

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn site_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(site::home))
        .route("/pricing", get(site::pricing))
        .route("/services/{slug}", get(site::service_page))
        .route("/thank-you", get(site::thank_you))
}

/// Pages that work without a session.
pub fn admin_public_routes() -> Router<SharedState> {
    Router::new()
        .route("/admin", get(admin::index))
        .route(
            "/admin/login",
            get(admin::login_page).post(admin::login_submit),
        )
        .route("/admin/logout", post(admin::logout))
}

/// Panels and their form actions; all require an admin session.
pub fn admin_routes() -> Router<SharedState> {
    Router::new()
        .route("/admin/customers", get(admin::customers_page))
        .route("/admin/customers/{id}/status", post(admin::customer_status))
        .route(
            "/admin/customers/{id}/priority",
            post(admin::customer_priority),
        )
        .route("/admin/customers/{id}/delete", post(admin::customer_delete))
        .route("/admin/leads", get(admin::leads_page))
        .route("/admin/leads/{id}/status", post(admin::lead_status))
        .route("/admin/leads/{id}/priority", post(admin::lead_priority))
        .route("/admin/leads/{id}/delete", post(admin::lead_delete))
        .route("/admin/services", get(admin::services_page))
        .route("/admin/services/{id}/status", post(admin::service_status))
        .route(
            "/admin/services/{id}/documents",
            post(admin::service_document),
        )
}

/// Render a template, logging and answering 500 if it fails.
pub(crate) fn render<T: Template>(template: &T, status: StatusCode) -> Response {
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Template render failed: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
        }
    }
}

/// An `<option>` with its selection precomputed.
pub(crate) struct Choice {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

impl Choice {
    pub fn list(options: impl IntoIterator<Item = (&'static str, &'static str)>, current: &str) -> Vec<Choice> {
        options
            .into_iter()
            .map(|(value, label)| Choice {
                value,
                label,
                selected: value == current,
            })
            .collect()
    }
}
