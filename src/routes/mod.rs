pub mod auth;
pub mod contact;
pub mod customers;
pub mod leads;
pub mod services;
pub mod uploads;
pub mod users;

use axum::routing::{get, patch, post};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Auth
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/user/me", get(users::me))
        // Customers
        .route("/api/customers", get(customers::list))
        .route("/api/customers/bulk-priority", patch(customers::bulk_priority))
        .route(
            "/api/customers/{id}",
            get(customers::get)
                .put(customers::replace)
                .patch(customers::update)
                .delete(customers::delete),
        )
        // Leads
        .route("/api/leads", get(leads::list).post(leads::create))
        .route(
            "/api/leads/{id}",
            get(leads::get)
                .put(leads::replace)
                .patch(leads::update)
                .delete(leads::delete),
        )
        .route("/api/leads/{id}/priority", patch(leads::set_priority))
        // Services
        .route("/api/services", get(services::list).post(services::create))
        .route(
            "/api/services/{id}",
            get(services::get)
                .put(services::replace)
                .patch(services::update)
                .delete(services::delete),
        )
        .route("/api/services/{id}/status", patch(services::set_status))
        .route(
            "/api/services/{id}/documents",
            post(services::add_document).patch(services::review_document),
        )
        // Uploads
        .route(
            "/api/upload-documents",
            get(uploads::list).post(uploads::upload),
        )
}

/// Form endpoints posted to by the public site.
pub fn site_form_routes() -> Router<SharedState> {
    Router::new().route("/contact", post(contact::submit))
}
