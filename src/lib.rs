pub mod auth;
pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod intake;
pub mod middleware;
pub mod models;
pub mod panel;
pub mod rate_limit;
pub mod routes;
pub mod state;
pub mod uploads;
pub mod views;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderName, HeaderValue, Method};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::{Store, StoreError};
use crate::middleware::auth_redirect::redirect_to_login;
use crate::models::user::ROLE_ADMIN;
use crate::models::NewUser;
use crate::rate_limit::ContactRateLimiter;
use crate::state::{AppState, SharedState};
use crate::uploads::DocumentStorage;

pub fn build_app(store: Store, config: Config) -> Router {
    build_app_with_limiter(store, config, Arc::new(ContactRateLimiter::default()))
}

pub fn build_app_with_limiter(
    store: Store,
    config: Config,
    contact_limiter: Arc<ContactRateLimiter>,
) -> Router {
    let upload_dir = config.upload_dir.clone();
    let max_upload_size = config.max_upload_size;

    let state: SharedState = Arc::new(AppState {
        store,
        storage: DocumentStorage::new(&upload_dir),
        config,
        contact_limiter,
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    Router::new()
        .merge(routes::api_routes().layer(cors))
        .merge(routes::site_form_routes())
        .merge(views::site_routes())
        .merge(views::admin_public_routes())
        .merge(views::admin_routes().layer(axum::middleware::from_fn(redirect_to_login)))
        .nest_service("/uploads", ServeDir::new(upload_dir))
        .route("/health", axum::routing::get(health))
        .fallback(views::site::fallback)
        .layer(DefaultBodyLimit::disable())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(max_upload_size))
                .layer(SetResponseHeaderLayer::overriding(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    HeaderName::from_static("x-frame-options"),
                    HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    HeaderName::from_static("referrer-policy"),
                    HeaderValue::from_static("strict-origin-when-cross-origin"),
                )),
        )
        .with_state(state)
}

/// Create the configured admin account unless that email is already registered.
pub async fn bootstrap_admin(store: &Store, config: &Config) -> Result<(), String> {
    let Some(admin) = &config.admin else {
        tracing::info!("ADMIN_EMAIL/ADMIN_PASSWORD not set; skipping admin bootstrap");
        return Ok(());
    };

    if store
        .users
        .find_by_email(&admin.email)
        .await
        .map_err(|e| e.to_string())?
        .is_some()
    {
        return Ok(());
    }

    let user = NewUser::with_password(&admin.name, &admin.email, &admin.password, ROLE_ADMIN)?;
    match store.users.create(user).await {
        Ok(user) => {
            tracing::info!(user_id = %user.id, "Admin account created");
            Ok(())
        }
        // Another instance got there first.
        Err(StoreError::Duplicate(_)) => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}

async fn health() -> &'static str {
    "ok"
}
