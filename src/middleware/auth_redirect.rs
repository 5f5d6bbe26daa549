use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

pub const ADMIN_LOGIN: &str = "/admin/login";

/// Send browsers without an admin session to the login page instead of a JSON error.
pub async fn redirect_to_login(req: Request, next: Next) -> Response {
    let response = next.run(req).await;
    match response.status() {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Redirect::to(ADMIN_LOGIN).into_response(),
        _ => response,
    }
}
