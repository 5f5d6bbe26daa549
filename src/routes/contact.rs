use std::net::SocketAddr;

use axum::body::Bytes;
use axum::extract::{ConnectInfo, State};
use axum::http::HeaderMap;
use axum::response::Redirect;
use chrono::Utc;

use crate::error::AppError;
use crate::intake::contact::{thank_you_url, ContactSubmission};
use crate::intake::{honeypot, parser};
use crate::state::SharedState;

/// Lead-capture form shared by the home, pricing and service pages.
pub async fn submit(
    State(state): State<SharedState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Redirect, AppError> {
    if let Err(retry_after) = state.contact_limiter.check(addr.ip()) {
        tracing::warn!(ip = %addr.ip(), "Contact form rate limited");
        return Err(AppError::RateLimited(format!(
            "Too many requests. Try again in {retry_after} seconds."
        )));
    }

    let data = parser::parse(&headers, body)
        .await
        .map_err(AppError::BadRequest)?;
    let submission = ContactSubmission::from_value(&data);
    let target = thank_you_url(&submission.subject());

    // Bots get the same redirect a person would.
    if honeypot::is_spam(&data) {
        tracing::info!(ip = %addr.ip(), "Contact form honeypot triggered");
        return Ok(Redirect::to(&target));
    }

    let input = submission
        .into_lead_input()
        .normalize()
        .map_err(AppError::BadRequest)?;
    let lead = state
        .store
        .leads
        .create(input, Utc::now().date_naive())
        .await?;

    tracing::info!(lead_id = %lead.id, service = %lead.service, "Enquiry received");

    Ok(Redirect::to(&target))
}
