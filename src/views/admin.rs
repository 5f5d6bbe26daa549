use askama::Template;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use chrono::Utc;
use serde::Deserialize;

use crate::auth::extractor::{AdminUser, ACCESS_COOKIE};
use crate::auth::jwt::{self, TOKEN_TTL_DAYS};
use crate::catalog::format_inr;
use crate::db::{seed, StoreError};
use crate::error::AppError;
use crate::middleware::auth_redirect::ADMIN_LOGIN;
use crate::models::user::ROLE_ADMIN;
use crate::models::{
    Customer, CustomerPatch, CustomerStatus, DocumentStatus, Lead, LeadPatch, LeadStatus,
    Priority, Service, ServiceChange, ServicePatch, ServiceStatus,
};
use crate::panel::{self, PriorityStats, ServiceStats};
use crate::routes::auth::{authenticate, issue_token};
use crate::state::SharedState;
use crate::views::{render, Choice};

const PANEL_HOME: &str = "/admin/customers";

#[derive(Template)]
#[template(path = "admin/login.html")]
struct LoginTemplate {
    email: String,
    error: Option<String>,
}

struct CustomerRow {
    id: String,
    name: String,
    phone: String,
    email: String,
    registered: String,
    status: &'static str,
    toggle_to: &'static str,
    priority: &'static str,
    priority_choices: Vec<Choice>,
    services: String,
    total_spent: String,
    last_service: String,
}

#[derive(Template)]
#[template(path = "admin/customers.html")]
struct CustomersTemplate {
    rows: Vec<CustomerRow>,
    search: String,
    notice: Option<String>,
    error: Option<String>,
}

struct LeadRow {
    id: String,
    name: String,
    email: String,
    phone: String,
    service: String,
    budget: String,
    message: String,
    business_type: String,
    date: String,
    priority: &'static str,
    status_choices: Vec<Choice>,
    priority_choices: Vec<Choice>,
}

#[derive(Template)]
#[template(path = "admin/leads.html")]
struct LeadsTemplate {
    rows: Vec<LeadRow>,
    stats: PriorityStats,
    search: String,
    notice: Option<String>,
    error: Option<String>,
}

struct DocumentRow {
    name: String,
    status: &'static str,
    upload_date: String,
    choices: Vec<Choice>,
}

struct ServiceRow {
    id: String,
    name: String,
    customer_id: String,
    status_label: &'static str,
    status_choices: Vec<Choice>,
    price: String,
    start_date: String,
    completed_date: String,
    required_documents: String,
    certificates: String,
    documents: Vec<DocumentRow>,
}

#[derive(Template)]
#[template(path = "admin/services.html")]
struct ServicesTemplate {
    rows: Vec<ServiceRow>,
    stats: ServiceStats,
    revenue: String,
    customer_id: String,
    notice: Option<String>,
    error: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PanelQuery {
    pub search: Option<String>,
    pub customer_id: Option<String>,
    pub notice: Option<String>,
    pub error: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Deserialize)]
pub struct ChoiceForm {
    #[serde(default)]
    pub value: String,
}

#[derive(Deserialize)]
pub struct DocumentForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: String,
}

fn priority_choices(current: Priority) -> Vec<Choice> {
    Choice::list(
        Priority::ALL.iter().map(|p| (p.as_str(), p.as_str())),
        current.as_str(),
    )
}

fn notice_of(query: &PanelQuery, fallback: Option<String>) -> Option<String> {
    fallback.or_else(|| query.notice.clone())
}

/// Redirect back to a panel with a one-line message in the query string.
fn back(panel: &str, key: &str, message: &str) -> Redirect {
    let qs = form_urlencoded::Serializer::new(String::new())
        .append_pair(key, message)
        .finish();
    Redirect::to(&format!("/admin/{panel}?{qs}"))
}

/// Turn a mutation result into a redirect carrying a notice or an error.
/// The panel re-reads the store, so a failed edit shows the stored value.
fn outcome<T>(
    panel: &str,
    result: Result<Option<T>, StoreError>,
    done: &str,
    missing: &str,
) -> Redirect {
    match result {
        Ok(Some(_)) => back(panel, "notice", done),
        Ok(None) => back(panel, "error", missing),
        Err(StoreError::Missing(msg) | StoreError::Invalid(msg)) => back(panel, "error", &msg),
        Err(e) => {
            tracing::error!("Admin {panel} update failed: {e}");
            back(panel, "error", "The change could not be saved. Please try again.")
        }
    }
}

fn found(deleted: bool) -> Option<()> {
    deleted.then_some(())
}

// ---- session ----

pub async fn index() -> Redirect {
    Redirect::to(PANEL_HOME)
}

pub async fn login_page(State(state): State<SharedState>, jar: CookieJar) -> Response {
    if let Some(cookie) = jar.get(ACCESS_COOKIE) {
        if jwt::verify(cookie.value(), &state.config.jwt_secret)
            .is_ok_and(|claims| claims.is_admin())
        {
            return Redirect::to(PANEL_HOME).into_response();
        }
    }

    let template = LoginTemplate {
        email: String::new(),
        error: None,
    };
    render(&template, StatusCode::OK)
}

pub async fn login_submit(
    State(state): State<SharedState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    let failed = |status: StatusCode, message: &str| {
        let template = LoginTemplate {
            email: form.email.clone(),
            error: Some(message.to_string()),
        };
        render(&template, status)
    };

    let user = match authenticate(&state, &form.email, &form.password).await {
        Ok(user) => user,
        Err(AppError::BadRequest(msg)) => return failed(StatusCode::BAD_REQUEST, &msg),
        Err(e) => {
            tracing::error!("Admin login failed: {e}");
            return failed(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Login is temporarily unavailable",
            );
        }
    };

    if user.role != ROLE_ADMIN {
        tracing::warn!(user_id = %user.id, "Non-admin tried to open the admin panel");
        return failed(StatusCode::FORBIDDEN, "Admin access required");
    }

    let token = match issue_token(&state, &user) {
        Ok(token) => token,
        Err(e) => return e.into_response(),
    };

    let cookie = Cookie::build((ACCESS_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(state.config.secure_cookies)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::days(TOKEN_TTL_DAYS))
        .build();

    tracing::info!(user_id = %user.id, "Admin signed in");

    (jar.add(cookie), Redirect::to(PANEL_HOME)).into_response()
}

pub async fn logout(jar: CookieJar) -> (CookieJar, Redirect) {
    let cookie = Cookie::build((ACCESS_COOKIE, ""))
        .path("/")
        .max_age(time::Duration::ZERO)
        .build();
    (jar.add(cookie), Redirect::to(ADMIN_LOGIN))
}

// ---- customers ----

fn customer_row(c: Customer) -> CustomerRow {
    CustomerRow {
        registered: c.date.format("%Y-%m-%d").to_string(),
        status: c.status.as_str(),
        toggle_to: c.status.toggled().as_str(),
        priority: c.priority.as_str(),
        priority_choices: priority_choices(c.priority),
        services: c.services.join(", "),
        total_spent: format_inr(c.total_spent),
        last_service: c.last_service.unwrap_or_default(),
        id: c.id,
        name: c.name,
        phone: c.phone,
        email: c.email,
    }
}

pub async fn customers_page(
    _admin: AdminUser,
    State(state): State<SharedState>,
    Query(query): Query<PanelQuery>,
) -> Response {
    let (customers, fallback) = match state.store.customers.list().await {
        Ok(customers) => (customers, None),
        Err(e) => {
            tracing::warn!("Customer list unavailable, showing demo data: {e}");
            (
                seed::customers(),
                Some("Showing demo data: live customer records could not be loaded.".to_string()),
            )
        }
    };

    let template = CustomersTemplate {
        rows: panel::filter_customers(customers, query.search.as_deref())
            .into_iter()
            .map(customer_row)
            .collect(),
        search: query.search.clone().unwrap_or_default(),
        notice: notice_of(&query, fallback),
        error: query.error.clone(),
    };
    render(&template, StatusCode::OK)
}

pub async fn customer_status(
    _admin: AdminUser,
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Form(form): Form<ChoiceForm>,
) -> Redirect {
    let Ok(status) = form.value.parse::<CustomerStatus>() else {
        return back("customers", "error", "Invalid status value");
    };
    let result = state
        .store
        .customers
        .update(&id, CustomerPatch::status(status))
        .await;
    outcome(
        "customers",
        result,
        &format!("{id} is now {}", status.as_str()),
        "Customer not found",
    )
}

pub async fn customer_priority(
    _admin: AdminUser,
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Form(form): Form<ChoiceForm>,
) -> Redirect {
    let Ok(priority) = form.value.parse::<Priority>() else {
        return back("customers", "error", "Invalid priority value");
    };
    let result = state
        .store
        .customers
        .update(&id, CustomerPatch::priority(priority))
        .await;
    outcome(
        "customers",
        result,
        &format!("{id} priority set to {priority}"),
        "Customer not found",
    )
}

pub async fn customer_delete(
    _admin: AdminUser,
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Redirect {
    let result = state.store.customers.delete(&id).await.map(found);
    outcome(
        "customers",
        result,
        "Customer deleted successfully",
        "Customer not found",
    )
}

// ---- leads ----

fn lead_row(l: Lead) -> LeadRow {
    LeadRow {
        date: l.date.format("%Y-%m-%d").to_string(),
        priority: l.priority.as_str(),
        status_choices: Choice::list(
            LeadStatus::ALL.iter().map(|s| (s.as_str(), s.as_str())),
            l.status.as_str(),
        ),
        priority_choices: priority_choices(l.priority),
        budget: l.budget.unwrap_or_default(),
        message: l.message.unwrap_or_default(),
        business_type: l.business_type.unwrap_or_default(),
        id: l.id,
        name: l.name,
        email: l.email,
        phone: l.phone,
        service: l.service,
    }
}

pub async fn leads_page(
    _admin: AdminUser,
    State(state): State<SharedState>,
    Query(query): Query<PanelQuery>,
) -> Response {
    let (leads, fallback) = match state.store.leads.list().await {
        Ok(leads) => (leads, None),
        Err(e) => {
            tracing::warn!("Lead list unavailable, showing demo data: {e}");
            let mut leads = seed::leads();
            leads.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
            (
                leads,
                Some("Showing demo data: live leads could not be loaded.".to_string()),
            )
        }
    };

    let leads = panel::filter_leads(leads, query.search.as_deref());
    let template = LeadsTemplate {
        stats: PriorityStats::tally(leads.iter().map(|l| l.priority)),
        rows: leads.into_iter().map(lead_row).collect(),
        search: query.search.clone().unwrap_or_default(),
        notice: notice_of(&query, fallback),
        error: query.error.clone(),
    };
    render(&template, StatusCode::OK)
}

pub async fn lead_status(
    _admin: AdminUser,
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Form(form): Form<ChoiceForm>,
) -> Redirect {
    let Ok(status) = form.value.parse::<LeadStatus>() else {
        return back("leads", "error", "Invalid status value");
    };
    let result = state.store.leads.update(&id, LeadPatch::status(status)).await;
    outcome(
        "leads",
        result,
        &format!("{id} marked {}", status.as_str()),
        "Lead not found",
    )
}

pub async fn lead_priority(
    _admin: AdminUser,
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Form(form): Form<ChoiceForm>,
) -> Redirect {
    let Ok(priority) = form.value.parse::<Priority>() else {
        return back("leads", "error", "Invalid priority value");
    };
    let result = state
        .store
        .leads
        .update(&id, LeadPatch::priority(priority))
        .await;
    outcome(
        "leads",
        result,
        &format!("{id} priority set to {priority}"),
        "Lead not found",
    )
}

pub async fn lead_delete(
    _admin: AdminUser,
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Redirect {
    let result = state.store.leads.delete(&id).await.map(found);
    outcome("leads", result, "Lead deleted successfully", "Lead not found")
}

// ---- services ----

fn service_row(s: Service) -> ServiceRow {
    ServiceRow {
        status_label: s.status.label(),
        status_choices: Choice::list(
            ServiceStatus::ALL.iter().map(|st| (st.as_str(), st.label())),
            s.status.as_str(),
        ),
        price: format_inr(s.price),
        start_date: s.start_date.format("%Y-%m-%d").to_string(),
        completed_date: s
            .completed_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        required_documents: s.required_documents.join(", "),
        certificates: s.certificates.join(", "),
        documents: s
            .uploaded_documents
            .into_iter()
            .map(|d| DocumentRow {
                status: d.status.as_str(),
                upload_date: d.upload_date.format("%Y-%m-%d").to_string(),
                choices: Choice::list(
                    DocumentStatus::ALL.iter().map(|st| (st.as_str(), st.as_str())),
                    d.status.as_str(),
                ),
                name: d.name,
            })
            .collect(),
        id: s.id,
        name: s.name,
        customer_id: s.customer_id,
    }
}

pub async fn services_page(
    _admin: AdminUser,
    State(state): State<SharedState>,
    Query(query): Query<PanelQuery>,
) -> Response {
    let customer_id = query
        .customer_id
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty());

    let (services, fallback) = match state.store.services.list(customer_id).await {
        Ok(services) => (services, None),
        Err(e) => {
            tracing::warn!("Service list unavailable, showing demo data: {e}");
            let services = seed::services()
                .into_iter()
                .filter(|s| customer_id.is_none_or(|c| s.customer_id == c))
                .collect();
            (
                services,
                Some("Showing demo data: live services could not be loaded.".to_string()),
            )
        }
    };

    let stats = ServiceStats::of(&services);
    let template = ServicesTemplate {
        revenue: format_inr(stats.revenue),
        stats,
        rows: services.into_iter().map(service_row).collect(),
        customer_id: customer_id.unwrap_or_default().to_string(),
        notice: notice_of(&query, fallback),
        error: query.error.clone(),
    };
    render(&template, StatusCode::OK)
}

pub async fn service_status(
    _admin: AdminUser,
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Form(form): Form<ChoiceForm>,
) -> Redirect {
    let Ok(status) = form.value.parse::<ServiceStatus>() else {
        return back("services", "error", "Invalid status value");
    };
    let change = ServiceChange::Patch(ServicePatch {
        status: Some(status),
        ..ServicePatch::default()
    });
    let result = state
        .store
        .services
        .modify(&id, change, Utc::now().date_naive())
        .await;
    outcome(
        "services",
        result,
        &format!("{id} is now {}", status.label()),
        "Service not found",
    )
}

pub async fn service_document(
    _admin: AdminUser,
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Form(form): Form<DocumentForm>,
) -> Redirect {
    let Ok(status) = form.status.parse::<DocumentStatus>() else {
        return back("services", "error", "Invalid document status");
    };
    let change = ServiceChange::SetDocumentStatus {
        name: form.name.clone(),
        status,
    };
    let result = state
        .store
        .services
        .modify(&id, change, Utc::now().date_naive())
        .await;
    outcome(
        "services",
        result,
        &format!("{} marked {}", form.name, status.as_str()),
        "Service not found",
    )
}
