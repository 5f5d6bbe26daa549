use askama::Template;
use axum::extract::{Path, Query};
use axum::http::{StatusCode, Uri};
use axum::response::Response;
use serde::Deserialize;

use crate::catalog::{self, format_inr, ServiceOffering};
use crate::intake::contact::GENERIC_REQUEST;
use crate::views::render;

struct ServiceCard {
    slug: &'static str,
    title: &'static str,
    tagline: &'static str,
    starting_price: String,
}

struct FaqItem {
    question: &'static str,
    answer: &'static str,
}

struct PlanCard {
    name: &'static str,
    original_price: String,
    discounted_price: String,
    duration: &'static str,
    description: &'static str,
    features: &'static [&'static str],
    not_included: &'static [&'static str],
    popular: bool,
}

#[derive(Template)]
#[template(path = "site/home.html")]
struct HomeTemplate {
    services: Vec<ServiceCard>,
    form_service: String,
}

#[derive(Template)]
#[template(path = "site/pricing.html")]
struct PricingTemplate {
    plans: Vec<PlanCard>,
    discount_percent: u32,
}

#[derive(Template)]
#[template(path = "site/service.html")]
struct ServiceTemplate {
    title: &'static str,
    tagline: &'static str,
    description: &'static str,
    starting_price: String,
    benefits: &'static [&'static str],
    process: &'static [&'static str],
    documents: &'static [&'static str],
    faqs: Vec<FaqItem>,
    form_service: String,
}

#[derive(Template)]
#[template(path = "site/thank_you.html")]
struct ThankYouTemplate {
    service: String,
}

#[derive(Template)]
#[template(path = "site/not_found.html")]
struct NotFoundTemplate {
    path: String,
}

#[derive(Deserialize)]
pub struct ThankYouQuery {
    pub service: Option<String>,
}

fn card(offering: &'static ServiceOffering) -> ServiceCard {
    ServiceCard {
        slug: offering.slug,
        title: offering.title,
        tagline: offering.tagline,
        starting_price: format_inr(offering.starting_price),
    }
}

pub async fn home() -> Response {
    let template = HomeTemplate {
        services: catalog::SERVICES.iter().map(card).collect(),
        form_service: String::new(),
    };
    render(&template, StatusCode::OK)
}

pub async fn pricing() -> Response {
    let plans = catalog::pricing_plans()
        .into_iter()
        .map(|plan| PlanCard {
            name: plan.name,
            original_price: format_inr(plan.original_price),
            discounted_price: format_inr(plan.discounted_price),
            duration: plan.duration,
            description: plan.description,
            features: plan.features,
            not_included: plan.not_included,
            popular: plan.popular,
        })
        .collect();

    let template = PricingTemplate {
        plans,
        discount_percent: catalog::DISCOUNT_PERCENT,
    };
    render(&template, StatusCode::OK)
}

pub async fn service_page(Path(slug): Path<String>) -> Response {
    let Some(offering) = catalog::find_service(&slug) else {
        return not_found(format!("/services/{slug}"));
    };

    let template = ServiceTemplate {
        title: offering.title,
        tagline: offering.tagline,
        description: offering.description,
        starting_price: format_inr(offering.starting_price),
        benefits: offering.benefits,
        process: offering.process,
        documents: offering.documents,
        faqs: offering
            .faqs
            .iter()
            .map(|f| FaqItem {
                question: f.question,
                answer: f.answer,
            })
            .collect(),
        form_service: offering.title.to_string(),
    };
    render(&template, StatusCode::OK)
}

pub async fn thank_you(Query(q): Query<ThankYouQuery>) -> Response {
    let service = q
        .service
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| GENERIC_REQUEST.to_string());
    render(&ThankYouTemplate { service }, StatusCode::OK)
}

pub fn not_found(path: String) -> Response {
    render(&NotFoundTemplate { path }, StatusCode::NOT_FOUND)
}

pub async fn fallback(uri: Uri) -> Response {
    not_found(uri.path().to_string())
}
