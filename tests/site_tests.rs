mod common;

use std::time::Duration;

use reqwest::StatusCode;
use serde_json::json;

use ca_portal::rate_limit::ContactRateLimiter;

// ── Marketing pages ─────────────────────────────────────────────

#[tokio::test]
async fn home_lists_services_and_form() {
    let app = common::spawn_app().await;

    let (html, status) = app.get_page("/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Company Registration"));
    assert!(html.contains("/services/gst-registration"));
    assert!(html.contains("action=\"/contact\""));
    assert!(html.contains("name=\"website\""));

    common::cleanup(app).await;
}

#[tokio::test]
async fn pricing_shows_discounted_tiers() {
    let app = common::spawn_app().await;

    let (html, status) = app.get_page("/pricing", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("₹7,141"));
    assert!(html.contains("₹4,999"));
    assert!(html.contains("₹7,499"));
    assert!(html.contains("₹12,498"));
    assert!(html.contains("Most popular"));
    assert!(html.contains("30% off"));

    common::cleanup(app).await;
}

#[tokio::test]
async fn service_page_prefills_enquiry() {
    let app = common::spawn_app().await;

    let (html, status) = app.get_page("/services/trademark-registration", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Trademark Registration"));
    assert!(html.contains("₹25,000"));
    assert!(html.contains("name=\"service\" value=\"Trademark Registration\""));

    let (html, status) = app.get_page("/services/visa-services", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Page not found"));

    common::cleanup(app).await;
}

#[tokio::test]
async fn unknown_path_renders_404_page() {
    let app = common::spawn_app().await;

    let (html, status) = app.get_page("/no-such-page", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("/no-such-page"));

    common::cleanup(app).await;
}

#[tokio::test]
async fn thank_you_names_the_service() {
    let app = common::spawn_app().await;

    let (html, _) = app.get_page("/thank-you?service=GST+Registration", None).await;
    assert!(html.contains("GST Registration"));

    let (html, _) = app.get_page("/thank-you", None).await;
    assert!(html.contains("your consultation request"));

    let (html, _) = app
        .get_page("/thank-you?service=%3Cscript%3Ealert(1)%3C%2Fscript%3E", None)
        .await;
    assert!(!html.contains("<script>alert(1)</script>"));

    common::cleanup(app).await;
}

// ── Contact form ────────────────────────────────────────────────

#[tokio::test]
async fn contact_form_redirects_and_stores_lead() {
    let app = common::spawn_app().await;

    let resp = app
        .client
        .post(app.url("/contact"))
        .form(&[
            ("name", "Kavya Nair"),
            ("email", "kavya@example.com"),
            ("phone", "9876512345"),
            ("service", "GST Registration"),
            ("website", ""),
        ])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers()["location"],
        "/thank-you?service=GST+Registration"
    );

    let token = app.admin_token().await;
    let (leads, _) = app.get_auth("/api/leads?search=kavya", &token).await;
    assert_eq!(leads.as_array().unwrap().len(), 1);
    assert_eq!(leads[0]["status"], "new");
    assert_eq!(leads[0]["service"], "GST Registration");

    common::cleanup(app).await;
}

#[tokio::test]
async fn contact_form_uses_plan_then_generic_subject() {
    let app = common::spawn_app().await;

    let resp = app
        .client
        .post(app.url("/contact"))
        .form(&[
            ("name", "Kavya Nair"),
            ("email", "kavya@example.com"),
            ("phone", "9876512345"),
            ("plan", "Premium"),
        ])
        .send()
        .await
        .unwrap();
    assert_eq!(
        resp.headers()["location"],
        "/thank-you?service=Premium+plan"
    );

    let resp = app
        .client
        .post(app.url("/contact"))
        .json(&json!({
            "name": "Arjun Rao",
            "email": "arjun@example.com",
            "phone": "9876598765"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers()["location"],
        "/thank-you?service=your+consultation+request"
    );

    common::cleanup(app).await;
}

#[tokio::test]
async fn contact_honeypot_is_silently_dropped() {
    let app = common::spawn_app().await;

    let resp = app
        .client
        .post(app.url("/contact"))
        .form(&[
            ("name", "Spam Bot"),
            ("email", "bot@spam.com"),
            ("phone", "9876512345"),
            ("website", "http://spam.example"),
        ])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let token = app.admin_token().await;
    let (leads, _) = app.get_auth("/api/leads", &token).await;
    assert_eq!(leads.as_array().unwrap().len(), 4);

    common::cleanup(app).await;
}

#[tokio::test]
async fn contact_rejects_invalid_input() {
    let app = common::spawn_app().await;

    let resp = app
        .client
        .post(app.url("/contact"))
        .form(&[("name", "Kavya"), ("email", "nope"), ("phone", "9876512345")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let long = "x".repeat(501);
    let resp = app
        .client
        .post(app.url("/contact"))
        .form(&[
            ("name", "Kavya"),
            ("email", "kavya@example.com"),
            ("phone", "9876512345"),
            ("message", long.as_str()),
        ])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    common::cleanup(app).await;
}

#[tokio::test]
async fn contact_is_rate_limited_per_ip() {
    let app =
        common::spawn_app_with_limiter(ContactRateLimiter::new(2, Duration::from_secs(60))).await;

    let form = [
        ("name", "Kavya Nair"),
        ("email", "kavya@example.com"),
        ("phone", "9876512345"),
    ];
    for _ in 0..2 {
        let resp = app.client.post(app.url("/contact")).form(&form).send().await.unwrap();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    }

    let resp = app.client.post(app.url("/contact")).form(&form).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);

    common::cleanup(app).await;
}

// ── Admin panel ─────────────────────────────────────────────────

#[tokio::test]
async fn admin_pages_redirect_to_login_without_session() {
    let app = common::spawn_app().await;

    let resp = app.client.get(app.url("/admin/customers")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()["location"], "/admin/login");

    let resp = app
        .client
        .post(app.url("/admin/customers/CUST001/delete"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.headers()["location"], "/admin/login");

    common::cleanup(app).await;
}

#[tokio::test]
async fn admin_login_rejects_bad_password_and_non_admins() {
    let app = common::spawn_app().await;

    let resp = app
        .client
        .post(app.url("/admin/login"))
        .form(&[("email", common::ADMIN_EMAIL), ("password", "wrong-password")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(resp.text().await.unwrap().contains("Invalid Credentials"));

    app.user_token("user@test.com").await;
    let resp = app
        .client
        .post(app.url("/admin/login"))
        .form(&[("email", "user@test.com"), ("password", "password123")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    common::cleanup(app).await;
}

#[tokio::test]
async fn customers_panel_lists_and_searches() {
    let app = common::spawn_app().await;
    let cookie = app.admin_cookie().await;

    let (html, status) = app.get_page("/admin/customers", Some(&cookie)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Rajesh Kumar"));
    assert!(html.contains("Priya Sharma"));

    let (html, _) = app.get_page("/admin/customers?search=amit", Some(&cookie)).await;
    assert!(html.contains("Amit Patel"));
    assert!(!html.contains("Priya Sharma"));

    common::cleanup(app).await;
}

#[tokio::test]
async fn panel_actions_update_store_and_report() {
    let app = common::spawn_app().await;
    let cookie = app.admin_cookie().await;
    let token = app.admin_token().await;

    let location = app
        .post_form("/admin/customers/CUST002/priority", &cookie, &[("value", "high")])
        .await;
    assert!(location.starts_with("/admin/customers?notice="));
    let (customer, _) = app.get_auth("/api/customers/CUST002", &token).await;
    assert_eq!(customer["priority"], "high");

    app.post_form("/admin/customers/CUST002/status", &cookie, &[("value", "inactive")])
        .await;
    let (customer, _) = app.get_auth("/api/customers/CUST002", &token).await;
    assert_eq!(customer["status"], "inactive");

    app.post_form("/admin/leads/LEAD001/status", &cookie, &[("value", "contacted")])
        .await;
    let (lead, _) = app.get_auth("/api/leads/LEAD001", &token).await;
    assert_eq!(lead["status"], "contacted");

    app.post_form("/admin/services/SRV003/status", &cookie, &[("value", "completed")])
        .await;
    let (service, _) = app.get_auth("/api/services/SRV003", &token).await;
    assert!(service["completedDate"].is_string());

    app.post_form(
        "/admin/services/SRV003/documents",
        &cookie,
        &[("name", "Identity Proof"), ("status", "verified")],
    )
    .await;
    let (service, _) = app.get_auth("/api/services/SRV003", &token).await;
    assert_eq!(service["uploadedDocuments"][1]["status"], "verified");

    let location = app.post_form("/admin/leads/LEAD004/delete", &cookie, &[]).await;
    assert!(location.contains("notice="));
    let (_, status) = app.get_auth("/api/leads/LEAD004", &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    common::cleanup(app).await;
}

#[tokio::test]
async fn failed_panel_action_keeps_stored_value() {
    let app = common::spawn_app().await;
    let cookie = app.admin_cookie().await;
    let token = app.admin_token().await;

    let location = app
        .post_form("/admin/leads/LEAD002/priority", &cookie, &[("value", "urgent")])
        .await;
    assert!(location.starts_with("/admin/leads?error="));
    let (lead, _) = app.get_auth("/api/leads/LEAD002", &token).await;
    assert_eq!(lead["priority"], "low");

    let location = app
        .post_form("/admin/customers/CUST999/status", &cookie, &[("value", "inactive")])
        .await;
    assert!(location.contains("error=Customer+not+found"));

    // Store outage: the edit is reported as failed, nothing is pretended.
    app.store.set_offline(true);
    let location = app
        .post_form("/admin/customers/CUST001/priority", &cookie, &[("value", "low")])
        .await;
    assert!(location.starts_with("/admin/customers?error="));
    app.store.set_offline(false);

    let (customer, _) = app.get_auth("/api/customers/CUST001", &token).await;
    assert_eq!(customer["priority"], "high");

    common::cleanup(app).await;
}

#[tokio::test]
async fn panels_fall_back_to_demo_data_when_store_is_down() {
    let app = common::spawn_app().await;
    let cookie = app.admin_cookie().await;

    // Remove a record so the live list and the demo list differ.
    let token = app.admin_token().await;
    app.delete_auth("/api/leads/LEAD003", &token).await;

    app.store.set_offline(true);

    let (html, status) = app.get_page("/admin/leads", Some(&cookie)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Showing demo data"));
    assert!(html.contains("Vikram Singh"));

    let (html, _) = app.get_page("/admin/services", Some(&cookie)).await;
    assert!(html.contains("Showing demo data"));

    app.store.set_offline(false);
    let (html, _) = app.get_page("/admin/leads", Some(&cookie)).await;
    assert!(!html.contains("Showing demo data"));
    assert!(!html.contains("Vikram Singh"));

    common::cleanup(app).await;
}

#[tokio::test]
async fn logout_clears_session_cookie() {
    let app = common::spawn_app().await;
    let cookie = app.admin_cookie().await;

    let resp = app
        .client
        .post(app.url("/admin/logout"))
        .header("cookie", &cookie)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let set_cookie = resp.headers()["set-cookie"].to_str().unwrap();
    assert!(set_cookie.starts_with("access_token=;"));
    assert!(set_cookie.contains("Max-Age=0"));

    common::cleanup(app).await;
}
