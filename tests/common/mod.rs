#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use reqwest::{Client, Method, StatusCode};
use serde_json::{json, Value};
use uuid::Uuid;

use ca_portal::config::{AdminAccount, Config};
use ca_portal::db::memory::MemoryStore;
use ca_portal::db::Store;
use ca_portal::rate_limit::ContactRateLimiter;

pub const ADMIN_EMAIL: &str = "admin@test.com";
pub const ADMIN_PASSWORD: &str = "password123";
pub const JWT_SECRET: &str = "test-jwt-secret-that-is-long-enough";

/// A running test server over a freshly seeded in-memory store.
pub struct TestApp {
    pub addr: SocketAddr,
    pub store: Arc<MemoryStore>,
    pub client: Client,
    pub upload_dir: PathBuf,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    async fn post_public(&self, path: &str, body: Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(path))
            .json(&body)
            .send()
            .await
            .expect("public request failed");
        let status = resp.status();
        (resp.json().await.unwrap_or(Value::Null), status)
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> (Value, StatusCode) {
        self.post_public(
            "/api/auth/register",
            json!({ "name": name, "email": email, "password": password }),
        )
        .await
    }

    pub async fn login(&self, email: &str, password: &str) -> (Value, StatusCode) {
        self.post_public("/api/auth/login", json!({ "email": email, "password": password }))
            .await
    }

    /// Bearer token for the bootstrapped admin.
    pub async fn admin_token(&self) -> String {
        let (body, status) = self.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;
        assert_eq!(status, StatusCode::OK, "admin login failed: {body}");
        body["token"].as_str().unwrap().to_string()
    }

    /// Register an ordinary user and return their token.
    pub async fn user_token(&self, email: &str) -> String {
        let (body, status) = self.register("Regular User", email, "password123").await;
        assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
        let (body, status) = self.login(email, "password123").await;
        assert_eq!(status, StatusCode::OK, "user login failed: {body}");
        body["token"].as_str().unwrap().to_string()
    }

    /// Sign in through the admin form and return the `Cookie` header value.
    pub async fn admin_cookie(&self) -> String {
        let resp = self
            .client
            .post(self.url("/admin/login"))
            .form(&[("email", ADMIN_EMAIL), ("password", ADMIN_PASSWORD)])
            .send()
            .await
            .expect("admin form login failed");
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        let set_cookie = resp
            .headers()
            .get("set-cookie")
            .expect("no session cookie")
            .to_str()
            .unwrap();
        set_cookie.split(';').next().unwrap().to_string()
    }

    /// Send an authenticated request and decode the JSON reply (`null` if none).
    pub async fn call(
        &self,
        method: Method,
        path: &str,
        token: &str,
        body: Option<&Value>,
    ) -> (Value, StatusCode) {
        let mut req = self.client.request(method, self.url(path)).bearer_auth(token);
        if let Some(body) = body {
            req = req.json(body);
        }
        let resp = req.send().await.expect("api request failed");
        let status = resp.status();
        (resp.json().await.unwrap_or(Value::Null), status)
    }

    pub async fn get_auth(&self, path: &str, token: &str) -> (Value, StatusCode) {
        self.call(Method::GET, path, token, None).await
    }

    pub async fn post_auth(&self, path: &str, token: &str, body: &Value) -> (Value, StatusCode) {
        self.call(Method::POST, path, token, Some(body)).await
    }

    pub async fn put_auth(&self, path: &str, token: &str, body: &Value) -> (Value, StatusCode) {
        self.call(Method::PUT, path, token, Some(body)).await
    }

    pub async fn patch_auth(&self, path: &str, token: &str, body: &Value) -> (Value, StatusCode) {
        self.call(Method::PATCH, path, token, Some(body)).await
    }

    pub async fn delete_auth(&self, path: &str, token: &str) -> (Value, StatusCode) {
        self.call(Method::DELETE, path, token, None).await
    }

    /// GET a page with a session cookie and return (html, status).
    pub async fn get_page(&self, path: &str, cookie: Option<&str>) -> (String, StatusCode) {
        let mut req = self.client.get(self.url(path));
        if let Some(cookie) = cookie {
            req = req.header("cookie", cookie);
        }
        let resp = req.send().await.expect("page request failed");
        let status = resp.status();
        (resp.text().await.unwrap_or_default(), status)
    }

    /// POST a form with a session cookie and return the redirect target.
    pub async fn post_form(&self, path: &str, cookie: &str, form: &[(&str, &str)]) -> String {
        let resp = self
            .client
            .post(self.url(path))
            .header("cookie", cookie)
            .form(form)
            .send()
            .await
            .expect("form post failed");
        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "expected redirect from {path}");
        resp.headers()
            .get("location")
            .unwrap()
            .to_str()
            .unwrap()
            .to_string()
    }
}

pub fn test_config(upload_dir: PathBuf) -> Config {
    Config {
        database_url: None,
        jwt_secret: JWT_SECRET.to_string(),
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        upload_dir,
        max_upload_size: 1_048_576,
        secure_cookies: false,
        log_level: "warn".to_string(),
        admin: Some(AdminAccount {
            name: "Admin".to_string(),
            email: ADMIN_EMAIL.to_string(),
            password: ADMIN_PASSWORD.to_string(),
        }),
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_limiter(ContactRateLimiter::default()).await
}

pub async fn spawn_app_with_limiter(limiter: ContactRateLimiter) -> TestApp {
    let upload_dir =
        std::env::temp_dir().join(format!("ca_portal_test_{}", Uuid::now_v7().simple()));
    let config = test_config(upload_dir.clone());

    let memory = Arc::new(MemoryStore::seeded());
    let store = Store::from_memory(memory.clone());
    ca_portal::bootstrap_admin(&store, &config)
        .await
        .expect("admin bootstrap failed");

    let app = ca_portal::build_app_with_limiter(store, config, Arc::new(limiter));

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .expect("Server failed");
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        addr,
        store: memory,
        client,
        upload_dir,
    }
}

/// Remove anything the test wrote to disk.
pub async fn cleanup(app: TestApp) {
    let _ = tokio::fs::remove_dir_all(&app.upload_dir).await;
}
