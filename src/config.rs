use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string. When absent the seeded in-memory store is used.
    pub database_url: Option<String>,
    pub jwt_secret: String,
    pub host: IpAddr,
    pub port: u16,
    pub upload_dir: PathBuf,
    pub max_upload_size: usize,
    pub secure_cookies: bool,
    pub log_level: String,
    pub admin: Option<AdminAccount>,
}

/// Admin account created on startup if it does not exist yet.
#[derive(Debug, Clone)]
pub struct AdminAccount {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let jwt_secret = env_required("JWT_SECRET")?;

        let host: IpAddr = env_or("PORTAL_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid PORTAL_HOST: {e}"))?;

        let port: u16 = env_or("PORTAL_PORT", "5000")
            .parse()
            .map_err(|e| format!("Invalid PORTAL_PORT: {e}"))?;

        let upload_dir = PathBuf::from(env_or("PORTAL_UPLOAD_DIR", "uploads/documents"));

        let max_upload_size: usize = env_or("PORTAL_MAX_UPLOAD_SIZE", "10485760")
            .parse()
            .map_err(|e| format!("Invalid PORTAL_MAX_UPLOAD_SIZE: {e}"))?;

        let secure_cookies = matches!(
            env_or("PORTAL_SECURE_COOKIES", "false").as_str(),
            "true" | "1" | "yes"
        );

        let log_level = env_or("PORTAL_LOG_LEVEL", "info");

        let admin = match (
            std::env::var("ADMIN_EMAIL").ok(),
            std::env::var("ADMIN_PASSWORD").ok(),
        ) {
            (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
                Some(AdminAccount {
                    name: env_or("ADMIN_NAME", "Administrator"),
                    email,
                    password,
                })
            }
            _ => None,
        };

        Ok(Config {
            database_url,
            jwt_secret,
            host,
            port,
            upload_dir,
            max_upload_size,
            secure_cookies,
            log_level,
            admin,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
