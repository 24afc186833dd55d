use std::time::Duration;

/// Server configuration, populated from the environment in `main`.
///
/// The demo credential pair ships as the default on purpose: this system has
/// exactly one admin account and no credential storage (see DESIGN.md).
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: String,
    pub max_body_bytes: usize,
    pub cors_allowed_origins: Vec<String>,
    pub admin_username: String,
    pub admin_password: String,
    pub auth_secret: String,
    pub shutdown_drain: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            max_body_bytes: 16 * 1024,
            cors_allowed_origins: Vec::new(),
            admin_username: "admin".to_string(),
            admin_password: "admin123".to_string(),
            auth_secret: "elimu-demo-signing-secret".to_string(),
            shutdown_drain: Duration::from_secs(5),
        }
    }
}

pub fn validate_startup_config(api: &ApiConfig) -> Result<(), String> {
    if api.max_body_bytes == 0 {
        return Err("max body bytes must be > 0".to_string());
    }
    if api.admin_username.trim().is_empty() || api.admin_password.is_empty() {
        return Err("admin credentials must be non-empty".to_string());
    }
    if api.auth_secret.is_empty() {
        return Err("auth secret must be non-empty".to_string());
    }
    if api.bind_addr.parse::<std::net::SocketAddr>().is_err() {
        return Err(format!("invalid bind address: {}", api.bind_addr));
    }
    Ok(())
}
