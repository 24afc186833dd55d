#![forbid(unsafe_code)]

use elimu_server::{build_router, validate_startup_config, ApiConfig, AppState, MemoryStore};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(default)
}

fn env_str(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_list(name: &str) -> Vec<String> {
    env::var(name)
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if env_bool("ELIMU_LOG_JSON", false) {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).expect("register SIGTERM");
        let mut sigint = signal(SignalKind::interrupt()).expect("register SIGINT");
        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    init_tracing();

    let default = ApiConfig::default();
    let api = ApiConfig {
        bind_addr: env_str("ELIMU_BIND", &default.bind_addr),
        max_body_bytes: env_usize("ELIMU_MAX_BODY_BYTES", default.max_body_bytes),
        cors_allowed_origins: env_list("ELIMU_CORS_ALLOWED_ORIGINS"),
        admin_username: env_str("ELIMU_ADMIN_USERNAME", &default.admin_username),
        admin_password: env_str("ELIMU_ADMIN_PASSWORD", &default.admin_password),
        auth_secret: env_str("ELIMU_AUTH_SECRET", &default.auth_secret),
        shutdown_drain: Duration::from_millis(env_u64("ELIMU_SHUTDOWN_DRAIN_MS", 5000)),
    };
    validate_startup_config(&api)?;

    let store = Arc::new(MemoryStore::new());
    let state = AppState::with_config(store, api.clone());
    let app = build_router(state);

    let listener = TcpListener::bind(&api.bind_addr)
        .await
        .map_err(|e| format!("bind {} failed: {e}", api.bind_addr))?;
    info!("elimu-server listening on {}", api.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            wait_for_shutdown_signal().await;
            info!("shutdown signal received, draining requests");
            tokio::time::sleep(api.shutdown_drain).await;
        })
        .await
        .map_err(|e| format!("server failed: {e}"))
}
