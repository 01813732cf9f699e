use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use cinefluent_auth::Algorithm;

/// Runtime configuration, read from the environment once at startup.
/// There is no hot reload; restart to pick up changes.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub secret_key: String,
    pub token_algorithm: Algorithm,
    pub token_lifetime_minutes: i64,
    pub cors_origins: Vec<String>,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> Self {
        let host = std::env::var("HOST")
            .ok()
            .and_then(|value| value.parse::<IpAddr>().ok())
            .unwrap_or(IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)));

        let port = std::env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(8000);

        let secret_key = std::env::var("SECRET_KEY").unwrap_or_else(|_| {
            tracing::warn!("SECRET_KEY not set; using insecure dev default");
            "dev-secret-change-in-production".to_string()
        });

        let token_algorithm = match std::env::var("ALGORITHM").ok().as_deref() {
            None | Some("HS256") => Algorithm::HS256,
            Some("HS384") => Algorithm::HS384,
            Some("HS512") => Algorithm::HS512,
            Some(other) => {
                tracing::warn!(algorithm = other, "unsupported ALGORITHM; falling back to HS256");
                Algorithm::HS256
            }
        };

        let token_lifetime_minutes = std::env::var("ACCESS_TOKEN_EXPIRE_MINUTES")
            .ok()
            .and_then(|value| value.parse::<i64>().ok())
            .filter(|minutes| *minutes > 0)
            .unwrap_or(30);

        let cors_origins = std::env::var("BACKEND_CORS_ORIGINS")
            .map(|value| parse_origins(&value))
            .unwrap_or_else(|_| default_origins());

        let environment =
            std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        Self {
            host,
            port,
            secret_key,
            token_algorithm,
            token_lifetime_minutes,
            cors_origins,
            environment,
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_origins(value: &str) -> Vec<String> {
    let origins: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() { default_origins() } else { origins }
}

/// The common local dev servers the frontend runs on.
fn default_origins() -> Vec<String> {
    [
        "http://localhost:3000",
        "http://localhost:5173",
        "http://localhost:8080",
        "http://127.0.0.1:3000",
        "http://127.0.0.1:5173",
        "http://127.0.0.1:8080",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}
