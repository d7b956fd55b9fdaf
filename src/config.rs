//! Environment-driven server configuration.

use std::net::SocketAddr;

use axum::http::HeaderValue;

/// Origins granted cross-origin access on mutating routes when nothing is
/// configured: the known frontend hosts.
const DEFAULT_CORS_ORIGINS: [&str; 2] = ["http://localhost:3000", "https://localhost:3443"];

/// Server settings read from the environment, with defaults suitable for
/// local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allow-list for the gated CORS mode.
    pub cors_origins: Vec<HeaderValue>,
}

impl ServerConfig {
    /// Read `HOST`, `PORT` and `CORS_ORIGINS` (comma-separated). Origins
    /// that are not valid header values are dropped with a warning.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8080);
        let raw = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.join(","));
        let cors_origins = parse_origins(&raw);
        Self {
            host,
            port,
            cors_origins,
        }
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

fn parse_origins(raw: &str) -> Vec<HeaderValue> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_origins_trims_and_drops_empty() {
        let origins = parse_origins(" http://a.example , ,http://b.example");
        assert_eq!(origins.len(), 2);
        assert_eq!(origins[0], "http://a.example");
    }

    #[test]
    fn default_origins_cover_known_frontends() {
        let origins = parse_origins(&DEFAULT_CORS_ORIGINS.join(","));
        assert_eq!(origins.len(), 2);
    }
}
