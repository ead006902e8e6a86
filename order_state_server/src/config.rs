use std::env;

use log::*;

const DEFAULT_OSS_HOST: &str = "127.0.0.1";
const DEFAULT_OSS_PORT: u16 = 8080;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// The base URL advertised in the `request` hints attached to responses. This is the address clients reach the
    /// server on, which is not necessarily the bind address (e.g. behind a reverse proxy).
    pub public_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_OSS_HOST.to_string(),
            port: DEFAULT_OSS_PORT,
            database_url: String::default(),
            public_url: format!("http://{DEFAULT_OSS_HOST}:{DEFAULT_OSS_PORT}"),
        }
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self { host: host.to_string(), port, public_url: format!("http://{host}:{port}"), ..Default::default() }
    }

    pub fn from_env_or_default() -> Self {
        let host = env::var("OSS_HOST").ok().unwrap_or_else(|| DEFAULT_OSS_HOST.into());
        let port = env::var("OSS_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!(
                        "🪛️ {s} is not a valid port for OSS_PORT. {e} Using the default, {DEFAULT_OSS_PORT}, instead."
                    );
                    DEFAULT_OSS_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_OSS_PORT);
        let database_url = env::var("OSS_DATABASE_URL").ok().unwrap_or_else(|| {
            error!("🪛️ OSS_DATABASE_URL is not set. Please set it to the URL for the order state database.");
            String::default()
        });
        let public_url = env::var("OSS_PUBLIC_URL").ok().unwrap_or_else(|| format!("http://{host}:{port}"));
        Self { host, port, database_url, public_url }
    }
}

/// The base URL used to build `request` hints in responses. Injected into handlers as shared application data.
#[derive(Clone, Debug)]
pub struct PublicUrl(String);

impl PublicUrl {
    pub fn new<S: Into<String>>(url: S) -> Self {
        let url = url.into();
        Self(url.trim_end_matches('/').to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn public_url_strips_trailing_slash() {
        assert_eq!(PublicUrl::new("http://localhost:8080/").as_str(), "http://localhost:8080");
        assert_eq!(PublicUrl::new("http://localhost:8080").as_str(), "http://localhost:8080");
    }
}
