use anyhow::Context;

const DEFAULT_IP: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// Listener address of the upload service
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: 8080)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_values(
            std::env::var("SERVICE_IP").ok(),
            std::env::var("SERVICE_PORT").ok(),
        )
    }

    fn from_values(ip: Option<String>, port: Option<String>) -> anyhow::Result<Self> {
        let port = match port {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("SERVICE_PORT must be a port number, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            ip: ip.unwrap_or_else(|| DEFAULT_IP.to_string()),
            port,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}
