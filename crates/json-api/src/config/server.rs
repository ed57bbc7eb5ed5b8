//! Listener settings.

use clap::Args;

#[derive(Debug, Args)]
pub struct ListenConfig {
    /// Interface to bind
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// TCP port; hosting platforms usually provide this as `PORT`
    #[arg(short, long, env = "PORT", default_value_t = 5000)]
    pub port: u16,
}

impl ListenConfig {
    /// `host:port` string handed to the TCP listener.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
