use std::env;

use anyhow::Context;

#[derive(Clone)]
pub struct Config {
    /// Endpoint of the spreadsheet scripting service that owns all
    /// persistent data. Immutable for the lifetime of the process.
    pub store_url: String,
    /// Where to send users who need to sign in. The identity provider
    /// redirects back to /auth/callback with the verified profile.
    pub auth_url: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            store_url: env::var("SHEETS_SCRIPT_URL")
                .context("SHEETS_SCRIPT_URL must point at the spreadsheet script endpoint")?,
            auth_url: env::var("AUTH_SIGNIN_URL")
                .unwrap_or_else(|_| "/auth/callback".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
