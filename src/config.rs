use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub static_dir: PathBuf,
    pub databricks_url: String,
    pub databricks_token: String,
    pub timeout_ms: u64,
}

impl AppConfig {
    /// Resolve configuration from the process environment, once at startup.
    ///
    /// `DATABRICKS_URL` and `DATABRICKS_TOKEN` are not validated here; if
    /// either is missing the forwarding call fails downstream instead of at
    /// boot.
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(8000);

        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("frontend"));

        let databricks_url = env::var("DATABRICKS_URL").unwrap_or_default();
        let databricks_token = env::var("DATABRICKS_TOKEN").unwrap_or_default();

        let timeout_ms = env::var("DATABRICKS_TIMEOUT_MS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(30_000);

        Self {
            port,
            static_dir,
            databricks_url,
            databricks_token,
            timeout_ms,
        }
    }
}
