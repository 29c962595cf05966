use serde::Deserialize;

/// Runtime configuration of the API server.
///
/// Loaded from `config/default.yaml` and `APP_*` environment variables.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Path of the SQLite database file.
    pub database_url: String,
    /// Interface the HTTP server binds to.
    pub address: String,
    /// Port the HTTP server binds to.
    pub port: u16,
    /// Reset the database to the fixture data before serving.
    #[serde(default)]
    pub seed_on_start: bool,
}
