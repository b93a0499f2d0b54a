//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for the development environment commands.
///
/// This struct represents the contents of `realestate.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // docker-compose settings
    // =========================================================================
    /// Compose file passed to `docker-compose -f`.
    #[serde(default = "default_compose_file")]
    pub compose_file: String,

    /// Compose service that runs PostgreSQL.
    #[serde(default = "default_database_service")]
    pub database_service: String,

    // =========================================================================
    // Database settings
    // =========================================================================
    /// Role used by `psql -U`.
    #[serde(default = "default_database_user")]
    pub database_user: String,

    /// Database used by `psql -d`.
    #[serde(default = "default_database_name")]
    pub database_name: String,

    /// Connection URL handed to `migrate -database`.
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Directory holding the numbered SQL migration files.
    #[serde(default = "default_migrations_dir")]
    pub migrations_dir: String,

    // =========================================================================
    // Container settings
    // =========================================================================
    /// Name of the application server container.
    #[serde(default = "default_server_container")]
    pub server_container: String,

    /// Name of the database container.
    #[serde(default = "default_database_container")]
    pub database_container: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            compose_file: default_compose_file(),
            database_service: default_database_service(),
            database_user: default_database_user(),
            database_name: default_database_name(),
            database_url: default_database_url(),
            migrations_dir: default_migrations_dir(),
            server_container: default_server_container(),
            database_container: default_database_container(),
        }
    }
}
