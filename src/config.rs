use thiserror::Error;

pub const DEFAULT_LISTEN_PORT: u16 = 8080;
pub const DEFAULT_DATABASE_NAME: &str = "graphql-mongo-zeit";
pub const DEFAULT_COLLECTION_NAME: &str = "posts";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    Missing(&'static str),
    #[error("invalid listen port {0:?}")]
    InvalidPort(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database_name: String,
    pub collection_name: String,
}

impl DatabaseConfig {
    /// Connection string handed to the MongoDB driver. Credentials are used
    /// as given, no escaping is applied.
    pub fn uri(&self) -> String {
        format!("mongodb://{}:{}@{}", self.user, self.password, self.host)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub listen_port: u16,
    pub database: DatabaseConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. `HOST`, `USER` and
    /// `PWD` are required, everything else falls back to a default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));

        let listen_port = match lookup("PORT") {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(port))?,
            None => DEFAULT_LISTEN_PORT,
        };

        Ok(ServerConfig {
            listen_port,
            database: DatabaseConfig {
                host: required("HOST")?,
                user: required("USER")?,
                password: required("PWD")?,
                database_name: lookup("DATABASE")
                    .unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string()),
                collection_name: lookup("COLLECTION")
                    .unwrap_or_else(|| DEFAULT_COLLECTION_NAME.to_string()),
            },
        })
    }
}
