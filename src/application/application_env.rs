use crate::schema::SchemaVariant;
use anyhow::anyhow;

const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_PORT: u16 = 27017;
const DEFAULT_DB_NAME: &str = "LA";

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub db_connection_string: String,
    pub db_name: String,

    pub schema_variant: SchemaVariant,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("LA_BOOTSTRAP_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("LA_BOOTSTRAP_LOG_FILENAME")?;
        let db_connection_string = match Self::optional_env_var("LA_BOOTSTRAP_DB_CONNECTION_STRING")
        {
            Some(connection_string) => connection_string,
            None => {
                let host = Self::optional_env_var("LA_BOOTSTRAP_DB_HOST")
                    .unwrap_or_else(|| DEFAULT_DB_HOST.to_string());
                let port = match Self::optional_env_var("LA_BOOTSTRAP_DB_PORT") {
                    Some(port) => port
                        .parse()
                        .map_err(|_| anyhow!("LA_BOOTSTRAP_DB_PORT is not a valid port"))?,
                    None => DEFAULT_DB_PORT,
                };
                let credentials = Self::optional_env_var("LA_BOOTSTRAP_DB_USER").map(|user| {
                    let password =
                        Self::optional_env_var("LA_BOOTSTRAP_DB_PASSWORD").unwrap_or_default();
                    (user, password)
                });

                compose_connection_string(&host, port, credentials)
            }
        };
        let db_name = Self::optional_env_var("LA_BOOTSTRAP_DB_NAME")
            .unwrap_or_else(|| DEFAULT_DB_NAME.to_string());
        let schema_variant = match Self::optional_env_var("LA_BOOTSTRAP_SCHEMA_VARIANT") {
            Some(variant) => variant.parse().map_err(|_| {
                anyhow!("LA_BOOTSTRAP_SCHEMA_VARIANT has unknown value '{variant}'")
            })?,
            None => SchemaVariant::default(),
        };

        Ok(Self {
            log_directory,
            log_filename,
            db_connection_string,
            db_name,
            schema_variant,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }

    fn optional_env_var(name: &'static str) -> Option<String> {
        std::env::var(name).ok().filter(|value| !value.is_empty())
    }
}

///
/// Builds `mongodb://[user:password@]host:port`.
/// User and password are percent-encoded
///
fn compose_connection_string(host: &str, port: u16, credentials: Option<(String, String)>) -> String {
    match credentials {
        Some((user, password)) => {
            let user = urlencoding::encode(&user);
            let password = urlencoding::encode(&password);
            format!("mongodb://{user}:{password}@{host}:{port}")
        }
        None => format!("mongodb://{host}:{port}"),
    }
}
