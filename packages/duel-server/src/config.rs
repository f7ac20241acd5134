use std::net::{IpAddr, SocketAddr};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;
const DEFAULT_TEXTS_TABLE: &str = "typing_texts";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupabaseConfig {
    pub url: String,
    pub key: String,
    pub table: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub supabase: Option<SupabaseConfig>,
    pub finish_on_disconnect: bool,
    pub log_format: LogFormat,
}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    InvalidValue { name: &'static str, value: String },
    Missing(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { name, value } => {
                write!(f, "Invalid value for {}: {}", name, value)
            }
            ConfigError::Missing(name) => write!(f, "{} environment variable must be set", name),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host: IpAddr = host.parse().map_err(|_| ConfigError::InvalidValue {
            name: "HOST",
            value: host.clone(),
        })?;

        let port = match lookup("PORT") {
            Some(port) => port.parse().map_err(|_| ConfigError::InvalidValue {
                name: "PORT",
                value: port.clone(),
            })?,
            None => DEFAULT_PORT,
        };

        let supabase = match (lookup("SUPABASE_URL"), lookup("SUPABASE_KEY")) {
            (Some(url), Some(key)) => Some(SupabaseConfig {
                url,
                key,
                table: lookup("TEXTS_TABLE").unwrap_or_else(|| DEFAULT_TEXTS_TABLE.to_string()),
            }),
            (Some(_), None) => return Err(ConfigError::Missing("SUPABASE_KEY")),
            (None, Some(_)) => return Err(ConfigError::Missing("SUPABASE_URL")),
            (None, None) => None,
        };

        let finish_on_disconnect = match lookup("FINISH_ON_DISCONNECT") {
            Some(value) => parse_bool("FINISH_ON_DISCONNECT", &value)?,
            None => false,
        };

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    name: "LOG_FORMAT",
                    value: other.to_string(),
                })
            }
        };

        Ok(Config {
            bind_addr: SocketAddr::new(host, port),
            supabase,
            finish_on_disconnect,
            log_format,
        })
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            name,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:3001".parse().unwrap());
        assert!(config.supabase.is_none());
        assert!(!config.finish_on_disconnect);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_supabase_pair() {
        let config = load(&[
            ("SUPABASE_URL", "https://demo.supabase.co"),
            ("SUPABASE_KEY", "anon"),
        ])
        .unwrap();

        assert_eq!(
            config.supabase,
            Some(SupabaseConfig {
                url: "https://demo.supabase.co".to_string(),
                key: "anon".to_string(),
                table: "typing_texts".to_string(),
            })
        );
    }

    #[test]
    fn test_half_configured_supabase_is_rejected() {
        assert_eq!(
            load(&[("SUPABASE_URL", "https://demo.supabase.co")]).unwrap_err(),
            ConfigError::Missing("SUPABASE_KEY")
        );
        assert_eq!(
            load(&[("SUPABASE_KEY", "anon")]).unwrap_err(),
            ConfigError::Missing("SUPABASE_URL")
        );
    }

    #[rstest]
    #[case("PORT", "not-a-port")]
    #[case("PORT", "70000")]
    #[case("HOST", "localhost:80")]
    #[case("FINISH_ON_DISCONNECT", "maybe")]
    #[case("LOG_FORMAT", "xml")]
    fn test_invalid_values(#[case] name: &str, #[case] value: &str) {
        assert!(matches!(
            load(&[(name, value)]),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("FINISH_ON_DISCONNECT", "TRUE"),
            ("LOG_FORMAT", "json"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:8080".parse().unwrap());
        assert!(config.finish_on_disconnect);
        assert_eq!(config.log_format, LogFormat::Json);
    }
}
