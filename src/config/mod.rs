use std::env;
use std::path::PathBuf;

use crate::errors::AppError;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_MAX_DOCUMENT_BYTES: usize = 102400;
pub const DEFAULT_MAX_DOCUMENT_PREVIEWS: usize = 256;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub seed_employees_path: Option<PathBuf>,
    pub max_document_bytes: usize,
    pub max_document_previews: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            seed_employees_path: None,
            max_document_bytes: DEFAULT_MAX_DOCUMENT_BYTES,
            max_document_previews: DEFAULT_MAX_DOCUMENT_PREVIEWS,
        }
    }
}

impl Config {
    /// Reads `BIND_ADDR`, `SEED_EMPLOYEES_PATH`, `MAX_DOCUMENT_BYTES` and
    /// `MAX_DOCUMENT_PREVIEWS`.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = Config::default();

        let bind_addr = lookup("BIND_ADDR")
            .filter(|addr| !addr.is_empty())
            .unwrap_or(defaults.bind_addr);

        let seed_employees_path = lookup("SEED_EMPLOYEES_PATH")
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        let max_document_bytes =
            parse_limit(&lookup, "MAX_DOCUMENT_BYTES", defaults.max_document_bytes)?;
        let max_document_previews =
            parse_limit(&lookup, "MAX_DOCUMENT_PREVIEWS", defaults.max_document_previews)?;

        Ok(Config {
            bind_addr,
            seed_employees_path,
            max_document_bytes,
            max_document_previews,
        })
    }
}

fn parse_limit(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: usize,
) -> Result<usize, AppError> {
    match lookup(key) {
        Some(raw) => raw.parse::<usize>().map_err(|_| {
            AppError::InternalServerError(format!("{} must be a number, got '{}'", key, raw))
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.seed_employees_path, None);
        assert_eq!(config.max_document_bytes, DEFAULT_MAX_DOCUMENT_BYTES);
        assert_eq!(config.max_document_previews, DEFAULT_MAX_DOCUMENT_PREVIEWS);
    }

    #[test]
    fn values_are_read_from_environment() {
        let config = Config::from_lookup(lookup(&[
            ("BIND_ADDR", "0.0.0.0:9000"),
            ("SEED_EMPLOYEES_PATH", "data/employees.seed.json"),
            ("MAX_DOCUMENT_BYTES", "2048"),
            ("MAX_DOCUMENT_PREVIEWS", "16"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:9000");
        assert_eq!(
            config.seed_employees_path,
            Some(PathBuf::from("data/employees.seed.json"))
        );
        assert_eq!(config.max_document_bytes, 2048);
        assert_eq!(config.max_document_previews, 16);
    }

    #[test]
    fn bad_document_limit_is_rejected() {
        let err = Config::from_lookup(lookup(&[("MAX_DOCUMENT_BYTES", "lots")])).unwrap_err();
        assert!(err.to_string().contains("MAX_DOCUMENT_BYTES"));

        let err = Config::from_lookup(lookup(&[("MAX_DOCUMENT_PREVIEWS", "-1")])).unwrap_err();
        assert!(err.to_string().contains("MAX_DOCUMENT_PREVIEWS"));
    }
}
