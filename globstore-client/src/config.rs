//! Connection-file parsing
//!
//! A connection file is plain `key:value` text, one pair per line:
//!
//! ```text
//! ip: 127.0.0.1
//! port: 8090
//! namespace: USER
//! username: demo
//! password: demo
//! ```
//!
//! Whitespace is stripped from each line before splitting, blank lines are
//! ignored, and every one of the five keys is required; a missing key is a
//! fatal configuration error.

use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read connection file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed line {line} in connection file (expected key:value)")]
    MalformedLine { line: usize },

    #[error("missing required key '{0}' in connection file")]
    MissingKey(&'static str),

    #[error("invalid port '{0}' in connection file")]
    InvalidPort(String),
}

/// Parsed connection settings for a remote globstore server
#[derive(Clone, Debug, PartialEq)]
pub struct ConnectConfig {
    pub ip: String,
    pub port: u16,
    pub namespace: String,
    pub username: String,
    pub password: String,
}

const REQUIRED_KEYS: [&str; 5] = ["ip", "port", "namespace", "username", "password"];

impl ConnectConfig {
    /// Read and parse a connection file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Parse connection-file text.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let mut pairs: HashMap<&str, String> = HashMap::new();
        for (idx, raw) in text.lines().enumerate() {
            // Strip all whitespace so "port : 8090 " and "port:8090" agree
            let line: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once(':') else {
                return Err(ConfigError::MalformedLine { line: idx + 1 });
            };
            if let Some(key) = REQUIRED_KEYS.iter().find(|k| **k == key) {
                pairs.insert(key, value.to_string());
            }
        }

        let mut take = |key: &'static str| {
            pairs.remove(key).ok_or(ConfigError::MissingKey(key))
        };
        let ip = take("ip")?;
        let port_text = take("port")?;
        let port = port_text
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(port_text.clone()))?;
        Ok(ConnectConfig {
            ip,
            port,
            namespace: take("namespace")?,
            username: take("username")?,
            password: take("password")?,
        })
    }

    /// Server root URL derived from ip + port
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.ip, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "ip: 127.0.0.1\nport: 8090\nnamespace: USER\nusername: demo\npassword: secret\n";

    #[test]
    fn test_parse_complete_file() {
        let cfg = ConnectConfig::parse(SAMPLE).unwrap();
        assert_eq!(cfg.ip, "127.0.0.1");
        assert_eq!(cfg.port, 8090);
        assert_eq!(cfg.namespace, "USER");
        assert_eq!(cfg.base_url(), "http://127.0.0.1:8090");
    }

    #[test]
    fn test_whitespace_and_blank_lines_tolerated() {
        let text = "  ip :\t127.0.0.1 \n\nport:8090\nnamespace:USER\nusername:a\npassword:b\n";
        let cfg = ConnectConfig::parse(text).unwrap();
        assert_eq!(cfg.ip, "127.0.0.1");
        assert_eq!(cfg.port, 8090);
    }

    #[test]
    fn test_missing_key_is_fatal() {
        let text = "ip:127.0.0.1\nport:8090\nusername:a\npassword:b\n";
        assert!(matches!(
            ConnectConfig::parse(text),
            Err(ConfigError::MissingKey("namespace"))
        ));
    }

    #[test]
    fn test_invalid_port() {
        let text = "ip:x\nport:eighty\nnamespace:n\nusername:a\npassword:b\n";
        assert!(matches!(
            ConnectConfig::parse(text),
            Err(ConfigError::InvalidPort(_))
        ));
    }

    #[test]
    fn test_malformed_line() {
        let text = "ip:127.0.0.1\nnot-a-pair\n";
        assert!(matches!(
            ConnectConfig::parse(text),
            Err(ConfigError::MalformedLine { line: 2 })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let cfg = ConnectConfig::load(file.path()).unwrap();
        assert_eq!(cfg.username, "demo");
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            ConnectConfig::load("/nonexistent/connection.config"),
            Err(ConfigError::Io { .. })
        ));
    }
}
