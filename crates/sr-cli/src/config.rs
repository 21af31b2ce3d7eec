use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use sr_chaincode::ChaincodeConfig;
use sr_server::ServerConfig;

/// Contents of the `--config` TOML file.
///
/// ```toml
/// [chaincode]
/// name = "StudentContract"
/// state_path = "ledger/state.json"
///
/// [server]
/// bind_addr = "0.0.0.0:9999"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub chaincode: ChaincodeConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    /// Load from `path`, or fall back to defaults when no file is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&raw).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn no_file_means_defaults() {
        assert_eq!(AppConfig::load(None).unwrap(), AppConfig::default());
    }

    #[test]
    fn full_file() {
        let config = AppConfig::from_toml(
            r#"
            [chaincode]
            name = "Registry"
            version = "2.0.0"
            state_path = "ledger/state.json"

            [server]
            bind_addr = "0.0.0.0:8080"
            "#,
        )
        .unwrap();
        assert_eq!(config.chaincode.name, "Registry");
        assert_eq!(config.chaincode.state_path, PathBuf::from("ledger/state.json"));
        assert_eq!(config.server.bind_addr.port(), 8080);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config = AppConfig::from_toml("[server]\nbind_addr = \"127.0.0.1:7000\"\n").unwrap();
        assert_eq!(config.chaincode, ChaincodeConfig::default());
        assert_eq!(config.server.bind_addr.port(), 7000);
    }

    #[test]
    fn bad_bind_addr_is_rejected() {
        assert!(AppConfig::from_toml("[server]\nbind_addr = \"nowhere\"\n").is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }
}
