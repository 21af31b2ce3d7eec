use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::contract::StudentContract;

/// Identity of the deployed contract and where its local world state lives.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChaincodeConfig {
    /// Contract name reported in metadata.
    pub name: String,
    /// Contract version reported in metadata.
    pub version: String,
    /// JSON world state document used by local hosts.
    pub state_path: PathBuf,
}

impl Default for ChaincodeConfig {
    fn default() -> Self {
        Self {
            name: StudentContract::DEFAULT_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            state_path: PathBuf::from("student-records.json"),
        }
    }
}

impl ChaincodeConfig {
    /// Build the contract this configuration describes.
    pub fn contract(&self) -> StudentContract {
        StudentContract::with_identity(&self.name, &self.version)
    }
}
