use crate::domain::role::NavigationTarget;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Chain id of Hedera Previewnet.
pub const PREVIEWNET_CHAIN_ID: u64 = 297;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Shown to the user when they are on another chain.
    pub name: String,
    pub chain_id: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            name: "Previewnet".to_string(),
            chain_id: PREVIEWNET_CHAIN_ID,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Routes {
    pub transporter: String,
    pub dashboard: String,
}

impl Default for Routes {
    fn default() -> Self {
        Self {
            transporter: "/transport".to_string(),
            dashboard: "/dashboard".to_string(),
        }
    }
}

impl Routes {
    pub fn route_for(&self, target: NavigationTarget) -> &str {
        match target {
            NavigationTarget::Transporter => &self.transporter,
            NavigationTarget::Dashboard => &self.dashboard,
        }
    }
}

/// Settings for a [`RegistrationFlow`](crate::application::flow::RegistrationFlow).
///
/// Every field has a default, so a config file only needs the keys it
/// overrides:
///
/// ```json
/// { "contract_address": "0x5fbdb2315678afecb367f032d93f642f64180aa3" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    pub network: NetworkConfig,
    pub contract_address: String,
    /// Key under which every notification of the flow is posted.
    pub notification_key: String,
    pub routes: Routes,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            network: NetworkConfig::default(),
            contract_address: "0x0000000000000000000000000000000000000000".to_string(),
            notification_key: "register".to_string(),
            routes: Routes::default(),
        }
    }
}

impl FlowConfig {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}
