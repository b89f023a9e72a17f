use crate::error::ParamsError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Selects one deployment of a chain. Every fork registry holds exactly one parameter set per
/// variant, so lookups keyed by this enum cannot miss.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkVariant {
    #[default]
    Mainnet,
    Testnet,
}

impl NetworkVariant {
    pub const ALL: [NetworkVariant; 2] = [NetworkVariant::Mainnet, NetworkVariant::Testnet];

    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkVariant::Mainnet => "mainnet",
            NetworkVariant::Testnet => "testnet",
        }
    }
}

impl fmt::Display for NetworkVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkVariant {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" | "main" => Ok(NetworkVariant::Mainnet),
            "testnet" | "test" | "testnet3" => Ok(NetworkVariant::Testnet),
            _ => Err(ParamsError::UnknownNetwork(s.to_string())),
        }
    }
}
