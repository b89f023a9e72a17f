//! Models for a chain's consensus and network constants. Fork registries only interpret
//! `fork_id` and `magic_number`; everything else is carried for the layers above.
use serde::{Deserialize, Serialize};

/// Full node, serves the complete block chain
pub const NODE_NETWORK: u64 = 1;
/// Serves witness data (Bitcoin)
pub const NODE_WITNESS: u64 = 1 << 3;
/// Follows the Bitcoin Cash replay-protected chain
pub const NODE_BITCOIN_CASH: u64 = 1 << 5;

/// Reads the four bytes that open a peer message as a magic number
pub fn magic_from_bytes(bytes: [u8; 4]) -> u32 {
    u32::from_le_bytes(bytes)
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ChainParameters {
    /// Tag shared by every variant of one fork family
    pub fork_id: u8,
    /// Handshake identifier, unique per network variant. Stored as the little-endian reading of
    /// the four bytes that open every peer message.
    pub magic_number: u32,
    pub standard_port: u16,
    pub services: u64,
    pub dns_seeds: Vec<String>,
    // toml requires arrays of tables after plain values, keep this last
    pub checkpoints: Vec<Checkpoint>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Checkpoint {
    pub height: u32,
    /// Block hash in display (big-endian) hex
    pub hash: String,
    pub timestamp: u32,
    /// Compact difficulty target
    pub target: u32,
}

impl ChainParameters {
    /// The magic number as it appears on the wire
    pub fn magic_bytes(&self) -> [u8; 4] {
        self.magic_number.to_le_bytes()
    }

    /// Wire bytes of the magic number as lowercase hex, e.g. `e3e1f3e8`
    pub fn magic_hex(&self) -> String {
        hex::encode(self.magic_bytes())
    }

    pub fn genesis(&self) -> Option<&Checkpoint> {
        self.checkpoints.iter().find(|c| c.height == 0)
    }

    pub fn has_service(&self, service: u64) -> bool {
        self.services & service == service
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assay::assay;

    #[assay]
    fn magic_bytes_are_little_endian() {
        let params = ChainParameters {
            magic_number: 0xe8f3e1e3,
            ..Default::default()
        };

        assert_eq!(params.magic_bytes(), [0xe3, 0xe1, 0xf3, 0xe8]);
        assert_eq!(params.magic_hex(), "e3e1f3e8");
        assert_eq!(magic_from_bytes(params.magic_bytes()), params.magic_number);
    }

    #[assay]
    fn reads_wire_magic() {
        assert_eq!(magic_from_bytes([0xe3, 0xe1, 0xf3, 0xe8]), 0xe8f3e1e3);
        assert_eq!(magic_from_bytes([0xf9, 0xbe, 0xb4, 0xd9]), 0xd9b4bef9);
    }

    #[assay]
    fn genesis_is_the_height_zero_checkpoint() {
        let mut params = ChainParameters::default();
        assert!(params.genesis().is_none());

        params.checkpoints.push(Checkpoint {
            height: 11111,
            ..Default::default()
        });
        params.checkpoints.push(Checkpoint {
            height: 0,
            hash: "genesis".to_string(),
            ..Default::default()
        });

        assert_eq!(params.genesis().unwrap().hash, "genesis");
    }

    #[assay]
    fn checks_service_bits() {
        let params = ChainParameters {
            services: NODE_NETWORK | NODE_BITCOIN_CASH,
            ..Default::default()
        };

        assert!(params.has_service(NODE_NETWORK));
        assert!(params.has_service(NODE_BITCOIN_CASH));
        assert!(params.has_service(NODE_NETWORK | NODE_BITCOIN_CASH));
        assert!(!params.has_service(NODE_WITNESS));
    }
}
