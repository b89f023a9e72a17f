use crate::{
    chain::{
        network::NetworkVariant,
        params::{ChainParameters, Checkpoint, NODE_NETWORK, NODE_WITNESS},
    },
    fork::ForkRegistry,
};
use once_cell::sync::Lazy;
use tracing::debug;

pub const BITCOIN_FORK_ID: u8 = 0x00;
pub const BITCOIN_MAINNET_MAGIC: u32 = 0xd9b4bef9;
pub const BITCOIN_TESTNET_MAGIC: u32 = 0x0709110b;

static MAINNET: Lazy<ChainParameters> = Lazy::new(|| {
    debug!("building bitcoin mainnet parameters");
    ChainParameters {
        fork_id: BITCOIN_FORK_ID,
        magic_number: BITCOIN_MAINNET_MAGIC,
        standard_port: 8333,
        services: NODE_NETWORK | NODE_WITNESS,
        dns_seeds: vec![
            "seed.bitcoin.sipa.be.".to_string(),
            "dnsseed.bluematt.me.".to_string(),
            "dnsseed.bitcoin.dashjr.org.".to_string(),
            "seed.bitcoinstats.com.".to_string(),
            "seed.bitcoin.jonasschnelli.ch.".to_string(),
            "seed.btc.petertodd.org.".to_string(),
        ],
        checkpoints: vec![Checkpoint {
            height: 0,
            hash: "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f".to_string(),
            timestamp: 1231006505,
            target: 0x1d00ffff,
        }],
    }
});

static TESTNET: Lazy<ChainParameters> = Lazy::new(|| {
    debug!("building bitcoin testnet parameters");
    ChainParameters {
        fork_id: BITCOIN_FORK_ID,
        magic_number: BITCOIN_TESTNET_MAGIC,
        standard_port: 18333,
        services: NODE_NETWORK | NODE_WITNESS,
        dns_seeds: vec![
            "testnet-seed.bitcoin.jonasschnelli.ch.".to_string(),
            "seed.tbtc.petertodd.org.".to_string(),
            "testnet-seed.bluematt.me.".to_string(),
        ],
        checkpoints: vec![Checkpoint {
            height: 0,
            hash: "000000000933ea01ad0ee984209779baaec3ced90fa3f408719526f8d77f4943".to_string(),
            timestamp: 1296688602,
            target: 0x1d00ffff,
        }],
    }
});

pub fn get_parameters(variant: NetworkVariant) -> &'static ChainParameters {
    match variant {
        NetworkVariant::Mainnet => &*MAINNET,
        NetworkVariant::Testnet => &*TESTNET,
    }
}

/// Whether `params` is a Bitcoin parameter set. Forks that kept Bitcoin's magic but set their own
/// fork id are not Bitcoin.
pub fn is_bitcoin(params: &ChainParameters) -> bool {
    params.fork_id == BITCOIN_FORK_ID
        && (params.magic_number == BITCOIN_MAINNET_MAGIC
            || params.magic_number == BITCOIN_TESTNET_MAGIC)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Bitcoin;

impl ForkRegistry for Bitcoin {
    const NAME: &'static str = "bitcoin";
    const FORK_ID: u8 = BITCOIN_FORK_ID;
    const MAINNET_MAGIC: u32 = BITCOIN_MAINNET_MAGIC;
    const TESTNET_MAGIC: u32 = BITCOIN_TESTNET_MAGIC;

    fn parameters(variant: NetworkVariant) -> &'static ChainParameters {
        get_parameters(variant)
    }

    fn is_fork(params: &ChainParameters) -> bool {
        is_bitcoin(params)
    }
}
