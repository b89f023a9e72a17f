//! Bitcoin Cash parameter registry
use crate::{
    chain::{
        network::NetworkVariant,
        params::{ChainParameters, Checkpoint, NODE_BITCOIN_CASH, NODE_NETWORK},
    },
    fork::ForkRegistry,
};
use once_cell::sync::Lazy;
use tracing::debug;

/// Fork id Bitcoin Cash mixes into its signature hash type
pub const BCASH_FORK_ID: u8 = 0x40;
/// Wire bytes `e3 e1 f3 e8`
pub const BCASH_MAINNET_MAGIC: u32 = 0xe8f3e1e3;
/// Wire bytes `f4 e5 f3 f4`
pub const BCASH_TESTNET_MAGIC: u32 = 0xf4f3e5f4;

const MAINNET_DNS_SEEDS: [&str; 5] = [
    "seed-abc.bitcoinforks.org.",
    "btccash-seeder.bitcoinunlimited.info.",
    "seed.bitprim.org.",
    "seed.deadalnix.me.",
    "seeder.criptolayer.net.",
];

const TESTNET_DNS_SEEDS: [&str; 4] = [
    "testnet-seed-abc.bitcoinforks.org.",
    "testnet-seed.bitprim.org.",
    "testnet-seed.deadalnix.me.",
    "testnet-seeder.criptolayer.net.",
];

static MAINNET: Lazy<ChainParameters> = Lazy::new(|| {
    debug!("building bitcoin cash mainnet parameters");
    ChainParameters {
        fork_id: BCASH_FORK_ID,
        magic_number: BCASH_MAINNET_MAGIC,
        standard_port: 8333,
        services: NODE_NETWORK | NODE_BITCOIN_CASH,
        dns_seeds: MAINNET_DNS_SEEDS.iter().map(|s| s.to_string()).collect(),
        checkpoints: vec![Checkpoint {
            height: 0,
            hash: "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f".to_string(),
            timestamp: 1231006505,
            target: 0x1d00ffff,
        }],
    }
});

static TESTNET: Lazy<ChainParameters> = Lazy::new(|| {
    debug!("building bitcoin cash testnet parameters");
    ChainParameters {
        fork_id: BCASH_FORK_ID,
        magic_number: BCASH_TESTNET_MAGIC,
        standard_port: 18333,
        services: NODE_NETWORK | NODE_BITCOIN_CASH,
        dns_seeds: TESTNET_DNS_SEEDS.iter().map(|s| s.to_string()).collect(),
        checkpoints: vec![Checkpoint {
            height: 0,
            hash: "000000000933ea01ad0ee984209779baaec3ced90fa3f408719526f8d77f4943".to_string(),
            timestamp: 1296688602,
            target: 0x1d00ffff,
        }],
    }
});

/// Returns the Bitcoin Cash parameter set for `variant`
pub fn get_parameters(variant: NetworkVariant) -> &'static ChainParameters {
    match variant {
        NetworkVariant::Mainnet => &*MAINNET,
        NetworkVariant::Testnet => &*TESTNET,
    }
}

/// Whether `params` is a Bitcoin Cash parameter set of either variant.
///
/// The fork id alone is shared with other variants of the base chain family and the magic number
/// alone may collide with unrelated forks, so both must match.
pub fn is_bitcoin_cash(params: &ChainParameters) -> bool {
    params.fork_id == BCASH_FORK_ID
        && (params.magic_number == BCASH_MAINNET_MAGIC
            || params.magic_number == BCASH_TESTNET_MAGIC)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BitcoinCash;

impl ForkRegistry for BitcoinCash {
    const NAME: &'static str = "bitcoin-cash";
    const FORK_ID: u8 = BCASH_FORK_ID;
    const MAINNET_MAGIC: u32 = BCASH_MAINNET_MAGIC;
    const TESTNET_MAGIC: u32 = BCASH_TESTNET_MAGIC;

    fn parameters(variant: NetworkVariant) -> &'static ChainParameters {
        get_parameters(variant)
    }

    fn is_fork(params: &ChainParameters) -> bool {
        is_bitcoin_cash(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assay::assay;
    use rand::Rng;

    #[assay]
    fn every_variant_carries_the_fork_id() {
        for variant in NetworkVariant::ALL {
            assert_eq!(get_parameters(variant).fork_id, BCASH_FORK_ID);
        }
    }

    #[assay]
    fn variants_have_distinct_magic() {
        assert_ne!(
            get_parameters(NetworkVariant::Mainnet).magic_number,
            get_parameters(NetworkVariant::Testnet).magic_number
        );
    }

    #[assay]
    fn registry_sets_are_bitcoin_cash() {
        let mainnet = get_parameters(NetworkVariant::Mainnet);
        let testnet = get_parameters(NetworkVariant::Testnet);

        assert_eq!(mainnet.fork_id, 0x40);
        assert_eq!(mainnet.magic_number, 0xe8f3e1e3);
        assert_eq!(testnet.magic_number, 0xf4f3e5f4);
        assert!(is_bitcoin_cash(mainnet));
        assert!(is_bitcoin_cash(testnet));
    }

    #[assay]
    fn lookups_return_the_same_instance() {
        for variant in NetworkVariant::ALL {
            assert!(std::ptr::eq(get_parameters(variant), get_parameters(variant)));
            assert!(std::ptr::eq(
                get_parameters(variant),
                BitcoinCash::parameters(variant)
            ));
        }
    }

    #[assay]
    fn magic_without_fork_id_is_rejected() {
        let params = ChainParameters {
            fork_id: 0x00,
            magic_number: 0xe8f3e1e3,
            ..Default::default()
        };

        assert!(!is_bitcoin_cash(&params));
    }

    #[assay]
    fn other_fork_ids_never_match() {
        let mut rng = rand::thread_rng();
        for fork_id in (0..=u8::MAX).filter(|id| *id != BCASH_FORK_ID) {
            for magic_number in [BCASH_MAINNET_MAGIC, BCASH_TESTNET_MAGIC, rng.gen()] {
                let params = ChainParameters {
                    fork_id,
                    magic_number,
                    ..Default::default()
                };
                assert!(!is_bitcoin_cash(&params));
            }
        }
    }

    #[assay]
    fn unreserved_magic_never_matches() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let magic_number: u32 = rng.gen();
            if magic_number == BCASH_MAINNET_MAGIC || magic_number == BCASH_TESTNET_MAGIC {
                continue;
            }
            let params = ChainParameters {
                fork_id: BCASH_FORK_ID,
                magic_number,
                ..Default::default()
            };
            assert!(!is_bitcoin_cash(&params));
        }
    }

    #[assay]
    fn either_magic_matches_regardless_of_other_fields() {
        // a mainnet set carrying the testnet magic still belongs to the fork
        let mut params = get_parameters(NetworkVariant::Mainnet).clone();
        params.magic_number = BCASH_TESTNET_MAGIC;
        params.standard_port = 1;
        params.dns_seeds.clear();

        assert!(is_bitcoin_cash(&params));
        assert_eq!(
            BitcoinCash::variant_of(&params),
            Some(NetworkVariant::Testnet)
        );
    }

    #[assay]
    fn carries_network_constants() {
        let mainnet = get_parameters(NetworkVariant::Mainnet);
        let testnet = get_parameters(NetworkVariant::Testnet);

        assert_eq!(mainnet.standard_port, 8333);
        assert_eq!(testnet.standard_port, 18333);
        assert_eq!(mainnet.magic_bytes(), [0xe3, 0xe1, 0xf3, 0xe8]);
        assert_eq!(testnet.magic_bytes(), [0xf4, 0xe5, 0xf3, 0xf4]);
        assert!(mainnet.has_service(NODE_BITCOIN_CASH));
        assert!(!mainnet.dns_seeds.is_empty());
        assert!(!testnet.dns_seeds.is_empty());
        assert_eq!(mainnet.genesis().unwrap().timestamp, 1231006505);
        assert_eq!(testnet.genesis().unwrap().timestamp, 1296688602);
    }

    #[assay]
    fn concurrent_lookups_agree() {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                std::thread::spawn(move || {
                    let variant = NetworkVariant::ALL[i % 2];
                    get_parameters(variant) as *const ChainParameters as usize
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let address = handle.join().unwrap();
            let expected = get_parameters(NetworkVariant::ALL[i % 2]) as *const ChainParameters;
            assert_eq!(address, expected as usize);
        }
    }
}
