//! Fork registries and runtime identification of parameter sets.
//!
//! Each fork contributes its own registry: a pair of parameter sets built once per process and a
//! predicate deciding whether an arbitrary [`ChainParameters`] belongs to it. Registries are
//! independent of each other; the [`Fork`] enum only ties together the ones this crate knows.
use crate::{
    chain::{network::NetworkVariant, params::ChainParameters},
    error::ParamsError,
};
use std::{fmt, str::FromStr};
use tracing::debug;

use self::{bcash::BitcoinCash, bitcoin::Bitcoin};

pub mod bcash;
pub mod bitcoin;

/// A fork's parameter registry
pub trait ForkRegistry {
    const NAME: &'static str;
    const FORK_ID: u8;
    const MAINNET_MAGIC: u32;
    const TESTNET_MAGIC: u32;

    /// Returns the process-wide parameter set for `variant`. Repeated calls return the same
    /// reference.
    fn parameters(variant: NetworkVariant) -> &'static ChainParameters;

    /// Whether `params` belongs to this fork, whichever variant it is.
    fn is_fork(params: &ChainParameters) -> bool;

    /// The variant `params` belongs to, if it belongs to this fork at all.
    fn variant_of(params: &ChainParameters) -> Option<NetworkVariant> {
        if !Self::is_fork(params) {
            return None;
        }

        NetworkVariant::ALL
            .into_iter()
            .find(|variant| Self::parameters(*variant).magic_number == params.magic_number)
    }
}

/// The forks known to this crate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Fork {
    Bitcoin,
    BitcoinCash,
}

impl Fork {
    pub const ALL: [Fork; 2] = [Fork::Bitcoin, Fork::BitcoinCash];

    pub fn name(&self) -> &'static str {
        match self {
            Fork::Bitcoin => Bitcoin::NAME,
            Fork::BitcoinCash => BitcoinCash::NAME,
        }
    }

    pub fn fork_id(&self) -> u8 {
        match self {
            Fork::Bitcoin => Bitcoin::FORK_ID,
            Fork::BitcoinCash => BitcoinCash::FORK_ID,
        }
    }

    pub fn magic_number(&self, variant: NetworkVariant) -> u32 {
        self.parameters(variant).magic_number
    }

    pub fn parameters(&self, variant: NetworkVariant) -> &'static ChainParameters {
        match self {
            Fork::Bitcoin => Bitcoin::parameters(variant),
            Fork::BitcoinCash => BitcoinCash::parameters(variant),
        }
    }

    pub fn is_fork(&self, params: &ChainParameters) -> bool {
        match self {
            Fork::Bitcoin => Bitcoin::is_fork(params),
            Fork::BitcoinCash => BitcoinCash::is_fork(params),
        }
    }

    pub fn variant_of(&self, params: &ChainParameters) -> Option<NetworkVariant> {
        match self {
            Fork::Bitcoin => Bitcoin::variant_of(params),
            Fork::BitcoinCash => BitcoinCash::variant_of(params),
        }
    }
}

impl fmt::Display for Fork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Fork {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bitcoin" | "btc" => Ok(Fork::Bitcoin),
            "bitcoin-cash" | "bitcoincash" | "bch" | "bcash" => Ok(Fork::BitcoinCash),
            _ => Err(ParamsError::UnknownFork(s.to_string())),
        }
    }
}

/// Finds the known fork and variant a parameter set belongs to. Returns `None` for parameter sets
/// of unknown forks; this is not an error since foreign sets are expected.
pub fn identify(params: &ChainParameters) -> Option<(Fork, NetworkVariant)> {
    let found = Fork::ALL
        .into_iter()
        .find_map(|fork| fork.variant_of(params).map(|variant| (fork, variant)));

    match found {
        Some((fork, variant)) => debug!(%fork, %variant, "identified parameter set"),
        None => debug!(
            fork_id = params.fork_id,
            magic = %params.magic_hex(),
            "parameter set matches no known fork"
        ),
    }

    found
}
