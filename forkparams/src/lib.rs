//! Forkparams holds the consensus-level parameter sets of Bitcoin-family networks and tells forks
//! of the same base protocol apart at runtime. Think of it as the bottom of a wallet backend's
//! parameter layer: pick a parameter set by network, or classify one you were handed.
pub use error::ParamsError;
pub use fork::{identify, Fork, ForkRegistry};

pub mod chain;
pub mod config;
pub mod error;
pub mod fork;

/// Convenience re-exports of the types most callers need
pub mod prelude {
    pub use crate::chain::{network::NetworkVariant, params::ChainParameters};
    pub use crate::fork::{bcash::BitcoinCash, bitcoin::Bitcoin, identify, Fork, ForkRegistry};
}
