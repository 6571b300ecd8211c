//! Command line interface for the EVM call encoder.

use alloy_primitives::Address;

/// Well-known dev-account ("Alith") ECDSA private key.
pub const ALITH_PRIVATE_KEY: &str =
    "0x5fb92d6e98884f76de468fa3f6278f8807c48bebc13595d45af5bdc4da702133";

/// Integer address of the balances ERC-20 precompile.
pub const ERC20_PRECOMPILE: u128 = 2050;

#[derive(clap::Parser)]
#[clap(version = "0.1", author = "Subevm")]
pub struct Opts {
    /// Node WebSocket endpoint
    #[clap(short, long, default_value = "ws://127.0.0.1:9944")]
    pub url: String,
    /// ECDSA private key of the caller, hex encoded
    #[clap(short, long, default_value = ALITH_PRIVATE_KEY)]
    pub signer_key: String,
    /// Target contract address; defaults to the balances ERC-20 precompile
    #[clap(short, long)]
    pub target: Option<Address>,
    /// Signature of the (no-argument) contract function to call
    #[clap(short, long, default_value = "name()")]
    pub function: String,
    /// Gas limit of the call
    #[clap(long, default_value_t = 10_000_000)]
    pub gas_limit: u64,
    /// Max fee per gas of the call
    #[clap(long, default_value_t = 10_000_000)]
    pub max_fee_per_gas: u128,
}
