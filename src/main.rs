//! # Subevm call encoder
//!
//! A smoke tool for EVM-compatible Substrate chains. It builds an `EVM.call`
//! dispatchable against the live runtime metadata of a running node and
//! prints the SCALE-encoded call payload to stdout.
//!
//! The defaults reproduce an ERC-20 `name()` call from the Alith dev account
//! against the balances ERC-20 precompile of a local dev node. The encoded
//! call is never signed or submitted.

use alloy_signer_local::PrivateKeySigner;
use clap::Parser;
use sp_core::U256;

use crate::command::{Opts, ERC20_PRECOMPILE};
use crate::sub_client::SubClient;
use crate::types::EvmCall;

mod abi;
mod command;
mod sub_client;
#[cfg(test)]
mod tests;
mod types;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let opts = Opts::parse();

    let signer: PrivateKeySigner = opts.signer_key.parse()?;
    let source = abi::eth_to_h160(signer.address());
    let target = opts
        .target
        .unwrap_or_else(|| abi::num_to_address(ERC20_PRECOMPILE));
    let input = abi::encode_input(&opts.function, &[], &[])?;

    let client = SubClient::from_url(&opts.url).await?;

    let account = client.evm_account(source).await?;
    log::info!(
        "caller {} (nonce {}, balance {})",
        signer.address().to_checksum(None),
        account.nonce,
        account.balance
    );

    let call = EvmCall::new(
        source,
        abi::eth_to_h160(target),
        input,
        opts.gas_limit,
        U256::from(opts.max_fee_per_gas),
    );
    log::info!(
        "encoding EVM.call of {} at {}",
        opts.function,
        target.to_checksum(None)
    );
    let encoded = client.encode_evm_call(&call)?;

    println!("0x{}", hex::encode(&encoded));

    Ok(())
}
