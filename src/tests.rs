//! Live-node smoke test: needs a dev chain with the EVM pallet listening on
//! `ws://127.0.0.1:9944`.

use crate::abi;
use crate::command::ERC20_PRECOMPILE;
use crate::sub_client::SubClient;
use crate::types::EvmCall;
use alloy_primitives::address;
use anyhow::Result;
use parity_scale_codec::Encode;
use sp_core::U256;

const WS_URL: &str = "ws://127.0.0.1:9944";

const ALITH: alloy_primitives::Address = address!("0xf24FF3a9CF04c71Dbc94D0b566f7A27B94566cAc");

#[tokio::test]
#[ignore = "requires a running EVM-compatible node"]
async fn encodes_name_call_against_live_metadata() -> Result<()> {
    let client = SubClient::from_url(WS_URL).await?;

    let target = abi::num_to_address(ERC20_PRECOMPILE);
    let input = abi::encode_input("name()", &[], &[])?;
    let call = EvmCall::new(
        abi::eth_to_h160(ALITH),
        abi::eth_to_h160(target),
        input,
        10_000_000,
        U256::from(10_000_000),
    );

    let encoded = client.encode_evm_call(&call)?;

    // two metadata-resolved index bytes followed by the encoded arguments
    assert_eq!(encoded.len(), 2 + call.encode().len());
    assert_eq!(&encoded[2..], call.encode().as_slice());

    // encoding against the same chain state is byte-identical
    let again = client.encode_evm_call(&call)?;
    assert_eq!(encoded, again);

    Ok(())
}

#[tokio::test]
#[ignore = "requires a running EVM-compatible node"]
async fn reads_the_caller_account_state() -> Result<()> {
    let client = SubClient::from_url(WS_URL).await?;

    // Alith is prefunded on dev chains
    let account = client.evm_account(abi::eth_to_h160(ALITH)).await?;
    assert!(account.balance > U256::zero());

    Ok(())
}
