//! Substrate node client
//!
//! Wrapped structure for the subxt online client, used to build `EVM.call`
//! dispatchables against the chain's live metadata.

use crate::types::{ChainConfig, EvmAccount, EvmCall, SubEvmError};
use parity_scale_codec::{Decode, Encode};
use sp_core::H160;
use subxt::backend::legacy::LegacyRpcMethods;
use subxt::backend::rpc::RpcClient;
use subxt::OnlineClient;

/// Name of the EVM pallet in the runtime.
const EVM_PALLET: &str = "EVM";
/// Name of the contract-call dispatchable within the EVM pallet.
const EVM_CALL_FUNCTION: &str = "call";
/// Runtime API returning the EVM view of an account.
const ACCOUNT_BASIC_RUNTIME_API: &str = "EthereumRuntimeRPCApi_account_basic";

/// Represents a connection to the Substrate chain
#[derive(Clone)]
pub struct SubClient {
    /// Represents a chains API
    api: OnlineClient<ChainConfig>,
    /// Represents a connection to RPC
    rpc: LegacyRpcMethods<ChainConfig>,
}

impl SubClient {
    /// Connect to a node endpoint.
    ///
    /// Fetching the runtime metadata happens here; any connection failure
    /// propagates to the caller.
    pub async fn from_url(url: &str) -> anyhow::Result<Self> {
        let rpc = RpcClient::from_url(url).await?;
        let api = OnlineClient::<ChainConfig>::from_rpc_client(rpc.clone()).await?;
        let rpc = LegacyRpcMethods::new(rpc);

        let chain = rpc.system_chain().await?;
        let system_props = rpc.system_properties().await?;
        log::debug!("system properties: {:?}", system_props);
        let decimals = system_props
            .get("tokenDecimals")
            .and_then(|v| v.as_u64())
            .unwrap_or(18);
        let symbol = system_props
            .get("tokenSymbol")
            .and_then(|v| v.as_str())
            .unwrap_or("UNIT")
            .to_string();
        log::info!("connected to {} (token {}, {} decimals)", chain, symbol, decimals);

        Ok(Self { api, rpc })
    }
}

impl SubClient {
    /// SCALE-encode an `EVM.call` dispatchable against the chain's metadata.
    pub fn encode_evm_call(&self, call: &EvmCall) -> Result<Vec<u8>, SubEvmError> {
        let metadata = self.api.metadata();
        let pallet = metadata
            .pallet_by_name(EVM_PALLET)
            .ok_or(SubEvmError::ClientError {
                message: "EVM pallet not found in metadata".to_string(),
            })?;
        let variant =
            pallet
                .call_variant_by_name(EVM_CALL_FUNCTION)
                .ok_or(SubEvmError::ClientError {
                    message: "EVM pallet has no `call` dispatchable".to_string(),
                })?;

        Ok(encode_call(pallet.index(), variant.index, call))
    }

    /// EVM view (nonce and balance) of an account.
    pub async fn evm_account(&self, address: H160) -> Result<EvmAccount, SubEvmError> {
        let raw = self
            .rpc
            .state_call(ACCOUNT_BASIC_RUNTIME_API, Some(&address.encode()), None)
            .await?;
        Ok(EvmAccount::decode(&mut &raw[..])?)
    }
}

/// Encode a dispatchable as the two-byte call index followed by the
/// SCALE-encoded arguments.
pub fn encode_call(pallet_index: u8, call_index: u8, call: &EvmCall) -> Vec<u8> {
    let mut encoded = vec![pallet_index, call_index];
    call.encode_to(&mut encoded);
    encoded
}
