//! Primitive types used by the tool.

use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};
use sp_core::{H160, H256, U256};
use subxt::ext::scale_decode::DecodeAsType;
use subxt::ext::scale_encode::EncodeAsType;
use subxt::{
    config::substrate::{BlakeTwo256, SubstrateHeader},
    Config, PolkadotConfig,
};

/// 20-byte account id of the chain.
///
/// `AccountId`, `Address` and `LookupSource` all resolve to this on an
/// EVM-compatible runtime.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Encode,
    Decode,
    EncodeAsType,
    DecodeAsType,
    Serialize,
    Deserialize,
)]
#[encode_as_type(crate_path = "subxt::ext::scale_encode")]
#[decode_as_type(crate_path = "subxt::ext::scale_decode")]
pub struct AccountId20(pub [u8; 20]);

/// 65-byte ECDSA extrinsic signature.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, EncodeAsType, DecodeAsType)]
#[encode_as_type(crate_path = "subxt::ext::scale_encode")]
#[decode_as_type(crate_path = "subxt::ext::scale_decode")]
pub struct EthereumSignature(pub [u8; 65]);

/// Configuration of the chain
pub enum ChainConfig {}
impl Config for ChainConfig {
    type Hash = subxt::utils::H256;
    type AccountId = AccountId20;
    type Address = AccountId20;
    type Signature = EthereumSignature;
    type Hasher = BlakeTwo256;
    type Header = SubstrateHeader<u32, BlakeTwo256>;
    type AssetId = <PolkadotConfig as Config>::AssetId;
    type ExtrinsicParams = subxt::config::signed_extensions::AnyOf<
        Self,
        (
            subxt::config::signed_extensions::CheckSpecVersion,
            subxt::config::signed_extensions::CheckTxVersion,
            subxt::config::signed_extensions::CheckGenesis<Self>,
            subxt::config::signed_extensions::CheckMortality<Self>,
            subxt::config::signed_extensions::CheckNonce,
            subxt::config::signed_extensions::ChargeTransactionPayment,
        ),
    >;
}

/// EVM view of an account, as returned by the
/// `EthereumRuntimeRPCApi_account_basic` runtime call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode)]
pub struct EvmAccount {
    pub nonce: U256,
    pub balance: U256,
}

/// Legacy Ethereum transaction layout of the Ethereum pallet.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct LegacyTransaction {
    pub nonce: U256,
    pub gas_price: U256,
    pub gas_limit: U256,
    pub action: TransactionAction,
    pub value: U256,
    pub input: Vec<u8>,
    pub signature: TransactionSignature,
}

/// Destination of an Ethereum transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode)]
pub enum TransactionAction {
    /// Call of the contract at the given address
    Call(H160),
    /// Contract creation
    Create,
}

/// ECDSA transaction signature split into recovery id and curve points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode)]
pub struct TransactionSignature {
    pub v: u64,
    pub r: H256,
    pub s: H256,
}

/// Arguments of the EVM pallet's `call` dispatchable, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct EvmCall {
    pub source: H160,
    pub target: H160,
    pub input: Vec<u8>,
    pub value: U256,
    pub gas_limit: u64,
    pub max_fee_per_gas: U256,
    pub max_priority_fee_per_gas: Option<U256>,
    pub nonce: Option<U256>,
    pub access_list: Vec<(H160, Vec<H256>)>,
}

impl EvmCall {
    /// A zero-value call with no explicit nonce, no priority fee and an
    /// empty access list.
    pub fn new(
        source: H160,
        target: H160,
        input: Vec<u8>,
        gas_limit: u64,
        max_fee_per_gas: U256,
    ) -> Self {
        Self {
            source,
            target,
            input,
            value: U256::zero(),
            gas_limit,
            max_fee_per_gas,
            max_priority_fee_per_gas: None,
            nonce: None,
            access_list: Vec::new(),
        }
    }
}

/// General error type for the subevm tool.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SubEvmError {
    /// ABI encoding rejected the arguments
    #[error("abi error: {message}")]
    AbiError { message: String },
    /// Chain interaction failed
    #[error("client error: {message}")]
    ClientError { message: String },
    /// SCALE decoding failed
    #[error("codec error: {message}")]
    CodecError { message: String },
}

impl From<subxt::Error> for SubEvmError {
    fn from(e: subxt::Error) -> Self {
        log::error!("subxt error: {:?}", e);
        SubEvmError::ClientError {
            message: format!("subxt err: {:?}", e),
        }
    }
}

impl From<parity_scale_codec::Error> for SubEvmError {
    fn from(e: parity_scale_codec::Error) -> Self {
        log::error!("codec error: {:?}", e);
        SubEvmError::CodecError {
            message: e.to_string(),
        }
    }
}
