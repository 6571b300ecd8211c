//! Ethereum ABI helpers for building contract call inputs.

use alloy_dyn_abi::{DynSolType, DynSolValue};
use alloy_primitives::{keccak256, Address, U160};
use sp_core::H160;

use crate::types::SubEvmError;

/// First 4 bytes of the Keccak-256 hash of a function signature.
pub fn func_selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    let mut selector = [0u8; 4];
    selector.copy_from_slice(&hash[..4]);
    selector
}

/// Render an integer as a 20-byte Ethereum address, left-padded with zeros.
///
/// `u128` always fits in 160 bits, so the padding cannot overflow.
pub fn num_to_address(num: u128) -> Address {
    Address::from(U160::from(num))
}

/// Selector of `signature` followed by the ABI encoding of `args` against
/// `types`.
///
/// For empty type and argument lists the result is exactly the 4-byte
/// selector.
pub fn encode_input(
    signature: &str,
    types: &[DynSolType],
    args: &[DynSolValue],
) -> Result<Vec<u8>, SubEvmError> {
    if types.len() != args.len() {
        return Err(SubEvmError::AbiError {
            message: format!(
                "{} parameter types but {} arguments",
                types.len(),
                args.len()
            ),
        });
    }
    for (ty, arg) in types.iter().zip(args) {
        if !ty.matches(arg) {
            return Err(SubEvmError::AbiError {
                message: format!("argument {:?} does not match type {}", arg, ty),
            });
        }
    }

    let mut input = func_selector(signature).to_vec();
    input.extend_from_slice(&DynSolValue::Tuple(args.to_vec()).abi_encode_params());
    Ok(input)
}

/// Bridge an alloy address into the SCALE-side `H160`.
pub fn eth_to_h160(address: Address) -> H160 {
    H160(address.into_array())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, hex};

    #[test]
    fn selector_is_four_bytes_of_keccak() {
        assert_eq!(func_selector("name()"), hex!("06fdde03"));
        assert_eq!(func_selector("symbol()"), hex!("95d89b41"));
        assert_eq!(func_selector("transfer(address,uint256)"), hex!("a9059cbb"));
        assert_eq!(func_selector("definitely not a function").len(), 4);
    }

    #[test]
    fn num_to_address_pads_to_forty_hex_digits() {
        let addr = num_to_address(2050);
        assert_eq!(addr, address!("0x0000000000000000000000000000000000000802"));

        // no hex letters in the value, so the checksummed form is all lowercase
        let checksummed = addr.to_checksum(None);
        assert_eq!(checksummed.len(), 42);
        assert_eq!(checksummed, "0x0000000000000000000000000000000000000802");
    }

    #[test]
    fn checksum_casing_matches_eip55() {
        let alith: Address = "0xf24ff3a9cf04c71dbc94d0b566f7a27b94566cac"
            .parse()
            .unwrap();
        assert_eq!(
            alith.to_checksum(None),
            "0xf24FF3a9CF04c71Dbc94D0b566f7A27B94566cAc"
        );
    }

    #[test]
    fn encode_input_with_no_args_is_exactly_the_selector() {
        let input = encode_input("name()", &[], &[]).unwrap();
        assert_eq!(input, hex!("06fdde03").to_vec());
    }

    #[test]
    fn encode_input_appends_abi_encoded_args() {
        let holder = address!("0xf24FF3a9CF04c71Dbc94D0b566f7A27B94566cAc");
        let input = encode_input(
            "balanceOf(address)",
            &[DynSolType::Address],
            &[DynSolValue::Address(holder)],
        )
        .unwrap();

        assert_eq!(input.len(), 4 + 32);
        assert_eq!(&input[..4], hex!("70a08231"));
        // addresses are left-padded to a 32-byte word
        assert!(input[4..16].iter().all(|b| *b == 0));
        assert_eq!(&input[16..36], holder.as_slice());
    }

    #[test]
    fn encode_input_rejects_arity_and_type_mismatches() {
        assert!(encode_input("name()", &[DynSolType::Bool], &[]).is_err());
        assert!(encode_input(
            "balanceOf(address)",
            &[DynSolType::Address],
            &[DynSolValue::Bool(true)],
        )
        .is_err());
    }

    #[test]
    fn eth_to_h160_keeps_bytes() {
        let addr = address!("0x1100000000000000000000000000000000000011");
        assert_eq!(eth_to_h160(addr).0, addr.into_array());
    }
}
