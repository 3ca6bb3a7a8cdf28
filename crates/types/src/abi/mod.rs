//! Contract-call ABI codec.
//!
//! Call data is the 4-byte [`selector`] of a function's canonical signature
//! followed by the head/tail encoding of its arguments in 32-byte words.
//! Addresses and unsigned integers are right-aligned big-endian within their
//! word.

mod address;
pub use address::parse_address;

mod error;
pub use error::AbiError;

mod interface;
pub use interface::{ContractInterface, FunctionEntry};

use alloy::{
    dyn_abi::{DynSolType, DynSolValue},
    primitives::{keccak256, Bytes, Selector},
};

/// Size of an ABI word in bytes.
pub const WORD_SIZE: usize = 32;

/// Compute the 4-byte function selector of a canonical signature such as
/// `transfer(address,uint256)`.
pub fn selector(signature: &str) -> Selector {
    Selector::from_slice(&keccak256(signature.as_bytes())[..4])
}

/// ABI-encode `values` as a parameter list of `types`.
///
/// Fails with [`AbiError::Encoding`] if the lists have different lengths or
/// if any value does not satisfy its declared type.
pub fn encode_args(types: &[DynSolType], values: &[DynSolValue]) -> Result<Bytes, AbiError> {
    if types.len() != values.len() {
        return Err(AbiError::Encoding(format!(
            "expected {} arguments, got {}",
            types.len(),
            values.len()
        )));
    }

    for (index, (ty, value)) in types.iter().zip(values).enumerate() {
        check_value(index, ty, value)?;
    }

    Ok(DynSolValue::Tuple(values.to_vec()).abi_encode_params().into())
}

/// Concatenate a selector and encoded arguments into call data.
pub fn build_call(selector: Selector, encoded_args: &[u8]) -> Bytes {
    let mut data = Vec::with_capacity(selector.len() + encoded_args.len());
    data.extend_from_slice(selector.as_slice());
    data.extend_from_slice(encoded_args);
    data.into()
}

/// Decode ABI-encoded return data as a parameter list of `types`.
///
/// Fails with [`AbiError::Decoding`] on truncated input, or input whose
/// length is not a whole number of words.
pub fn decode_output(types: &[DynSolType], data: &[u8]) -> Result<Vec<DynSolValue>, AbiError> {
    if data.len() % WORD_SIZE != 0 {
        return Err(AbiError::Decoding(format!(
            "data length {} is not a multiple of {WORD_SIZE}",
            data.len()
        )));
    }

    match DynSolType::Tuple(types.to_vec()).abi_decode_params(data) {
        Ok(DynSolValue::Tuple(values)) => Ok(values),
        Ok(other) => Ok(vec![other]),
        Err(err) => Err(AbiError::Decoding(err.to_string())),
    }
}

/// Split call data into its selector and decoded arguments. The inverse of
/// [`build_call`].
pub fn decode_args(
    types: &[DynSolType],
    call_data: &[u8],
) -> Result<(Selector, Vec<DynSolValue>), AbiError> {
    if call_data.len() < 4 {
        return Err(AbiError::Decoding(format!(
            "call data of {} bytes is shorter than a selector",
            call_data.len()
        )));
    }
    let (selector, args) = call_data.split_at(4);
    Ok((Selector::from_slice(selector), decode_output(types, args)?))
}

fn check_value(index: usize, ty: &DynSolType, value: &DynSolValue) -> Result<(), AbiError> {
    let ok = match (ty, value) {
        (DynSolType::Uint(bits), DynSolValue::Uint(v, _)) => v.bit_len() <= *bits,
        (DynSolType::FixedBytes(size), DynSolValue::FixedBytes(_, len)) => size == len,
        _ => ty.matches(value),
    };

    if ok {
        Ok(())
    } else {
        Err(AbiError::Encoding(format!(
            "argument {index}: value of type {} does not satisfy {}",
            value.sol_type_name().unwrap_or_default(),
            ty.sol_type_name()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, hex, Address, U256};
    use proptest::prelude::*;

    fn transfer_types() -> [DynSolType; 2] {
        [DynSolType::Address, DynSolType::Uint(256)]
    }

    #[test]
    fn known_selectors() {
        assert_eq!(selector("transfer(address,uint256)"), Selector::from(hex!("a9059cbb")));
        assert_eq!(selector("balanceOf(address)"), Selector::from(hex!("70a08231")));
        assert_eq!(
            selector("transfer(address,uint256)"),
            selector("transfer(address,uint256)")
        );
    }

    #[test]
    fn encode_transfer() {
        let to = address!("0x1111111111111111111111111111111111111111");
        let args = encode_args(
            &transfer_types(),
            &[DynSolValue::Address(to), DynSolValue::Uint(U256::from(1_000_000u64), 256)],
        )
        .unwrap();
        let call = build_call(selector("transfer(address,uint256)"), &args);

        let expected = hex::decode(concat!(
            "a9059cbb",
            "0000000000000000000000001111111111111111111111111111111111111111",
            "00000000000000000000000000000000000000000000000000000000000f4240",
        ))
        .unwrap();
        assert_eq!(call.as_ref(), expected.as_slice());
    }

    #[test]
    fn empty_args_is_selector_only() {
        let args = encode_args(&[], &[]).unwrap();
        assert!(args.is_empty());
        let call = build_call(selector("totalSupply()"), &args);
        assert_eq!(call.len(), 4);
    }

    #[test]
    fn encode_type_mismatch() {
        let err = encode_args(
            &transfer_types(),
            &[DynSolValue::Uint(U256::from(1), 256), DynSolValue::Uint(U256::from(1), 256)],
        )
        .unwrap_err();
        assert!(matches!(err, AbiError::Encoding(_)));

        let err = encode_args(&transfer_types(), &[DynSolValue::Address(Address::ZERO)])
            .unwrap_err();
        assert!(matches!(err, AbiError::Encoding(_)));
    }

    #[test]
    fn encode_rejects_signed_for_unsigned() {
        let negative = alloy::primitives::I256::MINUS_ONE;
        let err = encode_args(&[DynSolType::Uint(256)], &[DynSolValue::Int(negative, 256)])
            .unwrap_err();
        assert!(matches!(err, AbiError::Encoding(_)));
    }

    #[test]
    fn encode_rejects_oversized_uint() {
        let err = encode_args(&[DynSolType::Uint(8)], &[DynSolValue::Uint(U256::from(256), 256)])
            .unwrap_err();
        assert!(matches!(err, AbiError::Encoding(_)));
        encode_args(&[DynSolType::Uint(8)], &[DynSolValue::Uint(U256::from(255), 256)]).unwrap();
    }

    #[test]
    fn decode_truncated() {
        let err = decode_output(&[DynSolType::Uint(256)], &[0u8; 31]).unwrap_err();
        assert!(matches!(err, AbiError::Decoding(_)));

        let err = decode_output(&transfer_types(), &[0u8; 32]).unwrap_err();
        assert!(matches!(err, AbiError::Decoding(_)));
    }

    #[test]
    fn decode_balance() {
        let mut data = [0u8; 32];
        data[29..].copy_from_slice(&[0x26, 0x25, 0xa0]);
        let values = decode_output(&[DynSolType::Uint(256)], &data).unwrap();
        assert_eq!(values, vec![DynSolValue::Uint(U256::from(2_500_000u64), 256)]);
    }

    #[test]
    fn decode_args_splits_selector() {
        assert!(decode_args(&[], &[0xa9, 0x05]).is_err());
        let (sel, values) = decode_args(&[], &hex!("a9059cbb")).unwrap();
        assert_eq!(sel, selector("transfer(address,uint256)"));
        assert!(values.is_empty());
    }

    proptest! {
        #[test]
        fn transfer_args_roundtrip(to in any::<[u8; 20]>(), amount in any::<[u64; 4]>()) {
            let to = Address::from(to);
            let amount = U256::from_limbs(amount);
            let values = [DynSolValue::Address(to), DynSolValue::Uint(amount, 256)];

            let call = build_call(
                selector("transfer(address,uint256)"),
                &encode_args(&transfer_types(), &values).unwrap(),
            );
            let (sel, decoded) = decode_args(&transfer_types(), &call).unwrap();

            prop_assert_eq!(sel, selector("transfer(address,uint256)"));
            prop_assert_eq!(decoded, values.to_vec());
        }
    }
}
