//! Contract ABI encoding of the fixture payload.
//!
//! The payload is the tuple `(uint32[], uint32[])` laid out per the
//! canonical contract ABI: two head words holding offsets, then each
//! dynamic array as a length word followed by one 32-byte big-endian word
//! per element.

use ethers::abi::{self, ParamType, Token};
use ethers::types::{Bytes, U256};

use crate::error::AppError;

fn uint32_array() -> ParamType {
    ParamType::Array(Box::new(ParamType::Uint(32)))
}

fn uint32_tokens(values: &[u32]) -> Token {
    Token::Array(
        values
            .iter()
            .map(|&v| Token::Uint(U256::from(v)))
            .collect(),
    )
}

/// Encodes two `u32` lists as `(uint32[], uint32[])`.
pub fn encode_u32_arrays(first: &[u32], second: &[u32]) -> Bytes {
    abi::encode(&[uint32_tokens(first), uint32_tokens(second)]).into()
}

/// Decodes a `(uint32[], uint32[])` payload back into its two lists.
///
/// # Errors
/// * `AppError::AbiDecode` - the bytes are not a valid encoding of the tuple
/// * `AppError::AbiValueOutOfRange` - an element is wider than 32 bits
pub fn decode_u32_arrays(data: &[u8]) -> Result<(Vec<u32>, Vec<u32>), AppError> {
    let mut tokens = abi::decode(&[uint32_array(), uint32_array()], data)?.into_iter();

    let first = tokens
        .next()
        .ok_or_else(|| AppError::AbiDecode(abi::Error::InvalidData))?;
    let second = tokens
        .next()
        .ok_or_else(|| AppError::AbiDecode(abi::Error::InvalidData))?;

    Ok((token_to_u32s(first)?, token_to_u32s(second)?))
}

fn token_to_u32s(token: Token) -> Result<Vec<u32>, AppError> {
    let Token::Array(items) = token else {
        return Err(AppError::AbiDecode(abi::Error::InvalidData));
    };

    items
        .into_iter()
        .map(|item| match item {
            Token::Uint(value) if value <= U256::from(u32::MAX) => Ok(value.low_u32()),
            Token::Uint(value) => Err(AppError::AbiValueOutOfRange {
                value: value.to_string(),
            }),
            _ => Err(AppError::AbiDecode(abi::Error::InvalidData)),
        })
        .collect()
}

/// Parses a hex string (with or without `0x`) into payload bytes.
pub fn parse_payload_hex(input: &str) -> Result<Bytes, AppError> {
    input
        .trim()
        .parse::<Bytes>()
        .map_err(|e| AppError::PayloadHex(e.to_string()))
}
