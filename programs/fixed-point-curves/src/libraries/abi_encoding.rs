//! Contract ABI `uint256` encoding of fixed point results.

use std::fmt;
use std::str::FromStr;

use ethabi::{ParamType, Token};

use super::big_num::{Downcast512, U256, U512};
use crate::error::{ErrorCode, Result};

/// Width of one ABI word in bytes
pub const WORD_BYTES: usize = 32;

/// A single big-endian ABI word holding a `uint256`.
///
/// Always exactly 32 bytes, so the rendered form is always `0x` followed by 64
/// hex digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Uint256Word([u8; WORD_BYTES]);

impl Uint256Word {
    /// Encodes `value` as an ABI `uint256`
    pub fn encode(value: U256) -> Self {
        let encoded = ethabi::encode(&[Token::Uint(to_abi_uint(value))]);
        let mut word = [0u8; WORD_BYTES];
        word.copy_from_slice(&encoded[..WORD_BYTES]);
        Self(word)
    }

    /// Encodes a 512 bit intermediate, failing if it does not fit in a `uint256`
    pub fn encode_wide(value: U512) -> Result<Self> {
        let value = value
            .checked_as_u256()
            .ok_or(ErrorCode::EncodingOverflow)?;
        Ok(Self::encode(value))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let word: [u8; WORD_BYTES] = bytes
            .try_into()
            .map_err(|_| ErrorCode::InvalidEncoding(hex::encode(bytes)))?;
        Ok(Self(word))
    }

    /// Parses `0x`-prefixed (or bare) hex of exactly 64 digits
    pub fn from_hex(input: &str) -> Result<Self> {
        let digits = input.strip_prefix("0x").unwrap_or(input);
        if digits.len() != WORD_BYTES * 2 {
            return Err(ErrorCode::InvalidEncoding(input.to_string()));
        }
        let bytes = hex::decode(digits).map_err(|_| ErrorCode::InvalidEncoding(input.to_string()))?;
        Self::from_bytes(&bytes)
    }

    /// Decodes the word back into the integer it encodes
    pub fn value(&self) -> Result<U256> {
        let tokens = ethabi::decode(&[ParamType::Uint(256)], &self.0)
            .map_err(|_| ErrorCode::InvalidEncoding(self.to_string()))?;
        match tokens.into_iter().next() {
            Some(Token::Uint(value)) => Ok(from_abi_uint(value)),
            _ => Err(ErrorCode::InvalidEncoding(self.to_string())),
        }
    }

    pub fn as_bytes(&self) -> &[u8; WORD_BYTES] {
        &self.0
    }
}

impl fmt::Display for Uint256Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Uint256Word {
    type Err = ErrorCode;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl From<U256> for Uint256Word {
    fn from(value: U256) -> Self {
        Self::encode(value)
    }
}

fn to_abi_uint(value: U256) -> ethabi::Uint {
    let mut bytes = [0u8; WORD_BYTES];
    value.to_big_endian(&mut bytes);
    ethabi::Uint::from_big_endian(&bytes)
}

fn from_abi_uint(value: ethabi::Uint) -> U256 {
    let mut bytes = [0u8; WORD_BYTES];
    value.to_big_endian(&mut bytes);
    U256::from_big_endian(&bytes)
}
