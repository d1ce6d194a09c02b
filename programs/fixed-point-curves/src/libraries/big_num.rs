//! 256, 512 and 1024 bit numbers
//! U256 is the encoded width, U512 holds products and sums of two U256
//! operands, U1024 is scratch space for scaled division of U512 operands.
use uint::construct_uint;

use crate::error::ErrorCode;

construct_uint! {
    pub struct U256(4);
}

construct_uint! {
    pub struct U512(8);
}

construct_uint! {
    pub struct U1024(16);
}

pub trait Upcast512 {
    fn as_u512(self) -> U512;
}
impl Upcast512 for U256 {
    fn as_u512(self) -> U512 {
        U512([self.0[0], self.0[1], self.0[2], self.0[3], 0, 0, 0, 0])
    }
}

pub trait Upcast1024 {
    fn as_u1024(self) -> U1024;
}
impl Upcast1024 for U512 {
    fn as_u1024(self) -> U1024 {
        let mut words = [0u64; 16];
        words[..8].copy_from_slice(&self.0);
        U1024(words)
    }
}

pub trait Downcast512 {
    /// Cast to U256, `None` if any bit beyond the 256th is set
    fn checked_as_u256(self) -> Option<U256>;
}
impl Downcast512 for U512 {
    fn checked_as_u256(self) -> Option<U256> {
        if self.0[4..].iter().any(|word| *word != 0) {
            return None;
        }
        Some(U256([self.0[0], self.0[1], self.0[2], self.0[3]]))
    }
}

/// Parses a command-line argument as a non-negative base-10 integer.
///
/// Signs, whitespace, digit separators and values of 2^256 or more are rejected.
///
/// # Arguments
/// * `input` - Decimal digits, e.g. `"340282366920938463463374607431768211456"`
///
pub fn parse_decimal(input: &str) -> crate::error::Result<U256> {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ErrorCode::InvalidArgument(input.to_string()));
    }
    U256::from_dec_str(input).map_err(|_| ErrorCode::InvalidArgument(input.to_string()))
}
