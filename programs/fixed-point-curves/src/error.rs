use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    #[error("invalid argument `{0}`: expected a non-negative base-10 integer below 2^256")]
    InvalidArgument(String),

    #[error("division by zero: {0}")]
    DivisionByZero(&'static str),

    #[error("value is outside the uint256 range")]
    EncodingOverflow,

    #[error("invalid uint256 word `{0}`: expected 32 bytes as 64 hex digits")]
    InvalidEncoding(String),
}

pub type Result<T> = std::result::Result<T, ErrorCode>;
