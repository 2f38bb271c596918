//! 错误类型定义

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Value {value} does not fit in {length} base-32 digits")]
    Overflow { value: u64, length: u32 },

    #[error("Invalid symbol '{0}' in code")]
    InvalidSymbol(char),

    #[error("Checksum mismatch: '{digit}' is not a valid check digit for '{code}'")]
    ChecksumMismatch { digit: char, code: String },

    #[error("Code '{0}' exceeds the u64 value range")]
    ValueOutOfRange(String),
}

pub type Result<T> = std::result::Result<T, Error>;
