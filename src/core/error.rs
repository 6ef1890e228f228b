// Compact Bits - Free and Open Source Software Statement
//
// This project, compact-bits, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/error.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file defines the error taxonomy shared by the byte conversions and the
// compact target codec, located in the core subdirectory.
//
// Tree Location:
// - src/core/error.rs (codec errors)
// - Depends on: thiserror, num-bigint

use num_bigint::BigInt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Decoded value {mantissa} * 256^({exponent} - 3) is not an integer")]
    PrecisionError { mantissa: BigInt, exponent: u8 },

    #[error("Exponent {0} does not fit in a single byte")]
    ExponentOverflow(usize),
}

impl CodecError {
    pub fn invalid(message: impl Into<String>) -> Self {
        CodecError::InvalidArgument(message.into())
    }
}

pub type CodecResult<T> = std::result::Result<T, CodecError>;

// Changelog:
// - v1.0.0 (2026-10-14): Initial codec error types.
//   - InvalidArgument covers negative targets, wrong-length bits and zero widths.
//   - PrecisionError is only raised by the strict decode policy.
