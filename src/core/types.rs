// Compact Bits - Free and Open Source Software Statement
//
// This project, compact-bits, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/types.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file defines core data structures for compact-bits, located in the
// core subdirectory. It includes command-line arguments, the 4-byte compact
// value, byte order and decode policy selectors, and conversions into the
// arbitrary-precision target type.
//
// Tree Location:
// - src/core/types.rs (core data structures)
// - Depends on: clap, serde, num-bigint, num-traits, uint, hex

use crate::core::error::{CodecError, CodecResult};
use clap::{Parser, Subcommand, ValueEnum};
use num_bigint::{BigInt, BigUint};
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use uint::construct_uint;

construct_uint! {
    pub struct U256(4);
}

/// Difficulty target. Signed so that a negative input can be rejected rather
/// than being unrepresentable.
pub type Target = BigInt;

/// Byte order used when weighting a multi-byte value
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ByteOrder {
    #[value(name = "be")]
    BigEndian,
    #[value(name = "le")]
    LittleEndian,
}

/// How `decode` treats a result that is not a whole number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodePolicy {
    /// Truncate toward zero
    #[default]
    Truncate,
    /// Report `CodecError::PrecisionError`
    Strict,
}

impl DecodePolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            DecodePolicy::Strict
        } else {
            DecodePolicy::Truncate
        }
    }
}

/// 4-byte compact target: byte 0 is the exponent, bytes 1..4 the mantissa
/// in the order `encode` wrote them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct CompactBits([u8; 4]);

impl CompactBits {
    pub const LEN: usize = 4;

    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    pub fn into_bytes(self) -> [u8; 4] {
        self.0
    }

    pub fn exponent(&self) -> u8 {
        self.0[0]
    }

    pub fn mantissa_bytes(&self) -> &[u8] {
        &self.0[1..]
    }

    /// Lowercase hex, byte 0 first
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse 8 hex digits, with or without a `0x` prefix
    pub fn from_hex(s: &str) -> CodecResult<Self> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if digits.len() != Self::LEN * 2 {
            return Err(CodecError::invalid(format!(
                "compact bits must be {} hex digits, got {:?}",
                Self::LEN * 2,
                s
            )));
        }
        let bytes = hex::decode(digits)
            .map_err(|e| CodecError::invalid(format!("bad compact bits hex {:?}: {}", s, e)))?;
        Self::try_from(bytes.as_slice())
    }
}

impl TryFrom<&[u8]> for CompactBits {
    type Error = CodecError;

    fn try_from(bytes: &[u8]) -> CodecResult<Self> {
        let array: [u8; 4] = bytes.try_into().map_err(|_| {
            CodecError::invalid(format!(
                "compact bits must be exactly {} bytes, got {}",
                Self::LEN,
                bytes.len()
            ))
        })?;
        Ok(Self(array))
    }
}

impl From<[u8; 4]> for CompactBits {
    fn from(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }
}

impl From<CompactBits> for String {
    fn from(bits: CompactBits) -> Self {
        bits.to_hex()
    }
}

impl TryFrom<String> for CompactBits {
    type Error = CodecError;

    fn try_from(s: String) -> CodecResult<Self> {
        Self::from_hex(&s)
    }
}

impl fmt::Display for CompactBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

/// Widen a fixed 256-bit target into a `Target`
pub fn target_from_u256(value: U256) -> Target {
    BigInt::from(BigUint::from_bytes_be(&value.to_big_endian()))
}

/// Parse a decimal or `0x`-prefixed hex integer. A leading `-` is accepted so
/// that negative inputs reach the codec and are rejected there.
pub fn parse_target(s: &str) -> CodecResult<Target> {
    let trimmed = s.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let (digits, radix) = match body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        Some(hex_digits) => (hex_digits, 16),
        None => (body, 10),
    };
    // parse_bytes takes its own sign and separators; only bare digits get through
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(CodecError::invalid(format!("not an integer: {:?}", s)));
    }
    let magnitude = BigInt::parse_bytes(digits.as_bytes(), radix)
        .ok_or_else(|| CodecError::invalid(format!("not an integer: {:?}", s)))?;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Convert a JSON `difficulty` field into a target. Integers are taken
/// exactly; fractional values are truncated toward zero.
pub fn target_from_difficulty(difficulty: &serde_json::Number) -> CodecResult<Target> {
    let text = difficulty.to_string();
    if let Some(exact) = BigInt::parse_bytes(text.as_bytes(), 10) {
        return Ok(exact);
    }
    let value: f64 = text
        .parse()
        .map_err(|_| CodecError::invalid(format!("unparseable difficulty {}", text)))?;
    if !value.is_finite() {
        return Err(CodecError::invalid(format!("difficulty {} is not finite", text)));
    }
    BigInt::from_f64(value)
        .ok_or_else(|| CodecError::invalid(format!("difficulty {} cannot be converted", text)))
}

/// Command-line arguments for compact-bits
#[derive(Parser, Debug)]
#[command(
    name = "compact-bits",
    version,
    about = "Encode and decode 4-byte compact difficulty targets",
    long_about = "compact-bits converts arbitrary-precision difficulty targets into the\n\
                  4-byte compact form (1 exponent byte + 3 mantissa bytes) and back.\n\n\
                  Examples:\n\
                    Encode: compact-bits encode 0x1234\n\
                    Decode: compact-bits decode 0x02123400 --strict\n\
                    Checkpoints: compact-bits checkpoints blocks.jsonl --interval 2016"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Log level used when no log4rs config file is supplied
    #[arg(long, default_value = "warn", value_name = "LEVEL", global = true)]
    pub log_level: log::LevelFilter,

    /// Path to a log4rs YAML configuration file
    #[arg(long, value_name = "FILE", global = true)]
    pub log_config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode a target (decimal or 0x hex) into compact bits
    Encode {
        #[arg(value_name = "TARGET", allow_hyphen_values = true)]
        target: String,
    },

    /// Decode compact bits (8 hex digits) into a target
    Decode {
        #[arg(value_name = "BITS")]
        bits: String,

        /// Byte order used to weight the mantissa
        #[arg(long, value_enum, default_value = "le")]
        order: ByteOrder,

        /// Fail instead of truncating a fractional result
        #[arg(long, default_value = "false")]
        strict: bool,
    },

    /// Encode the difficulty of saved getblock results at checkpoint heights
    Checkpoints {
        /// JSON array or JSON-lines file of getblock results
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Keep only heights that are multiples of this interval
        #[arg(long, default_value_t = crate::source::CHECKPOINT_INTERVAL, value_name = "BLOCKS")]
        interval: u64,
    },
}

impl Args {
    /// Validate arguments and return helpful errors
    pub fn validate(&self) -> Result<(), String> {
        match &self.command {
            Command::Checkpoints { interval, file } => {
                if *interval == 0 {
                    return Err("Checkpoint interval must be greater than 0".to_string());
                }
                if file.as_os_str().is_empty() {
                    return Err("Checkpoint input file path is empty".to_string());
                }
            }
            Command::Decode { bits, .. } if bits.trim().is_empty() => {
                return Err("Compact bits value is empty".to_string());
            }
            Command::Encode { target } if target.trim().is_empty() => {
                return Err("Target value is empty".to_string());
            }
            _ => {}
        }
        if let Some(path) = &self.log_config {
            if !path.exists() {
                return Err(format!("Log config {:?} does not exist", path));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_bits_hex_forms() {
        let bits = CompactBits::from_hex("0x02123400").unwrap();
        assert_eq!(bits.as_bytes(), &[0x02, 0x12, 0x34, 0x00]);
        assert_eq!(bits.exponent(), 2);
        assert_eq!(bits.mantissa_bytes(), &[0x12, 0x34, 0x00]);
        assert_eq!(bits.to_string(), "0x02123400");
        assert_eq!(CompactBits::from_hex("02123400").unwrap(), bits);
    }

    #[test]
    fn test_compact_bits_rejects_bad_lengths() {
        assert!(matches!(
            CompactBits::from_hex("0x021234"),
            Err(CodecError::InvalidArgument(_))
        ));
        assert!(matches!(
            CompactBits::try_from(&[1u8, 2, 3, 4, 5][..]),
            Err(CodecError::InvalidArgument(_))
        ));
        assert!(CompactBits::from_hex("zz123400").is_err());
    }

    #[test]
    fn test_compact_bits_serde_as_hex_string() {
        let bits = CompactBits::from_bytes([0x1d, 0x00, 0xff, 0xff]);
        let json = serde_json::to_string(&bits).unwrap();
        assert_eq!(json, "\"1d00ffff\"");
        let back: CompactBits = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bits);
    }

    #[test]
    fn test_parse_target_forms() {
        assert_eq!(parse_target("4660").unwrap(), BigInt::from(0x1234));
        assert_eq!(parse_target("0x1234").unwrap(), BigInt::from(0x1234));
        assert_eq!(parse_target("-1").unwrap(), BigInt::from(-1));
        assert!(parse_target("12ab").is_err());
        assert!(parse_target("").is_err());
    }

    #[test]
    fn test_parse_target_rejects_repeated_signs() {
        for input in ["--5", "-+5", "+5", "0x-5", "-0x-5", "0x+5", "-", "0x", "1_000"] {
            assert!(
                matches!(parse_target(input), Err(CodecError::InvalidArgument(_))),
                "{:?} should be rejected",
                input
            );
        }
        assert_eq!(parse_target("-0x5").unwrap(), BigInt::from(-5));
    }

    #[test]
    fn test_target_from_difficulty_truncates() {
        let exact: serde_json::Number = serde_json::from_str("123456789012345678901234567890").unwrap();
        assert_eq!(
            target_from_difficulty(&exact).unwrap(),
            BigInt::parse_bytes(b"123456789012345678901234567890", 10).unwrap()
        );
        let fractional: serde_json::Number = serde_json::from_str("1234.987").unwrap();
        assert_eq!(target_from_difficulty(&fractional).unwrap(), BigInt::from(1234));
        let tiny: serde_json::Number = serde_json::from_str("0.000244").unwrap();
        assert_eq!(target_from_difficulty(&tiny).unwrap(), BigInt::from(0));
    }

    #[test]
    fn test_target_from_u256() {
        let value = U256::from(0x1234u64) << 200;
        let expected = BigInt::from(0x1234) << 200;
        assert_eq!(target_from_u256(value), expected);
    }
}

// Changelog:
// - v1.0.0 (2026-10-14): Initial core types.
//   - CompactBits newtype with hex parsing and serde as a hex string.
//   - ByteOrder and DecodePolicy selectors for the decoder.
//   - Args with encode, decode and checkpoints subcommands.
