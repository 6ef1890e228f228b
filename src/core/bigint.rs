// Compact Bits - Free and Open Source Software Statement
//
// This project, compact-bits, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/bigint.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file contains the stateless conversions between arbitrary-precision
// integers and byte sequences, located in the core subdirectory. They are the
// building blocks of the compact target codec.
//
// Tree Location:
// - src/core/bigint.rs (integer <-> bytes)
// - Depends on: num-bigint, num-traits, log

use crate::core::error::{CodecError, CodecResult};
use crate::core::types::ByteOrder;
use log::debug;
use num_bigint::{BigInt, BigUint, Sign};

const LOG_TARGET: &str = "compact_bits::bigint";

/// Shortest big-endian encoding of `n`. Zero is a single `0x00` byte.
pub fn to_minimal_big_endian_bytes(n: &BigInt) -> CodecResult<Vec<u8>> {
    let (sign, bytes) = n.to_bytes_be();
    if sign == Sign::Minus {
        return Err(CodecError::invalid(format!("negative integer {}", n)));
    }
    // to_bytes_be yields [0] for zero and never a leading zero otherwise
    debug!(target: LOG_TARGET, "{} -> {} big-endian bytes", n, bytes.len());
    Ok(bytes)
}

/// Interpret `bytes` as an unsigned integer weighted by `order`
pub fn bytes_to_int(bytes: &[u8], order: ByteOrder) -> BigInt {
    let value = match order {
        ByteOrder::BigEndian => BigUint::from_bytes_be(bytes),
        ByteOrder::LittleEndian => BigUint::from_bytes_le(bytes),
    };
    BigInt::from(value)
}

/// Right-pad with `fill` up to `width`, or keep only the first `width` bytes.
pub fn pad_or_truncate(bytes: &[u8], width: usize, fill: u8) -> CodecResult<Vec<u8>> {
    if width == 0 {
        return Err(CodecError::invalid("width must be positive"));
    }
    let mut out = bytes[..bytes.len().min(width)].to_vec();
    if bytes.len() > width {
        debug!(target: LOG_TARGET,
            "Truncating {} bytes to {}, dropping {:02x?}",
            bytes.len(),
            width,
            &bytes[width..]
        );
    }
    out.resize(width, fill);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_bytes() {
        assert_eq!(to_minimal_big_endian_bytes(&BigInt::from(0)).unwrap(), vec![0x00]);
        assert_eq!(to_minimal_big_endian_bytes(&BigInt::from(5)).unwrap(), vec![0x05]);
        assert_eq!(to_minimal_big_endian_bytes(&BigInt::from(0x1234)).unwrap(), vec![0x12, 0x34]);
        assert_eq!(to_minimal_big_endian_bytes(&BigInt::from(0x80)).unwrap(), vec![0x80]);
        assert_eq!(to_minimal_big_endian_bytes(&BigInt::from(0x100)).unwrap(), vec![0x01, 0x00]);
    }

    #[test]
    fn test_minimal_bytes_wide_value() {
        let n = BigInt::from(1) << 300;
        let bytes = to_minimal_big_endian_bytes(&n).unwrap();
        assert_eq!(bytes.len(), 38);
        assert_eq!(bytes[0], 0x10);
        assert!(bytes[1..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_minimal_bytes_rejects_negative() {
        assert!(matches!(
            to_minimal_big_endian_bytes(&BigInt::from(-1)),
            Err(CodecError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_bytes_to_int_both_orders() {
        let bytes = [0x12, 0x34, 0x00];
        assert_eq!(bytes_to_int(&bytes, ByteOrder::LittleEndian), BigInt::from(0x3412));
        assert_eq!(bytes_to_int(&bytes, ByteOrder::BigEndian), BigInt::from(0x123400));
        assert_eq!(bytes_to_int(&[], ByteOrder::LittleEndian), BigInt::from(0));
        assert_eq!(bytes_to_int(&[0xff], ByteOrder::BigEndian), BigInt::from(255));
    }

    #[test]
    fn test_pad_or_truncate() {
        assert_eq!(pad_or_truncate(&[0x05], 3, 0x00).unwrap(), vec![0x05, 0x00, 0x00]);
        assert_eq!(pad_or_truncate(&[1, 2, 3], 3, 0x00).unwrap(), vec![1, 2, 3]);
        assert_eq!(pad_or_truncate(&[1, 2, 3, 4, 5], 3, 0x00).unwrap(), vec![1, 2, 3]);
        assert_eq!(pad_or_truncate(&[], 2, 0xaa).unwrap(), vec![0xaa, 0xaa]);
    }

    #[test]
    fn test_pad_or_truncate_zero_width() {
        assert!(matches!(
            pad_or_truncate(&[1], 0, 0x00),
            Err(CodecError::InvalidArgument(_))
        ));
    }
}

// Changelog:
// - v1.0.0 (2026-10-14): Initial integer/byte conversions.
//   - Minimal big-endian encoding backed by num-bigint.
//   - Order-aware decoding and fixed-width pad/truncate.
