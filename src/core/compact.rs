// Compact Bits - Free and Open Source Software Statement
//
// This project, compact-bits, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/compact.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file contains the lossy 4-byte compact target encoder and its decoder,
// located in the core subdirectory. The encoder writes the mantissa
// most-significant byte first while the default decoder weights it
// little-endian; the two are deliberately not inverses.
//
// Tree Location:
// - src/core/compact.rs (compact target codec)
// - Depends on: core::bigint, num-bigint, log

use crate::core::bigint::{bytes_to_int, pad_or_truncate, to_minimal_big_endian_bytes};
use crate::core::error::{CodecError, CodecResult};
use crate::core::types::{ByteOrder, CompactBits, DecodePolicy, Target};
use log::{debug, warn};

const LOG_TARGET: &str = "compact_bits::compact";

/// Number of mantissa bytes following the exponent
pub const MANTISSA_LEN: usize = 3;

/// Encode a non-negative target into compact bits.
///
/// Targets wider than three bytes lose their low-order bytes. This is not an
/// error.
pub fn encode(target: &Target) -> CodecResult<CompactBits> {
    let mut raw = to_minimal_big_endian_bytes(target)?;

    // Keep the mantissa's top bit clear for sign-magnitude readers
    if raw[0] > 0x7f {
        raw.insert(0, 0x00);
    }

    let exponent = u8::try_from(raw.len()).map_err(|_| CodecError::ExponentOverflow(raw.len()))?;
    let mantissa = pad_or_truncate(&raw, MANTISSA_LEN, 0x00)?;

    let bits = CompactBits::from_bytes([exponent, mantissa[0], mantissa[1], mantissa[2]]);
    debug!(target: LOG_TARGET, "Encoded target {:#x} -> {}", target, bits);
    Ok(bits)
}

/// Decode compact bits with little-endian mantissa weighting, truncating a
/// fractional result toward zero.
pub fn decode(bits: CompactBits) -> CodecResult<Target> {
    decode_with(bits, ByteOrder::LittleEndian, DecodePolicy::Truncate)
}

/// Like `decode`, for callers holding an unchecked byte slice
pub fn decode_slice(bytes: &[u8]) -> CodecResult<Target> {
    decode(CompactBits::try_from(bytes)?)
}

/// Decode `mantissa * 256^(exponent - 3)` with the mantissa weighted by
/// `order`. `ByteOrder::BigEndian` matches the byte layout `encode` produces.
pub fn decode_with(bits: CompactBits, order: ByteOrder, policy: DecodePolicy) -> CodecResult<Target> {
    let exponent = bits.exponent();
    let mantissa = bytes_to_int(bits.mantissa_bytes(), order);

    let value = if exponent as usize >= MANTISSA_LEN {
        let shift = 8 * (exponent as usize - MANTISSA_LEN);
        &mantissa << shift
    } else {
        // Negative power of 256: exact right shift of a non-negative value
        let shift = 8 * (MANTISSA_LEN - exponent as usize);
        let quotient = &mantissa >> shift;
        if &quotient << shift != mantissa {
            match policy {
                DecodePolicy::Strict => {
                    warn!(target: LOG_TARGET, "Rejecting non-integral decode of {}", bits);
                    return Err(CodecError::PrecisionError { mantissa, exponent });
                }
                DecodePolicy::Truncate => {
                    debug!(target: LOG_TARGET,
                        "Truncating fractional decode of {} ({:?} mantissa {})",
                        bits,
                        order,
                        mantissa
                    );
                }
            }
        }
        quotient
    };

    debug!(target: LOG_TARGET, "Decoded {} ({:?}) -> {}", bits, order, value);
    Ok(value)
}

/// Whether `decode(encode(target))` gives back `target` under the literal
/// little-endian decoder.
pub fn round_trips(target: &Target) -> CodecResult<bool> {
    let bits = encode(target)?;
    Ok(decode(bits)? == *target)
}

/// Bytes of `target` that `encode` discards, after the sign-guard prepend
pub fn truncated_bytes(target: &Target) -> CodecResult<usize> {
    let raw = to_minimal_big_endian_bytes(target)?;
    let guarded = raw.len() + usize::from(raw[0] > 0x7f);
    Ok(guarded.saturating_sub(MANTISSA_LEN))
}


// Changelog:
// - v1.0.0 (2026-10-14): Initial compact target codec.
//   - encode with sign guard, length exponent and 3-byte pad/truncate.
//   - decode with little-endian weighting and truncate/strict policies.
//   - decode_with for the big-endian variant that matches encode's layout.
