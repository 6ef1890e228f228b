// Compact Bits - Free and Open Source Software Statement
//
// This project, compact-bits, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/format.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file provides utility functions for rendering targets and compact bits
// in the command-line output, located in the utils subdirectory.
//
// Tree Location:
// - src/utils/format.rs (formatting utilities)
// - Depends on: num-bigint

use crate::core::types::{CompactBits, Target};

/// Utility functions for formatting codec values
pub struct FormatUtils;

impl FormatUtils {
    /// Format compact bits as an unsigned hex literal, exponent byte first
    pub fn format_bits(bits: &CompactBits) -> String {
        bits.to_string()
    }

    /// Format a target in decimal with its hex form alongside
    pub fn format_target(target: &Target) -> String {
        format!("{} ({:#x})", target, target)
    }

    /// Format a byte count lost to truncation
    pub fn format_truncation(bytes: usize) -> String {
        match bytes {
            0 => "exact".to_string(),
            1 => "1 low-order byte dropped".to_string(),
            n => format!("{} low-order bytes dropped", n),
        }
    }
}


// Changelog:
// - v1.0.0 (2026-10-14): Initial formatting helpers.
//   - Replaced hashrate and duration formatting with target and bits rendering.
