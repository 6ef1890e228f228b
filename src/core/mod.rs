// Compact Bits - Free and Open Source Software Statement
//
// This project, compact-bits, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/mod.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file is the module declaration for the core codec of compact-bits,
// located in the core subdirectory. It declares submodules and re-exports
// key types for use throughout the project.

pub mod bigint;
pub mod compact;
pub mod error;
pub mod types;

// Re-export the most commonly used items
pub use compact::{decode, decode_slice, decode_with, encode};
pub use error::{CodecError, CodecResult};
pub use types::{Args, ByteOrder, CompactBits, DecodePolicy, Target, U256};

// Changelog:
// - v1.0.0 (2026-10-14): Initial core module.
//   - Declares bigint, compact, error and types submodules.
