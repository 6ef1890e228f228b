// Compact Bits - Free and Open Source Software Statement
//
// This project, compact-bits, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/lib.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file serves as the main library entry point for compact-bits, located
// at the root of the source tree. It exports all public modules and types
// that other crates or the binary can use.
//
// Tree Location:
// - src/lib.rs (root library file)
// - Exports modules: core, source, utils

pub mod core;
pub mod source;
pub mod utils;

// Re-export commonly used types at the crate root for convenience
pub use crate::core::{ByteOrder, CodecError, CompactBits, DecodePolicy, Target, decode, decode_with, encode};
pub use crate::source::{Checkpoint, SourceError};

// Changelog:
// - v1.0.0 (2026-10-14): Initial library root.
//   - Exports the codec, the saved-block source and utilities.
