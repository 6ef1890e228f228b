// Compact Bits - Free and Open Source Software Statement
//
// This project, compact-bits, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/source/mod.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file is the module declaration for reading previously saved block
// data, located in the source subdirectory. It declares the record parser and
// the checkpoint selection logic and their shared error type.
//
// Tree Location:
// - src/source/mod.rs (source module entry point)
// - Submodules: block, checkpoint

pub mod block;
pub mod checkpoint;

use crate::core::error::CodecError;
use std::path::PathBuf;
use thiserror::Error;

// Re-export key types for convenience
pub use block::{BlockRecord, load_block_records, parse_block_records};
pub use checkpoint::{CHECKPOINT_INTERVAL, Checkpoint, select_checkpoints};

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("IO operation failed on {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed block record at entry {entry}")]
    Json {
        entry: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("RPC error in saved response: {0}")]
    Rpc(serde_json::Value),

    #[error("Block at height {height}: {source}")]
    Codec {
        height: u64,
        #[source]
        source: CodecError,
    },

    #[error("Checkpoint interval must be positive")]
    InvalidInterval,
}

// Changelog:
// - v1.0.0 (2026-10-14): Initial source module.
//   - Declares block and checkpoint submodules and SourceError.
