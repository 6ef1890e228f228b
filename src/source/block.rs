// Compact Bits - Free and Open Source Software Statement
//
// This project, compact-bits, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/source/block.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file parses saved getblock results into block records, located in the
// source subdirectory. Input is either a JSON array or JSON lines, and each
// entry may be a bare result or a full JSON-RPC response envelope.
//
// Tree Location:
// - src/source/block.rs (block record parsing)
// - Depends on: serde, serde_json, log

use crate::source::SourceError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

const LOG_TARGET: &str = "compact_bits::source::block";

/// Fields of a getblock result used for checkpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockRecord {
    /// Block height
    pub height: u64,

    /// Block hash as reported by the node
    pub hash: String,

    /// Block timestamp (seconds since the Unix epoch)
    pub time: i64,

    /// Difficulty exactly as it appeared in the JSON
    pub difficulty: serde_json::Number,
}

/// Parse a JSON array or JSON lines of block records
pub fn parse_block_records(input: &str) -> Result<Vec<BlockRecord>, SourceError> {
    let trimmed = input.trim_start();
    let records = if trimmed.starts_with('[') {
        let entries: Vec<Value> =
            serde_json::from_str(trimmed).map_err(|source| SourceError::Json { entry: 1, source })?;
        entries
            .into_iter()
            .enumerate()
            .map(|(index, value)| record_from_value(value, index + 1))
            .collect::<Result<Vec<_>, _>>()?
    } else {
        let mut records = Vec::new();
        for (index, line) in input.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let value: Value = serde_json::from_str(line)
                .map_err(|source| SourceError::Json { entry: index + 1, source })?;
            records.push(record_from_value(value, index + 1)?);
        }
        records
    };
    debug!(target: LOG_TARGET, "Parsed {} block records", records.len());
    Ok(records)
}

/// Read and parse a file of block records
pub fn load_block_records(path: &Path) -> Result<Vec<BlockRecord>, SourceError> {
    let contents = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_block_records(&contents)?;
    info!(target: LOG_TARGET, "Loaded {} block records from {:?}", records.len(), path);
    Ok(records)
}

fn record_from_value(value: Value, entry: usize) -> Result<BlockRecord, SourceError> {
    let block = match value {
        Value::Object(mut envelope) if envelope.contains_key("result") => match envelope.remove("error") {
            Some(Value::Null) | None => envelope.remove("result").unwrap_or(Value::Null),
            Some(error) => return Err(SourceError::Rpc(error)),
        },
        other => other,
    };
    serde_json::from_value(block).map_err(|source| SourceError::Json { entry, source })
}


// Changelog:
// - v1.0.0 (2026-10-14): Initial block record parser.
//   - Accepts JSON arrays, JSON lines and JSON-RPC envelopes.
