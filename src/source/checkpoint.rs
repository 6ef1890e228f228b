// Compact Bits - Free and Open Source Software Statement
//
// This project, compact-bits, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/source/checkpoint.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file selects checkpoint blocks at a fixed height interval and encodes
// their difficulty into compact bits, located in the source subdirectory.
//
// Tree Location:
// - src/source/checkpoint.rs (checkpoint selection)
// - Depends on: core::compact, serde, log

use crate::core::compact::encode;
use crate::core::types::{CompactBits, target_from_difficulty};
use crate::source::{BlockRecord, SourceError};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

const LOG_TARGET: &str = "compact_bits::source::checkpoint";

/// Retarget interval in blocks
pub const CHECKPOINT_INTERVAL: u64 = 2016;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub height: u64,
    pub hash: String,
    pub timestamp: i64,
    pub target: CompactBits,
}

impl Checkpoint {
    pub fn from_record(record: &BlockRecord) -> Result<Self, SourceError> {
        let target = target_from_difficulty(&record.difficulty)
            .and_then(|value| encode(&value))
            .map_err(|source| SourceError::Codec {
                height: record.height,
                source,
            })?;
        Ok(Self {
            height: record.height,
            hash: record.hash.clone(),
            timestamp: record.time,
            target,
        })
    }
}

/// Encode every record whose height is a positive multiple of `interval`,
/// in ascending height order. Repeated heights keep the first occurrence.
pub fn select_checkpoints(records: &[BlockRecord], interval: u64) -> Result<Vec<Checkpoint>, SourceError> {
    if interval == 0 {
        return Err(SourceError::InvalidInterval);
    }

    let mut selected: Vec<&BlockRecord> = records
        .iter()
        .filter(|record| record.height > 0 && record.height % interval == 0)
        .collect();
    selected.sort_by_key(|record| record.height);
    selected.dedup_by_key(|record| record.height);

    let skipped = records.len() - selected.len();
    if skipped > 0 {
        debug!(target: LOG_TARGET, "Skipped {} records off the {}-block interval", skipped, interval);
    }
    if selected.is_empty() && !records.is_empty() {
        warn!(target: LOG_TARGET, "No records fall on a {}-block checkpoint height", interval);
    }

    selected.into_iter().map(Checkpoint::from_record).collect()
}


// Changelog:
// - v1.0.0 (2026-10-14): Initial checkpoint selection.
//   - Filters by interval, sorts by height and encodes difficulty as compact bits.
