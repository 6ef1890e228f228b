// Compact Bits - Free and Open Source Software Statement
//
// This project, compact-bits, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/integration_test.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file contains end-to-end tests that load saved getblock results from
// disk and turn them into checkpoints.
//
// Tree Location:
// - tests/integration_test.rs (integration tests)
// - Depends on: compact-bits, tempfile, serde_json

#[cfg(test)]
mod tests {
    use compact_bits::source::{CHECKPOINT_INTERVAL, load_block_records, select_checkpoints};
    use compact_bits::{CompactBits, SourceError};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_checkpoints_from_json_lines_file() {
        let file = write_temp(concat!(
            r#"{"result":{"hash":"9b7bce58999062b63bfb18586813c42491fa32b4c5ebd8ace8340c8d4a1b2f34","height":2016,"time":1386474927,"difficulty":0.00024414},"error":null,"id":"curltest"}"#,
            "\n",
            r#"{"result":{"hash":"a3c94e2ec9b7e5c2b1e4bbbfd9b1f9b1a7d3e3b1c2d4e5f6a7b8c9d0e1f2a3b4","height":2017,"time":1386475000,"difficulty":9},"error":null,"id":"curltest"}"#,
            "\n",
            r#"{"result":{"hash":"4d4a3b2c1d0e9f8a7b6c5d4e3f2a1b0c9d8e7f6a5b4c3d2e1f0a9b8c7d6e5f4a","height":4032,"time":1386711931,"difficulty":65535.5},"error":null,"id":"curltest"}"#,
            "\n",
        ));

        let records = load_block_records(file.path()).unwrap();
        assert_eq!(records.len(), 3);

        let checkpoints = select_checkpoints(&records, CHECKPOINT_INTERVAL).unwrap();
        assert_eq!(checkpoints.len(), 2);
        assert_eq!(checkpoints[0].height, 2016);
        assert_eq!(checkpoints[0].timestamp, 1386474927);
        assert_eq!(checkpoints[0].target, CompactBits::from_bytes([0x01, 0x00, 0x00, 0x00]));
        // 65535 = 0xffff, sign-guarded to three bytes
        assert_eq!(checkpoints[1].target, CompactBits::from_bytes([0x03, 0x00, 0xff, 0xff]));
    }

    #[test]
    fn test_checkpoints_from_json_array_file() {
        let file = write_temp(
            r#"[
                {"hash":"aa","height":6048,"time":3,"difficulty":1234},
                {"hash":"bb","height":2016,"time":1,"difficulty":1}
            ]"#,
        );
        let records = load_block_records(file.path()).unwrap();
        let checkpoints = select_checkpoints(&records, 2016).unwrap();
        let heights: Vec<u64> = checkpoints.iter().map(|c| c.height).collect();
        assert_eq!(heights, vec![2016, 6048]);
        assert_eq!(checkpoints[1].target.to_hex(), "0204d200");
    }

    #[test]
    fn test_checkpoint_serializes_as_json_line() {
        let file = write_temp(r#"{"hash":"cc","height":2016,"time":7,"difficulty":5}"#);
        let records = load_block_records(file.path()).unwrap();
        let checkpoints = select_checkpoints(&records, 2016).unwrap();
        let line = serde_json::to_string(&checkpoints[0]).unwrap();
        assert_eq!(line, r#"{"height":2016,"hash":"cc","timestamp":7,"target":"01050000"}"#);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.jsonl");
        match load_block_records(&path) {
            Err(SourceError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}

// Changelog:
// - v1.0.0 (2026-10-14): Initial integration tests for saved block ingest.
