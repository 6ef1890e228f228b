// Compact Bits - Free and Open Source Software Statement
//
// File: src/main.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// Command-line front end: encode, decode and checkpoints subcommands.

use anyhow::{Context, Result};
use clap::Parser;
use compact_bits::{
    core::{
        compact::truncated_bytes,
        types::{Args, ByteOrder, Command, CompactBits, DecodePolicy, parse_target},
    },
    decode_with, encode,
    source::{load_block_records, select_checkpoints},
    utils::{format::FormatUtils, logging::init_logging},
};
use log::{debug, info, warn};
use std::io::{self, Write};
use std::path::Path;

const LOG_TARGET: &str = "compact_bits::main";

fn main() -> Result<()> {
    let args = Args::parse();

    // Validate arguments
    if let Err(err) = args.validate() {
        eprintln!("❌ Error: {}", err);
        std::process::exit(1);
    }

    init_logging(args.log_config.as_deref(), args.log_level)?;
    debug!(target: LOG_TARGET, "Arguments: {:?}", args);

    match &args.command {
        Command::Encode { target } => handle_encode(target),
        Command::Decode { bits, order, strict } => handle_decode(bits, *order, DecodePolicy::from_strict(*strict)),
        Command::Checkpoints { file, interval } => handle_checkpoints(file, *interval),
    }
}

fn handle_encode(target: &str) -> Result<()> {
    let value = parse_target(target)?;
    let bits = encode(&value).with_context(|| format!("Cannot encode target {}", target))?;

    let dropped = truncated_bytes(&value)?;
    if dropped > 0 {
        info!(target: LOG_TARGET, "🎯 {}: {}", FormatUtils::format_target(&value), FormatUtils::format_truncation(dropped));
    }

    println!("{}", FormatUtils::format_bits(&bits));
    Ok(())
}

fn handle_decode(bits: &str, order: ByteOrder, policy: DecodePolicy) -> Result<()> {
    let compact = CompactBits::from_hex(bits)?;
    if order == ByteOrder::LittleEndian {
        debug!(target: LOG_TARGET, "Using little-endian mantissa weighting; pass --order be to match encode");
    }
    let value = decode_with(compact, order, policy).with_context(|| format!("Cannot decode {}", compact))?;
    println!("{}", value);
    Ok(())
}

fn handle_checkpoints(file: &Path, interval: u64) -> Result<()> {
    let records = load_block_records(file)?;
    let checkpoints = select_checkpoints(&records, interval)?;
    if checkpoints.is_empty() {
        warn!(target: LOG_TARGET, "⚠️ No checkpoints in {:?}", file);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for checkpoint in &checkpoints {
        serde_json::to_writer(&mut out, checkpoint)?;
        writeln!(out)?;
    }
    info!(target: LOG_TARGET, "📊 Wrote {} checkpoints from {} records", checkpoints.len(), records.len());
    Ok(())
}
