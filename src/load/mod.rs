// src/load/mod.rs
use anyhow::{anyhow, Context, Result};
use csv::{ReaderBuilder, StringRecord};
use std::{
    fs::File,
    io::{Cursor, Read},
    path::Path,
};
use tracing::{debug, info, instrument};
use zip::ZipArchive;

use crate::config::CleanerConfig;

pub mod record;

pub use record::{RawRecord, RAW_HEADERS};

/// Columns a shard header must carry. Everything else, including the
/// leading index column, is ignored.
fn missing_columns(headers: &StringRecord) -> Vec<&'static str> {
    RAW_HEADERS
        .iter()
        .skip(1)
        .copied()
        .filter(|name| !headers.iter().any(|h| h == *name))
        .collect()
}

/// Parse one decompressed shard. `source` is only used in error messages.
pub fn parse_shard<R: Read>(reader: R, source: &str) -> Result<Vec<RawRecord>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = rdr
        .headers()
        .with_context(|| format!("reading header row of {}", source))?
        .clone();
    let missing = missing_columns(&headers);
    if !missing.is_empty() {
        return Err(anyhow!(
            "{} is missing column(s): {}",
            source,
            missing.join(", ")
        ));
    }
    debug!(source, index = headers.get(0).unwrap_or(""), "dropping index column");

    let mut records = Vec::new();
    for (idx, result) in rdr.deserialize::<RawRecord>().enumerate() {
        let record =
            result.with_context(|| format!("CSV parse error in {} at record {}", source, idx))?;
        records.push(record);
    }
    Ok(records)
}

/// Open `zip_path`, read the `entry_name` CSV fully into memory, and parse it.
#[instrument(level = "debug", skip(zip_path), fields(path = %zip_path.as_ref().display()))]
pub fn load_shard<P: AsRef<Path>>(zip_path: P, entry_name: &str) -> Result<Vec<RawRecord>> {
    let zip_path = zip_path.as_ref();
    let file = File::open(zip_path)
        .with_context(|| format!("Failed to open ZIP file: {:?}", zip_path))?;
    let mut archive = ZipArchive::new(file)
        .with_context(|| format!("Failed to read ZIP archive: {:?}", zip_path))?;

    let buf = {
        let mut entry = archive
            .by_name(entry_name)
            .with_context(|| format!("{} not found in {:?}", entry_name, zip_path))?;
        let mut buf = Vec::with_capacity(entry.size() as usize);
        entry
            .read_to_end(&mut buf)
            .with_context(|| format!("Failed to read {} into memory", entry_name))?;
        buf
    };
    // archive (and its file handle) released before parsing
    drop(archive);

    parse_shard(Cursor::new(buf), entry_name)
}

/// Load every shard in numeric order and concatenate them. A record's
/// position in the returned vector is its new sequential index.
#[instrument(level = "info", skip(cfg), fields(input = %cfg.input_dir.display()))]
pub fn load_shards(cfg: &CleanerConfig) -> Result<Vec<RawRecord>> {
    let mut all = Vec::new();
    for i in 0..cfg.shard_count {
        let path = cfg.shard_archive_path(i);
        let entry = CleanerConfig::shard_entry_name(i);
        let records = load_shard(&path, &entry)?;
        info!(shard = i, rows = records.len(), "loaded shard");
        all.extend(records);
    }
    info!(rows = all.len(), shards = cfg.shard_count, "concatenated shards");
    Ok(all)
}
