use anyhow::{Context, Result};
use csv::WriterBuilder;
use serde::Serialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{info, instrument};

use crate::clean::{CampaignRow, ClientRow, EconomicsRow};

/// A derived table row with a fixed output header.
pub trait Table: Serialize {
    const HEADER: &'static [&'static str];
}

impl Table for ClientRow {
    const HEADER: &'static [&'static str] = &[
        "client_id",
        "age",
        "job",
        "marital",
        "education",
        "credit_default",
        "mortgage",
    ];
}

impl Table for CampaignRow {
    const HEADER: &'static [&'static str] = &[
        "client_id",
        "number_contacts",
        "contact_duration",
        "previous_campaign_contacts",
        "previous_outcome",
        "campaign_outcome",
        "last_contact_date",
    ];
}

impl Table for EconomicsRow {
    const HEADER: &'static [&'static str] =
        &["client_id", "cons_price_idx", "euribor_three_months"];
}

/// What landed on disk for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenTable {
    pub path: PathBuf,
    pub rows: u64,
    pub bytes: u64,
}

/// Write `rows` to `dir/file_name` as a headed, comma-separated CSV with no
/// index column. The header is written even when there are no rows.
///
/// Writes go to a hidden temp file in `dir` which is then renamed over the
/// target, so a failed run never leaves a half-written table behind.
#[instrument(level = "debug", skip(dir, rows), fields(dir = %dir.as_ref().display()))]
pub fn write_table<T: Table, P: AsRef<Path>>(
    dir: P,
    file_name: &str,
    rows: &[T],
) -> Result<WrittenTable> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).with_context(|| format!("creating output directory {:?}", dir))?;

    let path = dir.join(file_name);
    let tmp_path = dir.join(format!(".{}.tmp", file_name));

    {
        let mut wtr = WriterBuilder::new()
            .has_headers(false)
            .from_path(&tmp_path)
            .with_context(|| format!("creating {:?}", tmp_path))?;
        wtr.write_record(T::HEADER)
            .with_context(|| format!("writing header of {}", file_name))?;
        for (idx, row) in rows.iter().enumerate() {
            wtr.serialize(row)
                .with_context(|| format!("writing row {} of {}", idx, file_name))?;
        }
        wtr.flush()
            .with_context(|| format!("flushing {:?}", tmp_path))?;
    }

    fs::rename(&tmp_path, &path)
        .with_context(|| format!("renaming {:?} -> {:?}", tmp_path, path))?;

    let bytes = fs::metadata(&path)
        .with_context(|| format!("getting metadata of {:?}", path))?
        .len();
    info!(file = file_name, rows = rows.len(), bytes, "wrote table");

    Ok(WrittenTable {
        path,
        rows: rows.len() as u64,
        bytes,
    })
}
