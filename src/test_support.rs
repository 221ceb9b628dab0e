//! Shard fixtures shared by the unit tests.
use anyhow::Result;
use std::{fs::File, io::Write, path::Path};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

use crate::load::RAW_HEADERS;

/// Raw rows in header order, index column excluded.
pub const SAMPLE_ROWS: [[&str; 16]; 4] = [
    [
        "1", "56", "admin.", "married", "basic.4y", "unknown", "yes", "1", "261", "0",
        "nonexistent", "yes", "may", "21", "93.994", "4.857",
    ],
    [
        "2", "57", "blue-collar", "single", "unknown", "no", "no", "2", "149", "1", "success",
        "no", "jun", "5", "93.994", "4.857",
    ],
    [
        "3", "37", "self-employed", "divorced", "high.school", "yes", "", "1", "226", "0",
        "failure", "", "dec", "31", "94.465", "4.962",
    ],
    [
        "4", "40", "services", "married", "university.degree", "no", "yes", "3", "151", "2",
        "success", "yes", "feb", "28", "92.893", "1.313",
    ],
];

pub fn init_test_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,campaign_cleaner=debug")),
        )
        .with_test_writer()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Render rows as a shard CSV, numbering the index column from 0.
pub fn shard_csv(rows: &[[&str; 16]]) -> String {
    let mut out = RAW_HEADERS.join(",");
    out.push('\n');
    for (idx, row) in rows.iter().enumerate() {
        out.push_str(&format!("{},{}\n", idx, row.join(",")));
    }
    out
}

/// Write `content` as the only entry of a deflated archive at `path`.
pub fn write_shard_zip(path: &Path, entry_name: &str, content: &str) -> Result<()> {
    let mut zip = ZipWriter::new(File::create(path)?);
    let options =
        SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    zip.start_file(entry_name, options)?;
    zip.write_all(content.as_bytes())?;
    zip.finish()?;
    Ok(())
}
