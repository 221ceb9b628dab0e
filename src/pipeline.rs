use anyhow::Result;
use std::time::Instant;
use tracing::{info, instrument};

use crate::{
    clean::split_records,
    config::{CleanerConfig, CAMPAIGN_FILE, CLIENT_FILE, ECONOMICS_FILE},
    load::load_shards,
    write::{write_table, WrittenTable},
};

/// Outcome of one cleaning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanSummary {
    pub input_rows: u64,
    pub client: WrittenTable,
    pub campaign: WrittenTable,
    pub economics: WrittenTable,
}

impl CleanSummary {
    pub fn total_bytes(&self) -> u64 {
        self.client.bytes + self.campaign.bytes + self.economics.bytes
    }
}

/// Read every shard, split the concatenated rows into the client, campaign
/// and economics tables, and write them to the output directory. The first
/// error of any kind aborts the run.
#[instrument(level = "info", skip(cfg), fields(input = %cfg.input_dir.display(), output = %cfg.output_dir.display()))]
pub fn clean_campaign_data(cfg: &CleanerConfig) -> Result<CleanSummary> {
    let start = Instant::now();

    let records = load_shards(cfg)?;
    let tables = split_records(&records, cfg.contact_year)?;

    let client = write_table(&cfg.output_dir, CLIENT_FILE, &tables.clients)?;
    let campaign = write_table(&cfg.output_dir, CAMPAIGN_FILE, &tables.campaigns)?;
    let economics = write_table(&cfg.output_dir, ECONOMICS_FILE, &tables.economics)?;

    let summary = CleanSummary {
        input_rows: records.len() as u64,
        client,
        campaign,
        economics,
    };
    info!(
        rows = summary.input_rows,
        bytes = summary.total_bytes(),
        elapsed = ?start.elapsed(),
        "clean complete"
    );
    Ok(summary)
}
