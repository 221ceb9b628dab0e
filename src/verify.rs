// src/verify.rs
use anyhow::{anyhow, ensure, Context, Result};
use chrono::{Datelike, NaiveDate};
use csv::ReaderBuilder;
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::{debug, instrument};

use crate::clean::{CampaignRow, ClientRow, EconomicsRow};
use crate::config::{CAMPAIGN_FILE, CLIENT_FILE, CONTACT_YEAR, ECONOMICS_FILE};
use crate::write::Table;

/// Row counts of a checked output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyReport {
    pub rows: usize,
    pub missing_education: usize,
    pub positive_outcomes: usize,
}

fn read_table<T: Table + DeserializeOwned>(dir: &Path, file_name: &str) -> Result<Vec<T>> {
    let path = dir.join(file_name);
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(&path)
        .with_context(|| format!("opening {:?}", path))?;

    let headers = rdr
        .headers()
        .with_context(|| format!("reading header of {}", file_name))?;
    ensure!(
        headers.iter().eq(T::HEADER.iter().copied()),
        "{} has header {:?}, expected {:?}",
        file_name,
        headers,
        T::HEADER
    );

    let mut rows = Vec::new();
    for (idx, result) in rdr.deserialize::<T>().enumerate() {
        rows.push(result.with_context(|| format!("{} row {}", file_name, idx))?);
    }
    debug!(file = file_name, rows = rows.len(), "read table back");
    Ok(rows)
}

fn check_flag(value: u8, file_name: &str, idx: usize, column: &str) -> Result<()> {
    ensure!(
        value <= 1,
        "{} row {}: {} is {}, expected 0 or 1",
        file_name,
        idx,
        column,
        value
    );
    Ok(())
}

fn check_client(row: &ClientRow, idx: usize) -> Result<()> {
    ensure!(
        !row.job.contains('.') && !row.job.contains('-'),
        "{} row {}: job {:?} still has '.' or '-'",
        CLIENT_FILE,
        idx,
        row.job
    );
    if let Some(education) = &row.education {
        ensure!(
            !education.contains('.') && education != "unknown",
            "{} row {}: education {:?} was not cleaned",
            CLIENT_FILE,
            idx,
            education
        );
    }
    check_flag(row.credit_default, CLIENT_FILE, idx, "credit_default")?;
    check_flag(row.mortgage, CLIENT_FILE, idx, "mortgage")
}

fn check_campaign(row: &CampaignRow, idx: usize) -> Result<()> {
    check_flag(row.previous_outcome, CAMPAIGN_FILE, idx, "previous_outcome")?;
    check_flag(row.campaign_outcome, CAMPAIGN_FILE, idx, "campaign_outcome")?;

    let date = NaiveDate::parse_from_str(&row.last_contact_date, "%Y-%m-%d").map_err(|e| {
        anyhow!(
            "{} row {}: last_contact_date {:?}: {}",
            CAMPAIGN_FILE,
            idx,
            row.last_contact_date,
            e
        )
    })?;
    ensure!(
        date.year() == CONTACT_YEAR
            && row.last_contact_date.len() == 10
            && date.format("%Y-%m-%d").to_string() == row.last_contact_date,
        "{} row {}: last_contact_date {:?} is not a zero-padded {} date",
        CAMPAIGN_FILE,
        idx,
        row.last_contact_date,
        CONTACT_YEAR
    );
    Ok(())
}

/// Re-read the three derived tables in `dir` and check that they line up
/// row for row and that every recoded column holds a cleaned value.
#[instrument(level = "info", skip(dir), fields(dir = %dir.as_ref().display()))]
pub fn verify_output_dir<P: AsRef<Path>>(dir: P) -> Result<VerifyReport> {
    let dir = dir.as_ref();
    let clients: Vec<ClientRow> = read_table(dir, CLIENT_FILE)?;
    let campaigns: Vec<CampaignRow> = read_table(dir, CAMPAIGN_FILE)?;
    let economics: Vec<EconomicsRow> = read_table(dir, ECONOMICS_FILE)?;

    ensure!(
        clients.len() == campaigns.len() && clients.len() == economics.len(),
        "row counts differ: {}={}, {}={}, {}={}",
        CLIENT_FILE,
        clients.len(),
        CAMPAIGN_FILE,
        campaigns.len(),
        ECONOMICS_FILE,
        economics.len()
    );

    for (idx, ((client, campaign), econ)) in clients
        .iter()
        .zip(campaigns.iter())
        .zip(economics.iter())
        .enumerate()
    {
        ensure!(
            client.client_id == campaign.client_id && client.client_id == econ.client_id,
            "row {}: client_id mismatch ({:?}, {:?}, {:?})",
            idx,
            client.client_id,
            campaign.client_id,
            econ.client_id
        );
        check_client(client, idx)?;
        check_campaign(campaign, idx)?;
    }

    Ok(VerifyReport {
        rows: clients.len(),
        missing_education: clients.iter().filter(|c| c.education.is_none()).count(),
        positive_outcomes: campaigns.iter().filter(|c| c.campaign_outcome == 1).count(),
    })
}
