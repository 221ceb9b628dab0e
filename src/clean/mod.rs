// src/clean/mod.rs
use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;

pub mod tables;

pub use tables::{split_record, split_records, CampaignRow, ClientRow, DerivedTables, EconomicsRow};

/// Drop every "." and turn every "-" into "_".
pub fn clean_job(raw: &str) -> String {
    raw.replace('.', "").replace('-', "_")
}

/// Turn every "." into "_"; the literal "unknown" becomes null.
pub fn clean_education(raw: &str) -> Option<String> {
    let cleaned = raw.replace('.', "_");
    if cleaned == "unknown" {
        None
    } else {
        Some(cleaned)
    }
}

/// 1 for exactly "yes", 0 for anything else (missing included).
pub fn yes_flag(raw: &str) -> u8 {
    u8::from(raw == "yes")
}

/// 1 for exactly "success", 0 for anything else.
pub fn success_flag(raw: &str) -> u8 {
    u8::from(raw == "success")
}

/// "jan" → 1 … "dec" → 12.
pub fn month_number(abbrev: &str) -> Option<u32> {
    let n = match abbrev {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(n)
}

/// Build the `YYYY-MM-DD` contact date from a month abbreviation and a
/// day-of-month. Unknown months and impossible dates are errors.
pub fn last_contact_date(month: &str, day: &str, year: i32) -> Result<String> {
    let m = month_number(month).ok_or_else(|| anyhow!("unrecognised month {:?}", month))?;
    let d: u32 = day
        .trim()
        .parse()
        .with_context(|| format!("day {:?} is not a number", day))?;
    let date = NaiveDate::from_ymd_opt(year, m, d)
        .ok_or_else(|| anyhow!("{}-{:02}-{:02} is not a calendar date", year, m, d))?;
    Ok(date.format("%Y-%m-%d").to_string())
}
