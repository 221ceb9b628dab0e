use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::{clean_education, clean_job, last_contact_date, success_flag, yes_flag};
use crate::load::RawRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRow {
    pub client_id: String,
    pub age: String,
    pub job: String,
    pub marital: String,
    /// Written as an empty field when null.
    pub education: Option<String>,
    pub credit_default: u8,
    pub mortgage: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignRow {
    pub client_id: String,
    pub number_contacts: String,
    pub contact_duration: String,
    pub previous_campaign_contacts: String,
    pub previous_outcome: u8,
    pub campaign_outcome: u8,
    pub last_contact_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EconomicsRow {
    pub client_id: String,
    pub cons_price_idx: String,
    pub euribor_three_months: String,
}

/// The three projections of the concatenated shards, row-aligned.
#[derive(Debug, Default)]
pub struct DerivedTables {
    pub clients: Vec<ClientRow>,
    pub campaigns: Vec<CampaignRow>,
    pub economics: Vec<EconomicsRow>,
}

impl DerivedTables {
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

pub fn split_record(
    raw: &RawRecord,
    contact_year: i32,
) -> Result<(ClientRow, CampaignRow, EconomicsRow)> {
    let client = ClientRow {
        client_id: raw.client_id.clone(),
        age: raw.age.clone(),
        job: clean_job(&raw.job),
        marital: raw.marital.clone(),
        education: clean_education(&raw.education),
        credit_default: yes_flag(&raw.credit_default),
        mortgage: yes_flag(&raw.mortgage),
    };

    let campaign = CampaignRow {
        client_id: raw.client_id.clone(),
        number_contacts: raw.number_contacts.clone(),
        contact_duration: raw.contact_duration.clone(),
        previous_campaign_contacts: raw.previous_campaign_contacts.clone(),
        previous_outcome: success_flag(&raw.previous_outcome),
        campaign_outcome: yes_flag(&raw.campaign_outcome),
        last_contact_date: last_contact_date(&raw.month, &raw.day, contact_year)?,
    };

    let economics = EconomicsRow {
        client_id: raw.client_id.clone(),
        cons_price_idx: raw.cons_price_idx.clone(),
        euribor_three_months: raw.euribor_three_months.clone(),
    };

    Ok((client, campaign, economics))
}

/// Split every record; the first failure aborts with its row position.
pub fn split_records(records: &[RawRecord], contact_year: i32) -> Result<DerivedTables> {
    let mut tables = DerivedTables {
        clients: Vec::with_capacity(records.len()),
        campaigns: Vec::with_capacity(records.len()),
        economics: Vec::with_capacity(records.len()),
    };

    for (idx, raw) in records.iter().enumerate() {
        let (client, campaign, economics) = split_record(raw, contact_year)
            .with_context(|| format!("row {} (client_id {})", idx, raw.client_id))?;
        tables.clients.push(client);
        tables.campaigns.push(campaign);
        tables.economics.push(economics);
    }

    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::SAMPLE_ROWS;

    fn raw(row: &[&str; 16]) -> RawRecord {
        RawRecord {
            client_id: row[0].into(),
            age: row[1].into(),
            job: row[2].into(),
            marital: row[3].into(),
            education: row[4].into(),
            credit_default: row[5].into(),
            mortgage: row[6].into(),
            number_contacts: row[7].into(),
            contact_duration: row[8].into(),
            previous_campaign_contacts: row[9].into(),
            previous_outcome: row[10].into(),
            campaign_outcome: row[11].into(),
            month: row[12].into(),
            day: row[13].into(),
            cons_price_idx: row[14].into(),
            euribor_three_months: row[15].into(),
        }
    }

    #[test]
    fn test_split_reference_record() -> Result<()> {
        let (client, campaign, economics) = split_record(&raw(&SAMPLE_ROWS[0]), 2022)?;

        assert_eq!(
            client,
            ClientRow {
                client_id: "1".into(),
                age: "56".into(),
                job: "admin".into(),
                marital: "married".into(),
                education: Some("basic_4y".into()),
                credit_default: 0,
                mortgage: 1,
            }
        );
        assert_eq!(
            campaign,
            CampaignRow {
                client_id: "1".into(),
                number_contacts: "1".into(),
                contact_duration: "261".into(),
                previous_campaign_contacts: "0".into(),
                previous_outcome: 0,
                campaign_outcome: 1,
                last_contact_date: "2022-05-21".into(),
            }
        );
        assert_eq!(economics.cons_price_idx, "93.994");
        assert_eq!(economics.euribor_three_months, "4.857");
        Ok(())
    }

    #[test]
    fn test_missing_values_recode_to_zero() -> Result<()> {
        let (client, campaign, _) = split_record(&raw(&SAMPLE_ROWS[2]), 2022)?;
        assert_eq!(client.job, "self_employed");
        assert_eq!(client.credit_default, 1);
        assert_eq!(client.mortgage, 0);
        assert_eq!(campaign.campaign_outcome, 0);
        assert_eq!(campaign.last_contact_date, "2022-12-31");
        Ok(())
    }

    #[test]
    fn test_split_records_keeps_alignment() -> Result<()> {
        let records: Vec<RawRecord> = SAMPLE_ROWS.iter().map(raw).collect();
        let tables = split_records(&records, 2022)?;

        assert_eq!(tables.len(), SAMPLE_ROWS.len());
        assert_eq!(tables.campaigns.len(), SAMPLE_ROWS.len());
        assert_eq!(tables.economics.len(), SAMPLE_ROWS.len());
        for i in 0..tables.len() {
            assert_eq!(tables.clients[i].client_id, records[i].client_id);
            assert_eq!(tables.campaigns[i].client_id, records[i].client_id);
            assert_eq!(tables.economics[i].client_id, records[i].client_id);
        }
        assert_eq!(tables.clients[1].education, None);
        assert_eq!(tables.campaigns[1].previous_outcome, 1);
        Ok(())
    }

    #[test]
    fn test_bad_date_names_the_row() {
        let mut records: Vec<RawRecord> = SAMPLE_ROWS.iter().map(raw).collect();
        records[2].month = "xyz".into();

        let err = split_records(&records, 2022).unwrap_err();
        assert_eq!(err.to_string(), "row 2 (client_id 3)");
        assert!(format!("{:#}", err).contains("unrecognised month \"xyz\""));
    }
}
