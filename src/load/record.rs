use serde::Deserialize;

/// One row of a shard as stored in the CSV. Fields are bound by header
/// name, so the shard's unnamed leading index column is never read.
/// Numeric columns stay as text; they are either passed through or
/// recoded, never computed on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawRecord {
    pub client_id: String,
    pub age: String,
    pub job: String,
    pub marital: String,
    pub education: String,
    pub credit_default: String,
    pub mortgage: String,
    pub number_contacts: String,
    pub contact_duration: String,
    pub previous_campaign_contacts: String,
    pub previous_outcome: String,
    pub campaign_outcome: String,
    pub month: String,
    pub day: String,
    pub cons_price_idx: String,
    pub euribor_three_months: String,
}

/// Header row of a shard, index column first.
pub const RAW_HEADERS: [&str; 17] = [
    "",
    "client_id",
    "age",
    "job",
    "marital",
    "education",
    "credit_default",
    "mortgage",
    "number_contacts",
    "contact_duration",
    "previous_campaign_contacts",
    "previous_outcome",
    "campaign_outcome",
    "month",
    "day",
    "cons_price_idx",
    "euribor_three_months",
];
