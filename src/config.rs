use std::path::{Path, PathBuf};

/// Fixed layout of one cleaning run: where the shards live, how they are
/// named, and where the three derived tables go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanerConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Number of shard archives, numbered `0..shard_count`.
    pub shard_count: usize,
    /// Year stamped on every `last_contact_date`.
    pub contact_year: i32,
}

pub const INPUT_DIR: &str = "files/input";
pub const OUTPUT_DIR: &str = "files/output";
pub const SHARD_COUNT: usize = 10;
pub const CONTACT_YEAR: i32 = 2022;

pub const CLIENT_FILE: &str = "client.csv";
pub const CAMPAIGN_FILE: &str = "campaign.csv";
pub const ECONOMICS_FILE: &str = "economics.csv";

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(INPUT_DIR),
            output_dir: PathBuf::from(OUTPUT_DIR),
            shard_count: SHARD_COUNT,
            contact_year: CONTACT_YEAR,
        }
    }
}

impl CleanerConfig {
    /// Same layout as the default, but with both directories under `root`.
    pub fn rooted_at(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            input_dir: root.join(INPUT_DIR),
            output_dir: root.join(OUTPUT_DIR),
            ..Self::default()
        }
    }

    /// Archive name for shard `i`. The "campaing" spelling is what the
    /// upstream files are actually called.
    pub fn shard_archive_name(i: usize) -> String {
        format!("bank-marketing-campaing-{}.csv.zip", i)
    }

    /// Name of the single CSV entry inside shard `i`.
    pub fn shard_entry_name(i: usize) -> String {
        format!("bank_marketing_{}.csv", i)
    }

    pub fn shard_archive_path(&self, i: usize) -> PathBuf {
        self.input_dir.join(Self::shard_archive_name(i))
    }
}
