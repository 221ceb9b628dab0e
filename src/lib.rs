pub mod clean;
pub mod config;
pub mod load;
pub mod pipeline;
pub mod verify;
pub mod write;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::CleanerConfig;
pub use pipeline::{clean_campaign_data, CleanSummary};
pub use verify::{verify_output_dir, VerifyReport};
