// Check the tables in the configured output directory after a clean.

use anyhow::Result;
use campaign_cleaner::{verify_output_dir, CleanerConfig};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let cfg = CleanerConfig::default();
    let report = verify_output_dir(&cfg.output_dir)?;
    info!(
        rows = report.rows,
        missing_education = report.missing_education,
        positive_outcomes = report.positive_outcomes,
        "output verified"
    );
    Ok(())
}
