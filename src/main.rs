use anyhow::Result;
use campaign_cleaner::{clean_campaign_data, CleanerConfig};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
    info!("startup");

    // ─── 2) fixed layout ─────────────────────────────────────────────
    let cfg = CleanerConfig::default();

    // ─── 3) load → split → write ─────────────────────────────────────
    let summary = clean_campaign_data(&cfg)?;
    for table in [&summary.client, &summary.campaign, &summary.economics] {
        info!(path = %table.path.display(), rows = table.rows, bytes = table.bytes, "output");
    }

    info!("all done");
    Ok(())
}
