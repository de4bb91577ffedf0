//! The publish pipeline: load store, select, enrich, render, write.
//!
//! This is what the daily scheduled trigger runs, and what the admin app's
//! regenerate endpoint re-runs on demand.

use chrono::NaiveDate;
use tracing::info;

use crate::apod::ApodClient;
use crate::config::SiteConfig;
use crate::error::Result;
use crate::render::{render_page, write_page};
use crate::select::select_daily;
use crate::store::StoreFile;

/// Generate and overwrite the static page for the given date.
///
/// `with_apod` controls the network enrichment; the APOD fetch is best-effort
/// either way and never fails the build.
pub async fn publish(config: &SiteConfig, date: NaiveDate, with_apod: bool) -> Result<()> {
    let store = StoreFile::new(&config.data_path).load().await?;
    let selection = select_daily(&store, date, config.quote_count);

    let apod = if with_apod {
        ApodClient::new(&config.nasa_api_key).fetch_or_none().await
    } else {
        None
    };

    let html = render_page(&selection, apod.as_ref());
    write_page(&config.output_path, &html).await?;

    info!(
        %date,
        quotes = selection.quotes.len(),
        poem = selection.poem.is_some(),
        apod = apod.is_some(),
        output = %config.output_path.display(),
        "Daily page published"
    );
    Ok(())
}
