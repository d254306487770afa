use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};
use url::Url;

use crate::fetcher::Fetcher;
use crate::parser::{self, links};
use crate::record::Record;

/// Follow the pager from `base` until a page has no next link.
///
/// Records come back in page order, then document order within a page.
/// There is no cycle detection: a site whose pager loops back will be walked
/// until `max_pages` (if set) stops it.
pub async fn walk(fetcher: &Fetcher, base: &Url, max_pages: Option<usize>) -> Result<Vec<Record>> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")?);

    let mut records = Vec::new();
    let mut pages = 0usize;
    let mut next = Some(base.clone());

    while let Some(url) = next.take() {
        let html = fetcher.fetch(&url).await?;
        let page = parser::process_page(&html).with_context(|| format!("Failed to parse {}", url))?;
        pages += 1;

        info!(url = %url, quotes = page.records.len(), "Fetched page {}", pages);
        records.extend(page.records);
        pb.set_message(format!("{} pages, {} quotes", pages, records.len()));
        pb.tick();

        let Some(href) = page.next_href else { break };
        if max_pages.is_some_and(|cap| pages >= cap) {
            warn!("Stopping after {} pages; {} was not followed", pages, href);
            break;
        }
        let resolved = links::resolve(base, &href)?;
        debug!(href = %href, resolved = %resolved, "Next page");
        next = Some(resolved);
    }

    pb.finish_and_clear();
    info!("Collected {} quotes from {} pages", records.len(), pages);
    Ok(records)
}
