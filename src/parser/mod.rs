pub mod links;
pub mod quotes;

use anyhow::Result;
use scraper::Html;

use crate::record::Record;

/// Everything the walker needs from one listing page.
pub struct ParsedPage {
    pub records: Vec<Record>,
    /// Raw `href` of the next-page anchor, unresolved.
    pub next_href: Option<String>,
}

/// Two lookups over one parsed document: quote nodes, then the pager.
pub fn process_page(html: &str) -> Result<ParsedPage> {
    let document = Html::parse_document(html);
    let records = quotes::extract(&document, &quotes::QUOTE_SEL)?;
    let next_href = links::next_href(&document)?;
    Ok(ParsedPage { records, next_href })
}

// ── Tests ──
