use std::sync::LazyLock;

use anyhow::{Context, Result};
use scraper::{Html, Selector};
use url::Url;

static NEXT_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".next a").unwrap());

/// Raw `href` of the pager's next anchor, if the page has one.
pub fn next_href(document: &Html) -> Result<Option<String>> {
    let Some(anchor) = document.select(&NEXT_SEL).next() else {
        return Ok(None);
    };
    let href = anchor
        .value()
        .attr("href")
        .context("next-page anchor has no href")?;
    Ok(Some(href.to_string()))
}

/// Resolve `href` against the site base. Absolute hrefs come back unchanged.
pub fn resolve(base: &Url, href: &str) -> Result<Url> {
    base.join(href)
        .with_context(|| format!("Cannot resolve next-page href {:?} against {}", href, base))
}
