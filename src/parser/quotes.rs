use std::sync::LazyLock;

use anyhow::{Context, Result};
use scraper::{ElementRef, Html, Selector};

use crate::record::Record;

pub static QUOTE_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".quote").unwrap());
static TEXT_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".text").unwrap());
static AUTHOR_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".author").unwrap());
static TAG_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".tags .tag").unwrap());

/// Map every node matching `records` to a [`Record`], in document order.
///
/// A quote node without its `.text` or `.author` child fails the whole page.
pub fn extract(document: &Html, records: &Selector) -> Result<Vec<Record>> {
    document
        .select(records)
        .enumerate()
        .map(|(i, node)| parse_single(node).with_context(|| format!("Malformed quote #{}", i + 1)))
        .collect()
}

fn parse_single(node: ElementRef) -> Result<Record> {
    Ok(Record {
        primary_text: first_text(node, &TEXT_SEL, ".text")?,
        attribution: first_text(node, &AUTHOR_SEL, ".author")?,
        categories: node.select(&TAG_SEL).map(text_of).collect(),
    })
}

fn first_text(node: ElementRef, sel: &Selector, name: &str) -> Result<String> {
    node.select(sel)
        .next()
        .map(text_of)
        .with_context(|| format!("missing `{}` element", name))
}

// Concatenated text nodes, untrimmed.
fn text_of(el: ElementRef) -> String {
    el.text().collect()
}
