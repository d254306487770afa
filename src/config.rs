use std::path::PathBuf;
use std::time::Duration;

use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://quotes.toscrape.com/";
pub const DEFAULT_OUTPUT: &str = "quotes.csv";

/// Settings for one run, fixed at startup.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// First page fetched; also the base every next-page href is resolved against.
    pub base_url: Url,
    pub output: PathBuf,
    /// `None` walks until the pager runs out.
    pub max_pages: Option<usize>,
    pub timeout: Option<Duration>,
}
