/// Column names of the output file, in the declared field order of [`Record`].
pub const FIELD_NAMES: [&str; 3] = ["primary_text", "attribution", "categories"];

/// One quote scraped from a listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub primary_text: String,
    pub attribution: String,
    pub categories: Vec<String>,
}

impl Record {
    /// Cells in `FIELD_NAMES` order, with the categories collapsed into one list token.
    pub fn to_row(&self) -> [String; 3] {
        [
            self.primary_text.clone(),
            self.attribution.clone(),
            render_list(&self.categories),
        ]
    }
}

/// Render labels as a single bracketed token: `['a', 'b']`, or `[]` when empty.
pub fn render_list(items: &[String]) -> String {
    let inner = items
        .iter()
        .map(|s| quote_item(s))
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", inner)
}

fn quote_item(s: &str) -> String {
    // Prefer single quotes; switch to double only when that avoids escaping.
    let q = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(q);
    for c in s.chars() {
        if c == '\\' || c == q {
            out.push('\\');
        }
        out.push(c);
    }
    out.push(q);
    out
}
