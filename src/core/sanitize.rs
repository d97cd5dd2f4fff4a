// src/core/sanitize.rs

/// Collapse sequences of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Free text → lowercase slug.
///
/// Drops `N/A`, spells `%` as `pct`, drops `-`, `(`, `)` and `,`, spells
/// `S&P` as `snp`, lowercases, and joins the remaining words with `_`.
/// Applying it twice gives the same result as applying it once.
///
/// ```
/// use ks_scrape::core::sanitize::canonicalize;
/// assert_eq!(canonicalize("Market Cap (intraday)"), "market_cap_intraday");
/// assert_eq!(canonicalize("S&P500 52-Week Change"), "snp500_52week_change");
/// assert_eq!(canonicalize("N/A"), "");
/// ```
pub fn canonicalize(raw: &str) -> String {
    let s = raw
        .replace("N/A", "")
        .replace('%', "pct")
        .replace(['-', '(', ')', ','], "")
        .replace("S&P", "snp")
        .to_lowercase();
    s.split_whitespace().collect::<Vec<_>>().join("_")
}
