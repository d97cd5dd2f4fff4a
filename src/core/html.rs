// src/core/html.rs
//
// Statistics page → rows of cell text.
// Only `<tbody>` rows count; header rows and layout tables outside a body are
// ignored. Footnote markers (`<sup>1</sup>`) are dropped before the text is
// collected, so "Forward Annual Dividend Yield 4" reads without the "4".

use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;

/// Every `<tr>` inside every `<tbody>`, in document order, as the visible
/// text of its `<td>` cells.
pub fn table_rows(doc: &str) -> Vec<Vec<String>> {
    let (Ok(tr_selector), Ok(td_selector)) = (Selector::parse("tbody tr"), Selector::parse("td")) else {
        return Vec::new();
    };

    let document = Html::parse_document(doc);
    document
        .select(&tr_selector)
        .map(|tr| tr.select(&td_selector).map(cell_text).collect())
        .collect()
}

fn cell_text(td: ElementRef<'_>) -> String {
    let mut out = s!();
    push_visible_text(td, &mut out);
    normalize_ws(&out)
}

fn push_visible_text(el: ElementRef<'_>, out: &mut String) {
    for child in el.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child_el) = ElementRef::wrap(child) {
            if child_el.value().name() != "sup" {
                push_visible_text(child_el, out);
            }
        }
    }
}
