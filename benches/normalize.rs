// benches/normalize.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ks_scrape::{core::html, extract::extract_row, value::normalize};

// A typical statistics table: label / value pairs with every value shape
const ROWS: &[(&str, &str)] = &[
    ("Market Cap (intraday)", "62.92B"),
    ("Enterprise Value", "148.33B"),
    ("Trailing P/E", "N/A"),
    ("Forward P/E", "7.58"),
    ("PEG Ratio (5 yr expected)", "0.75"),
    ("Profit Margin", "4.86%"),
    ("Operating Cash Flow (ttm)", "-1,234.5k"),
    ("Shares Short (Dec 14, 2020)", "22.27M"),
    ("Dividend Date", "Mar 17, 2020"),
    ("Last Split Factor", "3:2"),
    ("S&P500 52-Week Change", "15.76%"),
    ("Fiscal Year Ends", "Dec 30, 2020"),
];

fn page() -> String {
    let mut doc = String::with_capacity(16 * 1024);
    doc.push_str("<html><body><table><tbody>");
    for _ in 0..8 {
        for (label, value) in ROWS {
            doc.push_str(&format!("<tr><td><span>{label}</span><sup>1</sup></td><td>{value}</td></tr>"));
        }
    }
    doc.push_str("</tbody></table></body></html>");
    doc
}

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize_cells", |b| {
        b.iter(|| {
            for (_, value) in ROWS {
                black_box(normalize(black_box(value)));
            }
        })
    });

    c.bench_function("extract_rows", |b| {
        b.iter(|| {
            ROWS.iter()
                .filter_map(|(l, v)| extract_row(&[*l, *v]))
                .count()
        })
    });

    let doc = page();
    c.bench_function("parse_page", |b| {
        b.iter(|| {
            let rows = html::table_rows(black_box(&doc));
            black_box(rows.len())
        })
    });
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
