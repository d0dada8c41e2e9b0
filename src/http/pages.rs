//! HTML rendering for the report pages. Plain string building against a
//! shared shell with the nav bar; all record content is escaped.

use crate::dataset::{Record, COLUMNS};
use chrono::Utc;
use std::fmt::Write;

const NAV: [(&str, &str); 5] = [
    ("/", "Records"),
    ("/graphs", "Graphs"),
    ("/duplicates", "Duplicates"),
    ("/corrections", "Corrections"),
    ("/accuracy", "Accuracy"),
];

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap `body` in the page shell: title, nav links, generation footer.
pub fn page(title: &str, body: &str) -> String {
    let nav: String = NAV
        .iter()
        .map(|(href, label)| format!(r#"<a href="{href}">{label}</a>"#))
        .collect::<Vec<_>>()
        .join(" | ");
    format!(
        "<!DOCTYPE html>\n<html><head><title>{title}</title>\
         <style>body{{font-family:sans-serif;margin:2em}}\
         table{{border-collapse:collapse}}\
         td,th{{border:1px solid #999;padding:4px 8px}}\
         nav{{margin-bottom:1.5em}}</style></head>\
         <body><nav>{nav}</nav><h1>{title}</h1>{body}\
         <footer><small>Report generated at {}</small></footer>\
         </body></html>",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
        title = escape_html(title),
    )
}

fn cell(field: &Option<String>) -> String {
    match field {
        Some(value) => escape_html(value),
        None => String::new(),
    }
}

/// A `<table>` of records under the fixed five-column header.
pub fn records_table(records: &[Record]) -> String {
    let mut html = String::from("<table><tr>");
    for column in COLUMNS {
        let _ = write!(html, "<th>{column}</th>");
    }
    html.push_str("</tr>");
    for record in records {
        html.push_str("<tr>");
        for field in record.fields() {
            let _ = write!(html, "<td>{}</td>", cell(field));
        }
        html.push_str("</tr>");
    }
    html.push_str("</table>");
    html
}

pub fn index_page(records: &[Record]) -> String {
    page("CRM Records", &records_table(records))
}

pub fn graphs_page(duplicate_chart: &str, missing_chart: Option<&str>) -> String {
    let mut body = format!(r#"<img src="{duplicate_chart}" alt="Duplicate records chart"/>"#);
    match missing_chart {
        Some(uri) => {
            let _ = write!(body, r#"<img src="{uri}" alt="Missing data chart"/>"#);
        }
        None => body.push_str("<p>No missing data.</p>"),
    }
    page("CRM Graphs", &body)
}

pub fn duplicates_page(pairs: &[(&Record, &Record)]) -> String {
    if pairs.is_empty() {
        return page("Duplicate Records", "<p>No duplicate records found.</p>");
    }
    let mut body = String::new();
    for (idx, (first, second)) in pairs.iter().enumerate() {
        let _ = write!(body, "<h2>Pair {}</h2>", idx + 1);
        body.push_str(&records_table(&[(*first).clone(), (*second).clone()]));
    }
    page("Duplicate Records", &body)
}

pub fn corrections_page(records: &[Record]) -> String {
    page("Corrected Records", &records_table(records))
}

pub fn accuracy_page(accuracy: f64, chart: &str) -> String {
    let body = format!(
        r#"<p>Data accuracy: <strong>{accuracy:.2}%</strong></p><img src="{chart}" alt="Accuracy chart"/>"#
    );
    page("CRM Data Accuracy", &body)
}
